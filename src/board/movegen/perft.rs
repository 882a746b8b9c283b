use log::trace;

use super::super::{Move, Position};
use super::MoveGenerator;

impl Position {
    /// Count leaf nodes of the legal move tree to `depth` plies.
    pub fn perft(&mut self, depth: u32) -> u64 {
        let mut generator = MoveGenerator::new();
        perft_with(self, &mut generator, depth)
    }

    /// Node counts below each root move, in generation order.
    pub fn perft_divide(&mut self, depth: u32) -> Vec<(Move, u64)> {
        if depth == 0 {
            return Vec::new();
        }
        let mut generator = MoveGenerator::new();
        let moves = generator.generate(self);
        let mut counts = Vec::with_capacity(moves.len());
        for &mv in moves.iter() {
            self.apply(mv);
            let nodes = perft_with(self, &mut generator, depth - 1);
            self.unmove();
            trace!("{mv}: {nodes}");
            counts.push((mv, nodes));
        }
        counts
    }
}

fn perft_with(position: &mut Position, generator: &mut MoveGenerator, depth: u32) -> u64 {
    if depth == 0 {
        return 1;
    }

    let moves = generator.generate(position);
    if depth == 1 {
        return moves.len() as u64;
    }

    let mut nodes = 0;
    for &mv in moves.iter() {
        position.apply(mv);
        nodes += perft_with(position, generator, depth - 1);
        position.unmove();
    }
    nodes
}
