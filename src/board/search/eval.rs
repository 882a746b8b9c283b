//! Static evaluation: material, mobility and checkmate.

use super::super::{Color, GameStatus, MoveGenerator, Position, Square};
use super::constants::{MATERIAL_SCALE, MATE_SCORE, MOBILITY_WEIGHT};

/// Material balance in tenths of a pawn, positive when `perspective` is ahead.
#[must_use]
pub fn material_balance(position: &Position, perspective: Color) -> i32 {
    Square::all()
        .filter_map(|sq| position.piece_at(sq))
        .map(|(color, piece)| {
            let value = piece.material() * MATERIAL_SCALE;
            if color == perspective {
                value
            } else {
                -value
            }
        })
        .sum()
}

/// Score `position` from `perspective`'s point of view.
///
/// Mobility counts the side to move's legal moves directly and the waiting
/// side's on a copy with the move handed over.
pub fn evaluate(position: &Position, generator: &mut MoveGenerator, perspective: Color) -> i32 {
    let mover = position.side_to_move();
    let moves = generator.generate(position);
    let status = moves.status();
    let mover_mobility = moves.len() as i32;
    let waiting_mobility = generator.generate(&position.with_side_flipped()).len() as i32;

    let mobility = if mover == perspective {
        mover_mobility - waiting_mobility
    } else {
        waiting_mobility - mover_mobility
    };

    let mate = match status {
        GameStatus::Checkmate { loser } if loser == perspective => -MATE_SCORE,
        GameStatus::Checkmate { .. } => MATE_SCORE,
        GameStatus::Ongoing | GameStatus::Stalemate => 0,
    };

    mate + material_balance(position, perspective) + MOBILITY_WEIGHT * mobility
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_position_is_level() {
        let position = Position::new();
        let mut generator = MoveGenerator::new();
        assert_eq!(evaluate(&position, &mut generator, Color::White), 0);
        assert_eq!(evaluate(&position, &mut generator, Color::Black), 0);
    }

    #[test]
    fn test_material_in_tenths() {
        let position = Position::from_fen("4k3/8/8/8/8/8/8/3QK3 w - - 0 1");
        assert_eq!(material_balance(&position, Color::White), 90);
        assert_eq!(material_balance(&position, Color::Black), -90);
    }

    #[test]
    fn test_checkmate_bonus_goes_to_winner() {
        // Back-rank mate, Black to move and mated
        let position = Position::from_fen("4Q1k1/5ppp/8/8/8/8/8/7K b - - 1 1");
        let mut generator = MoveGenerator::new();
        let white = evaluate(&position, &mut generator, Color::White);
        let black = evaluate(&position, &mut generator, Color::Black);
        assert!(white > MATE_SCORE / 2);
        assert_eq!(white, -black);
    }
}
