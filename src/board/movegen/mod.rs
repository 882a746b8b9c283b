//! Legal move generation.
//!
//! A refresh analyses the waiting side first and the side to move second.
//! The first pass records which squares the opponent protects, which of our
//! pieces are pinned and which enemy pieces give check; the second pass
//! emits our candidate moves, and a final filter applies the check and pin
//! restrictions. No move is ever played on the board to test legality.

mod kings;
mod pawns;
mod perft;
mod ray;

pub(crate) use kings::attacked_in;

use log::trace;

use super::{Bitboard, Color, Move, MoveList, Piece, Position, Square};

/// A piece giving check and the squares that would block it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Check {
    checker: Square,
    between: Bitboard,
}

impl Check {
    /// Square of the checking piece
    #[inline]
    #[must_use]
    pub fn checker(self) -> Square {
        self.checker
    }

    /// Squares strictly between the checker and the king (empty for
    /// knight, pawn and adjacent checks)
    #[inline]
    #[must_use]
    pub fn between(self) -> Bitboard {
        self.between
    }

    /// Destinations that resolve this check for a non-king piece
    #[inline]
    #[must_use]
    pub fn blocking(self) -> Bitboard {
        self.between | Bitboard::from_square(self.checker)
    }
}

/// Per-refresh safety state for both colors.
#[derive(Clone, Debug)]
pub struct Hazards {
    protected: [Bitboard; 2],
    pin_rays: [Bitboard; 64],
    checks: [Vec<Check>; 2],
}

impl Hazards {
    #[must_use]
    pub fn new() -> Self {
        Hazards {
            protected: [Bitboard::EMPTY; 2],
            pin_rays: [Bitboard::EMPTY; 64],
            checks: [Vec::new(), Vec::new()],
        }
    }

    fn clear(&mut self) {
        self.protected = [Bitboard::EMPTY; 2];
        self.pin_rays = [Bitboard::EMPTY; 64];
        for checks in &mut self.checks {
            checks.clear();
        }
    }

    /// Squares `color` attacks or defends
    #[inline]
    #[must_use]
    pub fn protected(&self, color: Color) -> Bitboard {
        self.protected[color.index()]
    }

    /// The ray a pinned piece on `sq` is confined to, pinning piece included
    #[inline]
    #[must_use]
    pub fn pin_ray(&self, sq: Square) -> Option<Bitboard> {
        let ray = self.pin_rays[sq.index()];
        (!ray.is_empty()).then_some(ray)
    }

    /// Checks currently given to `color`'s king
    #[inline]
    #[must_use]
    pub fn checks(&self, color: Color) -> &[Check] {
        &self.checks[color.index()]
    }
}

impl Default for Hazards {
    fn default() -> Self {
        Hazards::new()
    }
}

/// How the game stands for the side to move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GameStatus {
    Ongoing,
    Checkmate { loser: Color },
    Stalemate,
}

/// Legal moves of one side, grouped by origin square in ascending order.
#[derive(Clone, Debug)]
pub struct LegalMoves {
    moves: MoveList,
    ranges: [(u16, u16); 64],
    side: Color,
    checkers: Bitboard,
}

impl LegalMoves {
    fn new(moves: MoveList, side: Color, checks: &[Check]) -> Self {
        let mut ranges = [(0u16, 0u16); 64];
        let slice = moves.as_slice();
        let mut i = 0;
        while i < slice.len() {
            let from = slice[i].from();
            let start = i;
            while i < slice.len() && slice[i].from() == from {
                i += 1;
            }
            ranges[from.index()] = (start as u16, i as u16);
        }
        LegalMoves {
            moves,
            ranges,
            side,
            checkers: checks.iter().map(|check| check.checker).collect(),
        }
    }

    pub(crate) fn empty(side: Color) -> Self {
        LegalMoves {
            moves: MoveList::new(),
            ranges: [(0, 0); 64],
            side,
            checkers: Bitboard::EMPTY,
        }
    }

    /// Moves starting on `sq`; empty when no piece of the side to move stands there
    #[must_use]
    pub fn for_square(&self, sq: Square) -> &[Move] {
        let (start, end) = self.ranges[sq.index()];
        &self.moves.as_slice()[usize::from(start)..usize::from(end)]
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Move> {
        self.moves.iter()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Move] {
        self.moves.as_slice()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    #[must_use]
    pub fn contains(&self, mv: Move) -> bool {
        self.for_square(mv.from()).contains(&mv)
    }

    /// The color these moves belong to
    #[must_use]
    pub fn side(&self) -> Color {
        self.side
    }

    #[must_use]
    pub fn in_check(&self) -> bool {
        !self.checkers.is_empty()
    }

    /// Squares of the pieces checking the side to move
    #[must_use]
    pub fn checkers(&self) -> Bitboard {
        self.checkers
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        match (self.moves.is_empty(), self.in_check()) {
            (false, _) => GameStatus::Ongoing,
            (true, true) => GameStatus::Checkmate { loser: self.side },
            (true, false) => GameStatus::Stalemate,
        }
    }
}

impl<'a> IntoIterator for &'a LegalMoves {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.moves.iter()
    }
}

/// Owns the hazard state and refreshes it on every generation.
///
/// Reuse one generator across a search to keep the check lists allocated.
#[derive(Clone, Debug, Default)]
pub struct MoveGenerator {
    hazards: Hazards,
}

impl MoveGenerator {
    #[must_use]
    pub fn new() -> Self {
        MoveGenerator {
            hazards: Hazards::new(),
        }
    }

    /// Hazard state from the most recent refresh
    #[must_use]
    pub fn hazards(&self) -> &Hazards {
        &self.hazards
    }

    /// Refresh hazards for both colors and return the legal moves of the
    /// side to move.
    pub fn generate(&mut self, position: &Position) -> LegalMoves {
        let us = position.side_to_move();
        self.hazards.clear();

        Pass::new(position, us.opponent(), &mut self.hazards, None).run();

        let mut moves = MoveList::new();
        Pass::new(position, us, &mut self.hazards, Some(&mut moves)).run();
        let pseudo = moves.len();
        filter_moves(&mut moves, position, &self.hazards, us);

        trace!(
            "generated {} of {} candidate moves for {us}",
            moves.len(),
            pseudo
        );
        LegalMoves::new(moves, us, self.hazards.checks(us))
    }

    /// Legal moves for `color`, or an empty set without touching the hazard
    /// state when `color` is not the side to move.
    pub fn generate_for(&mut self, position: &Position, color: Color) -> LegalMoves {
        if color != position.side_to_move() {
            return LegalMoves::empty(color);
        }
        self.generate(position)
    }
}

/// Apply check and pin restrictions to the candidate moves of `us`.
fn filter_moves(moves: &mut MoveList, position: &Position, hazards: &Hazards, us: Color) {
    let checks = hazards.checks(us);
    moves.retain_from(0, |mv| {
        // The en-passant probe already tested the king on the resulting board
        if mv.is_en_passant() {
            return checks.len() < 2;
        }
        if position.piece_on(mv.from()) == Some(Piece::King) {
            return checks.iter().all(|check| !check.between.contains(mv.to()));
        }
        match checks {
            [] => {}
            [check] => {
                if !check.blocking().contains(mv.to()) {
                    return false;
                }
            }
            _ => return false,
        }
        hazards
            .pin_ray(mv.from())
            .map_or(true, |ray| ray.contains(mv.to()))
    });
}

/// One color's analysis over the whole board.
///
/// With a move list attached the pass also emits candidate moves; without
/// one it only records protection, pins and checks.
pub(super) struct Pass<'a> {
    position: &'a Position,
    color: Color,
    hazards: &'a mut Hazards,
    moves: Option<&'a mut MoveList>,
}

impl<'a> Pass<'a> {
    fn new(
        position: &'a Position,
        color: Color,
        hazards: &'a mut Hazards,
        moves: Option<&'a mut MoveList>,
    ) -> Self {
        Pass {
            position,
            color,
            hazards,
            moves,
        }
    }

    fn run(&mut self) {
        for sq in Square::all() {
            match self.position.piece_at(sq) {
                Some((color, piece)) if color == self.color => match piece {
                    Piece::Pawn => self.pawn(sq),
                    Piece::King => self.king(sq),
                    Piece::Knight | Piece::Bishop | Piece::Rook | Piece::Queen => {
                        self.piece_moves(sq, piece);
                    }
                },
                _ => {}
            }
        }
    }

    #[inline]
    fn emitting(&self) -> bool {
        self.moves.is_some()
    }

    #[inline]
    fn emit(&mut self, mv: Move) {
        if let Some(moves) = self.moves.as_deref_mut() {
            moves.push(mv);
        }
    }

    #[inline]
    fn protect(&mut self, sq: Square) {
        self.hazards.protected[self.color.index()].insert(sq);
    }

    /// Record a check on the enemy king given from `checker`.
    fn check(&mut self, checker: Square, between: Bitboard) {
        self.hazards.checks[self.color.opponent().index()].push(Check { checker, between });
    }

    /// A single step onto `to`: quiet move, capture, or check on the enemy king.
    fn step_to(&mut self, from: Square, to: Square) {
        self.protect(to);
        match self.position.piece_at(to) {
            None => self.emit(Move::quiet(from, to)),
            Some((color, _)) if color == self.color => {}
            Some((_, Piece::King)) => self.check(from, Bitboard::EMPTY),
            Some(_) => self.emit(Move::capture(from, to)),
        }
    }
}

impl Position {
    /// Legal moves for the side to move.
    #[must_use]
    pub fn legal_moves(&self) -> LegalMoves {
        MoveGenerator::new().generate(self)
    }

    /// True when any piece of `by` attacks `sq` on the current board.
    #[must_use]
    pub fn is_square_attacked(&self, sq: Square, by: Color) -> bool {
        attacked_in(&self.squares, sq, by)
    }

    /// True when `color`'s king is attacked.
    #[must_use]
    pub fn is_in_check(&self, color: Color) -> bool {
        self.king_square(color)
            .map_or(false, |king| self.is_square_attacked(king, color.opponent()))
    }
}
