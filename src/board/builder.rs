//! Fluent builder for constructing chess positions.
//!
//! Allows creating positions piece by piece rather than parsing FEN strings.
//!
//! # Example
//! ```
//! use mailbox_chess::board::{Color, Piece, PositionBuilder, Square};
//!
//! let e1: Square = "e1".parse().unwrap();
//! let e8: Square = "e8".parse().unwrap();
//! let a2: Square = "a2".parse().unwrap();
//! let position = PositionBuilder::new()
//!     .piece(e1, Color::White, Piece::King)
//!     .piece(e8, Color::Black, Piece::King)
//!     .piece(a2, Color::White, Piece::Pawn)
//!     .side_to_move(Color::White)
//!     .build();
//! assert_eq!(position.legal_moves().len(), 7);
//! ```

use super::{CastleSide, CastlingRights, Color, Piece, Position, Square};

/// A fluent builder for constructing `Position` values.
#[derive(Clone, Debug)]
pub struct PositionBuilder {
    position: Position,
}

impl Default for PositionBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PositionBuilder {
    /// Create a builder for an empty board, White to move.
    #[must_use]
    pub fn new() -> Self {
        PositionBuilder {
            position: Position::empty(),
        }
    }

    /// Create a builder starting from the standard initial position.
    #[must_use]
    pub fn starting_position() -> Self {
        PositionBuilder {
            position: Position::new(),
        }
    }

    /// Place a piece on the board, replacing whatever stood there.
    #[must_use]
    pub fn piece(mut self, square: Square, color: Color, piece: Piece) -> Self {
        self.position.put(square, color, piece);
        self
    }

    /// Remove a piece from a square.
    #[must_use]
    pub fn clear(mut self, square: Square) -> Self {
        self.position.take(square);
        self
    }

    #[must_use]
    pub fn side_to_move(mut self, color: Color) -> Self {
        self.position.side_to_move = color;
        self
    }

    #[must_use]
    pub fn castling(mut self, rights: CastlingRights) -> Self {
        self.position.castling = rights;
        self
    }

    /// Grant one castling right.
    #[must_use]
    pub fn castle(mut self, color: Color, side: CastleSide) -> Self {
        self.position.castling.grant(color, side);
        self
    }

    #[must_use]
    pub fn no_castling_rights(mut self) -> Self {
        self.position.castling = CastlingRights::none();
        self
    }

    /// Set the en passant target square.
    #[must_use]
    pub fn en_passant(mut self, target: Square) -> Self {
        self.position.en_passant_target = Some(target);
        self
    }

    /// Set the halfmove clock (for 50-move rule).
    #[must_use]
    pub fn halfmove_clock(mut self, clock: u32) -> Self {
        self.position.halfmove_clock = clock;
        self
    }

    #[must_use]
    pub fn fullmove_number(mut self, number: u32) -> Self {
        self.position.fullmove_number = number;
        self
    }

    /// Build the position. Nothing is validated; kings may be missing.
    #[must_use]
    pub fn build(self) -> Position {
        self.position
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(s: &str) -> Square {
        s.parse().unwrap()
    }

    #[test]
    fn test_starting_position() {
        let built = PositionBuilder::starting_position().build();
        assert_eq!(built.to_fen(), Position::new().to_fen());
    }

    #[test]
    fn test_empty_board() {
        let position = PositionBuilder::new()
            .piece(sq("e1"), Color::White, Piece::King)
            .piece(sq("e8"), Color::Black, Piece::King)
            .build();
        assert_eq!(position.to_fen(), "4k3/8/8/8/8/8/8/4K3 w - - 0 1");
    }

    #[test]
    fn test_castling_rights() {
        let position = PositionBuilder::starting_position()
            .no_castling_rights()
            .castle(Color::White, CastleSide::King)
            .build();
        let rights = position.castling_rights();
        assert!(rights.has(Color::White, CastleSide::King));
        assert!(!rights.has(Color::White, CastleSide::Queen));
        assert!(!rights.has(Color::Black, CastleSide::King));
        assert!(!rights.has(Color::Black, CastleSide::Queen));
    }

    #[test]
    fn test_clocks_and_side() {
        let position = PositionBuilder::new()
            .piece(sq("e1"), Color::White, Piece::King)
            .piece(sq("e8"), Color::Black, Piece::King)
            .side_to_move(Color::Black)
            .halfmove_clock(12)
            .fullmove_number(30)
            .build();
        assert_eq!(position.to_fen(), "4k3/8/8/8/8/8/8/4K3 b - - 12 30");
    }

    #[test]
    fn test_clear_square() {
        let position = PositionBuilder::starting_position().clear(sq("a1")).build();
        assert!(position.piece_at(sq("a1")).is_none());
        assert!(position.piece_at(sq("b1")).is_some());
    }
}
