//! Core chess types.
//!
//! This module contains the fundamental value types used throughout the engine:
//! - `Piece`, `Color` and `Promotion`
//! - `Square` - mailbox square index (a8 = 0, h1 = 63)
//! - `Bitboard` - set of squares
//! - `Move`, `MoveKind` and `MoveList`
//! - `CastlingRights` - castling state with loss bookkeeping

mod bitboard;
mod castling;
mod moves;
mod piece;
mod square;

pub use bitboard::{Bitboard, BitboardIter};
pub use castling::{CastleSide, CastlingRights, LOST_BEFORE_HISTORY};
pub use moves::{Move, MoveKind, MoveList};
pub use piece::{Color, Piece, Promotion};
pub use square::Square;
