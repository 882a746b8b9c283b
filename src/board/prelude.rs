//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types and functions.
//!
//! # Example
//! ```
//! use mailbox_chess::board::prelude::*;
//!
//! let mut game = Game::new();
//! assert_eq!(game.apply_uci("e2e4"), Ok(MoveEvent::Move));
//! ```

pub use super::{
    best_move, Color, FenError, Game, GameStatus, LegalMoves, Move, MoveError, MoveEvent,
    MoveParseError, Piece, Position, SearchParams, SearchStrategy, Square,
};
