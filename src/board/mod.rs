//! Chess position, legal move generation, and game tree search.
//!
//! Squares live in a 10x12 mailbox frame for move geometry. Legality is
//! decided by a hazard analysis of both colors (protected squares, pins,
//! checks) rather than by playing and retracting each candidate move.
//!
//! # Example
//! ```
//! use mailbox_chess::board::{search, Position, SearchParams};
//!
//! let mut position = Position::new();
//! let moves = position.legal_moves();
//! println!("Starting position has {} legal moves", moves.len());
//!
//! let result = search::best_move(&mut position, &SearchParams::default().with_depth(2)).unwrap();
//! assert!(result.best_move.is_some());
//! ```

mod builder;
mod error;
mod fen;
mod game;
mod geometry;
mod make_unmake;
mod movegen;
pub mod prelude;
pub mod search;
mod state;
mod types;

#[cfg(test)]
mod tests;

// Public API - types users need
pub use builder::PositionBuilder;
pub use error::{FenError, MoveError, MoveParseError, SearchError, SquareError};
pub use game::{Game, MoveEvent};
pub use movegen::{Check, GameStatus, Hazards, LegalMoves, MoveGenerator};
pub use state::{HistoryEntry, Position, START_FEN};
pub use types::{
    Bitboard, BitboardIter, CastleSide, CastlingRights, Color, Move, MoveKind, MoveList, Piece,
    Promotion, Square, LOST_BEFORE_HISTORY,
};

// Public API - search entry points and configuration
pub use search::{best_move, random_move, SearchParams, SearchResult, SearchStrategy};
