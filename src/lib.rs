pub mod board;

pub use board::{Color, Game, Move, Piece, Position, Square};
