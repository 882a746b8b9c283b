//! Game facade for interactive front ends.
//!
//! A `Game` keeps the legal moves of the current position cached, so a
//! view layer can ask for destinations per square on every frame without
//! rerunning generation, and classifies each applied move into a
//! [`MoveEvent`] for sound or animation hooks.

use log::debug;

use super::error::{FenError, MoveError, MoveParseError, SearchError};
use super::search::{self, SearchParams, SearchResult};
use super::{Color, GameStatus, LegalMoves, Move, MoveGenerator, Position, Square};

/// What the move just applied amounted to, most significant first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MoveEvent {
    Move,
    Capture,
    Castle,
    Promote,
    Check,
    Checkmate,
}

/// A position plus its cached legal moves.
#[derive(Clone, Debug)]
pub struct Game {
    position: Position,
    generator: MoveGenerator,
    legal: LegalMoves,
}

impl Game {
    /// A game from the standard initial position.
    #[must_use]
    pub fn new() -> Self {
        Game::from_position(Position::new())
    }

    /// # Errors
    /// Returns the `FenError` describing the malformed field.
    pub fn from_fen(fen: &str) -> Result<Self, FenError> {
        Position::try_from_fen(fen).map(Game::from_position)
    }

    #[must_use]
    pub fn from_position(position: Position) -> Self {
        let mut generator = MoveGenerator::new();
        let legal = generator.generate(&position);
        Game {
            position,
            generator,
            legal,
        }
    }

    #[must_use]
    pub fn position(&self) -> &Position {
        &self.position
    }

    #[must_use]
    pub fn legal_moves(&self) -> &LegalMoves {
        &self.legal
    }

    /// Legal moves starting on `sq`; empty for empty squares and for pieces
    /// of the side not to move.
    #[must_use]
    pub fn legal_destinations_for(&self, sq: Square) -> &[Move] {
        self.legal.for_square(sq)
    }

    /// Apply `mv` if it is legal and classify it.
    ///
    /// # Errors
    /// Returns `MoveError::IllegalMove` and leaves the game untouched when
    /// `mv` is not among the current legal moves.
    pub fn apply_move(&mut self, mv: Move) -> Result<MoveEvent, MoveError> {
        if !self.legal.contains(mv) {
            return Err(MoveError::IllegalMove { mv });
        }
        self.position.apply(mv);
        self.refresh();

        let event = match self.legal.status() {
            GameStatus::Checkmate { .. } => MoveEvent::Checkmate,
            _ if self.legal.in_check() => MoveEvent::Check,
            _ if mv.promotion().is_some() => MoveEvent::Promote,
            _ if mv.is_castling() => MoveEvent::Castle,
            _ if mv.is_capture() => MoveEvent::Capture,
            _ => MoveEvent::Move,
        };
        debug!("{mv}: {event:?}");
        Ok(event)
    }

    /// Apply a move given in coordinate notation (`e2e4`, `e7e8q`).
    ///
    /// # Errors
    /// Returns a `MoveParseError` for malformed text or an illegal move.
    pub fn apply_uci(&mut self, text: &str) -> Result<MoveEvent, MoveParseError> {
        let mv = self.position.parse_move(text)?;
        self.apply_move(mv).map_err(|_| MoveParseError::IllegalMove {
            notation: text.to_string(),
        })
    }

    /// Take back the last move; `None` when nothing has been played.
    pub fn undo(&mut self) -> Option<Move> {
        if self.position.history().is_empty() {
            return None;
        }
        let mv = self.position.unmove();
        self.refresh();
        debug!("undo {mv}");
        Some(mv)
    }

    /// The color that has been checkmated, if any.
    #[must_use]
    pub fn is_checkmated(&self) -> Option<Color> {
        match self.legal.status() {
            GameStatus::Checkmate { loser } => Some(loser),
            GameStatus::Ongoing | GameStatus::Stalemate => None,
        }
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.legal.status()
    }

    #[must_use]
    pub fn side_to_move(&self) -> Color {
        self.position.side_to_move()
    }

    #[must_use]
    pub fn current_fen(&self) -> String {
        self.position.to_fen()
    }

    /// Search the current position. The game state is unchanged afterwards.
    ///
    /// # Errors
    /// Returns `SearchError::InvalidDepth` for a negative depth.
    pub fn best_move(&mut self, params: &SearchParams) -> Result<SearchResult, SearchError> {
        search::best_move(&mut self.position, params)
    }

    fn refresh(&mut self) {
        self.legal = self.generator.generate(&self.position);
    }
}

impl Default for Game {
    fn default() -> Self {
        Game::new()
    }
}
