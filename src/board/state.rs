use std::fmt;

use super::{CastleSide, CastlingRights, Color, Move, Piece, Square};

/// Everything `unmove` needs to invert one applied move.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HistoryEntry {
    pub(crate) mv: Move,
    pub(crate) captured: Option<(Color, Piece)>,
    pub(crate) previous_en_passant_target: Option<Square>,
    pub(crate) previous_halfmove_clock: u32,
    pub(crate) previous_fullmove_number: u32,
}

impl HistoryEntry {
    #[must_use]
    pub fn mv(&self) -> Move {
        self.mv
    }

    #[must_use]
    pub fn captured(&self) -> Option<(Color, Piece)> {
        self.captured
    }
}

/// A chess position plus the stack of moves applied to reach it.
///
/// Created once (initial layout or FEN) and then mutated in place by
/// `apply`/`unmove`. The history stack depth always equals the number of
/// plies currently applied on top of the set-up position.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Position {
    pub(crate) squares: [Option<(Color, Piece)>; 64],
    pub(crate) side_to_move: Color,
    pub(crate) castling: CastlingRights,
    pub(crate) en_passant_target: Option<Square>,
    pub(crate) halfmove_clock: u32,
    pub(crate) fullmove_number: u32,
    pub(crate) history: Vec<HistoryEntry>,
}

pub const START_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

impl Position {
    /// The standard initial position.
    #[must_use]
    pub fn new() -> Self {
        let mut position = Position::empty();
        let back_rank = [
            Piece::Rook,
            Piece::Knight,
            Piece::Bishop,
            Piece::Queen,
            Piece::King,
            Piece::Bishop,
            Piece::Knight,
            Piece::Rook,
        ];
        for (col, piece) in (0u8..).zip(back_rank) {
            position.put(row_col(0, col), Color::Black, piece);
            position.put(row_col(1, col), Color::Black, Piece::Pawn);
            position.put(row_col(6, col), Color::White, Piece::Pawn);
            position.put(row_col(7, col), Color::White, piece);
        }
        position.castling = CastlingRights::all();
        position
    }

    /// A board with no pieces, White to move, no castling rights.
    #[must_use]
    pub(crate) fn empty() -> Self {
        Position {
            squares: [None; 64],
            side_to_move: Color::White,
            castling: CastlingRights::none(),
            en_passant_target: None,
            halfmove_clock: 0,
            fullmove_number: 1,
            history: Vec::new(),
        }
    }

    #[inline]
    pub(crate) fn put(&mut self, sq: Square, color: Color, piece: Piece) {
        self.squares[sq.index()] = Some((color, piece));
    }

    #[inline]
    pub(crate) fn take(&mut self, sq: Square) -> Option<(Color, Piece)> {
        self.squares[sq.index()].take()
    }

    /// Color and piece on a square
    #[inline]
    #[must_use]
    pub fn piece_at(&self, sq: Square) -> Option<(Color, Piece)> {
        self.squares[sq.index()]
    }

    /// Get just the piece type on a square (without color)
    #[inline]
    #[must_use]
    pub fn piece_on(&self, sq: Square) -> Option<Piece> {
        self.piece_at(sq).map(|(_, piece)| piece)
    }

    /// Get just the color of the piece on a square
    #[inline]
    #[must_use]
    pub fn color_on(&self, sq: Square) -> Option<Color> {
        self.piece_at(sq).map(|(color, _)| color)
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self, sq: Square) -> bool {
        self.squares[sq.index()].is_none()
    }

    #[inline]
    #[must_use]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[must_use]
    pub fn castling_rights(&self) -> CastlingRights {
        self.castling
    }

    #[must_use]
    pub fn en_passant_target(&self) -> Option<Square> {
        self.en_passant_target
    }

    #[must_use]
    pub fn halfmove_clock(&self) -> u32 {
        self.halfmove_clock
    }

    #[must_use]
    pub fn fullmove_number(&self) -> u32 {
        self.fullmove_number
    }

    /// Applied moves, oldest first
    #[must_use]
    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    #[must_use]
    pub fn last_move(&self) -> Option<Move> {
        self.history.last().map(|entry| entry.mv)
    }

    /// Draw claim available under the fifty-move rule
    #[must_use]
    pub fn fifty_move_rule_reached(&self) -> bool {
        self.halfmove_clock >= 100
    }

    pub(crate) fn king_square(&self, color: Color) -> Option<Square> {
        Square::all().find(|&sq| self.piece_at(sq) == Some((color, Piece::King)))
    }

    /// A copy with the other side to move and no en-passant target, used to
    /// count the waiting side's moves. History is dropped.
    #[must_use]
    pub(crate) fn with_side_flipped(&self) -> Position {
        Position {
            squares: self.squares,
            side_to_move: self.side_to_move.opponent(),
            castling: self.castling,
            en_passant_target: None,
            halfmove_clock: self.halfmove_clock,
            fullmove_number: self.fullmove_number,
            history: Vec::new(),
        }
    }

    /// True when a rook of `color` still stands on its castling corner.
    pub(crate) fn has_castling_rook(&self, color: Color, side: CastleSide) -> bool {
        self.piece_at(row_col(color.back_row(), side.rook_col())) == Some((color, Piece::Rook))
    }
}

impl Default for Position {
    fn default() -> Self {
        Position::new()
    }
}

pub(crate) fn row_col(row: u8, col: u8) -> Square {
    Square::from_index_unchecked(usize::from(row) * 8 + usize::from(col))
}

/// Eight text ranks, rank 8 first, `.` for empty squares.
impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..8u8 {
            write!(f, "{} ", 8 - row)?;
            for col in 0..8u8 {
                let cell = match self.piece_at(row_col(row, col)) {
                    Some((color, piece)) => piece.to_fen_char(color),
                    None => '.',
                };
                write!(f, " {cell}")?;
            }
            writeln!(f)?;
        }
        write!(f, "   a b c d e f g h")
    }
}
