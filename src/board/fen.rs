use std::str::FromStr;

use super::error::{FenError, MoveParseError};
use super::state::row_col;
use super::{CastleSide, CastlingRights, Color, Move, Piece, Position, Square};

impl Position {
    /// Parse a position from FEN notation (six fields).
    ///
    /// Decodes into a fresh position; on error nothing is returned.
    pub fn try_from_fen(fen: &str) -> Result<Self, FenError> {
        let mut position = Position::empty();
        let parts: Vec<&str> = fen.split_whitespace().collect();

        if parts.len() != 6 {
            return Err(FenError::WrongFieldCount { found: parts.len() });
        }

        // Piece placement, rank 8 first
        let ranks: Vec<&str> = parts[0].split('/').collect();
        if ranks.len() != 8 {
            return Err(FenError::InvalidRank { rank: ranks.len() });
        }
        for (row, rank_str) in (0u8..).zip(&ranks) {
            let mut col: u8 = 0;
            for c in rank_str.chars() {
                if let Some(run) = c.to_digit(10) {
                    if run == 0 || run > 8 {
                        return Err(FenError::InvalidPiece { char: c });
                    }
                    col += run as u8;
                    if col > 8 {
                        return Err(FenError::TooManyFiles {
                            rank: usize::from(row),
                            files: usize::from(col),
                        });
                    }
                } else {
                    let piece = Piece::from_char(c).ok_or(FenError::InvalidPiece { char: c })?;
                    let color = if c.is_ascii_uppercase() {
                        Color::White
                    } else {
                        Color::Black
                    };
                    if col >= 8 {
                        return Err(FenError::TooManyFiles {
                            rank: usize::from(row),
                            files: usize::from(col) + 1,
                        });
                    }
                    position.put(row_col(row, col), color, piece);
                    col += 1;
                }
            }
            if col < 8 {
                return Err(FenError::TooFewFiles {
                    rank: usize::from(row),
                    files: usize::from(col),
                });
            }
        }

        position.side_to_move = match parts[1] {
            "w" => Color::White,
            "b" => Color::Black,
            other => {
                return Err(FenError::InvalidSideToMove {
                    found: other.to_string(),
                })
            }
        };

        let mut castling = CastlingRights::none();
        if parts[2] != "-" {
            for c in parts[2].chars() {
                match c {
                    'K' => castling.grant(Color::White, CastleSide::King),
                    'Q' => castling.grant(Color::White, CastleSide::Queen),
                    'k' => castling.grant(Color::Black, CastleSide::King),
                    'q' => castling.grant(Color::Black, CastleSide::Queen),
                    _ => return Err(FenError::InvalidCastling { char: c }),
                }
            }
        }
        position.castling = castling;

        position.en_passant_target = if parts[3] == "-" {
            None
        } else {
            let invalid = || FenError::InvalidEnPassant {
                found: parts[3].to_string(),
            };
            let sq: Square = parts[3].parse().map_err(|_| invalid())?;
            // Only the square skipped by a double push (rank 3 or 6) can be a target
            if sq.row() != 2 && sq.row() != 5 {
                return Err(invalid());
            }
            Some(sq)
        };

        position.halfmove_clock = parse_number(parts[4], "halfmove clock")?;
        position.fullmove_number = parse_number(parts[5], "fullmove number")?;
        Ok(position)
    }

    /// Parse a position from FEN notation.
    ///
    /// # Panics
    /// Panics if the FEN string is invalid. Use `try_from_fen` for fallible parsing.
    #[must_use]
    pub fn from_fen(fen: &str) -> Self {
        match Self::try_from_fen(fen) {
            Ok(position) => position,
            Err(err) => panic!("Invalid FEN string '{fen}': {err}"),
        }
    }

    /// Convert the position to FEN notation.
    #[must_use]
    pub fn to_fen(&self) -> String {
        let mut rows: Vec<String> = Vec::with_capacity(8);
        for row in 0..8u8 {
            let mut text = String::new();
            let mut empty = 0;
            for col in 0..8u8 {
                if let Some((color, piece)) = self.piece_at(row_col(row, col)) {
                    if empty > 0 {
                        text.push_str(&empty.to_string());
                        empty = 0;
                    }
                    text.push(piece.to_fen_char(color));
                } else {
                    empty += 1;
                }
            }
            if empty > 0 {
                text.push_str(&empty.to_string());
            }
            rows.push(text);
        }

        let active = match self.side_to_move {
            Color::White => "w",
            Color::Black => "b",
        };
        let ep = self
            .en_passant_target
            .map_or_else(|| "-".to_string(), |sq| sq.to_string());

        format!(
            "{} {} {} {} {} {}",
            rows.join("/"),
            active,
            self.castling.to_fen_field(),
            ep,
            self.halfmove_clock,
            self.fullmove_number
        )
    }

    /// Parse a move in coordinate notation (e.g., "e2e4", "e7e8q", "e1g1").
    ///
    /// Returns the matching legal move if found, or an error describing why parsing failed.
    ///
    /// # Example
    /// ```
    /// use mailbox_chess::board::Position;
    ///
    /// let position = Position::new();
    /// let mv = position.parse_move("e2e4").unwrap();
    /// assert_eq!(mv.to_string(), "e2e4");
    /// ```
    pub fn parse_move(&self, text: &str) -> Result<Move, MoveParseError> {
        if !text.is_ascii() || text.len() < 4 || text.len() > 5 {
            return Err(MoveParseError::InvalidLength {
                len: text.chars().count(),
            });
        }

        let invalid_square = || MoveParseError::InvalidSquare {
            notation: text.to_string(),
        };
        let from: Square = text[0..2].parse().map_err(|_| invalid_square())?;
        let to: Square = text[2..4].parse().map_err(|_| invalid_square())?;

        let promotion = match text[4..].chars().next() {
            Some(c) => {
                let piece = Piece::from_char(c).ok_or(MoveParseError::InvalidPromotion { char: c })?;
                if matches!(piece, Piece::Pawn | Piece::King) {
                    return Err(MoveParseError::InvalidPromotion { char: c });
                }
                Some(piece)
            }
            None => None,
        };

        self.legal_moves()
            .for_square(from)
            .iter()
            .copied()
            .find(|mv| mv.to() == to && mv.promotion() == promotion)
            .ok_or_else(|| MoveParseError::IllegalMove {
                notation: text.to_string(),
            })
    }
}

fn parse_number(field: &str, name: &'static str) -> Result<u32, FenError> {
    field.parse().map_err(|_| FenError::InvalidNumber {
        field: name,
        found: field.to_string(),
    })
}

impl FromStr for Position {
    type Err = FenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Position::try_from_fen(s)
    }
}
