//! Square types and utilities.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::error::SquareError;

/// A square on the chess board, indexed 0..63 row-major from the top:
/// a8 = 0, h8 = 7, a1 = 56, h1 = 63.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Square(u8);

impl Square {
    /// Create a square from an index, `None` when off the board
    #[inline]
    #[must_use]
    pub const fn new(index: u8) -> Option<Self> {
        if index < 64 {
            Some(Square(index))
        } else {
            None
        }
    }

    /// Create a square from row (0 = rank 8) and column (0 = file a)
    #[inline]
    #[must_use]
    pub const fn from_row_col(row: u8, col: u8) -> Option<Self> {
        if row < 8 && col < 8 {
            Some(Square(row * 8 + col))
        } else {
            None
        }
    }

    #[inline]
    pub(crate) const fn from_index_unchecked(index: usize) -> Self {
        Square(index as u8)
    }

    /// Every square in index order
    pub fn all() -> impl Iterator<Item = Square> {
        (0..64u8).map(Square)
    }

    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Row from the top (0 = rank 8, 7 = rank 1)
    #[inline]
    #[must_use]
    pub const fn row(self) -> u8 {
        self.0 / 8
    }

    /// Column from the left (0 = file a)
    #[inline]
    #[must_use]
    pub const fn col(self) -> u8 {
        self.0 % 8
    }

    /// The square `rows` further down the board on the same file.
    /// Callers stay on the board; pawn geometry never leaves it here.
    #[inline]
    pub(crate) const fn offset_rows(self, rows: i8) -> Square {
        Square((self.0 as i8 + rows * 8) as u8)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (self.col() + b'a') as char, 8 - self.row())
    }
}

impl TryFrom<u8> for Square {
    type Error = SquareError;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        Square::new(index).ok_or(SquareError::OutOfRange { index })
    }
}

impl FromStr for Square {
    type Err = SquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || SquareError::InvalidNotation {
            notation: s.to_string(),
        };
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return Err(invalid());
        }
        let col = match bytes[0] {
            b @ b'a'..=b'h' => b - b'a',
            _ => return Err(invalid()),
        };
        let row = match bytes[1] {
            b @ b'1'..=b'8' => 7 - (b - b'1'),
            _ => return Err(invalid()),
        };
        Ok(Square(row * 8 + col))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_corner_indices() {
        assert_eq!("a8".parse::<Square>().unwrap().index(), 0);
        assert_eq!("h8".parse::<Square>().unwrap().index(), 7);
        assert_eq!("a1".parse::<Square>().unwrap().index(), 56);
        assert_eq!("h1".parse::<Square>().unwrap().index(), 63);
    }

    #[test]
    fn test_display_matches_parse() {
        for sq in Square::all() {
            assert_eq!(sq.to_string().parse::<Square>().unwrap(), sq);
        }
    }

    #[test]
    fn test_row_col() {
        let e4: Square = "e4".parse().unwrap();
        assert_eq!(e4.row(), 4);
        assert_eq!(e4.col(), 4);
        assert_eq!(Square::from_row_col(4, 4), Some(e4));
        assert_eq!(Square::from_row_col(8, 0), None);
    }

    #[test]
    fn test_out_of_range() {
        assert_eq!(Square::new(64), None);
        assert!(matches!(
            Square::try_from(70),
            Err(SquareError::OutOfRange { index: 70 })
        ));
        assert!("i1".parse::<Square>().is_err());
        assert!("a9".parse::<Square>().is_err());
        assert!("a".parse::<Square>().is_err());
    }
}
