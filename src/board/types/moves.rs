//! Move types and move list.

use std::fmt;
use std::ops::Index;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::piece::{Piece, Promotion};
use super::square::Square;

/// What a move does besides relocating a piece.
///
/// Capture and promotion are independent: `Promotion { capture: true, .. }`
/// is a promoting capture, and only promotions carry a promotion piece.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum MoveKind {
    Quiet,
    DoublePawnPush,
    KingCastle,
    QueenCastle,
    Capture,
    EnPassant,
    Promotion { piece: Promotion, capture: bool },
}

/// A move from `from` to `to`. Castling moves name the king's squares.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Move {
    from: Square,
    to: Square,
    kind: MoveKind,
}

impl Move {
    #[inline]
    #[must_use]
    pub const fn new(from: Square, to: Square, kind: MoveKind) -> Self {
        Move { from, to, kind }
    }

    /// Create a quiet move (no capture, no special flags)
    #[inline]
    #[must_use]
    pub const fn quiet(from: Square, to: Square) -> Self {
        Move::new(from, to, MoveKind::Quiet)
    }

    /// Create a capture move
    #[inline]
    #[must_use]
    pub const fn capture(from: Square, to: Square) -> Self {
        Move::new(from, to, MoveKind::Capture)
    }

    #[inline]
    #[must_use]
    pub const fn promotion_to(from: Square, to: Square, piece: Promotion, capture: bool) -> Self {
        Move::new(from, to, MoveKind::Promotion { piece, capture })
    }

    /// Get the source square
    #[inline]
    #[must_use]
    pub const fn from(self) -> Square {
        self.from
    }

    /// Get the destination square
    #[inline]
    #[must_use]
    pub const fn to(self) -> Square {
        self.to
    }

    #[inline]
    #[must_use]
    pub const fn kind(self) -> MoveKind {
        self.kind
    }

    /// Returns true if this move captures a piece (including en passant)
    #[inline]
    #[must_use]
    pub const fn is_capture(self) -> bool {
        matches!(
            self.kind,
            MoveKind::Capture | MoveKind::EnPassant | MoveKind::Promotion { capture: true, .. }
        )
    }

    #[inline]
    #[must_use]
    pub const fn is_en_passant(self) -> bool {
        matches!(self.kind, MoveKind::EnPassant)
    }

    #[inline]
    #[must_use]
    pub const fn is_castling(self) -> bool {
        matches!(self.kind, MoveKind::KingCastle | MoveKind::QueenCastle)
    }

    #[inline]
    #[must_use]
    pub const fn is_double_pawn_push(self) -> bool {
        matches!(self.kind, MoveKind::DoublePawnPush)
    }

    /// Get the promotion piece, if this is a promotion move
    #[inline]
    #[must_use]
    pub const fn promotion(self) -> Option<Piece> {
        match self.kind {
            MoveKind::Promotion { piece, .. } => Some(piece.piece()),
            _ => None,
        }
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({}{}", self.from, self.to)?;
        if let Some(promo) = self.promotion() {
            write!(f, "={}", promo.to_char().to_ascii_uppercase())?;
        }
        if self.is_capture() {
            write!(f, " cap")?;
        }
        if self.is_castling() {
            write!(f, " castle")?;
        }
        if self.is_en_passant() {
            write!(f, " ep")?;
        }
        write!(f, ")")
    }
}

/// Coordinate notation: `e2e4`, `e7e8q`, `e1g1`.
impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)?;
        if let Some(promo) = self.promotion() {
            write!(f, "{}", promo.to_char())?;
        }
        Ok(())
    }
}

pub(crate) const MAX_MOVES: usize = 256;
pub(crate) const EMPTY_MOVE: Move = Move::quiet(
    Square::from_index_unchecked(0),
    Square::from_index_unchecked(0),
);

/// List of moves with fixed-size backing array.
#[derive(Clone, Debug)]
pub struct MoveList {
    moves: [Move; MAX_MOVES],
    len: usize,
}

impl MoveList {
    #[must_use]
    pub fn new() -> Self {
        MoveList {
            moves: [EMPTY_MOVE; MAX_MOVES],
            len: 0,
        }
    }

    pub(crate) fn push(&mut self, mv: Move) {
        self.moves[self.len] = mv;
        self.len += 1;
    }

    /// Keep only the moves in `start..` that satisfy `keep`, preserving order.
    pub(crate) fn retain_from(&mut self, start: usize, mut keep: impl FnMut(Move) -> bool) {
        let mut write = start;
        for read in start..self.len {
            let mv = self.moves[read];
            if keep(mv) {
                self.moves[write] = mv;
                write += 1;
            }
        }
        self.len = write;
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Move] {
        &self.moves[..self.len]
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Move> {
        self.as_slice().iter()
    }

    #[must_use]
    pub fn get(&self, idx: usize) -> Option<Move> {
        self.as_slice().get(idx).copied()
    }

    #[must_use]
    pub fn contains(&self, mv: Move) -> bool {
        self.as_slice().contains(&mv)
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

impl Default for MoveList {
    fn default() -> Self {
        MoveList::new()
    }
}

impl Index<usize> for MoveList {
    type Output = Move;

    fn index(&self, idx: usize) -> &Self::Output {
        assert!(
            idx < self.len,
            "MoveList index {} out of bounds (len {})",
            idx,
            self.len
        );
        &self.moves[idx]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(s: &str) -> Square {
        s.parse().unwrap()
    }

    #[test]
    fn test_capture_and_promotion_are_independent() {
        let quiet_promo = Move::promotion_to(sq("a7"), sq("a8"), Promotion::Rook, false);
        assert!(!quiet_promo.is_capture());
        assert_eq!(quiet_promo.promotion(), Some(Piece::Rook));

        let capture_promo = Move::promotion_to(sq("a7"), sq("b8"), Promotion::Knight, true);
        assert!(capture_promo.is_capture());
        assert_eq!(capture_promo.promotion(), Some(Piece::Knight));

        assert_eq!(Move::capture(sq("e4"), sq("d5")).promotion(), None);
    }

    #[test]
    fn test_display_coordinate_notation() {
        let mv = Move::promotion_to(sq("e7"), sq("e8"), Promotion::Queen, false);
        assert_eq!(mv.to_string(), "e7e8q");
        assert_eq!(
            Move::new(sq("e1"), sq("g1"), MoveKind::KingCastle).to_string(),
            "e1g1"
        );
    }

    #[test]
    fn test_retain_from_preserves_prefix() {
        let mut list = MoveList::new();
        list.push(Move::quiet(sq("a2"), sq("a3")));
        list.push(Move::quiet(sq("b2"), sq("b3")));
        list.push(Move::quiet(sq("c2"), sq("c3")));
        list.retain_from(1, |mv| mv.from() != sq("b2"));
        assert_eq!(list.len(), 2);
        assert_eq!(list[0].from(), sq("a2"));
        assert_eq!(list[1].from(), sq("c2"));
    }
}
