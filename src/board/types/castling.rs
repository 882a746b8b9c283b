//! Castling rights with loss bookkeeping.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::piece::Color;

/// Ply value recorded for a right that was already gone when the
/// position was set up. No history entry ever carries this ply number.
pub const LOST_BEFORE_HISTORY: u32 = u32::MAX;

/// Which rook a castling right refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CastleSide {
    Queen,
    King,
}

impl CastleSide {
    pub const BOTH: [CastleSide; 2] = [CastleSide::Queen, CastleSide::King];

    #[inline]
    const fn index(self) -> usize {
        match self {
            CastleSide::Queen => 0,
            CastleSide::King => 1,
        }
    }

    /// Column of the rook that castles on this side
    #[inline]
    #[must_use]
    pub(crate) const fn rook_col(self) -> u8 {
        match self {
            CastleSide::Queen => 0,
            CastleSide::King => 7,
        }
    }
}

/// Per color and side, the ply at which the right was lost (0 = still available).
///
/// Recording the ply instead of a flag lets `unmove` hand a right back only
/// when undoing the exact ply that took it away.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CastlingRights([[u32; 2]; 2]);

impl CastlingRights {
    /// No castling rights
    #[must_use]
    pub const fn none() -> Self {
        CastlingRights([[LOST_BEFORE_HISTORY; 2]; 2])
    }

    /// All four rights available
    #[must_use]
    pub const fn all() -> Self {
        CastlingRights([[0; 2]; 2])
    }

    #[inline]
    #[must_use]
    pub const fn has(self, color: Color, side: CastleSide) -> bool {
        self.0[color.index()][side.index()] == 0
    }

    /// Ply at which the right was lost, `None` while it is still available
    #[inline]
    #[must_use]
    pub const fn lost_at(self, color: Color, side: CastleSide) -> Option<u32> {
        match self.0[color.index()][side.index()] {
            0 => None,
            ply => Some(ply),
        }
    }

    /// Make a right available again
    #[inline]
    pub fn grant(&mut self, color: Color, side: CastleSide) {
        self.0[color.index()][side.index()] = 0;
    }

    /// Record the loss of a right at `ply`; a right already lost keeps its original ply.
    #[inline]
    pub fn revoke(&mut self, color: Color, side: CastleSide, ply: u32) {
        let slot = &mut self.0[color.index()][side.index()];
        if *slot == 0 {
            *slot = ply;
        }
    }

    /// Give back every right that was lost at exactly `ply`.
    pub(crate) fn restore_ply(&mut self, ply: u32) {
        for row in &mut self.0 {
            for slot in row.iter_mut() {
                if *slot == ply {
                    *slot = 0;
                }
            }
        }
    }

    /// Rights in FEN order (`KQkq`), or `-` when none remain
    #[must_use]
    pub fn to_fen_field(self) -> String {
        let mut field = String::new();
        for (color, king, queen) in [(Color::White, 'K', 'Q'), (Color::Black, 'k', 'q')] {
            if self.has(color, CastleSide::King) {
                field.push(king);
            }
            if self.has(color, CastleSide::Queen) {
                field.push(queen);
            }
        }
        if field.is_empty() {
            field.push('-');
        }
        field
    }
}

impl Default for CastlingRights {
    fn default() -> Self {
        CastlingRights::none()
    }
}
