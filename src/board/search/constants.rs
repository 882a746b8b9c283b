//! Score scale.
//!
//! Scores are integers in tenths of a pawn, always from the point of view
//! of the side that was to move at the root.

/// Material units (pawn = 1) are scaled by this factor
pub const MATERIAL_SCALE: i32 = 10;

/// Bonus for checkmating, penalty for being checkmated
pub const MATE_SCORE: i32 = 2000;

/// Score per legal move of difference in mobility
pub const MOBILITY_WEIGHT: i32 = 1;

/// Larger than any reachable score
pub const INFINITY: i32 = 1_000_000;
