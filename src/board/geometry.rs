//! Mailbox geometry tables.
//!
//! Squares are embedded in a 10x12 frame whose border cells are marked
//! off-board, so stepping past an edge lands on a sentinel instead of
//! wrapping to the other side of the board. Every offset below is in
//! frame coordinates (one row = 10 cells).

use once_cell::sync::Lazy;

use super::{Color, Piece, Square};

const FRAME_WIDTH: usize = 10;
const FRAME_CELLS: usize = 120;
const OFF_BOARD: i8 = -1;

/// Frame cell -> square index, or `OFF_BOARD` for the border.
static MAILBOX: Lazy<[i8; FRAME_CELLS]> = Lazy::new(|| {
    let mut cells = [OFF_BOARD; FRAME_CELLS];
    for sq in 0..64 {
        cells[frame_cell(sq)] = sq as i8;
    }
    cells
});

/// Square index -> frame cell.
static MAILBOX64: Lazy<[u8; 64]> = Lazy::new(|| {
    let mut cells = [0u8; 64];
    for (sq, cell) in cells.iter_mut().enumerate() {
        *cell = frame_cell(sq) as u8;
    }
    cells
});

/// Two border rows on top and bottom, one border column on each side.
const fn frame_cell(sq: usize) -> usize {
    (sq / 8 + 2) * FRAME_WIDTH + sq % 8 + 1
}

const KNIGHT_OFFSETS: [i8; 8] = [-21, -19, -12, -8, 8, 12, 19, 21];
const BISHOP_OFFSETS: [i8; 4] = [-11, -9, 9, 11];
const ROOK_OFFSETS: [i8; 4] = [-10, -1, 1, 10];
const QUEEN_OFFSETS: [i8; 8] = [-11, -10, -9, -1, 1, 9, 10, 11];

/// Step offsets and sliding behaviour of a non-pawn piece.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Geometry {
    pub offsets: &'static [i8],
    pub slides: bool,
}

/// Geometry for `piece`; pawns have no ray geometry and get an empty offset list.
pub(crate) fn geometry(piece: Piece) -> Geometry {
    let offsets: &'static [i8] = match piece {
        Piece::Pawn => &[],
        Piece::Knight => &KNIGHT_OFFSETS,
        Piece::Bishop => &BISHOP_OFFSETS,
        Piece::Rook => &ROOK_OFFSETS,
        Piece::Queen | Piece::King => &QUEEN_OFFSETS,
    };
    Geometry {
        offsets,
        slides: piece.slides(),
    }
}

/// The eight compass directions, used by attack probes walking out from a king.
pub(crate) const COMPASS: [i8; 8] = QUEEN_OFFSETS;

#[inline]
pub(crate) const fn is_diagonal(offset: i8) -> bool {
    matches!(offset, -11 | -9 | 9 | 11)
}

pub(crate) const fn knight_offsets() -> &'static [i8] {
    &KNIGHT_OFFSETS
}

/// Single-push offset for a pawn of `color` (White moves toward row 0).
#[inline]
pub(crate) const fn pawn_push(color: Color) -> i8 {
    match color {
        Color::White => -10,
        Color::Black => 10,
    }
}

/// The two diagonal capture offsets for a pawn of `color`.
#[inline]
pub(crate) const fn pawn_captures(color: Color) -> [i8; 2] {
    match color {
        Color::White => [-11, -9],
        Color::Black => [9, 11],
    }
}

/// One step from `from` by a frame offset, `None` when it leaves the board.
#[inline]
pub(crate) fn step(from: Square, offset: i8) -> Option<Square> {
    let cell = MAILBOX64[from.index()] as isize + offset as isize;
    let target = MAILBOX[cell as usize];
    if target == OFF_BOARD {
        None
    } else {
        Square::new(target as u8)
    }
}

/// Squares reached by repeatedly stepping `offset` from `from` until the edge.
pub(crate) fn ray(from: Square, offset: i8) -> impl Iterator<Item = Square> {
    std::iter::successors(step(from, offset), move |&sq| step(sq, offset))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(s: &str) -> Square {
        s.parse().unwrap()
    }

    #[test]
    fn test_frame_round_trip() {
        for s in Square::all() {
            assert_eq!(MAILBOX[MAILBOX64[s.index()] as usize], s.index() as i8);
        }
        let off_board = MAILBOX.iter().filter(|&&c| c == OFF_BOARD).count();
        assert_eq!(off_board, FRAME_CELLS - 64);
    }

    #[test]
    fn test_step_detects_edges() {
        assert_eq!(step(sq("a1"), -1), None);
        assert_eq!(step(sq("h4"), 1), None);
        assert_eq!(step(sq("a8"), -10), None);
        assert_eq!(step(sq("e2"), pawn_push(Color::White)), Some(sq("e3")));
        assert_eq!(step(sq("e7"), pawn_push(Color::Black)), Some(sq("e6")));
    }

    #[test]
    fn test_knight_never_wraps() {
        let targets: Vec<Square> = knight_offsets()
            .iter()
            .filter_map(|&o| step(sq("a1"), o))
            .collect();
        assert_eq!(targets.len(), 2);
        assert!(targets.contains(&sq("b3")));
        assert!(targets.contains(&sq("c2")));
    }

    #[test]
    fn test_ray_runs_to_edge() {
        let squares: Vec<String> = ray(sq("c1"), -9).map(|s| s.to_string()).collect();
        assert_eq!(squares, vec!["d2", "e3", "f4", "g5", "h6"]);
    }

    #[test]
    fn test_geometry_slide_flags() {
        assert!(geometry(Piece::Queen).slides);
        assert!(!geometry(Piece::King).slides);
        assert_eq!(geometry(Piece::Rook).offsets.len(), 4);
        assert!(geometry(Piece::Pawn).offsets.is_empty());
        assert!(is_diagonal(-11));
        assert!(!is_diagonal(-10));
    }
}
