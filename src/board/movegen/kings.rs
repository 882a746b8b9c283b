use super::super::geometry::{geometry, is_diagonal, knight_offsets, pawn_captures, ray, step, COMPASS};
use super::super::state::row_col;
use super::super::{CastleSide, Color, Move, MoveKind, Piece, Square};
use super::Pass;

// Columns that must be empty between king and rook
const KING_SIDE_EMPTY: &[u8] = &[5, 6];
const QUEEN_SIDE_EMPTY: &[u8] = &[1, 2, 3];
// Columns the king stands on, crosses and lands on
const KING_SIDE_PATH: [u8; 3] = [4, 5, 6];
const QUEEN_SIDE_PATH: [u8; 3] = [4, 3, 2];

impl Pass<'_> {
    pub(super) fn king(&mut self, from: Square) {
        let danger = self.hazards.protected[self.color.opponent().index()];
        for &offset in geometry(Piece::King).offsets {
            let Some(to) = step(from, offset) else {
                continue;
            };
            self.protect(to);
            if danger.contains(to) {
                continue;
            }
            match self.position.piece_at(to) {
                None => self.emit(Move::quiet(from, to)),
                Some((color, piece)) if color != self.color && piece != Piece::King => {
                    self.emit(Move::capture(from, to));
                }
                Some(_) => {}
            }
        }

        if self.emitting() {
            self.castles(from);
        }
    }

    fn castles(&mut self, from: Square) {
        let color = self.color;
        if !self.hazards.checks[color.index()].is_empty() {
            return;
        }
        let row = color.back_row();
        if from != row_col(row, 4) {
            return;
        }
        let danger = self.hazards.protected[color.opponent().index()];
        let rights = self.position.castling_rights();

        for side in CastleSide::BOTH {
            if !rights.has(color, side) || !self.position.has_castling_rook(color, side) {
                continue;
            }
            let (empty, king_path, kind) = match side {
                CastleSide::King => (KING_SIDE_EMPTY, KING_SIDE_PATH, MoveKind::KingCastle),
                CastleSide::Queen => (QUEEN_SIDE_EMPTY, QUEEN_SIDE_PATH, MoveKind::QueenCastle),
            };
            if empty
                .iter()
                .any(|&col| !self.position.is_empty(row_col(row, col)))
            {
                continue;
            }
            if king_path
                .iter()
                .any(|&col| danger.contains(row_col(row, col)))
            {
                continue;
            }
            self.emit(Move::new(from, row_col(row, king_path[2]), kind));
        }
    }
}

/// True when a piece of `by` attacks `target` on the board `cells`.
///
/// Works on any cell array so callers can probe a board that differs
/// from the current position.
pub(crate) fn attacked_in(cells: &[Option<(Color, Piece)>; 64], target: Square, by: Color) -> bool {
    for offset in COMPASS {
        for (distance, sq) in ray(target, offset).enumerate() {
            let Some((color, piece)) = cells[sq.index()] else {
                continue;
            };
            if color == by {
                let hits = match piece {
                    Piece::Queen => true,
                    Piece::Rook => !is_diagonal(offset),
                    Piece::Bishop => is_diagonal(offset),
                    Piece::King => distance == 0,
                    Piece::Pawn | Piece::Knight => false,
                };
                if hits {
                    return true;
                }
            }
            break;
        }
    }

    let knight = knight_offsets()
        .iter()
        .filter_map(|&offset| step(target, offset))
        .any(|sq| cells[sq.index()] == Some((by, Piece::Knight)));
    if knight {
        return true;
    }

    // A pawn of `by` attacks `target` from one capture step behind it
    pawn_captures(by)
        .iter()
        .filter_map(|&offset| step(target, -offset))
        .any(|sq| cells[sq.index()] == Some((by, Piece::Pawn)))
}
