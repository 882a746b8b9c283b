use log::trace;

use super::error::MoveError;
use super::state::{row_col, HistoryEntry};
use super::{CastleSide, Color, Move, MoveKind, Piece, Position, Square};

/// Square of the pawn removed by an en-passant capture landing on `to`.
#[inline]
pub(crate) fn en_passant_victim(to: Square, mover: Color) -> Square {
    match mover {
        Color::White => to.offset_rows(1),
        Color::Black => to.offset_rows(-1),
    }
}

/// Rook origin and destination for a castling move of `color`.
#[inline]
pub(crate) fn castling_rook_squares(color: Color, side: CastleSide) -> (Square, Square) {
    let row = color.back_row();
    match side {
        CastleSide::King => (row_col(row, 7), row_col(row, 5)),
        CastleSide::Queen => (row_col(row, 0), row_col(row, 3)),
    }
}

impl Position {
    /// Apply a move the caller knows to be legal, pushing an exact inverse
    /// record onto the history stack.
    ///
    /// Use [`Position::apply_checked`] for moves from untrusted input.
    ///
    /// # Panics
    /// Panics if the origin square is empty.
    pub fn apply(&mut self, mv: Move) {
        let color = self.side_to_move;
        let ply = self.history.len() as u32 + 1;
        let previous_en_passant_target = self.en_passant_target;
        let previous_halfmove_clock = self.halfmove_clock;
        let previous_fullmove_number = self.fullmove_number;

        let (_, moving) = self
            .take(mv.from())
            .unwrap_or_else(|| panic!("apply {mv}: origin square is empty"));

        let captured = match mv.kind() {
            MoveKind::EnPassant => self.take(en_passant_victim(mv.to(), color)),
            MoveKind::KingCastle | MoveKind::QueenCastle => {
                let side = castle_side(mv);
                let (rook_from, rook_to) = castling_rook_squares(color, side);
                if let Some((rook_color, rook)) = self.take(rook_from) {
                    self.put(rook_to, rook_color, rook);
                }
                None
            }
            _ => self.take(mv.to()),
        };

        let placed = mv.promotion().unwrap_or(moving);
        self.put(mv.to(), color, placed);

        self.en_passant_target = if mv.is_double_pawn_push() {
            Some(Square::from_index_unchecked(
                (mv.from().index() + mv.to().index()) / 2,
            ))
        } else {
            None
        };

        if moving == Piece::Pawn || captured.is_some() {
            self.halfmove_clock = 0;
        } else {
            self.halfmove_clock = self.halfmove_clock.saturating_add(1);
        }

        if color == Color::Black {
            self.fullmove_number = self.fullmove_number.saturating_add(1);
        }

        self.revoke_castling(color, moving, mv, captured, ply);

        self.side_to_move = color.opponent();
        self.history.push(HistoryEntry {
            mv,
            captured,
            previous_en_passant_target,
            previous_halfmove_clock,
            previous_fullmove_number,
        });
    }

    /// Apply `mv` only if it is one of the current legal moves.
    ///
    /// On error the position is left untouched.
    pub fn apply_checked(&mut self, mv: Move) -> Result<(), MoveError> {
        if !self.legal_moves().for_square(mv.from()).contains(&mv) {
            return Err(MoveError::IllegalMove { mv });
        }
        self.apply(mv);
        Ok(())
    }

    /// Undo the most recent move, restoring every field to its pre-move value.
    ///
    /// # Panics
    /// Panics when the history is empty: every `unmove` must pair with an
    /// earlier `apply`.
    pub fn unmove(&mut self) -> Move {
        let ply = self.history.len() as u32;
        let Some(entry) = self.history.pop() else {
            panic!("unmove called with empty move history");
        };
        let mv = entry.mv;
        let color = self.side_to_move.opponent();

        self.side_to_move = color;
        self.fullmove_number = entry.previous_fullmove_number;
        self.halfmove_clock = entry.previous_halfmove_clock;
        self.en_passant_target = entry.previous_en_passant_target;
        self.castling.restore_ply(ply);

        let (_, placed) = self
            .take(mv.to())
            .unwrap_or_else(|| panic!("unmove {mv}: destination square is empty"));
        let original = if mv.promotion().is_some() {
            Piece::Pawn
        } else {
            placed
        };
        self.put(mv.from(), color, original);

        match mv.kind() {
            MoveKind::EnPassant => {
                if let Some((cap_color, cap_piece)) = entry.captured {
                    self.put(en_passant_victim(mv.to(), color), cap_color, cap_piece);
                }
            }
            MoveKind::KingCastle | MoveKind::QueenCastle => {
                let (rook_from, rook_to) = castling_rook_squares(color, castle_side(mv));
                if let Some((rook_color, rook)) = self.take(rook_to) {
                    self.put(rook_from, rook_color, rook);
                }
            }
            _ => {
                if let Some((cap_color, cap_piece)) = entry.captured {
                    self.put(mv.to(), cap_color, cap_piece);
                }
            }
        }

        trace!("unmove {mv} at ply {ply}");
        mv
    }

    fn revoke_castling(
        &mut self,
        color: Color,
        moving: Piece,
        mv: Move,
        captured: Option<(Color, Piece)>,
        ply: u32,
    ) {
        match moving {
            Piece::King => {
                for side in CastleSide::BOTH {
                    self.castling.revoke(color, side, ply);
                }
            }
            Piece::Rook => {
                for side in CastleSide::BOTH {
                    if mv.from() == row_col(color.back_row(), side.rook_col()) {
                        self.castling.revoke(color, side, ply);
                    }
                }
            }
            _ => {}
        }

        if let Some((captured_color, Piece::Rook)) = captured {
            for side in CastleSide::BOTH {
                if mv.to() == row_col(captured_color.back_row(), side.rook_col()) {
                    self.castling.revoke(captured_color, side, ply);
                }
            }
        }
    }
}

fn castle_side(mv: Move) -> CastleSide {
    if mv.kind() == MoveKind::KingCastle {
        CastleSide::King
    } else {
        CastleSide::Queen
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(s: &str) -> Square {
        s.parse().unwrap()
    }

    #[test]
    fn test_double_push_sets_target() {
        let mut position = Position::new();
        let mv = Move::new(sq("e2"), sq("e4"), MoveKind::DoublePawnPush);
        position.apply(mv);
        assert_eq!(position.en_passant_target(), Some(sq("e3")));
        assert_eq!(position.side_to_move(), Color::Black);
        assert_eq!(position.fullmove_number(), 1);
        assert_eq!(position.unmove(), mv);
        assert_eq!(position, Position::new());
    }

    #[test]
    fn test_black_move_increments_fullmove() {
        let mut position = Position::new();
        position.apply(Move::quiet(sq("g1"), sq("f3")));
        position.apply(Move::quiet(sq("g8"), sq("f6")));
        assert_eq!(position.fullmove_number(), 2);
        assert_eq!(position.halfmove_clock(), 2);
        position.unmove();
        assert_eq!(position.fullmove_number(), 1);
        assert_eq!(position.halfmove_clock(), 1);
    }

    #[test]
    fn test_fullmove_saturates_at_max() {
        let mut position = Position::from_fen("4k3/8/8/8/8/8/8/4K3 b - - 0 4294967295");
        let before = position.clone();
        position.apply(Move::quiet(sq("e8"), sq("d8")));
        assert_eq!(position.fullmove_number(), u32::MAX);
        position.unmove();
        assert_eq!(position, before);
    }

    #[test]
    fn test_halfmove_restored_after_reset() {
        let mut position = Position::from_fen("4k3/8/8/3p4/4P3/8/8/4K3 w - - 37 40");
        let before = position.clone();
        position.apply(Move::capture(sq("e4"), sq("d5")));
        assert_eq!(position.halfmove_clock(), 0);
        position.unmove();
        assert_eq!(position.halfmove_clock(), 37);
        assert_eq!(position, before);
    }

    #[test]
    fn test_castling_moves_rook_and_restores() {
        let mut position = Position::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1");
        let before = position.clone();
        position.apply(Move::new(sq("e1"), sq("c1"), MoveKind::QueenCastle));
        assert_eq!(position.piece_at(sq("c1")), Some((Color::White, Piece::King)));
        assert_eq!(position.piece_at(sq("d1")), Some((Color::White, Piece::Rook)));
        assert!(position.is_empty(sq("a1")));
        assert!(position.is_empty(sq("e1")));
        assert_eq!(position.castling_rights().to_fen_field(), "kq");
        position.unmove();
        assert_eq!(position, before);
    }

    #[test]
    fn test_rook_capture_revokes_opponent_right() {
        let mut position = Position::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1");
        position.apply(Move::capture(sq("h1"), sq("h8")));
        assert_eq!(position.castling_rights().to_fen_field(), "Qq");
        assert_eq!(
            position.castling_rights().lost_at(Color::Black, CastleSide::King),
            Some(1)
        );
        position.unmove();
        assert_eq!(position.castling_rights().to_fen_field(), "KQkq");
    }

    #[test]
    fn test_right_lost_earlier_survives_nested_unmove() {
        let mut position = Position::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1");
        position.apply(Move::quiet(sq("h1"), sq("h2")));
        position.apply(Move::quiet(sq("a8"), sq("a7")));
        position.apply(Move::quiet(sq("h2"), sq("h1")));
        assert_eq!(position.castling_rights().to_fen_field(), "Qk");
        position.unmove();
        // The kingside right was lost at ply 1, not ply 3
        assert_eq!(position.castling_rights().to_fen_field(), "Qk");
        position.unmove();
        position.unmove();
        assert_eq!(position.castling_rights().to_fen_field(), "KQkq");
    }

    #[test]
    fn test_en_passant_restores_victim() {
        let mut position =
            Position::from_fen("rnbqkbnr/ppp1pppp/8/3pP3/8/8/PPPP1PPP/RNBQKBNR w KQkq d6 0 2");
        let before = position.clone();
        position.apply(Move::new(sq("e5"), sq("d6"), MoveKind::EnPassant));
        assert!(position.is_empty(sq("d5")));
        assert_eq!(position.history()[0].captured(), Some((Color::Black, Piece::Pawn)));
        position.unmove();
        assert_eq!(position, before);
    }

    #[test]
    fn test_apply_checked_rejects_illegal() {
        let mut position = Position::new();
        let before = position.clone();
        let result = position.apply_checked(Move::quiet(sq("e2"), sq("e5")));
        assert!(matches!(result, Err(MoveError::IllegalMove { .. })));
        assert_eq!(position, before);
    }

    #[test]
    #[should_panic(expected = "empty move history")]
    fn test_unmove_empty_history_panics() {
        let mut position = Position::new();
        position.unmove();
    }
}
