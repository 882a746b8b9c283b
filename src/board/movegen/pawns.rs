use super::super::geometry::{pawn_captures, pawn_push, step};
use super::super::make_unmake::en_passant_victim;
use super::super::{Bitboard, Move, MoveKind, Piece, Promotion, Square};
use super::{attacked_in, Pass};

impl Pass<'_> {
    pub(super) fn pawn(&mut self, from: Square) {
        let color = self.color;

        if let Some(one) = step(from, pawn_push(color)) {
            if self.position.is_empty(one) {
                self.emit_pawn(from, one, false);
                if from.row() == color.pawn_start_row() {
                    if let Some(two) = step(one, pawn_push(color)) {
                        if self.position.is_empty(two) {
                            self.emit(Move::new(from, two, MoveKind::DoublePawnPush));
                        }
                    }
                }
            }
        }

        for offset in pawn_captures(color) {
            let Some(to) = step(from, offset) else {
                continue;
            };
            // Diagonals count as protected whether or not anything stands there
            self.protect(to);
            match self.position.piece_at(to) {
                Some((other, Piece::King)) if other != color => {
                    self.check(from, Bitboard::EMPTY);
                }
                Some((other, _)) if other != color => self.emit_pawn(from, to, true),
                _ => {}
            }
        }

        if self.emitting() {
            self.en_passant(from);
        }
    }

    /// Emit a pawn move, fanning out into the four promotions on the last row.
    fn emit_pawn(&mut self, from: Square, to: Square, capture: bool) {
        if to.row() == self.color.promotion_row() {
            for piece in Promotion::ALL {
                self.emit(Move::promotion_to(from, to, piece, capture));
            }
        } else if capture {
            self.emit(Move::capture(from, to));
        } else {
            self.emit(Move::quiet(from, to));
        }
    }

    fn en_passant(&mut self, from: Square) {
        let Some(target) = self.position.en_passant_target() else {
            return;
        };
        let color = self.color;
        if !pawn_captures(color)
            .iter()
            .any(|&offset| step(from, offset) == Some(target))
        {
            return;
        }
        let victim = en_passant_victim(target, color);
        if self.position.piece_at(victim) != Some((color.opponent(), Piece::Pawn))
            || !self.position.is_empty(target)
        {
            return;
        }
        if self.en_passant_exposes_king(from, target, victim) {
            return;
        }
        self.emit(Move::new(from, target, MoveKind::EnPassant));
    }

    /// Play the capture on a scratch board and test our king there.
    ///
    /// Two pawns leave the board's lines at once, so a rook on the same
    /// rank or a bishop behind the victim may suddenly see the king.
    fn en_passant_exposes_king(&self, from: Square, target: Square, victim: Square) -> bool {
        let Some(king) = self.position.king_square(self.color) else {
            return false;
        };
        let mut cells = self.position.squares;
        cells[from.index()] = None;
        cells[victim.index()] = None;
        cells[target.index()] = Some((self.color, Piece::Pawn));
        attacked_in(&cells, king, self.color.opponent())
    }
}

#[cfg(test)]
mod tests {
    use crate::board::{Position, Square};

    fn sq(s: &str) -> Square {
        s.parse().unwrap()
    }

    #[test]
    fn test_same_rank_en_passant_is_illegal() {
        // Removing d4 and e4 together would open the h4 rook onto the a4 king
        let position = Position::from_fen("8/8/8/8/k2pP2R/8/8/4K3 b - e3 0 1");
        let moves = position.legal_moves();
        assert!(!moves.iter().any(|mv| mv.is_en_passant()));
        assert!(moves.for_square(sq("d4")).iter().any(|mv| mv.to() == sq("d3")));
    }

    #[test]
    fn test_en_passant_captures_checking_pawn() {
        // The d4 pawn gives check after its double push; en passant removes it
        let position = Position::from_fen("8/8/8/2k5/3Pp3/8/8/4K3 b - d3 0 1");
        let moves = position.legal_moves();
        assert!(moves.in_check());
        assert!(moves
            .for_square(sq("e4"))
            .iter()
            .any(|mv| mv.is_en_passant() && mv.to() == sq("d3")));
    }

    #[test]
    fn test_promotion_fans_out() {
        let position = Position::from_fen("1n2k3/P7/8/8/8/8/8/4K3 w - - 0 1");
        let moves = position.legal_moves();
        let from_a7 = moves.for_square(sq("a7"));
        assert_eq!(from_a7.len(), 8);
        assert_eq!(from_a7.iter().filter(|mv| mv.is_capture()).count(), 4);
    }

    #[test]
    fn test_blocked_pawn_has_no_double_push() {
        let position = Position::from_fen("4k3/8/8/8/8/4n3/4P3/4K3 w - - 0 1");
        let moves = position.legal_moves();
        assert!(moves.for_square(sq("e2")).is_empty());
    }
}
