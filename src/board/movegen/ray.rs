//! Table-driven moves for knights and sliders.
//!
//! Pieces that do not slide take one step per offset. For sliders each ray is walked as a small state machine: open squares until the
//! first occupied square, then either a look for the enemy king behind a
//! captured piece (pin) or, after hitting the king itself, an x-ray that
//! keeps marking squares protected so the king cannot step back along the
//! line it is checked on.

use super::super::geometry::{geometry, ray, step};
use super::super::{Bitboard, Move, Piece, Square};
use super::Pass;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum RayState {
    /// Nothing met yet
    Open,
    /// An enemy piece on `first`; a king further on means `first` is pinned
    Behind { first: Square },
    /// Past the enemy king
    XRayKing,
}

impl Pass<'_> {
    pub(super) fn piece_moves(&mut self, from: Square, piece: Piece) {
        let geometry = geometry(piece);
        for &offset in geometry.offsets {
            if geometry.slides {
                self.walk_ray(from, offset);
            } else if let Some(to) = step(from, offset) {
                self.step_to(from, to);
            }
        }
    }

    fn walk_ray(&mut self, from: Square, offset: i8) {
        let mut state = RayState::Open;
        // Squares passed so far, origin excluded
        let mut line = Bitboard::EMPTY;

        for sq in ray(from, offset) {
            let occupant = self.position.piece_at(sq);
            state = match state {
                RayState::Open => {
                    self.protect(sq);
                    match occupant {
                        None => {
                            self.emit(Move::quiet(from, sq));
                            line.insert(sq);
                            RayState::Open
                        }
                        Some((color, _)) if color == self.color => break,
                        Some((_, Piece::King)) => {
                            self.check(from, line);
                            RayState::XRayKing
                        }
                        Some(_) => {
                            self.emit(Move::capture(from, sq));
                            line.insert(sq);
                            RayState::Behind { first: sq }
                        }
                    }
                }
                RayState::Behind { first } => match occupant {
                    None => {
                        line.insert(sq);
                        state
                    }
                    Some((color, Piece::King)) if color != self.color => {
                        self.hazards.pin_rays[first.index()] = line | Bitboard::from_square(from);
                        break;
                    }
                    Some(_) => break,
                },
                RayState::XRayKing => {
                    self.protect(sq);
                    if occupant.is_some() {
                        break;
                    }
                    state
                }
            };
        }
    }
}
