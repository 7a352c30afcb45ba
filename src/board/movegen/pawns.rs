//! Pawn move generation.
//!
//! Appends pseudo-legal pawn moves filtered by the caller's check and pin
//! constraints: a pinned pawn is confined to the line through its king, and
//! a move's destination (for en passant, the captured pawn's square) must
//! intersect the check mask. En passant additionally re-checks the sliders
//! from the king square with both pawns lifted, covering the discovered
//! checks that the pin mask cannot see.

use super::super::magics::{bishop_attacks, rook_attacks};
use super::super::state::Board;
use super::super::tables::pawn_attacks;
use super::super::types::{pop_lsb, Bitboard, Color, Move, MoveList, Piece, Square};

const PROMOTION_PIECES: [Piece; 4] = [Piece::Queen, Piece::Rook, Piece::Bishop, Piece::Knight];

impl Board {
    pub(crate) fn pawn_moves(&self, list: &mut MoveList, check_mask: Bitboard, pinned: Bitboard) {
        let us = self.turn;
        let them = us.opponent();
        let (push, start_rank, promo_rank) = match us {
            Color::White => (8i8, 1u8, 7u8),
            Color::Black => (-8i8, 6u8, 0u8),
        };

        let mut pawns = self.piece_bb(us, Piece::Pawn);
        while pawns != 0 {
            let from = Square(pop_lsb(&mut pawns) as u8);
            let allowed = self.pin_ray(from, pinned) & check_mask;

            // Pushes.
            let one = Square((from.0 as i8 + push) as u8);
            if self.all & one.bb() == 0 {
                if one.bb() & allowed != 0 {
                    if one.rank() == promo_rank {
                        for piece in PROMOTION_PIECES {
                            list.push(Move::promotion(from, one, piece, false));
                        }
                    } else {
                        list.push(Move::quiet(from, one));
                    }
                }
                if from.rank() == start_rank {
                    let two = Square((from.0 as i8 + 2 * push) as u8);
                    if self.all & two.bb() == 0 && two.bb() & allowed != 0 {
                        list.push(Move::double_push(from, two));
                    }
                }
            }

            // Diagonal captures.
            let mut captures = pawn_attacks(us, from.index()) & self.occupancy(them) & allowed;
            while captures != 0 {
                let to = Square(pop_lsb(&mut captures) as u8);
                if to.rank() == promo_rank {
                    for piece in PROMOTION_PIECES {
                        list.push(Move::promotion(from, to, piece, true));
                    }
                } else {
                    list.push(Move::capture(from, to));
                }
            }

            // En passant.
            if let Some(ep) = self.en_passant {
                if pawn_attacks(us, from.index()) & ep.bb() != 0 {
                    let captured = Square((ep.0 as i8 - push) as u8);
                    let resolves_check = (captured.bb() | ep.bb()) & check_mask != 0;
                    let on_pin_ray = ep.bb() & self.pin_ray(from, pinned) != 0;
                    if resolves_check && on_pin_ray && !self.en_passant_exposes_king(from, ep, captured) {
                        list.push(Move::en_passant(from, ep));
                    }
                }
            }
        }
    }

    /// Would this en passant capture leave the king attacked by a slider?
    /// Both pawns leave their squares at once, which can open a rank, file,
    /// or diagonal no pin mask accounts for.
    fn en_passant_exposes_king(&self, from: Square, to: Square, captured: Square) -> bool {
        let us = self.turn;
        let them = us.opponent();
        let ksq = self.king_square(us);
        let occ_after = (self.all ^ from.bb() ^ captured.bb()) | to.bb();
        rook_attacks(ksq.index(), occ_after) & self.straight_sliders(them) != 0
            || bishop_attacks(ksq.index(), occ_after) & self.diagonal_sliders(them) != 0
    }
}
