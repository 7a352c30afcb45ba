//! Static exchange evaluation.
//!
//! Simulates the capture sequence on a single square with both sides always
//! recapturing with their least valuable attacker, revealing x-ray
//! attackers as sliders leave the board, and backing the balance up
//! negamax-style. The simulation stops as soon as continuing cannot improve
//! the balance for the side to move; it never enumerates the full sequence
//! when an early stand-pat decides it.

use super::magics::{bishop_attacks, rook_attacks};
use super::state::Board;
use super::types::{Bitboard, Color, Move, Piece, Square};

/// Exchange values in centipawns. The king's value only matters as "larger
/// than everything": it can never profitably be captured.
pub const SEE_VALUES: [i32; 6] = [100, 320, 330, 500, 900, 20000];

const MAX_EXCHANGE: usize = 32;

impl Board {
    /// Net material outcome of the side to move starting captures on `to`
    /// with its least valuable attacker. Positive means the initiating side
    /// comes out ahead; zero when there is nothing to capture or no
    /// attacker.
    #[must_use]
    pub fn see(&self, to: Square) -> i32 {
        let victim = match self.piece_at(to) {
            Some((_, piece)) => piece,
            None => return 0,
        };
        let us = self.turn;
        let attackers = self.attackers_to(to, self.all) & self.occupancy(us);
        match self.least_valuable(attackers, us) {
            Some((attacker, from_bb)) => {
                self.exchange_score(Square(from_bb.trailing_zeros() as u8), to, attacker, victim)
            }
            None => 0,
        }
    }

    /// Exchange outcome of one specific capturing move; the moving piece's
    /// own value enters the exchange first.
    #[must_use]
    pub fn see_capture(&self, mv: Move) -> i32 {
        let attacker = match self.piece_at(mv.from()) {
            Some((_, piece)) => piece,
            None => return 0,
        };
        let victim = if mv.is_en_passant() {
            Piece::Pawn
        } else {
            match self.piece_at(mv.to()) {
                Some((_, piece)) => piece,
                None => return 0,
            }
        };
        self.exchange_score(mv.from(), mv.to(), attacker, victim)
    }

    fn exchange_score(&self, from: Square, to: Square, attacker: Piece, victim: Piece) -> i32 {
        let mut gain = [0i32; MAX_EXCHANGE];
        let mut depth = 0;
        gain[0] = SEE_VALUES[victim.index()];

        let mut side = self.turn;
        let mut occupancy = self.all;
        let mut attackers = self.attackers_to(to, occupancy);
        let mut current = attacker;
        let mut from_bb = from.bb();

        loop {
            // Lift the capturer off the board and reveal anything behind it.
            occupancy ^= from_bb;
            attackers &= !from_bb;

            if matches!(current, Piece::Pawn | Piece::Bishop | Piece::Queen) {
                let diagonal =
                    self.diagonal_sliders(Color::White) | self.diagonal_sliders(Color::Black);
                attackers |= bishop_attacks(to.index(), occupancy) & diagonal & occupancy;
            }
            if matches!(current, Piece::Rook | Piece::Queen) {
                let straight =
                    self.straight_sliders(Color::White) | self.straight_sliders(Color::Black);
                attackers |= rook_attacks(to.index(), occupancy) & straight & occupancy;
            }

            side = side.opponent();
            let side_attackers = attackers & self.occupancy(side) & occupancy;
            if side_attackers == 0 {
                break;
            }

            depth += 1;
            if depth >= MAX_EXCHANGE {
                break;
            }

            let (next_piece, next_bb) = match self.least_valuable(side_attackers, side) {
                Some(found) => found,
                None => break,
            };

            // The capturer of the previous ply is now the victim.
            gain[depth] = SEE_VALUES[current.index()] - gain[depth - 1];

            // Neither continuing nor standing pat helps the side to move.
            if (-gain[depth - 1]).max(gain[depth]) < 0 {
                break;
            }

            // A king may only recapture when nothing can answer.
            if next_piece == Piece::King {
                let enemy_attackers = attackers & self.occupancy(side.opponent()) & occupancy;
                if enemy_attackers != 0 {
                    break;
                }
            }

            current = next_piece;
            from_bb = next_bb;
        }

        while depth > 0 {
            depth -= 1;
            gain[depth] = -(-gain[depth]).max(gain[depth + 1]);
        }
        gain[0]
    }

    /// Cheapest piece of `color` among `attackers`, as (piece, single-bit
    /// board).
    fn least_valuable(&self, attackers: Bitboard, color: Color) -> Option<(Piece, Bitboard)> {
        for piece in Piece::ALL {
            let candidates = attackers & self.piece_bb(color, piece);
            if candidates != 0 {
                return Some((piece, candidates & candidates.wrapping_neg()));
            }
        }
        None
    }
}
