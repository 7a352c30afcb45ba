//! Sliding piece move generation via the magic attack tables.

use super::super::magics::{bishop_attacks, queen_attacks, rook_attacks};
use super::super::state::Board;
use super::super::types::{pop_lsb, Bitboard, MoveList, Piece, Square};

impl Board {
    pub(crate) fn slider_moves(&self, list: &mut MoveList, check_mask: Bitboard, pinned: Bitboard) {
        let us = self.turn;
        let own = self.occupancy(us);

        for piece in [Piece::Bishop, Piece::Rook, Piece::Queen] {
            let mut sliders = self.piece_bb(us, piece);
            while sliders != 0 {
                let from = Square(pop_lsb(&mut sliders) as u8);
                let attacks = match piece {
                    Piece::Bishop => bishop_attacks(from.index(), self.all),
                    Piece::Rook => rook_attacks(from.index(), self.all),
                    _ => queen_attacks(from.index(), self.all),
                };
                let targets = attacks & !own & check_mask & self.pin_ray(from, pinned);
                self.push_targets(list, from, targets);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::super::state::Board;
    use super::super::super::types::Square;

    #[test]
    fn rook_moves_stop_at_blockers() {
        let board: Board = "k7/8/8/8/1p2R2P/8/8/4K3 w - - 0 1".parse().unwrap();
        let rook_moves: Vec<_> = board
            .legal_moves()
            .iter()
            .copied()
            .filter(|mv| mv.from() == Square::new(3, 4))
            .collect();
        // Rank: d4, c4, b4 (capture), f4, g4 (h4 own pawn blocks).
        // File: e5, e6, e7, e8, e3, e2 (e1 own king blocks).
        assert_eq!(rook_moves.len(), 11);
        assert!(rook_moves
            .iter()
            .any(|mv| mv.is_capture() && mv.to() == Square::new(3, 1)));
        assert!(!rook_moves.iter().any(|mv| mv.to() == Square::new(3, 7)));
    }

    #[test]
    fn pinned_bishop_slides_only_on_the_pin_diagonal() {
        // Black queen h4 pins the f2 bishop against the e1 king.
        let board: Board = "4k3/8/8/8/7q/8/5B2/4K3 w - - 0 1".parse().unwrap();
        let bishop_moves: Vec<_> = board
            .legal_moves()
            .iter()
            .copied()
            .filter(|mv| mv.from() == Square(13))
            .collect();
        // Only g3 (interpose stays on line) and h4 (capture the pinner).
        assert_eq!(bishop_moves.len(), 2);
        assert!(bishop_moves.iter().any(|mv| mv.to() == Square::new(2, 6)));
        assert!(bishop_moves
            .iter()
            .any(|mv| mv.is_capture() && mv.to() == Square::new(3, 7)));
    }
}
