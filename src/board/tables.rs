//! Precomputed lookup tables for non-sliding attacks and square geometry.

use once_cell::sync::Lazy;

use super::types::{Bitboard, Color, Square};

fn offset_targets(sq: usize, deltas: &[(i8, i8)]) -> Bitboard {
    let rank = (sq / 8) as i8;
    let file = (sq % 8) as i8;
    let mut bb = 0u64;
    for &(dr, df) in deltas {
        let r = rank + dr;
        let f = file + df;
        if (0..8).contains(&r) && (0..8).contains(&f) {
            bb |= 1u64 << (r * 8 + f);
        }
    }
    bb
}

/// Knight attack sets.
pub static KNIGHT_ATTACKS: Lazy<[Bitboard; 64]> = Lazy::new(|| {
    let deltas = [
        (2, 1),
        (1, 2),
        (-1, 2),
        (-2, 1),
        (-2, -1),
        (-1, -2),
        (1, -2),
        (2, -1),
    ];
    std::array::from_fn(|sq| offset_targets(sq, &deltas))
});

/// King attack sets.
pub static KING_ATTACKS: Lazy<[Bitboard; 64]> = Lazy::new(|| {
    let deltas = [
        (1, 0),
        (-1, 0),
        (0, 1),
        (0, -1),
        (1, 1),
        (1, -1),
        (-1, 1),
        (-1, -1),
    ];
    std::array::from_fn(|sq| offset_targets(sq, &deltas))
});

/// Pawn capture targets per color. Back-rank entries exist but are never
/// queried for a side's own pawns; callers own that invariant.
pub static PAWN_ATTACKS: Lazy<[[Bitboard; 64]; 2]> = Lazy::new(|| {
    [
        std::array::from_fn(|sq| offset_targets(sq, &[(1, -1), (1, 1)])),
        std::array::from_fn(|sq| offset_targets(sq, &[(-1, -1), (-1, 1)])),
    ]
});

#[inline]
#[must_use]
pub fn pawn_attacks(color: Color, sq: usize) -> Bitboard {
    PAWN_ATTACKS[color.index()][sq]
}

const QUEEN_DELTAS: [(i8, i8); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

/// `BETWEEN[a][b]`: squares strictly between two aligned squares, empty
/// when they share no rank, file, or diagonal.
pub static BETWEEN: Lazy<Box<[[Bitboard; 64]; 64]>> = Lazy::new(|| {
    let mut between = Box::new([[0u64; 64]; 64]);
    for a in 0..64 {
        for &(dr, df) in &QUEEN_DELTAS {
            let mut r = (a / 8) as i8 + dr;
            let mut f = (a % 8) as i8 + df;
            let mut walked = 0u64;
            while (0..8).contains(&r) && (0..8).contains(&f) {
                let b = (r * 8 + f) as usize;
                between[a][b] = walked;
                walked |= 1u64 << b;
                r += dr;
                f += df;
            }
        }
    }
    between
});

/// `LINE[a][b]`: the full edge-to-edge line through two aligned squares
/// (both endpoints included), empty when unaligned. A pinned piece may only
/// move along `LINE[king][pinned]`.
pub static LINE: Lazy<Box<[[Bitboard; 64]; 64]>> = Lazy::new(|| {
    let mut line = Box::new([[0u64; 64]; 64]);
    for a in 0..64 {
        for &(dr, df) in &QUEEN_DELTAS {
            // Entire line through `a` in this direction, both ways.
            let mut full = 1u64 << a;
            for dir in [(dr, df), (-dr, -df)] {
                let mut r = (a / 8) as i8 + dir.0;
                let mut f = (a % 8) as i8 + dir.1;
                while (0..8).contains(&r) && (0..8).contains(&f) {
                    full |= 1u64 << (r * 8 + f);
                    r += dir.0;
                    f += dir.1;
                }
            }
            let mut r = (a / 8) as i8 + dr;
            let mut f = (a % 8) as i8 + df;
            while (0..8).contains(&r) && (0..8).contains(&f) {
                line[a][(r * 8 + f) as usize] = full;
                r += dr;
                f += df;
            }
        }
    }
    line
});

#[inline]
#[must_use]
pub fn between(a: Square, b: Square) -> Bitboard {
    BETWEEN[a.index()][b.index()]
}

#[inline]
#[must_use]
pub fn line_through(a: Square, b: Square) -> Bitboard {
    LINE[a.index()][b.index()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn knight_corner_has_two_targets() {
        assert_eq!(KNIGHT_ATTACKS[0].count_ones(), 2);
        assert_eq!(KNIGHT_ATTACKS[27].count_ones(), 8); // d4
    }

    #[test]
    fn pawn_attacks_are_color_directed() {
        // White pawn on e4 attacks d5 and f5.
        let e4 = Square::new(3, 4);
        let expected = Square::new(4, 3).bb() | Square::new(4, 5).bb();
        assert_eq!(pawn_attacks(Color::White, e4.index()), expected);
        // Black pawn on e4 attacks d3 and f3.
        let expected = Square::new(2, 3).bb() | Square::new(2, 5).bb();
        assert_eq!(pawn_attacks(Color::Black, e4.index()), expected);
        // Edge file: a2 white attacks only b3.
        let a2 = Square::new(1, 0);
        assert_eq!(pawn_attacks(Color::White, a2.index()), Square::new(2, 1).bb());
    }

    #[test]
    fn between_and_line_geometry() {
        let a1 = Square::new(0, 0);
        let a4 = Square::new(3, 0);
        let h8 = Square::new(7, 7);
        let b2 = Square::new(1, 1);

        assert_eq!(between(a1, a4), Square::new(1, 0).bb() | Square::new(2, 0).bb());
        assert_eq!(between(a1, b2), 0);
        // a1-h8 diagonal passes through b2.
        assert_ne!(line_through(a1, h8) & b2.bb(), 0);
        // Unaligned squares share no line.
        assert_eq!(line_through(a4, h8), 0);
        // The line contains both endpoints.
        assert_ne!(line_through(a1, a4) & a1.bb(), 0);
        assert_ne!(line_through(a1, a4) & a4.bb(), 0);
    }
}
