//! Criterion benchmarks for the hot paths: attack lookups, move
//! generation, exchange evaluation, and shallow search.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use forte::board::magics::{bishop_attacks, rook_attacks};
use forte::board::search::{search, KillerTable, order_moves, SearchState, Settings};
use forte::board::{Board, Square};
use forte::sync::StopFlag;

const KIWIPETE: &str = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1";

fn bench_attack_lookup(c: &mut Criterion) {
    let mut group = c.benchmark_group("attacks");
    let occupancies = [0u64, 0xFF00_FF00_FF00_FF00, 0x00FF_00FF_00FF_00FF];

    group.bench_function("rook_all_squares", |b| {
        b.iter(|| {
            let mut acc = 0u64;
            for sq in 0..64 {
                for occ in occupancies {
                    acc ^= rook_attacks(black_box(sq), black_box(occ));
                }
            }
            acc
        })
    });

    group.bench_function("bishop_all_squares", |b| {
        b.iter(|| {
            let mut acc = 0u64;
            for sq in 0..64 {
                for occ in occupancies {
                    acc ^= bishop_attacks(black_box(sq), black_box(occ));
                }
            }
            acc
        })
    });

    group.finish();
}

fn bench_movegen(c: &mut Criterion) {
    let mut group = c.benchmark_group("movegen");

    let startpos = Board::new();
    group.bench_function("startpos", |b| b.iter(|| black_box(startpos.legal_moves())));

    let kiwipete: Board = KIWIPETE.parse().expect("valid fen");
    group.bench_function("kiwipete", |b| b.iter(|| black_box(kiwipete.legal_moves())));

    for depth in 1..=3 {
        group.bench_with_input(BenchmarkId::new("perft", depth), &depth, |b, &depth| {
            b.iter(|| startpos.perft(black_box(depth)))
        });
    }

    group.finish();
}

fn bench_see_and_ordering(c: &mut Criterion) {
    let mut group = c.benchmark_group("ordering");
    let board: Board = KIWIPETE.parse().expect("valid fen");

    group.bench_function("see_center", |b| {
        b.iter(|| black_box(board.see(black_box(Square::new(4, 3)))))
    });

    let killers = KillerTable::new();
    group.bench_function("order_kiwipete", |b| {
        b.iter(|| {
            let mut moves = board.legal_moves();
            order_moves(&board, &mut moves, 0, &killers);
            black_box(moves.len())
        })
    });

    group.finish();
}

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("search");
    group.sample_size(10);

    for depth in [3, 4] {
        group.bench_with_input(BenchmarkId::new("startpos", depth), &depth, |b, &depth| {
            b.iter(|| {
                let board = Board::new();
                let mut state = SearchState::new();
                let settings = Settings {
                    depth: Some(depth),
                    ..Settings::default()
                };
                search(&board, &mut state, &settings, &StopFlag::new(), None)
            })
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_attack_lookup,
    bench_movegen,
    bench_see_and_ordering,
    bench_search
);
criterion_main!(benches);
