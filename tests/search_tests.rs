//! Search behavior tests through the library API.

use forte::board::search::{search, SearchState, Settings};
use forte::board::Board;
use forte::sync::StopFlag;

fn best_move_at_depth(fen: &str, depth: u32) -> Option<String> {
    let board: Board = fen.parse().expect("valid fen");
    let mut state = SearchState::new();
    let settings = Settings {
        depth: Some(depth),
        ..Settings::default()
    };
    search(&board, &mut state, &settings, &StopFlag::new(), None)
        .best_move
        .map(|mv| mv.to_string())
}

#[test]
fn back_rank_mate_in_one() {
    assert_eq!(
        best_move_at_depth("6k1/5ppp/8/8/8/8/8/R3K3 w - - 0 1", 3).as_deref(),
        Some("a1a8")
    );
}

#[test]
fn ladder_mate_in_one() {
    // Rook on a7 seals the seventh rank; Rb8 delivers mate.
    assert_eq!(
        best_move_at_depth("7k/R7/8/8/8/8/8/1R4K1 w - - 0 1", 4).as_deref(),
        Some("b1b8")
    );
}

#[test]
fn recaptures_rather_than_retreats() {
    // Black just took a knight on d4 with a pawn; white should take back.
    let best = best_move_at_depth("4k3/8/8/8/3p4/8/3Q4/4K3 w - - 0 1", 4).expect("a move");
    assert_eq!(best, "d2d4");
}

#[test]
fn search_depth_one_still_returns_a_move() {
    assert!(best_move_at_depth(forte::board::START_FEN, 1).is_some());
}

#[test]
fn stalemated_side_has_no_move() {
    // White king h1, black queen f2: g1, g2 and h2 are all covered but h1
    // itself is not attacked.
    let board: Board = "k7/8/8/8/8/8/5q2/7K w - - 0 1".parse().expect("valid fen");
    let mut state = SearchState::new();
    let settings = Settings {
        depth: Some(2),
        ..Settings::default()
    };
    let result = search(&board, &mut state, &settings, &StopFlag::new(), None);
    assert!(result.best_move.is_none());
    assert_eq!(result.score_cp, 0);
}

#[test]
fn nodes_and_depth_are_reported() {
    let board = Board::new();
    let mut state = SearchState::new();
    let settings = Settings {
        depth: Some(3),
        ..Settings::default()
    };
    let result = search(&board, &mut state, &settings, &StopFlag::new(), None);
    assert_eq!(result.depth, 3);
    assert!(result.nodes > 20);
}
