//! Iterative deepening negamax alpha-beta with quiescence.

use std::time::Instant;

use crate::sync::StopFlag;

use super::super::state::Board;
use super::super::types::{Move, MAX_PLY};
use super::move_order::{order_captures, order_moves, KillerTable};
use super::{InfoCallback, SearchReport, SearchResult, SearchState, Settings, INFINITY_SCORE, MATE_SCORE};

/// Nodes between polls of the stop flag and deadline; keeps cancellation
/// latency bounded without a per-node atomic load.
const STOP_POLL_MASK: u64 = 1023;

struct SearchContext<'a> {
    stop: &'a StopFlag,
    killers: &'a mut KillerTable,
    deadline: Option<Instant>,
    nodes: u64,
    halted: bool,
}

impl SearchContext<'_> {
    #[inline]
    fn should_halt(&mut self) -> bool {
        if self.halted {
            return true;
        }
        if self.nodes & STOP_POLL_MASK == 0 {
            if self.stop.is_stopped()
                || self.deadline.is_some_and(|deadline| Instant::now() >= deadline)
            {
                self.halted = true;
            }
        }
        self.halted
    }
}

/// Run a full search for the position and return the best move found.
///
/// Progress reports are pushed through `info` after every completed
/// iteration; an iteration interrupted by the stop flag or the deadline is
/// discarded in favor of the last completed one.
pub fn search(
    board: &Board,
    state: &mut SearchState,
    settings: &Settings,
    stop: &StopFlag,
    info: Option<&InfoCallback>,
) -> SearchResult {
    state.new_search();
    let start = Instant::now();
    let deadline = settings.time_budget(board.turn).map(|budget| start + budget);
    let max_depth = settings
        .depth
        .unwrap_or(MAX_PLY as u32 - 1)
        .clamp(1, MAX_PLY as u32 - 1);

    let root_moves = board.legal_moves();
    if root_moves.is_empty() {
        return SearchResult {
            best_move: None,
            score_cp: if board.in_check() { -MATE_SCORE } else { 0 },
            depth: 0,
            nodes: 0,
        };
    }

    let mut ctx = SearchContext {
        stop,
        killers: &mut state.killers,
        deadline,
        nodes: 0,
        halted: false,
    };

    let mut best_move = root_moves.as_slice()[0];
    let mut best_score = 0;
    let mut reached_depth = 0;

    for depth in 1..=max_depth {
        let mut pv = Vec::new();
        let score = negamax(
            board,
            &mut ctx,
            depth,
            0,
            -INFINITY_SCORE,
            INFINITY_SCORE,
            &mut pv,
        );

        if ctx.halted {
            break;
        }

        if let Some(&first) = pv.first() {
            best_move = first;
            best_score = score;
            reached_depth = depth;
        }

        if let Some(cb) = info {
            cb(&SearchReport {
                depth,
                score_cp: score,
                nodes: ctx.nodes,
                elapsed: start.elapsed(),
                pv: pv.clone(),
            });
        }

        // A proven mate cannot improve with more depth.
        if score.abs() >= MATE_SCORE - MAX_PLY as i32 {
            break;
        }
        // No point starting an iteration the clock cannot finish.
        if deadline.is_some_and(|d| Instant::now() >= d) {
            break;
        }
    }

    SearchResult {
        best_move: Some(best_move),
        score_cp: best_score,
        depth: reached_depth,
        nodes: ctx.nodes,
    }
}

fn negamax(
    board: &Board,
    ctx: &mut SearchContext<'_>,
    depth: u32,
    ply: usize,
    mut alpha: i32,
    beta: i32,
    pv: &mut Vec<Move>,
) -> i32 {
    if ctx.should_halt() {
        return 0;
    }
    if depth == 0 {
        pv.clear();
        return quiescence(board, ctx, ply, alpha, beta);
    }
    ctx.nodes += 1;

    let mut moves = board.legal_moves();
    if moves.is_empty() {
        pv.clear();
        return if board.in_check() {
            ply as i32 - MATE_SCORE
        } else {
            0
        };
    }

    order_moves(board, &mut moves, ply, ctx.killers);

    let mut child_pv = Vec::new();
    for &mv in moves.as_slice() {
        let next = board.make_move(mv);
        child_pv.clear();
        let score = -negamax(&next, ctx, depth - 1, ply + 1, -beta, -alpha, &mut child_pv);
        if ctx.halted {
            return 0;
        }

        if score >= beta {
            // Quiet refutations are worth remembering at this ply.
            if !mv.is_capture() && mv.promoted_piece().is_none() {
                ctx.killers.store(ply, mv);
            }
            return beta;
        }
        if score > alpha {
            alpha = score;
            pv.clear();
            pv.push(mv);
            pv.extend_from_slice(&child_pv);
        }
    }

    alpha
}

fn quiescence(
    board: &Board,
    ctx: &mut SearchContext<'_>,
    ply: usize,
    mut alpha: i32,
    beta: i32,
) -> i32 {
    if ctx.should_halt() {
        return 0;
    }
    ctx.nodes += 1;

    let stand_pat = board.evaluate_relative();
    if stand_pat >= beta {
        return beta;
    }
    if stand_pat > alpha {
        alpha = stand_pat;
    }
    if ply >= MAX_PLY - 1 {
        return alpha;
    }

    let mut captures = board.capture_moves();
    order_captures(board, &mut captures);

    for &mv in captures.as_slice() {
        // Exchanges that lose material outright cannot raise alpha here.
        if board.see_capture(mv) < 0 {
            continue;
        }
        let next = board.make_move(mv);
        let score = -quiescence(&next, ctx, ply + 1, -beta, -alpha);
        if ctx.halted {
            return 0;
        }
        if score >= beta {
            return beta;
        }
        if score > alpha {
            alpha = score;
        }
    }

    alpha
}
