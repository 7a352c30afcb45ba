//! Universal Chess Interface protocol front end.
//!
//! One command per line on stdin; replies on stdout, flushed per line
//! because the GUI reads through a pipe. The search worker prints its own
//! `info` and `bestmove` lines, so the loop thread stays free to accept
//! `stop` and `isready` while a search runs.

pub mod command;

use std::io::{self, BufRead, Write};
use std::sync::Arc;

use crate::board::search::{SearchReport, Settings};
use crate::board::{Board, MoveParseError};
use crate::engine::EngineController;

pub use command::{parse_uci_command, UciCommand};

pub const ENGINE_NAME: &str = concat!("Forte ", env!("CARGO_PKG_VERSION"));
pub const ENGINE_AUTHOR: &str = "the Forte developers";

/// Write one protocol line and flush it past the pipe buffer.
fn emit(line: &str) {
    let mut out = io::stdout();
    let _ = writeln!(out, "{line}");
    let _ = out.flush();
}

/// `info` line for one completed search iteration.
#[must_use]
pub fn format_info(report: &SearchReport) -> String {
    let mut line = format!(
        "info score cp {} depth {} time {} nps {} nodes {} pv",
        report.score_cp,
        report.depth,
        report.elapsed.as_millis(),
        report.nps(),
        report.nodes,
    );
    for mv in &report.pv {
        line.push(' ');
        line.push_str(&mv.to_string());
    }
    line
}

/// Error applying a `position` command.
#[derive(Debug, Clone)]
pub enum PositionError {
    MissingParts,
    InvalidFen(crate::board::FenError),
    InvalidMove(MoveParseError),
}

impl std::fmt::Display for PositionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PositionError::MissingParts => write!(f, "position command is incomplete"),
            PositionError::InvalidFen(e) => write!(f, "invalid position: {e}"),
            PositionError::InvalidMove(e) => write!(f, "invalid move: {e}"),
        }
    }
}

impl std::error::Error for PositionError {}

/// Build a board from `position startpos|[fen] <fen> [moves ...]` tokens
/// (including the leading `position`).
pub fn parse_position(parts: &[String]) -> Result<Board, PositionError> {
    let mut i = 1;
    let board = match parts.get(i).map(String::as_str) {
        Some("startpos") => {
            i += 1;
            Board::new()
        }
        Some(token) => {
            // Optional `fen` keyword, then fields up to `moves` or the end.
            if token == "fen" {
                i += 1;
            }
            let fen_end = parts[i..]
                .iter()
                .position(|p| p == "moves")
                .map_or(parts.len(), |offset| i + offset);
            if fen_end == i {
                return Err(PositionError::MissingParts);
            }
            let fen = parts[i..fen_end].join(" ");
            i = fen_end;
            fen.parse().map_err(PositionError::InvalidFen)?
        }
        None => return Err(PositionError::MissingParts),
    };

    let mut board = board;
    if parts.get(i).map(String::as_str) == Some("moves") {
        for text in &parts[i + 1..] {
            let mv = board.parse_move(text).map_err(PositionError::InvalidMove)?;
            board = board.make_move(mv);
        }
    }
    Ok(board)
}

/// Run the blocking command loop until `quit` or end of input.
pub fn run_uci_loop() {
    let mut controller = EngineController::new();
    controller.set_info_callback(Some(Arc::new(|report: &SearchReport| {
        emit(&format_info(report));
    })));

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let Ok(line) = line else { break };
        let Some(cmd) = parse_uci_command(&line) else {
            continue;
        };

        match cmd {
            UciCommand::Uci => {
                emit(&format!("id name {ENGINE_NAME}"));
                emit(&format!("id author {ENGINE_AUTHOR}"));
                emit("uciok");
            }
            UciCommand::IsReady => emit("readyok"),
            UciCommand::UciNewGame => controller.new_game(),
            UciCommand::Position(parts) => match parse_position(&parts) {
                Ok(board) => controller.set_board(board),
                Err(e) => log::warn!("{e}"),
            },
            UciCommand::Eval => {
                emit(&format!("info string eval cp {}", controller.board().evaluate()));
            }
            UciCommand::Go(parts) => {
                let tokens: Vec<&str> = parts.iter().skip(1).map(String::as_str).collect();
                let settings = Settings::parse(&tokens);
                controller.start_search(settings, |result| {
                    match result.best_move {
                        Some(mv) => emit(&format!("bestmove {mv}")),
                        None => emit("bestmove 0000"),
                    }
                });
            }
            UciCommand::Stop => controller.stop_search(),
            UciCommand::Quit => break,
            UciCommand::Unknown(text) => log::debug!("ignoring command '{text}'"),
        }
    }

    controller.shutdown();
}
