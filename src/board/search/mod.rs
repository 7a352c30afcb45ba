//! Search: settings, shared per-search state, and the iterative deepening
//! alpha-beta driver.

mod alphabeta;
mod move_order;

use std::sync::Arc;
use std::time::Duration;

pub use alphabeta::search;
pub use move_order::{order_moves, KillerTable};

use super::types::{Color, Move};

/// Score used for checkmate, offset by ply so nearer mates score higher.
pub const MATE_SCORE: i32 = 30_000;
pub const INFINITY_SCORE: i32 = 32_000;

/// Time-control inputs parsed from a `go` command. All advisory: the
/// search derives its own soft deadline from them.
#[derive(Debug, Clone, Default)]
pub struct Settings {
    pub wtime: Option<u64>,
    pub btime: Option<u64>,
    pub winc: Option<u64>,
    pub binc: Option<u64>,
    pub movestogo: Option<u32>,
    pub depth: Option<u32>,
    pub movetime: Option<u64>,
    pub infinite: bool,
}

impl Settings {
    /// Parse the tokens following `go`. Unrecognized tokens are skipped so
    /// protocol extensions never break the command.
    #[must_use]
    pub fn parse(tokens: &[&str]) -> Settings {
        let mut settings = Settings::default();
        let mut iter = tokens.iter().peekable();
        while let Some(&token) = iter.next() {
            let mut value = |target: &mut Option<u64>| {
                if let Some(parsed) = iter.peek().and_then(|v| v.parse().ok()) {
                    *target = Some(parsed);
                    iter.next();
                }
            };
            match token {
                "infinite" => settings.infinite = true,
                "wtime" => value(&mut settings.wtime),
                "btime" => value(&mut settings.btime),
                "winc" => value(&mut settings.winc),
                "binc" => value(&mut settings.binc),
                "movetime" => value(&mut settings.movetime),
                "movestogo" => {
                    let mut raw = None;
                    value(&mut raw);
                    settings.movestogo = raw.map(|v| v as u32);
                }
                "depth" => {
                    let mut raw = None;
                    value(&mut raw);
                    settings.depth = raw.map(|v| v as u32);
                }
                _ => log::debug!("ignoring go token '{token}'"),
            }
        }
        settings
    }

    /// Soft time budget for this search, if any. Fixed move time wins;
    /// otherwise a slice of the remaining clock plus the increment.
    #[must_use]
    pub fn time_budget(&self, turn: Color) -> Option<Duration> {
        if self.infinite {
            return None;
        }
        if let Some(ms) = self.movetime {
            return Some(Duration::from_millis(ms));
        }
        let (time, inc) = match turn {
            Color::White => (self.wtime, self.winc),
            Color::Black => (self.btime, self.binc),
        };
        let remaining = time?;
        let slice = u64::from(self.movestogo.unwrap_or(30).max(1));
        Some(Duration::from_millis(
            (remaining / slice + inc.unwrap_or(0)).min(remaining.saturating_sub(50).max(1)),
        ))
    }
}

/// State that survives across plies within one search. Cleared when a new
/// search begins; guarded by the single-active-worker invariant.
pub struct SearchState {
    pub killers: KillerTable,
}

impl SearchState {
    #[must_use]
    pub fn new() -> SearchState {
        SearchState {
            killers: KillerTable::new(),
        }
    }

    /// Reset per-search memory; called once at the start of every search.
    pub fn new_search(&mut self) {
        self.killers.clear();
    }
}

impl Default for SearchState {
    fn default() -> Self {
        Self::new()
    }
}

/// Progress record emitted after each completed iteration.
#[derive(Debug, Clone)]
pub struct SearchReport {
    pub depth: u32,
    /// Centipawns relative to the side to move.
    pub score_cp: i32,
    pub nodes: u64,
    pub elapsed: Duration,
    pub pv: Vec<Move>,
}

impl SearchReport {
    /// Nodes per second, derived from elapsed time.
    #[must_use]
    pub fn nps(&self) -> u64 {
        let ms = self.elapsed.as_millis() as u64;
        self.nodes * 1000 / ms.max(1)
    }
}

/// Per-iteration progress consumer.
pub type InfoCallback = Arc<dyn Fn(&SearchReport) + Send + Sync>;

/// Terminal outcome of one search.
#[derive(Debug, Clone)]
pub struct SearchResult {
    pub best_move: Option<Move>,
    pub score_cp: i32,
    pub depth: u32,
    pub nodes: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn go_tokens_parse_and_unknowns_are_skipped() {
        let settings =
            Settings::parse(&["wtime", "60000", "btime", "50000", "winc", "1000", "frobnicate",
                "movestogo", "20", "depth", "8"]);
        assert_eq!(settings.wtime, Some(60000));
        assert_eq!(settings.btime, Some(50000));
        assert_eq!(settings.winc, Some(1000));
        assert_eq!(settings.movestogo, Some(20));
        assert_eq!(settings.depth, Some(8));
        assert!(!settings.infinite);

        let settings = Settings::parse(&["infinite"]);
        assert!(settings.infinite);
        assert_eq!(settings.time_budget(Color::White), None);
    }

    #[test]
    fn movetime_beats_clock_slice() {
        let settings = Settings::parse(&["wtime", "60000", "movetime", "250"]);
        assert_eq!(
            settings.time_budget(Color::White),
            Some(Duration::from_millis(250))
        );
    }

    #[test]
    fn clock_slice_uses_the_movers_clock() {
        let settings = Settings::parse(&["wtime", "30000", "btime", "3000", "movestogo", "30"]);
        assert_eq!(
            settings.time_budget(Color::White),
            Some(Duration::from_millis(1000))
        );
        assert_eq!(
            settings.time_budget(Color::Black),
            Some(Duration::from_millis(100))
        );
    }

    #[test]
    fn depth_only_search_has_no_deadline() {
        let settings = Settings::parse(&["depth", "6"]);
        assert_eq!(settings.time_budget(Color::White), None);
    }
}
