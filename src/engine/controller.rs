//! Search lifecycle controller.
//!
//! At most one background worker exists at any time; the controller always
//! joins a worker before spawning another or letting the process exit.
//! Shared mutable state is limited to the stop flag and the killer table,
//! which the single-worker invariant keeps race-free.

use std::sync::Arc;
use std::thread::{self, JoinHandle};

use parking_lot::Mutex;

use crate::board::search::{self, InfoCallback, SearchResult, SearchState, Settings};
use crate::board::Board;
use crate::sync::StopFlag;

/// A running search worker: the one-slot queue behind the blocking-`go`
/// contract. Dropping the job without joining is not possible through the
/// controller's interface.
struct SearchJob {
    stop: StopFlag,
    handle: JoinHandle<()>,
}

impl SearchJob {
    /// Wait for the worker to finish of its own accord.
    fn wait(self) {
        if self.handle.join().is_err() {
            log::warn!("search worker panicked");
        }
    }

    /// Request cancellation, then wait.
    fn stop_and_wait(self) {
        self.stop.stop();
        self.wait();
    }
}

/// Owns the current position and the lifecycle of the search worker.
///
/// States: Idle (no worker) -> Running (`start_search`) -> Idle again via
/// completion, `stop_search`, or the join inside the next `start_search`.
pub struct EngineController {
    board: Board,
    search_state: Arc<Mutex<SearchState>>,
    current_job: Option<SearchJob>,
    info_callback: Option<InfoCallback>,
}

impl EngineController {
    #[must_use]
    pub fn new() -> EngineController {
        EngineController {
            board: Board::new(),
            search_state: Arc::new(Mutex::new(SearchState::new())),
            current_job: None,
            info_callback: None,
        }
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Replace the current position. The running worker, if any, keeps its
    /// own copy of the previous position and is unaffected.
    pub fn set_board(&mut self, board: Board) {
        self.board = board;
    }

    /// Reset to the initial position and forget per-game search memory.
    pub fn new_game(&mut self) {
        self.stop_search();
        self.board = Board::new();
        self.search_state.lock().new_search();
    }

    #[must_use]
    pub fn is_searching(&self) -> bool {
        self.current_job.is_some()
    }

    /// Per-iteration progress consumer for subsequent searches.
    pub fn set_info_callback(&mut self, cb: Option<InfoCallback>) {
        self.info_callback = cb;
    }

    /// Start a search worker for the current position.
    ///
    /// If a worker is still running this blocks until it finishes (it is
    /// joined, not cancelled): `go` during `go` queues rather than errors.
    /// `on_complete` runs exactly once on the worker thread with the
    /// terminal result.
    pub fn start_search<F>(&mut self, settings: Settings, on_complete: F)
    where
        F: FnOnce(SearchResult) + Send + 'static,
    {
        if let Some(job) = self.current_job.take() {
            log::debug!("go while searching: waiting for the running worker");
            job.wait();
        }

        let stop = StopFlag::new();
        let worker_stop = stop.clone();
        let board = self.board.clone();
        let state = Arc::clone(&self.search_state);
        let info = self.info_callback.clone();

        let handle = thread::Builder::new()
            .name("search".to_string())
            .spawn(move || {
                // Held for the whole search; sound because the controller
                // never runs two workers at once.
                let mut guard = state.lock();
                let result = search::search(&board, &mut guard, &settings, &worker_stop, info.as_ref());
                drop(guard);
                on_complete(result);
            })
            .expect("failed to spawn search thread");

        self.current_job = Some(SearchJob { stop, handle });
    }

    /// Cancel the running search and wait for its result to be emitted.
    /// A no-op when idle.
    pub fn stop_search(&mut self) {
        if let Some(job) = self.current_job.take() {
            job.stop_and_wait();
        }
    }

    /// Wait for the running search without cancelling it.
    pub fn wait_for_search(&mut self) {
        if let Some(job) = self.current_job.take() {
            job.wait();
        }
    }

    /// Stop-and-join before process exit; the `quit` path.
    pub fn shutdown(&mut self) {
        self.stop_search();
    }
}

impl Default for EngineController {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for EngineController {
    fn drop(&mut self) {
        self.stop_search();
    }
}
