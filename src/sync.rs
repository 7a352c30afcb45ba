//! Search cancellation flag.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Shared cooperative stop flag: the controller sets it, the search polls
/// it at bounded intervals. The sole cancellation channel; there is no
/// preemptive cancellation.
#[derive(Clone, Debug, Default)]
pub struct StopFlag(Arc<AtomicBool>);

impl StopFlag {
    #[must_use]
    pub fn new() -> StopFlag {
        StopFlag(Arc::new(AtomicBool::new(false)))
    }

    /// A flag that is already set; handy in tests.
    #[must_use]
    pub fn stopped() -> StopFlag {
        let flag = StopFlag::new();
        flag.stop();
        flag
    }

    #[inline]
    pub fn stop(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    #[inline]
    #[must_use]
    pub fn is_stopped(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}
