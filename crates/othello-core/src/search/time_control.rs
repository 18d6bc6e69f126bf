//! Wall-clock budget for a single move search.

use std::time::{Duration, Instant};

/// Default per-move budget.
pub const DEFAULT_TIME_BUDGET: Duration = Duration::from_millis(2500);

/// Tracks elapsed time against an optional budget.
///
/// The check is cooperative: the search polls [`TimeControl::is_exhausted`]
/// between children and winds down on its own.
#[derive(Clone, Copy, Debug)]
pub struct TimeControl {
    start: Instant,
    budget: Option<Duration>,
}

impl TimeControl {
    /// Starts the clock.
    ///
    /// # Arguments
    ///
    /// * `budget` - Time allowed for the search, or `None` for no limit.
    ///   `Some(Duration::ZERO)` is exhausted from the start.
    pub fn new(budget: Option<Duration>) -> Self {
        TimeControl {
            start: Instant::now(),
            budget,
        }
    }

    /// A clock that never runs out.
    pub fn unlimited() -> Self {
        Self::new(None)
    }

    pub fn budget(&self) -> Option<Duration> {
        self.budget
    }

    #[inline]
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    /// Returns `true` once the elapsed time has reached the budget.
    #[inline]
    pub fn is_exhausted(&self) -> bool {
        match self.budget {
            Some(budget) => self.elapsed() >= budget,
            None => false,
        }
    }
}

impl Default for TimeControl {
    fn default() -> Self {
        Self::new(Some(DEFAULT_TIME_BUDGET))
    }
}
