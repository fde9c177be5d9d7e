//! Search strategies over the call schedule.
//!
//! Two strategies share one contract ([`Strategy`]): fill the
//! assignment of a [`CallSchedule`] and return the best-scoring legal
//! completion found, or an explicit error when none exists.
//!
//! # Strategies
//!
//! - [`Bootstrap`]: repeated randomized assignment with bounded
//!   retries per trial. The production default; cost is linear in
//!   trials × retries.
//! - [`Backtracking`]: exhaustive depth-first search with legality
//!   pruning on partial states. Guaranteed optimal but combinatorial;
//!   practical only up to roughly two weeks of days.
//!
//! Both are single-threaded and synchronous; each trial fully
//! reinitializes the working assignment before use.

mod backtrack;
mod bootstrap;

pub use backtrack::Backtracking;
pub use bootstrap::Bootstrap;

use crate::error::SolveError;
use crate::models::CallSchedule;

/// A search strategy producing the best legal schedule it can find.
pub trait Strategy {
    /// Searches from `base` (assignment state ignored) and returns a
    /// completed schedule.
    ///
    /// # Errors
    /// - [`SolveError::NoProviderAvailable`] when some day has an empty
    ///   candidate set.
    /// - [`SolveError::Infeasible`] when no legal full assignment was
    ///   found.
    fn solve(&mut self, base: &CallSchedule) -> Result<CallSchedule, SolveError>;
}

/// Candidate provider indices per day, computed once per solve.
///
/// Fails fast on the first day with no available provider.
fn candidates_by_day(schedule: &CallSchedule) -> Result<Vec<Vec<usize>>, SolveError> {
    (0..schedule.day_count())
        .map(|day| {
            let candidates = schedule.available_on(day);
            if candidates.is_empty() {
                Err(SolveError::NoProviderAvailable {
                    date: schedule.days()[day],
                })
            } else {
                Ok(candidates)
            }
        })
        .collect()
}
