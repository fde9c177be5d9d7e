//! Randomized bootstrap search.
//!
//! Each trial fills every day with a uniformly random available
//! provider, then tests legality of the completed assignment. Illegal
//! completions are re-drawn up to a bounded retry count; legal ones are
//! scored and the best snapshot across all trials is kept.
//!
//! The retry bound is what makes infeasible inputs terminate: a roster
//! with no legal full assignment exhausts its retries in every trial
//! and surfaces [`SolveError::Infeasible`] instead of spinning forever.
//!
//! Logging levels follow the usual solver conventions:
//! - **INFO**: solve start/end with problem scale and final score
//! - **DEBUG**: incumbent improvements per trial

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};

use super::{candidates_by_day, Strategy};
use crate::error::SolveError;
use crate::models::CallSchedule;
use crate::rules::{is_legal, LegalityPolicy};
use crate::scoring::total_score;

/// Default number of randomized trials.
pub const DEFAULT_TRIALS: usize = 100;

/// Default retry bound per trial before the trial is abandoned.
pub const DEFAULT_MAX_RETRIES: usize = 1000;

/// Randomized bootstrap strategy.
///
/// Owns its RNG so repeated solves draw fresh randomness; seed it with
/// [`Bootstrap::with_seed`] for reproducible runs.
#[derive(Debug)]
pub struct Bootstrap {
    trials: usize,
    max_retries: usize,
    policy: LegalityPolicy,
    rng: SmallRng,
}

impl Bootstrap {
    /// Creates a bootstrap strategy with default limits and an
    /// OS-seeded RNG.
    pub fn new() -> Self {
        Self {
            trials: DEFAULT_TRIALS,
            max_retries: DEFAULT_MAX_RETRIES,
            policy: LegalityPolicy::default(),
            rng: SmallRng::from_os_rng(),
        }
    }

    /// Creates a bootstrap strategy with a fixed RNG seed.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
            ..Self::new()
        }
    }

    /// Sets the trial count.
    pub fn with_trials(mut self, trials: usize) -> Self {
        self.trials = trials;
        self
    }

    /// Sets the per-trial retry bound.
    pub fn with_max_retries(mut self, max_retries: usize) -> Self {
        self.max_retries = max_retries;
        self
    }

    /// Sets the legality policy.
    pub fn with_policy(mut self, policy: LegalityPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Draws random full assignments into `working` until one is legal
    /// or the retry bound is hit.
    fn fill_legal(&mut self, working: &mut CallSchedule, candidates: &[Vec<usize>]) -> bool {
        for _ in 0..self.max_retries {
            working.reset();
            for (day, day_candidates) in candidates.iter().enumerate() {
                let pick = day_candidates[self.rng.random_range(0..day_candidates.len())];
                working.assign(day, pick);
            }
            if is_legal(working, &self.policy) {
                return true;
            }
        }
        false
    }
}

impl Default for Bootstrap {
    fn default() -> Self {
        Self::new()
    }
}

impl Strategy for Bootstrap {
    fn solve(&mut self, base: &CallSchedule) -> Result<CallSchedule, SolveError> {
        let candidates = candidates_by_day(base)?;
        let mut working = base.clone();
        let mut best: Option<(i64, Vec<Option<usize>>)> = None;

        info!(
            trials = self.trials,
            days = base.day_count(),
            providers = base.providers().len(),
            "starting bootstrap search"
        );

        for trial in 0..self.trials {
            if !self.fill_legal(&mut working, &candidates) {
                continue;
            }
            let score = total_score(&working);
            if best.as_ref().is_none_or(|(incumbent, _)| score < *incumbent) {
                debug!(trial, score, "new incumbent");
                best = Some((score, working.snapshot()));
            }
        }

        match best {
            Some((score, snapshot)) => {
                info!(score, "bootstrap search finished");
                let mut result = base.clone();
                result.restore(&snapshot);
                Ok(result)
            }
            None => Err(SolveError::Infeasible {
                trials: self.trials,
            }),
        }
    }
}
