//! Exhaustive backtracking search.
//!
//! Depth-first assignment of the first unfilled day, trying every
//! available provider and pruning any branch whose partial assignment
//! already violates a rule. Every complete legal leaf is scored and the
//! global minimum kept, so the result is optimal — at combinatorial
//! cost. Practical up to roughly two weeks of days; beyond that use
//! [`Bootstrap`](super::Bootstrap).

use tracing::{debug, info};

use super::{candidates_by_day, Strategy};
use crate::error::SolveError;
use crate::models::CallSchedule;
use crate::rules::{is_legal, LegalityPolicy};
use crate::scoring::total_score;

/// Exhaustive backtracking strategy.
#[derive(Debug, Clone, Default)]
pub struct Backtracking {
    policy: LegalityPolicy,
}

/// Best-so-far state threaded through the recursion.
#[derive(Debug)]
struct SearchContext {
    best_score: i64,
    best: Option<Vec<Option<usize>>>,
}

impl Backtracking {
    /// Creates a backtracking strategy with the default policy.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the legality policy.
    pub fn with_policy(mut self, policy: LegalityPolicy) -> Self {
        self.policy = policy;
        self
    }

    fn descend(
        &self,
        working: &mut CallSchedule,
        candidates: &[Vec<usize>],
        ctx: &mut SearchContext,
    ) {
        let Some(day) = working.next_unassigned() else {
            let score = total_score(working);
            if score < ctx.best_score {
                debug!(score, "new incumbent leaf");
                ctx.best_score = score;
                ctx.best = Some(working.snapshot());
            }
            return;
        };

        for &provider in &candidates[day] {
            working.assign(day, provider);
            if is_legal(working, &self.policy) {
                self.descend(working, candidates, ctx);
            }
            working.clear(day);
        }
    }
}

impl Strategy for Backtracking {
    fn solve(&mut self, base: &CallSchedule) -> Result<CallSchedule, SolveError> {
        let candidates = candidates_by_day(base)?;
        let mut working = base.clone();
        working.reset();

        info!(
            days = base.day_count(),
            providers = base.providers().len(),
            "starting exhaustive search"
        );

        let mut ctx = SearchContext {
            best_score: i64::MAX,
            best: None,
        };
        self.descend(&mut working, &candidates, &mut ctx);

        match ctx.best {
            Some(snapshot) => {
                info!(score = ctx.best_score, "exhaustive search finished");
                let mut result = base.clone();
                result.restore(&snapshot);
                Ok(result)
            }
            None => Err(SolveError::Infeasible { trials: 1 }),
        }
    }
}
