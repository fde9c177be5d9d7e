//! Error taxonomy.
//!
//! Two families: configuration errors surface before the solver runs
//! (the core assumes well-formed input), solve errors surface when no
//! legal roster can be produced. Rule evaluation and scoring are total
//! over well-formed input and have no error paths.

use chrono::NaiveDate;
use thiserror::Error;

/// Errors raised while loading or converting a call sheet.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A date field did not parse as `YYYY.MM.DD`.
    #[error("invalid {field} date '{value}': expected YYYY.MM.DD")]
    InvalidDate { field: &'static str, value: String },

    /// The schedule range is inverted.
    #[error("schedule start {start} is after end {end}")]
    InvalidDateRange { start: NaiveDate, end: NaiveDate },

    /// The call sheet document is not valid JSON.
    #[error("malformed call sheet: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors raised by the search strategies.
#[derive(Debug, Error)]
pub enum SolveError {
    /// Every trial (or the whole exhaustive tree) failed to produce a
    /// legal full assignment.
    #[error("no legal schedule found after {trials} trial(s)")]
    Infeasible { trials: usize },

    /// Some day has an empty candidate set; no assignment can cover it.
    #[error("no provider is available on {date}")]
    NoProviderAvailable { date: NaiveDate },
}
