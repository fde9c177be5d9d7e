//! On-call roster generation.
//!
//! Assigns one provider per calendar day over a date range, subject to
//! availability windows and legality rules, keeping the best-scoring
//! legal roster found by randomized search (or exhaustive backtracking
//! on small ranges).
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Provider` (availability windows),
//!   `CallSchedule` (day range, roster, mutable assignment)
//! - **`rules`**: Legality predicates (max load, consecutive days,
//!   consecutive weekends)
//! - **`scoring`**: Seniority and spacing scores; lower is better
//! - **`solver`**: `Bootstrap` (randomized) and `Backtracking`
//!   (exhaustive) search strategies behind one `Strategy` trait
//! - **`config`**: The JSON call-sheet document and its conversion to
//!   domain types
//! - **`validation`**: Call-sheet integrity checks (duplicates, date
//!   order, coverage)
//! - **`report`**: Per-provider and per-day roster views for output
//!
//! # Pipeline
//!
//! Call sheet JSON → [`config::CallSheet`] → [`models::CallSchedule`] →
//! [`solver::Strategy::solve`] → [`report::RosterReport`].
//!
//! # Reference
//!
//! - Burke et al. (2004), "The State of the Art of Nurse Rostering"
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems"

pub mod config;
pub mod error;
pub mod models;
pub mod report;
pub mod rules;
pub mod scoring;
pub mod solver;
pub mod validation;
