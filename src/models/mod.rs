//! Rostering domain models.
//!
//! Core data types for the on-call scheduling problem: the provider
//! roster with availability windows, and the mutable schedule container
//! the search strategies operate on.

mod provider;
mod schedule;

pub use provider::{Provider, ProviderBuilder};
pub use schedule::CallSchedule;
