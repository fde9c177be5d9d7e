//! Provider (on-call staff) model.
//!
//! A provider has an identity, a seniority year, and a derived set of
//! calendar days they may take call. The day set is built from additive
//! "available" windows and subtractive "unavailable" windows.
//!
//! # Precedence
//! All available windows are applied before any unavailable window, so
//! unavailability always wins over overlapping availability regardless
//! of the order windows were declared in.
//!
//! # Equality
//! Two providers are equal iff `name` and `year` match. The derived day
//! set is deliberately excluded: the same person stays the same person
//! across availability revisions.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// A schedulable on-call provider.
///
/// Immutable after construction; build one with [`ProviderBuilder`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Provider {
    /// Provider identity (unique within a roster).
    pub name: String,
    /// Seniority year (e.g. PGY level). Used as a scoring weight.
    pub year: i32,
    /// Days this provider may take call, ascending.
    available_days: BTreeSet<NaiveDate>,
}

impl Provider {
    /// Starts building a provider.
    pub fn builder(name: impl Into<String>, year: i32) -> ProviderBuilder {
        ProviderBuilder {
            name: name.into(),
            year,
            available: Vec::new(),
            unavailable: Vec::new(),
        }
    }

    /// Whether this provider may take call on `date`.
    #[inline]
    pub fn is_available(&self, date: NaiveDate) -> bool {
        self.available_days.contains(&date)
    }

    /// Number of days this provider is available overall.
    #[inline]
    pub fn available_day_count(&self) -> usize {
        self.available_days.len()
    }

    /// Iterates available days in ascending order.
    pub fn available_days(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.available_days.iter().copied()
    }
}

impl PartialEq for Provider {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.year == other.year
    }
}

impl Eq for Provider {}

/// Builder for [`Provider`].
///
/// Collects inclusive date windows; `build()` unions all available
/// windows, then removes all unavailable windows.
#[derive(Debug, Clone)]
pub struct ProviderBuilder {
    name: String,
    year: i32,
    available: Vec<(NaiveDate, NaiveDate)>,
    unavailable: Vec<(NaiveDate, NaiveDate)>,
}

impl ProviderBuilder {
    /// Adds an inclusive available window. No-op when `start > end`.
    pub fn available(mut self, start: NaiveDate, end: NaiveDate) -> Self {
        if start <= end {
            self.available.push((start, end));
        }
        self
    }

    /// Adds an inclusive unavailable window. No-op when `start > end`.
    pub fn unavailable(mut self, start: NaiveDate, end: NaiveDate) -> Self {
        if start <= end {
            self.unavailable.push((start, end));
        }
        self
    }

    /// Builds the provider, resolving windows into the final day set.
    pub fn build(self) -> Provider {
        let mut days = BTreeSet::new();
        for (start, end) in &self.available {
            days.extend(start.iter_days().take_while(|d| d <= end));
        }
        for (start, end) in &self.unavailable {
            for d in start.iter_days().take_while(|d| d <= end) {
                days.remove(&d);
            }
        }
        Provider {
            name: self.name,
            year: self.year,
            available_days: days,
        }
    }
}
