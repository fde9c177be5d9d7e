//! Call schedule (working solution) model.
//!
//! A [`CallSchedule`] holds the contiguous day range, the provider
//! roster, and the current day-to-provider assignment. The assignment
//! is mutable working state: search strategies overwrite it in place
//! across trials and snapshot it whenever a better legal completion is
//! found.
//!
//! # Invariant
//! `assignment.len() == days.len()` at all times; slot `i` belongs to
//! day `i`. A `None` slot is an unfilled day.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::models::Provider;

/// The day range, roster, and current assignment.
///
/// Assignment slots store indices into the roster rather than provider
/// copies, so resetting and snapshotting cost O(days).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CallSchedule {
    days: Vec<NaiveDate>,
    providers: Vec<Provider>,
    assignment: Vec<Option<usize>>,
}

impl CallSchedule {
    /// Creates a schedule over the inclusive range `[start, end]` with
    /// an all-empty assignment.
    ///
    /// # Errors
    /// [`ConfigError::InvalidDateRange`] when `start > end`.
    pub fn new(
        start: NaiveDate,
        end: NaiveDate,
        providers: Vec<Provider>,
    ) -> Result<Self, ConfigError> {
        if start > end {
            return Err(ConfigError::InvalidDateRange { start, end });
        }
        let days: Vec<NaiveDate> = start.iter_days().take_while(|d| *d <= end).collect();
        let assignment = vec![None; days.len()];
        Ok(Self {
            days,
            providers,
            assignment,
        })
    }

    /// The day range, ascending and contiguous.
    #[inline]
    pub fn days(&self) -> &[NaiveDate] {
        &self.days
    }

    /// Number of days in the range.
    #[inline]
    pub fn day_count(&self) -> usize {
        self.days.len()
    }

    /// The provider roster.
    #[inline]
    pub fn providers(&self) -> &[Provider] {
        &self.providers
    }

    /// The raw assignment slots (roster indices).
    #[inline]
    pub fn assignment(&self) -> &[Option<usize>] {
        &self.assignment
    }

    /// Assigns the provider at roster index `provider_idx` to day `day_idx`.
    ///
    /// # Panics
    /// When either index is out of range.
    pub fn assign(&mut self, day_idx: usize, provider_idx: usize) {
        assert!(provider_idx < self.providers.len());
        self.assignment[day_idx] = Some(provider_idx);
    }

    /// Clears the assignment for one day.
    pub fn clear(&mut self, day_idx: usize) {
        self.assignment[day_idx] = None;
    }

    /// Resets the whole assignment to unfilled.
    pub fn reset(&mut self) {
        self.assignment.fill(None);
    }

    /// The provider on call on day `day_idx`, if assigned.
    pub fn provider_on(&self, day_idx: usize) -> Option<&Provider> {
        self.assignment[day_idx].map(|p| &self.providers[p])
    }

    /// Roster indices of providers available on day `day_idx`.
    pub fn available_on(&self, day_idx: usize) -> Vec<usize> {
        let date = self.days[day_idx];
        self.providers
            .iter()
            .enumerate()
            .filter(|(_, p)| p.is_available(date))
            .map(|(i, _)| i)
            .collect()
    }

    /// Index of the first unfilled day, if any.
    pub fn next_unassigned(&self) -> Option<usize> {
        self.assignment.iter().position(Option::is_none)
    }

    /// Whether every day has a provider.
    pub fn is_fully_assigned(&self) -> bool {
        self.assignment.iter().all(Option::is_some)
    }

    /// Dates held by the provider at roster index `provider_idx`, ascending.
    pub fn call_days_for(&self, provider_idx: usize) -> Vec<NaiveDate> {
        self.assignment
            .iter()
            .enumerate()
            .filter(|(_, slot)| **slot == Some(provider_idx))
            .map(|(i, _)| self.days[i])
            .collect()
    }

    /// Number of days assigned to the provider at roster index `provider_idx`.
    pub fn assignment_count_for(&self, provider_idx: usize) -> usize {
        self.assignment
            .iter()
            .filter(|slot| **slot == Some(provider_idx))
            .count()
    }

    /// Days in the range on which the provider at roster index
    /// `provider_idx` could theoretically take call.
    pub fn possible_days_for(&self, provider_idx: usize) -> usize {
        let p = &self.providers[provider_idx];
        self.days.iter().filter(|d| p.is_available(**d)).count()
    }

    /// Captures the current assignment independently of further mutation.
    pub fn snapshot(&self) -> Vec<Option<usize>> {
        self.assignment.clone()
    }

    /// Restores a previously captured assignment.
    ///
    /// # Panics
    /// When the snapshot length does not match the day range.
    pub fn restore(&mut self, snapshot: &[Option<usize>]) {
        assert_eq!(snapshot.len(), self.assignment.len());
        self.assignment.copy_from_slice(snapshot);
    }
}
