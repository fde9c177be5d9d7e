//! Roster reporting.
//!
//! Derives a read-only view from a solved [`CallSchedule`] for the
//! output side: per-provider call counts against what was theoretically
//! possible, and one line per day with the weekday name and assigned
//! provider. Unfilled days carry an explicit marker rather than being
//! skipped.

use std::fmt;

use chrono::NaiveDate;

use crate::models::CallSchedule;

/// Marker rendered for a day with no assigned provider.
pub const UNASSIGNED: &str = "Unassigned";

/// Summary of a completed (or partial) roster.
#[derive(Debug, Clone)]
pub struct RosterReport {
    /// Per-provider call statistics, in roster order.
    pub providers: Vec<ProviderSummary>,
    /// One line per day, in range order.
    pub days: Vec<DayLine>,
}

/// Call statistics for one provider.
#[derive(Debug, Clone, PartialEq)]
pub struct ProviderSummary {
    /// Provider identity.
    pub name: String,
    /// Days actually assigned.
    pub assigned: usize,
    /// Days in range the provider was available for.
    pub possible: usize,
}

/// One rendered day of the roster.
#[derive(Debug, Clone, PartialEq)]
pub struct DayLine {
    /// Calendar date.
    pub date: NaiveDate,
    /// Full weekday name ("Monday", ...).
    pub weekday: String,
    /// Assigned provider name, `None` when unfilled.
    pub provider: Option<String>,
}

impl RosterReport {
    /// Builds the report from a schedule.
    pub fn from_schedule(schedule: &CallSchedule) -> Self {
        let providers = schedule
            .providers()
            .iter()
            .enumerate()
            .map(|(idx, p)| ProviderSummary {
                name: p.name.clone(),
                assigned: schedule.assignment_count_for(idx),
                possible: schedule.possible_days_for(idx),
            })
            .collect();

        let days = schedule
            .days()
            .iter()
            .enumerate()
            .map(|(idx, date)| DayLine {
                date: *date,
                weekday: date.format("%A").to_string(),
                provider: schedule.provider_on(idx).map(|p| p.name.clone()),
            })
            .collect();

        Self { providers, days }
    }
}

impl fmt::Display for RosterReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for p in &self.providers {
            writeln!(f, "{} calls: {}, possible: {}", p.name, p.assigned, p.possible)?;
        }
        for day in &self.days {
            let name = day.provider.as_deref().unwrap_or(UNASSIGNED);
            writeln!(f, "{} {} {}", day.weekday, day.date, name)?;
        }
        Ok(())
    }
}
