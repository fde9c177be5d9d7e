//! Score functions for completed schedules.
//!
//! Lower is better. Scores are pure functions of the assignment; they
//! carry no state and are deterministic across calls. They are only
//! meaningful for legal full assignments, but remain total over partial
//! ones (unfilled days simply contribute nothing).
//!
//! # Components
//! - Seniority: each assigned day costs `year * 2`, biasing call load
//!   toward junior providers.
//! - Spacing: consecutive call days closer than 4 days apart are
//!   penalized by the shortfall, rewarding spread-out rosters.

use crate::models::CallSchedule;

/// Per-day weight applied to the assigned provider's seniority year.
pub const SENIORITY_WEIGHT: i64 = 2;

/// Desired minimum gap between one provider's consecutive call days.
pub const TARGET_GAP_DAYS: i64 = 4;

/// Sum over assigned days of `provider.year * SENIORITY_WEIGHT`.
pub fn seniority_score(schedule: &CallSchedule) -> i64 {
    schedule
        .assignment()
        .iter()
        .flatten()
        .map(|&idx| schedule.providers()[idx].year as i64 * SENIORITY_WEIGHT)
        .sum()
}

/// Penalty for call days spaced closer than [`TARGET_GAP_DAYS`].
///
/// For each provider, each consecutive pair of their call dates adds
/// `max(TARGET_GAP_DAYS - gap, 0)`.
pub fn spacing_score(schedule: &CallSchedule) -> i64 {
    let mut total = 0;
    for idx in 0..schedule.providers().len() {
        let days = schedule.call_days_for(idx);
        for pair in days.windows(2) {
            let gap = (pair[1] - pair[0]).num_days();
            total += (TARGET_GAP_DAYS - gap).max(0);
        }
    }
    total
}

/// Total desirability of the schedule: seniority + spacing.
pub fn total_score(schedule: &CallSchedule) -> i64 {
    seniority_score(schedule) + spacing_score(schedule)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Provider;
    use chrono::NaiveDate;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn sample_schedule() -> CallSchedule {
        let start = d(2024, 1, 1);
        let end = d(2024, 1, 14);
        let providers = vec![
            Provider::builder("Avery", 1).available(start, end).build(),
            Provider::builder("Blake", 3).available(start, end).build(),
        ];
        CallSchedule::new(start, end, providers).unwrap()
    }

    #[test]
    fn test_seniority_score_sums_assigned_days() {
        let mut s = sample_schedule();
        s.assign(0, 0); // year 1 → 2
        s.assign(2, 1); // year 3 → 6
        s.assign(4, 1); // year 3 → 6
        assert_eq!(seniority_score(&s), 14);
    }

    #[test]
    fn test_seniority_score_empty_assignment() {
        let s = sample_schedule();
        assert_eq!(seniority_score(&s), 0);
    }

    #[test]
    fn test_spacing_penalizes_short_gaps() {
        let mut s = sample_schedule();
        // Avery on days 0 and 2: gap 2 → penalty 4 - 2 = 2
        s.assign(0, 0);
        s.assign(2, 0);
        assert_eq!(spacing_score(&s), 2);
    }

    #[test]
    fn test_spacing_no_penalty_at_target_gap() {
        let mut s = sample_schedule();
        // Gap of exactly 4 days → no penalty
        s.assign(0, 0);
        s.assign(4, 0);
        assert_eq!(spacing_score(&s), 0);
        // Wider gaps never go negative
        s.assign(12, 0);
        assert_eq!(spacing_score(&s), 0);
    }

    #[test]
    fn test_spacing_sums_across_providers() {
        let mut s = sample_schedule();
        s.assign(0, 0);
        s.assign(1, 1);
        s.assign(3, 0); // Avery gap 3 → 1
        s.assign(4, 1); // Blake gap 3 → 1
        assert_eq!(spacing_score(&s), 2);
    }

    #[test]
    fn test_total_is_sum_of_components() {
        let mut s = sample_schedule();
        s.assign(0, 1);
        s.assign(2, 1);
        let expected = seniority_score(&s) + spacing_score(&s);
        assert_eq!(total_score(&s), expected);
    }

    #[test]
    fn test_score_deterministic() {
        let mut s = sample_schedule();
        for i in 0..14 {
            s.assign(i, i % 2);
        }
        let first = total_score(&s);
        for _ in 0..10 {
            assert_eq!(total_score(&s), first);
        }
    }
}
