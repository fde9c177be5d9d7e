//! Legality rules for call schedules.
//!
//! Each rule is a pure predicate over the full or partial assignment,
//! returning `true` when the constraint is VIOLATED. Unfilled days
//! never match any provider, so the rules are usable for pruning
//! partial assignments during exhaustive search.
//!
//! # Rules
//! 1. Max load: no provider holds more than [`LegalityPolicy::max_calls`] days.
//! 2. No consecutive days: no provider holds two adjacent days.
//! 3. No consecutive weekends: no provider repeats on temporally
//!    adjacent weekend occurrences (same-weekend Saturday+Sunday is fine).

use chrono::{Datelike, Weekday};
use std::collections::HashMap;

use crate::models::CallSchedule;

/// Policy knobs for the legality rules.
#[derive(Debug, Clone)]
pub struct LegalityPolicy {
    /// Maximum days one provider may hold across the scheduling window.
    ///
    /// Default 7, the "seven call days per rotation" reading of the
    /// PGME limit.
    pub max_calls: usize,
}

impl Default for LegalityPolicy {
    fn default() -> Self {
        Self { max_calls: 7 }
    }
}

/// Whether some provider holds more than `policy.max_calls` days.
///
/// Counts non-empty slots grouped by provider value (name, year).
pub fn exceeds_max_load(schedule: &CallSchedule, policy: &LegalityPolicy) -> bool {
    let mut counts: HashMap<(&str, i32), usize> = HashMap::new();
    for slot in schedule.assignment() {
        if let Some(idx) = slot {
            let p = &schedule.providers()[*idx];
            *counts.entry((p.name.as_str(), p.year)).or_insert(0) += 1;
        }
    }
    counts.values().any(|&n| n > policy.max_calls)
}

/// Whether some adjacent day pair holds the same provider.
pub fn has_consecutive_days(schedule: &CallSchedule) -> bool {
    schedule
        .assignment()
        .windows(2)
        .any(|pair| same_provider(schedule, pair[0], pair[1]))
}

/// Whether some provider repeats across adjacent weekend occurrences.
///
/// Saturdays and Sundays of the range form two ordered subsequences.
/// Occurrence *k* conflicts with occurrence *k+1* in all four pairings:
/// Sat→Sat, Sat→Sun, Sun→Sun, Sun→Sat. Working both days of the same
/// weekend is allowed.
pub fn has_consecutive_weekends(schedule: &CallSchedule) -> bool {
    let slots_on = |weekday: Weekday| -> Vec<Option<usize>> {
        schedule
            .days()
            .iter()
            .enumerate()
            .filter(|(_, d)| d.weekday() == weekday)
            .map(|(i, _)| schedule.assignment()[i])
            .collect()
    };
    let saturdays = slots_on(Weekday::Sat);
    let sundays = slots_on(Weekday::Sun);

    for k in 0..saturdays.len().saturating_sub(1) {
        if same_provider(schedule, saturdays[k], saturdays[k + 1]) {
            return true;
        }
        if k + 1 < sundays.len() && same_provider(schedule, saturdays[k], sundays[k + 1]) {
            return true;
        }
    }
    for k in 0..sundays.len().saturating_sub(1) {
        if same_provider(schedule, sundays[k], sundays[k + 1]) {
            return true;
        }
        if k + 1 < saturdays.len() && same_provider(schedule, sundays[k], saturdays[k + 1]) {
            return true;
        }
    }
    false
}

/// Whether the schedule violates none of the rules.
pub fn is_legal(schedule: &CallSchedule, policy: &LegalityPolicy) -> bool {
    !exceeds_max_load(schedule, policy)
        && !has_consecutive_days(schedule)
        && !has_consecutive_weekends(schedule)
}

/// Both slots filled and holding value-equal providers.
fn same_provider(schedule: &CallSchedule, a: Option<usize>, b: Option<usize>) -> bool {
    match (a, b) {
        (Some(a), Some(b)) => schedule.providers()[a] == schedule.providers()[b],
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Provider;
    use chrono::NaiveDate;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    /// 2024-01-01 is a Monday; weekends fall on Jan 6/7, 13/14, 20/21.
    fn schedule_with(n_providers: usize, start: NaiveDate, end: NaiveDate) -> CallSchedule {
        let providers = (0..n_providers)
            .map(|i| {
                Provider::builder(format!("P{i}"), i as i32 + 1)
                    .available(start, end)
                    .build()
            })
            .collect();
        CallSchedule::new(start, end, providers).unwrap()
    }

    #[test]
    fn test_empty_assignment_is_legal() {
        let s = schedule_with(2, d(2024, 1, 1), d(2024, 1, 14));
        let policy = LegalityPolicy::default();
        assert!(is_legal(&s, &policy));
        assert!(!exceeds_max_load(&s, &policy));
        assert!(!has_consecutive_days(&s));
        assert!(!has_consecutive_weekends(&s));
    }

    #[test]
    fn test_consecutive_days_detected() {
        let mut s = schedule_with(2, d(2024, 1, 1), d(2024, 1, 7));
        s.assign(2, 0);
        s.assign(3, 0);
        assert!(has_consecutive_days(&s));
        assert!(!is_legal(&s, &LegalityPolicy::default()));
    }

    #[test]
    fn test_gap_of_one_day_allowed() {
        let mut s = schedule_with(2, d(2024, 1, 1), d(2024, 1, 7));
        s.assign(1, 0);
        s.assign(3, 0);
        assert!(!has_consecutive_days(&s));
    }

    #[test]
    fn test_unfilled_days_never_match() {
        // Adjacent None slots are not a violation on partial state
        let mut s = schedule_with(2, d(2024, 1, 1), d(2024, 1, 14));
        s.assign(0, 0);
        assert!(!has_consecutive_days(&s));
        assert!(!has_consecutive_weekends(&s)); // future weekends all None
    }

    #[test]
    fn test_max_load_threshold() {
        let policy = LegalityPolicy::default();
        let mut s = schedule_with(2, d(2024, 1, 1), d(2024, 1, 28));
        // 7 days for P0 is at the cap
        for i in 0..7 {
            s.assign(i * 2, 0);
        }
        assert!(!exceeds_max_load(&s, &policy));
        // The 8th pushes over
        s.assign(16, 0);
        assert!(exceeds_max_load(&s, &policy));
    }

    #[test]
    fn test_max_load_configurable() {
        let policy = LegalityPolicy { max_calls: 2 };
        let mut s = schedule_with(2, d(2024, 1, 1), d(2024, 1, 7));
        s.assign(0, 0);
        s.assign(2, 0);
        assert!(!exceeds_max_load(&s, &policy));
        s.assign(4, 0);
        assert!(exceeds_max_load(&s, &policy));
    }

    #[test]
    fn test_same_weekend_both_days_allowed() {
        // Jan 6 (Sat) and Jan 7 (Sun) in the same weekend
        let mut s = schedule_with(2, d(2024, 1, 1), d(2024, 1, 14));
        s.assign(5, 0);
        s.assign(6, 0);
        assert!(!has_consecutive_weekends(&s));
    }

    #[test]
    fn test_saturday_to_next_saturday_violates() {
        let mut s = schedule_with(2, d(2024, 1, 1), d(2024, 1, 14));
        s.assign(5, 0); // Sat Jan 6
        s.assign(12, 0); // Sat Jan 13
        assert!(has_consecutive_weekends(&s));
    }

    #[test]
    fn test_saturday_to_next_sunday_violates() {
        let mut s = schedule_with(2, d(2024, 1, 1), d(2024, 1, 14));
        s.assign(5, 0); // Sat Jan 6
        s.assign(13, 0); // Sun Jan 14
        assert!(has_consecutive_weekends(&s));
    }

    #[test]
    fn test_sunday_to_next_saturday_violates() {
        let mut s = schedule_with(2, d(2024, 1, 1), d(2024, 1, 20));
        s.assign(6, 0); // Sun Jan 7
        s.assign(12, 0); // Sat Jan 13
        assert!(has_consecutive_weekends(&s));
    }

    #[test]
    fn test_different_providers_on_adjacent_weekends_allowed() {
        let mut s = schedule_with(2, d(2024, 1, 1), d(2024, 1, 14));
        s.assign(5, 0); // Sat Jan 6
        s.assign(12, 1); // Sat Jan 13
        assert!(!has_consecutive_weekends(&s));
    }

    #[test]
    fn test_skipping_a_weekend_allowed() {
        let mut s = schedule_with(2, d(2024, 1, 1), d(2024, 1, 21));
        s.assign(5, 0); // Sat Jan 6
        s.assign(19, 0); // Sat Jan 20, one weekend skipped
        assert!(!has_consecutive_weekends(&s));
    }

    #[test]
    fn test_legal_full_assignment_passes_all_rules() {
        // Alternate two providers over one week: no rule can fire
        let mut s = schedule_with(2, d(2024, 1, 1), d(2024, 1, 7));
        for i in 0..7 {
            s.assign(i, i % 2);
        }
        let policy = LegalityPolicy::default();
        assert!(is_legal(&s, &policy));
        assert!(!exceeds_max_load(&s, &policy));
        assert!(!has_consecutive_days(&s));
        assert!(!has_consecutive_weekends(&s));
    }

    #[test]
    fn test_value_equal_duplicate_roster_entries_match() {
        // Two roster slots holding the same (name, year) count as one person
        let start = d(2024, 1, 1);
        let end = d(2024, 1, 7);
        let twin = || Provider::builder("Riley", 2).available(start, end).build();
        let mut s = CallSchedule::new(start, end, vec![twin(), twin()]).unwrap();
        s.assign(0, 0);
        s.assign(1, 1);
        assert!(has_consecutive_days(&s));
    }
}
