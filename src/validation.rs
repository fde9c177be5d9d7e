//! Input validation for call sheets.
//!
//! Checks structural integrity of a [`CallSheet`] before conversion and
//! solving. Detects:
//! - Empty roster
//! - Duplicate providers (same name and year)
//! - Malformed dates
//! - Inverted date ranges (schedule or window)
//! - Providers with no available day inside the schedule range
//!
//! All problems are collected into one list so a caller can report
//! every issue at once instead of fixing them one reload at a time.

use std::collections::HashSet;

use crate::config::{parse_date, CallSheet, SheetWindow};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// The sheet lists no providers.
    EmptyRoster,
    /// Two entries share the same name and year.
    DuplicateProvider,
    /// A date is not `YYYY.MM.DD`.
    MalformedDate,
    /// A range's start is after its end.
    InvalidDateOrder,
    /// A provider has zero available days inside the schedule range.
    NoAvailableDays,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a call sheet.
///
/// Checks:
/// 1. At least one provider is listed
/// 2. No duplicate (name, year) pairs
/// 3. All dates parse and all ranges are ordered
/// 4. Every provider has at least one available day in range
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_sheet(sheet: &CallSheet) -> ValidationResult {
    let mut errors = Vec::new();

    if sheet.doctors.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyRoster,
            "call sheet lists no doctors",
        ));
    }

    // Schedule range
    let range = check_range(
        "schedule",
        &sheet.start_date,
        &sheet.end_date,
        &mut errors,
    );

    // Duplicates
    let mut seen: HashSet<(&str, i32)> = HashSet::new();
    for doctor in &sheet.doctors {
        if !seen.insert((doctor.name.as_str(), doctor.year)) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateProvider,
                format!("duplicate provider: {} (year {})", doctor.name, doctor.year),
            ));
        }
    }

    // Windows and per-provider coverage
    for doctor in &sheet.doctors {
        let mut windows_ok = true;
        for window in doctor.available.iter().chain(&doctor.unavailable) {
            windows_ok &= check_window(&doctor.name, window, &mut errors);
        }

        if windows_ok {
            if let (Some((start, end)), Ok(provider)) =
                (range, doctor.clone().into_provider())
            {
                let covered = start
                    .iter_days()
                    .take_while(|d| *d <= end)
                    .any(|d| provider.is_available(d));
                if !covered {
                    errors.push(ValidationError::new(
                        ValidationErrorKind::NoAvailableDays,
                        format!("provider '{}' has no available day in range", doctor.name),
                    ));
                }
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Parses and order-checks one range; pushes errors, returns the parsed
/// bounds when usable.
fn check_range(
    what: &str,
    start: &str,
    end: &str,
    errors: &mut Vec<ValidationError>,
) -> Option<(chrono::NaiveDate, chrono::NaiveDate)> {
    let mut parse = |value: &str| match parse_date("Start-Date", value) {
        Ok(date) => Some(date),
        Err(_) => {
            errors.push(ValidationError::new(
                ValidationErrorKind::MalformedDate,
                format!("{what}: '{value}' is not a YYYY.MM.DD date"),
            ));
            None
        }
    };
    let start = parse(start)?;
    let end = parse(end)?;
    if start > end {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidDateOrder,
            format!("{what}: start {start} is after end {end}"),
        ));
        return None;
    }
    Some((start, end))
}

/// Validates one window; returns whether its dates parsed.
fn check_window(owner: &str, window: &SheetWindow, errors: &mut Vec<ValidationError>) -> bool {
    match (window.start(), window.end()) {
        (Ok(start), Ok(end)) => {
            if start > end {
                errors.push(ValidationError::new(
                    ValidationErrorKind::InvalidDateOrder,
                    format!("window for '{owner}': start {start} is after end {end}"),
                ));
            }
            true
        }
        (start, end) => {
            for result in [start, end] {
                if let Err(err) = result {
                    errors.push(ValidationError::new(
                        ValidationErrorKind::MalformedDate,
                        format!("window for '{owner}': {err}"),
                    ));
                }
            }
            false
        }
    }
}
