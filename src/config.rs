//! Call sheet configuration document.
//!
//! The call sheet is the JSON input the roster is generated from: a
//! schedule date range plus one entry per provider with available and
//! unavailable windows. Field names are the document's hyphenated
//! originals (`Start-Date`, `End-Date`, `Doctors`), dates are
//! `YYYY.MM.DD` strings.
//!
//! Loading is two-phase: [`CallSheet::from_json`] checks document
//! structure, [`CallSheet::into_schedule`] parses dates and builds the
//! domain types. Both surface [`ConfigError`] before the solver runs.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::models::{CallSchedule, Provider};

/// Date format used throughout the call sheet.
pub const DATE_FORMAT: &str = "%Y.%m.%d";

/// The root configuration document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CallSheet {
    /// First day of the schedule, `YYYY.MM.DD`.
    #[serde(rename = "Start-Date")]
    pub start_date: String,
    /// Last day of the schedule, inclusive, `YYYY.MM.DD`.
    #[serde(rename = "End-Date")]
    pub end_date: String,
    /// Provider roster.
    #[serde(rename = "Doctors")]
    pub doctors: Vec<DoctorEntry>,
}

/// One provider record in the call sheet.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DoctorEntry {
    /// Provider identity.
    #[serde(rename = "Name")]
    pub name: String,
    /// Seniority (PGY) year.
    #[serde(rename = "Year")]
    pub year: i32,
    /// Additive availability windows.
    #[serde(rename = "Available", default)]
    pub available: Vec<SheetWindow>,
    /// Subtractive unavailability windows.
    #[serde(rename = "Unavailable", default)]
    pub unavailable: Vec<SheetWindow>,
}

/// An inclusive date window in call-sheet form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SheetWindow {
    #[serde(rename = "Start-Date")]
    pub start_date: String,
    #[serde(rename = "End-Date")]
    pub end_date: String,
}

impl CallSheet {
    /// Parses a call sheet from JSON text.
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Converts the document into a ready-to-solve [`CallSchedule`].
    ///
    /// # Errors
    /// [`ConfigError::InvalidDate`] for malformed dates,
    /// [`ConfigError::InvalidDateRange`] for an inverted schedule range.
    pub fn into_schedule(self) -> Result<CallSchedule, ConfigError> {
        let start = parse_date("Start-Date", &self.start_date)?;
        let end = parse_date("End-Date", &self.end_date)?;
        let mut providers = Vec::with_capacity(self.doctors.len());
        for doctor in self.doctors {
            providers.push(doctor.into_provider()?);
        }
        CallSchedule::new(start, end, providers)
    }
}

impl DoctorEntry {
    /// Builds the domain provider from this entry.
    ///
    /// Window ordering in the document is irrelevant: the builder
    /// applies all available windows before any unavailable one.
    pub fn into_provider(self) -> Result<Provider, ConfigError> {
        let mut builder = Provider::builder(self.name, self.year);
        for window in &self.available {
            builder = builder.available(window.start()?, window.end()?);
        }
        for window in &self.unavailable {
            builder = builder.unavailable(window.start()?, window.end()?);
        }
        Ok(builder.build())
    }
}

impl SheetWindow {
    /// Parsed window start.
    pub fn start(&self) -> Result<NaiveDate, ConfigError> {
        parse_date("Start-Date", &self.start_date)
    }

    /// Parsed window end.
    pub fn end(&self) -> Result<NaiveDate, ConfigError> {
        parse_date("End-Date", &self.end_date)
    }
}

/// Parses a `YYYY.MM.DD` date, naming the offending field on failure.
pub(crate) fn parse_date(field: &'static str, value: &str) -> Result<NaiveDate, ConfigError> {
    NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|_| ConfigError::InvalidDate {
        field,
        value: value.to_string(),
    })
}
