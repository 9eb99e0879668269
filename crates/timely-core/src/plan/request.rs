//! Input boundary for plan generation.
//!
//! `PlanForm` carries the raw text fields exactly as submitted; `resolve`
//! turns them into a validated `PlanRequest`, substituting the configured
//! defaults for anything missing or unparseable. Only a start time that is
//! present but malformed is an error -- everything else falls back silently.

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use crate::error::PlanError;

const START_HOUR_FORMAT: &str = "%H:%M";

/// Default plan parameters. Stored as the `[plan]` section of the config
/// file and used to fill in missing form fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanDefaults {
    /// Total work hours per day.
    #[serde(default = "default_work_hours")]
    pub work_hours: f64,
    /// Lunch break duration in hours.
    #[serde(default = "default_lunch_break")]
    pub lunch_break: f64,
    /// Short break duration in minutes.
    #[serde(default = "default_short_break")]
    pub short_break: f64,
    /// Work session duration in minutes.
    #[serde(default = "default_work_session")]
    pub work_session: f64,
    /// Day start, "HH:MM" 24-hour wall clock.
    #[serde(default = "default_start_hour")]
    pub start_hour: String,
}

fn default_work_hours() -> f64 {
    7.0
}
fn default_lunch_break() -> f64 {
    1.5
}
fn default_short_break() -> f64 {
    10.0
}
fn default_work_session() -> f64 {
    50.0
}
fn default_start_hour() -> String {
    "09:00".into()
}

impl Default for PlanDefaults {
    fn default() -> Self {
        Self {
            work_hours: default_work_hours(),
            lunch_break: default_lunch_break(),
            short_break: default_short_break(),
            work_session: default_work_session(),
            start_hour: default_start_hour(),
        }
    }
}

/// Validated input for the schedule generator.
///
/// Durations are floats in the units the form collects them in: hours for
/// `work_hours` and `lunch_break`, minutes for `short_break` and
/// `work_session`. The generator assumes they are positive and performs no
/// validation of its own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanRequest {
    pub name: String,
    pub work_hours: f64,
    pub lunch_break: f64,
    pub short_break: f64,
    pub work_session: f64,
    pub start: NaiveTime,
}

/// Raw form submission: six optional text fields, pre-defaulting.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlanForm {
    pub name: Option<String>,
    pub work_hours: Option<String>,
    pub lunch_break: Option<String>,
    pub short_break: Option<String>,
    pub work_session: Option<String>,
    pub start_hour: Option<String>,
}

impl PlanForm {
    /// Resolve the raw form against the configured defaults.
    ///
    /// # Errors
    ///
    /// Returns `PlanError::InvalidStartTime` if a start hour was supplied
    /// but does not parse as "HH:MM". Missing or unparseable numeric fields
    /// never error; the default substitutes.
    pub fn resolve(&self, defaults: &PlanDefaults) -> Result<PlanRequest, PlanError> {
        let start_raw = match non_empty(&self.start_hour) {
            Some(s) => s.to_string(),
            None => defaults.start_hour.clone(),
        };
        let start = parse_start_hour(&start_raw)?;

        Ok(PlanRequest {
            name: non_empty(&self.name).unwrap_or("").to_string(),
            work_hours: numeric_or(&self.work_hours, defaults.work_hours),
            lunch_break: numeric_or(&self.lunch_break, defaults.lunch_break),
            short_break: numeric_or(&self.short_break, defaults.short_break),
            work_session: numeric_or(&self.work_session, defaults.work_session),
            start,
        })
    }
}

/// Parse an "HH:MM" 24-hour start time.
///
/// # Errors
///
/// Returns `PlanError::InvalidStartTime` on any malformed input.
pub fn parse_start_hour(input: &str) -> Result<NaiveTime, PlanError> {
    NaiveTime::parse_from_str(input.trim(), START_HOUR_FORMAT).map_err(|_| {
        PlanError::InvalidStartTime {
            input: input.to_string(),
        }
    })
}

fn non_empty(field: &Option<String>) -> Option<&str> {
    field.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

fn numeric_or(field: &Option<String>, default: f64) -> f64 {
    non_empty(field)
        .and_then(|s| s.parse::<f64>().ok())
        .unwrap_or(default)
}
