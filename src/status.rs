//! Daily status classification for the weekly table
//!
//! A day's recorded hours classify into one of three states against a
//! day-dependent threshold. Absence of a value is an expected condition and
//! gets its own state rather than an error.

use std::fmt;

use chrono::Weekday;

use crate::config::Config;
use crate::error::{DataError, FormatError};
use crate::timefmt::to_decimal;
use crate::utils::parse_day_label;

/// Tri-state outcome for one day of one employee
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayStatus {
    /// No value recorded for the day
    Missing,
    /// Recorded value below the day's threshold
    BelowThreshold,
    /// Recorded value at or above the day's threshold
    MetThreshold,
}

impl fmt::Display for DayStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DayStatus::Missing => "Missing",
            DayStatus::BelowThreshold => "BelowThreshold",
            DayStatus::MetThreshold => "MetThreshold",
        };
        write!(f, "{}", name)
    }
}

/// Classify one day's raw value against an already-resolved threshold.
///
/// Absent values and NaN classify as `Missing`; otherwise the threshold
/// boundary is inclusive (a value equal to the threshold has met it).
/// Threshold resolution is the caller's job (see
/// [`ThresholdPolicy::threshold_for`]), which keeps this a pure
/// three-branch decision with no calendar knowledge; the day label only
/// feeds the trace line.
pub fn classify(day_label: &str, raw_value: Option<f64>, threshold: f64) -> DayStatus {
    let status = match raw_value {
        None => DayStatus::Missing,
        Some(value) if value.is_nan() => DayStatus::Missing,
        Some(value) if value >= threshold => DayStatus::MetThreshold,
        Some(_) => DayStatus::BelowThreshold,
    };

    tracing::trace!(
        day = day_label,
        raw_value = ?raw_value,
        threshold,
        status = %status,
        "classified day"
    );

    status
}

/// Explicit mapping from day of week to the threshold that applies to it
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThresholdPolicy {
    /// Threshold for ordinary days, in decimal hours
    pub full_day: f64,
    /// Threshold for the designated short day, in decimal hours
    pub short_day: f64,
    /// The designated short day, if any
    pub short_day_label: Option<Weekday>,
}

impl ThresholdPolicy {
    pub fn new(full_day: f64, short_day: f64, short_day_label: Option<Weekday>) -> Self {
        Self {
            full_day,
            short_day,
            short_day_label,
        }
    }

    /// Builds a policy by parsing "HH:MM" threshold constants
    pub fn from_targets(
        full: &str,
        short: &str,
        short_day_label: Option<Weekday>,
    ) -> Result<Self, FormatError> {
        Ok(Self::new(
            to_decimal(full)?,
            to_decimal(short)?,
            short_day_label,
        ))
    }

    /// Builds the policy from the application config
    pub fn from_config(config: &Config) -> crate::error::Result<Self> {
        let short_day_label = match &config.short_day {
            Some(label) => Some(
                parse_day_label(label)
                    .ok_or_else(|| DataError::UnknownDayLabel(label.clone()))?,
            ),
            None => None,
        };

        let policy = Self::from_targets(
            &config.full_day_target,
            &config.short_day_target,
            short_day_label,
        )?;

        Ok(policy)
    }

    /// Resolves the threshold that applies to a given day of week
    pub fn threshold_for(&self, day: Weekday) -> f64 {
        match self.short_day_label {
            Some(short) if short == day => self.short_day,
            _ => self.full_day,
        }
    }
}


// Made with Bob
