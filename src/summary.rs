//! Weekly summary assembly
//!
//! Composes the week window, the time format converter, and the status
//! classifier into ready-to-render rows: one row per employee, one cell per
//! day of the window.

use chrono::{Datelike, NaiveDate};

use crate::error::Result;
use crate::records::{RecordSet, WeeklyRecord};
use crate::status::{classify, DayStatus, ThresholdPolicy};
use crate::timefmt::to_hhmm;
use crate::utils::day_label;
use crate::week::WeekWindow;

/// One rendered day of one employee's week
#[derive(Debug, Clone, PartialEq)]
pub struct DaySummary {
    pub date: NaiveDate,
    pub label: &'static str,
    /// Raw decimal hours as resolved from the record
    pub hours: Option<f64>,
    /// "HH:MM" text for present values, "-" for absent ones
    pub display: String,
    pub status: DayStatus,
}

/// One employee's classified week
#[derive(Debug, Clone)]
pub struct EmployeeWeekSummary {
    pub employee_id: i64,
    pub employee_name: String,
    /// One entry per window date, Monday first
    pub days: Vec<DaySummary>,
    /// Sum of the present values
    pub total_hours: f64,
}

/// Build one employee's summary across the window's seven dates.
///
/// Raw values resolve by the date's day label, classify against the
/// policy's threshold for that weekday, and render as "HH:MM" with "-"
/// for absent days. A value the converter rejects (negative hours in a
/// record, for instance) propagates as an error; it is never coerced to
/// zero or to absent.
pub fn build_week_summary(
    window: &WeekWindow,
    record: &WeeklyRecord,
    policy: &ThresholdPolicy,
) -> Result<EmployeeWeekSummary> {
    let mut days = Vec::with_capacity(window.dates.len());
    let mut total_hours = 0.0;

    for date in &window.dates {
        let weekday = date.weekday();
        let label = day_label(weekday);
        let hours = record.hours_for(weekday);
        let status = classify(label, hours, policy.threshold_for(weekday));

        // NaN classifies as Missing above and renders like an absent day
        let display = match hours {
            Some(value) if !value.is_nan() => to_hhmm(value)?,
            _ => "-".to_string(),
        };

        if let Some(value) = hours {
            if !value.is_nan() {
                total_hours += value;
            }
        }

        days.push(DaySummary {
            date: *date,
            label,
            hours,
            display,
            status,
        });
    }

    tracing::debug!(
        employee_id = record.employee_id,
        total_hours,
        "built week summary"
    );

    Ok(EmployeeWeekSummary {
        employee_id: record.employee_id,
        employee_name: record.employee_name.clone(),
        days,
        total_hours,
    })
}

/// Build summaries for every record in the set, preserving record order
pub fn summarize(
    window: &WeekWindow,
    records: &RecordSet,
    policy: &ThresholdPolicy,
) -> Result<Vec<EmployeeWeekSummary>> {
    records
        .records
        .iter()
        .map(|record| build_week_summary(window, record, policy))
        .collect()
}


// Made with Bob
