use anyhow::{anyhow, Result};
use chrono::prelude::*;

/// Utility functions for the worktime application

// ===== STRING UTILITIES =====

/// Truncates a string to a maximum length, adding "..." if truncated
pub fn truncate_string(s: &str, max_length: usize) -> String {
    if s.len() <= max_length {
        s.to_string()
    } else {
        format!("{}...", &s[..max_length.saturating_sub(3)])
    }
}

/// Checks if a string is empty or contains only whitespace
pub fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}

// ===== DATE/TIME UTILITIES =====

/// Validates a date string in multiple formats (YYYY-MM-DD, YYYY.MM.DD, YYYY/MM/DD)
pub fn validate_date(date_str: &str) -> Result<()> {
    let formats = ["%Y-%m-%d", "%Y.%m.%d", "%Y/%m/%d"];

    for format in &formats {
        if chrono::NaiveDate::parse_from_str(date_str, format).is_ok() {
            return Ok(());
        }
    }

    Err(anyhow!(
        "Invalid date format: {}. Please use YYYY-MM-DD, YYYY.MM.DD, or YYYY/MM/DD format.",
        date_str
    ))
}

/// Normalizes a date string to YYYY-MM-DD format
pub fn normalize_date(date_str: &str) -> String {
    let formats = ["%Y-%m-%d", "%Y.%m.%d", "%Y/%m/%d"];

    for format in &formats {
        if let Ok(date) = chrono::NaiveDate::parse_from_str(date_str, format) {
            return date.format("%Y-%m-%d").to_string();
        }
    }

    // If we can't parse it, return the original (this shouldn't happen if validate_date was called first)
    date_str.to_string()
}

// ===== DAY LABEL UTILITIES =====

/// The seven day labels of a week table, in display order (Monday first)
pub const WEEK_DAY_LABELS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

/// Gets the short day label for a weekday
pub fn day_label(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Mon",
        Weekday::Tue => "Tue",
        Weekday::Wed => "Wed",
        Weekday::Thu => "Thu",
        Weekday::Fri => "Fri",
        Weekday::Sat => "Sat",
        Weekday::Sun => "Sun",
    }
}

/// Parses a short day label back to a weekday
pub fn parse_day_label(label: &str) -> Option<Weekday> {
    match label {
        "Mon" => Some(Weekday::Mon),
        "Tue" => Some(Weekday::Tue),
        "Wed" => Some(Weekday::Wed),
        "Thu" => Some(Weekday::Thu),
        "Fri" => Some(Weekday::Fri),
        "Sat" => Some(Weekday::Sat),
        "Sun" => Some(Weekday::Sun),
        _ => None,
    }
}

/// Gets a friendly weekday name from a date
pub fn get_weekday_name(date: &NaiveDate) -> String {
    match date.weekday() {
        Weekday::Mon => "Monday".to_string(),
        Weekday::Tue => "Tuesday".to_string(),
        Weekday::Wed => "Wednesday".to_string(),
        Weekday::Thu => "Thursday".to_string(),
        Weekday::Fri => "Friday".to_string(),
        Weekday::Sat => "Saturday".to_string(),
        Weekday::Sun => "Sunday".to_string(),
    }
}

// ===== FORMATTING UTILITIES =====

/// Formats a number of hours with proper pluralization
pub fn format_hours(hours: f64) -> String {
    if hours == 1.0 {
        format!("{:.1} hour", hours)
    } else {
        format!("{:.1} hours", hours)
    }
}

// ===== VALIDATION UTILITIES =====

/// Validates that hours are within a reasonable range (0-24)
pub fn validate_hours(hours: f64) -> Result<()> {
    if hours.is_nan() {
        Err(anyhow!("Hours cannot be NaN"))
    } else if hours < 0.0 {
        Err(anyhow!("Hours cannot be negative"))
    } else if hours > 24.0 {
        Err(anyhow!("Hours cannot exceed 24"))
    } else {
        Ok(())
    }
}
