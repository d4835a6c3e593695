//! Conversion between decimal hours and "HH:MM" time text
//!
//! Thresholds arrive as "HH:MM" constants and stored values are rendered
//! back to the same form, so both directions live here. Display always
//! rounds to the whole minute; round-tripping a decimal value is therefore
//! exact only to one-minute tolerance.

use crate::error::FormatError;

/// Parses an "HH:MM" string into decimal hours.
///
/// The text must be exactly two colon-separated integer fields with
/// minutes in 0..=59; the hours field is not bounded above. Returns
/// hours + minutes/60.
pub fn to_decimal(text: &str) -> Result<f64, FormatError> {
    let fields: Vec<&str> = text.trim().split(':').collect();
    if fields.len() != 2 {
        return Err(FormatError::InvalidPattern(text.to_string()));
    }

    let hours: i64 = fields[0]
        .parse()
        .map_err(|_| FormatError::InvalidPattern(text.to_string()))?;
    let minutes: i64 = fields[1]
        .parse()
        .map_err(|_| FormatError::InvalidPattern(text.to_string()))?;

    if hours < 0 || minutes < 0 {
        return Err(FormatError::NegativeField(text.to_string()));
    }
    if minutes >= 60 {
        return Err(FormatError::MinutesOutOfRange(minutes));
    }

    Ok(hours as f64 + minutes as f64 / 60.0)
}

/// Formats decimal hours as a zero-padded "HH:MM" string.
///
/// Minutes are rounded to the nearest whole minute; a fraction that rounds
/// up to 60 carries into the hours field. Negative and non-finite values
/// are rejected rather than clamped.
pub fn to_hhmm(value: f64) -> Result<String, FormatError> {
    if !value.is_finite() {
        return Err(FormatError::NonFiniteHours(value));
    }
    if value < 0.0 {
        return Err(FormatError::NegativeHours(value));
    }

    let mut hours = value.floor() as i64;
    let mut minutes = ((value - hours as f64) * 60.0).round() as i64;

    // A fraction like .999 rounds to a full hour
    if minutes == 60 {
        hours += 1;
        minutes = 0;
    }

    Ok(format!("{:02}:{:02}", hours, minutes))
}


// Made with Bob
