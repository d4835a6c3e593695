//! Week window derivation for the weekly working time table
//!
//! A week window is the Monday-to-Sunday calendar span containing a reference
//! date. Windows are derived fresh on every request and never mutated; the
//! "current week" the user is looking at lives in a [`WeekCursor`] owned by
//! the presentation layer.

use chrono::{Datelike, Duration, Local, NaiveDate};

/// The Monday-start, Sunday-end calendar window containing a reference date
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeekWindow {
    /// First day of the window, always a Monday
    pub start: NaiveDate,
    /// Last day of the window, always the following Sunday
    pub end: NaiveDate,
    /// The seven consecutive dates of the window, Monday first
    pub dates: [NaiveDate; 7],
    /// Within-month week ordinal (see [`compute_week_window`])
    pub week_number: u32,
}

impl WeekWindow {
    /// Returns true when the date falls inside this window
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// Formats the window as "MM/DD/YYYY ~ MM/DD/YYYY"
    pub fn period_string(&self) -> String {
        format!(
            "{} ~ {}",
            self.start.format("%m/%d/%Y"),
            self.end.format("%m/%d/%Y")
        )
    }
}

/// Compute the week window containing a reference date.
///
/// The day-of-week runs Sunday=0 through Saturday=6; the offset back to
/// Monday is -6 for Sunday and 1-dow otherwise, so a Sunday reference maps
/// to the week ending on it rather than the week after. Time of day never
/// enters the calculation.
///
/// `week_number` is a coarse within-month ordinal taken from the start
/// date's day of month, not an ISO week number. It resets across month
/// boundaries and can be 0 when the month opens on a Monday. Callers that
/// need real ISO week numbering should use chrono's `iso_week` instead of
/// this field.
pub fn compute_week_window(reference: NaiveDate) -> WeekWindow {
    let dow = reference.weekday().num_days_from_sunday() as i64;
    let offset = if dow == 0 { -6 } else { 1 - dow };

    let start = reference + Duration::days(offset);
    let end = start + Duration::days(6);
    let dates = std::array::from_fn(|i| start + Duration::days(i as i64));

    let start_dow = start.weekday().num_days_from_sunday() as i64;
    let week_number = ((start.day() as i64 - start_dow) as f64 / 7.0).ceil() as u32;

    WeekWindow {
        start,
        end,
        dates,
        week_number,
    }
}

/// Caller-held navigation state for the week being viewed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeekCursor {
    reference: NaiveDate,
}

impl WeekCursor {
    /// Create a cursor pointing at an arbitrary reference date
    pub fn new(reference: NaiveDate) -> Self {
        Self { reference }
    }

    /// Create a cursor pointing at the current local date
    pub fn today() -> Self {
        Self::new(Local::now().date_naive())
    }

    /// The reference date the cursor currently points at
    pub fn reference(&self) -> NaiveDate {
        self.reference
    }

    /// The window containing the reference date
    pub fn window(&self) -> WeekWindow {
        compute_week_window(self.reference)
    }

    /// Move the cursor back one week
    pub fn previous_week(&mut self) {
        self.reference -= Duration::days(7);
    }

    /// Move the cursor forward one week
    pub fn next_week(&mut self) {
        self.reference += Duration::days(7);
    }

    /// Reset the cursor to the current local date
    pub fn reset_to_today(&mut self) {
        self.reference = Local::now().date_naive();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Weekday;

    #[test]
    fn test_window_starts_monday_ends_sunday() {
        // Sweep two months of reference dates
        let mut date = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        for _ in 0..60 {
            let window = compute_week_window(date);
            assert_eq!(window.start.weekday(), Weekday::Mon, "for {}", date);
            assert_eq!(window.end.weekday(), Weekday::Sun, "for {}", date);
            assert_eq!(window.end - window.start, Duration::days(6));
            date += Duration::days(1);
        }
    }

    #[test]
    fn test_window_contains_reference() {
        let mut date = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        for _ in 0..60 {
            let window = compute_week_window(date);
            assert!(window.contains(date), "window must contain {}", date);
            date += Duration::days(1);
        }
    }

    #[test]
    fn test_sunday_maps_to_preceding_monday() {
        // 2025-09-21 is a Sunday
        let sunday = NaiveDate::from_ymd_opt(2025, 9, 21).unwrap();
        let window = compute_week_window(sunday);

        assert_eq!(window.start, NaiveDate::from_ymd_opt(2025, 9, 15).unwrap());
        assert_eq!(window.end, sunday);
    }

    #[test]
    fn test_dates_are_consecutive_from_start() {
        let wednesday = NaiveDate::from_ymd_opt(2025, 9, 17).unwrap();
        let window = compute_week_window(wednesday);

        for (i, date) in window.dates.iter().enumerate() {
            assert_eq!(*date, window.start + Duration::days(i as i64));
        }
        assert_eq!(window.dates[0], window.start);
        assert_eq!(window.dates[6], window.end);
    }

    #[test]
    fn test_week_number_within_month() {
        // September 2025 opens on a Monday, so its first window is ordinal 0
        let first = compute_week_window(NaiveDate::from_ymd_opt(2025, 9, 3).unwrap());
        assert_eq!(first.week_number, 0);

        let second = compute_week_window(NaiveDate::from_ymd_opt(2025, 9, 10).unwrap());
        assert_eq!(second.week_number, 1);

        let third = compute_week_window(NaiveDate::from_ymd_opt(2025, 9, 17).unwrap());
        assert_eq!(third.week_number, 2);

        // The ordinal resets across the month boundary
        let october = compute_week_window(NaiveDate::from_ymd_opt(2025, 10, 1).unwrap());
        assert_eq!(october.start, NaiveDate::from_ymd_opt(2025, 9, 29).unwrap());
        assert_eq!(october.week_number, 4);
    }

    #[test]
    fn test_period_string() {
        let window = compute_week_window(NaiveDate::from_ymd_opt(2025, 9, 17).unwrap());
        assert_eq!(window.period_string(), "09/15/2025 ~ 09/21/2025");
    }

    #[test]
    fn test_cursor_navigation() {
        let wednesday = NaiveDate::from_ymd_opt(2025, 9, 17).unwrap();
        let mut cursor = WeekCursor::new(wednesday);
        let start = cursor.window().start;

        cursor.previous_week();
        assert_eq!(cursor.window().start, start - Duration::days(7));

        cursor.next_week();
        cursor.next_week();
        assert_eq!(cursor.window().start, start + Duration::days(7));
    }

    #[test]
    fn test_cursor_reset_to_today() {
        let mut cursor = WeekCursor::new(NaiveDate::from_ymd_opt(2020, 1, 1).unwrap());
        cursor.reset_to_today();

        let today = Local::now().date_naive();
        assert!(cursor.window().contains(today));
    }

    #[test]
    fn test_identical_input_identical_output() {
        let date = NaiveDate::from_ymd_opt(2025, 6, 5).unwrap();
        assert_eq!(compute_week_window(date), compute_week_window(date));
    }
}

// Made with Bob
