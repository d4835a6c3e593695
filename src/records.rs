use std::collections::HashMap;
use std::fs;
use std::path::Path;

use chrono::Weekday;
use serde::{Deserialize, Serialize};

use crate::error::{DataError, Result};
use crate::utils::{day_label, is_blank, WEEK_DAY_LABELS};

/// One employee's recorded hours for a week, keyed by day label
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeeklyRecord {
    pub employee_id: i64,
    pub employee_name: String,
    /// Day label ("Mon".."Sun") to decimal hours; null marks an absent day
    pub hours_by_day: HashMap<String, Option<f64>>,
}

impl WeeklyRecord {
    pub fn new(employee_id: i64, employee_name: &str) -> Self {
        WeeklyRecord {
            employee_id,
            employee_name: employee_name.to_string(),
            hours_by_day: HashMap::new(),
        }
    }

    /// Record hours for a day; None marks the day explicitly absent
    pub fn set_hours(&mut self, day: Weekday, hours: Option<f64>) {
        self.hours_by_day.insert(day_label(day).to_string(), hours);
    }

    /// Resolve the raw value for a day.
    ///
    /// A missing key and an explicit null both read as absent; zero hours
    /// is a present value. Keys outside the seven canonical labels are
    /// never consulted.
    pub fn hours_for(&self, day: Weekday) -> Option<f64> {
        self.hours_by_day.get(day_label(day)).copied().flatten()
    }
}

/// The collection of employee records supplied to the summary builder
#[derive(Debug, Clone, Default)]
pub struct RecordSet {
    pub records: Vec<WeeklyRecord>,
}

impl RecordSet {
    pub fn new() -> Self {
        RecordSet {
            records: Vec::new(),
        }
    }

    /// Load records from a JSON file holding an array of weekly records
    pub fn from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(DataError::FileNotFound(path.display().to_string()).into());
        }

        let data = fs::read_to_string(path)?;
        let records: Vec<WeeklyRecord> = serde_json::from_str(&data)?;

        // Storage is tolerant of extra keys, but flag them for the owner
        for record in &records {
            if is_blank(&record.employee_name) {
                tracing::warn!(
                    employee_id = record.employee_id,
                    "record has a blank employee name"
                );
            }
            for key in record.hours_by_day.keys() {
                if !WEEK_DAY_LABELS.contains(&key.as_str()) {
                    tracing::warn!(
                        employee_id = record.employee_id,
                        label = %key,
                        "ignoring unknown day label in record"
                    );
                }
            }
        }

        tracing::debug!(count = records.len(), path = %path.display(), "loaded records");
        Ok(RecordSet { records })
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::WorktimeError;
    use std::io::Write;

    #[test]
    fn test_set_and_get_hours() {
        let mut record = WeeklyRecord::new(1, "Alice");
        record.set_hours(Weekday::Mon, Some(8.0));
        record.set_hours(Weekday::Tue, None);

        assert_eq!(record.hours_for(Weekday::Mon), Some(8.0));
        assert_eq!(record.hours_for(Weekday::Tue), None);
        // Never recorded reads the same as explicitly absent
        assert_eq!(record.hours_for(Weekday::Wed), None);
    }

    #[test]
    fn test_zero_hours_is_present() {
        let mut record = WeeklyRecord::new(1, "Alice");
        record.set_hours(Weekday::Fri, Some(0.0));

        assert_eq!(record.hours_for(Weekday::Fri), Some(0.0));
    }

    #[test]
    fn test_unknown_keys_are_ignored_by_lookup() {
        let mut record = WeeklyRecord::new(1, "Alice");
        record
            .hours_by_day
            .insert("Sun(2)".to_string(), Some(9.0));

        assert_eq!(record.hours_for(Weekday::Sun), None);
    }

    #[test]
    fn test_deserialize_null_and_omitted_as_absent() {
        let json = r#"{
            "employee_id": 7,
            "employee_name": "Bob",
            "hours_by_day": {"Mon": 8.0, "Tue": null, "Wed": 3.5}
        }"#;

        let record: WeeklyRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.hours_for(Weekday::Mon), Some(8.0));
        assert_eq!(record.hours_for(Weekday::Tue), None);
        assert_eq!(record.hours_for(Weekday::Wed), Some(3.5));
        assert_eq!(record.hours_for(Weekday::Thu), None);
    }

    #[test]
    fn test_from_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("records.json");

        let json = r#"[
            {"employee_id": 1, "employee_name": "Alice",
             "hours_by_day": {"Mon": 8.0, "Tue": null}},
            {"employee_id": 2, "employee_name": "Bob",
             "hours_by_day": {"Mon": 7.5}}
        ]"#;
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let set = RecordSet::from_file(&path).unwrap();
        assert_eq!(set.len(), 2);
        assert_eq!(set.records[0].employee_name, "Alice");
        assert_eq!(set.records[1].hours_for(Weekday::Mon), Some(7.5));
    }

    #[test]
    fn test_from_file_missing() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("nope.json");

        let err = RecordSet::from_file(&path).unwrap_err();
        assert!(matches!(
            err,
            WorktimeError::Data(DataError::FileNotFound(_))
        ));
    }

    #[test]
    fn test_from_file_invalid_json() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("records.json");
        fs::write(&path, "not json at all").unwrap();

        let err = RecordSet::from_file(&path).unwrap_err();
        assert!(matches!(err, WorktimeError::Json(_)));
    }
}

// Made with Bob
