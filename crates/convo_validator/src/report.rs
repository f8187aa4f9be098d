//! Validation report types.

use crate::Record;
use chrono::{DateTime, Local};
use serde::Serialize;
use serde_json::Value;

/// Exit status when every record is valid.
pub const EXIT_ALL_VALID: i32 = 0;

/// Exit status when the schema or the data could not be loaded.
pub const EXIT_LOAD_FAILURE: i32 = 1;

/// Exit status when at least one record is invalid.
pub const EXIT_INVALID_RECORDS: i32 = 2;

/// Number of failing records shown in a non-verbose report.
pub const DEFAULT_DISPLAY_LIMIT: usize = 10;

/// Fields shown when summarizing a failing record.
pub const SUMMARY_FIELDS: &[&str] = &["id", "name", "email", "category", "score"];

/// A record that failed validation.
#[derive(Debug, Clone, Serialize)]
pub struct RecordFailure {
    /// 1-based position among the data rows (header excluded)
    pub row: usize,

    /// The record as loaded
    pub data: Record,

    /// Every violation found for this record
    pub errors: Vec<String>,
}

impl RecordFailure {
    /// Returns the summary fields present in the record, in display order.
    pub fn summary(&self) -> Vec<(&'static str, &Value)> {
        SUMMARY_FIELDS
            .iter()
            .filter_map(|field| self.data.get(*field).map(|value| (*field, value)))
            .collect()
    }
}

/// Aggregate result of a validation run.
#[derive(Debug, Clone, Serialize)]
pub struct ValidationReport {
    /// When the report was produced
    pub timestamp: DateTime<Local>,

    /// Schema file the records were validated against
    pub schema_file: String,

    /// Data file the records were read from
    pub data_file: String,

    /// Number of records validated
    pub total_records: usize,

    /// Number of records without violations
    pub valid_records: usize,

    /// Number of records with at least one violation
    pub invalid_records: usize,

    /// valid / total × 100, or 0 when there are no records
    pub success_rate: f64,

    /// Failing records, in row order
    pub validation_errors: Vec<RecordFailure>,
}

impl ValidationReport {
    /// Builds a report from per-record failures.
    pub fn new(
        schema_file: impl Into<String>,
        data_file: impl Into<String>,
        total_records: usize,
        validation_errors: Vec<RecordFailure>,
    ) -> Self {
        let invalid_records = validation_errors.len();
        let valid_records = total_records.saturating_sub(invalid_records);

        Self {
            timestamp: Local::now(),
            schema_file: schema_file.into(),
            data_file: data_file.into(),
            total_records,
            valid_records,
            invalid_records,
            success_rate: success_rate(valid_records, total_records),
            validation_errors,
        }
    }

    /// Returns true if no record failed.
    pub fn passed(&self) -> bool {
        self.invalid_records == 0
    }

    /// Returns the process exit status for this report.
    pub fn exit_code(&self) -> i32 {
        if self.passed() {
            EXIT_ALL_VALID
        } else {
            EXIT_INVALID_RECORDS
        }
    }

    /// Returns the failures to display and how many were left out.
    ///
    /// `None` shows every failure.
    pub fn displayed_failures(&self, limit: Option<usize>) -> (&[RecordFailure], usize) {
        let shown = limit
            .unwrap_or(self.validation_errors.len())
            .min(self.validation_errors.len());
        (
            &self.validation_errors[..shown],
            self.validation_errors.len() - shown,
        )
    }
}

/// Percentage of valid records; 0 when there are no records.
pub fn success_rate(valid: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        valid as f64 / total as f64 * 100.0
    }
}
