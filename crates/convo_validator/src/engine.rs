//! Main validation engine.
//!
//! This module provides the `RecordValidator` that runs the whole pipeline:
//! load schema, load dataset, validate every record, aggregate a report.

use crate::{DataSet, Record, RecordFailure, RecordSchema, Result, ValidationReport};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, info};

/// Input locations for a validation run.
///
/// Paths are always supplied explicitly by the caller.
#[derive(Debug, Clone)]
pub struct ValidatorConfig {
    /// Path to the JSON Schema document
    pub schema_path: PathBuf,

    /// Path to the CSV data file
    pub data_path: PathBuf,
}

impl ValidatorConfig {
    /// Creates a new configuration.
    pub fn new(schema_path: impl Into<PathBuf>, data_path: impl Into<PathBuf>) -> Self {
        Self {
            schema_path: schema_path.into(),
            data_path: data_path.into(),
        }
    }
}

/// Validates records against a compiled schema.
///
/// # Example
///
/// ```rust
/// use convo_validator::{DataSet, RecordSchema, RecordValidator};
/// use serde_json::json;
///
/// let schema = RecordSchema::from_value(
///     "inline.json",
///     json!({"type": "object", "required": ["id"]}),
/// )
/// .unwrap();
/// let dataset = DataSet::from_reader("inline.csv", "id,name\n1,Ana\n,Bruno\n".as_bytes()).unwrap();
///
/// let validator = RecordValidator::new(schema);
/// let report = validator.validate_dataset(&dataset);
///
/// assert_eq!(report.total_records, 2);
/// assert_eq!(report.invalid_records, 1);
/// assert_eq!(report.validation_errors[0].row, 2);
/// ```
#[derive(Debug)]
pub struct RecordValidator {
    schema: RecordSchema,
}

impl RecordValidator {
    /// Creates a new validator for an already loaded schema.
    pub fn new(schema: RecordSchema) -> Self {
        Self { schema }
    }

    /// Loads the schema at `path` and creates a validator for it.
    pub fn from_schema_file(path: impl AsRef<Path>) -> Result<Self> {
        Ok(Self::new(RecordSchema::load(path)?))
    }

    /// Returns the schema records are validated against.
    pub fn schema(&self) -> &RecordSchema {
        &self.schema
    }

    /// Validates a single record.
    ///
    /// Returns every violation found; an empty list means the record is valid.
    pub fn validate_record(&self, record: &Record) -> Vec<String> {
        self.schema.violations(record)
    }

    /// Validates every record of a dataset and builds a report.
    ///
    /// Records are independent: a failing record never stops the run.
    pub fn validate_dataset(&self, dataset: &DataSet) -> ValidationReport {
        let start = Instant::now();
        let mut failures = Vec::new();

        for (idx, record) in dataset.records().enumerate() {
            let row = idx + 1;
            let errors = self.validate_record(record);
            if errors.is_empty() {
                continue;
            }

            debug!(row, violations = errors.len(), "Record failed validation");
            failures.push(RecordFailure {
                row,
                data: record.clone(),
                errors,
            });
        }

        let report = ValidationReport::new(
            self.schema.path().display().to_string(),
            dataset.path().display().to_string(),
            dataset.len(),
            failures,
        );

        info!(
            total = report.total_records,
            valid = report.valid_records,
            invalid = report.invalid_records,
            duration_ms = start.elapsed().as_millis() as u64,
            "Validation finished"
        );

        report
    }

    /// Runs the whole pipeline for a configuration.
    ///
    /// # Errors
    ///
    /// Returns a `LoadError` if the schema or the data cannot be loaded.
    /// Invalid records are not errors; they are part of the report.
    pub fn run(config: &ValidatorConfig) -> Result<ValidationReport> {
        let validator = Self::from_schema_file(&config.schema_path)?;
        let dataset = DataSet::load_csv(&config.data_path)?;
        Ok(validator.validate_dataset(&dataset))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::LoadError;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn customer_validator() -> RecordValidator {
        let schema = RecordSchema::from_value(
            "customer_schema.json",
            json!({
                "type": "object",
                "required": ["id", "name", "email"],
                "properties": {
                    "id": { "type": "integer" },
                    "name": { "type": "string" },
                    "email": { "type": "string", "format": "email" },
                    "category": { "enum": ["bronze", "silver", "gold"] }
                }
            }),
        )
        .unwrap();
        RecordValidator::new(schema)
    }

    fn dataset(csv: &str) -> DataSet {
        DataSet::from_reader("customers.csv", csv.as_bytes()).unwrap()
    }

    #[test]
    fn test_all_valid() {
        let validator = customer_validator();
        let data = dataset(
            "id,name,email,category\n\
             1,Ana,ana@example.com,gold\n\
             2,Bruno,bruno@example.com,silver\n",
        );

        let report = validator.validate_dataset(&data);
        assert_eq!(report.total_records, 2);
        assert_eq!(report.valid_records, 2);
        assert_eq!(report.success_rate, 100.0);
        assert!(report.validation_errors.is_empty());
        assert_eq!(report.exit_code(), 0);
    }

    #[test]
    fn test_invalid_records_collected() {
        let validator = customer_validator();
        let data = dataset(
            "id,name,email,category\n\
             1,Ana,ana@example.com,gold\n\
             2,,not-an-email,platinum\n\
             3,Carla,carla@example.com,bronze\n",
        );

        let report = validator.validate_dataset(&data);
        assert_eq!(report.total_records, 3);
        assert_eq!(report.invalid_records, 1);
        assert_eq!(report.validation_errors.len(), report.invalid_records);

        let failure = &report.validation_errors[0];
        assert_eq!(failure.row, 2);
        // missing name, bad email format, category outside enum
        assert_eq!(failure.errors.len(), 3, "{:?}", failure.errors);
        assert_eq!(report.exit_code(), 2);
    }

    #[test]
    fn test_empty_dataset() {
        let validator = customer_validator();
        let report = validator.validate_dataset(&dataset("id,name,email\n"));
        assert_eq!(report.total_records, 0);
        assert_eq!(report.success_rate, 0.0);
        assert_eq!(report.exit_code(), 0);
    }

    #[test]
    fn test_run_missing_schema() {
        let config = ValidatorConfig::new("missing/schema.json", "missing/data.csv");
        let err = RecordValidator::run(&config).unwrap_err();
        assert!(matches!(err, LoadError::SchemaNotFound(_)));
        assert!(err.is_schema_error());
    }
}
