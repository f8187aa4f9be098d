//! # Customer Record Validator
//!
//! Validates tabular customer records against a JSON Schema and summarizes
//! the outcome in a [`ValidationReport`]. The pipeline is linear:
//!
//! 1. Load the schema (JSON, YAML or TOML holding a Draft 2020-12 document)
//! 2. Load the dataset (CSV with a header row; missing cells are absent)
//! 3. Validate each record, collecting every violation
//! 4. Aggregate counts and the success rate
//!
//! Loading failures are fatal and returned as [`LoadError`]. Record
//! violations never abort the run.
//!
//! ## Example
//!
//! ```rust
//! use convo_validator::{DataSet, RecordSchema, RecordValidator};
//! use serde_json::json;
//!
//! let schema = RecordSchema::from_value(
//!     "customer_schema.json",
//!     json!({
//!         "type": "object",
//!         "required": ["id", "email"],
//!         "properties": {
//!             "id": { "type": "integer" },
//!             "email": { "type": "string" }
//!         }
//!     }),
//! )
//! .unwrap();
//!
//! let csv = "id,email\n1,ana@example.com\n2,\n";
//! let dataset = DataSet::from_reader("customers.csv", csv.as_bytes()).unwrap();
//!
//! let report = RecordValidator::new(schema).validate_dataset(&dataset);
//! assert_eq!(report.valid_records, 1);
//! assert_eq!(report.invalid_records, 1);
//! assert_eq!(report.success_rate, 50.0);
//! ```

mod dataset;
mod engine;
mod error;
mod report;
mod schema;

pub use dataset::*;
pub use engine::*;
pub use error::*;
pub use report::*;
pub use schema::*;
