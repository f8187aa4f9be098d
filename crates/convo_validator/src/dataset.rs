//! Tabular dataset loading.
//!
//! Rows are read from a CSV file with a header row. Each row becomes a
//! [`Record`]: a map from column name to JSON value. Missing cells are left
//! out of the record entirely rather than stored as null, so a missing cell
//! in a required column is reported as a missing property.
//!
//! Cell types are inferred per column, the way spreadsheet-style loaders do:
//! a column whose present cells all parse as integers becomes integer-typed,
//! then float, then boolean, otherwise every cell stays a string.

use crate::{LoadError, Result};
use serde_json::{Map, Number, Value};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// A single record: column name to value.
pub type Record = Map<String, Value>;

/// Cell contents treated as missing.
pub const MISSING_MARKERS: &[&str] = &[
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// Inferred type of a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnType {
    /// Every present cell parses as `i64`
    Integer,
    /// Every present cell parses as a finite `f64`
    Float,
    /// Every present cell is `true` or `false` (any case)
    Boolean,
    /// Anything else
    Text,
}

impl ColumnType {
    /// Infers the narrowest type that fits every present cell.
    pub fn infer<'a>(cells: impl Iterator<Item = &'a str>) -> Self {
        let present: Vec<&str> = cells.filter(|c| !is_missing(c)).collect();
        if present.is_empty() {
            return ColumnType::Text;
        }

        if present.iter().all(|c| c.trim().parse::<i64>().is_ok()) {
            ColumnType::Integer
        } else if present.iter().all(|c| parse_finite(c).is_some()) {
            ColumnType::Float
        } else if present.iter().all(|c| parse_bool(c).is_some()) {
            ColumnType::Boolean
        } else {
            ColumnType::Text
        }
    }

    /// Converts a present cell into a JSON value of this type.
    fn convert(&self, cell: &str) -> Value {
        match self {
            ColumnType::Integer => cell
                .trim()
                .parse::<i64>()
                .map(Value::from)
                .unwrap_or_else(|_| Value::String(cell.to_string())),
            ColumnType::Float => parse_finite(cell)
                .and_then(Number::from_f64)
                .map(Value::Number)
                .unwrap_or_else(|| Value::String(cell.to_string())),
            ColumnType::Boolean => parse_bool(cell)
                .map(Value::Bool)
                .unwrap_or_else(|| Value::String(cell.to_string())),
            ColumnType::Text => Value::String(cell.to_string()),
        }
    }
}

/// Returns true if a cell counts as missing.
pub fn is_missing(cell: &str) -> bool {
    MISSING_MARKERS.contains(&cell)
}

fn parse_finite(cell: &str) -> Option<f64> {
    cell.trim().parse::<f64>().ok().filter(|f| f.is_finite())
}

fn parse_bool(cell: &str) -> Option<bool> {
    let cell = cell.trim();
    if cell.eq_ignore_ascii_case("true") {
        Some(true)
    } else if cell.eq_ignore_ascii_case("false") {
        Some(false)
    } else {
        None
    }
}

/// A loaded tabular dataset.
#[derive(Debug, Clone)]
pub struct DataSet {
    path: PathBuf,
    columns: Vec<String>,
    column_types: Vec<ColumnType>,
    records: Vec<Record>,
}

impl DataSet {
    /// Loads a CSV file with a header row.
    ///
    /// # Errors
    ///
    /// Returns `LoadError::DataNotFound` if the file is missing,
    /// `LoadError::EmptyData` if it has no header row, and
    /// `LoadError::MalformedData` if rows are ragged, headers repeat, or the
    /// content is not valid UTF-8.
    pub fn load_csv(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(LoadError::DataNotFound(path.to_path_buf()));
        }

        let file = std::fs::File::open(path).map_err(|e| LoadError::io(path, e))?;
        let dataset = Self::from_reader(path, file)?;

        info!(
            rows = dataset.len(),
            columns = %dataset.columns.join(", "),
            "Data loaded: {}",
            path.display()
        );

        Ok(dataset)
    }

    /// Reads CSV content from any reader. `path` is only used for reporting.
    pub fn from_reader(path: impl AsRef<Path>, reader: impl std::io::Read) -> Result<Self> {
        let path = path.as_ref();
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_reader(reader);

        let headers = reader
            .headers()
            .map_err(|e| LoadError::malformed(path, e))?
            .clone();

        if headers.is_empty() || headers.iter().all(|h| h.trim().is_empty()) {
            return Err(LoadError::EmptyData(path.to_path_buf()));
        }

        let columns: Vec<String> = headers.iter().map(|h| h.trim().to_string()).collect();
        let mut seen = HashSet::new();
        for column in &columns {
            if !seen.insert(column.as_str()) {
                return Err(LoadError::malformed(
                    path,
                    format!("duplicate column '{column}'"),
                ));
            }
        }

        let mut rows = Vec::new();
        for result in reader.records() {
            let row = result.map_err(|e| LoadError::malformed(path, e))?;
            rows.push(row);
        }

        let column_types: Vec<ColumnType> = (0..columns.len())
            .map(|idx| ColumnType::infer(rows.iter().map(move |row| row.get(idx).unwrap_or(""))))
            .collect();

        for (column, column_type) in columns.iter().zip(&column_types) {
            debug!("Column '{}' inferred as {:?}", column, column_type);
        }

        let records = rows
            .iter()
            .map(|row| {
                let mut record = Record::new();
                for (idx, cell) in row.iter().enumerate() {
                    if is_missing(cell) {
                        continue;
                    }
                    record.insert(columns[idx].clone(), column_types[idx].convert(cell));
                }
                record
            })
            .collect();

        Ok(Self {
            path: path.to_path_buf(),
            columns,
            column_types,
            records,
        })
    }

    /// Creates a dataset from already built records.
    pub fn from_records(path: impl AsRef<Path>, records: Vec<Record>) -> Self {
        let mut columns: Vec<String> = Vec::new();
        for record in &records {
            for key in record.keys() {
                if !columns.contains(key) {
                    columns.push(key.clone());
                }
            }
        }
        let column_types = vec![ColumnType::Text; columns.len()];

        Self {
            path: path.as_ref().to_path_buf(),
            columns,
            column_types,
            records,
        }
    }

    /// Returns the path the data was loaded from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the column names in file order.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Returns the inferred type of a column.
    pub fn column_type(&self, column: &str) -> Option<ColumnType> {
        self.columns
            .iter()
            .position(|c| c == column)
            .and_then(|idx| self.column_types.get(idx).copied())
    }

    /// Returns the number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if there are no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns an iterator over the records.
    pub fn records(&self) -> impl Iterator<Item = &Record> {
        self.records.iter()
    }
}
