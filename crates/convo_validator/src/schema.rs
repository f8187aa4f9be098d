//! Schema loading and compilation.
//!
//! A record schema is a JSON Schema (Draft 2020-12) document. It may be stored
//! as JSON, YAML or TOML; the format is detected from the file extension.
//! The document is compiled once when loaded and reused for every record.

use crate::{LoadError, Record, Result};
use jsonschema::{Draft, Validator};
use serde_json::Value;
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Dialect assumed when the document does not declare `$schema`.
pub const DEFAULT_DIALECT: &str = "https://json-schema.org/draft/2020-12/schema";

/// Supported schema file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaFormat {
    /// JSON format (.json)
    Json,
    /// YAML format (.yml, .yaml)
    Yaml,
    /// TOML format (.toml)
    Toml,
}

impl SchemaFormat {
    fn name(&self) -> &'static str {
        match self {
            SchemaFormat::Json => "JSON",
            SchemaFormat::Yaml => "YAML",
            SchemaFormat::Toml => "TOML",
        }
    }
}

/// Detect the schema format from a file path based on its extension.
///
/// # Supported Extensions
///
/// * `.json` → `SchemaFormat::Json`
/// * `.yaml`, `.yml` → `SchemaFormat::Yaml`
/// * `.toml` → `SchemaFormat::Toml`
///
/// # Errors
///
/// Returns `LoadError::InvalidExtension` if the file has no extension.
/// Returns `LoadError::UnsupportedFormat` if the extension is not recognized.
pub fn detect_format(path: &Path) -> Result<SchemaFormat> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .ok_or_else(|| LoadError::InvalidExtension(path.to_path_buf()))?;

    match extension.to_lowercase().as_str() {
        "json" => Ok(SchemaFormat::Json),
        "yaml" | "yml" => Ok(SchemaFormat::Yaml),
        "toml" => Ok(SchemaFormat::Toml),
        other => Err(LoadError::UnsupportedFormat(other.to_string())),
    }
}

/// Parse a schema document from a string in the given format.
pub fn parse_document(content: &str, format: SchemaFormat) -> std::result::Result<Value, String> {
    match format {
        SchemaFormat::Json => serde_json::from_str(content).map_err(|e| e.to_string()),
        SchemaFormat::Yaml => serde_yaml_ng::from_str(content).map_err(|e| e.to_string()),
        SchemaFormat::Toml => toml::from_str(content).map_err(|e| e.to_string()),
    }
}

/// A loaded and compiled record schema.
///
/// # Example
///
/// ```rust
/// use convo_validator::RecordSchema;
/// use serde_json::json;
///
/// let schema = RecordSchema::from_value(
///     "inline.json",
///     json!({
///         "title": "Customer",
///         "type": "object",
///         "required": ["id"],
///         "properties": { "id": { "type": "integer" } }
///     }),
/// )
/// .unwrap();
///
/// assert_eq!(schema.title(), Some("Customer"));
/// assert_eq!(schema.required_fields(), vec!["id"]);
/// ```
pub struct RecordSchema {
    path: PathBuf,
    document: Value,
    validator: Validator,
}

impl RecordSchema {
    /// Loads a schema document from disk and compiles it.
    ///
    /// # Errors
    ///
    /// Returns `LoadError::SchemaNotFound` if the file is missing,
    /// `LoadError::SchemaParse` if it is not valid structured data, and
    /// `LoadError::InvalidSchema` if it is not a valid JSON Schema.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(LoadError::SchemaNotFound(path.to_path_buf()));
        }

        let format = detect_format(path)?;
        let content = std::fs::read_to_string(path).map_err(|e| LoadError::io(path, e))?;
        let document = parse_document(&content, format).map_err(|reason| {
            LoadError::SchemaParse {
                path: path.to_path_buf(),
                format: format.name(),
                reason,
            }
        })?;

        debug!("Parsed {} schema document from {}", format.name(), path.display());
        let schema = Self::from_value(path, document)?;

        info!(
            title = schema.title().unwrap_or("N/A"),
            required = schema.required_fields().len(),
            "Schema loaded: {}",
            path.display()
        );

        Ok(schema)
    }

    /// Compiles an already parsed schema document.
    ///
    /// `path` is only used for reporting.
    pub fn from_value(path: impl AsRef<Path>, document: Value) -> Result<Self> {
        let path = path.as_ref().to_path_buf();

        if !document.is_object() {
            return Err(LoadError::InvalidSchema {
                path,
                reason: "schema document must be an object".to_string(),
            });
        }

        let mut options = jsonschema::options();
        options
            .with_draft(Draft::Draft202012)
            .should_validate_formats(true);

        let validator = options
            .build(&document)
            .map_err(|e| LoadError::InvalidSchema {
                path: path.clone(),
                reason: e.to_string(),
            })?;

        Ok(Self {
            path,
            document,
            validator,
        })
    }

    /// Returns the path the schema was loaded from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the raw schema document.
    pub fn document(&self) -> &Value {
        &self.document
    }

    /// Returns the schema title, if declared.
    pub fn title(&self) -> Option<&str> {
        self.document.get("title").and_then(Value::as_str)
    }

    /// Returns the declared `$schema` dialect, or the Draft 2020-12 default.
    pub fn dialect(&self) -> &str {
        self.document
            .get("$schema")
            .and_then(Value::as_str)
            .unwrap_or(DEFAULT_DIALECT)
    }

    /// Returns the top-level required field names, in declaration order.
    pub fn required_fields(&self) -> Vec<&str> {
        self.document
            .get("required")
            .and_then(Value::as_array)
            .map(|fields| fields.iter().filter_map(Value::as_str).collect())
            .unwrap_or_default()
    }

    /// Validates a record and returns every violation as a readable message.
    ///
    /// Messages name the offending field as a dotted path
    /// (`Field 'address.city': ...`). Violations without a field path, such
    /// as a missing required property, are reported as `General error: ...`.
    /// An empty list means the record is valid.
    pub fn violations(&self, record: &Record) -> Vec<String> {
        let instance = Value::Object(record.clone());
        self.validator
            .iter_errors(&instance)
            .map(|error| {
                let field_path = dotted_path(&error.instance_path.to_string());
                if field_path.is_empty() {
                    format!("General error: {error}")
                } else {
                    format!("Field '{field_path}': {error}")
                }
            })
            .collect()
    }

    /// Returns true if the record satisfies the schema.
    pub fn is_valid(&self, record: &Record) -> bool {
        self.validator.is_valid(&Value::Object(record.clone()))
    }
}

impl fmt::Debug for RecordSchema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RecordSchema")
            .field("path", &self.path)
            .field("title", &self.title())
            .field("required", &self.required_fields())
            .finish_non_exhaustive()
    }
}

/// Converts a JSON Pointer (`/address/city`) into a dotted path (`address.city`).
fn dotted_path(pointer: &str) -> String {
    pointer
        .split('/')
        .skip(1)
        .map(|segment| segment.replace("~1", "/").replace("~0", "~"))
        .collect::<Vec<_>>()
        .join(".")
}
