use anyhow::{Context, Result};
use convo_validator::RecordSchema;
use std::path::Path;
use tracing::info;

use crate::output;

pub fn execute(schema_path: &Path) -> Result<()> {
    info!("Checking schema: {}", schema_path.display());

    let schema = RecordSchema::load(schema_path)
        .with_context(|| format!("Failed to load schema file: {}", schema_path.display()))?;

    // Compiling the schema succeeded, so the document is valid
    output::print_success("Schema is valid");

    let required = schema.required_fields();

    println!("\nSchema Summary:");
    println!("  File:     {}", schema.path().display());
    println!("  Title:    {}", schema.title().unwrap_or("N/A"));
    println!("  Dialect:  {}", schema.dialect());
    if required.is_empty() {
        println!("  Required: none");
    } else {
        println!("  Required: {}", required.join(", "));
    }

    Ok(())
}
