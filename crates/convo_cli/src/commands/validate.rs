use anyhow::{Context, Result};
use convo_validator::{RecordValidator, ValidatorConfig};
use std::path::Path;
use tracing::info;

use crate::output;

pub fn execute(schema_path: &Path, data_path: &Path, format: &str, verbose: bool) -> Result<()> {
    info!("Validating data: {}", data_path.display());
    info!("Schema: {}", schema_path.display());

    let config = ValidatorConfig::new(schema_path, data_path);
    let report = RecordValidator::run(&config).with_context(|| {
        format!(
            "Failed to validate {} against {}",
            data_path.display(),
            schema_path.display()
        )
    })?;

    output::print_validation_report(&report, format, verbose)?;

    if !report.passed() {
        std::process::exit(report.exit_code());
    }

    Ok(())
}
