use anyhow::Result;
use colored::*;
use convo_validator::{DEFAULT_DISPLAY_LIMIT, RecordFailure, ValidationReport};
use serde_json::Value;

pub fn print_validation_report(report: &ValidationReport, format: &str, verbose: bool) -> Result<()> {
    match format {
        "json" => print_json_report(report),
        _ => {
            print_text_report(report, verbose);
            Ok(())
        }
    }
}

fn print_text_report(report: &ValidationReport, verbose: bool) {
    println!("\n{}", "═".repeat(60));
    println!("{}", "  VALIDATION REPORT".bold());
    println!("{}", "═".repeat(60));

    println!("\n  Schema:    {}", report.schema_file);
    println!("  Data:      {}", report.data_file);
    println!(
        "  Timestamp: {}",
        report.timestamp.format("%Y-%m-%d %H:%M:%S")
    );

    if report.passed() {
        println!(
            "\n{} {}",
            "✓".green().bold(),
            "All records are valid".green().bold()
        );
    } else {
        println!(
            "\n{} {}",
            "✗".red().bold(),
            format!("{} invalid record(s) found", report.invalid_records)
                .red()
                .bold()
        );
    }

    println!("\n{}", "Summary:".bold());
    println!("  Total records:   {}", report.total_records);
    println!("  Valid records:   {}", report.valid_records);
    println!("  Invalid records: {}", report.invalid_records);
    println!("  Success rate:    {:.2}%", report.success_rate);

    if !report.passed() {
        let limit = if verbose {
            None
        } else {
            Some(DEFAULT_DISPLAY_LIMIT)
        };
        let (shown, omitted) = report.displayed_failures(limit);

        println!("\n{}", "Invalid records:".red().bold());
        for failure in shown {
            print_failure(failure);
        }

        if omitted > 0 {
            println!(
                "\n  {}",
                format!(
                    "... and {} more invalid record(s) omitted (use --verbose to list all)",
                    omitted
                )
                .yellow()
            );
        }
    }

    println!("{}", "═".repeat(60));
}

fn print_failure(failure: &RecordFailure) {
    let summary = failure
        .summary()
        .into_iter()
        .map(|(field, value)| format!("{}={}", field, display_value(value)))
        .collect::<Vec<_>>()
        .join(", ");

    if summary.is_empty() {
        println!("\n  {}", format!("Row {}", failure.row).bold());
    } else {
        println!("\n  {} ({})", format!("Row {}", failure.row).bold(), summary);
    }

    for error in &failure.errors {
        println!("    - {}", error.red());
    }
}

fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn print_json_report(report: &ValidationReport) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(report)?);
    Ok(())
}

pub fn print_success(message: &str) {
    println!("{} {}", "✓".green().bold(), message.green());
}

pub fn print_info(message: &str) {
    println!("{} {}", "ℹ".blue().bold(), message);
}
