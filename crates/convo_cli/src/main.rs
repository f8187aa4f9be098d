mod commands;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "convo")]
#[command(version, about = "Conversational platform data tools", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging and list every invalid record
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a CSV dataset against a JSON Schema
    Validate {
        /// Path to the schema file (JSON, YAML or TOML)
        #[arg(short, long)]
        schema: PathBuf,

        /// Path to the CSV data file
        #[arg(short, long)]
        data: PathBuf,

        /// Output format: text, json
        #[arg(short, long, default_value = "text", value_parser = ["text", "json"])]
        format: String,
    },

    /// Check a schema document without validating data
    Check {
        /// Path to the schema file (JSON, YAML or TOML)
        #[arg(short, long)]
        schema: PathBuf,
    },

    /// Print the sentiment label of a text
    Classify {
        /// Text to classify
        text: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let log_level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_level(true)
                .compact(),
        )
        .with(tracing_subscriber::filter::LevelFilter::from_level(
            log_level,
        ))
        .init();

    // Execute command
    match cli.command {
        Commands::Validate {
            schema,
            data,
            format,
        } => commands::validate::execute(&schema, &data, &format, cli.verbose),

        Commands::Check { schema } => commands::check::execute(&schema),

        Commands::Classify { text } => commands::classify::execute(&text),
    }
}
