use anyhow::{Context, Result};
use clap::Parser;
use convo_api::config::ServerConfig;
use convo_api::state::AppState;
use convo_core::NlpProcessor;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "convo-api")]
#[command(version, about = "Conversational AI Platform HTTP API", long_about = None)]
struct Cli {
    /// Interface to bind (overrides CONVO_API_HOST)
    #[arg(long)]
    host: Option<String>,

    /// Port to listen on (overrides CONVO_API_PORT)
    #[arg(short, long)]
    port: Option<u16>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_level(true)
                .compact(),
        )
        .with(tracing_subscriber::filter::LevelFilter::from_level(
            log_level,
        ))
        .init();

    let config = ServerConfig::from_env()?.with_overrides(cli.host, cli.port);
    let state = AppState::new(NlpProcessor::new());

    let address = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind {}", address))?;

    tracing::info!(
        "Conversational AI Platform listening on {}",
        listener.local_addr()?
    );

    axum::serve(listener, convo_api::app(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server terminated unexpectedly")?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for shutdown signal: {}", err);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
