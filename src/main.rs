//! Ridematch Worker - backend for community-event ride matching
//!
//! Connects to NATS and answers `ride.match` requests, or runs a single
//! pass against a file on disk via the `match-file` CLI subcommand.

mod cli;
mod config;
mod core;
mod error;
mod handlers;
mod services;
mod types;

use anyhow::Result;
use clap::Parser;
use tracing::{error, info};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use types::{MatchRequest, MatchingConfig};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = cli::Cli::parse();

    dotenvy::dotenv().ok();

    let config = config::Config::from_env()?;

    match cli.command {
        Some(cli::Command::MatchFile { input }) => run_match_file(&input).await,
        Some(cli::Command::Serve) | None => run_server(config).await,
    }
}

async fn run_match_file(input: &std::path::Path) -> Result<()> {
    let raw = std::fs::read_to_string(input)?;
    let request: MatchRequest = serde_json::from_str(&raw)?;
    let result = core::match_ride_groups(&request, &MatchingConfig::default())?;
    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}

async fn run_server(config: config::Config) -> Result<()> {
    let file_appender = RollingFileAppender::new(Rotation::DAILY, &config.logs_dir, "ridematch-worker.log");
    std::fs::create_dir_all(&config.logs_dir).ok();
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,ridematch_worker=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::fmt::layer().with_writer(non_blocking).with_ansi(false))
        .init();

    info!("Starting Ridematch Worker...");

    let nats_client = async_nats::connect(&config.nats_url).await?;
    info!("Connected to NATS at {}", config.nats_url);

    let matching_config = MatchingConfig::default();

    let handler_result = handlers::start_handlers(nats_client, matching_config).await;

    if let Err(err) = handler_result {
        error!("Handler error: {}", err);
        return Err(err);
    }

    Ok(())
}
