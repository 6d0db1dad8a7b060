//! collector-dashboard - web dashboard for the artists collector backend
//!
//! Serves the review pages and a JSON proxy API in front of the backend.

use anyhow::{Context, Result};
use clap::Parser;
use collector_common::config::ConfigResolver;
use collector_dashboard::{build_router, AppState};
use std::path::PathBuf;
use tracing::info;

/// Command-line arguments
///
/// Unset values fall back to environment, config file, then defaults.
#[derive(Parser, Debug)]
#[command(name = "collector-dashboard")]
#[command(about = "Web dashboard for the artists collector backend")]
#[command(version)]
struct Args {
    /// Base URL of the collector backend
    #[arg(long, value_name = "URL")]
    backend_url: Option<String>,

    /// Address to listen on (host:port)
    #[arg(long, value_name = "ADDR")]
    bind: Option<String>,

    /// Config file (defaults to the platform config directory)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "collector_dashboard=info,tower_http=info".into()),
        )
        .init();

    // Build identification first, before anything can stall
    info!(
        "Starting collector-dashboard v{} [{}] built {} ({})",
        env!("CARGO_PKG_VERSION"),
        env!("GIT_HASH"),
        env!("BUILD_TIMESTAMP"),
        env!("BUILD_PROFILE")
    );

    let args = Args::parse();

    let mut resolver = ConfigResolver::new()
        .with_cli_backend_url(args.backend_url)
        .with_cli_bind_addr(args.bind);
    if let Some(path) = args.config {
        resolver = resolver.with_config_file(Some(path));
    }

    let config = resolver.resolve().context("Invalid configuration")?;
    info!(
        "Backend URL: {} (from {})",
        config.backend_url, config.backend_url_source
    );
    info!(
        "Bind address: {} (from {})",
        config.bind_addr, config.bind_addr_source
    );

    let state = AppState::from_config(&config).context("Failed to create backend client")?;
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("Failed to bind {}", config.bind_addr))?;
    info!("collector-dashboard listening on http://{}", config.bind_addr);
    info!("Health check: http://{}/health", config.bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}
