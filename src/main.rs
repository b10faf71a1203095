//! Pricempire CORS Proxy
//!
//! Local reverse proxy for the browser frontend. Built with Tokio and Axum.
//!
//! # Architecture Overview
//!
//! ```text
//!                         ┌──────────────────────────────────────────────────┐
//!                         │                  CORS PROXY                      │
//!     Browser Request     │  ┌────────┐   ┌──────────┐   ┌─────────────┐     │
//!     ────────────────────┼─▶│  net   │──▶│  http    │──▶│  routing    │     │
//!                         │  │listener│   │ engine   │   │ prefix/URL  │     │
//!                         │  └────────┘   └──────────┘   └──────┬──────┘     │
//!                         │                                     ▼            │
//!     Browser Response    │  ┌──────────┐  ┌──────────┐  ┌─────────────┐     │
//!     ◀───────────────────┼──│ response │◀─│ security │◀─│  upstream   │◀────┼──── Pricempire
//!                         │  │translate │  │  CORS    │  │   client    │     │     API
//!                         │  └──────────┘  └──────────┘  └─────────────┘     │
//!                         └──────────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use clap::Parser;

use pricempire_proxy::config::{load_config, validation::validate_config, ConfigError, ProxyConfig};
use pricempire_proxy::lifecycle::Shutdown;
use pricempire_proxy::observability::{logging, metrics};
use pricempire_proxy::{net, HttpServer};

#[derive(Parser)]
#[command(name = "pricempire-proxy")]
#[command(about = "CORS proxy for the Pricempire API", long_about = None)]
struct Cli {
    /// Path to a TOML config file. Defaults are used when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the listener bind address (e.g. 127.0.0.1:3000).
    #[arg(short, long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => ProxyConfig::default(),
    };
    if let Some(bind) = cli.bind {
        config.listener.bind_address = bind;
        validate_config(&config).map_err(ConfigError::Validation)?;
    }

    logging::init_logging(&config.observability.log_level);

    tracing::info!("pricempire-proxy v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        bind_address = %config.listener.bind_address,
        upstream = %config.upstream.base_url,
        prefix = %config.upstream.route_prefix,
        timeout_secs = ?config.upstream.timeout_secs,
        "Configuration loaded"
    );
    if config.upstream.timeout_secs.is_none() {
        tracing::warn!("No upstream timeout configured; a stalled upstream holds its request open");
    }

    if config.observability.metrics_enabled {
        match config.observability.metrics_address.parse() {
            Ok(addr) => {
                if let Err(e) = metrics::init_metrics(addr) {
                    tracing::error!(error = %e, "Failed to start metrics exporter");
                }
            }
            Err(_) => {
                tracing::error!(
                    metrics_address = %config.observability.metrics_address,
                    "Failed to parse metrics address"
                );
            }
        }
    }

    let listener = net::bind(&config.listener).await?;
    let local_addr = listener.local_addr()?;
    tracing::info!(
        endpoint = %format!("http://{}{}", local_addr, config.upstream.route_prefix),
        "Proxy endpoint ready, press Ctrl+C to stop"
    );

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    shutdown.trigger_on_signal();

    let server = HttpServer::new(config)?;
    server.run(listener, server_shutdown).await?;

    tracing::info!("Proxy server stopped");
    Ok(())
}
