//! Projects API server.
//!
//! # Architecture Overview
//!
//! ```text
//!     Client Request
//!     ──────────────▶ request-id → trace → timeout → body limit
//!                          │
//!                          ▼
//!                   ┌─────────────┐     ┌───────────────┐     ┌──────────┐
//!                   │ request log │────▶│ id validation │────▶│ handlers │
//!                   │   (timing)  │     │ /projects/{id}│     └────┬─────┘
//!                   └─────────────┘     └───────────────┘          │
//!                          ▲                                       ▼
//!     Client Response      │                              ┌──────────────┐
//!     ◀────────────────────┴──────────────────────────────│ ProjectStore │
//!                                                         │  (in memory) │
//!                                                         └──────────────┘
//! ```
//!
//! The store lives only as long as the process.

use std::path::PathBuf;

use clap::Parser;

use projects_api::config::{load_config, ServiceConfig};
use projects_api::lifecycle::{self, Shutdown};
use projects_api::observability::logging::init_logging;

#[derive(Parser)]
#[command(name = "projects-api")]
#[command(about = "In-memory projects CRUD service", long_about = None)]
struct Args {
    /// Path to a TOML configuration file. Defaults apply when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => load_config(path)?,
        None => ServiceConfig::default(),
    };

    init_logging(&config.observability.log_level);

    tracing::info!("projects-api v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        bind_address = %config.listener.bind_address,
        request_timeout_secs = config.timeouts.request_secs,
        max_body_size = config.limits.max_body_size,
        config_file = ?args.config,
        "Configuration loaded"
    );

    let shutdown = Shutdown::new();
    lifecycle::run(config, shutdown.subscribe()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
