//! Chess tournament registry server.
//!
//! Loads the seed content into a shared provider and serves the site until
//! interrupted.

use anyhow::Error;
use chess_registry::{ContentProvider, SeedData};
use cr_server::{
    api,
    config::{ConfigOverrides, ServerConfig},
    logging, metrics,
};
use pico_args::Arguments;
use std::path::PathBuf;
use tracing::{info, warn};

const HELP: &str = "\
Run the chess tournament registry site

USAGE:
  cr_server [OPTIONS]

OPTIONS:
  --bind       IP:PORT     Server socket bind address  [default: env SERVER_BIND or 127.0.0.1:8080]
  --seed       PATH        JSON seed file              [default: env SEED_FILE or built-in content]

FLAGS:
  --edit-mode              Start with admin edit mode on
  -h, --help               Print help information

ENVIRONMENT:
  SERVER_BIND              Server bind address (e.g., 0.0.0.0:8080)
  SEED_FILE                JSON seed file
  EDIT_MODE_DEFAULT        Start with edit mode on (true/false)
  SUBMIT_DELAY_MS          Delay before a submitted tournament is committed [default: 1500]
  METRICS_BIND             Prometheus listener address, disabled when unset
  SITE_TITLE               Title shown in the page header
  RUST_LOG                 Log filter
";

#[tokio::main]
async fn main() -> Result<(), Error> {
    // Load .env file if it exists
    let _ = dotenvy::dotenv();

    let mut pargs = Arguments::from_env();

    // Help has a higher priority and should be handled separately.
    if pargs.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let overrides = ConfigOverrides {
        bind: pargs.opt_value_from_str("--bind")?,
        seed_file: pargs.opt_value_from_str::<_, PathBuf>("--seed")?,
        edit_mode: pargs.contains("--edit-mode").then_some(true),
    };

    logging::init();

    let remaining = pargs.finish();
    if !remaining.is_empty() {
        warn!("Ignoring unrecognized arguments: {:?}", remaining);
    }

    let config = ServerConfig::from_env(overrides)?;
    config.validate()?;

    if let Some(addr) = config.metrics_bind {
        metrics::init_metrics(addr).map_err(Error::msg)?;
        info!("Prometheus metrics exposed on http://{}/metrics", addr);
    }

    let seed = match &config.seed_file {
        Some(path) => {
            info!("Loading seed content from {}", path.display());
            SeedData::from_path(path)?
        }
        None => SeedData::builtin(),
    };

    let provider = ContentProvider::from_seed(seed, config.site.edit_mode)?;
    info!(
        "Content loaded: {} tournament(s), edit mode {}",
        provider.snapshot().tournaments.len(),
        if config.site.edit_mode { "on" } else { "off" }
    );

    let app = api::create_router(api::build_state(provider, config.site.clone()).await);

    let listener = tokio::net::TcpListener::bind(config.bind)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to bind to {}: {}", config.bind, e))?;

    info!(
        "Server is running at http://{}. Press Ctrl+C to stop.",
        config.bind
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| anyhow::anyhow!("Server error: {}", e))?;

    info!("Shutting down server...");

    Ok(())
}

/// Graceful shutdown signal
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for Ctrl+C: {}", e);
        std::future::pending::<()>().await;
    }
}
