//! roster server binary.
//!
//! Reads `roster.toml` (or the path given with `--config`) and the `PORT` /
//! `DEBUG` environment variables, seeds an in-memory store with synthetic
//! users, and serves the JSON API over HTTP.

use std::{path::PathBuf, sync::Arc};

use anyhow::Context as _;
use chrono::Utc;
use clap::Parser;
use roster_core::UserService;
use roster_server::ServerConfig;
use roster_store_memory::{StoreUserService, seed};
use tokio::net::TcpListener;

#[derive(Parser)]
#[command(author, version, about = "Roster user directory server")]
struct Cli {
  /// Path to an optional TOML configuration file.
  #[arg(short, long, default_value = "roster.toml")]
  config: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  let cli = Cli::parse();

  // Configuration decides the log format, so it is read first.
  let server_cfg = ServerConfig::load(&cli.config)?;
  roster_server::init_tracing(server_cfg.debug);
  tracing::debug!(?server_cfg, "loaded configuration");

  let store = seed::seeded_store(Utc::now(), &mut rand::thread_rng());
  let service: Arc<dyn UserService> = Arc::new(StoreUserService::new(Arc::new(store)));

  let app = roster_api::api_router(service);
  let address = server_cfg.bind_address();

  tracing::info!("Listening on http://{address}");
  let listener = TcpListener::bind(address)
    .await
    .with_context(|| format!("failed to bind {address}"))?;

  axum::serve(listener, app)
    .with_graceful_shutdown(shutdown_signal())
    .await
    .context("server error")?;

  tracing::info!("server stopped");
  Ok(())
}

/// Resolve on Ctrl-C, or SIGTERM on Unix.
async fn shutdown_signal() {
  let ctrl_c = async {
    if let Err(e) = tokio::signal::ctrl_c().await {
      tracing::error!(error = %e, "failed to listen for Ctrl-C");
      std::future::pending::<()>().await;
    }
  };

  #[cfg(unix)]
  let terminate = async {
    match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
      Ok(mut signal) => {
        signal.recv().await;
      }
      Err(e) => {
        tracing::error!(error = %e, "failed to listen for SIGTERM");
        std::future::pending::<()>().await;
      }
    }
  };

  #[cfg(not(unix))]
  let terminate = std::future::pending::<()>();

  tokio::select! {
    _ = ctrl_c => {},
    _ = terminate => {},
  }

  tracing::info!("shutdown signal received, draining connections");
}
