//! Bootstrap pieces of the Roster server: configuration and logging.
//!
//! The binary in `main.rs` wires these together with a seeded in-memory
//! store and the router from `roster-api`.

pub mod settings;

pub use settings::ServerConfig;

use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Install the global tracing subscriber.
///
/// Debug mode logs human-readable lines at `DEBUG`; otherwise logs are JSON
/// at `INFO`. `RUST_LOG` overrides the default level either way.
pub fn init_tracing(debug: bool) {
  let default_level = if debug { LevelFilter::DEBUG } else { LevelFilter::INFO };
  let filter = EnvFilter::builder()
    .with_default_directive(default_level.into())
    .from_env_lossy();

  if debug {
    tracing_subscriber::fmt().with_env_filter(filter).init();
  } else {
    tracing_subscriber::fmt()
      .json()
      .with_env_filter(filter)
      .init();
  }
}
