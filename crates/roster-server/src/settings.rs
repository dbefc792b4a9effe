//! Runtime server configuration.
//!
//! Sources, later ones overriding earlier ones:
//!
//! 1. built-in defaults (`port = 8080`, `debug = false`)
//! 2. an optional TOML file
//! 3. the `PORT` and `DEBUG` environment variables

use std::{
  net::{IpAddr, Ipv4Addr, SocketAddr},
  path::Path,
};

use anyhow::Context as _;
use config::{Config, Environment, File, Source};
use serde::Deserialize;

/// Settings the server reads at startup.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
  /// TCP port to listen on.
  pub port:  u16,
  /// Verbose human-readable logs and a loopback-only listener.
  pub debug: bool,
}

impl Default for ServerConfig {
  fn default() -> Self {
    Self {
      port:  8080,
      debug: false,
    }
  }
}

impl ServerConfig {
  /// Load from `path` (if it exists) and the process environment.
  pub fn load(path: &Path) -> anyhow::Result<Self> {
    Self::from_sources(
      File::from(path).required(false),
      Environment::default().try_parsing(true),
    )
  }

  fn from_sources<F>(file: F, env: Environment) -> anyhow::Result<Self>
  where
    F: Source + Send + Sync + 'static,
  {
    Config::builder()
      .add_source(file)
      .add_source(env)
      .build()
      .context("failed to read configuration")?
      .try_deserialize()
      .context("failed to deserialise ServerConfig")
  }

  /// Loopback only in debug mode, every interface otherwise.
  pub fn bind_address(&self) -> SocketAddr {
    let ip = if self.debug {
      IpAddr::V4(Ipv4Addr::LOCALHOST)
    } else {
      IpAddr::V4(Ipv4Addr::UNSPECIFIED)
    };
    SocketAddr::new(ip, self.port)
  }
}
