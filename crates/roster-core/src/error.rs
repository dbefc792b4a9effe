//! Error types for `roster-core`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  /// No live record carries this identifier.
  #[error("user not found: {0}")]
  NotFound(String),

  /// Any failure of the backing store other than a missing record.
  #[error("internal error: {0}")]
  Internal(String),
}

impl Error {
  pub fn is_not_found(&self) -> bool { matches!(self, Self::NotFound(_)) }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
