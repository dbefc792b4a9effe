//! The `UserService` trait.
//!
//! The trait is implemented by storage backends (e.g. `roster-store-memory`).
//! The HTTP layer (`roster-api`) depends on this abstraction, not on any
//! concrete backend.

use crate::{
  Result,
  user::{User, UserFields},
};

/// Create/read/update/delete over the user directory.
///
/// Methods are synchronous: a backend performs each operation to completion
/// without suspending, so callers never hold a store lock across an await
/// point. The trait is dyn-compatible and is normally shared as
/// `Arc<dyn UserService>`.
///
/// Every returned [`User`] is an owned copy; mutating it never affects the
/// stored record.
pub trait UserService: Send + Sync {
  /// All users, in collection order.
  fn list(&self) -> Result<Vec<User>>;

  /// The user with `id`, or [`Error::NotFound`](crate::Error::NotFound).
  fn get(&self, id: &str) -> Result<User>;

  /// Store a new user. The backend assigns the identifier and sets
  /// `created_at == updated_at` to the current time.
  fn create(&self, fields: UserFields) -> Result<User>;

  /// Replace every mutable field of the user with `id`. Identity and
  /// `created_at` are preserved; `updated_at` is refreshed.
  fn update(&self, id: &str, fields: UserFields) -> Result<User>;

  /// Permanently remove the user with `id`.
  fn delete(&self, id: &str) -> Result<()>;
}
