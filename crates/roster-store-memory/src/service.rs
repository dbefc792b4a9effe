//! [`StoreUserService`]: the [`UserService`] implementation over a
//! [`MemoryStore`].

use std::sync::Arc;

use chrono::Utc;
use roster_core::{Error, Result, User, UserFields, UserService};
use uuid::Uuid;

use crate::MemoryStore;

/// Assigns identifiers and timestamps, then delegates to the store.
///
/// Cloning is cheap; the store is reference-counted.
#[derive(Debug, Clone, Default)]
pub struct StoreUserService {
  store: Arc<MemoryStore>,
}

impl StoreUserService {
  pub fn new(store: Arc<MemoryStore>) -> Self { Self { store } }

  pub fn store(&self) -> &Arc<MemoryStore> { &self.store }
}

impl UserService for StoreUserService {
  fn list(&self) -> Result<Vec<User>> { Ok(self.store.list()) }

  fn get(&self, id: &str) -> Result<User> {
    self
      .store
      .find(id)
      .ok_or_else(|| Error::NotFound(id.to_owned()))
  }

  fn create(&self, fields: UserFields) -> Result<User> {
    let user = User::new(Uuid::new_v4().to_string(), fields, Utc::now());
    self.store.insert(user.clone());
    tracing::debug!(user_id = %user.id, "created user");
    Ok(user)
  }

  fn update(&self, id: &str, fields: UserFields) -> Result<User> {
    let now = Utc::now();
    let user = self
      .store
      .replace(id, |record| record.apply(fields, now))
      .ok_or_else(|| Error::NotFound(id.to_owned()))?;
    tracing::debug!(user_id = %user.id, "updated user");
    Ok(user)
  }

  fn delete(&self, id: &str) -> Result<()> {
    self
      .store
      .remove(id)
      .ok_or_else(|| Error::NotFound(id.to_owned()))?;
    tracing::debug!(user_id = %id, "deleted user");
    Ok(())
  }
}
