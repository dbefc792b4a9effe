//! User: the only entity the directory holds.
//!
//! A [`User`] is always complete: every field is present, and fields the
//! client never supplied carry their zero value. The caller-controlled part
//! of a record is split out as [`UserFields`] so that identity and
//! timestamps can only ever be assigned by the service layer.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Notification channels a user has opted into.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences {
  pub email: bool,
  pub sms:   bool,
}

/// A stored user record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
  /// Canonical text form of a random 128-bit identifier. Never changes.
  pub id:          String,
  pub first_name:  String,
  pub last_name:   String,
  pub email:       String,
  pub phone:       String,
  pub address:     String,
  pub active:      bool,
  pub preferences: Preferences,
  /// Set once, at insertion.
  pub created_at:  DateTime<Utc>,
  /// Set at insertion and refreshed by every successful replace.
  pub updated_at:  DateTime<Utc>,
}

/// Everything about a user that a client may set. Used as the payload of
/// both create and full-record replace.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserFields {
  pub first_name:  String,
  pub last_name:   String,
  pub email:       String,
  pub phone:       String,
  pub address:     String,
  pub active:      bool,
  pub preferences: Preferences,
}

impl User {
  /// Assemble a fresh record with `created_at == updated_at == now`.
  pub fn new(id: impl Into<String>, fields: UserFields, now: DateTime<Utc>) -> Self {
    let UserFields {
      first_name,
      last_name,
      email,
      phone,
      address,
      active,
      preferences,
    } = fields;

    Self {
      id: id.into(),
      first_name,
      last_name,
      email,
      phone,
      address,
      active,
      preferences,
      created_at: now,
      updated_at: now,
    }
  }

  /// Overwrite every mutable field with `fields`.
  ///
  /// `id` and `created_at` are untouched. `updated_at` always moves forward,
  /// by at least one microsecond, even if the wall clock did not.
  pub fn apply(&mut self, fields: UserFields, now: DateTime<Utc>) {
    self.first_name = fields.first_name;
    self.last_name = fields.last_name;
    self.email = fields.email;
    self.phone = fields.phone;
    self.address = fields.address;
    self.active = fields.active;
    self.preferences = fields.preferences;
    self.updated_at = now.max(self.updated_at + Duration::microseconds(1));
  }

  /// The caller-controlled part of this record.
  pub fn fields(&self) -> UserFields {
    UserFields {
      first_name:  self.first_name.clone(),
      last_name:   self.last_name.clone(),
      email:       self.email.clone(),
      phone:       self.phone.clone(),
      address:     self.address.clone(),
      active:      self.active,
      preferences: self.preferences,
    }
  }
}
