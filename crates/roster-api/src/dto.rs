//! Wire representations of users and API envelopes.
//!
//! These carry the serde and OpenAPI derives so that `roster-core` stays
//! free of transport concerns.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use roster_core::{Preferences, User, UserFields};
use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Notification preferences. Omitted or `null` flags default to `false`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct PreferencesDto {
  /// Notify by email.
  #[serde(deserialize_with = "null_as_default")]
  pub email: bool,
  /// Notify by SMS.
  #[serde(deserialize_with = "null_as_default")]
  pub sms:   bool,
}

/// A user as returned by every endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct UserDto {
  pub id:          String,
  pub first_name:  String,
  pub last_name:   String,
  pub email:       String,
  pub phone:       String,
  pub address:     String,
  pub active:      bool,
  pub preferences: PreferencesDto,
  pub created_at:  DateTime<Utc>,
  pub updated_at:  DateTime<Utc>,
}

/// Body of `POST /users`.
///
/// Missing and `null` keys deserialise to empty values so that validation
/// can report every absent field at once.
#[derive(Debug, Clone, Default, Deserialize, ToSchema, Validate)]
#[serde(default)]
pub struct CreateUserBody {
  #[serde(deserialize_with = "null_as_default")]
  #[validate(length(min = 1, code = "required"))]
  pub first_name:  String,
  #[serde(deserialize_with = "null_as_default")]
  #[validate(length(min = 1, code = "required"))]
  pub last_name:   String,
  #[serde(deserialize_with = "null_as_default")]
  #[validate(length(min = 1, code = "required"), email)]
  pub email:       String,
  #[serde(deserialize_with = "null_as_default")]
  #[validate(length(min = 1, code = "required"))]
  pub phone:       String,
  #[serde(deserialize_with = "null_as_default")]
  #[validate(length(min = 1, code = "required"))]
  pub address:     String,
  #[serde(deserialize_with = "null_as_default")]
  pub preferences: PreferencesDto,
}

/// Body of `PUT /users/{id}`. Replaces the whole record.
#[derive(Debug, Clone, Default, Deserialize, ToSchema, Validate)]
#[serde(default)]
pub struct UpdateUserBody {
  #[serde(deserialize_with = "null_as_default")]
  #[validate(length(min = 1, code = "required"))]
  pub first_name:  String,
  #[serde(deserialize_with = "null_as_default")]
  #[validate(length(min = 1, code = "required"))]
  pub last_name:   String,
  #[serde(deserialize_with = "null_as_default")]
  #[validate(length(min = 1, code = "required"), email)]
  pub email:       String,
  #[serde(deserialize_with = "null_as_default")]
  #[validate(length(min = 1, code = "required"))]
  pub phone:       String,
  #[serde(deserialize_with = "null_as_default")]
  #[validate(length(min = 1, code = "required"))]
  pub address:     String,
  #[serde(deserialize_with = "null_as_default")]
  pub active:      bool,
  #[serde(deserialize_with = "null_as_default")]
  pub preferences: PreferencesDto,
}

/// An explicit `null` reads the same as an absent key.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
  D: Deserializer<'de>,
  T: Deserialize<'de> + Default,
{
  Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Failure body carrying a single message.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorBody {
  pub error: String,
}

/// Failure body listing every field that failed validation.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ValidationErrorBody {
  /// Field name → reason.
  pub validation_errors: BTreeMap<String, String>,
}

/// Liveness payload of `GET /health`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HealthStatus {
  #[schema(example = "UP")]
  pub status: String,
}

// ─── Conversions ─────────────────────────────────────────────────────────────

impl From<Preferences> for PreferencesDto {
  fn from(p: Preferences) -> Self {
    Self {
      email: p.email,
      sms:   p.sms,
    }
  }
}

impl From<PreferencesDto> for Preferences {
  fn from(p: PreferencesDto) -> Self {
    Self {
      email: p.email,
      sms:   p.sms,
    }
  }
}

impl From<User> for UserDto {
  fn from(u: User) -> Self {
    Self {
      id:          u.id,
      first_name:  u.first_name,
      last_name:   u.last_name,
      email:       u.email,
      phone:       u.phone,
      address:     u.address,
      active:      u.active,
      preferences: u.preferences.into(),
      created_at:  u.created_at,
      updated_at:  u.updated_at,
    }
  }
}

/// New users always start out active.
impl From<CreateUserBody> for UserFields {
  fn from(b: CreateUserBody) -> Self {
    Self {
      first_name:  b.first_name,
      last_name:   b.last_name,
      email:       b.email,
      phone:       b.phone,
      address:     b.address,
      active:      true,
      preferences: b.preferences.into(),
    }
  }
}

impl From<UpdateUserBody> for UserFields {
  fn from(b: UpdateUserBody) -> Self {
    Self {
      first_name:  b.first_name,
      last_name:   b.last_name,
      email:       b.email,
      phone:       b.phone,
      address:     b.address,
      active:      b.active,
      preferences: b.preferences.into(),
    }
  }
}
