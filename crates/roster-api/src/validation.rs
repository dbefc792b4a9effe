//! Field validation for user payloads.
//!
//! The rules live on the request bodies as [`validator`] derives. This
//! module turns a failed run into the `validation_errors` map: one reason
//! per field, keyed by JSON field name, every failing field at once.

use std::collections::BTreeMap;

use validator::{Validate, ValidationError, ValidationErrors};

use crate::error::ApiError;

/// Run the derived rules on `body`.
pub fn check<T: Validate>(body: &T) -> Result<(), ApiError> {
  body
    .validate()
    .map_err(|errors| ApiError::ValidationFailed(reasons(&errors)))
}

fn reasons(errors: &ValidationErrors) -> BTreeMap<String, String> {
  errors
    .field_errors()
    .into_iter()
    .filter_map(|(field, failures)| {
      // An empty value fails every rule on the field; report it as missing.
      let failure = failures
        .iter()
        .find(|f| f.code == "required")
        .or_else(|| failures.first())?;
      Some((field.to_string(), reason(&field, failure)))
    })
    .collect()
}

fn reason(field: &str, failure: &ValidationError) -> String {
  match failure.code.as_ref() {
    "required" => format!("{field} is required"),
    "email" => format!("{field} must be a valid email address"),
    "length" => match failure.params.get("min") {
      Some(min) => format!("{field} must be at least {min} characters long"),
      None => format!("{field} has an invalid length"),
    },
    _ => format!("{field} is invalid"),
  }
}
