//! API error type and [`axum::response::IntoResponse`] implementation.

use std::{any::Any, collections::BTreeMap};

use axum::{
  Json,
  extract::rejection::JsonRejection,
  http::StatusCode,
  response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::dto::{ErrorBody, ValidationErrorBody};

/// An error returned by an API handler.
///
/// Only `NotFound`, `ValidationFailed` and `MalformedRequest` say anything
/// specific to the client. `Internal` responds with its generic message and
/// logs the underlying cause server-side.
#[derive(Debug, Error)]
pub enum ApiError {
  #[error("user {0} not found")]
  NotFound(String),

  #[error("validation failed for {} field(s)", .0.len())]
  ValidationFailed(BTreeMap<String, String>),

  #[error("malformed request: {0}")]
  MalformedRequest(String),

  #[error("{message}")]
  Internal {
    message: &'static str,
    #[source]
    source:  Option<roster_core::Error>,
  },
}

impl ApiError {
  /// Any failure that is not the client's fault.
  pub fn internal(message: &'static str, source: roster_core::Error) -> Self {
    Self::Internal {
      message,
      source: Some(source),
    }
  }

  /// Map a service error for an endpoint that addresses a single user:
  /// not-found stays not-found, everything else becomes `Internal`.
  pub fn lookup(message: &'static str, source: roster_core::Error) -> Self {
    match source {
      roster_core::Error::NotFound(id) => Self::NotFound(id),
      other => Self::internal(message, other),
    }
  }
}

impl From<JsonRejection> for ApiError {
  fn from(rejection: JsonRejection) -> Self { Self::MalformedRequest(rejection.body_text()) }
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    match self {
      ApiError::NotFound(id) => error_body(
        StatusCode::NOT_FOUND,
        format!("User with ID '{id}' not found"),
      ),
      ApiError::ValidationFailed(fields) => (
        StatusCode::BAD_REQUEST,
        Json(ValidationErrorBody {
          validation_errors: fields,
        }),
      )
        .into_response(),
      ApiError::MalformedRequest(reason) => error_body(
        StatusCode::BAD_REQUEST,
        format!("Invalid request format: {reason}"),
      ),
      ApiError::Internal { message, source } => {
        match &source {
          Some(e) => tracing::error!(error = %e, "{message}"),
          None => tracing::error!("{message}"),
        }
        error_body(StatusCode::INTERNAL_SERVER_ERROR, message.to_owned())
      }
    }
  }
}

fn error_body(status: StatusCode, error: String) -> Response {
  (status, Json(ErrorBody { error })).into_response()
}

/// Response for a handler that panicked. Installed as the router's
/// `CatchPanicLayer` handler.
pub fn panic_response(panic: Box<dyn Any + Send + 'static>) -> Response {
  let detail = if let Some(s) = panic.downcast_ref::<String>() {
    s.as_str()
  } else if let Some(s) = panic.downcast_ref::<&str>() {
    s
  } else {
    "non-string panic payload"
  };
  tracing::error!(panic = %detail, "handler panicked");

  ApiError::Internal {
    message: "Internal server error",
    source:  None,
  }
  .into_response()
}
