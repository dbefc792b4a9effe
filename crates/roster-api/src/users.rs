//! Handlers for `/users` endpoints.
//!
//! | Method   | Path          | Notes |
//! |----------|---------------|-------|
//! | `GET`    | `/users`      | Every user, in insertion order |
//! | `POST`   | `/users`      | Body: [`CreateUserBody`]; returns 201 + stored user |
//! | `GET`    | `/users/{id}` | 404 if not found |
//! | `PUT`    | `/users/{id}` | Body: [`UpdateUserBody`]; full replace |
//! | `DELETE` | `/users/{id}` | 204 on success |

use std::sync::Arc;

use axum::{
  Json,
  extract::{Path, State, rejection::JsonRejection},
  http::StatusCode,
};
use roster_core::UserService;

use crate::{
  dto::{CreateUserBody, ErrorBody, UpdateUserBody, UserDto, ValidationErrorBody},
  error::ApiError,
  validation,
};

/// Shared handler state.
pub type Service = Arc<dyn UserService>;

// ─── List ─────────────────────────────────────────────────────────────────────

/// `GET /users`
#[utoipa::path(
  get,
  path = "/users",
  tag = "users",
  responses(
    (status = 200, description = "All users", body = [UserDto]),
    (status = 500, description = "Internal error", body = ErrorBody)
  )
)]
pub async fn list(State(service): State<Service>) -> Result<Json<Vec<UserDto>>, ApiError> {
  let users = service
    .list()
    .map_err(|e| ApiError::internal("Failed to retrieve users", e))?;
  Ok(Json(users.into_iter().map(UserDto::from).collect()))
}

// ─── Get one ──────────────────────────────────────────────────────────────────

/// `GET /users/{id}`
#[utoipa::path(
  get,
  path = "/users/{id}",
  tag = "users",
  params(("id" = String, Path, description = "User identifier")),
  responses(
    (status = 200, description = "The user", body = UserDto),
    (status = 404, description = "No user with this identifier", body = ErrorBody),
    (status = 500, description = "Internal error", body = ErrorBody)
  )
)]
pub async fn get_one(
  State(service): State<Service>,
  Path(id): Path<String>,
) -> Result<Json<UserDto>, ApiError> {
  let user = service
    .get(&id)
    .map_err(|e| ApiError::lookup("Failed to retrieve user", e))?;
  Ok(Json(user.into()))
}

// ─── Create ───────────────────────────────────────────────────────────────────

/// `POST /users`: returns 201 + the stored user, always `active`.
#[utoipa::path(
  post,
  path = "/users",
  tag = "users",
  request_body = CreateUserBody,
  responses(
    (status = 201, description = "User created", body = UserDto),
    (status = 400, description = "Malformed body or invalid fields", body = ValidationErrorBody),
    (status = 500, description = "Internal error", body = ErrorBody)
  )
)]
pub async fn create(
  State(service): State<Service>,
  body: Result<Json<CreateUserBody>, JsonRejection>,
) -> Result<(StatusCode, Json<UserDto>), ApiError> {
  let Json(body) = body?;
  validation::check(&body)?;

  let user = service
    .create(body.into())
    .map_err(|e| ApiError::internal("Failed to create user", e))?;
  Ok((StatusCode::CREATED, Json(user.into())))
}

// ─── Update ───────────────────────────────────────────────────────────────────

/// `PUT /users/{id}`: replaces every mutable field.
#[utoipa::path(
  put,
  path = "/users/{id}",
  tag = "users",
  params(("id" = String, Path, description = "User identifier")),
  request_body = UpdateUserBody,
  responses(
    (status = 200, description = "User updated", body = UserDto),
    (status = 400, description = "Malformed body or invalid fields", body = ValidationErrorBody),
    (status = 404, description = "No user with this identifier", body = ErrorBody),
    (status = 500, description = "Internal error", body = ErrorBody)
  )
)]
pub async fn update(
  State(service): State<Service>,
  Path(id): Path<String>,
  body: Result<Json<UpdateUserBody>, JsonRejection>,
) -> Result<Json<UserDto>, ApiError> {
  let Json(body) = body?;
  validation::check(&body)?;

  let user = service
    .update(&id, body.into())
    .map_err(|e| ApiError::lookup("Failed to update user", e))?;
  Ok(Json(user.into()))
}

// ─── Delete ───────────────────────────────────────────────────────────────────

/// `DELETE /users/{id}`
#[utoipa::path(
  delete,
  path = "/users/{id}",
  tag = "users",
  params(("id" = String, Path, description = "User identifier")),
  responses(
    (status = 204, description = "User deleted"),
    (status = 404, description = "No user with this identifier", body = ErrorBody),
    (status = 500, description = "Internal error", body = ErrorBody)
  )
)]
pub async fn delete(
  State(service): State<Service>,
  Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
  service
    .delete(&id)
    .map_err(|e| ApiError::lookup("Failed to delete user", e))?;
  Ok(StatusCode::NO_CONTENT)
}
