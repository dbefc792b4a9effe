//! OpenAPI document for the REST surface, served at `GET /openapi.json`.

use axum::Json;
use utoipa::OpenApi;

use crate::{
  dto::{
    CreateUserBody, ErrorBody, HealthStatus, PreferencesDto, UpdateUserBody, UserDto,
    ValidationErrorBody,
  },
  health, users,
};

#[derive(OpenApi)]
#[openapi(
  info(title = "Roster", description = "In-memory user directory"),
  paths(
    health::handler,
    users::list,
    users::get_one,
    users::create,
    users::update,
    users::delete
  ),
  components(schemas(
    UserDto,
    PreferencesDto,
    CreateUserBody,
    UpdateUserBody,
    ErrorBody,
    ValidationErrorBody,
    HealthStatus
  )),
  tags(
    (name = "users", description = "User CRUD"),
    (name = "system", description = "Liveness")
  )
)]
pub struct ApiDoc;

/// `GET /openapi.json`
pub async fn handler() -> Json<utoipa::openapi::OpenApi> { Json(ApiDoc::openapi()) }
