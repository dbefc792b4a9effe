//! Handler for `GET /health`.

use axum::Json;

use crate::dto::HealthStatus;

/// `GET /health`: static liveness payload.
#[utoipa::path(
  get,
  path = "/health",
  tag = "system",
  responses((status = 200, description = "Service is up", body = HealthStatus))
)]
pub async fn handler() -> Json<HealthStatus> {
  Json(HealthStatus {
    status: "UP".to_owned(),
  })
}
