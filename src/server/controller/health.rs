use axum::{response::IntoResponse, Json};

use crate::model::api::StatusDto;

pub static HEALTH_TAG: &str = "health";

/// Liveness probe.
#[utoipa::path(
    get,
    path = "/api/health",
    tag = HEALTH_TAG,
    responses(
        (status = 200, description = "Server is running", body = StatusDto)
    ),
)]
pub async fn health() -> impl IntoResponse {
    Json(StatusDto::ok())
}
