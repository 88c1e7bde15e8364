//! Readiness endpoint.

use axum::{Json, Router, extract::State, routing::get};
use serde::Serialize;
use utoipa::ToSchema;

use crate::state::AppState;

#[derive(Serialize, ToSchema)]
pub struct ReadyResponse {
    status: String,
    mongodb: bool,
}

/// Create the readiness router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/ready", get(readiness_check))
        .with_state(state)
}

/// Readiness check - reports whether MongoDB is reachable right now.
///
/// Reporting only: a dead database makes `mongodb` false but never takes
/// this endpoint, or the service, down.
#[utoipa::path(
    get,
    path = "/ready",
    tag = "status",
    responses((status = 200, description = "Readiness report", body = ReadyResponse))
)]
pub async fn readiness_check(State(state): State<AppState>) -> Json<ReadyResponse> {
    let mongodb_healthy = match &state.mongo {
        Some(client) => database::mongodb::check_health(client).await,
        None => false,
    };

    Json(ReadyResponse {
        status: if mongodb_healthy { "ready" } else { "unhealthy" }.to_string(),
        mongodb: mongodb_healthy,
    })
}
