//! HTTP API routes.

pub mod health;

use axum::{Router, routing::get};

use crate::state::AppState;

/// Create all service routes.
pub fn routes(state: &AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .merge(health::router(state.clone()))
}

/// Root status endpoint.
///
/// Deliberately independent of the database: this answers 200 with the
/// fixed banner whether or not MongoDB ever became reachable.
#[utoipa::path(
    get,
    path = "/",
    tag = "status",
    responses(
        (status = 200, description = "Service banner", body = String, content_type = "text/plain")
    )
)]
pub async fn root() -> &'static str {
    "Server is running 🚀"
}
