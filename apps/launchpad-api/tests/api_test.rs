//! Handler tests for the status surface.
//!
//! These drive the routers directly with `tower::ServiceExt::oneshot`, so
//! they need neither a bound port nor a running MongoDB: the contract is
//! that the HTTP surface answers regardless of database state.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use tower::ServiceExt; // For oneshot()

use launchpad_api::api;
use launchpad_api::config::{Config, Environment};
use launchpad_api::openapi::ApiDoc;
use launchpad_api::state::AppState;

fn state_without_database() -> AppState {
    AppState {
        config: Config {
            app: core_config::app_info!(),
            server: core_config::server::ServerConfig::default(),
            environment: Environment::Development,
            mongodb: None,
        },
        mongo: None,
    }
}

#[tokio::test]
async fn test_root_returns_banner_without_database() {
    let app = api::routes(&state_without_database());

    let response = app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(&bytes[..], "Server is running 🚀".as_bytes());
}

#[tokio::test]
async fn test_ready_reports_missing_database() {
    let app = api::routes(&state_without_database());

    let response = app
        .oneshot(Request::builder().uri("/ready").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(json["status"], "unhealthy");
    assert_eq!(json["mongodb"], false);
}

#[tokio::test]
async fn test_full_router_serves_root_and_404s_unknown_paths() {
    // Assembles the full middleware stack the way the bootstrap does.
    let state = state_without_database();
    let app = axum_helpers::server::create_router::<ApiDoc>(api::routes(&state))
        .await
        .unwrap();

    let ok = app
        .clone()
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(ok.status(), StatusCode::OK);

    let missing = app
        .oneshot(
            Request::builder()
                .uri("/no-such-route")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(missing.status(), StatusCode::NOT_FOUND);

    let bytes = missing.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(json["error"], "NotFound");
}

#[tokio::test]
async fn test_health_answers_without_database() {
    let state = state_without_database();
    let app = axum_helpers::server::health_router(state.config.app);

    let response = app
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["name"], "launchpad_api");
}
