//! OpenAPI documentation configuration

use utoipa::OpenApi;

use crate::api;

/// OpenAPI documentation for the status surface
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Launchpad API",
        version = "0.1.0",
        description = "Minimal MongoDB-backed service bootstrap",
        license(name = "MIT")
    ),
    servers(
        (url = "http://localhost:5000", description = "Local development server")
    ),
    paths(api::root, api::health::readiness_check),
    components(schemas(api::health::ReadyResponse)),
    tags(
        (name = "status", description = "Service status endpoints")
    )
)]
pub struct ApiDoc;
