use super::shutdown::{ShutdownCoordinator, coordinated_shutdown};
use crate::errors::handlers::not_found;
use crate::http::cors::cors_layer_from_env;
use crate::http::security::security_headers;
use axum::{Router, middleware};
use core_config::server::ServerConfig;
use std::io;
use std::time::Duration;
use tower_http::compression::CompressionLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::{Level, info, warn};
use utoipa::OpenApi;

/// Assemble the service router with documentation and the common middleware stack.
///
/// The given routes are merged at the root path, then wrapped with:
/// - OpenAPI documentation UIs (Swagger UI, ReDoc, RapiDoc, Scalar)
/// - a JSON 404 fallback
/// - request/response tracing
/// - security headers
/// - CORS (see [`cors_layer_from_env`]: permissive unless
///   `CORS_ALLOWED_ORIGIN` narrows it)
/// - response compression
///
/// # Type Parameters
/// * `T` - A type implementing `utoipa::OpenApi` for API documentation
///
/// # Errors
/// Returns an error when `CORS_ALLOWED_ORIGIN` is set but unusable.
pub async fn create_router<T>(routes: Router) -> io::Result<Router>
where
    T: OpenApi + 'static,
{
    use utoipa_rapidoc::RapiDoc;
    use utoipa_redoc::{Redoc, Servable as RedocServable};
    use utoipa_scalar::{Scalar, Servable as ScalarServable};
    use utoipa_swagger_ui::SwaggerUi;

    let cors_layer = cors_layer_from_env()?;

    let router = Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", T::openapi()))
        .merge(Redoc::with_url("/redoc", T::openapi()))
        .merge(RapiDoc::new("/api-docs/openapi.json").path("/rapidoc"))
        .merge(Scalar::with_url("/scalar", T::openapi()))
        .merge(routes)
        .fallback(not_found)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(middleware::from_fn(security_headers))
        .layer(cors_layer)
        .layer(CompressionLayer::new());

    Ok(router)
}

/// Bind, serve, and clean up: the production server loop.
///
/// The listener is bound before anything else, so an occupied port surfaces
/// as an immediate error to the caller instead of a half-started service.
/// After a shutdown signal (SIGINT/SIGTERM) in-flight requests drain and
/// `cleanup` runs under `shutdown_timeout`.
///
/// # Errors
/// Returns an error if the TCP listener cannot bind the configured address
/// or the server fails while running.
///
/// # Example
/// ```ignore
/// use std::time::Duration;
/// use axum_helpers::server::create_production_app;
///
/// let cleanup = async move {
///     drop(client); // close connections
/// };
///
/// create_production_app(router, &config, Duration::from_secs(30), cleanup).await?;
/// ```
pub async fn create_production_app<F>(
    router: Router,
    server_config: &ServerConfig,
    shutdown_timeout: Duration,
    cleanup: F,
) -> io::Result<()>
where
    F: std::future::Future<Output = ()> + Send + 'static,
{
    let listener = tokio::net::TcpListener::bind(server_config.address()).await?;
    info!("Server listening on {}", listener.local_addr()?);

    let (coordinator, mut shutdown_rx) = ShutdownCoordinator::new();

    // Runs the caller's cleanup once the shutdown broadcast fires.
    let cleanup_task = tokio::spawn(async move {
        let _ = shutdown_rx.recv().await;

        info!("Running shutdown cleanup (timeout: {:?})", shutdown_timeout);
        match tokio::time::timeout(shutdown_timeout, cleanup).await {
            Ok(()) => info!("Cleanup completed"),
            Err(_) => warn!("Cleanup exceeded {:?}, forcing shutdown", shutdown_timeout),
        }
    });

    let serve_result = axum::serve(listener, router.into_make_service())
        .with_graceful_shutdown(coordinated_shutdown(coordinator))
        .await
        .inspect_err(|e| {
            tracing::error!("Server encountered an error: {:?}", e);
        });

    cleanup_task.await.ok();

    serve_result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_production_app_fails_when_port_is_taken() {
        let taken = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = taken.local_addr().unwrap().port();
        let config = ServerConfig::new("127.0.0.1".to_string(), port);

        let result =
            create_production_app(Router::new(), &config, Duration::from_secs(1), async {}).await;

        assert!(result.is_err());
    }
}
