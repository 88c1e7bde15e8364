//! The one-time startup sequence.
//!
//! Two independent async actions happen here: the MongoDB reachability
//! probe and the HTTP listener. Neither waits on the other; the probe's
//! outcome is a log line, the listener's failure is fatal.

use std::time::Duration;

use axum_helpers::server::{create_production_app, create_router, health_router};
use core_config::tracing::{init_tracing, install_color_eyre};
use mongodb::Client;
use tracing::{error, info};

use crate::api;
use crate::config::Config;
use crate::openapi::ApiDoc;
use crate::state::AppState;

/// How long shutdown cleanup may take before it is abandoned.
const SHUTDOWN_TIMEOUT: Duration = Duration::from_secs(30);

/// Run the service: load config, wire the router, start listening.
///
/// Only listener problems (occupied port, bad address) make this return an
/// error; database trouble is logged and swallowed.
pub async fn run() -> eyre::Result<()> {
    // color-eyre first, so even config errors get readable reports
    install_color_eyre();

    // Configuration is read exactly once, before anything consumes it
    let config = Config::from_env()?;
    init_tracing(&config.environment);

    let mongo = init_mongo(&config).await;

    let state = AppState { config, mongo };

    let router = create_router::<ApiDoc>(api::routes(&state)).await?;
    let app = router.merge(health_router(state.config.app));

    let cleanup_state = state.clone();
    create_production_app(app, &state.config.server, SHUTDOWN_TIMEOUT, async move {
        // The driver closes its pool when the last handle drops
        drop(cleanup_state.mongo);
        info!("MongoDB connection handle released");
    })
    .await?;

    info!("{} shutdown complete", state.config.app.name);
    Ok(())
}

/// Build the MongoDB handle and fire off the reachability probe.
///
/// Fire-and-forget by contract: every failure path logs a connection error
/// and leaves the service running without a database. Nothing is retried.
pub async fn init_mongo(config: &Config) -> Option<Client> {
    let Some(mongo_config) = &config.mongodb else {
        error!("MongoDB connection error: MONGO_URI is not set");
        return None;
    };

    match database::mongodb::client_from_config(mongo_config).await {
        Ok(client) => {
            let probe = client.clone();
            tokio::spawn(async move {
                match database::mongodb::ping(&probe).await {
                    Ok(()) => info!("MongoDB connected"),
                    Err(e) => error!("MongoDB connection error: {e}"),
                }
            });
            Some(client)
        }
        Err(e) => {
            error!("MongoDB connection error: {e}");
            None
        }
    }
}
