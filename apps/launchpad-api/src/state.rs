//! Application state management.
//!
//! The state is constructed once by the bootstrap and handed to the request
//! handlers; nothing lives in process-wide singletons.

use mongodb::Client;

use crate::config::Config;

/// Shared application state.
///
/// Cloned per handler (cheap: the client is an `Arc` around its pool).
/// `mongo` is `None` when no usable `MONGO_URI` was configured; consumers
/// treat that as "database unavailable", never as an error.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration loaded from environment variables
    pub config: Config,
    /// MongoDB client handle, if one could be constructed
    pub mongo: Option<Client>,
}
