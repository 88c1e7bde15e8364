#[cfg(feature = "config")]
use core_config::{ConfigError, FromEnv, env_required};

/// MongoDB connector configuration
///
/// Construct manually with [`MongoConfig::new`] or, with the `config`
/// feature, load from the environment (`MONGO_URI`, required).
#[derive(Clone, Debug)]
pub struct MongoConfig {
    /// Connection string
    /// Format: mongodb://[username:password@]host[:port][/database][?options]
    pub uri: String,

    /// Application name reported to the server (shows up in server logs)
    pub app_name: Option<String>,

    /// Maximum number of connections in the driver pool
    pub max_pool_size: u32,

    /// Minimum number of connections in the driver pool
    pub min_pool_size: u32,

    /// Connection timeout in seconds
    pub connect_timeout_secs: u64,

    /// Server selection timeout in seconds
    pub server_selection_timeout_secs: u64,
}

impl MongoConfig {
    /// Create a config for the given URI with default pool settings
    pub fn new(uri: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            app_name: None,
            max_pool_size: 100,
            min_pool_size: 5,
            connect_timeout_secs: 10,
            server_selection_timeout_secs: 30,
        }
    }

    /// Set the application name reported to the server
    pub fn with_app_name(mut self, app_name: impl Into<String>) -> Self {
        self.app_name = Some(app_name.into());
        self
    }
}

#[cfg(feature = "config")]
impl FromEnv for MongoConfig {
    /// Requires `MONGO_URI`; everything else keeps its default.
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self::new(env_required("MONGO_URI")?))
    }
}
