use core_config::{AppInfo, FromEnv, app_info, server::ServerConfig};
use database::mongodb::MongoConfig;

// Re-export Environment for use in other modules
pub use core_config::Environment;

/// Application configuration, composed from the shared config components.
///
/// The MongoDB section is optional on purpose: a missing `MONGO_URI` must
/// not stop the HTTP listener, so its absence is recorded here and reported
/// by the bootstrap instead of failing the load.
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub server: ServerConfig,
    pub environment: Environment,
    pub mongodb: Option<MongoConfig>,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        let environment = Environment::from_env();
        let server = ServerConfig::from_env()?;
        let app = app_info!();

        let mongodb = MongoConfig::from_env()
            .ok()
            .map(|config| config.with_app_name(app.name));

        Ok(Self {
            app,
            server,
            environment,
            mongodb,
        })
    }
}
