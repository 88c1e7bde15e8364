//! Database connectivity for the workspace.
//!
//! Currently a single connector: MongoDB. The module is feature-gated so
//! binaries that never touch a database can depend on this crate without
//! pulling in the driver.
//!
//! # Features
//!
//! - `mongodb` (default) - MongoDB support
//! - `config` - load connector settings from the environment via
//!   `core_config::FromEnv`
//!
//! # Example
//!
//! ```ignore
//! use database::mongodb::{MongoConfig, client_from_config, ping};
//!
//! let config = MongoConfig::new("mongodb://localhost:27017");
//! let client = client_from_config(&config).await?;
//! ping(&client).await?;
//! ```

#[cfg(feature = "mongodb")]
pub mod mongodb;
