//! Launchpad API: a minimal MongoDB-backed service bootstrap.
//!
//! The binary in `main.rs` is a thin shell around [`bootstrap::run`]; the
//! crate doubles as a library so integration tests can drive the router
//! without a bound port or a running database.

pub mod api;
pub mod bootstrap;
pub mod config;
pub mod openapi;
pub mod state;
