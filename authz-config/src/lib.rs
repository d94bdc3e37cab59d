//! Configuration management for the authorization engine.
//!
//! Configuration is plain JSON. Every field has a default, so an empty object
//! (or no file at all) yields a working setup with the built-in policies.

#![warn(missing_docs, clippy::pedantic)]

mod error;
mod loader;
mod schema;

pub use error::{ConfigError, ConfigResult};
pub use loader::LOG_ENV_VAR;
pub use schema::{AuthzConfig, TelemetryConfig};
