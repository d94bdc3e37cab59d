//! Observability bootstrap for authorization services.
//!
//! Libraries in this workspace only emit `tracing` events; binaries call
//! [`init_tracing`] once at startup to decide where those events go.

#![warn(missing_docs, clippy::pedantic)]

mod tracing_support;

pub use tracing_support::{TelemetryError, TelemetryResult, env_filter, init_tracing};
