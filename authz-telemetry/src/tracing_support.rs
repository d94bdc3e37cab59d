//! Structured tracing helpers.

use authz_config::TelemetryConfig;
use thiserror::Error;
use tracing_subscriber::EnvFilter;

/// Errors raised while installing the global subscriber.
#[derive(Debug, Error)]
pub enum TelemetryError {
    /// The configured filter is not a valid `EnvFilter` directive.
    #[error("invalid log filter `{filter}`: {reason}")]
    InvalidFilter {
        /// Offending directive string.
        filter: String,
        /// Parser explanation.
        reason: String,
    },
    /// A global subscriber was already installed.
    #[error("tracing subscriber already initialized: {reason}")]
    AlreadyInitialized {
        /// Explanation from `tracing-subscriber`.
        reason: String,
    },
}

/// Result alias for telemetry setup.
pub type TelemetryResult<T> = Result<T, TelemetryError>;

/// Parses the configured filter directive.
///
/// # Errors
///
/// Returns [`TelemetryError::InvalidFilter`] when the directive does not parse.
pub fn env_filter(config: &TelemetryConfig) -> TelemetryResult<EnvFilter> {
    EnvFilter::try_new(config.filter()).map_err(|err| TelemetryError::InvalidFilter {
        filter: config.filter().to_owned(),
        reason: err.to_string(),
    })
}

/// Installs a global `fmt` subscriber honoring `config`.
///
/// # Errors
///
/// Returns [`TelemetryError::InvalidFilter`] for a bad directive and
/// [`TelemetryError::AlreadyInitialized`] if another subscriber is installed.
pub fn init_tracing(config: &TelemetryConfig) -> TelemetryResult<()> {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter(config)?)
        .with_target(false);
    let installed = if config.json() {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
    installed.map_err(|err| TelemetryError::AlreadyInitialized {
        reason: err.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_filters_parse() {
        let config = TelemetryConfig::new("info,authz_policy=debug");
        assert!(env_filter(&config).is_ok());
    }

    #[test]
    fn invalid_filters_are_rejected() {
        let config = TelemetryConfig::new("authz_policy=loud");
        let err = env_filter(&config).expect_err("bad level");
        assert!(matches!(err, TelemetryError::InvalidFilter { filter, .. } if filter == "authz_policy=loud"));
    }

    #[test]
    fn second_initialization_fails() {
        let config = TelemetryConfig::new("warn");
        init_tracing(&config).expect("first install");
        let err = init_tracing(&config).expect_err("already installed");
        assert!(matches!(err, TelemetryError::AlreadyInitialized { .. }));
    }
}
