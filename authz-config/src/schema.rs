//! Strongly typed configuration schema.

use std::collections::BTreeSet;

use authz_primitives::ResourceKind;
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult};

const DEFAULT_FILTER: &str = "info";

/// Top-level configuration for an authorization deployment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AuthzConfig {
    /// Resource kinds whose built-in rule sets are registered at startup.
    policies: Vec<ResourceKind>,
    /// Logging configuration.
    telemetry: TelemetryConfig,
}

impl Default for AuthzConfig {
    fn default() -> Self {
        Self {
            policies: vec![ResourceKind::CompanyPerson, ResourceKind::Agency],
            telemetry: TelemetryConfig::default(),
        }
    }
}

impl AuthzConfig {
    /// Replaces the list of policies to register.
    #[must_use]
    pub fn with_policies<I>(mut self, policies: I) -> Self
    where
        I: IntoIterator<Item = ResourceKind>,
    {
        self.policies = policies.into_iter().collect();
        self
    }

    /// Replaces the telemetry section.
    #[must_use]
    pub fn with_telemetry(mut self, telemetry: TelemetryConfig) -> Self {
        self.telemetry = telemetry;
        self
    }

    /// Returns the resource kinds whose rule sets should be registered.
    #[must_use]
    pub fn policies(&self) -> &[ResourceKind] {
        &self.policies
    }

    /// Returns the telemetry section.
    #[must_use]
    pub fn telemetry(&self) -> &TelemetryConfig {
        &self.telemetry
    }

    pub(crate) fn telemetry_mut(&mut self) -> &mut TelemetryConfig {
        &mut self.telemetry
    }

    /// Checks cross-field consistency.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] when a policy is listed twice or the
    /// log filter is blank.
    pub fn validate(&self) -> ConfigResult<()> {
        let mut seen = BTreeSet::new();
        for kind in &self.policies {
            if !seen.insert(*kind) {
                return Err(ConfigError::invalid(format!(
                    "policy `{kind}` is listed more than once"
                )));
            }
        }
        if self.telemetry.filter.trim().is_empty() {
            return Err(ConfigError::invalid("telemetry filter cannot be empty"));
        }
        Ok(())
    }
}

/// Logging configuration consumed by the telemetry bootstrap.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TelemetryConfig {
    filter: String,
    json: bool,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            filter: DEFAULT_FILTER.to_owned(),
            json: false,
        }
    }
}

impl TelemetryConfig {
    /// Creates a telemetry section with the given `EnvFilter` directive.
    #[must_use]
    pub fn new(filter: impl Into<String>) -> Self {
        Self {
            filter: filter.into(),
            json: false,
        }
    }

    /// Switches output to newline-delimited JSON.
    #[must_use]
    pub fn with_json(mut self, json: bool) -> Self {
        self.json = json;
        self
    }

    /// Returns the filter directive.
    #[must_use]
    pub fn filter(&self) -> &str {
        &self.filter
    }

    /// Returns `true` when JSON output is requested.
    #[must_use]
    pub fn json(&self) -> bool {
        self.json
    }

    pub(crate) fn set_filter(&mut self, filter: String) {
        self.filter = filter;
    }
}
