//! Configuration loader implementations.

use std::env::{self, VarError};
use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{ConfigError, ConfigResult};
use crate::schema::AuthzConfig;

/// Environment variable that overrides the configured log filter.
pub const LOG_ENV_VAR: &str = "AUTHZ_LOG";

impl AuthzConfig {
    /// Parses and validates a JSON document.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON or unknown fields and
    /// [`ConfigError::Invalid`] when validation fails.
    pub fn from_json_str(document: &str) -> ConfigResult<Self> {
        let config: Self = serde_json::from_str(document)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads a JSON file, applies the `AUTHZ_LOG` override, and validates the
    /// result.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] when the file cannot be read,
    /// [`ConfigError::Invalid`] when `AUTHZ_LOG` is not valid UTF-8, otherwise
    /// the same errors as [`AuthzConfig::from_json_str`].
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let document = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "loaded authorization config");
        let config = Self::from_json_str(&document)?;
        config.with_log_override(log_override(env::var(LOG_ENV_VAR))?)
    }

    /// Returns the defaults with the `AUTHZ_LOG` override applied.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] if the override is blank or not valid
    /// UTF-8.
    pub fn from_env() -> ConfigResult<Self> {
        Self::default().with_log_override(log_override(env::var(LOG_ENV_VAR))?)
    }

    /// Replaces the log filter when `filter` is present, then revalidates.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] if the resulting configuration fails
    /// validation.
    pub fn with_log_override(mut self, filter: Option<String>) -> ConfigResult<Self> {
        if let Some(filter) = filter {
            self.telemetry_mut().set_filter(filter);
        }
        self.validate()?;
        Ok(self)
    }
}

fn log_override(value: Result<String, VarError>) -> ConfigResult<Option<String>> {
    match value {
        Ok(filter) => Ok(Some(filter)),
        Err(VarError::NotPresent) => Ok(None),
        Err(VarError::NotUnicode(raw)) => Err(ConfigError::invalid(format!(
            "{LOG_ENV_VAR} is not valid UTF-8: {}",
            raw.to_string_lossy()
        ))),
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use authz_primitives::ResourceKind;

    use super::*;
    use crate::schema::TelemetryConfig;

    #[test]
    fn empty_document_yields_defaults() {
        let config = AuthzConfig::from_json_str("{}").unwrap();
        assert_eq!(config, AuthzConfig::default());
        assert_eq!(
            config.policies(),
            [ResourceKind::CompanyPerson, ResourceKind::Agency]
        );
        assert_eq!(config.telemetry().filter(), "info");
    }

    #[test]
    fn parses_policies_and_telemetry() {
        let config = AuthzConfig::from_json_str(
            r#"{
                "policies": ["company_person", "job"],
                "telemetry": { "filter": "authz_policy=debug", "json": true }
            }"#,
        )
        .unwrap();

        assert_eq!(
            config.policies(),
            [ResourceKind::CompanyPerson, ResourceKind::Job]
        );
        assert_eq!(config.telemetry().filter(), "authz_policy=debug");
        assert!(config.telemetry().json());
    }

    #[test]
    fn unknown_fields_and_kinds_are_parse_errors() {
        let err = AuthzConfig::from_json_str(r#"{"polices": []}"#).expect_err("typo");
        assert!(matches!(err, ConfigError::Parse { .. }));

        let err = AuthzConfig::from_json_str(r#"{"policies": ["invoice"]}"#).expect_err("kind");
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn duplicate_policies_are_rejected() {
        let err = AuthzConfig::from_json_str(r#"{"policies": ["agency", "agency"]}"#)
            .expect_err("duplicate");
        assert!(matches!(err, ConfigError::Invalid { .. }));
    }

    #[test]
    fn log_override_replaces_filter() {
        let config = AuthzConfig::default()
            .with_log_override(Some("warn".into()))
            .unwrap();
        assert_eq!(config.telemetry().filter(), "warn");

        let err = AuthzConfig::default()
            .with_log_override(Some("  ".into()))
            .expect_err("blank");
        assert!(matches!(err, ConfigError::Invalid { .. }));

        let untouched = AuthzConfig::default().with_log_override(None).unwrap();
        assert_eq!(untouched, AuthzConfig::default());
    }

    #[test]
    fn non_unicode_log_variable_is_invalid() {
        use std::ffi::OsString;

        assert_eq!(log_override(Err(VarError::NotPresent)).unwrap(), None);
        assert_eq!(
            log_override(Ok("debug".into())).unwrap().as_deref(),
            Some("debug")
        );

        let err = log_override(Err(VarError::NotUnicode(OsString::from("bad"))))
            .expect_err("not utf-8");
        assert!(matches!(err, ConfigError::Invalid { reason } if reason.contains(LOG_ENV_VAR)));
    }

    #[test]
    fn telemetry_section_round_trips_through_builders() {
        let config = AuthzConfig::default()
            .with_telemetry(TelemetryConfig::new("authz_policy=trace").with_json(true));
        assert_eq!(config.telemetry().filter(), "authz_policy=trace");
        assert!(config.telemetry().json());

        let parsed = AuthzConfig::from_json_str(
            r#"{"telemetry": {"filter": "authz_policy=trace", "json": true}}"#,
        )
        .unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn load_reports_missing_file() {
        let err = AuthzConfig::load("/nonexistent/authz.json").expect_err("missing");
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn load_reads_file_from_disk() {
        let path = std::env::temp_dir().join(format!("authz-config-{}.json", std::process::id()));
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(br#"{"policies": ["agency"]}"#).unwrap();
        drop(file);

        let config = AuthzConfig::load(&path).unwrap();
        fs::remove_file(&path).unwrap();
        assert_eq!(config.policies(), [ResourceKind::Agency]);
    }
}
