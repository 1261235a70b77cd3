//! Pipeline configuration.
//!
//! Loaded from an optional `learnflow.json` in the working directory. A
//! missing file is not an error; every field has a default that points at a
//! locally running analysis service.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{PipelineError, Result};

/// Name of the configuration file searched for in the working directory.
pub const CONFIG_FILE_NAME: &str = "learnflow.json";

fn default_service_url() -> String {
    "http://127.0.0.1:8001/api".to_string()
}

fn default_concept() -> String {
    "algorithm".to_string()
}

/// Configuration for the pipeline orchestrator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PipelineConfig {
    /// Base URL of the analysis service, including the `/api` prefix.
    #[serde(default = "default_service_url")]
    pub service_url: String,

    /// Optional per-call timeout in seconds. `None` disables the timeout.
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,

    /// Concept used for the video lookup when no problem was detected.
    #[serde(default = "default_concept")]
    pub default_concept: String,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            service_url: default_service_url(),
            request_timeout_secs: None,
            default_concept: default_concept(),
        }
    }
}

impl PipelineConfig {
    /// Loads configuration from `learnflow.json` in the current directory,
    /// falling back to defaults when the file does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read, parsed, or
    /// validated.
    pub fn load() -> Result<Self> {
        Self::load_from_dir(Path::new("."))
    }

    /// Loads configuration from `learnflow.json` in the given directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read, parsed, or
    /// validated.
    pub fn load_from_dir(dir: &Path) -> Result<Self> {
        let path = dir.join(CONFIG_FILE_NAME);
        if !path.exists() {
            debug!(path = %path.display(), "No config file found, using defaults");
            let config = Self::default();
            config.validate()?;
            return Ok(config);
        }
        Self::load_from_file(&path)
    }

    /// Loads configuration from a specific file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed, or validated.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| PipelineError::config_parse(path, e.to_string()))?;

        let config: Self = serde_json::from_str(&contents)
            .map_err(|e| PipelineError::config_parse(path, e.to_string()))?;

        config.validate()?;
        debug!(path = %path.display(), "Loaded configuration");
        Ok(config)
    }

    /// Validates the configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigValidationError` describing the first invalid field.
    pub fn validate(&self) -> Result<()> {
        if self.service_url.trim().is_empty() {
            return Err(PipelineError::config_validation(
                "serviceUrl must not be empty",
                "Set serviceUrl to the analysis service base URL, e.g. http://127.0.0.1:8001/api",
            ));
        }

        if self.request_timeout_secs == Some(0) {
            return Err(PipelineError::config_validation(
                "requestTimeoutSecs must be greater than zero",
                "Remove requestTimeoutSecs to disable the timeout, or set it to a positive value",
            ));
        }

        if self.default_concept.trim().is_empty() {
            return Err(PipelineError::config_validation(
                "defaultConcept must not be empty",
                "Set defaultConcept to a topic label, e.g. algorithm",
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = PipelineConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.service_url, "http://127.0.0.1:8001/api");
        assert_eq!(config.default_concept, "algorithm");
        assert!(config.request_timeout_secs.is_none());
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = std::env::temp_dir().join("learnflow-config-missing");
        std::fs::create_dir_all(&dir).unwrap();
        let config = PipelineConfig::load_from_dir(&dir).unwrap();
        assert_eq!(config, PipelineConfig::default());
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = std::env::temp_dir().join("learnflow-config-partial");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join(CONFIG_FILE_NAME);
        std::fs::write(&path, r#"{"requestTimeoutSecs": 30}"#).unwrap();

        let config = PipelineConfig::load_from_file(&path).unwrap();
        assert_eq!(config.request_timeout_secs, Some(30));
        assert_eq!(config.service_url, "http://127.0.0.1:8001/api");
    }

    #[test]
    fn test_invalid_json_is_a_parse_error() {
        let dir = std::env::temp_dir().join("learnflow-config-invalid");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join(CONFIG_FILE_NAME);
        std::fs::write(&path, "{not json").unwrap();

        let err = PipelineConfig::load_from_file(&path).unwrap_err();
        assert!(matches!(err, PipelineError::ConfigParseError { .. }));
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let config = PipelineConfig {
            request_timeout_secs: Some(0),
            ..PipelineConfig::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("requestTimeoutSecs"));
    }

    #[test]
    fn test_empty_service_url_rejected() {
        let config = PipelineConfig {
            service_url: "  ".to_string(),
            ..PipelineConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
