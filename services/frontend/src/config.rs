//! services/frontend/src/config.rs
//!
//! Defines the client's configuration structure and loading logic.
//!
//! All configuration is loaded from environment variables at startup. The `.env`
//! file is used for local development.

use reqwest::Url;
use std::str::FromStr;
use tracing::Level;

const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5001";

/// A custom error type for configuration loading failures.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for the environment variable {0}: {1}")]
    InvalidValue(String, String),
}

/// How the issue number is placed into the request path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PathEncoding {
    /// Percent-encoded as a single path segment.
    #[default]
    Percent,
    /// Interpolated into the path as typed, after surrounding whitespace
    /// is trimmed.
    Verbatim,
}

impl FromStr for PathEncoding {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "percent" => Ok(Self::Percent),
            "verbatim" => Ok(Self::Verbatim),
            other => Err(format!(
                "'{other}' is not a path encoding (expected 'percent' or 'verbatim')"
            )),
        }
    }
}

/// Holds all configuration loaded from the environment at startup.
#[derive(Clone, Debug)]
pub struct Config {
    pub base_url: Url,
    pub path_encoding: PathEncoding,
    pub log_level: Level,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// It will look for a `.env` file in the current directory for development,
    /// but this is skipped in test environments to ensure tests are hermetic.
    pub fn from_env() -> Result<Self, ConfigError> {
        if !cfg!(test) {
            dotenvy::dotenv().ok();
        }
        Self::from_vars(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup.
    pub fn from_vars<F>(var: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let base_url_str =
            var("ANALYSIS_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let base_url = Url::parse(&base_url_str).map_err(|e| {
            ConfigError::InvalidValue("ANALYSIS_BASE_URL".to_string(), e.to_string())
        })?;
        if base_url.cannot_be_a_base() {
            return Err(ConfigError::InvalidValue(
                "ANALYSIS_BASE_URL".to_string(),
                format!("'{base_url_str}' cannot be used as a base URL"),
            ));
        }

        let path_encoding = match var("ISSUE_PATH_ENCODING") {
            Some(value) => value.parse::<PathEncoding>().map_err(|reason| {
                ConfigError::InvalidValue("ISSUE_PATH_ENCODING".to_string(), reason)
            })?,
            None => PathEncoding::default(),
        };

        let log_level_str = var("RUST_LOG").unwrap_or_else(|| "INFO".to_string());
        let log_level = log_level_str.parse::<Level>().map_err(|_| {
            ConfigError::InvalidValue(
                "RUST_LOG".to_string(),
                format!("'{}' is not a valid log level", log_level_str),
            )
        })?;

        Ok(Self {
            base_url,
            path_encoding,
            log_level,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(pairs: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_vars(|name| vars.get(name).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = load(&[]).unwrap();
        assert_eq!(config.base_url.as_str(), "http://127.0.0.1:5001/");
        assert_eq!(config.path_encoding, PathEncoding::Percent);
        assert_eq!(config.log_level, Level::INFO);
    }

    #[test]
    fn test_overrides() {
        let config = load(&[
            ("ANALYSIS_BASE_URL", "https://issues.example.com/api"),
            ("ISSUE_PATH_ENCODING", "Verbatim"),
            ("RUST_LOG", "debug"),
        ])
        .unwrap();
        assert_eq!(config.base_url.host_str(), Some("issues.example.com"));
        assert_eq!(config.path_encoding, PathEncoding::Verbatim);
        assert_eq!(config.log_level, Level::DEBUG);
    }

    #[test]
    fn test_invalid_values() {
        let err = load(&[("ANALYSIS_BASE_URL", "not a url")]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue(ref var, _) if var == "ANALYSIS_BASE_URL"));

        let err = load(&[("ANALYSIS_BASE_URL", "mailto:someone@example.com")]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue(ref var, _) if var == "ANALYSIS_BASE_URL"));

        let err = load(&[("ISSUE_PATH_ENCODING", "base64")]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue(ref var, _) if var == "ISSUE_PATH_ENCODING"));

        let err = load(&[("RUST_LOG", "chatty")]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue(ref var, _) if var == "RUST_LOG"));
    }
}
