//! Client configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All optional; with nothing set the client runs fully offline on
//! fallback data.
//!
//! - `GOURMET_API_BASE` - Backend base URL (e.g., `https://api.example.com`).
//!   Empty or unset disables the backend. `GOURMET_BACKEND_URL` is accepted
//!   as a fallback name for managed deployments.
//! - `GOURMET_API_TIMEOUT_MS` - Per-request timeout in milliseconds
//!   (default: 7000)
//! - `GOURMET_DATA_DIR` - Directory for device-local records
//!   (default: `.gourmet-express`)

use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;
use url::Url;

/// Default per-request timeout in milliseconds.
const DEFAULT_TIMEOUT_MS: u64 = 7000;

/// Default directory for device-local records.
const DEFAULT_DATA_DIR: &str = ".gourmet-express";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Client application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Backend base URL without a trailing slash; `None` means no backend
    /// is configured and every remote call short-circuits to fallback.
    pub api_base: Option<String>,
    /// Per-request timeout; expired requests are aborted.
    pub request_timeout: Duration,
    /// Directory holding device-local records (cart, profile).
    pub data_dir: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base: None,
            request_timeout: Duration::from_millis(DEFAULT_TIMEOUT_MS),
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is present but unusable (base
    /// URL that does not parse, non-numeric timeout).
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let raw_base =
            get_optional_env("GOURMET_API_BASE").or_else(|| get_optional_env("GOURMET_BACKEND_URL"));
        let api_base = parse_api_base("GOURMET_API_BASE", raw_base)?;
        let request_timeout = parse_timeout_ms(
            "GOURMET_API_TIMEOUT_MS",
            get_optional_env("GOURMET_API_TIMEOUT_MS"),
        )?;
        let data_dir = PathBuf::from(get_env_or_default("GOURMET_DATA_DIR", DEFAULT_DATA_DIR));

        Ok(Self {
            api_base,
            request_timeout,
            data_dir,
        })
    }

    /// True when a backend base URL is configured.
    #[must_use]
    pub const fn has_backend(&self) -> bool {
        self.api_base.is_some()
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get an optional environment variable.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Normalise and validate the backend base URL.
///
/// Whitespace-only values count as unset. Trailing slashes are stripped so
/// path joining never produces double slashes.
fn parse_api_base(key: &str, raw: Option<String>) -> Result<Option<String>, ConfigError> {
    let Some(raw) = raw else { return Ok(None) };
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    let base = trimmed.trim_end_matches('/');
    Url::parse(base)
        .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))?;
    Ok(Some(base.to_owned()))
}

/// Parse a millisecond timeout value, defaulting when unset.
fn parse_timeout_ms(key: &str, raw: Option<String>) -> Result<Duration, ConfigError> {
    let Some(raw) = raw else {
        return Ok(Duration::from_millis(DEFAULT_TIMEOUT_MS));
    };
    let ms = raw
        .trim()
        .parse::<u64>()
        .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))?;
    Ok(Duration::from_millis(ms))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_api_base_unset_and_blank() {
        assert_eq!(parse_api_base("T", None).unwrap(), None);
        assert_eq!(parse_api_base("T", Some(String::new())).unwrap(), None);
        assert_eq!(parse_api_base("T", Some("   ".to_string())).unwrap(), None);
    }

    #[test]
    fn test_parse_api_base_strips_trailing_slashes() {
        let base = parse_api_base("T", Some("https://api.example.com///".to_string())).unwrap();
        assert_eq!(base.as_deref(), Some("https://api.example.com"));
    }

    #[test]
    fn test_parse_api_base_keeps_path_prefix() {
        let base = parse_api_base("T", Some("https://api.example.com/v1/".to_string())).unwrap();
        assert_eq!(base.as_deref(), Some("https://api.example.com/v1"));
    }

    #[test]
    fn test_parse_api_base_rejects_non_urls() {
        let result = parse_api_base("T", Some("not a url".to_string()));
        assert!(matches!(result, Err(ConfigError::InvalidEnvVar(_, _))));
    }

    #[test]
    fn test_parse_timeout_default_and_custom() {
        assert_eq!(
            parse_timeout_ms("T", None).unwrap(),
            Duration::from_millis(7000)
        );
        assert_eq!(
            parse_timeout_ms("T", Some("250".to_string())).unwrap(),
            Duration::from_millis(250)
        );
    }

    #[test]
    fn test_parse_timeout_rejects_garbage() {
        assert!(parse_timeout_ms("T", Some("soon".to_string())).is_err());
        assert!(parse_timeout_ms("T", Some("-1".to_string())).is_err());
    }

    #[test]
    fn test_default_config_is_offline() {
        let config = AppConfig::default();
        assert!(!config.has_backend());
        assert_eq!(config.request_timeout, Duration::from_millis(7000));
        assert_eq!(config.data_dir, PathBuf::from(".gourmet-express"));
    }
}
