//! Application configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `BAMBOO_BOX_DATA_DIR` - Data directory for the file store
//!   (default: `.bamboo-box`)
//! - `BAMBOO_BOX_LATENCY` - `on` (default) for demo-realistic simulated
//!   latency, `off` to disable
//! - `GEMINI_API_KEY` - Gemini API key; annotation disabled when unset
//! - `GEMINI_MODEL` - Gemini model name (default: `gemini-2.5-flash`)

use std::path::PathBuf;

use secrecy::SecretString;
use thiserror::Error;

use crate::latency::Latency;

const DEFAULT_DATA_DIR: &str = ".bamboo-box";
const DEFAULT_GEMINI_MODEL: &str = "gemini-2.5-flash";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Directory the file store persists its buckets into.
    pub data_dir: PathBuf,
    /// Simulated latency applied to every service call.
    pub latency: Latency,
    /// Gemini annotation configuration, when an API key is present.
    pub gemini: Option<GeminiConfig>,
}

/// Gemini API configuration.
///
/// Implements `Debug` manually to redact the API key.
#[derive(Clone)]
pub struct GeminiConfig {
    /// API key for the `generateContent` endpoint.
    pub api_key: SecretString,
    /// Model name, e.g. `gemini-2.5-flash`.
    pub model: String,
}

impl std::fmt::Debug for GeminiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiConfig")
            .field("api_key", &"[REDACTED]")
            .field("model", &self.model)
            .finish()
    }
}

impl AppConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if `BAMBOO_BOX_LATENCY` is set to something
    /// other than `on`/`off`.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let data_dir = PathBuf::from(get_env_or_default("BAMBOO_BOX_DATA_DIR", DEFAULT_DATA_DIR));

        let latency = match get_env_or_default("BAMBOO_BOX_LATENCY", "on").as_str() {
            "on" => Latency::simulated(),
            "off" => Latency::none(),
            other => {
                return Err(ConfigError::InvalidEnvVar(
                    "BAMBOO_BOX_LATENCY".to_owned(),
                    format!("expected 'on' or 'off', got '{other}'"),
                ));
            }
        };

        let gemini = get_optional_env("GEMINI_API_KEY").map(|key| GeminiConfig {
            api_key: SecretString::from(key),
            model: get_env_or_default("GEMINI_MODEL", DEFAULT_GEMINI_MODEL),
        });

        Ok(Self {
            data_dir,
            latency,
            gemini,
        })
    }
}

/// Get an optional environment variable.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_gemini_config_debug_redacts_key() {
        let config = GeminiConfig {
            api_key: SecretString::from("super-secret-key"),
            model: "gemini-2.5-flash".to_owned(),
        };
        let debug_output = format!("{config:?}");
        assert!(debug_output.contains("[REDACTED]"));
        assert!(debug_output.contains("gemini-2.5-flash"));
        assert!(!debug_output.contains("super-secret-key"));
    }

    #[test]
    fn test_env_or_default_fallback() {
        assert_eq!(
            get_env_or_default("BAMBOO_BOX_NO_SUCH_VAR", "fallback"),
            "fallback"
        );
    }
}
