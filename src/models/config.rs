//! Configuration models for routier.
//!
//! Everything an operator can vary lives here: where the dashboard API is
//! (if anywhere), how long to wait for it, and what the fixture fallback
//! should look like when it answers instead.

use std::collections::HashMap;
use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Top-level configuration for routier.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Dashboard API configuration
    #[serde(default)]
    pub api: ApiConfig,

    /// Fixture fallback configuration
    #[serde(default)]
    pub fallback: FallbackConfig,
}

/// Dashboard API configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL for the API (e.g., "https://api.controle-routier.example").
    /// When absent, the crate runs fully offline on fixtures.
    #[serde(default)]
    pub base_url: Option<String>,

    /// Bearer token for authenticated deployments
    #[serde(default)]
    pub auth_token: Option<String>,

    /// Environment variable name for the bearer token
    #[serde(default = "default_auth_token_env")]
    pub auth_token_env: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Default headers for every request
    /// Values can contain ${ENV_VAR} for environment variable expansion
    #[serde(default)]
    pub headers: HashMap<String, String>,
}

fn default_auth_token_env() -> String {
    "ROUTIER_API_TOKEN".to_string()
}

fn default_timeout() -> u64 {
    30
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            auth_token: None,
            auth_token_env: default_auth_token_env(),
            timeout_secs: default_timeout(),
            headers: HashMap::new(),
        }
    }
}

/// What a loader does when the transport cannot produce data.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum FallbackPolicy {
    /// Answer with generated fixture data. Default: the dashboard always
    /// shows something, matching the demo-grade deployments this crate
    /// started life in.
    #[default]
    PreferFixtures,
    /// Surface the transport failure as an `Error` fetch state.
    SurfaceErrors,
}

/// Fixture fallback configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FallbackConfig {
    /// Policy applied when a loader has a fixture generator configured
    #[serde(default)]
    pub policy: FallbackPolicy,

    /// Simulated latency before fixture data resolves, in milliseconds.
    /// Keeps loading states visible in demos; set to 0 to disable.
    #[serde(default = "default_simulated_latency_ms")]
    pub simulated_latency_ms: u64,

    /// Identifier substituted when a generator receives a blank/invalid id
    #[serde(default = "default_id")]
    pub default_id: String,
}

fn default_simulated_latency_ms() -> u64 {
    150
}

fn default_id() -> String {
    "1".to_string()
}

impl Default for FallbackConfig {
    fn default() -> Self {
        Self {
            policy: FallbackPolicy::default(),
            simulated_latency_ms: default_simulated_latency_ms(),
            default_id: default_id(),
        }
    }
}

impl FallbackConfig {
    /// Simulated latency as a `Duration`.
    pub fn simulated_latency(&self) -> Duration {
        Duration::from_millis(self.simulated_latency_ms)
    }
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn from_file(path: &std::path::Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_owned(),
            source: e,
        })?;

        toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_owned(),
            source: e,
        })
    }

    /// Resolve the bearer token from config or environment.
    ///
    /// Returns `Ok(None)` when no token is configured anywhere: open
    /// deployments and offline mode are both valid.
    pub fn resolve_auth_token(&self) -> Result<Option<String>, ConfigError> {
        if let Some(token) = &self.api.auth_token {
            return Ok(Some(expand_env_vars(token)));
        }

        match std::env::var(&self.api.auth_token_env) {
            Ok(token) if !token.is_empty() => Ok(Some(token)),
            _ => Ok(None),
        }
    }

    /// True when no remote API is configured and loaders should run on
    /// fixtures alone.
    pub fn is_offline(&self) -> bool {
        self.api
            .base_url
            .as_deref()
            .map_or(true, |url| url.trim().is_empty())
    }

    /// Validate cross-field constraints.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(url) = self.api.base_url.as_deref() {
            let trimmed = url.trim();
            if !trimmed.is_empty()
                && !trimmed.starts_with("http://")
                && !trimmed.starts_with("https://")
            {
                return Err(ConfigError::InvalidBaseUrl(trimmed.to_string()));
            }
        }
        if self.api.timeout_secs == 0 {
            return Err(ConfigError::InvalidTimeout);
        }
        Ok(())
    }
}

/// Expand environment variables in a string.
///
/// Supports ${VAR_NAME} syntax. Unset variables leave the placeholder
/// unchanged.
pub fn expand_env_vars(s: &str) -> String {
    let mut result = s.to_string();
    let re = regex::Regex::new(r"\$\{([^}]+)\}").unwrap();

    for cap in re.captures_iter(s) {
        let var_name = &cap[1];
        if let Ok(value) = std::env::var(var_name) {
            result = result.replace(&cap[0], &value);
        }
    }

    result
}

/// Expand environment variables in all headers.
pub fn expand_headers(headers: &HashMap<String, String>) -> HashMap<String, String> {
    headers
        .iter()
        .map(|(k, v)| (k.clone(), expand_env_vars(v)))
        .collect()
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Invalid base_url '{0}': must start with http:// or https://")]
    InvalidBaseUrl(String),

    #[error("timeout_secs must be greater than zero")]
    InvalidTimeout,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn defaults_are_offline_and_lenient() {
        let config = Config::default();
        assert!(config.is_offline());
        assert_eq!(config.fallback.policy, FallbackPolicy::PreferFixtures);
        assert_eq!(config.fallback.default_id, "1");
        config.validate().unwrap();
    }

    #[test]
    fn from_file_parses_sections() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
[api]
base_url = "https://api.controle-routier.example"
timeout_secs = 10

[fallback]
policy = "surface-errors"
simulated_latency_ms = 0
"#
        )
        .unwrap();

        let config = Config::from_file(file.path()).unwrap();
        assert!(!config.is_offline());
        assert_eq!(config.api.timeout_secs, 10);
        assert_eq!(config.fallback.policy, FallbackPolicy::SurfaceErrors);
        assert_eq!(config.fallback.simulated_latency(), Duration::ZERO);
        config.validate().unwrap();
    }

    #[test]
    fn validate_rejects_bad_base_url() {
        let config = Config {
            api: ApiConfig {
                base_url: Some("ftp://nope".to_string()),
                ..ApiConfig::default()
            },
            ..Config::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidBaseUrl(_))
        ));
    }

    #[test]
    fn expand_env_vars_replaces_known_and_keeps_unknown() {
        std::env::set_var("ROUTIER_TEST_VALUE", "abc123");
        assert_eq!(
            expand_env_vars("Bearer ${ROUTIER_TEST_VALUE}"),
            "Bearer abc123"
        );
        assert_eq!(
            expand_env_vars("${ROUTIER_TEST_MISSING_VALUE}"),
            "${ROUTIER_TEST_MISSING_VALUE}"
        );
    }
}
