//! HTTP transport for the dashboard API.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use tracing::debug;

use crate::client::Transport;
use crate::models::{expand_headers, ApiConfig, Config, ConfigError, TransportError};

/// reqwest-backed [`Transport`] for a real dashboard API.
///
/// Joins endpoint paths onto a base URL, carries default headers and an
/// optional bearer token, and maps HTTP failures into the crate's transport
/// error taxonomy. Deliberately performs exactly one attempt per call.
pub struct HttpTransport {
    client: reqwest::Client,
    base_url: String,
    auth_token: Option<String>,
    default_headers: HashMap<String, String>,
    timeout: Duration,
}

impl HttpTransport {
    /// Build a transport from explicit parts.
    pub fn new(
        base_url: impl Into<String>,
        auth_token: Option<String>,
        default_headers: HashMap<String, String>,
        timeout_secs: u64,
    ) -> Result<Self, TransportError> {
        let timeout = Duration::from_secs(timeout_secs);
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(TransportError::Network)?;

        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }

        Ok(Self {
            client,
            base_url,
            auth_token,
            default_headers,
            timeout,
        })
    }

    /// Build a transport from configuration.
    ///
    /// Fails with [`ConfigError::InvalidBaseUrl`] when called on an offline
    /// config; use [`OfflineTransport`](super::OfflineTransport) there.
    pub fn from_config(config: &Config) -> Result<Self, ConfigError> {
        config.validate()?;
        let base_url = config
            .api
            .base_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .ok_or_else(|| ConfigError::InvalidBaseUrl(String::new()))?;

        let auth_token = config.resolve_auth_token()?;

        Self::new(
            base_url,
            auth_token,
            expand_headers(&config.api.headers),
            config.api.timeout_secs,
        )
        .map_err(|e| ConfigError::InvalidBaseUrl(format!("{base_url}: {e}")))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Assemble headers for a request.
    fn headers(&self, extra: &HashMap<String, String>) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        if let Some(token) = &self.auth_token {
            if let Ok(value) = HeaderValue::from_str(&format!("Bearer {token}")) {
                headers.insert(AUTHORIZATION, value);
            }
        }

        for (key, value) in self.default_headers.iter().chain(extra.iter()) {
            if let (Ok(name), Ok(val)) = (
                HeaderName::try_from(key.as_str()),
                HeaderValue::from_str(value),
            ) {
                headers.insert(name, val);
            }
        }

        headers
    }

    fn url_for(&self, endpoint: &str) -> String {
        if endpoint.starts_with("http://") || endpoint.starts_with("https://") {
            endpoint.to_string()
        } else {
            format!("{}/{}", self.base_url, endpoint.trim_start_matches('/'))
        }
    }

    /// Probe the API root and report reachability.
    pub async fn health_check(&self) -> HealthCheckResult {
        let start = Instant::now();

        match self
            .client
            .get(&self.base_url)
            .headers(self.headers(&HashMap::new()))
            .timeout(Duration::from_secs(10))
            .send()
            .await
        {
            Ok(response) => {
                let latency_ms = start.elapsed().as_millis() as u64;
                if response.status().is_success() {
                    HealthCheckResult {
                        status: HealthStatus::Healthy,
                        latency_ms: Some(latency_ms),
                        error: None,
                    }
                } else {
                    HealthCheckResult {
                        status: HealthStatus::Unhealthy,
                        latency_ms: Some(latency_ms),
                        error: Some(format!("HTTP {}", response.status().as_u16())),
                    }
                }
            }
            Err(e) => HealthCheckResult {
                status: HealthStatus::Unreachable,
                latency_ms: None,
                error: Some(e.to_string()),
            },
        }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    fn name(&self) -> &str {
        "http"
    }

    async fn fetch_json(
        &self,
        endpoint: &str,
        headers: &HashMap<String, String>,
    ) -> Result<serde_json::Value, TransportError> {
        let url = self.url_for(endpoint);
        debug!(url = %url, "Fetching");

        let response = self
            .client
            .get(&url)
            .headers(self.headers(headers))
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    TransportError::Timeout(self.timeout)
                } else {
                    TransportError::Network(e)
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(TransportError::Status {
                status: status.as_u16(),
                message,
            });
        }

        let body = response
            .text()
            .await
            .map_err(TransportError::Network)?;

        serde_json::from_str(&body)
            .map_err(|e| TransportError::MalformedResponse(format!("invalid JSON: {e}")))
    }
}

/// Health check result for the `ping` command.
#[derive(Debug, Clone)]
pub struct HealthCheckResult {
    pub status: HealthStatus,
    /// Latency in milliseconds (if reachable)
    pub latency_ms: Option<u64>,
    /// Error message (if unhealthy or unreachable)
    pub error: Option<String>,
}

/// Health status of the dashboard API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HealthStatus {
    /// API is responding normally
    Healthy,
    /// API is responding but with errors
    Unhealthy,
    /// API is not reachable
    Unreachable,
}

impl std::fmt::Display for HealthStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HealthStatus::Healthy => write!(f, "healthy"),
            HealthStatus::Unhealthy => write!(f, "unhealthy"),
            HealthStatus::Unreachable => write!(f, "unreachable"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FallbackConfig;

    #[test]
    fn url_joining_handles_slashes() {
        let transport = HttpTransport::new(
            "https://api.example.org/",
            None,
            HashMap::new(),
            30,
        )
        .unwrap();
        assert_eq!(
            transport.url_for("/api/vehicules"),
            "https://api.example.org/api/vehicules"
        );
        assert_eq!(
            transport.url_for("api/vehicules"),
            "https://api.example.org/api/vehicules"
        );
        assert_eq!(
            transport.url_for("https://other.example.org/x"),
            "https://other.example.org/x"
        );
    }

    #[test]
    fn from_config_rejects_offline_config() {
        let config = Config {
            api: ApiConfig::default(),
            fallback: FallbackConfig::default(),
        };
        assert!(HttpTransport::from_config(&config).is_err());
    }
}
