//! Transport seam between loaders and the network.
//!
//! Loaders never hold a concrete HTTP client; they hold a `dyn Transport`.
//! Tests substitute stubs, offline deployments substitute
//! [`OfflineTransport`], and everything else goes through
//! [`HttpTransport`](super::HttpTransport).

use std::collections::HashMap;

use async_trait::async_trait;

use crate::models::TransportError;

/// A source of raw JSON documents, addressed by endpoint path.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Name of this transport (for logging).
    fn name(&self) -> &str;

    /// Fetch the JSON document at `endpoint`, with per-request headers
    /// layered over whatever defaults the transport carries.
    ///
    /// One attempt, no retries: the loader owns failure policy.
    async fn fetch_json(
        &self,
        endpoint: &str,
        headers: &HashMap<String, String>,
    ) -> Result<serde_json::Value, TransportError>;
}

/// Transport for deployments with no backend wired up.
///
/// Every request reports [`TransportError::Unavailable`], which a loader
/// with a fixture fallback converts straight into fixture data.
#[derive(Debug, Clone, Copy, Default)]
pub struct OfflineTransport;

#[async_trait]
impl Transport for OfflineTransport {
    fn name(&self) -> &str {
        "offline"
    }

    async fn fetch_json(
        &self,
        endpoint: &str,
        _headers: &HashMap<String, String>,
    ) -> Result<serde_json::Value, TransportError> {
        Err(TransportError::Unavailable {
            endpoint: endpoint.to_string(),
        })
    }
}
