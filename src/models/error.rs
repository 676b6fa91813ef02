//! Error types for routier.
//!
//! Two layers, mirroring the data flow:
//! - `TransportError`: the network could not produce a usable response.
//!   Absorbed at the loader boundary (becomes fixture data or an `Error`
//!   state), never re-thrown to page-level callers.
//! - `RoutierError`: top-level error for configuration and programming
//!   failures that do surface.

use std::time::Duration;

use thiserror::Error;

/// Top-level error type for routier.
#[derive(Debug, Error)]
pub enum RoutierError {
    #[error("Configuration error: {0}")]
    Config(#[from] super::ConfigError),

    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Failures raised by the transport layer while reaching the dashboard API.
#[derive(Debug, Error)]
pub enum TransportError {
    /// No transport is configured (offline deployment, or intentionally
    /// stubbed out). Loaders treat this as an invitation to use fixtures.
    #[error("Transport unavailable for {endpoint}")]
    Unavailable { endpoint: String },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Request timeout after {0:?}")]
    Timeout(Duration),

    #[error("API error (status {status}): {message}")]
    Status { status: u16, message: String },

    #[error("Malformed response: {0}")]
    MalformedResponse(String),
}

impl TransportError {
    /// True when the failure means "no backend is wired up" rather than
    /// "the backend answered badly".
    pub fn is_unavailable(&self) -> bool {
        matches!(self, Self::Unavailable { .. })
    }

    /// Human-readable message suitable for an `Error` fetch state.
    pub fn user_message(&self) -> String {
        match self {
            Self::Unavailable { endpoint } => {
                format!("Aucune source de données configurée pour {endpoint}")
            }
            Self::Network(e) => format!("Erreur réseau: {e}"),
            Self::Timeout(d) => format!("Délai d'attente dépassé ({}s)", d.as_secs()),
            Self::Status { status, message } => {
                format!("Le serveur a répondu {status}: {message}")
            }
            Self::MalformedResponse(msg) => format!("Réponse illisible: {msg}"),
        }
    }
}

/// Result type alias for routier.
pub type Result<T> = std::result::Result<T, RoutierError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unavailable_is_flagged() {
        let err = TransportError::Unavailable {
            endpoint: "/api/vehicules".to_string(),
        };
        assert!(err.is_unavailable());
        assert!(!TransportError::MalformedResponse("x".into()).is_unavailable());
    }

    #[test]
    fn user_messages_are_human_readable() {
        let err = TransportError::Status {
            status: 503,
            message: "maintenance".to_string(),
        };
        let msg = err.user_message();
        assert!(msg.contains("503"));
        assert!(msg.contains("maintenance"));
    }
}
