//! Observable state of one data-fetch lifecycle.

use serde::Serialize;

/// The three-state result a page component observes for a request cycle.
///
/// A cycle starts `Loading` and transitions exactly once to `Success` or
/// `Error`. The variants are mutually exclusive by construction: there is
/// never both an error and data.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "lowercase")]
pub enum FetchState<T> {
    /// Request in flight; nothing to show yet.
    Loading,
    /// Terminal: the cycle failed and no fallback answered.
    Error { message: String },
    /// Terminal: data is available.
    Success { data: T },
}

impl<T> FetchState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error { .. })
    }

    /// The data, if this is a `Success` state.
    pub fn data(&self) -> Option<&T> {
        match self {
            Self::Success { data } => Some(data),
            _ => None,
        }
    }

    /// The message, if this is an `Error` state.
    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Error { message } => Some(message),
            _ => None,
        }
    }

    /// Map the success payload, keeping the other variants intact.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> FetchState<U> {
        match self {
            Self::Loading => FetchState::Loading,
            Self::Error { message } => FetchState::Error { message },
            Self::Success { data } => FetchState::Success { data: f(data) },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variants_are_mutually_exclusive() {
        let state: FetchState<u32> = FetchState::Success { data: 7 };
        assert!(state.is_success());
        assert!(!state.is_error());
        assert_eq!(state.data(), Some(&7));
        assert_eq!(state.error_message(), None);

        let state: FetchState<u32> = FetchState::Error {
            message: "down".to_string(),
        };
        assert_eq!(state.data(), None);
        assert_eq!(state.error_message(), Some("down"));
    }

    #[test]
    fn map_preserves_non_success_variants() {
        let loading: FetchState<u32> = FetchState::Loading;
        assert!(loading.map(|n| n * 2).is_loading());

        let ok: FetchState<u32> = FetchState::Success { data: 21 };
        assert_eq!(ok.map(|n| n * 2).data(), Some(&42));
    }
}
