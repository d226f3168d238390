//! Failure taxonomy shared by list fetches and page navigation.

use thiserror::Error;

/// Classified fetch failures.
///
/// Classification from raw transport errors happens once, at the gateway
/// boundary; views only ever see these kinds.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FetchError {
    /// Transport failure before any response was received.
    #[error("network error: {0}")]
    Network(String),

    /// The backend rejected the session (401/403).
    #[error("session rejected by the backend")]
    Auth,

    /// The backend rejected the request itself (4xx other than auth).
    #[error("request rejected: {0}")]
    Validation(String),

    /// The backend failed (5xx).
    #[error("server error: {0}")]
    Server(String),

    /// Requested page is outside the known page range. Never reaches the
    /// network.
    #[error("page {0} is out of range")]
    InvalidPage(usize),
}

impl FetchError {
    /// Whether a manual refresh is a sensible recovery for this failure.
    pub fn is_retryable(&self) -> bool {
        matches!(self, FetchError::Network(_) | FetchError::Server(_))
    }
}

pub type FetchResult<T> = Result<T, FetchError>;
