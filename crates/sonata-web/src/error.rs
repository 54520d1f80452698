//! Error types for the API client and the auth flows.

use thiserror::Error;

/// Why a request to the backend did not produce the expected payload.
///
/// The variants exist for the developer console; the UI treats them all
/// the same way.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("failed to encode request body: {0}")]
    Encode(String),

    #[error("network error: {0}")]
    Network(String),

    #[error("server responded with HTTP {0}")]
    Status(u16),

    #[error("unexpected response body: {0}")]
    Decode(String),
}

/// Outcome of a failed sign-in or sign-up attempt.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    /// One or more required fields are empty. Never reaches the network.
    #[error("one or more required fields are empty")]
    Validation,

    #[error("auth request failed: {0}")]
    Request(#[from] ApiError),
}
