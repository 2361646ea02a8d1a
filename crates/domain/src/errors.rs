//! Error types used throughout the application

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Main error type for Asnalo
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "message")]
pub enum SfaError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type alias for Asnalo operations
pub type Result<T> = std::result::Result<T, SfaError>;

/// Failure modes of the text-generation service boundary.
///
/// Every variant collapses to the operation's documented fallback before it
/// reaches a caller; the distinction only matters for logging.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenerationError {
    /// No credential configured for the generation service
    #[error("Generation service credential is not configured")]
    MissingCredential,

    /// Connection failed, timed out, or the request could not be built
    #[error("Network error: {0}")]
    Network(String),

    /// The service answered with a non-success status
    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    /// Rate limit exceeded
    #[error("Rate limit exceeded (retry after {0}s)")]
    RateLimit(u64),

    /// Credential rejected by the service
    #[error("Authentication failed: {0}")]
    Authentication(String),

    /// The service answered but produced no text
    #[error("Generation service returned an empty response")]
    EmptyResponse,

    /// The response does not conform to the requested shape
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

impl GenerationError {
    /// Stable label suitable for structured logging.
    pub fn label(&self) -> &'static str {
        match self {
            Self::MissingCredential => "missing_credential",
            Self::Network(_) => "network",
            Self::Api { .. } => "api",
            Self::RateLimit(_) => "rate_limit",
            Self::Authentication(_) => "authentication",
            Self::EmptyResponse => "empty_response",
            Self::InvalidResponse(_) => "invalid_response",
        }
    }
}
