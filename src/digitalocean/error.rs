//! Error types for the DigitalOcean account client

use thiserror::Error;

/// Errors that can occur when talking to the DigitalOcean API
#[derive(Debug, Error)]
pub enum AccountError {
    /// HTTP request failed (network error, timeout, etc.)
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    /// API returned an error response
    #[error("API error ({status}): {message}")]
    ApiError {
        /// HTTP status code
        status: u16,
        /// Error message from the API
        message: String,
    },

    /// Failed to parse the API response
    #[error("Failed to parse response: {0}")]
    ParseError(String),

    /// The access token was missing, expired or revoked
    #[error("Not authorized - check your DigitalOcean access token")]
    Unauthorized,

    /// Requested resource was not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Token lacks the scope for the requested operation
    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    /// Rate limit exceeded
    #[error("Rate limit exceeded - please try again later")]
    RateLimited,

    /// Server error
    #[error("Server error ({status}): {message}")]
    ServerError {
        /// HTTP status code (5xx)
        status: u16,
        /// Error message
        message: String,
    },
}

impl AccountError {
    /// Map a non-success status code and its message to an error
    pub fn from_status(status: u16, message: String) -> Self {
        match status {
            401 => AccountError::Unauthorized,
            403 => AccountError::PermissionDenied(message),
            404 => AccountError::NotFound(message),
            429 => AccountError::RateLimited,
            500..=599 => AccountError::ServerError { status, message },
            _ => AccountError::ApiError { status, message },
        }
    }
}

/// Result type alias for account operations
pub type Result<T> = std::result::Result<T, AccountError>;
