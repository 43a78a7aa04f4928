//! Error types for breed_viewer

use thiserror::Error;

/// Unified error type for dog API operations
#[derive(Debug, Error)]
pub enum ApiError {
    /// HTTP request failed (network error, timeout, etc.)
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
    /// HTTP error status code
    #[error("HTTP error: {0}")]
    HttpStatus(reqwest::StatusCode),
}

/// Result type alias for API operations
pub type ApiResult<T> = Result<T, ApiError>;
