//! Client error types

use thiserror::Error;

/// Storefront client error type
///
/// Empty results (no products, no order matches, no search hits) are
/// normal states and never surface here.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Transport-level failure
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-success HTTP status
    #[error("HTTP status {status} from {url}")]
    Status { status: u16, url: String },

    /// Response body did not match the expected shape
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// The endpoint rejected the submitted order
    #[error("Order submission failed: {0}")]
    Submit(String),

    /// Input rejected before any request was issued
    #[error("Validation error: {0}")]
    Validation(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Endpoint URL could not be assembled
    #[error("Invalid URL: {0}")]
    Url(String),
}

/// Result type for storefront operations
pub type StoreResult<T> = Result<T, StoreError>;
