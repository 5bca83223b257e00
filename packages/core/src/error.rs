//! Error types for the synchronizer.
//!
//! Any failure aborts the run; there is no local recovery or retry. The
//! caller (usually an external scheduler) is responsible for re-invoking.

use thiserror::Error;

/// Errors raised while fetching, translating, or updating statuses
#[derive(Debug, Error)]
pub enum SyncError {
    /// The external service answered with a non-success HTTP status
    #[error("{service} request failed: HTTP {status}: {body}")]
    Api {
        service: &'static str,
        status: u16,
        body: String,
    },

    /// The response body did not carry the expected JSON fields
    #[error("unexpected response format: {0}")]
    Format(String),

    /// A wire value fell outside the closed status enumeration
    #[error("unknown {kind} status value: {value:?}")]
    UnknownStatus { kind: &'static str, value: String },

    /// Transport-level failure (connect, timeout, TLS)
    #[error("network error: {0}")]
    Http(#[from] reqwest::Error),
}
