// crates/buildcheck-client/src/error.rs
// ============================================================================
// Module: Client Errors
// Description: Error classification for build-server requests.
// Purpose: Separate transport failures from unexpected HTTP statuses.
// Dependencies: thiserror
// ============================================================================

//! ## Overview
//! Failures are split by cause: configuration, URL construction, transport,
//! JSON decoding, and a non-success status on the checked path.

use thiserror::Error;

/// Build-server client errors.
///
/// # Invariants
/// - Variants are stable for test assertions.
/// - String payloads may include untrusted server text.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Client configuration error.
    #[error("client config error: {0}")]
    Config(String),
    /// Request URL could not be built.
    #[error("request url error: {0}")]
    Url(String),
    /// Connection, timeout, or body read failure.
    #[error("transport error: {0}")]
    Transport(String),
    /// Payload serialization or response decoding failure.
    #[error("json error: {0}")]
    Json(String),
    /// A checked request received a non-success status.
    #[error("unexpected status {status} for {method} {path}: {body}")]
    UnexpectedStatus {
        /// HTTP method of the failed request.
        method: String,
        /// Request path relative to the server root.
        path: String,
        /// Response status code.
        status: u16,
        /// Response body text.
        body: String,
    },
}

impl ApiError {
    /// Returns the HTTP status for [`ApiError::UnexpectedStatus`].
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::UnexpectedStatus {
                status, ..
            } => Some(*status),
            _ => None,
        }
    }
}
