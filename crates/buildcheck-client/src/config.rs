// crates/buildcheck-client/src/config.rs
// ============================================================================
// Module: Client Configuration
// Description: Typed connection settings for the API client.
// Purpose: Validate the server root URL before any request is built.
// Dependencies: url
// ============================================================================

//! ## Overview
//! [`ClientConfig`] is the typed input to [`crate::ApiClient::new`]. Only
//! `http` and `https` roots are accepted.

use std::time::Duration;

use url::Url;

use crate::error::ApiError;

/// Connection settings for [`ApiClient`](crate::ApiClient).
///
/// # Invariants
/// - `base_url` uses the `http` or `https` scheme.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Server root, e.g. `http://localhost:8111`.
    pub base_url: Url,
    /// Optional whole-request timeout; client defaults apply when unset.
    pub timeout: Option<Duration>,
}

impl ClientConfig {
    /// Parses and validates a server root URL.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Config`] when the URL is malformed or not HTTP(S).
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        let base_url = Url::parse(base_url.trim())
            .map_err(|err| ApiError::Config(format!("invalid base url {base_url}: {err}")))?;
        if !matches!(base_url.scheme(), "http" | "https") {
            return Err(ApiError::Config(format!(
                "base url must use http or https, got {}",
                base_url.scheme()
            )));
        }
        if base_url.cannot_be_a_base() {
            return Err(ApiError::Config(format!("base url cannot carry a path: {base_url}")));
        }
        Ok(Self {
            base_url,
            timeout: None,
        })
    }

    /// Sets the request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}
