// crates/buildcheck-client/src/response.rs
// ============================================================================
// Module: API Response
// Description: Buffered status and body of a completed request.
// Purpose: Let callers assert on status, JSON, or text after the round trip.
// Dependencies: reqwest, serde, serde_json
// ============================================================================

//! ## Overview
//! Responses are buffered in full so status and body can be inspected after
//! the connection is released.

use reqwest::StatusCode;
use serde::de::DeserializeOwned;

use crate::error::ApiError;

/// Completed response with a fully buffered body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    /// Request method, kept for error context.
    method: String,
    /// Request path relative to the server root.
    path: String,
    /// Response status.
    status: StatusCode,
    /// Response body as UTF-8 text (lossy).
    body: String,
}

impl ApiResponse {
    /// Builds a response record.
    #[must_use]
    pub fn new(method: &str, path: &str, status: StatusCode, body: String) -> Self {
        Self {
            method: method.to_string(),
            path: path.to_string(),
            status,
            body,
        }
    }

    /// Returns the HTTP status.
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        self.status
    }

    /// Returns true for 2xx statuses.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// Returns the request path this response answers.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Returns the body text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.body
    }

    /// Decodes the body as JSON.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Json`] when the body does not match `T`.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, ApiError> {
        serde_json::from_str(&self.body).map_err(|err| {
            ApiError::Json(format!("decode {} {} response: {err}", self.method, self.path))
        })
    }

    /// Passes 2xx responses through and converts anything else to an error.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::UnexpectedStatus`] for non-success statuses.
    pub fn ensure_success(self) -> Result<Self, ApiError> {
        if self.is_success() {
            return Ok(self);
        }
        Err(ApiError::UnexpectedStatus {
            method: self.method,
            path: self.path,
            status: self.status.as_u16(),
            body: self.body,
        })
    }
}
