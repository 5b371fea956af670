// crates/buildcheck-client/src/executor.rs
// ============================================================================
// Module: Request Executor
// Description: Single request path with checked and unchecked views.
// Purpose: Perform one authenticated HTTP round trip per operation.
// Dependencies: buildcheck-core, reqwest, serde_json, tracing, url
// ============================================================================

//! ## Overview
//! [`ApiClient::send`] is the only function that touches the network. The
//! [`UncheckedRequests`] view maps resource operations onto [`ApiRequest`]s
//! and returns whatever the server answered; [`CheckedRequests`] runs the same
//! operations and applies [`ApiResponse::ensure_success`].

use buildcheck_core::Endpoint;
use buildcheck_core::Locator;
use buildcheck_core::REST_ROOT;
use buildcheck_core::RoleAssignment;
use reqwest::Client;
use reqwest::Method;
use reqwest::header::ACCEPT;
use reqwest::header::CONTENT_TYPE;
use reqwest::redirect::Policy;
use serde::Serialize;
use serde_json::Value;
use tracing::debug;
use url::Url;

use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::response::ApiResponse;
use crate::spec::AuthSpec;

// ============================================================================
// SECTION: Requests
// ============================================================================

/// Request body variants.
#[derive(Debug, Clone, PartialEq)]
pub enum RequestBody {
    /// No body.
    Empty,
    /// JSON document.
    Json(Value),
    /// Plain text, used for single-field updates.
    Text(String),
}

/// Resource request relative to the REST root.
///
/// # Invariants
/// - `segments` starts with the endpoint's path segment.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    /// HTTP method.
    method: Method,
    /// Path segments below [`REST_ROOT`].
    segments: Vec<String>,
    /// Request body.
    body: RequestBody,
}

impl ApiRequest {
    /// Starts a request against an endpoint collection.
    #[must_use]
    pub fn new(method: Method, endpoint: Endpoint) -> Self {
        Self {
            method,
            segments: vec![endpoint.path_segment().to_string()],
            body: RequestBody::Empty,
        }
    }

    /// Appends a path segment (percent-encoded when the URL is built).
    #[must_use]
    pub fn segment(mut self, segment: impl Into<String>) -> Self {
        self.segments.push(segment.into());
        self
    }

    /// Sets a JSON body.
    #[must_use]
    pub fn json_body(mut self, value: Value) -> Self {
        self.body = RequestBody::Json(value);
        self
    }

    /// Sets a plain-text body.
    #[must_use]
    pub fn text_body(mut self, value: impl Into<String>) -> Self {
        self.body = RequestBody::Text(value.into());
        self
    }

    /// Returns the HTTP method.
    #[must_use]
    pub const fn method(&self) -> &Method {
        &self.method
    }

    /// Returns the request body.
    #[must_use]
    pub const fn body(&self) -> &RequestBody {
        &self.body
    }

    /// Returns the unencoded path, e.g. `/app/rest/buildTypes/id:x`.
    #[must_use]
    pub fn path(&self) -> String {
        format!("/{}/{}", REST_ROOT.join("/"), self.segments.join("/"))
    }
}

// ============================================================================
// SECTION: Client
// ============================================================================

/// HTTP client bound to one build server.
#[derive(Debug, Clone)]
pub struct ApiClient {
    /// Server root.
    base_url: Url,
    /// Shared connection pool.
    http: Client,
}

impl ApiClient {
    /// Builds a client from validated configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Config`] when the HTTP client cannot be built.
    pub fn new(config: ClientConfig) -> Result<Self, ApiError> {
        let mut builder = Client::builder().redirect(Policy::none());
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder
            .build()
            .map_err(|err| ApiError::Config(format!("failed to build http client: {err}")))?;
        Ok(Self {
            base_url: config.base_url,
            http,
        })
    }

    /// Returns the server root.
    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// View that fails on any non-success status.
    #[must_use]
    pub const fn checked(&self) -> CheckedRequests<'_> {
        CheckedRequests {
            requests: UncheckedRequests {
                client: self,
            },
        }
    }

    /// View that returns raw responses for caller-side assertions.
    #[must_use]
    pub const fn unchecked(&self) -> UncheckedRequests<'_> {
        UncheckedRequests {
            client: self,
        }
    }

    /// Resolves a request to an absolute URL below the server root.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Url`] when the base URL cannot take path segments.
    pub fn url_for(&self, request: &ApiRequest) -> Result<Url, ApiError> {
        let mut url = self.base_url.clone();
        {
            let mut path = url.path_segments_mut().map_err(|()| {
                ApiError::Url(format!("base url cannot carry a path: {}", self.base_url))
            })?;
            path.pop_if_empty();
            path.extend(REST_ROOT);
            path.extend(&request.segments);
        }
        Ok(url)
    }

    /// Performs one round trip and buffers the response for any status.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Transport`] when the request cannot be sent or the
    /// body cannot be read, and [`ApiError::Url`] for unusable paths.
    pub async fn send(&self, auth: &AuthSpec, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        let url = self.url_for(&request)?;
        let path = request.path();
        let method = request.method.as_str().to_string();
        let mut builder =
            auth.apply(self.http.request(request.method, url).header(ACCEPT, "application/json"));
        builder = match request.body {
            RequestBody::Empty => builder,
            RequestBody::Json(value) => builder.json(&value),
            RequestBody::Text(text) => builder.header(CONTENT_TYPE, "text/plain").body(text),
        };
        let response = builder
            .send()
            .await
            .map_err(|err| ApiError::Transport(format!("{method} {path} failed: {err}")))?;
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|err| ApiError::Transport(format!("{method} {path} body read: {err}")))?;
        debug!(
            method = %method,
            path = %path,
            status = status.as_u16(),
            principal = auth.principal().unwrap_or("<super>"),
            "build-server request"
        );
        Ok(ApiResponse::new(&method, &path, status, body))
    }
}

// ============================================================================
// SECTION: Views
// ============================================================================

/// Serializes a payload into a JSON value.
fn to_json<T: Serialize + ?Sized>(payload: &T) -> Result<Value, ApiError> {
    serde_json::to_value(payload).map_err(|err| ApiError::Json(format!("encode payload: {err}")))
}

/// Resource operations returning raw responses.
#[derive(Debug, Clone, Copy)]
pub struct UncheckedRequests<'a> {
    /// Underlying client.
    client: &'a ApiClient,
}

impl UncheckedRequests<'_> {
    /// POSTs a new resource to the endpoint collection.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on serialization or transport failure only.
    pub async fn create<T: Serialize + ?Sized>(
        &self,
        auth: &AuthSpec,
        endpoint: Endpoint,
        payload: &T,
    ) -> Result<ApiResponse, ApiError> {
        let request = ApiRequest::new(Method::POST, endpoint).json_body(to_json(payload)?);
        self.client.send(auth, request).await
    }

    /// GETs a single resource by locator.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure only.
    pub async fn read(
        &self,
        auth: &AuthSpec,
        endpoint: Endpoint,
        locator: &Locator,
    ) -> Result<ApiResponse, ApiError> {
        let request = ApiRequest::new(Method::GET, endpoint).segment(locator.as_str());
        self.client.send(auth, request).await
    }

    /// PUTs a single field value as plain text.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure only.
    pub async fn update(
        &self,
        auth: &AuthSpec,
        endpoint: Endpoint,
        locator: &Locator,
        field: &str,
        value: &str,
    ) -> Result<ApiResponse, ApiError> {
        let request = ApiRequest::new(Method::PUT, endpoint)
            .segment(locator.as_str())
            .segment(field)
            .text_body(value);
        self.client.send(auth, request).await
    }

    /// DELETEs a single resource by locator.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure only.
    pub async fn delete(
        &self,
        auth: &AuthSpec,
        endpoint: Endpoint,
        locator: &Locator,
    ) -> Result<ApiResponse, ApiError> {
        let request = ApiRequest::new(Method::DELETE, endpoint).segment(locator.as_str());
        self.client.send(auth, request).await
    }

    /// Grants a role to a user.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure only.
    pub async fn grant_role(
        &self,
        auth: &AuthSpec,
        user: &Locator,
        role: &RoleAssignment,
    ) -> Result<ApiResponse, ApiError> {
        let request = ApiRequest::new(Method::POST, Endpoint::Users)
            .segment(user.as_str())
            .segment("roles")
            .segment(role.role_id.as_str())
            .segment(role.scope.to_string());
        self.client.send(auth, request).await
    }
}

/// Resource operations that fail on any non-success status.
#[derive(Debug, Clone, Copy)]
pub struct CheckedRequests<'a> {
    /// Unchecked operations the checks wrap.
    requests: UncheckedRequests<'a>,
}

impl CheckedRequests<'_> {
    /// POSTs a new resource and requires success.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::UnexpectedStatus`] for non-2xx responses.
    pub async fn create<T: Serialize + ?Sized>(
        &self,
        auth: &AuthSpec,
        endpoint: Endpoint,
        payload: &T,
    ) -> Result<ApiResponse, ApiError> {
        self.requests.create(auth, endpoint, payload).await?.ensure_success()
    }

    /// GETs a resource and requires success.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::UnexpectedStatus`] for non-2xx responses.
    pub async fn read(
        &self,
        auth: &AuthSpec,
        endpoint: Endpoint,
        locator: &Locator,
    ) -> Result<ApiResponse, ApiError> {
        self.requests.read(auth, endpoint, locator).await?.ensure_success()
    }

    /// Updates a field and requires success.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::UnexpectedStatus`] for non-2xx responses.
    pub async fn update(
        &self,
        auth: &AuthSpec,
        endpoint: Endpoint,
        locator: &Locator,
        field: &str,
        value: &str,
    ) -> Result<ApiResponse, ApiError> {
        self.requests.update(auth, endpoint, locator, field, value).await?.ensure_success()
    }

    /// Deletes a resource and requires success.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::UnexpectedStatus`] for non-2xx responses.
    pub async fn delete(
        &self,
        auth: &AuthSpec,
        endpoint: Endpoint,
        locator: &Locator,
    ) -> Result<ApiResponse, ApiError> {
        self.requests.delete(auth, endpoint, locator).await?.ensure_success()
    }

    /// Grants a role and requires success.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::UnexpectedStatus`] for non-2xx responses.
    pub async fn grant_role(
        &self,
        auth: &AuthSpec,
        user: &Locator,
        role: &RoleAssignment,
    ) -> Result<ApiResponse, ApiError> {
        self.requests.grant_role(auth, user, role).await?.ensure_success()
    }
}
