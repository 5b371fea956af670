// crates/buildcheck-client/src/lib.rs
// ============================================================================
// Module: Buildcheck Client
// Description: Authenticated request execution against the build-server API.
// Purpose: Compose auth context, endpoint, and payload into HTTP calls.
// Dependencies: buildcheck-core, reqwest, serde, thiserror, tracing, url
// ============================================================================

//! ## Overview
//! The client pairs an authentication context ([`AuthSpec`], built by [`Spec`])
//! with an [`Endpoint`](buildcheck_core::Endpoint) and a payload, and performs
//! exactly one HTTP round trip per call.
//!
//! All traffic goes through [`ApiClient::send`], which returns an
//! [`ApiResponse`] for every HTTP status. Two views sit on top:
//! - [`ApiClient::checked`] turns any non-2xx status into
//!   [`ApiError::UnexpectedStatus`], so `?` fails the calling test.
//! - [`ApiClient::unchecked`] hands back the raw response for negative-path
//!   assertions.
//!
//! Invariants:
//! - No retries, caching, or batching.
//! - Credentials never appear in `Debug` output or logs.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod config;
pub mod error;
pub mod executor;
pub mod response;
pub mod spec;


// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use config::ClientConfig;
pub use error::ApiError;
pub use executor::ApiClient;
pub use executor::ApiRequest;
pub use executor::CheckedRequests;
pub use executor::RequestBody;
pub use executor::UncheckedRequests;
pub use reqwest::Method;
pub use reqwest::StatusCode;
pub use response::ApiResponse;
pub use spec::AuthSpec;
pub use spec::Spec;
