// crates/buildcheck-client/src/spec.rs
// ============================================================================
// Module: Authentication Specs
// Description: Principal credentials attached to outgoing requests.
// Purpose: Build privileged and per-user auth contexts without side effects.
// Dependencies: buildcheck-core, reqwest
// ============================================================================

//! ## Overview
//! The server authenticates every request with HTTP Basic credentials. The
//! super-user logs in with an empty username and a per-startup token; regular
//! principals use their username and password.
//!
//! Building a spec is pure: no I/O, and the source [`User`] is only borrowed.

use std::fmt;

use buildcheck_core::User;
use reqwest::RequestBuilder;

/// Authentication context for a single principal.
///
/// # Invariants
/// - Equal specs authenticate as the same principal.
/// - `Debug` never prints tokens or passwords.
#[derive(Clone, PartialEq, Eq)]
pub enum AuthSpec {
    /// Privileged super-user credential.
    Super {
        /// Super-user token.
        token: String,
    },
    /// Regular user credential.
    User {
        /// Login name.
        username: String,
        /// Password.
        password: String,
    },
}

impl AuthSpec {
    /// Returns the Basic auth `(username, password)` pair.
    #[must_use]
    pub fn credentials(&self) -> (&str, &str) {
        match self {
            Self::Super {
                token,
            } => ("", token),
            Self::User {
                username,
                password,
            } => (username, password),
        }
    }

    /// Returns the username, or `None` for the super-user.
    #[must_use]
    pub fn principal(&self) -> Option<&str> {
        match self {
            Self::Super {
                ..
            } => None,
            Self::User {
                username, ..
            } => Some(username),
        }
    }

    /// Attaches the credential to a request.
    pub(crate) fn apply(&self, builder: RequestBuilder) -> RequestBuilder {
        let (username, password) = self.credentials();
        builder.basic_auth(username, Some(password))
    }
}

impl fmt::Debug for AuthSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Super {
                ..
            } => f.debug_struct("Super").field("token", &"<redacted>").finish(),
            Self::User {
                username, ..
            } => f
                .debug_struct("User")
                .field("username", username)
                .field("password", &"<redacted>")
                .finish(),
        }
    }
}

/// Builder for authentication specs.
#[derive(Clone)]
pub struct Spec {
    /// Token for the privileged credential.
    super_user_token: String,
}

impl Spec {
    /// Creates a builder holding the super-user token.
    #[must_use]
    pub fn new(super_user_token: impl Into<String>) -> Self {
        Self {
            super_user_token: super_user_token.into(),
        }
    }

    /// Returns the privileged spec for administrative operations.
    #[must_use]
    pub fn super_auth(&self) -> AuthSpec {
        AuthSpec::Super {
            token: self.super_user_token.clone(),
        }
    }

    /// Returns a spec that authenticates as `user`.
    #[must_use]
    pub fn auth(user: &User) -> AuthSpec {
        AuthSpec::User {
            username: user.username.clone(),
            password: user.password.clone(),
        }
    }
}

impl fmt::Debug for Spec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Spec").field("super_user_token", &"<redacted>").finish()
    }
}
