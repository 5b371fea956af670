// crates/buildcheck-core/src/user.rs
// ============================================================================
// Module: User Model
// Description: User account payload with credentials and role grants.
// Purpose: Identify the principal a scenario authenticates as.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! User payloads carry credentials, so `Debug` redacts the password.
//! [`User::new`] grants `SYSTEM_ADMIN`; [`User::without_roles`] grants nothing.

use std::fmt;

use serde::Deserialize;
use serde::Serialize;

use crate::ident::random_identifier;
use crate::ident::random_secret;
use crate::role::RoleAssignment;
use crate::role::Roles;

/// User account payload accepted by `POST /app/rest/users`.
///
/// # Invariants
/// - `Debug` never prints the password.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Login name.
    pub username: String,
    /// Plain-text password sent on creation and used for Basic auth.
    pub password: String,
    /// Optional contact email.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Role grants applied at creation.
    #[serde(default)]
    pub roles: Roles,
}

impl User {
    /// Random user holding `SYSTEM_ADMIN` at global scope.
    #[must_use]
    pub fn new() -> Self {
        Self::without_roles().with_role(RoleAssignment::system_admin())
    }

    /// Random user with no role grants.
    #[must_use]
    pub fn without_roles() -> Self {
        let username = random_identifier("user_");
        Self {
            email: Some(format!("{username}@example.test")),
            username,
            password: random_secret(),
            roles: Roles::default(),
        }
    }

    /// Adds a role grant.
    #[must_use]
    pub fn with_role(mut self, role: RoleAssignment) -> Self {
        self.roles.role.push(role);
        self
    }
}

impl Default for User {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("User")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("email", &self.email)
            .field("roles", &self.roles)
            .finish()
    }
}
