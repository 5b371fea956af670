// crates/buildcheck-core/src/role.rs
// ============================================================================
// Module: Role Assignments
// Description: Role identifiers and scopes granted to users.
// Purpose: Model the permission grants exercised by access-control scenarios.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! A role assignment pairs a [`RoleId`] with a [`RoleScope`]. Scopes render as
//! `g` (global) or `p:<projectId>` both in JSON payloads and in the role grant
//! path `users/<locator>/roles/<roleId>/<scope>`.

use std::fmt;

use serde::Deserialize;
use serde::Serialize;

/// Built-in server roles.
///
/// # Invariants
/// - Serialized names match the server's role ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RoleId {
    /// Full administrative access.
    SystemAdmin,
    /// Administers a project and its subprojects.
    ProjectAdmin,
    /// Runs and edits builds within a project.
    ProjectDeveloper,
    /// Read-only access to a project.
    ProjectViewer,
}

impl RoleId {
    /// Returns the server role id.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::SystemAdmin => "SYSTEM_ADMIN",
            Self::ProjectAdmin => "PROJECT_ADMIN",
            Self::ProjectDeveloper => "PROJECT_DEVELOPER",
            Self::ProjectViewer => "PROJECT_VIEWER",
        }
    }

    /// Parses a server role id.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "SYSTEM_ADMIN" => Some(Self::SystemAdmin),
            "PROJECT_ADMIN" => Some(Self::ProjectAdmin),
            "PROJECT_DEVELOPER" => Some(Self::ProjectDeveloper),
            "PROJECT_VIEWER" => Some(Self::ProjectViewer),
            _ => None,
        }
    }
}

impl fmt::Display for RoleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Scope a role applies to.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum RoleScope {
    /// Server-wide (`g`).
    Global,
    /// A single project and its subprojects (`p:<projectId>`).
    Project(String),
}

impl fmt::Display for RoleScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Global => f.write_str("g"),
            Self::Project(id) => write!(f, "p:{id}"),
        }
    }
}

impl From<RoleScope> for String {
    fn from(scope: RoleScope) -> Self {
        scope.to_string()
    }
}

impl TryFrom<String> for RoleScope {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        if value == "g" {
            return Ok(Self::Global);
        }
        match value.strip_prefix("p:") {
            Some(id) if !id.is_empty() => Ok(Self::Project(id.to_string())),
            _ => Err(format!("invalid role scope: {value}")),
        }
    }
}

/// A single role grant.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RoleAssignment {
    /// Granted role.
    #[serde(rename = "roleId")]
    pub role_id: RoleId,
    /// Scope of the grant.
    pub scope: RoleScope,
}

impl RoleAssignment {
    /// Global system administrator.
    #[must_use]
    pub const fn system_admin() -> Self {
        Self {
            role_id: RoleId::SystemAdmin,
            scope: RoleScope::Global,
        }
    }

    /// Administrator of a single project.
    #[must_use]
    pub fn project_admin(project_id: &str) -> Self {
        Self {
            role_id: RoleId::ProjectAdmin,
            scope: RoleScope::Project(project_id.to_string()),
        }
    }
}

/// Wrapper matching the server's `{"role": [...]}` collection shape.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Roles {
    /// Role grants.
    #[serde(default)]
    pub role: Vec<RoleAssignment>,
}
