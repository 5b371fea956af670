// crates/buildcheck-core/src/records.rs
// ============================================================================
// Module: Response Records
// Description: Resource representations returned by the server.
// Purpose: Decode the fields scenarios assert on; ignore everything else.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! Server responses carry many more fields (hrefs, web URLs, settings) than
//! the suite inspects. Records keep only the identifying fields and ignore
//! unknown keys. Values are untrusted server output.

use serde::Deserialize;
use serde::Serialize;

use crate::role::Roles;

/// User as returned by the users endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    /// Numeric server id.
    #[serde(default)]
    pub id: Option<u64>,
    /// Login name.
    pub username: String,
    /// Role grants visible to the caller.
    #[serde(default)]
    pub roles: Roles,
}

/// Project as returned by the projects endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectRecord {
    /// External id.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Parent project id, absent for the root project.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_project_id: Option<String>,
}

/// Build configuration as returned by the buildTypes endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildTypeRecord {
    /// External id.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Owning project id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,
}
