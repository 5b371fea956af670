// crates/buildcheck-core/src/project.rs
// ============================================================================
// Module: Project Model
// Description: Project payload accepted by the projects endpoint.
// Purpose: Provide a randomized container for build configurations.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! Projects nest under [`ROOT_PROJECT_ID`] unless a parent is given.

use serde::Deserialize;
use serde::Serialize;

use crate::ident::random_identifier;

/// Id of the implicit root project every top-level project hangs from.
pub const ROOT_PROJECT_ID: &str = "_Root";

/// Reference to the parent project by locator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParentProject {
    /// Parent locator (a bare id or `id:<value>`).
    pub locator: String,
}

/// Project payload accepted by `POST /app/rest/projects`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    /// Parent project.
    pub parent_project: ParentProject,
    /// Display name.
    pub name: String,
    /// External id.
    pub id: String,
    /// Copy settings from the parent when creating.
    #[serde(default)]
    pub copy_all_associated_settings: bool,
}

impl Project {
    /// Random top-level project under [`ROOT_PROJECT_ID`].
    #[must_use]
    pub fn new() -> Self {
        let id = random_identifier("project_");
        Self {
            parent_project: ParentProject {
                locator: ROOT_PROJECT_ID.to_string(),
            },
            name: format!("Project {id}"),
            id,
            copy_all_associated_settings: true,
        }
    }

    /// Nests the project under another project.
    #[must_use]
    pub fn with_parent(mut self, parent_id: &str) -> Self {
        self.parent_project.locator = parent_id.to_string();
        self
    }
}

impl Default for Project {
    fn default() -> Self {
        Self::new()
    }
}
