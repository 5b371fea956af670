// crates/buildcheck-core/src/build_type.rs
// ============================================================================
// Module: Build Configuration Model
// Description: Build configuration payload nested under a project.
// Purpose: Provide the primary resource under test.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! A build configuration always names its owning project. The default payload
//! carries a single command-line step so the server accepts it as runnable.

use serde::Deserialize;
use serde::Serialize;

use crate::ident::random_identifier;

/// Command-line runner type id.
pub const COMMAND_LINE_RUNNER: &str = "simpleRunner";

/// Reference to the owning project by id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectRef {
    /// Project external id.
    pub id: String,
}

/// Name/value property of a build step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepProperty {
    /// Property name.
    pub name: String,
    /// Property value.
    pub value: String,
}

/// Property collection in the server's `{"property": [...]}` shape.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StepProperties {
    /// Properties.
    #[serde(default)]
    pub property: Vec<StepProperty>,
}

/// Single build step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildTypeStep {
    /// Step display name.
    pub name: String,
    /// Runner type id.
    #[serde(rename = "type")]
    pub runner_type: String,
    /// Runner properties.
    #[serde(default)]
    pub properties: StepProperties,
}

impl BuildTypeStep {
    /// Command-line step running an inline script.
    #[must_use]
    pub fn command_line(name: &str, script: &str) -> Self {
        Self {
            name: name.to_string(),
            runner_type: COMMAND_LINE_RUNNER.to_string(),
            properties: StepProperties {
                property: vec![
                    StepProperty {
                        name: "script.content".to_string(),
                        value: script.to_string(),
                    },
                    StepProperty {
                        name: "use.custom.script".to_string(),
                        value: "true".to_string(),
                    },
                ],
            },
        }
    }
}

/// Step collection in the server's `{"step": [...]}` shape.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BuildTypeSteps {
    /// Steps in execution order.
    #[serde(default)]
    pub step: Vec<BuildTypeStep>,
}

/// Build configuration payload accepted by `POST /app/rest/buildTypes`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildType {
    /// External id; must be unique across the server.
    pub id: String,
    /// Display name; unique within the owning project.
    pub name: String,
    /// Owning project.
    pub project: ProjectRef,
    /// Build steps.
    #[serde(default)]
    pub steps: BuildTypeSteps,
}

impl BuildType {
    /// Random build configuration owned by `project_id`.
    #[must_use]
    pub fn new(project_id: &str) -> Self {
        let id = random_identifier("build_type_");
        Self {
            name: format!("Build {id}"),
            id,
            project: ProjectRef {
                id: project_id.to_string(),
            },
            steps: BuildTypeSteps {
                step: vec![BuildTypeStep::command_line(
                    "myCommandLineStep",
                    "echo 'Hello World!'",
                )],
            },
        }
    }

    /// Overrides the external id.
    #[must_use]
    pub fn with_id(mut self, id: &str) -> Self {
        self.id = id.to_string();
        self
    }

    /// Overrides the display name.
    #[must_use]
    pub fn with_name(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }
}
