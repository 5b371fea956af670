// crates/buildcheck-core/src/endpoint.rs
// ============================================================================
// Module: Endpoint Registry
// Description: Resource path segments and locator selectors.
// Purpose: Map logical resource names to REST paths.
// Dependencies: std
// ============================================================================

//! ## Overview
//! Every resource lives under [`REST_ROOT`]. Individual resources are addressed
//! with a [`Locator`] appended as one path segment, e.g.
//! `/app/rest/buildTypes/id:Sample_Build`.

use std::fmt;

// ============================================================================
// SECTION: Endpoint
// ============================================================================

/// Path segments shared by every REST resource.
pub const REST_ROOT: [&str; 2] = ["app", "rest"];

/// Closed set of REST resources exercised by the suite.
///
/// # Invariants
/// - Variants are stable; path segments match the server's resource names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    /// User accounts.
    Users,
    /// Projects.
    Projects,
    /// Build configurations.
    BuildTypes,
}

impl Endpoint {
    /// Returns the resource path segment below [`REST_ROOT`].
    #[must_use]
    pub const fn path_segment(self) -> &'static str {
        match self {
            Self::Users => "users",
            Self::Projects => "projects",
            Self::BuildTypes => "buildTypes",
        }
    }

    /// Returns the absolute resource path, e.g. `/app/rest/users`.
    #[must_use]
    pub fn path(self) -> String {
        format!("/{}/{}", REST_ROOT.join("/"), self.path_segment())
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path_segment())
    }
}

// ============================================================================
// SECTION: Locator
// ============================================================================

/// Resource selector rendered as `<dimension>:<value>`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Locator(String);

impl Locator {
    /// Builds a locator from a dimension and value.
    #[must_use]
    pub fn new(dimension: &str, value: &str) -> Self {
        Self(format!("{dimension}:{value}"))
    }

    /// Selects a resource by id (`id:<value>`).
    #[must_use]
    pub fn id(value: &str) -> Self {
        Self::new("id", value)
    }

    /// Selects a user by username (`username:<value>`).
    #[must_use]
    pub fn username(value: &str) -> Self {
        Self::new("username", value)
    }

    /// Selects a resource by name (`name:<value>`).
    #[must_use]
    pub fn name(value: &str) -> Self {
        Self::new("name", value)
    }

    /// Wraps a raw locator string as received in a request path.
    #[must_use]
    pub fn raw(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Returns the rendered locator.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Splits the locator into `(dimension, value)`.
    ///
    /// A bare value without a dimension is treated as an id, matching the
    /// server's shorthand.
    #[must_use]
    pub fn parts(&self) -> (&str, &str) {
        self.0.split_once(':').unwrap_or(("id", self.0.as_str()))
    }
}

impl fmt::Display for Locator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Locator {
    fn from(value: &str) -> Self {
        Self::raw(value)
    }
}
