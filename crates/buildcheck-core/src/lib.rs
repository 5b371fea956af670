// crates/buildcheck-core/src/lib.rs
// ============================================================================
// Module: Buildcheck Core
// Description: Entity models and endpoint registry for the build-server API.
// Purpose: Provide ready-to-serialize payloads and typed selectors for tests.
// Dependencies: rand, serde
// ============================================================================

//! ## Overview
//! This crate holds the plain data side of the build-server API suite: the
//! entity payloads sent on creation ([`User`], [`Project`], [`BuildType`]), the
//! records decoded from responses, the closed [`Endpoint`] registry and the
//! [`Locator`] selector syntax (`<dimension>:<value>`).
//!
//! Models generate randomized defaults per instance so scenarios never share
//! entities. Nothing here performs I/O.
//! Invariants:
//! - Generated identifiers satisfy [`is_valid_identifier`].
//! - [`Endpoint`] is closed; adding a resource is a breaking change.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod build_type;
pub mod endpoint;
pub mod ident;
pub mod project;
pub mod records;
pub mod role;
pub mod user;


// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use build_type::BuildType;
pub use build_type::BuildTypeStep;
pub use build_type::ProjectRef;
pub use endpoint::Endpoint;
pub use endpoint::Locator;
pub use endpoint::REST_ROOT;
pub use ident::is_valid_identifier;
pub use ident::random_identifier;
pub use ident::random_secret;
pub use project::ParentProject;
pub use project::Project;
pub use project::ROOT_PROJECT_ID;
pub use records::BuildTypeRecord;
pub use records::ProjectRecord;
pub use records::UserRecord;
pub use role::RoleAssignment;
pub use role::RoleId;
pub use role::RoleScope;
pub use role::Roles;
pub use user::User;
