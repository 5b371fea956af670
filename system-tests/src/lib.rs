// system-tests/src/lib.rs
// ============================================================================
// Module: Buildcheck System Tests Library
// Description: Shared configuration for build-server system test scenarios.
// Purpose: Provide common utilities for Buildcheck system-test binaries.
// Dependencies: std
// ============================================================================

//! ## Overview
//! This crate hosts shared configuration used by the Buildcheck system-test
//! binaries in `system-tests/tests`. Scenarios run against a live server when
//! one is configured and against the in-process stub otherwise.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod config;
