// system-tests/src/config/env.rs
// ============================================================================
// Module: System Test Environment
// Description: Environment-backed configuration for system tests.
// Purpose: Centralize env parsing with strict UTF-8 validation.
// Dependencies: std
// ============================================================================

//! ## Overview
//! Environment values are parsed with strict UTF-8 enforcement to avoid silent
//! misconfiguration. Invalid UTF-8 fails closed.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

// ============================================================================
// SECTION: Environment Constants
// ============================================================================

/// Environment keys for system test configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SystemTestEnv {
    /// Optional live server root; the in-process stub is used when unset.
    BaseUrl,
    /// Super-user token for the live server.
    SuperUserToken,
    /// Optional timeout override in seconds (positive integer).
    TimeoutSeconds,
    /// Optional run root override for artifacts.
    RunRoot,
}

impl SystemTestEnv {
    /// Returns the canonical environment variable name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::BaseUrl => "BUILDCHECK_BASE_URL",
            Self::SuperUserToken => "BUILDCHECK_SUPER_USER_TOKEN",
            Self::TimeoutSeconds => "BUILDCHECK_TIMEOUT_SEC",
            Self::RunRoot => "BUILDCHECK_RUN_ROOT",
        }
    }
}

// ============================================================================
// SECTION: Config Types
// ============================================================================

/// Typed system test configuration derived from environment variables.
///
/// # Invariants
/// - `super_user_token` is `Some` whenever `base_url` is `Some`.
#[derive(Clone, PartialEq, Eq, Default)]
pub struct SystemTestConfig {
    /// Optional live server root.
    pub base_url: Option<String>,
    /// Super-user token for the live server.
    pub super_user_token: Option<String>,
    /// Optional timeout override in seconds (positive integer).
    pub timeout: Option<Duration>,
    /// Optional run root override.
    pub run_root: Option<PathBuf>,
}

impl SystemTestConfig {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error when an environment value is not valid UTF-8, is empty,
    /// or fails validation (for example, an invalid timeout or a base URL
    /// without a super-user token).
    pub fn load() -> Result<Self, String> {
        let base_url = read_env_nonempty(SystemTestEnv::BaseUrl.as_str())?;
        let super_user_token = read_env_nonempty(SystemTestEnv::SuperUserToken.as_str())?;
        let timeout = read_env_nonempty(SystemTestEnv::TimeoutSeconds.as_str())?
            .map(|value| parse_timeout_seconds(SystemTestEnv::TimeoutSeconds.as_str(), &value))
            .transpose()?;
        let run_root = read_env_nonempty(SystemTestEnv::RunRoot.as_str())?.map(PathBuf::from);
        if base_url.is_some() && super_user_token.is_none() {
            return Err(format!(
                "{} is required when {} is set",
                SystemTestEnv::SuperUserToken.as_str(),
                SystemTestEnv::BaseUrl.as_str()
            ));
        }
        Ok(Self {
            base_url,
            super_user_token,
            timeout,
            run_root,
        })
    }

    /// Returns true when scenarios target a live server.
    #[must_use]
    pub const fn is_live(&self) -> bool {
        self.base_url.is_some()
    }
}

impl fmt::Debug for SystemTestConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SystemTestConfig")
            .field("base_url", &self.base_url)
            .field("super_user_token", &self.super_user_token.as_ref().map(|_| "<redacted>"))
            .field("timeout", &self.timeout)
            .field("run_root", &self.run_root)
            .finish()
    }
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Reads an environment variable and enforces UTF-8 validity.
///
/// # Errors
///
/// Returns an error when the environment variable contains invalid UTF-8.
pub fn read_env_strict(name: &str) -> Result<Option<String>, String> {
    std::env::var_os(name).map_or(Ok(None), |raw| {
        raw.into_string().map(Some).map_err(|_| format!("{name} must be valid UTF-8"))
    })
}

/// Reads an environment variable and rejects empty values.
///
/// # Errors
///
/// Returns an error when the variable is set but empty or whitespace.
fn read_env_nonempty(name: &str) -> Result<Option<String>, String> {
    match read_env_strict(name)? {
        Some(value) if value.trim().is_empty() => Err(format!("{name} must not be empty")),
        Some(value) => Ok(Some(value.trim().to_string())),
        None => Ok(None),
    }
}

/// Parses a positive timeout value from an environment variable string.
///
/// # Errors
///
/// Returns an error when the value is missing, non-numeric, or zero.
fn parse_timeout_seconds(name: &str, raw: &str) -> Result<Duration, String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(format!("{name} must be a positive integer number of seconds"));
    }
    let secs: u64 = trimmed
        .parse()
        .map_err(|_| format!("{name} must be a positive integer number of seconds"))?;
    if secs == 0 {
        return Err(format!("{name} must be greater than zero"));
    }
    Ok(Duration::from_secs(secs))
}
