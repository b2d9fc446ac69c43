// crates/strata-harness/src/config/env.rs
// ============================================================================
// Module: Harness Environment
// Description: Environment-backed configuration for the testkit harness.
// Purpose: Centralize env parsing with strict UTF-8 validation.
// Dependencies: std
// ============================================================================

//! ## Overview
//! Environment values are parsed with strict UTF-8 enforcement to avoid
//! silent misconfiguration. Invalid UTF-8 fails closed.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::path::PathBuf;

use crate::error::HarnessError;

// ============================================================================
// SECTION: Environment Constants
// ============================================================================

/// Environment keys for harness configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HarnessEnv {
    /// Optional directory holding seed CSV data.
    DataDir,
    /// Keep scratch directories after drop (`true`/`false` or `1`/`0`).
    KeepScratch,
}

impl HarnessEnv {
    /// Returns the canonical environment variable name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::DataDir => "STRATA_TESTKIT_DATA_DIR",
            Self::KeepScratch => "STRATA_TESTKIT_KEEP_SCRATCH",
        }
    }
}

// ============================================================================
// SECTION: Config Types
// ============================================================================

/// Typed harness configuration derived from environment variables.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HarnessConfig {
    /// Optional directory holding seed CSV data.
    ///
    /// When absent, provisioning falls back to the built-in sample
    /// payloads.
    pub data_dir: Option<PathBuf>,
    /// Keep scratch directories after drop.
    pub keep_scratch: bool,
}

impl HarnessConfig {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    /// Returns [`HarnessError::Config`] when a value is not valid UTF-8, is
    /// empty, or is not a recognized boolean literal.
    pub fn load() -> Result<Self, HarnessError> {
        let data_dir = read_env_nonempty(HarnessEnv::DataDir.as_str())
            .map_err(HarnessError::Config)?
            .map(PathBuf::from);
        let keep_scratch = parse_bool_env(
            HarnessEnv::KeepScratch.as_str(),
            read_env_nonempty(HarnessEnv::KeepScratch.as_str()).map_err(HarnessError::Config)?,
        )
        .map_err(HarnessError::Config)?;
        Ok(Self {
            data_dir,
            keep_scratch,
        })
    }
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Reads an environment variable and enforces UTF-8 validity.
///
/// # Errors
/// Returns an error when the environment variable contains invalid UTF-8.
pub fn read_env_strict(name: &str) -> Result<Option<String>, String> {
    std::env::var_os(name).map_or(Ok(None), |raw| {
        raw.into_string().map(Some).map_err(|_| format!("{name} must be valid UTF-8"))
    })
}

/// Reads an environment variable and rejects empty values.
///
/// # Errors
/// Returns an error when the variable is set but empty or whitespace.
fn read_env_nonempty(name: &str) -> Result<Option<String>, String> {
    match read_env_strict(name)? {
        Some(value) if value.trim().is_empty() => Err(format!("{name} must not be empty")),
        Some(value) => Ok(Some(value)),
        None => Ok(None),
    }
}

/// Parses a boolean environment variable with an unset-means-false default.
///
/// # Errors
/// Returns an error when the value is not a recognized boolean literal.
fn parse_bool_env(name: &str, raw: Option<String>) -> Result<bool, String> {
    let Some(value) = raw else {
        return Ok(false);
    };
    let trimmed = value.trim();
    if trimmed.eq_ignore_ascii_case("true") || trimmed == "1" {
        return Ok(true);
    }
    if trimmed.eq_ignore_ascii_case("false") || trimmed == "0" {
        return Ok(false);
    }
    Err(format!("{name} must be 1, 0, true, or false"))
}
