// crates/strata-fixtures/src/seeds.rs
// ============================================================================
// Module: Seed Bundle
// Description: Named seed documents destined for a project's data directory.
// Purpose: Pair seed CSV payloads with their properties document.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! A seed bundle is a flat mapping from file name to file content. Unlike
//! the model tree it has no nesting; every entry lands directly in the
//! project's seed directory. The bundle always carries the seed properties
//! document plus one entry per required CSV, with CSV content read from a
//! caller-supplied data directory.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use serde::Deserialize;
use serde::Serialize;

use crate::error::FixtureError;

// ============================================================================
// SECTION: File Names
// ============================================================================

/// Name of the seed properties document inside a bundle.
pub const SEED_PROPERTIES_FILE: &str = "properties.yml";

/// CSV files every complete bundle must contain, in bundle order.
pub const REQUIRED_SEED_FILES: [&str; 2] = ["seed.csv", "summary_expected.csv"];

// ============================================================================
// SECTION: Bundle Type
// ============================================================================

/// A flat mapping from seed file name to file content.
///
/// # Invariants
/// - File names are unique; inserting an existing name replaces the content.
/// - Iteration order is lexicographic by file name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SeedBundle {
    /// Entries keyed by file name.
    entries: BTreeMap<String, String>,
}

impl SeedBundle {
    /// Creates an empty bundle.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Inserts a file, replacing any previous content under `name`.
    pub fn insert(&mut self, name: impl Into<String>, content: impl Into<String>) {
        self.entries.insert(name.into(), content.into());
    }

    /// Returns the content stored under `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries.get(name).map(String::as_str)
    }

    /// Returns true when the bundle contains `name`.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Returns the number of files in the bundle.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true when the bundle has no files.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over file names in lexicographic order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Iterates over `(name, content)` pairs in lexicographic order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(name, content)| (name.as_str(), content.as_str()))
    }
}

// ============================================================================
// SECTION: Data Directory Reads
// ============================================================================

/// Reads one seed file from a data directory.
///
/// # Errors
/// Returns [`FixtureError::SeedNotFound`] when the file does not exist and
/// [`FixtureError::Io`] for any other read failure.
pub fn read_seed_file(data_dir: &Path, file_name: &str) -> Result<String, FixtureError> {
    let path = data_dir.join(file_name);
    fs::read_to_string(&path).map_err(|err| {
        if err.kind() == ErrorKind::NotFound {
            FixtureError::SeedNotFound(format!("{file_name} under {}", data_dir.display()))
        } else {
            FixtureError::Io(format!("{}: {err}", path.display()))
        }
    })
}
