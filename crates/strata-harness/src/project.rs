// crates/strata-harness/src/project.rs
// ============================================================================
// Module: Scratch Projects
// Description: Materialize fixture trees and seed bundles onto disk.
// Purpose: Give engine suites a ready project directory with known content.
// Dependencies: strata-fixtures, tempfile
// ============================================================================

//! ## Overview
//! A scratch project is a throwaway directory holding one materialized
//! fixture project: the model tree under `models/` and the seed bundle under
//! `seeds/`. The directory is deleted when the project is dropped unless the
//! harness was configured to keep it, in which case it lands under the OS
//! temp root with a process-unique name for post-run inspection.
//!
//! Materialization is faithful to the tree: nesting becomes directories,
//! file content is written byte for byte, and nothing else is created.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fs;
use std::io;
use std::path::Path;
use std::path::PathBuf;
use std::sync::atomic::AtomicUsize;
use std::sync::atomic::Ordering;

use strata_fixtures::ProjectTree;
use strata_fixtures::SeedBundle;
use strata_fixtures::SelectionFixtures;
use tempfile::TempDir;

use crate::config::HarnessConfig;
use crate::error::HarnessError;

// ============================================================================
// SECTION: Layout Constants
// ============================================================================

/// Directory name for materialized model trees.
pub const MODELS_DIR: &str = "models";

/// Directory name for materialized seed bundles.
pub const SEEDS_DIR: &str = "seeds";

/// Name prefix for kept scratch directories.
const SCRATCH_PREFIX: &str = "strata-scratch";

/// Counter distinguishing kept scratch directories within one process.
static SCRATCH_COUNTER: AtomicUsize = AtomicUsize::new(0);

// ============================================================================
// SECTION: Materialization
// ============================================================================

/// Writes a project tree beneath `root`, creating directories as needed.
///
/// Returns the written file paths in walk order: depth-first, lexicographic
/// within each level.
///
/// # Errors
/// Returns [`HarnessError::Io`] when a directory or file cannot be created.
pub fn write_tree(root: &Path, tree: &ProjectTree) -> Result<Vec<PathBuf>, HarnessError> {
    fs::create_dir_all(root).map_err(|err| io_error(root, &err))?;
    for dir in tree.directories() {
        let path = root.join(dir);
        fs::create_dir_all(&path).map_err(|err| io_error(&path, &err))?;
    }
    let mut written = Vec::new();
    for (relative, content) in tree.files() {
        let path = root.join(relative);
        fs::write(&path, content).map_err(|err| io_error(&path, &err))?;
        written.push(path);
    }
    Ok(written)
}

/// Writes a seed bundle beneath `dir`, one file per entry.
///
/// Returns the written file paths in bundle order.
///
/// # Errors
/// Returns [`HarnessError::Io`] when the directory or a file cannot be
/// created.
pub fn write_bundle(dir: &Path, bundle: &SeedBundle) -> Result<Vec<PathBuf>, HarnessError> {
    fs::create_dir_all(dir).map_err(|err| io_error(dir, &err))?;
    let mut written = Vec::new();
    for (name, content) in bundle.entries() {
        let path = dir.join(name);
        fs::write(&path, content).map_err(|err| io_error(&path, &err))?;
        written.push(path);
    }
    Ok(written)
}

// ============================================================================
// SECTION: Scratch Project
// ============================================================================

/// Root directory backing a scratch project.
#[derive(Debug)]
enum ScratchRoot {
    /// Auto-cleaned directory removed when the project drops.
    Temp(TempDir),
    /// Named directory under the OS temp root, left in place after drop.
    Kept(PathBuf),
}

impl ScratchRoot {
    /// Returns the root path.
    fn path(&self) -> &Path {
        match self {
            Self::Temp(temp) => temp.path(),
            Self::Kept(path) => path.as_path(),
        }
    }
}

/// A provisioned project directory with models and seeds on disk.
///
/// # Invariants
/// - `models/` mirrors the provided tree exactly; `seeds/` mirrors the
///   bundle.
/// - The directory outlives the value only when provisioned with
///   keep-scratch enabled.
#[derive(Debug)]
pub struct ScratchProject {
    /// Backing root directory.
    root: ScratchRoot,
    /// Path of the materialized model tree.
    models_dir: PathBuf,
    /// Path of the materialized seed bundle.
    seeds_dir: PathBuf,
}

impl ScratchProject {
    /// Provisions a scratch project from an explicit tree and bundle.
    ///
    /// # Errors
    /// Returns [`HarnessError::Io`] when the scratch directory or any of its
    /// files cannot be created.
    pub fn provision(
        models: &ProjectTree,
        seeds: &SeedBundle,
        keep_scratch: bool,
    ) -> Result<Self, HarnessError> {
        let root = if keep_scratch {
            ScratchRoot::Kept(kept_scratch_dir()?)
        } else {
            let temp = TempDir::new()
                .map_err(|err| HarnessError::Io(format!("scratch root: {err}")))?;
            ScratchRoot::Temp(temp)
        };
        let models_dir = root.path().join(MODELS_DIR);
        let seeds_dir = root.path().join(SEEDS_DIR);
        write_tree(&models_dir, models)?;
        write_bundle(&seeds_dir, seeds)?;
        Ok(Self {
            root,
            models_dir,
            seeds_dir,
        })
    }

    /// Provisions the graph selection fixture project per the harness
    /// configuration.
    ///
    /// Models come from the shared fixture tree. Seeds are read from the
    /// configured data directory when one is set and fall back to the
    /// built-in sample payloads otherwise.
    ///
    /// # Errors
    /// Returns [`HarnessError::Fixture`] when the configured data directory
    /// is missing a required CSV and [`HarnessError::Io`] for any disk
    /// failure.
    pub fn provision_selection(config: &HarnessConfig) -> Result<Self, HarnessError> {
        let seeds = match &config.data_dir {
            Some(dir) => SelectionFixtures::seeds(dir)?,
            None => SelectionFixtures::sample_seeds(),
        };
        Self::provision(SelectionFixtures::shared_models(), &seeds, config.keep_scratch)
    }

    /// Returns the scratch root path.
    #[must_use]
    pub fn root(&self) -> &Path {
        self.root.path()
    }

    /// Returns the materialized models directory.
    #[must_use]
    pub fn models_dir(&self) -> &Path {
        self.models_dir.as_path()
    }

    /// Returns the materialized seeds directory.
    #[must_use]
    pub fn seeds_dir(&self) -> &Path {
        self.seeds_dir.as_path()
    }

    /// Returns true when the scratch directory survives drop.
    #[must_use]
    pub const fn is_kept(&self) -> bool {
        matches!(self.root, ScratchRoot::Kept(_))
    }
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Creates a process-unique kept scratch directory under the OS temp root.
fn kept_scratch_dir() -> Result<PathBuf, HarnessError> {
    let attempt = SCRATCH_COUNTER.fetch_add(1, Ordering::Relaxed);
    let path = std::env::temp_dir()
        .join(format!("{SCRATCH_PREFIX}-{}-{attempt}", std::process::id()));
    fs::create_dir_all(&path).map_err(|err| io_error(&path, &err))?;
    Ok(path)
}

/// Maps an IO failure to a harness error carrying the offending path.
fn io_error(path: &Path, err: &io::Error) -> HarnessError {
    HarnessError::Io(format!("{}: {err}", path.display()))
}
