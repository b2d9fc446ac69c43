// crates/strata-fixtures/src/selection.rs
// ============================================================================
// Module: Selection Fixtures
// Description: Provider assembling the graph selection fixture project.
// Purpose: Produce the model tree and seed bundle consumed by harnesses.
// Dependencies: crate::{data, error, seeds, templates, tree, versions}
// ============================================================================

//! ## Overview
//! [`SelectionFixtures`] assembles the complete fixture project: a model
//! tree with eleven top-level files plus the nested `test/` hierarchy, and a
//! seed bundle pairing CSV data with its properties document. Assembly is
//! pure; every call to [`SelectionFixtures::models`] builds an equal tree.
//! Suites that share one project across many cases use
//! [`SelectionFixtures::shared_models`], which caches a single tree for the
//! life of the process.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::path::Path;
use std::sync::OnceLock;

use crate::data::SAMPLE_SEED_CSV;
use crate::data::SAMPLE_SUMMARY_EXPECTED_CSV;
use crate::error::FixtureError;
use crate::seeds::REQUIRED_SEED_FILES;
use crate::seeds::SEED_PROPERTIES_FILE;
use crate::seeds::SeedBundle;
use crate::seeds::read_seed_file;
use crate::templates::ALTERNATIVE_USERS_SQL;
use crate::templates::BASE_USERS_SQL;
use crate::templates::EMAILS_ALT_SQL;
use crate::templates::EMAILS_SQL;
use crate::templates::NESTED_USERS_SQL;
use crate::templates::NEVER_SELECTED_SQL;
use crate::templates::PATCH_PATH_SELECTION_SCHEMA_YML;
use crate::templates::PROPERTIES_YML;
use crate::templates::SCHEMA_YML;
use crate::templates::SUBDIR_SQL;
use crate::templates::USERS_ROLLUP_DEPENDENCY_SQL;
use crate::templates::USERS_ROLLUP_SQL;
use crate::templates::USERS_SQL;
use crate::tree::ProjectTree;
use crate::versions::Placement;
use crate::versions::VERSION_FILES;

// ============================================================================
// SECTION: Sample Payloads
// ============================================================================

/// Built-in content for each required seed CSV, in bundle order.
const SAMPLE_PAYLOADS: [(&str, &str); 2] = [
    ("seed.csv", SAMPLE_SEED_CSV),
    ("summary_expected.csv", SAMPLE_SUMMARY_EXPECTED_CSV),
];

// ============================================================================
// SECTION: Provider
// ============================================================================

/// Provider for the graph selection fixture project.
///
/// # Invariants
/// - [`SelectionFixtures::models`] is deterministic: repeated calls build
///   equal trees.
/// - Version files are placed according to [`VERSION_FILES`], never inlined
///   by hand.
#[derive(Debug, Clone, Copy)]
pub struct SelectionFixtures;

impl SelectionFixtures {
    /// Assembles the fixture model tree.
    ///
    /// The tree holds eleven top-level files, a `test/` directory with two
    /// files, and a `test/subdir/` directory with two more. Three of those
    /// files belong to the `versioned` family and take their names, bodies,
    /// and placements from [`VERSION_FILES`].
    #[must_use]
    pub fn models() -> ProjectTree {
        let mut subdir = ProjectTree::new();
        subdir.insert_file("nested_users.sql", NESTED_USERS_SQL);

        let mut test_dir = ProjectTree::new();
        test_dir.insert_file("subdir.sql", SUBDIR_SQL);

        let mut root = ProjectTree::new();
        root.insert_file("schema.yml", SCHEMA_YML);
        root.insert_file("patch_path_selection_schema.yml", PATCH_PATH_SELECTION_SCHEMA_YML);
        root.insert_file("base_users.sql", BASE_USERS_SQL);
        root.insert_file("users.sql", USERS_SQL);
        root.insert_file("users_rollup.sql", USERS_ROLLUP_SQL);
        root.insert_file("users_rollup_dependency.sql", USERS_ROLLUP_DEPENDENCY_SQL);
        root.insert_file("emails.sql", EMAILS_SQL);
        root.insert_file("emails_alt.sql", EMAILS_ALT_SQL);
        root.insert_file("alternative.users.sql", ALTERNATIVE_USERS_SQL);
        root.insert_file("never_selected.sql", NEVER_SELECTED_SQL);

        for file in &VERSION_FILES {
            match file.placement() {
                Placement::TopLevel => root.insert_file(file.file_name(), file.body()),
                Placement::TestDir => test_dir.insert_file(file.file_name(), file.body()),
                Placement::TestSubdir => subdir.insert_file(file.file_name(), file.body()),
            }
        }

        test_dir.insert_dir("subdir", subdir);
        root.insert_dir("test", test_dir);
        root
    }

    /// Returns the process-wide shared model tree.
    ///
    /// The tree is built once on first use and reused by every later caller,
    /// mirroring a suite-scoped fixture.
    #[must_use]
    pub fn shared_models() -> &'static ProjectTree {
        /// Lazily built tree shared across the process.
        static SHARED: OnceLock<ProjectTree> = OnceLock::new();
        SHARED.get_or_init(Self::models)
    }

    /// Assembles the seed bundle from a data directory.
    ///
    /// The bundle holds the inline properties document plus each file named
    /// in [`REQUIRED_SEED_FILES`], read from `data_dir`.
    ///
    /// # Errors
    /// Returns [`FixtureError::SeedNotFound`] when a required CSV is absent
    /// from `data_dir` and [`FixtureError::Io`] for any other read failure.
    pub fn seeds(data_dir: &Path) -> Result<SeedBundle, FixtureError> {
        let mut bundle = SeedBundle::new();
        bundle.insert(SEED_PROPERTIES_FILE, PROPERTIES_YML);
        for file_name in REQUIRED_SEED_FILES {
            let content = read_seed_file(data_dir, file_name)?;
            bundle.insert(file_name, content);
        }
        Ok(bundle)
    }

    /// Assembles the seed bundle from the built-in sample payloads.
    ///
    /// Used when no data directory is configured. The sample summary matches
    /// the sample seed by construction.
    #[must_use]
    pub fn sample_seeds() -> SeedBundle {
        let mut bundle = SeedBundle::new();
        bundle.insert(SEED_PROPERTIES_FILE, PROPERTIES_YML);
        for (file_name, content) in SAMPLE_PAYLOADS {
            bundle.insert(file_name, content);
        }
        bundle
    }
}
