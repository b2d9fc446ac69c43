// crates/strata-fixtures/src/lib.rs
// ============================================================================
// Module: Fixtures Root
// Description: Public API surface for the graph selection fixture crate.
// Purpose: Wire together templates, tree assembly, schema views, and seeds.
// Dependencies: crate::{data, error, schema, seeds, selection, templates, tree, versions}
// ============================================================================

//! ## Overview
//! This crate provides the canonical fixture project used by graph selection
//! suites: a fixed tree of model templates and schema documents plus the
//! seed bundle that backs them. [`SelectionFixtures`] is the entry point;
//! the remaining modules expose the raw template text, the typed document
//! views, and the version family tables that the provider assembles from.
//!
//! Fixture content is data, not behavior. Template tokens such as
//! `{{ ref('users') }}` pass through this crate untouched and are resolved
//! by the engine under test.

// ============================================================================
// SECTION: Core Modules
// ============================================================================

pub mod data;
pub mod error;
pub mod schema;
pub mod seeds;
pub mod selection;
pub mod templates;
pub mod tree;
pub mod versions;


// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use error::FixtureError;
pub use schema::ColumnEntry;
pub use schema::ExposureEntry;
pub use schema::GroupEntry;
pub use schema::ModelEntry;
pub use schema::Owner;
pub use schema::SchemaDocument;
pub use schema::SeedConfig;
pub use schema::SeedEntry;
pub use schema::SeedPropertiesDocument;
pub use schema::SourceEntry;
pub use schema::SourceTable;
pub use schema::VersionEntry;
pub use schema::parse_schema;
pub use schema::parse_seed_properties;
pub use seeds::REQUIRED_SEED_FILES;
pub use seeds::SEED_PROPERTIES_FILE;
pub use seeds::SeedBundle;
pub use seeds::read_seed_file;
pub use selection::SelectionFixtures;
pub use tree::ProjectNode;
pub use tree::ProjectTree;
pub use versions::DECLARED_VERSIONS;
pub use versions::LATEST_VERSION;
pub use versions::Placement;
pub use versions::VERSION_FILES;
pub use versions::VERSIONED_MODEL;
pub use versions::VersionTag;
pub use versions::VersionedFile;
