// crates/strata-fixtures/src/schema.rs
// ============================================================================
// Module: Schema Views
// Description: Typed views over the fixture YAML documents.
// Purpose: Let tests assert on document structure without string scraping.
// Dependencies: crate::error, serde, serde_json, serde_yaml
// ============================================================================

//! ## Overview
//! The fixture schema documents are authored as text in
//! [`crate::templates`]. This module parses that text into typed structures
//! so tests can assert on groups, model patches, version declarations,
//! sources, and exposures directly.
//!
//! The shapes here are deliberately permissive. Owners accept arbitrary
//! extra keys, version identifiers keep their YAML scalar type, and column
//! test entries stay dynamic because they mix bare strings with configured
//! mappings.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;

use serde::Deserialize;
use serde::Serialize;
use serde_json::Value;

use crate::error::FixtureError;

// ============================================================================
// SECTION: Schema Document
// ============================================================================

/// Parsed form of a project schema document.
///
/// # Invariants
/// - Section order within each list matches the document text.
/// - Absent sections parse as empty lists rather than errors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaDocument {
    /// Schema format version.
    pub version: u32,
    /// Group definitions.
    #[serde(default)]
    pub groups: Vec<GroupEntry>,
    /// Model patches.
    #[serde(default)]
    pub models: Vec<ModelEntry>,
    /// Source definitions.
    #[serde(default)]
    pub sources: Vec<SourceEntry>,
    /// Exposure definitions.
    #[serde(default)]
    pub exposures: Vec<ExposureEntry>,
}

impl SchemaDocument {
    /// Returns the group with the given name.
    #[must_use]
    pub fn group(&self, name: &str) -> Option<&GroupEntry> {
        self.groups.iter().find(|group| group.name == name)
    }

    /// Returns the model patch with the given name.
    #[must_use]
    pub fn model(&self, name: &str) -> Option<&ModelEntry> {
        self.models.iter().find(|model| model.name == name)
    }

    /// Returns the source with the given name.
    #[must_use]
    pub fn source(&self, name: &str) -> Option<&SourceEntry> {
        self.sources.iter().find(|source| source.name == name)
    }

    /// Returns the exposure with the given name.
    #[must_use]
    pub fn exposure(&self, name: &str) -> Option<&ExposureEntry> {
        self.exposures.iter().find(|exposure| exposure.name == name)
    }
}

/// A group definition binding a name to an owner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupEntry {
    /// Group name.
    pub name: String,
    /// Group owner.
    pub owner: Owner,
}

/// Owner metadata for a group or exposure.
///
/// # Invariants
/// - Every standard field is optional; exposures usually carry only `email`.
/// - Unrecognized keys are preserved in `extras` instead of being rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Owner {
    /// Display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Contact email.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Slack channel or handle.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slack: Option<String>,
    /// GitHub handle.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
    /// Any additional keys the document author chose to include.
    #[serde(flatten)]
    pub extras: BTreeMap<String, Value>,
}

/// A model patch: group membership, column tests, and version declarations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelEntry {
    /// Model name.
    pub name: String,
    /// Group the model belongs to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
    /// Model description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Version pinned as latest, for versioned models.
    ///
    /// Kept dynamic because identifiers mix integers, floats, and strings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latest_version: Option<Value>,
    /// Declared versions, for versioned models.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub versions: Vec<VersionEntry>,
    /// Column patches.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub columns: Vec<ColumnEntry>,
}

/// A column patch with its data tests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnEntry {
    /// Column name.
    pub name: String,
    /// Data tests attached to the column.
    ///
    /// Entries are dynamic: a bare test name is a string while a configured
    /// test is a single-key mapping.
    #[serde(default)]
    pub tests: Vec<Value>,
}

/// One declared version of a versioned model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionEntry {
    /// Version identifier with its YAML scalar type preserved.
    pub v: Value,
}

/// A source definition with its tables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceEntry {
    /// Source name.
    pub name: String,
    /// Schema expression, typically a runtime lookup left unrendered.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,
    /// Tables exposed by the source.
    #[serde(default)]
    pub tables: Vec<SourceTable>,
}

/// A table inside a source definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceTable {
    /// Table name.
    pub name: String,
}

/// An exposure definition with its upstream references.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExposureEntry {
    /// Exposure name.
    pub name: String,
    /// Exposure kind, such as `dashboard` or `ml`.
    #[serde(rename = "type")]
    pub kind: String,
    /// Upstream references as unrendered `ref(...)` and `source(...)` calls.
    #[serde(default)]
    pub depends_on: Vec<String>,
    /// Exposure owner.
    pub owner: Owner,
}

// ============================================================================
// SECTION: Seed Properties Document
// ============================================================================

/// Parsed form of a seed properties document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedPropertiesDocument {
    /// Schema format version.
    pub version: u32,
    /// Seed entries.
    #[serde(default)]
    pub seeds: Vec<SeedEntry>,
}

impl SeedPropertiesDocument {
    /// Returns the seed entry with the given name.
    #[must_use]
    pub fn seed(&self, name: &str) -> Option<&SeedEntry> {
        self.seeds.iter().find(|seed| seed.name == name)
    }
}

/// A seed entry with its configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedEntry {
    /// Seed name.
    pub name: String,
    /// Seed configuration.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config: Option<SeedConfig>,
}

/// Seed configuration pinning column types.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedConfig {
    /// Column name to warehouse type overrides.
    #[serde(default)]
    pub column_types: BTreeMap<String, String>,
}

// ============================================================================
// SECTION: Parsing
// ============================================================================

/// Parses a schema document from YAML text.
///
/// # Errors
/// Returns [`FixtureError::Yaml`] when the text is not valid YAML or does
/// not match the schema document shape.
///
/// # Examples
/// ```
/// use strata_fixtures::schema::parse_schema;
/// use strata_fixtures::templates::SCHEMA_YML;
///
/// # fn main() -> Result<(), strata_fixtures::FixtureError> {
/// let document = parse_schema(SCHEMA_YML)?;
/// assert_eq!(document.version, 2);
/// assert!(document.model("users").is_some());
/// # Ok(())
/// # }
/// ```
pub fn parse_schema(text: &str) -> Result<SchemaDocument, FixtureError> {
    serde_yaml::from_str(text).map_err(|err| FixtureError::Yaml(err.to_string()))
}

/// Parses a seed properties document from YAML text.
///
/// # Errors
/// Returns [`FixtureError::Yaml`] when the text is not valid YAML or does
/// not match the seed properties shape.
pub fn parse_seed_properties(text: &str) -> Result<SeedPropertiesDocument, FixtureError> {
    serde_yaml::from_str(text).map_err(|err| FixtureError::Yaml(err.to_string()))
}
