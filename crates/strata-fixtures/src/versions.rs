// crates/strata-fixtures/src/versions.rs
// ============================================================================
// Module: Version Family
// Description: Declared versions and materialized files for `versioned`.
// Purpose: Keep the version family's irregular shape in one place.
// Dependencies: crate::templates, serde_json
// ============================================================================

//! ## Overview
//! The `versioned` model declares seven version identifiers in its schema
//! entry but only three of them exist as files on disk. The identifiers mix
//! YAML scalar types on purpose: integers, a float, and quoted strings must
//! all survive parsing without normalization, so `5.0` and `"5.0"` remain
//! distinct versions.
//!
//! The materialized files are irregular by design. The file suffix does not
//! track directory depth (`versioned_v3.sql` sits at the project root while
//! `versioned_v1.sql` is nested two levels down), and each file borrows the
//! body of a neighboring model instead of carrying its own text.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde_json::Number;
use serde_json::Value;

use crate::templates::BASE_USERS_SQL;
use crate::templates::NESTED_USERS_SQL;
use crate::templates::SUBDIR_SQL;

// ============================================================================
// SECTION: Version Tags
// ============================================================================

/// Name of the model that carries the version family.
pub const VERSIONED_MODEL: &str = "versioned";

/// One declared version identifier, preserving its YAML scalar type.
///
/// # Invariants
/// - `quoted` tags stay strings after parsing; unquoted tags parse as YAML
///   numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VersionTag {
    /// Identifier text without surrounding quotes.
    literal: &'static str,
    /// Whether the schema document quotes the identifier.
    quoted: bool,
}

impl VersionTag {
    /// Creates a tag for an unquoted YAML scalar.
    #[must_use]
    pub const fn unquoted(literal: &'static str) -> Self {
        Self {
            literal,
            quoted: false,
        }
    }

    /// Creates a tag for a quoted YAML string.
    #[must_use]
    pub const fn quoted(literal: &'static str) -> Self {
        Self {
            literal,
            quoted: true,
        }
    }

    /// Returns the identifier text without quotes.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        self.literal
    }

    /// Returns true when the schema document quotes this identifier.
    #[must_use]
    pub const fn is_quoted(&self) -> bool {
        self.quoted
    }

    /// Renders the identifier the way the schema document spells it.
    #[must_use]
    pub fn yaml_literal(&self) -> String {
        if self.quoted {
            format!("\"{}\"", self.literal)
        } else {
            self.literal.to_string()
        }
    }

    /// Returns the JSON value this identifier parses to.
    ///
    /// Quoted tags become strings. Unquoted tags become integers when the
    /// literal has no fractional part and floats otherwise.
    #[must_use]
    pub fn as_value(&self) -> Value {
        if self.quoted {
            return Value::String(self.literal.to_string());
        }
        if let Ok(int) = self.literal.parse::<i64>() {
            return Value::Number(Number::from(int));
        }
        match self.literal.parse::<f64>().ok().and_then(Number::from_f64) {
            Some(number) => Value::Number(number),
            None => Value::String(self.literal.to_string()),
        }
    }
}

/// Every version identifier declared in the schema document, in declaration
/// order.
pub const DECLARED_VERSIONS: [VersionTag; 7] = [
    VersionTag::unquoted("1"),
    VersionTag::unquoted("2"),
    VersionTag::unquoted("3"),
    VersionTag::unquoted("4.5"),
    VersionTag::quoted("5.0"),
    VersionTag::unquoted("21"),
    VersionTag::quoted("test"),
];

/// The version pinned as `latest_version` in the schema document.
///
/// Deliberately not the highest declared identifier, so latest-version logic
/// cannot be a max over the list.
pub const LATEST_VERSION: VersionTag = VersionTag::unquoted("2");

// ============================================================================
// SECTION: Materialized Files
// ============================================================================

/// Directory level a version file is placed at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// Project root.
    TopLevel,
    /// Inside `test/`.
    TestDir,
    /// Inside `test/subdir/`.
    TestSubdir,
}

impl Placement {
    /// Returns the slash-joined directory path relative to the project root.
    ///
    /// `TopLevel` returns the empty string.
    #[must_use]
    pub const fn relative_dir(&self) -> &'static str {
        match self {
            Self::TopLevel => "",
            Self::TestDir => "test",
            Self::TestSubdir => "test/subdir",
        }
    }
}

/// One version file materialized in the fixture project.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VersionedFile {
    /// File name, including the `_v<N>` suffix and extension.
    file_name: &'static str,
    /// Declared version this file materializes.
    version: VersionTag,
    /// Directory level the file is placed at.
    placement: Placement,
    /// Body text, borrowed from a neighboring model template.
    body: &'static str,
}

impl VersionedFile {
    /// Creates a version file entry.
    #[must_use]
    const fn new(
        file_name: &'static str,
        version: VersionTag,
        placement: Placement,
        body: &'static str,
    ) -> Self {
        Self {
            file_name,
            version,
            placement,
            body,
        }
    }

    /// Returns the file name.
    #[must_use]
    pub const fn file_name(&self) -> &'static str {
        self.file_name
    }

    /// Returns the declared version this file materializes.
    #[must_use]
    pub const fn version(&self) -> VersionTag {
        self.version
    }

    /// Returns the directory level the file is placed at.
    #[must_use]
    pub const fn placement(&self) -> Placement {
        self.placement
    }

    /// Returns the body text.
    #[must_use]
    pub const fn body(&self) -> &'static str {
        self.body
    }

    /// Returns the slash-joined path of this file relative to the project
    /// root.
    #[must_use]
    pub fn relative_path(&self) -> String {
        let dir = self.placement.relative_dir();
        if dir.is_empty() {
            self.file_name.to_string()
        } else {
            format!("{dir}/{}", self.file_name)
        }
    }
}

/// The three version files present in the fixture project.
///
/// Suffix order is the reverse of nesting depth: `v3` at the root, `v2` one
/// level down, `v1` two levels down.
pub const VERSION_FILES: [VersionedFile; 3] = [
    VersionedFile::new(
        "versioned_v3.sql",
        VersionTag::unquoted("3"),
        Placement::TopLevel,
        BASE_USERS_SQL,
    ),
    VersionedFile::new(
        "versioned_v2.sql",
        VersionTag::unquoted("2"),
        Placement::TestDir,
        SUBDIR_SQL,
    ),
    VersionedFile::new(
        "versioned_v1.sql",
        VersionTag::unquoted("1"),
        Placement::TestSubdir,
        NESTED_USERS_SQL,
    ),
];
