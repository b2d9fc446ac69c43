// crates/strata-fixtures/src/tree.rs
// ============================================================================
// Module: Project Tree
// Description: Typed directory tree of project source files.
// Purpose: Resolve file-versus-directory ambiguity at the type level.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! A project tree maps relative path segments to nodes, where a node is
//! either a file with its full text content or a nested subtree. The map is a
//! `BTreeMap`, so names are unique within a level and iteration order is
//! deterministic. Trees are assembled once by a fixture provider and treated
//! as read-only by every consumer.
//!
//! Serialization is shape-preserving: a tree serializes as a nested mapping
//! of names to either strings (files) or further mappings (directories).

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;

use serde::Deserialize;
use serde::Serialize;

// ============================================================================
// SECTION: Node Type
// ============================================================================

/// A single entry in a project tree.
///
/// # Invariants
/// - `File` holds the complete text content of one source file.
/// - `Dir` holds a nested tree; nesting depth is unbounded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProjectNode {
    /// A file leaf with its full text content.
    File(String),
    /// A nested directory subtree.
    Dir(ProjectTree),
}

impl ProjectNode {
    /// Returns the file content when this node is a file.
    #[must_use]
    pub fn as_file(&self) -> Option<&str> {
        match self {
            Self::File(content) => Some(content.as_str()),
            Self::Dir(_) => None,
        }
    }

    /// Returns the subtree when this node is a directory.
    #[must_use]
    pub const fn as_dir(&self) -> Option<&ProjectTree> {
        match self {
            Self::File(_) => None,
            Self::Dir(tree) => Some(tree),
        }
    }
}

// ============================================================================
// SECTION: Tree Type
// ============================================================================

/// A directory tree mapping entry names to nodes.
///
/// # Invariants
/// - Entry names are unique within a level; inserting an existing name
///   replaces the previous node.
/// - Iteration order is lexicographic by entry name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProjectTree {
    /// Entries at this level, keyed by relative path segment.
    entries: BTreeMap<String, ProjectNode>,
}

impl ProjectTree {
    /// Creates an empty tree.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Inserts a file entry, replacing any previous node under `name`.
    pub fn insert_file(&mut self, name: impl Into<String>, content: impl Into<String>) {
        self.entries.insert(name.into(), ProjectNode::File(content.into()));
    }

    /// Inserts a directory entry, replacing any previous node under `name`.
    pub fn insert_dir(&mut self, name: impl Into<String>, subtree: Self) {
        self.entries.insert(name.into(), ProjectNode::Dir(subtree));
    }

    /// Returns the node stored under `name` at this level.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&ProjectNode> {
        self.entries.get(name)
    }

    /// Returns the file content stored under `name` at this level.
    #[must_use]
    pub fn file(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(ProjectNode::as_file)
    }

    /// Returns the subtree stored under `name` at this level.
    #[must_use]
    pub fn subtree(&self, name: &str) -> Option<&Self> {
        self.get(name).and_then(ProjectNode::as_dir)
    }

    /// Resolves a slash-separated relative path to a node.
    ///
    /// Empty segments are rejected, so paths such as `a//b` resolve to
    /// `None` rather than skipping a level.
    #[must_use]
    pub fn node_at(&self, path: &str) -> Option<&ProjectNode> {
        let mut segments = path.split('/');
        let first = segments.next()?;
        if first.is_empty() {
            return None;
        }
        let mut node = self.get(first)?;
        for segment in segments {
            if segment.is_empty() {
                return None;
            }
            node = node.as_dir()?.get(segment)?;
        }
        Some(node)
    }

    /// Returns the number of entries at this level.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true when this level has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over the entries at this level in name order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &ProjectNode)> {
        self.entries.iter().map(|(name, node)| (name.as_str(), node))
    }

    /// Returns every file in the tree as `(relative path, content)` pairs.
    ///
    /// Traversal is depth-first with lexicographic order within each level,
    /// so the result is deterministic for a given tree. Paths join segments
    /// with `/` regardless of platform.
    #[must_use]
    pub fn files(&self) -> Vec<(String, &str)> {
        let mut out = Vec::new();
        collect_files("", self, &mut out);
        out
    }

    /// Returns every directory in the tree as a slash-joined relative path.
    ///
    /// Parent directories precede their children.
    #[must_use]
    pub fn directories(&self) -> Vec<String> {
        let mut out = Vec::new();
        collect_directories("", self, &mut out);
        out
    }

    /// Returns the total number of files across all levels.
    #[must_use]
    pub fn file_count(&self) -> usize {
        self.entries
            .values()
            .map(|node| match node {
                ProjectNode::File(_) => 1,
                ProjectNode::Dir(subtree) => subtree.file_count(),
            })
            .sum()
    }
}

// ============================================================================
// SECTION: Traversal Helpers
// ============================================================================

/// Appends `(path, content)` pairs for every file beneath `tree`.
fn collect_files<'tree>(
    prefix: &str,
    tree: &'tree ProjectTree,
    out: &mut Vec<(String, &'tree str)>,
) {
    for (name, node) in &tree.entries {
        let path = join_path(prefix, name);
        match node {
            ProjectNode::File(content) => out.push((path, content.as_str())),
            ProjectNode::Dir(subtree) => collect_files(&path, subtree, out),
        }
    }
}

/// Appends relative paths for every directory beneath `tree`.
fn collect_directories(prefix: &str, tree: &ProjectTree, out: &mut Vec<String>) {
    for (name, node) in &tree.entries {
        if let ProjectNode::Dir(subtree) = node {
            let path = join_path(prefix, name);
            out.push(path.clone());
            collect_directories(&path, subtree, out);
        }
    }
}

/// Joins a path prefix and a segment with `/`, eliding an empty prefix.
fn join_path(prefix: &str, segment: &str) -> String {
    if prefix.is_empty() {
        segment.to_string()
    } else {
        format!("{prefix}/{segment}")
    }
}
