// crates/strata-fixtures/tests/proptest_tree.rs
// ============================================================================
// Module: Project Tree Property-Based Tests
// Description: Property tests for tree traversal and serialization.
// Purpose: Detect walk, lookup, and roundtrip defects across random trees.
// ============================================================================

//! Property-based tests for project tree invariants.

#![allow(
    clippy::panic,
    clippy::print_stdout,
    clippy::print_stderr,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::use_debug,
    clippy::dbg_macro,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    reason = "Test-only assertions and helpers are permitted."
)]

use std::collections::BTreeMap;

use proptest::prelude::*;
use strata_fixtures::ProjectNode;
use strata_fixtures::ProjectTree;

/// Files per level; keys are drawn from a range disjoint from directory keys
/// so random inserts never collide.
fn file_map_strategy() -> impl Strategy<Value = BTreeMap<String, String>> {
    prop::collection::btree_map("[a-m]{1,6}", "[ -~]{0,32}", 0 .. 6)
}

/// Directories with their own file maps; keys never overlap file keys.
fn dir_map_strategy() -> impl Strategy<Value = BTreeMap<String, BTreeMap<String, String>>> {
    prop::collection::btree_map("[n-z]{1,6}", file_map_strategy(), 0 .. 4)
}

fn build_tree(
    files: &BTreeMap<String, String>,
    dirs: &BTreeMap<String, BTreeMap<String, String>>,
) -> ProjectTree {
    let mut tree = ProjectTree::new();
    for (name, content) in files {
        tree.insert_file(name, content);
    }
    for (name, entries) in dirs {
        let mut subtree = ProjectTree::new();
        for (file_name, content) in entries {
            subtree.insert_file(file_name, content);
        }
        tree.insert_dir(name, subtree);
    }
    tree
}

proptest! {
    #[test]
    fn walk_length_matches_file_count(
        files in file_map_strategy(),
        dirs in dir_map_strategy(),
    ) {
        let tree = build_tree(&files, &dirs);
        let nested: usize = dirs.values().map(BTreeMap::len).sum();
        prop_assert_eq!(tree.len(), files.len() + dirs.len());
        prop_assert_eq!(tree.file_count(), files.len() + nested);
        prop_assert_eq!(tree.files().len(), tree.file_count());
    }

    #[test]
    fn walked_files_resolve_by_path(
        files in file_map_strategy(),
        dirs in dir_map_strategy(),
    ) {
        let tree = build_tree(&files, &dirs);
        for (path, content) in tree.files() {
            let node = tree.node_at(&path);
            prop_assert_eq!(node.and_then(ProjectNode::as_file), Some(content));
        }
    }

    #[test]
    fn walked_directories_resolve_to_subtrees(
        files in file_map_strategy(),
        dirs in dir_map_strategy(),
    ) {
        let tree = build_tree(&files, &dirs);
        let walked = tree.directories();
        prop_assert_eq!(walked.len(), dirs.len());
        for path in walked {
            let node = tree.node_at(&path);
            prop_assert!(node.and_then(ProjectNode::as_dir).is_some());
        }
    }

    #[test]
    fn json_roundtrip_preserves_shape(
        files in file_map_strategy(),
        dirs in dir_map_strategy(),
    ) {
        let tree = build_tree(&files, &dirs);
        let encoded = serde_json::to_string(&tree).expect("tree serializes");
        let decoded: ProjectTree = serde_json::from_str(&encoded).expect("tree deserializes");
        prop_assert_eq!(decoded, tree);
    }
}
