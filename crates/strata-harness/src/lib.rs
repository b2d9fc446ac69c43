// crates/strata-harness/src/lib.rs
// ============================================================================
// Module: Harness Root
// Description: Public API surface for the testkit harness crate.
// Purpose: Wire together configuration, errors, and scratch provisioning.
// Dependencies: crate::{config, error, project}
// ============================================================================

//! ## Overview
//! This crate turns fixture data into directories an engine under test can
//! open: [`ScratchProject`] provisions a model tree and seed bundle onto
//! disk, [`HarnessConfig`] reads the environment knobs controlling where
//! seed data comes from and whether scratch directories survive the run.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod config;
pub mod error;
pub mod project;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use config::HarnessConfig;
pub use config::HarnessEnv;
pub use config::read_env_strict;
pub use error::HarnessError;
pub use project::MODELS_DIR;
pub use project::SEEDS_DIR;
pub use project::ScratchProject;
pub use project::write_bundle;
pub use project::write_tree;
