// crates/strata-harness/src/config/env_tests.rs
// ============================================================================
// Module: Harness Env Unit Tests
// Description: Unit coverage for strict environment parsing in the harness.
// Purpose: Ensure configuration parsing fails closed on invalid inputs.
// Dependencies: std
// ============================================================================

//! ## Overview
//! Unit coverage for strict environment parsing in the harness.
//! Purpose: Ensure configuration parsing fails closed on invalid inputs.
//! Invariants:
//! - Environment parsing rejects invalid or empty values.
//! - Tests restore environment state after each run.

#![allow(
    clippy::expect_used,
    clippy::unwrap_used,
    reason = "Test-only assertions favor direct unwrap/expect for clarity."
)]

use std::path::PathBuf;
use std::sync::Mutex;
use std::sync::OnceLock;

use super::HarnessConfig;
use super::HarnessEnv;

mod env_mut {
    #![allow(unsafe_code, reason = "Tests mutate process env vars in a controlled scope.")]

    /// Sets an environment variable for the current process.
    pub fn set_var(key: &str, value: &str) {
        // SAFETY: Tests serialize environment mutation via a global lock.
        unsafe {
            std::env::set_var(key, value);
        }
    }

    /// Removes an environment variable from the current process.
    pub fn remove_var(key: &str) {
        // SAFETY: Tests serialize environment mutation via a global lock.
        unsafe {
            std::env::remove_var(key);
        }
    }
}

fn env_lock() -> std::sync::MutexGuard<'static, ()> {
    static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
    LOCK.get_or_init(|| Mutex::new(())).lock().expect("env lock poisoned")
}

struct EnvGuard {
    entries: Vec<(&'static str, Option<String>)>,
}

impl EnvGuard {
    fn new(names: &[&'static str]) -> Self {
        let entries = names.iter().map(|name| (*name, std::env::var(*name).ok())).collect();
        Self {
            entries,
        }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        for (name, value) in self.entries.drain(..) {
            match value {
                Some(value) => env_mut::set_var(name, &value),
                None => env_mut::remove_var(name),
            }
        }
    }
}

fn env_names() -> [&'static str; 2] {
    [HarnessEnv::DataDir.as_str(), HarnessEnv::KeepScratch.as_str()]
}

fn clear_env() {
    for name in env_names() {
        env_mut::remove_var(name);
    }
}

#[test]
fn defaults_apply_when_unset() {
    let _lock = env_lock();
    let _guard = EnvGuard::new(&env_names());
    clear_env();

    let config = HarnessConfig::load().expect("config should load");
    assert_eq!(config.data_dir, None);
    assert!(!config.keep_scratch);
}

#[test]
fn data_dir_maps_to_path() {
    let _lock = env_lock();
    let _guard = EnvGuard::new(&env_names());
    clear_env();

    env_mut::set_var(HarnessEnv::DataDir.as_str(), "/tmp/testkit-data");
    let config = HarnessConfig::load().expect("config should load");
    assert_eq!(config.data_dir, Some(PathBuf::from("/tmp/testkit-data")));
}

#[test]
fn data_dir_rejects_empty_values() {
    let _lock = env_lock();
    let _guard = EnvGuard::new(&env_names());
    clear_env();

    env_mut::set_var(HarnessEnv::DataDir.as_str(), "   ");
    assert!(HarnessConfig::load().is_err());
}

#[test]
fn keep_scratch_parses_bool_values() {
    let _lock = env_lock();
    let _guard = EnvGuard::new(&env_names());
    clear_env();

    env_mut::set_var(HarnessEnv::KeepScratch.as_str(), "1");
    let config = HarnessConfig::load().expect("config should load");
    assert!(config.keep_scratch);

    env_mut::set_var(HarnessEnv::KeepScratch.as_str(), "false");
    let config = HarnessConfig::load().expect("config should load");
    assert!(!config.keep_scratch);
}

#[test]
fn keep_scratch_rejects_invalid_values() {
    let _lock = env_lock();
    let _guard = EnvGuard::new(&env_names());
    clear_env();

    env_mut::set_var(HarnessEnv::KeepScratch.as_str(), "maybe");
    assert!(HarnessConfig::load().is_err());
}
