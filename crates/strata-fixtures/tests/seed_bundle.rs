// crates/strata-fixtures/tests/seed_bundle.rs
// ============================================================================
// Module: Seed Bundle Tests
// Description: Integration tests for seed bundle assembly and data reads.
// Purpose: Validate data directory reads, fail-closed errors, and samples.
// Dependencies: strata-fixtures, tempfile
// ============================================================================

//! ## Overview
//! Integration tests for the seed side of the fixtures: bundles assembled
//! from a data directory, the errors raised when that directory is
//! incomplete, and the internal consistency of the built-in sample
//! payloads.

mod support;

use std::collections::BTreeMap;
use std::fs;

use strata_fixtures::FixtureError;
use strata_fixtures::REQUIRED_SEED_FILES;
use strata_fixtures::SEED_PROPERTIES_FILE;
use strata_fixtures::SelectionFixtures;
use strata_fixtures::parse_seed_properties;
use strata_fixtures::templates::PROPERTIES_YML;
use support::TestResult;
use support::ensure;

// ============================================================================
// SECTION: Test Helpers
// ============================================================================

/// Counts rows per gender in a seed CSV, skipping the header.
fn gender_counts(csv: &str) -> BTreeMap<String, usize> {
    let mut counts = BTreeMap::new();
    for line in csv.lines().skip(1) {
        if let Some(gender) = line.split(',').nth(3) {
            *counts.entry(gender.to_string()).or_insert(0) += 1;
        }
    }
    counts
}

/// Parses a summary CSV into gender counts, skipping the header.
fn summary_rows(csv: &str) -> Result<BTreeMap<String, usize>, String> {
    let mut rows = BTreeMap::new();
    for line in csv.lines().skip(1) {
        let mut fields = line.split(',');
        let gender = fields.next().ok_or_else(|| format!("malformed summary row: {line}"))?;
        let count = fields
            .next()
            .and_then(|field| field.parse::<usize>().ok())
            .ok_or_else(|| format!("malformed summary count: {line}"))?;
        rows.insert(gender.to_string(), count);
    }
    Ok(rows)
}

// ============================================================================
// SECTION: Data Directory Bundles
// ============================================================================

#[test]
fn bundle_reads_required_files_from_data_dir() -> TestResult {
    let data_dir = tempfile::tempdir()?;
    fs::write(data_dir.path().join("seed.csv"), "id,gender\n1,Female\n")?;
    fs::write(data_dir.path().join("summary_expected.csv"), "gender,ct\nFemale,1\n")?;

    let bundle = SelectionFixtures::seeds(data_dir.path())?;
    ensure(bundle.len() == 3, "bundle should hold properties plus both CSVs")?;

    let names: Vec<&str> = bundle.names().collect();
    ensure(
        names == ["properties.yml", "seed.csv", "summary_expected.csv"],
        "bundle should iterate in file name order",
    )?;
    ensure(
        bundle.get(SEED_PROPERTIES_FILE) == Some(PROPERTIES_YML),
        "properties document should come from the inline template",
    )?;
    ensure(
        bundle.get("seed.csv") == Some("id,gender\n1,Female\n"),
        "seed content should come from the data directory",
    )?;
    Ok(())
}

#[test]
fn missing_csv_fails_with_seed_not_found() -> TestResult {
    let data_dir = tempfile::tempdir()?;
    fs::write(data_dir.path().join("seed.csv"), "id\n1\n")?;

    let Err(err) = SelectionFixtures::seeds(data_dir.path()) else {
        return Err("expected missing summary CSV to fail".into());
    };
    match err {
        FixtureError::SeedNotFound(message) => {
            ensure(message.contains("summary_expected.csv"), "error should name the missing file")
        }
        other => Err(format!("unexpected error: {other}").into()),
    }
}

#[test]
fn missing_data_dir_fails_with_seed_not_found() -> TestResult {
    let scratch = tempfile::tempdir()?;
    let missing = scratch.path().join("no-such-dir");

    let Err(err) = SelectionFixtures::seeds(&missing) else {
        return Err("expected missing data directory to fail".into());
    };
    ensure(
        matches!(err, FixtureError::SeedNotFound(_)),
        "missing directory should read as a missing seed",
    )?;
    Ok(())
}

// ============================================================================
// SECTION: Sample Payloads
// ============================================================================

#[test]
fn sample_summary_matches_sample_seed() -> TestResult {
    let bundle = SelectionFixtures::sample_seeds();
    let seed = bundle.get("seed.csv").ok_or("missing sample seed")?;
    let summary = bundle.get("summary_expected.csv").ok_or("missing sample summary")?;

    let counted = gender_counts(seed);
    let expected = summary_rows(summary)?;
    ensure(counted == expected, "summary rows should equal the seed's gender counts")?;
    ensure(!counted.is_empty(), "sample seed should carry at least one gender")?;
    Ok(())
}

#[test]
fn sample_bundle_properties_parse() -> TestResult {
    let bundle = SelectionFixtures::sample_seeds();
    let properties = bundle.get(SEED_PROPERTIES_FILE).ok_or("missing properties document")?;

    let document = parse_seed_properties(properties)?;
    ensure(document.seed("summary_expected").is_some(), "properties should cover the summary")?;
    for file_name in REQUIRED_SEED_FILES {
        ensure(bundle.contains(file_name), format!("sample bundle should include {file_name}"))?;
    }
    Ok(())
}
