// crates/strata-fixtures/src/data.rs
// ============================================================================
// Module: Sample Data
// Description: Built-in CSV payloads for the seed tables.
// Purpose: Provision seed data without an external data directory.
// Dependencies: None
// ============================================================================

//! ## Overview
//! Harness runs that have no data directory configured fall back to these
//! payloads. The two documents are consistent by construction: the summary
//! rows are the gender counts of the sample seed, matching what the rollup
//! model computes, so equality checks against `summary_expected` hold.

// ============================================================================
// SECTION: Seed Payloads
// ============================================================================

/// Sample rows for the `seed` table.
///
/// # Invariants
/// - Ten rows: six `Female`, four `Male`.
/// - Addresses use reserved documentation IP ranges.
pub const SAMPLE_SEED_CSV: &str = "\
id,first_name,email,gender,ip_address
1,Hazel,hazel.monroe@example.com,Female,192.0.2.11
2,Marcus,marcus.reed@example.com,Male,192.0.2.54
3,Priya,priya.anand@example.com,Female,198.51.100.23
4,Elena,elena.vasquez@example.com,Female,198.51.100.77
5,Tomas,tomas.berg@example.com,Male,203.0.113.9
6,Aisha,aisha.khan@example.com,Female,203.0.113.41
7,Dmitri,dmitri.volkov@example.com,Male,192.0.2.102
8,Ingrid,ingrid.dahl@example.com,Female,198.51.100.150
9,Kofi,kofi.mensah@example.com,Male,203.0.113.88
10,Mei,mei.tanaka@example.com,Female,192.0.2.200
";

/// Expected rollup output for the sample seed.
///
/// # Invariants
/// - Row counts equal the gender counts in [`SAMPLE_SEED_CSV`].
/// - Rows are ordered by gender, matching a sorted group-by result.
pub const SAMPLE_SUMMARY_EXPECTED_CSV: &str = "\
gender,ct
Female,6
Male,4
";
