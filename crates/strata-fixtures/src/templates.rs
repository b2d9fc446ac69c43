// crates/strata-fixtures/src/templates.rs
// ============================================================================
// Module: Template Catalog
// Description: Source text for every file in the selection fixture project.
// Purpose: Hold the canonical model, schema, and seed property documents.
// Dependencies: None
// ============================================================================

//! ## Overview
//! Every constant in this module is the verbatim text of one project file.
//! Model bodies are written in the engine's template dialect: `{{ config(...)
//! }}` blocks, `{{ ref('name') }}` and `{{ source('schema', 'table') }}`
//! dependency references, `{{ this.schema }}` and `{{ target.schema }}`
//! runtime lookups, and `{# ... #}` comments. The testkit never interprets
//! any of those tokens; it carries them through unchanged so the engine under
//! test resolves them.
//!
//! Leading and trailing blank lines inside each constant are part of the
//! fixture text and must not be trimmed.

// ============================================================================
// SECTION: Schema Documents
// ============================================================================

/// Primary schema document: group definitions with owner metadata, model
/// patches with column tests, the `versioned` model family, the `raw` source,
/// and two exposures.
///
/// The `whatever` owner key is deliberate: owners accept arbitrary extra
/// fields and this document exercises that path.
pub const SCHEMA_YML: &str = r#"
version: 2

groups:
  - name: emails_group
    owner:
      name: Dana
      email: data@strata.test
      slack: strata-data-team
      github: dana-strata
      whatever: you want
  - name: users_group
    owner:
      name: Dana
      email: data@strata.test
      slack: strata-data-team
      github: dana-strata
      whatever: you want
  - name: users_rollup_group
    owner:
      name: Dana
      email: data@strata.test
      slack: strata-data-team
      github: dana-strata
      whatever: you want

models:
  - name: emails
    group: emails_group
    columns:
    - name: email
      tests:
      - not_null:
          severity: warn
  - name: users
    group: users_group
    columns:
    - name: id
      tests:
      - unique
  - name: users_rollup
    group: users_rollup_group
    columns:
    - name: gender
      tests:
      - unique
  - name: versioned
    latest_version: 2
    versions:
      - v: 1
      - v: 2
      - v: 3
      - v: 4.5
      - v: "5.0"
      - v: 21
      - v: "test"

sources:
  - name: raw
    schema: '{{ target.schema }}'
    tables:
      - name: seed

exposures:
  - name: user_exposure
    type: dashboard
    depends_on:
      - ref('users')
      - ref('users_rollup')
      - ref('versioned', v=3)
    owner:
      email: nope@example.com
  - name: seed_ml_exposure
    type: ml
    depends_on:
      - source('raw', 'seed')
    owner:
      email: nope@example.com
"#;

/// Secondary schema document patching the `subdir` model with a description.
///
/// Lives at the project root while the model it patches lives under `test/`,
/// which exercises patch-path-based selection.
pub const PATCH_PATH_SELECTION_SCHEMA_YML: &str = r#"
version: 2

models:
  - name: subdir
    description: submarine sandwich directory

"#;

// ============================================================================
// SECTION: Model Templates
// ============================================================================

/// Ephemeral base model tagged `base`, selecting from the `raw.seed` source.
pub const BASE_USERS_SQL: &str = r#"

{{
    config(
        materialized = 'ephemeral',
        tags = ['base']
    )
}}

select * from {{ source('raw', 'seed') }}
"#;

/// Table model tagged `bi` and `users`, selecting from `base_users`.
pub const USERS_SQL: &str = r#"

{{
    config(
        materialized = 'table',
        tags=['bi', 'users']
    )
}}

select * from {{ ref('base_users') }}
"#;

/// View model aggregating `users` by gender.
///
/// The `tags` value is a bare string rather than a list; tag configuration
/// accepts both forms and this model exercises the scalar one.
pub const USERS_ROLLUP_SQL: &str = r#"

{{
    config(
        materialized = 'view',
        tags = 'bi'
    )
}}

with users as (

    select * from {{ ref('users') }}

)

select
    gender,
    count(*) as ct
from users
group by 1
"#;

/// Table model one hop downstream of `users_rollup`.
pub const USERS_ROLLUP_DEPENDENCY_SQL: &str = r#"
{{
  config(materialized='table')
}}

select * from {{ ref('users_rollup') }}
"#;

/// Ephemeral model tagged `base`, projecting distinct emails from
/// `base_users`.
pub const EMAILS_SQL: &str = r#"

{{
    config(materialized='ephemeral', tags=['base'])
}}

select distinct email from {{ ref('base_users') }}
"#;

/// Model with no config block, projecting distinct emails from `users`.
pub const EMAILS_ALT_SQL: &str = r#"
select distinct email from {{ ref('users') }}
"#;

/// Table model tagged `dots` whose file name contains a dot
/// (`alternative.users.sql`), exercising selection on dotted names.
pub const ALTERNATIVE_USERS_SQL: &str = r#"
{# Same as ´users´ model, but with dots in the model name #}
{{
    config(
        materialized = 'table',
        tags=['dots']
    )
}}

select * from {{ ref('base_users') }}
"#;

/// Model with a custom schema suffix that no selector should ever match.
pub const NEVER_SELECTED_SQL: &str = r#"
{{
  config(schema='_and_then')
}}

select * from {{ this.schema }}.seed
"#;

/// Trivial model under the `test/` subdirectory.
pub const SUBDIR_SQL: &str = r#"
select 1 as id
"#;

/// Trivial model under the `test/subdir/` subdirectory.
pub const NESTED_USERS_SQL: &str = r#"
select 1 as id
"#;

// ============================================================================
// SECTION: Seed Properties
// ============================================================================

/// Seed properties document pinning column types for `summary_expected`.
///
/// `ct` is forced to `BIGINT` and `gender` to `text` so comparisons against
/// the rollup output do not depend on warehouse type inference.
pub const PROPERTIES_YML: &str = r#"
version: 2
seeds:
  - name: summary_expected
    config:
      column_types:
        ct: BIGINT
        gender: text
"#;
