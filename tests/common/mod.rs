//! Shared test utilities and fixtures.

#![allow(dead_code)]

use docsift::{Catalog, Index, ResultGroup};
use std::fs;
use std::sync::{Arc, LazyLock};
use std::time::Duration;

// Re-export canonical test utilities from docsift::testing
pub use docsift::testing::{make_group, make_groups, make_item, make_page, make_section, RecordingSink};

// ============================================================================
// FIXTURES
// ============================================================================

/// Two-locale documentation site used across the integration tests.
pub const FIXTURE_CATALOG: &str = "tests/fixtures/catalog.json";

/// Raw fixture JSON, read once.
static FIXTURE_JSON: LazyLock<String> =
    LazyLock::new(|| fs::read_to_string(FIXTURE_CATALOG).expect("Failed to read fixture catalog"));

/// Parsed fixture catalog, shared between tests.
static CATALOG: LazyLock<Arc<Catalog>> = LazyLock::new(|| {
    Arc::new(Catalog::from_json(&FIXTURE_JSON).expect("Fixture catalog should parse"))
});

pub fn fixture_json() -> &'static str {
    &FIXTURE_JSON
}

pub fn fixture_catalog() -> Arc<Catalog> {
    Arc::clone(&CATALOG)
}

pub fn fixture_index(locale: &str) -> Arc<Index> {
    CATALOG
        .index(locale)
        .unwrap_or_else(|| panic!("fixture has no locale {}", locale))
}

// ============================================================================
// HELPERS
// ============================================================================

/// Group titles in result order.
pub fn titles(groups: &[ResultGroup]) -> Vec<&str> {
    groups.iter().map(|g| g.title.as_str()).collect()
}

/// Group scores in result order.
pub fn scores(groups: &[ResultGroup]) -> Vec<u32> {
    groups.iter().map(ResultGroup::score).collect()
}

pub fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}
