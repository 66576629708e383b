//! Property-test settings read from the environment.
//!
//! `PROPTEST_CASES` sets the case count and `PROPTEST_MAX_SHRINK_MS` caps
//! shrinking. Strategies should build valid inputs directly rather than
//! filtering with `prop_assume!`, so a small case count still covers ground.

use proptest::prelude::ProptestConfig;

pub const DEFAULT_CASES: u32 = 8;

/// Settings for `#![proptest_config(..)]` blocks in this workspace.
pub fn config() -> ProptestConfig {
    config_from(|name| std::env::var(name).ok())
}

/// Like [`config`], with the variables supplied by `lookup`.
///
/// Unparsable values are ignored. The case count never drops below one and
/// failures are never persisted to regression files.
pub fn config_from(lookup: impl Fn(&str) -> Option<String>) -> ProptestConfig {
    let base = ProptestConfig::default();
    let number = |name: &str| lookup(name).and_then(|raw| raw.trim().parse::<u32>().ok());

    ProptestConfig {
        cases: number("PROPTEST_CASES").unwrap_or(DEFAULT_CASES).max(1),
        max_shrink_time: number("PROPTEST_MAX_SHRINK_MS").unwrap_or(base.max_shrink_time),
        failure_persistence: None,
        ..base
    }
}
