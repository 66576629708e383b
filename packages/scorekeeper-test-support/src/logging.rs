//! One tracing subscriber per test binary.
//!
//! Unit tests (through the crate's `test_bootstrap`) and integration tests
//! (through `tests/common`) both land here, so they honour the same knobs.

use once_cell::sync::Lazy;
use tracing_subscriber::{fmt, EnvFilter};

/// Used when neither `TEST_LOG` nor `RUST_LOG` holds a directive.
pub const DEFAULT_DIRECTIVE: &str = "warn";

static INSTALLED: Lazy<bool> = Lazy::new(|| {
    let directive = directive_from(|name| std::env::var(name).ok());
    fmt()
        .with_env_filter(EnvFilter::new(directive))
        .with_test_writer()
        .with_target(false)
        .without_time()
        .try_init()
        .is_ok()
});

/// Install the subscriber on first call. Later calls are free.
///
/// Returns `false` when another global subscriber was already in place.
pub fn init() -> bool {
    *INSTALLED
}

/// Pick the filter directive: `TEST_LOG` first, then `RUST_LOG`.
/// Blank values count as unset.
pub fn directive_from(lookup: impl Fn(&str) -> Option<String>) -> String {
    ["TEST_LOG", "RUST_LOG"]
        .into_iter()
        .filter_map(|name| lookup(name))
        .find(|value| !value.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_DIRECTIVE.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lookup<'a>(vars: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<String> + 'a {
        move |name| {
            vars.iter()
                .find(|(key, _)| *key == name)
                .map(|(_, value)| (*value).to_string())
        }
    }

    #[test]
    fn test_log_beats_rust_log() {
        let vars = [("RUST_LOG", "info"), ("TEST_LOG", "scorekeeper=trace")];
        assert_eq!(directive_from(lookup(&vars)), "scorekeeper=trace");
    }

    #[test]
    fn blank_values_fall_through() {
        let vars = [("TEST_LOG", "  "), ("RUST_LOG", "debug")];
        assert_eq!(directive_from(lookup(&vars)), "debug");
        assert_eq!(directive_from(lookup(&[])), DEFAULT_DIRECTIVE);
    }

    #[test]
    fn init_is_idempotent() {
        let first = init();
        assert_eq!(init(), first);
    }
}
