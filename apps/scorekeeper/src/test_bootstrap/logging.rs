//! Test logging for unit tests inside this crate.
//!
//! Shares the one-time subscriber from `scorekeeper-test-support`, so unit and
//! integration tests read the same `TEST_LOG` / `RUST_LOG` knobs.

pub use scorekeeper_test_support::logging::init;
