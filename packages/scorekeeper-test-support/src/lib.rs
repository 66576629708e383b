//! Scorekeeper test support utilities
//!
//! Shared by the scorekeeper unit and integration tests: logging setup,
//! proptest settings and roster fixtures.

pub mod logging;
pub mod proptest_env;
pub mod roster_fixtures;
