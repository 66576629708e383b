//! Roster fixtures for tests
//!
//! Deterministic player names so assertions can refer to players by name
//! without depending on the crate's default-roster wording.

const NAMES: [&str; 8] = [
    "Anne", "Bartholomew", "Calico", "Davy", "Edward", "Flint", "Grace", "Henry",
];

/// The first `count` fixture names (clamped to the eight available).
///
/// ```
/// use scorekeeper_test_support::roster_fixtures::player_names;
///
/// assert_eq!(player_names(2), vec!["Anne".to_string(), "Bartholomew".to_string()]);
/// ```
pub fn player_names(count: usize) -> Vec<String> {
    NAMES
        .iter()
        .take(count)
        .map(|name| (*name).to_string())
        .collect()
}

/// A single fixture name by seat, wrapping past the end of the list.
pub fn player_name(seat: usize) -> String {
    NAMES[seat % NAMES.len()].to_string()
}
