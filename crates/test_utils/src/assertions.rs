//! Custom assertion helpers

use crate::mocks::InMemoryActivityStore;

/// Asserts the logged action tags match `expected`, in insertion order
///
/// # Panics
///
/// Panics with both sequences when they differ.
pub fn assert_action_sequence(store: &InMemoryActivityStore, expected: &[&str]) {
    let actual = store.actions();
    assert_eq!(
        actual, expected,
        "logged action sequence mismatch\n  actual:   {actual:?}\n  expected: {expected:?}"
    );
}

/// Asserts exactly one `*_failed` entry was logged
pub fn assert_single_failure(store: &InMemoryActivityStore) {
    let failures: Vec<String> = store
        .actions()
        .into_iter()
        .filter(|action| action.ends_with("_failed"))
        .collect();
    assert_eq!(
        failures.len(),
        1,
        "expected exactly one terminal failure entry, got {failures:?}"
    );
}
