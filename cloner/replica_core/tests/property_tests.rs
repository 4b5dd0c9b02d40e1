//! Property-based tests for sequence cloning.

#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "tests can panic"
)]

use proptest::prelude::*;
use replica_core::deep_clone;

proptest! {
    #[test]
    fn jagged_matrices_clone_faithfully(
        rows in prop::collection::vec(prop::collection::vec(any::<i64>(), 0..16), 0..16)
    ) {
        let copy = deep_clone(&rows);
        prop_assert_eq!(&copy, &rows);
    }

    #[test]
    fn clone_mutation_never_reaches_the_original(
        rows in prop::collection::vec(prop::collection::vec(any::<i64>(), 1..8), 1..8)
    ) {
        let snapshot = rows.clone();
        let mut copy = deep_clone(&rows);
        for row in &mut copy {
            for cell in row.iter_mut() {
                *cell = cell.wrapping_add(1);
            }
        }
        prop_assert_eq!(&rows, &snapshot);
    }
}
