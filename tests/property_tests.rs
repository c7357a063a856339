//! Property-based tests using proptest
//!
//! These tests generate random integer sequences and verify that heapsort
//! always produces a sorted permutation of its input, and that the two
//! counting policies stay consistent with each other.

use counted_heapsort::heapsort::{build_max_heap, heap_sort, is_max_heap, is_sorted};
use counted_heapsort::{CountingPolicy, NoTally, OperationCounter, OperationTally};
use proptest::prelude::*;

use std::collections::HashMap;

/// Comparison and swap counts kept apart
#[derive(Default)]
struct SplitTally {
    comparisons: u64,
    value_comparisons: u64,
    swaps: u64,
}

impl OperationTally for SplitTally {
    fn record_comparison(&mut self, child_in_heap: bool) {
        self.comparisons += 1;
        if child_in_heap {
            self.value_comparisons += 1;
        }
    }

    fn record_swap(&mut self) {
        self.swaps += 1;
    }
}

fn multiset(values: &[i32]) -> HashMap<i32, usize> {
    let mut counts = HashMap::new();
    for &v in values {
        *counts.entry(v).or_insert(0) += 1;
    }
    counts
}

/// Test that the output is in non-decreasing order
fn test_sorted_invariant(mut values: Vec<i32>) -> Result<(), TestCaseError> {
    let mut counter = OperationCounter::new();
    heap_sort(&mut values, &mut counter);

    for pair in values.windows(2) {
        prop_assert!(
            pair[0] <= pair[1],
            "{} is placed before {}",
            pair[0],
            pair[1]
        );
    }
    Ok(())
}

/// Test that no value is created, dropped or duplicated
fn test_permutation_invariant(values: Vec<i32>) -> Result<(), TestCaseError> {
    let before = multiset(&values);
    let mut sorted = values;
    heap_sort(&mut sorted, &mut NoTally);

    prop_assert_eq!(before, multiset(&sorted));
    Ok(())
}

/// Test that sorting matches the standard library
fn test_matches_std_sort(values: Vec<i32>) -> Result<(), TestCaseError> {
    let mut expected = values.clone();
    expected.sort_unstable();

    let mut actual = values;
    heap_sort(&mut actual, &mut NoTally);

    prop_assert_eq!(actual, expected);
    Ok(())
}

/// Test that sorting sorted output changes nothing
fn test_idempotent(mut values: Vec<i32>) -> Result<(), TestCaseError> {
    heap_sort(&mut values, &mut NoTally);
    let once = values.clone();

    heap_sort(&mut values, &mut NoTally);
    prop_assert_eq!(once, values);
    Ok(())
}

/// Test that the build phase yields a max-heap
fn test_build_invariant(mut values: Vec<i32>) -> Result<(), TestCaseError> {
    let len = values.len();
    build_max_heap(&mut values, &mut NoTally);
    prop_assert!(is_max_heap(&values, len));
    Ok(())
}

/// Test how the two policies relate on the same input
fn test_policy_relation(values: Vec<i32>) -> Result<(), TestCaseError> {
    let mut inclusive_input = values.clone();
    let mut inclusive = OperationCounter::with_policy(CountingPolicy::Inclusive);
    heap_sort(&mut inclusive_input, &mut inclusive);

    let mut value_input = values.clone();
    let mut value_only = OperationCounter::with_policy(CountingPolicy::ValueComparisons);
    heap_sort(&mut value_input, &mut value_only);

    let mut split_input = values;
    let mut split = SplitTally::default();
    heap_sort(&mut split_input, &mut split);

    // The policy only changes what is counted, never what is done
    prop_assert_eq!(&inclusive_input, &value_input);
    prop_assert_eq!(&inclusive_input, &split_input);

    prop_assert!(value_only.read() <= inclusive.read());
    prop_assert_eq!(inclusive.read(), split.comparisons + split.swaps);
    prop_assert_eq!(value_only.read(), split.value_comparisons + split.swaps);
    // Inclusive counting records exactly two comparisons per sift-down step
    prop_assert_eq!(split.comparisons % 2, 0);
    Ok(())
}

/// Test that a counted run is reproducible
fn test_count_deterministic(values: Vec<i32>) -> Result<(), TestCaseError> {
    let mut first = values.clone();
    let mut second = values;
    let mut counter = OperationCounter::new();

    counter.reset();
    heap_sort(&mut first, &mut counter);
    let first_count = counter.read();

    counter.reset();
    heap_sort(&mut second, &mut counter);
    prop_assert_eq!(first_count, counter.read());
    Ok(())
}

proptest! {
    #[test]
    fn test_heap_sort_sorted(values in prop::collection::vec(any::<i32>(), 0..200)) {
        test_sorted_invariant(values)?;
    }

    #[test]
    fn test_heap_sort_permutation(values in prop::collection::vec(-50i32..50, 0..200)) {
        test_permutation_invariant(values)?;
    }

    #[test]
    fn test_heap_sort_matches_std(values in prop::collection::vec(any::<i32>(), 0..300)) {
        test_matches_std_sort(values)?;
    }

    #[test]
    fn test_heap_sort_idempotent(values in prop::collection::vec(-100i32..100, 0..150)) {
        test_idempotent(values)?;
    }

    #[test]
    fn test_build_max_heap_invariant(values in prop::collection::vec(-100i32..100, 0..150)) {
        test_build_invariant(values)?;
    }

    #[test]
    fn test_counting_policies(values in prop::collection::vec(-20i32..20, 0..150)) {
        test_policy_relation(values)?;
    }

    #[test]
    fn test_counting_deterministic(values in prop::collection::vec(any::<i32>(), 0..150)) {
        test_count_deterministic(values)?;
    }

    #[test]
    fn test_sorted_output_helper_agrees(values in prop::collection::vec(any::<i32>(), 0..100)) {
        let mut values = values;
        heap_sort(&mut values, &mut NoTally);
        prop_assert!(is_sorted(&values));
    }
}
