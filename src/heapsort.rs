//! In-place heapsort over integer slices
//!
//! The sort runs in two phases over a binary max-heap laid out in the slice
//! itself: the build phase sifts every internal node down from the last
//! parent to the root, then the extraction phase repeatedly swaps the root
//! behind a shrinking heap region and restores the heap.
//!
//! Every comparison opportunity and every swap is reported to an
//! [`OperationTally`], which lets callers measure the work performed.
//!
//! # Time Complexity
//!
//! | Operation        | Complexity |
//! |------------------|------------|
//! | `sift_down`      | O(log n)   |
//! | `build_max_heap` | O(n)       |
//! | `heap_sort`      | O(n log n) |
//!
//! # Example
//!
//! ```rust
//! use counted_heapsort::heapsort::heap_sort_counted;
//!
//! let mut data = vec![5, 3, 8, 1, 9, 2];
//! let operations = heap_sort_counted(&mut data);
//!
//! assert_eq!(data, vec![1, 2, 3, 5, 8, 9]);
//! assert_eq!(operations, 36);
//! ```

use crate::counter::{NoTally, OperationCounter, OperationTally};

/// Restores the max-heap property for the subtree rooted at `root`
///
/// Only `seq[..heap_size]` is treated as heap. Both child subtrees of `root`
/// must already be max-heaps. Equal values never trigger a swap.
pub fn sift_down<C: OperationTally>(
    seq: &mut [i32],
    heap_size: usize,
    mut root: usize,
    counter: &mut C,
) {
    debug_assert!(heap_size <= seq.len());

    loop {
        let left = 2 * root + 1;
        let right = 2 * root + 2;
        let mut largest = root;

        counter.record_comparison(left < heap_size);
        if left < heap_size && seq[left] > seq[largest] {
            largest = left;
        }

        counter.record_comparison(right < heap_size);
        if right < heap_size && seq[right] > seq[largest] {
            largest = right;
        }

        if largest == root {
            break;
        }

        seq.swap(root, largest);
        counter.record_swap();
        root = largest;
    }
}

/// Rearranges the whole slice into a max-heap
pub fn build_max_heap<C: OperationTally>(seq: &mut [i32], counter: &mut C) {
    let n = seq.len();
    for i in (0..n / 2).rev() {
        sift_down(seq, n, i, counter);
    }
}

/// Sorts the slice ascending in place, recording work into `counter`
///
/// The counter is never reset here; callers reset it before a measured run.
/// Empty and single-element slices record nothing.
pub fn heap_sort<C: OperationTally>(seq: &mut [i32], counter: &mut C) {
    build_max_heap(seq, counter);

    debug_assert!(is_max_heap(seq, seq.len()));

    for i in (1..seq.len()).rev() {
        seq.swap(0, i);
        counter.record_swap();
        sift_down(seq, i, 0, counter);
    }
}

/// Sorts with a fresh inclusive counter and returns the operation count
pub fn heap_sort_counted(seq: &mut [i32]) -> u64 {
    let mut counter = OperationCounter::new();
    heap_sort(seq, &mut counter);
    counter.read()
}

/// Sorts without any instrumentation
pub fn heap_sort_uncounted(seq: &mut [i32]) {
    heap_sort(seq, &mut NoTally);
}

/// Checks the max-heap property over `seq[..heap_size]`
pub fn is_max_heap(seq: &[i32], heap_size: usize) -> bool {
    let heap_size = heap_size.min(seq.len());
    (1..heap_size).all(|child| seq[(child - 1) / 2] >= seq[child])
}

/// Checks that the slice is in non-decreasing order
pub fn is_sorted(seq: &[i32]) -> bool {
    seq.windows(2).all(|w| w[0] <= w[1])
}
