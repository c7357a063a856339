//! Heapsort with Operation Counting
//!
//! This crate sorts integer slices in place with heapsort and counts the work
//! it performs, so the O(n log n) growth of the algorithm can be observed
//! empirically.
//!
//! # Modules
//!
//! - **Heap Engine** ([`heapsort`]): sift-down, max-heap construction and the two-phase sort
//! - **Operation Counter** ([`counter`]): caller-owned tally of comparisons and swaps
//! - **Experiment** ([`experiment`]): random inputs, the demonstration run and the size sweep
//! - **Report** ([`report`]): console table and conclusion text
//!
//! # Example
//!
//! ```rust
//! use counted_heapsort::{heap_sort, OperationCounter};
//!
//! let mut counter = OperationCounter::new();
//! let mut data = vec![5, 3, 8, 1, 9, 2];
//!
//! counter.reset();
//! heap_sort(&mut data, &mut counter);
//!
//! assert_eq!(data, vec![1, 2, 3, 5, 8, 9]);
//! assert_eq!(counter.read(), 36);
//! ```

pub mod counter;
pub mod experiment;
pub mod heapsort;
pub mod report;

// Re-export the engine entry points for convenience
pub use counter::{CountingPolicy, NoTally, OperationCounter, OperationTally};
pub use heapsort::{heap_sort, heap_sort_counted, sift_down};
