//! Operation counting for the heap engine
//!
//! The engine reports work through the [`OperationTally`] trait instead of a
//! global counter, so every measured run owns its own tally:
//!
//! - [`OperationCounter`]: the instrumented tally, with a [`CountingPolicy`]
//! - [`NoTally`]: a zero-sized tally for uninstrumented sorting
//!
//! # Example
//!
//! ```rust
//! use counted_heapsort::counter::OperationCounter;
//! use counted_heapsort::heapsort::heap_sort;
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

use std::fmt;

/// Decides which child comparisons count as operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CountingPolicy {
    /// Two comparisons per sift-down step, whether or not the children exist
    ///
    /// Bound checks that never read a child value are still counted. This is
    /// the classic instrumentation and gives the reference counts.
    #[default]
    Inclusive,
    /// Only comparisons that actually read a child value
    ValueComparisons,
}

impl CountingPolicy {
    /// Short label used in reports
    pub fn as_str(&self) -> &'static str {
        match self {
            CountingPolicy::Inclusive => "inclusive",
            CountingPolicy::ValueComparisons => "value comparisons",
        }
    }
}

impl fmt::Display for CountingPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sink for the work performed by the heap engine
///
/// The engine only ever records; it never resets or reads.
pub trait OperationTally {
    /// Called once per child comparison opportunity
    ///
    /// `child_in_heap` is false when the child index lies outside the heap
    /// region and its value is never read.
    fn record_comparison(&mut self, child_in_heap: bool);

    /// Called once per element swap
    fn record_swap(&mut self);
}

/// Running total of comparisons attempted plus swaps performed
///
/// The caller resets the counter before each independent measured run and
/// reads it afterward. Several sorts may share one counter when the caller
/// wants their combined total.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OperationCounter {
    count: u64,
    policy: CountingPolicy,
}

impl OperationCounter {
    /// Creates a zeroed counter with the [`CountingPolicy::Inclusive`] policy
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a zeroed counter with the given policy
    #[must_use]
    pub fn with_policy(policy: CountingPolicy) -> Self {
        Self { count: 0, policy }
    }

    /// Sets the count back to zero
    pub fn reset(&mut self) {
        self.count = 0;
    }

    /// Adds one operation
    pub fn increment(&mut self) {
        self.count += 1;
    }

    /// Returns the current count
    pub fn read(&self) -> u64 {
        self.count
    }

    pub fn policy(&self) -> CountingPolicy {
        self.policy
    }
}

impl OperationTally for OperationCounter {
    fn record_comparison(&mut self, child_in_heap: bool) {
        match self.policy {
            CountingPolicy::Inclusive => self.increment(),
            CountingPolicy::ValueComparisons => {
                if child_in_heap {
                    self.increment();
                }
            }
        }
    }

    fn record_swap(&mut self) {
        self.increment();
    }
}

/// Tally that discards everything
#[derive(Debug, Clone, Copy, Default)]
pub struct NoTally;

impl OperationTally for NoTally {
    #[inline]
    fn record_comparison(&mut self, _child_in_heap: bool) {}

    #[inline]
    fn record_swap(&mut self) {}
}
