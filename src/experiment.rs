//! Measurement harness for the counted heapsort
//!
//! Builds random inputs, runs the engine under an [`OperationCounter`] and
//! collects the results:
//!
//! - [`run_demo`]: one sort of a small random array, keeping the original
//! - [`run_complexity_experiment`]: one sort per configured size, producing
//!   [`ComplexityRow`]s to compare against n, n log₂ n and n²
//!
//! The random generator is seeded once per process by the caller (see
//! [`ExperimentConfig::rng`]); the engine itself does not care where its
//! input came from.
//!
//! # Example
//!
//! ```rust
//! use counted_heapsort::experiment::{run_complexity_experiment, ExperimentConfig};
//!
//! let config = ExperimentConfig::default()
//!     .with_sizes(vec![16, 256])
//!     .with_seed(7);
//! let mut rng = config.rng();
//!
//! let rows = run_complexity_experiment(&config, &mut rng).unwrap();
//! assert_eq!(rows.len(), 2);
//! assert!(rows[1].operations > rows[0].operations);
//! ```

use std::fmt;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};

use crate::counter::{CountingPolicy, OperationCounter};
use crate::heapsort::heap_sort;

/// Input sizes measured when nothing else is configured
pub const DEFAULT_SIZES: [usize; 3] = [10, 100, 1000];

/// Values are drawn from `0..DEFAULT_VALUE_RANGE`
pub const DEFAULT_VALUE_RANGE: i32 = 100;

/// Length of the demonstration array
pub const DEFAULT_DEMO_SIZE: usize = 20;

/// Error type for experiment configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExperimentError {
    /// No input sizes were configured
    NoSizes,
    /// The size is too small for log₂ n to be positive
    SizeTooSmall {
        /// The offending size
        size: usize,
    },
    /// The value range is empty
    EmptyValueRange,
}

impl fmt::Display for ExperimentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExperimentError::NoSizes => write!(f, "no input sizes configured"),
            ExperimentError::SizeTooSmall { size } => {
                write!(f, "input size {} is too small, sizes must be at least 2", size)
            }
            ExperimentError::EmptyValueRange => {
                write!(f, "value range must be positive")
            }
        }
    }
}

impl std::error::Error for ExperimentError {}

/// Settings for the demonstration and the complexity experiment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExperimentConfig {
    /// Array sizes measured by the complexity experiment
    pub sizes: Vec<usize>,
    /// Random values lie in `0..value_range`
    pub value_range: i32,
    /// Length of the demonstration array
    pub demo_size: usize,
    /// Fixed seed for reproducible runs; `None` seeds from entropy
    pub seed: Option<u64>,
    /// How child comparisons are counted
    pub policy: CountingPolicy,
}

impl Default for ExperimentConfig {
    fn default() -> Self {
        Self {
            sizes: DEFAULT_SIZES.to_vec(),
            value_range: DEFAULT_VALUE_RANGE,
            demo_size: DEFAULT_DEMO_SIZE,
            seed: None,
            policy: CountingPolicy::default(),
        }
    }
}

impl ExperimentConfig {
    #[must_use]
    pub fn with_sizes(mut self, sizes: Vec<usize>) -> Self {
        self.sizes = sizes;
        self
    }

    #[must_use]
    pub fn with_value_range(mut self, value_range: i32) -> Self {
        self.value_range = value_range;
        self
    }

    #[must_use]
    pub fn with_demo_size(mut self, demo_size: usize) -> Self {
        self.demo_size = demo_size;
        self
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    #[must_use]
    pub fn with_policy(mut self, policy: CountingPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Creates the process random generator
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }

    /// Checks the settings used by the complexity experiment
    pub fn validate(&self) -> Result<(), ExperimentError> {
        if self.value_range <= 0 {
            return Err(ExperimentError::EmptyValueRange);
        }
        if self.sizes.is_empty() {
            return Err(ExperimentError::NoSizes);
        }
        if let Some(&size) = self.sizes.iter().find(|&&size| size < 2) {
            return Err(ExperimentError::SizeTooSmall { size });
        }
        Ok(())
    }
}

/// Generates `len` values uniformly drawn from `0..range`
///
/// # Panics
/// Panics if `range` is not positive.
pub fn random_sequence<R: Rng + ?Sized>(rng: &mut R, len: usize, range: i32) -> Vec<i32> {
    (0..len).map(|_| rng.gen_range(0..range)).collect()
}

/// Resets `counter`, sorts `seq` and returns the operations recorded
pub fn measure_sort(seq: &mut [i32], counter: &mut OperationCounter) -> u64 {
    counter.reset();
    heap_sort(seq, counter);
    let operations = counter.read();
    debug!(
        len = seq.len(),
        operations,
        policy = %counter.policy(),
        "measured heap sort"
    );
    operations
}

/// Result of the demonstration run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoRun {
    pub original: Vec<i32>,
    pub sorted: Vec<i32>,
    pub operations: u64,
}

/// Sorts one random array of `config.demo_size` values
pub fn run_demo<R: Rng + ?Sized>(
    config: &ExperimentConfig,
    rng: &mut R,
) -> Result<DemoRun, ExperimentError> {
    if config.value_range <= 0 {
        return Err(ExperimentError::EmptyValueRange);
    }

    let original = random_sequence(rng, config.demo_size, config.value_range);
    let mut sorted = original.clone();
    let mut counter = OperationCounter::with_policy(config.policy);
    let operations = measure_sort(&mut sorted, &mut counter);

    Ok(DemoRun {
        original,
        sorted,
        operations,
    })
}

/// Operation count measured for one input size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComplexityRow {
    pub size: usize,
    pub operations: u64,
}

impl ComplexityRow {
    pub fn log_n(&self) -> f64 {
        (self.size as f64).log2()
    }

    pub fn n_log_n(&self) -> f64 {
        self.size as f64 * self.log_n()
    }

    pub fn n_squared(&self) -> u64 {
        let n = self.size as u64;
        n * n
    }

    /// Constant factor against n log₂ n
    pub fn ratio_to_n_log_n(&self) -> f64 {
        self.operations as f64 / self.n_log_n()
    }
}

/// Sorts one random array per configured size with a shared counter
///
/// The counter is reset before every size, so each row reports a single
/// independent run.
pub fn run_complexity_experiment<R: Rng + ?Sized>(
    config: &ExperimentConfig,
    rng: &mut R,
) -> Result<Vec<ComplexityRow>, ExperimentError> {
    config.validate()?;

    let mut counter = OperationCounter::with_policy(config.policy);
    let mut rows = Vec::with_capacity(config.sizes.len());

    for &size in &config.sizes {
        let mut data = random_sequence(rng, size, config.value_range);
        let operations = measure_sort(&mut data, &mut counter);
        debug_assert!(crate::heapsort::is_sorted(&data));

        let row = ComplexityRow { size, operations };
        info!(
            size,
            operations,
            ratio = row.ratio_to_n_log_n(),
            "complexity sample"
        );
        rows.push(row);
    }

    Ok(rows)
}
