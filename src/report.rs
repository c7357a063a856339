//! Console output for the demonstration and the complexity experiment

use std::fmt;

use crate::experiment::{ComplexityRow, DemoRun};

/// Largest max/min spread of `operations / (n log₂ n)` still read as O(n log n)
pub const GROWTH_TOLERANCE: f64 = 2.0;

fn write_values(f: &mut fmt::Formatter<'_>, values: &[i32]) -> fmt::Result {
    for value in values {
        write!(f, "{} ", value)?;
    }
    writeln!(f)
}

impl fmt::Display for DemoRun {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Original Array:")?;
        write_values(f, &self.original)?;
        writeln!(f, "Sorted Array:")?;
        write_values(f, &self.sorted)?;
        write!(f, "Total Operations Count: {}", self.operations)
    }
}

/// Table of operation counts next to the reference growth functions
#[derive(Debug, Clone, Copy)]
pub struct ComplexityTable<'a> {
    rows: &'a [ComplexityRow],
}

impl<'a> ComplexityTable<'a> {
    pub fn new(rows: &'a [ComplexityRow]) -> Self {
        Self { rows }
    }
}

impl fmt::Display for ComplexityTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{:>10} | {:>12} | {:>8} | {:>12} | {:>14} | {:>8}",
            "Array Size", "Operations", "n", "n log2 n", "n^2", "log2 n"
        )?;
        writeln!(f, "{}", "-".repeat(83))?;
        for row in self.rows {
            writeln!(
                f,
                "{:>10} | {:>12} | {:>8} | {:>12.2} | {:>14} | {:>8.2}",
                row.size,
                row.operations,
                row.size,
                row.n_log_n(),
                row.n_squared(),
                row.log_n()
            )?;
        }
        Ok(())
    }
}

/// Summary of how the measured counts grow
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Conclusion {
    pub min_ratio: f64,
    pub max_ratio: f64,
}

impl Conclusion {
    /// Returns `None` when there are no rows
    pub fn from_rows(rows: &[ComplexityRow]) -> Option<Self> {
        let mut ratios = rows.iter().map(ComplexityRow::ratio_to_n_log_n);
        let first = ratios.next()?;
        let (min_ratio, max_ratio) =
            ratios.fold((first, first), |(lo, hi), r| (lo.min(r), hi.max(r)));
        Some(Self {
            min_ratio,
            max_ratio,
        })
    }

    pub fn spread(&self) -> f64 {
        if self.min_ratio > 0.0 {
            self.max_ratio / self.min_ratio
        } else {
            f64::INFINITY
        }
    }

    /// True when the constant factor stays within [`GROWTH_TOLERANCE`]
    pub fn is_n_log_n(&self) -> bool {
        self.spread() <= GROWTH_TOLERANCE
    }
}

impl fmt::Display for Conclusion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Operations / (n log2 n) ranged from {:.3} to {:.3} (spread {:.2}x).",
            self.min_ratio,
            self.max_ratio,
            self.spread()
        )?;
        if self.is_n_log_n() {
            writeln!(
                f,
                "The operation count grows in proportion to n log2 n, far below n^2."
            )?;
            write!(f, "This is consistent with heapsort's O(n log n) time complexity.")
        } else {
            write!(
                f,
                "The constant factor drifts beyond {:.1}x; the growth is not consistent with O(n log n).",
                GROWTH_TOLERANCE
            )
        }
    }
}
