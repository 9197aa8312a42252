// SPDX-License-Identifier: MIT

//! Single-run comparative timing harness.
//!
//! Times one in-place invocation of a sort over a dataset and sweeps the
//! configured sizes and scenarios, racing [`crate::sort::merge_sort`] against
//! the standard library's `sort_unstable` baseline. Each competitor receives
//! its own private clone of the dataset; sharing a mutated dataset across
//! competitors would hand the second sort pre-sorted input and invalidate the
//! comparison.
//!
//! Deliberately single-run: no warmup, no repeated trials, no variance. The
//! criterion benches under `benches/` exist for statistically careful
//! numbers; this harness answers the quick "which one wins on this shape"
//! question.

use std::time::{Duration, Instant};

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::debug;

use crate::sort::merge_sort;
use crate::workload::{generate_with_rng, Scenario, ScenarioError};

/// Which competitor won a single comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Winner {
    /// The merge sort under test was strictly faster.
    MergeSort,
    /// The standard-library baseline was at least as fast. Exact ties go to
    /// the baseline so the verdict is deterministic.
    Reference,
}

/// Timings for one `(size, scenario)` cell of the sweep.
#[derive(Debug, Clone)]
#[non_exhaustive]
pub struct Comparison {
    /// Nominal dataset size requested from the generator.
    pub size: usize,
    /// Input shape the dataset was built with.
    pub scenario: Scenario,
    /// Elapsed wall-clock time of the merge sort under test.
    pub merge_sort: Duration,
    /// Elapsed wall-clock time of the standard-library baseline.
    pub reference: Duration,
}

impl Comparison {
    /// The faster competitor; exact ties prefer [`Winner::Reference`].
    #[must_use]
    pub fn winner(&self) -> Winner {
        if self.merge_sort < self.reference {
            Winner::MergeSort
        } else {
            Winner::Reference
        }
    }

    /// Elapsed time of the winning competitor.
    #[must_use]
    pub fn winning_duration(&self) -> Duration {
        match self.winner() {
            Winner::MergeSort => self.merge_sort,
            Winner::Reference => self.reference,
        }
    }
}

/// Sizes and scenarios to sweep, plus an optional RNG seed for reproducible
/// dataset generation.
#[derive(Debug, Clone)]
pub struct SweepConfig {
    /// Nominal dataset sizes, benchmarked in order.
    pub sizes: Vec<usize>,
    /// Input shapes, benchmarked in order for every size.
    pub scenarios: Vec<Scenario>,
    /// Seed for the generation RNG. `None` seeds from entropy, so randomized
    /// scenarios differ between runs.
    pub seed: Option<u64>,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            sizes: vec![1_000, 10_000, 100_000],
            scenarios: Scenario::ALL.to_vec(),
            seed: None,
        }
    }
}

/// Times one in-place invocation of `sort_fn` over `data`.
///
/// Uses `Instant`, a monotonic clock, so wall-clock adjustments cannot skew
/// the measurement. The sort's correctness is not verified here.
pub fn time_sort<F>(sort_fn: F, data: &mut [i64]) -> Duration
where
    F: FnOnce(&mut [i64]),
{
    let start = Instant::now();
    sort_fn(data);
    start.elapsed()
}

/// Runs the full size × scenario sweep.
///
/// For every cell, generates one dataset and times both competitors on
/// independent clones of it. Results are returned in sweep order.
///
/// # Errors
///
/// Currently infallible in practice (scenario values are already parsed), but
/// kept fallible so callers handle generation errors uniformly with the
/// name-based entry points in [`crate::workload`].
pub fn run_sweep(config: &SweepConfig) -> Result<Vec<Comparison>, ScenarioError> {
    let mut rng = config
        .seed
        .map_or_else(StdRng::from_entropy, StdRng::seed_from_u64);

    let mut results = Vec::with_capacity(config.sizes.len() * config.scenarios.len());
    for &size in &config.sizes {
        for &scenario in &config.scenarios {
            let dataset = generate_with_rng(size, scenario, &mut rng);
            debug!(size, %scenario, len = dataset.len(), "generated dataset");

            let mut ours = dataset.clone();
            let mut baseline = dataset;
            let merge_sort_elapsed = time_sort(merge_sort, &mut ours);
            let reference_elapsed = time_sort(<[i64]>::sort_unstable, &mut baseline);

            results.push(Comparison {
                size,
                scenario,
                merge_sort: merge_sort_elapsed,
                reference: reference_elapsed,
            });
        }
    }
    Ok(results)
}
