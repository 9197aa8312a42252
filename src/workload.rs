// SPDX-License-Identifier: MIT

//! Synthetic workload generation for sort benchmarking.
//!
//! Nine named scenarios shape a `Vec<i64>` of (nominally) `n` elements to
//! stress a sort under realistic and adversarial distributions: uniformly
//! shuffled, fully sorted, reverse sorted, nearly sorted, duplicate-heavy,
//! and so on. Two scenarios produce more than `n` elements by construction:
//! `append-few` appends 10 values and `duplicate-heavy` inserts `n / 2`
//! copies of existing elements.
//!
//! Deterministic scenarios (`ascending`, `descending`, `equal`, `worst-case`)
//! produce identical output for identical `n`. Randomized scenarios draw from
//! a caller-supplied [`Rng`] via [`generate_with_rng`], so a seeded RNG gives
//! reproducible datasets; [`generate`] is the thread-RNG convenience form.

use std::fmt;
use std::str::FromStr;

use rand::seq::SliceRandom;
use rand::Rng;

/// Number of random values appended by the `append-few` scenario.
const APPEND_COUNT: usize = 10;

/// Number of random index pairs swapped by the `3-exchanges` scenario.
const EXCHANGE_COUNT: usize = 3;

/// A named input-shape generation strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scenario {
    /// Integers `0..n`, uniformly shuffled.
    Random,
    /// Integers `n..=1`, strictly decreasing.
    Descending,
    /// Integers `0..n`, strictly increasing.
    Ascending,
    /// Ascending, then exactly 3 random index pairs swapped.
    ThreeExchanges,
    /// Ascending of length `n`, then 10 random values in `[0, 2n)` appended.
    AppendFew,
    /// Ascending, then `floor(0.01 n)` positions overwritten with random
    /// values in `[0, n]`.
    PercentNoisy,
    /// Ascending, then `n / 2` copies of random existing elements inserted
    /// at random positions.
    DuplicateHeavy,
    /// Every element equals `n`.
    Equal,
    /// Adversarial shape for this merge sort; identical construction to
    /// [`Scenario::Descending`].
    WorstCase,
}

impl Scenario {
    /// All scenarios in sweep order.
    pub const ALL: [Self; 9] = [
        Self::Random,
        Self::Descending,
        Self::Ascending,
        Self::ThreeExchanges,
        Self::AppendFew,
        Self::PercentNoisy,
        Self::DuplicateHeavy,
        Self::Equal,
        Self::WorstCase,
    ];

    /// Canonical kebab-case name, as accepted by [`Scenario::from_str`].
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Random => "random",
            Self::Descending => "descending",
            Self::Ascending => "ascending",
            Self::ThreeExchanges => "3-exchanges",
            Self::AppendFew => "append-few",
            Self::PercentNoisy => "percent-noisy",
            Self::DuplicateHeavy => "duplicate-heavy",
            Self::Equal => "equal",
            Self::WorstCase => "worst-case",
        }
    }

    /// Returns true if the scenario produces identical output for identical
    /// `n` (no randomness in its construction).
    #[must_use]
    pub const fn is_deterministic(self) -> bool {
        matches!(
            self,
            Self::Ascending | Self::Descending | Self::Equal | Self::WorstCase
        )
    }

    /// Output length for a nominal size `n`. Most scenarios return `n`
    /// elements; `append-few` and `duplicate-heavy` grow the sequence.
    #[must_use]
    pub const fn output_len(self, n: usize) -> usize {
        match self {
            Self::AppendFew => n + APPEND_COUNT,
            Self::DuplicateHeavy => n + n / 2,
            _ => n,
        }
    }
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a scenario name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct ScenarioError {
    /// The unrecognized name as given by the caller.
    pub name: String,
}

impl fmt::Display for ScenarioError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unrecognized scenario: {:?}", self.name)
    }
}

impl std::error::Error for ScenarioError {}

impl FromStr for Scenario {
    type Err = ScenarioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // "all-equal" is a historical alias for "equal"
        match s {
            "random" => Ok(Self::Random),
            "descending" => Ok(Self::Descending),
            "ascending" => Ok(Self::Ascending),
            "3-exchanges" => Ok(Self::ThreeExchanges),
            "append-few" => Ok(Self::AppendFew),
            "percent-noisy" => Ok(Self::PercentNoisy),
            "duplicate-heavy" => Ok(Self::DuplicateHeavy),
            "equal" | "all-equal" => Ok(Self::Equal),
            "worst-case" => Ok(Self::WorstCase),
            other => Err(ScenarioError {
                name: other.to_string(),
            }),
        }
    }
}

/// Builds a dataset of nominal size `n` shaped by `scenario`, drawing
/// randomness from `rng`.
///
/// A seeded RNG makes randomized scenarios reproducible; deterministic
/// scenarios never touch the RNG.
pub fn generate_with_rng<R: Rng + ?Sized>(n: usize, scenario: Scenario, rng: &mut R) -> Vec<i64> {
    match scenario {
        Scenario::Random => {
            let mut data = ascending(n);
            data.shuffle(rng);
            data
        }
        Scenario::Descending | Scenario::WorstCase => (1..=n as i64).rev().collect(),
        Scenario::Ascending => ascending(n),
        Scenario::ThreeExchanges => {
            let mut data = ascending(n);
            if n >= 2 {
                for _ in 0..EXCHANGE_COUNT {
                    let i = rng.gen_range(0..n);
                    let j = rng.gen_range(0..n);
                    data.swap(i, j);
                }
            }
            data
        }
        Scenario::AppendFew => {
            let mut data = ascending(n);
            let bound = (2 * n).max(1) as i64;
            data.extend((0..APPEND_COUNT).map(|_| rng.gen_range(0..bound)));
            data
        }
        Scenario::PercentNoisy => {
            let mut data = ascending(n);
            for _ in 0..n / 100 {
                let i = rng.gen_range(0..n);
                data[i] = rng.gen_range(0..=n as i64);
            }
            data
        }
        Scenario::DuplicateHeavy => {
            let mut data = ascending(n);
            for _ in 0..n / 2 {
                let src = rng.gen_range(0..data.len());
                let value = data[src];
                let at = rng.gen_range(0..=data.len());
                data.insert(at, value);
            }
            data
        }
        Scenario::Equal => vec![n as i64; n],
    }
}

/// Builds a dataset of nominal size `n` shaped by `scenario`, using the
/// thread-local RNG.
#[must_use]
pub fn generate(n: usize, scenario: Scenario) -> Vec<i64> {
    generate_with_rng(n, scenario, &mut rand::thread_rng())
}

/// Parses `name` and builds the dataset in one step.
///
/// # Errors
///
/// Returns [`ScenarioError`] if `name` is not one of the nine scenario names.
pub fn generate_named(n: usize, name: &str) -> Result<Vec<i64>, ScenarioError> {
    Ok(generate(n, name.parse()?))
}

fn ascending(n: usize) -> Vec<i64> {
    (0..n as i64).collect()
}
