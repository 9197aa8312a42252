// SPDX-License-Identifier: MIT

//! # `mergebench` — comparative sort benchmarking
//!
//! Races a stable top-down merge sort against the standard library's
//! `sort_unstable` across varied input sizes and adversarial input shapes,
//! reporting single-run wall-clock timings per `(size, scenario)` cell.
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`sort`] | Stable merge sort over half-open index ranges |
//! | [`block`] | In-place rotation and binary-search primitives |
//! | [`workload`] | Nine named input-shape generators |
//! | [`bench`] | Single-run timing harness and size × scenario sweep |
//!
//! ## Usage
//!
//! ```
//! use mergebench::bench::{run_sweep, SweepConfig, Winner};
//!
//! let config = SweepConfig {
//!     sizes: vec![1_000],
//!     seed: Some(42),
//!     ..SweepConfig::default()
//! };
//! for c in run_sweep(&config).unwrap() {
//!     match c.winner() {
//!         Winner::MergeSort => println!("{} {}: merge sort wins", c.size, c.scenario),
//!         Winner::Reference => println!("{} {}: reference wins", c.size, c.scenario),
//!     }
//! }
//! ```

pub mod bench;
pub mod block;
pub mod sort;
pub mod workload;
