// SPDX-License-Identifier: MIT

//! Command-line entry point: runs the size × scenario sweep and prints the
//! comparative report.

use std::process::ExitCode;

use clap::Parser;
use tracing::info;

use mergebench::bench::{run_sweep, SweepConfig, Winner};
use mergebench::workload::Scenario;

/// Benchmarks a stable merge sort against the standard-library sort across
/// adversarial input shapes.
#[derive(Debug, Parser)]
#[command(name = "mergebench", version, about)]
struct Cli {
    /// Dataset sizes to sweep.
    #[arg(long, value_delimiter = ',', default_values_t = [1_000usize, 10_000, 100_000])]
    sizes: Vec<usize>,

    /// Scenarios to sweep (default: all nine).
    #[arg(long, value_delimiter = ',')]
    scenarios: Option<Vec<Scenario>>,

    /// Seed for dataset generation; omit for a fresh entropy seed per run.
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> ExitCode {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .try_init();

    let cli = Cli::parse();
    let config = SweepConfig {
        sizes: cli.sizes,
        scenarios: cli
            .scenarios
            .unwrap_or_else(|| Scenario::ALL.to_vec()),
        seed: cli.seed,
    };

    info!(
        sizes = ?config.sizes,
        scenarios = config.scenarios.len(),
        seed = ?config.seed,
        "starting sweep"
    );

    let results = match run_sweep(&config) {
        Ok(results) => results,
        Err(e) => {
            eprintln!("mergebench: {e}");
            return ExitCode::FAILURE;
        }
    };

    let mut merge_sort_wins = 0usize;
    println!(
        "{:>9}  {:<15}  {:>14}  {:>14}  winner",
        "size", "scenario", "merge sort", "reference"
    );
    for c in &results {
        let (winner, winning) = match c.winner() {
            Winner::MergeSort => {
                merge_sort_wins += 1;
                ("merge sort", c.merge_sort)
            }
            Winner::Reference => ("reference", c.reference),
        };
        println!(
            "{:>9}  {:<15}  {:>14?}  {:>14?}  {winner} ({winning:?})",
            c.size,
            c.scenario.to_string(),
            c.merge_sort,
            c.reference,
        );
    }
    println!(
        "\nmerge sort won {merge_sort_wins} of {} comparisons",
        results.len()
    );

    ExitCode::SUCCESS
}
