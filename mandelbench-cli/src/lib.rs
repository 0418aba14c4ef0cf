#![warn(missing_docs)]
//! Mandelbench CLI
//!
//! The `mandelbench` binary: parses arguments, discovers an optional
//! `mandelbench.toml`, runs the selected kernel strategies under timing, and
//! emits the report in the requested format.
//!
//! A bare `mandelbench scalar` prints a single line - the elapsed seconds of
//! one kernel call, to six decimal places. Everything beyond that (sampling,
//! statistics, JSON/CSV reports, grid dumps) is opt-in via flags.

mod config;
mod executor;
mod metadata;

pub use config::{MandelbenchConfig, OutputConfig, RunnerConfig};
pub use executor::{execute, ExecutionSettings};
pub use metadata::build_report_meta;

use clap::{Parser, ValueEnum};
use mandelbench_kernel::Strategy;
use std::path::PathBuf;

/// Strategy selection argument; `both` expands to scalar then batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StrategyArg {
    /// Per-pixel iterative evaluator.
    Scalar,
    /// Whole-grid masked-update evaluator.
    Batch,
    /// Run scalar first, then batch, and compare.
    Both,
}

impl StrategyArg {
    /// The kernel strategies this argument selects, in execution order.
    pub fn strategies(self) -> Vec<Strategy> {
        match self {
            StrategyArg::Scalar => vec![Strategy::Scalar],
            StrategyArg::Batch => vec![Strategy::Batch],
            StrategyArg::Both => Strategy::ALL.to_vec(),
        }
    }
}

impl std::fmt::Display for StrategyArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            StrategyArg::Scalar => "scalar",
            StrategyArg::Batch => "batch",
            StrategyArg::Both => "both",
        };
        f.write_str(name)
    }
}

/// Mandelbench CLI arguments.
#[derive(Parser, Debug)]
#[command(name = "mandelbench")]
#[command(author, version, about = "Mandelbrot kernel benchmark - scalar vs batch evaluation")]
#[command(allow_negative_numbers = true)]
pub struct Cli {
    /// Strategy to benchmark
    #[arg(value_enum, default_value_t = StrategyArg::Both)]
    pub strategy: StrategyArg,

    /// Grid width in pixels
    #[arg(long)]
    pub width: Option<usize>,

    /// Grid height in pixels
    #[arg(long)]
    pub height: Option<usize>,

    /// Iteration cap per pixel
    #[arg(long)]
    pub max_iter: Option<u32>,

    /// Real-axis range minimum
    #[arg(long)]
    pub x_min: Option<f64>,

    /// Real-axis range maximum
    #[arg(long)]
    pub x_max: Option<f64>,

    /// Imaginary-axis range minimum
    #[arg(long)]
    pub y_min: Option<f64>,

    /// Imaginary-axis range maximum
    #[arg(long)]
    pub y_max: Option<f64>,

    /// Timed kernel calls per strategy
    #[arg(long, short = 'n')]
    pub samples: Option<u32>,

    /// Untimed warmup calls per strategy
    #[arg(long)]
    pub warmup: Option<u32>,

    /// Output format: human, json, csv
    #[arg(long)]
    pub format: Option<String>,

    /// Output file (stdout if not specified)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Write the computed grid as CSV (x,y,iter) to this path
    #[arg(long)]
    pub save_grid: Option<PathBuf>,

    /// Print the iteration-count checksum after each run
    #[arg(long)]
    pub checksum: bool,

    /// Pin the process to this CPU core before timing
    #[arg(long)]
    pub pin_cpu: Option<usize>,

    /// Load configuration from this file instead of discovering
    /// mandelbench.toml
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Always print the full report, even for a bare single run
    #[arg(short, long)]
    pub verbose: bool,
}

/// Run the CLI to completion: resolve settings, execute, emit output.
pub fn run(cli: Cli) -> anyhow::Result<()> {
    let file_config = config::resolve_file_config(cli.config.as_deref())?;
    let settings = ExecutionSettings::resolve(&cli, file_config)?;
    execute(&settings)
}
