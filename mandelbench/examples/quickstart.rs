//! Minimal library usage: time both strategies once and print the speedup.
//!
//! Run with: cargo run --example quickstart -p mandelbench --release

use mandelbench::prelude::*;
use mandelbench::{compare, compute_summary};

fn main() -> Result<(), mandelbench::KernelError> {
    let config = GridConfig::default();
    let plan = RunPlan::sampled(1, 5);

    let scalar = run_strategy(Strategy::Scalar, &config, &plan)?;
    let batch = run_strategy(Strategy::Batch, &config, &plan)?;
    assert_eq!(scalar.grid, batch.grid);

    let comparison = compare(
        &compute_summary(&scalar.samples_ns),
        &compute_summary(&batch.samples_ns),
    );

    println!("scalar: {:.6} s", scalar.first_sample_seconds());
    println!("batch:  {:.6} s", batch.first_sample_seconds());
    println!("speedup (scalar -> batch): {:.2}x", comparison.speedup);
    Ok(())
}
