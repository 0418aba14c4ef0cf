#![warn(missing_docs)]
//! # Mandelbench
//!
//! Benchmark harness for the Mandelbrot escape-iteration kernel.
//!
//! Two strategies compute the same `height × width` grid of escape-iteration
//! counts and are guaranteed to agree bit-for-bit:
//!
//! - **scalar** - runs the `z ← z² + c` recurrence to completion for one
//!   pixel at a time, in row-major order.
//! - **batch** - advances the whole grid together, one masked recurrence
//!   round per pass, freezing cells as they escape.
//!
//! The harness times kernel calls (wall clock plus hardware cycle counters
//! where available), summarizes multi-sample runs, and reports the
//! scalar-vs-batch speedup.
//!
//! ## Quick Start
//!
//! ```
//! use mandelbench::prelude::*;
//!
//! let config = GridConfig {
//!     width: 64,
//!     height: 48,
//!     max_iter: 100,
//!     ..GridConfig::default()
//! };
//!
//! let record = run_strategy(Strategy::Batch, &config, &RunPlan::single_shot())?;
//! println!("batch took {:.6} s", record.first_sample_seconds());
//! # Ok::<(), mandelbench::KernelError>(())
//! ```

// Re-export the kernel surface
pub use mandelbench_kernel::{
    compute_batch, compute_scalar, escape_count, pixel_to_point, GridConfig, KernelError,
    ResultGrid, Strategy, ESCAPE_RADIUS_SQ,
};

// Re-export the measurement runtime
pub use mandelbench_core::{
    pin_to_cpu, run_strategy, Measurement, RunPlan, RunRecord, Stopwatch, HAS_CYCLE_COUNTER,
};

// Re-export statistics
pub use mandelbench_stats::{
    compare, compute_percentile, compute_summary, SpeedupComparison, SummaryStatistics, Winner,
};

// Re-export reporting
pub use mandelbench_report::{
    format_duration, format_human_output, format_seconds_line, generate_grid_csv,
    generate_json_report, generate_samples_csv, OutputFormat, Report, ReportMeta, RunMetrics,
    SpeedupSummary, StrategyRun, SystemInfo,
};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{
        compute_batch, compute_scalar, run_strategy, GridConfig, ResultGrid, RunPlan, Strategy,
    };
}
