//! CSV output.
//!
//! Two flavors: the per-sample timing table for spreadsheet analysis, and
//! the full grid dump (`x,y,iter`, one pixel per row) for verifying kernel
//! output against other implementations.

use crate::report::Report;
use mandelbench_kernel::ResultGrid;

/// Generate the timing CSV: one row per timed sample across all runs.
pub fn generate_samples_csv(report: &Report) -> String {
    let mut out = String::from("strategy,sample,nanos\n");
    for run in &report.runs {
        for (index, nanos) in run.samples_ns.iter().enumerate() {
            out.push_str(&format!("{},{},{}\n", run.strategy, index, nanos));
        }
    }
    out
}

/// Generate the grid CSV: `x,y,iter` header, then one row per pixel in
/// row-major order.
pub fn generate_grid_csv(grid: &ResultGrid) -> String {
    // Rough row width: "x,y,iter\n" with small integers.
    let mut out = String::with_capacity(16 * grid.width() * grid.height() + 16);
    out.push_str("x,y,iter\n");
    for (row, counts) in grid.rows().enumerate() {
        for (col, &count) in counts.iter().enumerate() {
            out.push_str(&format!("{},{},{}\n", col, row, count));
        }
    }
    out
}
