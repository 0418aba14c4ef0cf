//! Scalar evaluator: one pixel at a time.

use crate::grid::{pixel_to_point, ResultGrid};
use crate::{GridConfig, KernelError, ESCAPE_RADIUS_SQ};

/// Escape-iteration count for a single sample point `c = x0 + i·y0`.
///
/// Runs `z ← z² + c` from `z = 0` until `|z|² > 4` or the cap is hit, and
/// returns the number of updates performed. The magnitude check precedes each
/// update, so the initial `z = 0` always admits at least one update (unless
/// `max_iter` is 0) and the returned count is the index of the first round
/// whose *post*-update magnitude exceeded the threshold.
#[inline]
pub fn escape_count(x0: f64, y0: f64, max_iter: u32) -> u32 {
    let mut x = 0.0_f64;
    let mut y = 0.0_f64;
    let mut iteration = 0_u32;
    while x * x + y * y <= ESCAPE_RADIUS_SQ && iteration < max_iter {
        let x_next = x * x - y * y + x0;
        y = 2.0 * x * y + y0;
        x = x_next;
        iteration += 1;
    }
    iteration
}

/// Evaluate the whole grid pixel-by-pixel.
///
/// Traversal is row-major (row outer, column inner) - numerically irrelevant
/// but the canonical order for a reproducible output layout.
pub fn compute_scalar(config: &GridConfig) -> Result<ResultGrid, KernelError> {
    config.validate()?;
    let mut grid = ResultGrid::zeroed(config.width, config.height);
    for row in 0..config.height {
        for col in 0..config.width {
            let (x0, y0) = pixel_to_point(col, row, config);
            grid.set(row, col, escape_count(x0, y0, config.max_iter));
        }
    }
    Ok(grid)
}
