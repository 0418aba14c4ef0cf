//! Batch evaluator: whole-grid masked-update rounds.
//!
//! Represents the grid as parallel flat arrays of real/imaginary state and
//! advances every still-active cell together, one recurrence round per pass.
//! The active mask is recomputed from the *prior* round's `z` before any cell
//! updates - a cell whose magnitude has exceeded the threshold is frozen, and
//! its count keeps the index of the last round in which it was active. That
//! check-before-update ordering is what makes the counts agree cell-for-cell
//! with the scalar evaluator; masking after the update would shift every
//! boundary cell by one round.

use crate::grid::{pixel_to_point, ResultGrid};
use crate::{GridConfig, KernelError, ESCAPE_RADIUS_SQ};

/// Evaluate the whole grid as `max_iter` masked recurrence rounds.
///
/// Runs the full round count even once every cell has escaped - the batch
/// contract is a fixed number of whole-grid passes, not an early-exit search.
pub fn compute_batch(config: &GridConfig) -> Result<ResultGrid, KernelError> {
    config.validate()?;
    let cells = config.cell_count();

    // Materialize the coordinate arrays up front (the meshgrid step).
    let mut cr = vec![0.0_f64; cells];
    let mut ci = vec![0.0_f64; cells];
    for row in 0..config.height {
        for col in 0..config.width {
            let (x0, y0) = pixel_to_point(col, row, config);
            let idx = row * config.width + col;
            cr[idx] = x0;
            ci[idx] = y0;
        }
    }

    let mut zr = vec![0.0_f64; cells];
    let mut zi = vec![0.0_f64; cells];
    let mut counts = vec![0_u32; cells];
    let mut active = vec![false; cells];

    for round in 0..config.max_iter {
        // Mask pass: decided for every cell from the pre-round z, before any
        // cell of this round updates.
        for idx in 0..cells {
            active[idx] = zr[idx] * zr[idx] + zi[idx] * zi[idx] <= ESCAPE_RADIUS_SQ;
        }

        // Update pass: advance and stamp only the active cells. Operand
        // order matches the scalar recurrence exactly so the two strategies
        // stay bit-identical.
        for idx in 0..cells {
            if active[idx] {
                let zr_next = zr[idx] * zr[idx] - zi[idx] * zi[idx] + cr[idx];
                zi[idx] = 2.0 * zr[idx] * zi[idx] + ci[idx];
                zr[idx] = zr_next;
                counts[idx] = round + 1;
            }
        }
    }

    Ok(ResultGrid::from_counts(config.width, config.height, counts))
}
