#![warn(missing_docs)]
//! Mandelbench Kernel - Escape-Iteration Evaluators
//!
//! This crate computes the Mandelbrot escape-iteration count for every pixel
//! of a rectangular sampling of the complex plane. Two strategies implement
//! the same contract:
//!
//! - [`compute_scalar`] - runs the quadratic-map recurrence to completion for
//!   one pixel at a time, in row-major order.
//! - [`compute_batch`] - advances the whole grid together, one recurrence
//!   round at a time, updating only the cells that are still active.
//!
//! Both produce bit-identical [`ResultGrid`]s for identical [`GridConfig`]s;
//! callers pick one per benchmark run. The kernel is pure and synchronous -
//! no timing, no I/O, no shared state between calls.

mod batch;
mod config;
mod grid;
mod scalar;

pub use batch::compute_batch;
pub use config::GridConfig;
pub use grid::{pixel_to_point, ResultGrid};
pub use scalar::{compute_scalar, escape_count};

use thiserror::Error;

/// Squared escape threshold: a point has escaped once `|z|² > 4` (radius 2).
///
/// Fixed by the definition of the benchmark kernel, not configurable.
pub const ESCAPE_RADIUS_SQ: f64 = 4.0;

/// Kernel input validation errors.
///
/// The kernel is total for all finite configurations apart from the dimension
/// guard; malformed ranges (inverted, zero-area) are computed as given.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum KernelError {
    /// Width or height is zero, which would make the pixel-to-plane step
    /// divide by zero. Reported before any computation begins.
    #[error("invalid grid dimensions {width}x{height}: width and height must be non-zero")]
    InvalidDimension {
        /// Requested pixel columns.
        width: usize,
        /// Requested pixel rows.
        height: usize,
    },
}

/// Evaluation strategy selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// Per-pixel iterative evaluation ([`compute_scalar`]).
    Scalar,
    /// Whole-grid masked-update evaluation ([`compute_batch`]).
    Batch,
}

impl Strategy {
    /// Both strategies, in canonical (baseline-first) order.
    pub const ALL: [Strategy; 2] = [Strategy::Scalar, Strategy::Batch];

    /// Run this strategy's evaluator over the configured grid.
    pub fn compute(self, config: &GridConfig) -> Result<ResultGrid, KernelError> {
        match self {
            Strategy::Scalar => compute_scalar(config),
            Strategy::Batch => compute_batch(config),
        }
    }

    /// Lowercase strategy name, as used in CLI arguments and reports.
    pub fn as_str(self) -> &'static str {
        match self {
            Strategy::Scalar => "scalar",
            Strategy::Batch => "batch",
        }
    }
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Strategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "scalar" => Ok(Strategy::Scalar),
            "batch" => Ok(Strategy::Batch),
            other => Err(format!("unknown strategy: {}", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strategy_round_trips_through_str() {
        for strategy in Strategy::ALL {
            assert_eq!(strategy.as_str().parse::<Strategy>(), Ok(strategy));
        }
        assert!("simd".parse::<Strategy>().is_err());
    }

    #[test]
    fn strategy_dispatch_matches_direct_calls() {
        let config = GridConfig {
            width: 8,
            height: 6,
            max_iter: 25,
            ..GridConfig::default()
        };
        assert_eq!(Strategy::Scalar.compute(&config), compute_scalar(&config));
        assert_eq!(Strategy::Batch.compute(&config), compute_batch(&config));
    }
}
