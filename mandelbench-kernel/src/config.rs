//! Grid configuration.
//!
//! All parameters are caller-supplied with the canonical benchmark defaults.
//! Serde defaults mirror [`GridConfig::default`] so a partial `[grid]` table
//! in a TOML config file fills in the rest.

use crate::KernelError;
use serde::{Deserialize, Serialize};

/// Configuration for one sampling of the complex plane.
///
/// Describes a `width × height` pixel rectangle mapped onto the complex-plane
/// rectangle `x_range × y_range`, plus the iteration cap. Ranges are taken as
/// given: an inverted or zero-area range produces a mirrored or collapsed
/// grid, never an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridConfig {
    /// Pixel columns. Must be non-zero.
    #[serde(default = "default_width")]
    pub width: usize,
    /// Pixel rows. Must be non-zero.
    #[serde(default = "default_height")]
    pub height: usize,
    /// Iteration cap. Every result entry lies in `[0, max_iter]`.
    #[serde(default = "default_max_iter")]
    pub max_iter: u32,
    /// Real-axis range `(min, max)`.
    #[serde(default = "default_x_range")]
    pub x_range: (f64, f64),
    /// Imaginary-axis range `(min, max)`.
    #[serde(default = "default_y_range")]
    pub y_range: (f64, f64),
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            max_iter: default_max_iter(),
            x_range: default_x_range(),
            y_range: default_y_range(),
        }
    }
}

fn default_width() -> usize {
    800
}
fn default_height() -> usize {
    600
}
fn default_max_iter() -> u32 {
    100
}
fn default_x_range() -> (f64, f64) {
    (-2.0, 1.0)
}
fn default_y_range() -> (f64, f64) {
    (-1.0, 1.0)
}

impl GridConfig {
    /// Check the dimension guard. Called by both evaluators before any
    /// computation; a failure is never surfaced as a partial result.
    pub fn validate(&self) -> Result<(), KernelError> {
        if self.width == 0 || self.height == 0 {
            return Err(KernelError::InvalidDimension {
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }

    /// Total number of grid cells (`width * height`).
    pub fn cell_count(&self) -> usize {
        self.width * self.height
    }
}
