#![warn(missing_docs)]
//! Mandelbench Core - Measurement Runtime
//!
//! Owns everything the kernel deliberately does not: wall-clock and
//! cycle-counter timing, CPU affinity pinning, and the run loop that wraps
//! each kernel call in exactly one scoped measurement. The kernel stays
//! timing-agnostic and referentially transparent; this crate draws the
//! measurement boundary around it.

mod measure;
mod runner;

pub use measure::{pin_to_cpu, Measurement, Stopwatch, HAS_CYCLE_COUNTER};
pub use runner::{run_strategy, RunPlan, RunRecord};
