//! Timed execution of kernel strategies.
//!
//! Each timed region wraps exactly one kernel call - nothing else is ever
//! inside the measurement window. Warmup calls run the same kernel but are
//! discarded, letting caches and the allocator settle before sampling starts.

use crate::measure::{Measurement, Stopwatch};
use mandelbench_kernel::{GridConfig, KernelError, ResultGrid, Strategy};

/// How many untimed and timed kernel calls a run makes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunPlan {
    /// Untimed kernel calls before sampling begins.
    pub warmup_runs: u32,
    /// Timed kernel calls; each produces one sample. Clamped to at least 1.
    pub sample_runs: u32,
}

impl Default for RunPlan {
    fn default() -> Self {
        Self::single_shot()
    }
}

impl RunPlan {
    /// One timed call, no warmup - the canonical benchmark measurement.
    pub fn single_shot() -> Self {
        Self {
            warmup_runs: 0,
            sample_runs: 1,
        }
    }

    /// Warmup followed by `sample_runs` timed calls.
    pub fn sampled(warmup_runs: u32, sample_runs: u32) -> Self {
        Self {
            warmup_runs,
            sample_runs: sample_runs.max(1),
        }
    }
}

/// Everything recorded while running one strategy under a [`RunPlan`].
#[derive(Debug, Clone)]
pub struct RunRecord {
    /// The strategy that was run.
    pub strategy: Strategy,
    /// Wall-clock nanoseconds per timed call, in execution order.
    pub samples_ns: Vec<f64>,
    /// Cycle counts per timed call, parallel with `samples_ns`.
    pub cycles: Vec<u64>,
    /// The result grid from the final timed call.
    pub grid: ResultGrid,
}

impl RunRecord {
    /// Elapsed seconds of the first timed call - the single-run duration a
    /// default benchmark invocation reports.
    pub fn first_sample_seconds(&self) -> f64 {
        self.samples_ns.first().copied().unwrap_or(0.0) / 1e9
    }

    /// Iteration-count checksum of the computed grid.
    pub fn checksum(&self) -> u64 {
        self.grid.iteration_sum()
    }
}

fn timed_call(
    strategy: Strategy,
    config: &GridConfig,
) -> Result<(ResultGrid, Measurement), KernelError> {
    let watch = Stopwatch::start();
    let grid = strategy.compute(config)?;
    let measurement = watch.stop();
    Ok((grid, measurement))
}

/// Run one strategy under the plan.
///
/// Validation happens before any kernel call so an invalid config fails
/// synchronously, never after a partial run.
pub fn run_strategy(
    strategy: Strategy,
    config: &GridConfig,
    plan: &RunPlan,
) -> Result<RunRecord, KernelError> {
    config.validate()?;

    for _ in 0..plan.warmup_runs {
        let _ = strategy.compute(config)?;
    }

    let runs = plan.sample_runs.max(1);
    let mut samples_ns = Vec::with_capacity(runs as usize);
    let mut cycles = Vec::with_capacity(runs as usize);

    let (mut grid, measurement) = timed_call(strategy, config)?;
    samples_ns.push(measurement.nanos() as f64);
    cycles.push(measurement.cycles);

    for _ in 1..runs {
        let (next, measurement) = timed_call(strategy, config)?;
        samples_ns.push(measurement.nanos() as f64);
        cycles.push(measurement.cycles);
        // The kernel is pure; any drift between samples is a kernel bug.
        debug_assert_eq!(grid, next, "kernel output drifted between samples");
        grid = next;
    }

    Ok(RunRecord {
        strategy,
        samples_ns,
        cycles,
        grid,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_config() -> GridConfig {
        GridConfig {
            width: 16,
            height: 12,
            max_iter: 30,
            ..GridConfig::default()
        }
    }

    #[test]
    fn single_shot_records_one_sample() {
        let record =
            run_strategy(Strategy::Scalar, &small_config(), &RunPlan::single_shot()).unwrap();
        assert_eq!(record.samples_ns.len(), 1);
        assert_eq!(record.cycles.len(), 1);
        assert!(record.first_sample_seconds() > 0.0);
    }

    #[test]
    fn sampled_plan_records_each_timed_call() {
        let plan = RunPlan::sampled(2, 5);
        let record = run_strategy(Strategy::Batch, &small_config(), &plan).unwrap();
        assert_eq!(record.samples_ns.len(), 5);
        assert!(record.samples_ns.iter().all(|&ns| ns > 0.0));
    }

    #[test]
    fn zero_sample_plan_is_clamped_to_one() {
        let plan = RunPlan {
            warmup_runs: 0,
            sample_runs: 0,
        };
        let record = run_strategy(Strategy::Scalar, &small_config(), &plan).unwrap();
        assert_eq!(record.samples_ns.len(), 1);
    }

    #[test]
    fn both_strategies_agree_on_the_checksum() {
        let config = small_config();
        let plan = RunPlan::single_shot();
        let scalar = run_strategy(Strategy::Scalar, &config, &plan).unwrap();
        let batch = run_strategy(Strategy::Batch, &config, &plan).unwrap();
        assert_eq!(scalar.checksum(), batch.checksum());
        assert_eq!(scalar.grid, batch.grid);
    }

    #[test]
    fn invalid_config_fails_before_any_sampling() {
        let config = GridConfig {
            width: 0,
            ..GridConfig::default()
        };
        let err = run_strategy(Strategy::Scalar, &config, &RunPlan::default()).unwrap_err();
        assert_eq!(
            err,
            KernelError::InvalidDimension {
                width: 0,
                height: 600
            }
        );
    }
}
