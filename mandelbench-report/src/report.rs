//! Report data structures.

use chrono::{DateTime, Utc};
use mandelbench_kernel::{GridConfig, Strategy};
use mandelbench_stats::{SpeedupComparison, SummaryStatistics, Winner};
use serde::{Deserialize, Serialize};

/// Complete benchmark report: metadata, one entry per strategy run, and the
/// speedup comparison when both strategies ran.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    /// Run metadata: versions, system, grid configuration.
    pub meta: ReportMeta,
    /// One entry per strategy, in execution order.
    pub runs: Vec<StrategyRun>,
    /// Scalar-vs-batch speedup, present when both strategies ran.
    pub comparison: Option<SpeedupSummary>,
}

/// Report metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportMeta {
    /// Crate version that produced the report.
    pub version: String,
    /// UTC time of report generation.
    pub timestamp: DateTime<Utc>,
    /// Current git commit, when run inside a repository.
    pub git_commit: Option<String>,
    /// Current git branch, when run inside a repository.
    pub git_branch: Option<String>,
    /// Host details.
    pub system: SystemInfo,
    /// The grid configuration every run in this report used.
    pub grid: GridConfig,
    /// Untimed warmup calls per strategy.
    pub warmup_runs: u32,
    /// Timed calls per strategy.
    pub sample_runs: u32,
}

/// Host system information.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SystemInfo {
    /// Operating system name.
    pub os: String,
    /// CPU architecture.
    pub arch: String,
    /// CPU model name, "Unknown" where unavailable.
    pub cpu: String,
    /// Logical core count.
    pub cpu_cores: u32,
    /// Total memory in GB, 0 where unavailable.
    pub memory_gb: f64,
}

/// One strategy's timed run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StrategyRun {
    /// Which evaluator ran.
    pub strategy: Strategy,
    /// Wall-clock seconds of the first timed call - the canonical
    /// single-run benchmark duration.
    pub elapsed_seconds: f64,
    /// Iteration-count checksum of the computed grid.
    pub checksum: u64,
    /// Raw wall-clock samples in nanoseconds, one per timed call.
    pub samples_ns: Vec<f64>,
    /// Summary metrics; present for multi-sample runs.
    pub metrics: Option<RunMetrics>,
}

/// Summary timing metrics for a multi-sample run, all times in nanoseconds.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunMetrics {
    /// Mean time per kernel call.
    pub mean_ns: f64,
    /// Median time per kernel call.
    pub median_ns: f64,
    /// Sample standard deviation.
    pub std_dev_ns: f64,
    /// Fastest call.
    pub min_ns: f64,
    /// Slowest call.
    pub max_ns: f64,
    /// 50th percentile.
    pub p50_ns: f64,
    /// 90th percentile.
    pub p90_ns: f64,
    /// 95th percentile.
    pub p95_ns: f64,
    /// 99th percentile.
    pub p99_ns: f64,
    /// Number of timed calls.
    pub samples: usize,
    /// Mean cycles per call; 0 without a hardware counter.
    pub mean_cycles: f64,
}

impl RunMetrics {
    /// Project a statistics summary (plus the parallel cycle counts) into
    /// the serializable report shape.
    pub fn from_summary(summary: &SummaryStatistics, cycles: &[u64]) -> Self {
        let mean_cycles = if cycles.is_empty() {
            0.0
        } else {
            cycles.iter().map(|&c| c as f64).sum::<f64>() / cycles.len() as f64
        };
        Self {
            mean_ns: summary.mean,
            median_ns: summary.median,
            std_dev_ns: summary.std_dev,
            min_ns: summary.min,
            max_ns: summary.max,
            p50_ns: summary.p50,
            p90_ns: summary.p90,
            p95_ns: summary.p95,
            p99_ns: summary.p99,
            samples: summary.sample_count,
            mean_cycles,
        }
    }
}

/// Serializable projection of a [`SpeedupComparison`] between two named
/// strategies.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpeedupSummary {
    /// The baseline strategy.
    pub baseline: Strategy,
    /// The candidate strategy.
    pub candidate: Strategy,
    /// Baseline mean in nanoseconds.
    pub baseline_mean_ns: f64,
    /// Candidate mean in nanoseconds.
    pub candidate_mean_ns: f64,
    /// `baseline_mean / candidate_mean`; above 1.0 = candidate faster.
    pub speedup: f64,
    /// `(candidate - baseline) / baseline`.
    pub relative_change: f64,
    /// The faster strategy, `None` for a tie.
    pub faster: Option<Strategy>,
}

impl SpeedupSummary {
    /// Attach strategy identities to a raw comparison result.
    pub fn from_comparison(
        baseline: Strategy,
        candidate: Strategy,
        comparison: &SpeedupComparison,
    ) -> Self {
        let faster = match comparison.faster {
            Winner::Baseline => Some(baseline),
            Winner::Candidate => Some(candidate),
            Winner::Tie => None,
        };
        Self {
            baseline,
            candidate,
            baseline_mean_ns: comparison.baseline_mean_ns,
            candidate_mean_ns: comparison.candidate_mean_ns,
            speedup: comparison.speedup,
            relative_change: comparison.relative_change,
            faster,
        }
    }
}
