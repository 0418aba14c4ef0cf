//! Summary statistics over timing samples.

/// Summary of one strategy's timing samples, all in nanoseconds.
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryStatistics {
    /// Arithmetic mean.
    pub mean: f64,
    /// 50th percentile.
    pub median: f64,
    /// Sample standard deviation (n-1 denominator); 0 for fewer than two
    /// samples.
    pub std_dev: f64,
    /// Fastest sample.
    pub min: f64,
    /// Slowest sample.
    pub max: f64,
    /// 50th percentile (same as `median`, kept for report symmetry).
    pub p50: f64,
    /// 90th percentile.
    pub p90: f64,
    /// 95th percentile.
    pub p95: f64,
    /// 99th percentile.
    pub p99: f64,
    /// Number of samples summarized.
    pub sample_count: usize,
}

impl SummaryStatistics {
    fn zeroed() -> Self {
        Self {
            mean: 0.0,
            median: 0.0,
            std_dev: 0.0,
            min: 0.0,
            max: 0.0,
            p50: 0.0,
            p90: 0.0,
            p95: 0.0,
            p99: 0.0,
            sample_count: 0,
        }
    }
}

/// Compute a single percentile from samples.
///
/// Uses linear interpolation between nearest ranks. Returns 0 for an empty
/// slice and the sole sample for a singleton.
pub fn compute_percentile(samples: &[f64], percentile: f64) -> f64 {
    if samples.is_empty() {
        return 0.0;
    }
    if samples.len() == 1 {
        return samples[0];
    }

    let mut sorted = samples.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    let n = sorted.len();
    let rank = (percentile / 100.0) * (n - 1) as f64;
    let lower_idx = rank.floor() as usize;
    let upper_idx = (lower_idx + 1).min(n - 1);
    let fraction = rank - lower_idx as f64;

    sorted[lower_idx] + fraction * (sorted[upper_idx] - sorted[lower_idx])
}

/// Summarize a strategy's timing samples.
///
/// An empty slice produces an all-zero summary rather than an error; the
/// caller decides whether a sample-less run is worth reporting.
pub fn compute_summary(samples: &[f64]) -> SummaryStatistics {
    if samples.is_empty() {
        return SummaryStatistics::zeroed();
    }

    let n = samples.len();
    let mean = samples.iter().sum::<f64>() / n as f64;

    let std_dev = if n < 2 {
        0.0
    } else {
        let variance = samples.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / (n - 1) as f64;
        variance.sqrt()
    };

    let min = samples.iter().copied().fold(f64::INFINITY, f64::min);
    let max = samples.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let median = compute_percentile(samples, 50.0);

    SummaryStatistics {
        mean,
        median,
        std_dev,
        min,
        max,
        p50: median,
        p90: compute_percentile(samples, 90.0),
        p95: compute_percentile(samples, 95.0),
        p99: compute_percentile(samples, 99.0),
        sample_count: n,
    }
}
