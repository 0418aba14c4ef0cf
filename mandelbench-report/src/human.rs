//! Human-readable terminal output.

use crate::report::Report;

/// Format the canonical benchmark line: elapsed wall-clock seconds of one
/// kernel call, to six decimal places.
pub fn format_seconds_line(seconds: f64) -> String {
    format!("{:.6}", seconds)
}

/// Format a nanosecond quantity with a readable unit.
pub fn format_duration(ns: f64) -> String {
    if ns < 1_000.0 {
        format!("{:.0} ns", ns)
    } else if ns < 1_000_000.0 {
        format!("{:.2} µs", ns / 1_000.0)
    } else if ns < 1_000_000_000.0 {
        format!("{:.2} ms", ns / 1_000_000.0)
    } else {
        format!("{:.3} s", ns / 1_000_000_000.0)
    }
}

/// Format a full report for terminal display.
pub fn format_human_output(report: &Report) -> String {
    let mut output = String::new();

    output.push('\n');
    output.push_str("Mandelbench Results\n");
    output.push_str(&"=".repeat(60));
    output.push_str("\n\n");

    let grid = &report.meta.grid;
    output.push_str(&format!(
        "Grid: {}x{}  max_iter: {}  x: [{}, {}]  y: [{}, {}]\n\n",
        grid.width,
        grid.height,
        grid.max_iter,
        grid.x_range.0,
        grid.x_range.1,
        grid.y_range.0,
        grid.y_range.1,
    ));

    for run in &report.runs {
        output.push_str(&format!("  {}\n", run.strategy));
        output.push_str(&format!(
            "      time: {} s\n",
            format_seconds_line(run.elapsed_seconds)
        ));
        output.push_str(&format!("      checksum: {}\n", run.checksum));

        if let Some(metrics) = &run.metrics {
            output.push_str(&format!(
                "      mean: {}  median: {}  stddev: {}\n",
                format_duration(metrics.mean_ns),
                format_duration(metrics.median_ns),
                format_duration(metrics.std_dev_ns),
            ));
            output.push_str(&format!(
                "      min: {}  max: {}  samples: {}\n",
                format_duration(metrics.min_ns),
                format_duration(metrics.max_ns),
                metrics.samples,
            ));
            output.push_str(&format!(
                "      p50: {}  p95: {}  p99: {}\n",
                format_duration(metrics.p50_ns),
                format_duration(metrics.p95_ns),
                format_duration(metrics.p99_ns),
            ));
            if metrics.mean_cycles > 0.0 {
                output.push_str(&format!("      cycles: mean {:.0}\n", metrics.mean_cycles));
            }
        }

        output.push('\n');
    }

    if let Some(cmp) = &report.comparison {
        output.push_str(&format!("Speedup (baseline: {})\n", cmp.baseline));
        output.push_str(&"-".repeat(60));
        output.push('\n');
        let verdict = match cmp.faster {
            Some(winner) => format!("{} is faster", winner),
            None => "statistically a tie".to_string(),
        };
        output.push_str(&format!(
            "  {}: {:.2}x vs {} ({} -> {}), {}\n",
            cmp.candidate,
            cmp.speedup,
            cmp.baseline,
            format_duration(cmp.baseline_mean_ns),
            format_duration(cmp.candidate_mean_ns),
            verdict,
        ));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::{ReportMeta, SpeedupSummary, StrategyRun, SystemInfo};
    use mandelbench_kernel::{GridConfig, Strategy};
    use mandelbench_stats::{compare, compute_summary};

    #[test]
    fn seconds_line_is_six_decimals() {
        assert_eq!(format_seconds_line(0.1234567), "0.123457");
        assert_eq!(format_seconds_line(2.0), "2.000000");
    }

    #[test]
    fn duration_picks_a_sensible_unit() {
        assert_eq!(format_duration(500.0), "500 ns");
        assert_eq!(format_duration(1_500.0), "1.50 µs");
        assert_eq!(format_duration(2_500_000.0), "2.50 ms");
        assert_eq!(format_duration(3_200_000_000.0), "3.200 s");
    }

    #[test]
    fn human_output_contains_the_headline_and_speedup() {
        let baseline = compute_summary(&[200_000_000.0]);
        let candidate = compute_summary(&[100_000_000.0]);
        let report = Report {
            meta: ReportMeta {
                version: "0.1.0".to_string(),
                timestamp: chrono::Utc::now(),
                git_commit: None,
                git_branch: None,
                system: SystemInfo {
                    os: "linux".to_string(),
                    arch: "x86_64".to_string(),
                    cpu: "Unknown".to_string(),
                    cpu_cores: 1,
                    memory_gb: 0.0,
                },
                grid: GridConfig::default(),
                warmup_runs: 0,
                sample_runs: 1,
            },
            runs: vec![
                StrategyRun {
                    strategy: Strategy::Scalar,
                    elapsed_seconds: 0.2,
                    checksum: 99,
                    samples_ns: vec![200_000_000.0],
                    metrics: None,
                },
                StrategyRun {
                    strategy: Strategy::Batch,
                    elapsed_seconds: 0.1,
                    checksum: 99,
                    samples_ns: vec![100_000_000.0],
                    metrics: None,
                },
            ],
            comparison: Some(SpeedupSummary::from_comparison(
                Strategy::Scalar,
                Strategy::Batch,
                &compare(&baseline, &candidate),
            )),
        };

        let text = format_human_output(&report);
        assert!(text.contains("Mandelbench Results"));
        assert!(text.contains("time: 0.200000 s"));
        assert!(text.contains("checksum: 99"));
        assert!(text.contains("2.00x"));
        assert!(text.contains("batch is faster"));
    }
}
