//! JSON output.

use crate::report::Report;

/// Generate a prettified JSON report.
pub fn generate_json_report(report: &Report) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::{ReportMeta, StrategyRun, SystemInfo};
    use mandelbench_kernel::{GridConfig, Strategy};

    fn sample_report() -> Report {
        Report {
            meta: ReportMeta {
                version: "0.1.0".to_string(),
                timestamp: chrono::Utc::now(),
                git_commit: None,
                git_branch: None,
                system: SystemInfo {
                    os: "linux".to_string(),
                    arch: "x86_64".to_string(),
                    cpu: "Unknown".to_string(),
                    cpu_cores: 4,
                    memory_gb: 0.0,
                },
                grid: GridConfig::default(),
                warmup_runs: 0,
                sample_runs: 1,
            },
            runs: vec![StrategyRun {
                strategy: Strategy::Scalar,
                elapsed_seconds: 0.125,
                checksum: 42,
                samples_ns: vec![125_000_000.0],
                metrics: None,
            }],
            comparison: None,
        }
    }

    #[test]
    fn report_round_trips_through_json() {
        let report = sample_report();
        let json = generate_json_report(&report).unwrap();
        let parsed: Report = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.runs.len(), 1);
        assert_eq!(parsed.runs[0].strategy, Strategy::Scalar);
        assert_eq!(parsed.runs[0].checksum, 42);
        assert_eq!(parsed.meta.grid, GridConfig::default());
    }

    #[test]
    fn strategy_serializes_lowercase() {
        let json = generate_json_report(&sample_report()).unwrap();
        assert!(json.contains("\"strategy\": \"scalar\""));
    }
}
