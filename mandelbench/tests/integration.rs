//! Integration tests for mandelbench.
//!
//! These exercise the full pipeline the CLI drives: timed strategy runs,
//! statistics over the samples, and report generation.

use mandelbench::{
    compare, compute_summary, format_human_output, generate_grid_csv, generate_json_report,
    GridConfig, Report, ReportMeta, RunMetrics, RunPlan, SpeedupSummary, Strategy, StrategyRun,
    SystemInfo,
};

fn bench_config() -> GridConfig {
    GridConfig {
        width: 48,
        height: 36,
        max_iter: 60,
        ..GridConfig::default()
    }
}

fn test_meta(grid: &GridConfig, sample_runs: u32) -> ReportMeta {
    ReportMeta {
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
        git_commit: None,
        git_branch: None,
        system: SystemInfo {
            os: std::env::consts::OS.to_string(),
            arch: std::env::consts::ARCH.to_string(),
            cpu: "test".to_string(),
            cpu_cores: 1,
            memory_gb: 0.0,
        },
        grid: grid.clone(),
        warmup_runs: 0,
        sample_runs,
    }
}

/// Both strategies, run through the timing loop, agree on the full grid.
#[test]
fn timed_runs_preserve_kernel_equivalence() {
    let config = bench_config();
    let plan = RunPlan::single_shot();

    let scalar = mandelbench::run_strategy(Strategy::Scalar, &config, &plan).unwrap();
    let batch = mandelbench::run_strategy(Strategy::Batch, &config, &plan).unwrap();

    assert_eq!(scalar.grid, batch.grid);
    assert_eq!(scalar.checksum(), batch.checksum());
    assert_eq!(scalar.samples_ns.len(), 1);
}

/// A sampled run produces a usable summary: positive times, min <= mean <= max.
#[test]
fn sampled_run_summarizes_cleanly() {
    let record =
        mandelbench::run_strategy(Strategy::Scalar, &bench_config(), &RunPlan::sampled(1, 8))
            .unwrap();
    assert_eq!(record.samples_ns.len(), 8);

    let summary = compute_summary(&record.samples_ns);
    assert_eq!(summary.sample_count, 8);
    assert!(summary.min > 0.0);
    assert!(summary.min <= summary.mean && summary.mean <= summary.max);
    assert!(summary.p50 <= summary.p99);
}

/// The full report pipeline: two runs, comparison, JSON round trip.
#[test]
fn report_pipeline_round_trips() {
    let config = bench_config();
    let plan = RunPlan::sampled(0, 4);

    let records = [
        mandelbench::run_strategy(Strategy::Scalar, &config, &plan).unwrap(),
        mandelbench::run_strategy(Strategy::Batch, &config, &plan).unwrap(),
    ];

    let runs: Vec<StrategyRun> = records
        .iter()
        .map(|record| StrategyRun {
            strategy: record.strategy,
            elapsed_seconds: record.first_sample_seconds(),
            checksum: record.checksum(),
            samples_ns: record.samples_ns.clone(),
            metrics: Some(RunMetrics::from_summary(
                &compute_summary(&record.samples_ns),
                &record.cycles,
            )),
        })
        .collect();

    let comparison = SpeedupSummary::from_comparison(
        Strategy::Scalar,
        Strategy::Batch,
        &compare(
            &compute_summary(&records[0].samples_ns),
            &compute_summary(&records[1].samples_ns),
        ),
    );

    let report = Report {
        meta: test_meta(&config, 4),
        runs,
        comparison: Some(comparison),
    };

    let json = generate_json_report(&report).unwrap();
    let parsed: Report = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed.runs.len(), 2);
    assert_eq!(parsed.runs[0].strategy, Strategy::Scalar);
    assert_eq!(parsed.runs[0].checksum, parsed.runs[1].checksum);
    assert!(parsed.comparison.is_some());

    let human = format_human_output(&report);
    assert!(human.contains("Mandelbench Results"));
    assert!(human.contains("scalar"));
    assert!(human.contains("batch"));
    assert!(human.contains("Speedup"));
}

/// Grid CSV export matches the computed grid cell-for-cell.
#[test]
fn grid_csv_matches_the_grid() {
    let config = GridConfig {
        width: 5,
        height: 4,
        max_iter: 25,
        ..GridConfig::default()
    };
    let record =
        mandelbench::run_strategy(Strategy::Batch, &config, &RunPlan::single_shot()).unwrap();
    let csv = generate_grid_csv(&record.grid);

    let mut lines = csv.lines();
    assert_eq!(lines.next(), Some("x,y,iter"));
    for (row, counts) in record.grid.rows().enumerate() {
        for (col, &count) in counts.iter().enumerate() {
            assert_eq!(lines.next(), Some(format!("{},{},{}", col, row, count).as_str()));
        }
    }
    assert_eq!(lines.next(), None);
}
