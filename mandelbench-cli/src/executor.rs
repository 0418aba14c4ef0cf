//! Benchmark execution and output dispatch.
//!
//! Resolves the effective settings (CLI flag > config file > built-in
//! default), runs each selected strategy under the run plan, and emits the
//! result in the requested format.
//!
//! A bare single-strategy, single-sample, human-format run stays minimal:
//! one line of elapsed seconds on stdout, nothing else. Every other
//! combination produces the full report.

use crate::config::MandelbenchConfig;
use crate::metadata::build_report_meta;
use crate::Cli;
use anyhow::Context;
use indicatif::{ProgressBar, ProgressStyle};
use mandelbench_core::{pin_to_cpu, run_strategy, RunPlan, RunRecord};
use mandelbench_kernel::{GridConfig, Strategy};
use mandelbench_report::{
    format_human_output, format_seconds_line, generate_grid_csv, generate_json_report,
    generate_samples_csv, OutputFormat, Report, RunMetrics, SpeedupSummary, StrategyRun,
};
use mandelbench_stats::{compare, compute_summary};
use std::path::PathBuf;

/// Fully resolved execution settings.
#[derive(Debug, Clone)]
pub struct ExecutionSettings {
    /// Strategies to run, in order.
    pub strategies: Vec<Strategy>,
    /// The grid every strategy is evaluated on.
    pub grid: GridConfig,
    /// Warmup/sample plan applied to each strategy.
    pub plan: RunPlan,
    /// Output format.
    pub format: OutputFormat,
    /// Report destination; stdout when `None`.
    pub output: Option<PathBuf>,
    /// Grid CSV destination, if requested.
    pub save_grid: Option<PathBuf>,
    /// Print the iteration-count checksum in minimal mode.
    pub print_checksum: bool,
    /// CPU core to pin to before timing.
    pub pin_cpu: Option<usize>,
    /// Force the full report even for a bare single run.
    pub verbose: bool,
}

impl ExecutionSettings {
    /// Merge CLI flags over file-level configuration over built-in defaults.
    pub fn resolve(cli: &Cli, file: MandelbenchConfig) -> anyhow::Result<Self> {
        let mut grid = file.grid;
        if let Some(width) = cli.width {
            grid.width = width;
        }
        if let Some(height) = cli.height {
            grid.height = height;
        }
        if let Some(max_iter) = cli.max_iter {
            grid.max_iter = max_iter;
        }
        if let Some(x_min) = cli.x_min {
            grid.x_range.0 = x_min;
        }
        if let Some(x_max) = cli.x_max {
            grid.x_range.1 = x_max;
        }
        if let Some(y_min) = cli.y_min {
            grid.y_range.0 = y_min;
        }
        if let Some(y_max) = cli.y_max {
            grid.y_range.1 = y_max;
        }

        let warmup_runs = cli.warmup.unwrap_or(file.runner.warmup_runs);
        let sample_runs = cli.samples.unwrap_or(file.runner.sample_runs);

        let format_name = cli.format.clone().unwrap_or(file.output.format);
        let format: OutputFormat = format_name.parse().map_err(anyhow::Error::msg)?;

        Ok(Self {
            strategies: cli.strategy.strategies(),
            grid,
            plan: RunPlan::sampled(warmup_runs, sample_runs),
            format,
            output: cli.output.clone(),
            save_grid: cli
                .save_grid
                .clone()
                .or_else(|| file.output.save_grid.map(PathBuf::from)),
            print_checksum: cli.checksum || file.output.checksum,
            pin_cpu: cli.pin_cpu.or(file.runner.pin_cpu),
            verbose: cli.verbose,
        })
    }

    /// Whether this run stays in minimal-output mode: one strategy, one
    /// timed call, human format to stdout, no verbosity requested.
    fn is_minimal(&self) -> bool {
        self.format == OutputFormat::Human
            && self.strategies.len() == 1
            && self.plan.sample_runs == 1
            && self.output.is_none()
            && !self.verbose
    }
}

/// Run the resolved settings to completion and emit output.
pub fn execute(settings: &ExecutionSettings) -> anyhow::Result<()> {
    if let Some(cpu) = settings.pin_cpu {
        pin_to_cpu(cpu).with_context(|| format!("failed to pin to CPU core {}", cpu))?;
        log::debug!("pinned to CPU core {}", cpu);
    }
    log::debug!(
        "running {:?} on {}x{} (max_iter {}), {} warmup + {} timed call(s) each",
        settings.strategies,
        settings.grid.width,
        settings.grid.height,
        settings.grid.max_iter,
        settings.plan.warmup_runs,
        settings.plan.sample_runs,
    );

    let progress = multi_sample_progress(settings);

    let mut records = Vec::with_capacity(settings.strategies.len());
    for &strategy in &settings.strategies {
        if let Some(bar) = &progress {
            bar.set_message(strategy.to_string());
        }
        let record = run_strategy(strategy, &settings.grid, &settings.plan)
            .with_context(|| format!("{} evaluation failed", strategy))?;
        if let Some(bar) = &progress {
            bar.inc(1);
        }
        records.push(record);
    }
    if let Some(bar) = progress {
        bar.finish_and_clear();
    }

    if let Some(path) = &settings.save_grid {
        if let Some(record) = records.last() {
            std::fs::write(path, generate_grid_csv(&record.grid))
                .with_context(|| format!("failed to write grid CSV to {}", path.display()))?;
            log::info!("grid written to {}", path.display());
        }
    }

    if settings.is_minimal() {
        let record = &records[0];
        if settings.print_checksum {
            println!("Result: {}", record.checksum());
        }
        println!("{}", format_seconds_line(record.first_sample_seconds()));
        return Ok(());
    }

    let report = build_report(settings, &records);
    let rendered = match settings.format {
        OutputFormat::Human => format_human_output(&report),
        OutputFormat::Json => {
            let mut json =
                generate_json_report(&report).context("failed to serialize report")?;
            json.push('\n');
            json
        }
        OutputFormat::Csv => generate_samples_csv(&report),
    };

    match &settings.output {
        Some(path) => {
            std::fs::write(path, rendered)
                .with_context(|| format!("failed to write report to {}", path.display()))?;
            log::info!("report written to {}", path.display());
        }
        None => print!("{}", rendered),
    }

    Ok(())
}

fn multi_sample_progress(settings: &ExecutionSettings) -> Option<ProgressBar> {
    if settings.plan.sample_runs <= 1 {
        return None;
    }
    let bar = ProgressBar::new(settings.strategies.len() as u64);
    let style = ProgressStyle::with_template("{spinner} [{bar:30}] {pos}/{len} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar());
    bar.set_style(style);
    Some(bar)
}

/// Assemble the report: per-strategy entries plus the baseline-vs-candidate
/// speedup when exactly two strategies ran.
pub(crate) fn build_report(settings: &ExecutionSettings, records: &[RunRecord]) -> Report {
    let meta = build_report_meta(
        &settings.grid,
        settings.plan.warmup_runs,
        settings.plan.sample_runs,
    );

    let runs = records
        .iter()
        .map(|record| {
            let metrics = (record.samples_ns.len() > 1).then(|| {
                RunMetrics::from_summary(&compute_summary(&record.samples_ns), &record.cycles)
            });
            StrategyRun {
                strategy: record.strategy,
                elapsed_seconds: record.first_sample_seconds(),
                checksum: record.checksum(),
                samples_ns: record.samples_ns.clone(),
                metrics,
            }
        })
        .collect();

    let comparison = match records {
        [baseline, candidate] => {
            let baseline_summary = compute_summary(&baseline.samples_ns);
            let candidate_summary = compute_summary(&candidate.samples_ns);
            Some(SpeedupSummary::from_comparison(
                baseline.strategy,
                candidate.strategy,
                &compare(&baseline_summary, &candidate_summary),
            ))
        }
        _ => None,
    };

    Report {
        meta,
        runs,
        comparison,
    }
}
