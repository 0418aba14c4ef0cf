#![warn(missing_docs)]
//! Mandelbench Report - Output Generation
//!
//! The serializable report model plus the three output formats:
//! - human (terminal text; the six-decimal seconds line lives here)
//! - JSON (machine-readable, full schema)
//! - CSV (one row per timing sample, plus the grid dump)

mod csv;
mod human;
mod json;
mod report;

pub use csv::{generate_grid_csv, generate_samples_csv};
pub use human::{format_duration, format_human_output, format_seconds_line};
pub use json::generate_json_report;
pub use report::{Report, ReportMeta, RunMetrics, SpeedupSummary, StrategyRun, SystemInfo};

/// Output format selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable terminal output.
    Human,
    /// JSON with the full report schema.
    Json,
    /// CSV, one row per timing sample.
    Csv,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "human" | "text" => Ok(OutputFormat::Human),
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            other => Err(format!("unknown output format: {}", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_format_parses_known_names() {
        assert_eq!("human".parse(), Ok(OutputFormat::Human));
        assert_eq!("TEXT".parse(), Ok(OutputFormat::Human));
        assert_eq!("json".parse(), Ok(OutputFormat::Json));
        assert_eq!("csv".parse(), Ok(OutputFormat::Csv));
        assert!("html".parse::<OutputFormat>().is_err());
    }
}
