//! System metadata collection for report headers.
//!
//! Git details come from invoking `git` directly; CPU model and memory are
//! read from `/proc` and gracefully degrade to "Unknown"/0 off Linux.

use chrono::Utc;
use mandelbench_kernel::GridConfig;
use mandelbench_report::{ReportMeta, SystemInfo};

/// Build report metadata: tool version, timestamp, git state, host details,
/// and the grid/run configuration being reported on.
pub fn build_report_meta(grid: &GridConfig, warmup_runs: u32, sample_runs: u32) -> ReportMeta {
    let git_commit = git_output(&["rev-parse", "HEAD"]);
    let git_branch = git_output(&["rev-parse", "--abbrev-ref", "HEAD"]);

    let system = SystemInfo {
        os: std::env::consts::OS.to_string(),
        arch: std::env::consts::ARCH.to_string(),
        cpu: cpu_model().unwrap_or_else(|| "Unknown".to_string()),
        cpu_cores: cpu_cores(),
        memory_gb: memory_gb().unwrap_or(0.0),
    };

    ReportMeta {
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: Utc::now(),
        git_commit,
        git_branch,
        system,
        grid: grid.clone(),
        warmup_runs,
        sample_runs,
    }
}

fn git_output(args: &[&str]) -> Option<String> {
    std::process::Command::new("git")
        .args(args)
        .output()
        .ok()
        .filter(|o| o.status.success())
        .and_then(|o| String::from_utf8(o.stdout).ok())
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

/// CPU model name from /proc/cpuinfo (Linux only).
fn cpu_model() -> Option<String> {
    #[cfg(target_os = "linux")]
    {
        std::fs::read_to_string("/proc/cpuinfo")
            .ok()
            .and_then(|content| {
                content
                    .lines()
                    .find(|l| l.starts_with("model name"))
                    .and_then(|l| l.split(':').nth(1))
                    .map(|s| s.trim().to_string())
            })
    }
    #[cfg(not(target_os = "linux"))]
    {
        None
    }
}

fn cpu_cores() -> u32 {
    std::thread::available_parallelism()
        .map(|n| n.get() as u32)
        .unwrap_or(1)
}

/// Total system memory in GB (Linux only).
fn memory_gb() -> Option<f64> {
    #[cfg(target_os = "linux")]
    {
        std::fs::read_to_string("/proc/meminfo")
            .ok()
            .and_then(|content| {
                content
                    .lines()
                    .find(|l| l.starts_with("MemTotal"))
                    .and_then(|l| {
                        l.split_whitespace()
                            .nth(1)
                            .and_then(|s| s.parse::<u64>().ok())
                    })
                    .map(|kb| kb as f64 / 1024.0 / 1024.0)
            })
    }
    #[cfg(not(target_os = "linux"))]
    {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn metadata_reflects_the_requested_run() {
        let grid = GridConfig {
            width: 320,
            height: 240,
            ..GridConfig::default()
        };
        let meta = build_report_meta(&grid, 2, 7);
        assert_eq!(meta.grid.width, 320);
        assert_eq!(meta.warmup_runs, 2);
        assert_eq!(meta.sample_runs, 7);
        assert_eq!(meta.version, env!("CARGO_PKG_VERSION"));
        assert!(meta.system.cpu_cores >= 1);
        assert!(!meta.system.os.is_empty());
    }
}
