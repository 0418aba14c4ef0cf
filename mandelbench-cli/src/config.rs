//! Configuration loading from mandelbench.toml
//!
//! Benchmark defaults can live in a `mandelbench.toml` next to the project
//! (or any ancestor directory); discovery walks up from the current
//! directory. Every table and field is optional - CLI flags override file
//! values, which override built-in defaults.
//!
//! ```toml
//! [grid]
//! width = 1600
//! height = 1200
//! max_iter = 250
//!
//! [runner]
//! warmup_runs = 2
//! sample_runs = 10
//!
//! [output]
//! format = "json"
//! ```

use mandelbench_kernel::GridConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// File-level configuration, mirrored after the CLI surface.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct MandelbenchConfig {
    /// Grid defaults; fields not present fall back to the kernel defaults.
    #[serde(default)]
    pub grid: GridConfig,
    /// Run-loop defaults.
    #[serde(default)]
    pub runner: RunnerConfig,
    /// Output defaults.
    #[serde(default)]
    pub output: OutputConfig,
}

/// Run-loop configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunnerConfig {
    /// Untimed warmup calls per strategy.
    #[serde(default)]
    pub warmup_runs: u32,
    /// Timed calls per strategy.
    #[serde(default = "default_sample_runs")]
    pub sample_runs: u32,
    /// Pin to this CPU core before timing.
    #[serde(default)]
    pub pin_cpu: Option<usize>,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            warmup_runs: 0,
            sample_runs: default_sample_runs(),
            pin_cpu: None,
        }
    }
}

fn default_sample_runs() -> u32 {
    1
}

/// Output configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Default output format: "human", "json", or "csv".
    #[serde(default = "default_format")]
    pub format: String,
    /// Write the computed grid as CSV to this path after every run.
    #[serde(default)]
    pub save_grid: Option<String>,
    /// Print the iteration-count checksum after each run.
    #[serde(default)]
    pub checksum: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: default_format(),
            save_grid: None,
            checksum: false,
        }
    }
}

fn default_format() -> String {
    "human".to_string()
}

impl MandelbenchConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }

    /// Discover and load configuration by walking up from the current
    /// directory. Returns `None` when no `mandelbench.toml` exists.
    pub fn discover() -> Option<Self> {
        let mut dir = std::env::current_dir().ok()?;
        loop {
            let config_path = dir.join("mandelbench.toml");
            if config_path.exists() {
                return Self::load(&config_path).ok();
            }
            if !dir.pop() {
                return None;
            }
        }
    }
}

/// Resolve the file-level config: an explicit `--config` path must load
/// (and fails loudly when it does not); otherwise discovery is best-effort.
pub(crate) fn resolve_file_config(explicit: Option<&Path>) -> anyhow::Result<MandelbenchConfig> {
    match explicit {
        Some(path) => {
            let config = MandelbenchConfig::load(path)
                .map_err(|e| anyhow::anyhow!("failed to load {}: {}", path.display(), e))?;
            log::debug!("loaded config from {}", path.display());
            Ok(config)
        }
        None => Ok(MandelbenchConfig::discover().unwrap_or_default()),
    }
}
