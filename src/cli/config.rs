use std::path::{Path, PathBuf};

use clap::Parser;
use serde::{Deserialize, Serialize};

pub const DEFAULT_CONFIG_FILE: &str = "finetune-report.yaml";
pub const DEFAULT_TITLE: &str = "Finetune 组件单元测试报告";
pub const DEFAULT_RESULTS: &str = "reports/test-results.json";
pub const DEFAULT_COVERAGE_SUMMARY: &str = "reports/coverage/coverage-summary.json";
pub const DEFAULT_COVERAGE_FINAL: &str = "reports/coverage/coverage-final.json";
pub const DEFAULT_OUTPUT: &str = "reports/FINETUNE-TEST-REPORT.md";

/// Components looked up in the coverage document, in report order.
///
/// Every section lists them in this one order, the per-component coverage
/// table included. Older reports ordered that table NewFinetune,
/// FinetuneSettings, FinetuneDetail. Set `report.components` in the config
/// file to change the order.
pub const DEFAULT_COMPONENTS: [&str; 3] =
    ["FinetuneDetail.vue", "FinetuneSettings.vue", "NewFinetune.vue"];

// ============================================================================
// CLI Argument Parsing (clap derive)
// ============================================================================

#[derive(Parser, Debug)]
#[command(
    name = "finetune-report",
    version,
    about = "Render test results and coverage JSON into a Markdown report"
)]
pub struct Cli {
    /// Directory the input and output paths are relative to
    #[arg(long)]
    pub base_dir: Option<PathBuf>,

    /// Test results JSON (default: reports/test-results.json)
    #[arg(long)]
    pub results: Option<PathBuf>,

    /// Coverage summary JSON (default: reports/coverage/coverage-summary.json)
    #[arg(long)]
    pub coverage_summary: Option<PathBuf>,

    /// Istanbul coverage-final JSON used when no summary exists
    #[arg(long)]
    pub coverage_final: Option<PathBuf>,

    /// Markdown report path (default: reports/FINETUNE-TEST-REPORT.md)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Path to config file (default: finetune-report.yaml in current dir)
    #[arg(long)]
    pub config: Option<String>,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

// ============================================================================
// Config File Model (optional YAML)
// ============================================================================

/// Optional YAML config file: `finetune-report.yaml`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub paths: PathsConfig,
    #[serde(default)]
    pub report: ReportSection,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PathsConfig {
    pub base_dir: Option<PathBuf>,
    pub results: Option<PathBuf>,
    pub coverage_summary: Option<PathBuf>,
    pub coverage_final: Option<PathBuf>,
    pub output: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportSection {
    #[serde(default = "default_title")]
    pub title: String,

    #[serde(default = "default_components")]
    pub components: Vec<String>,
}

impl Default for ReportSection {
    fn default() -> Self {
        Self {
            title: default_title(),
            components: default_components(),
        }
    }
}

// Serde default helpers
fn default_title() -> String { DEFAULT_TITLE.to_string() }
fn default_components() -> Vec<String> { DEFAULT_COMPONENTS.iter().map(|c| c.to_string()).collect() }

// ============================================================================
// Config File Loading
// ============================================================================

/// Load config from a YAML file. Returns defaults if file is missing or malformed.
pub fn load_config(path: Option<&str>) -> AppConfig {
    let config_path = path.unwrap_or(DEFAULT_CONFIG_FILE);
    match std::fs::read_to_string(config_path) {
        Ok(content) => serde_yaml::from_str(&content).unwrap_or_else(|e| {
            log::warn!("ignoring malformed config {}: {}", config_path, e);
            AppConfig::default()
        }),
        Err(_) => AppConfig::default(),
    }
}

// ============================================================================
// Resolved pipeline configuration
// ============================================================================

/// Everything the pipeline needs, with every path already resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportConfig {
    pub results_path: PathBuf,
    pub coverage_summary_path: PathBuf,
    pub coverage_final_path: PathBuf,
    pub output_path: PathBuf,
    pub title: String,
    pub components: Vec<String>,
}

impl ReportConfig {
    /// Default layout under `base_dir`.
    pub fn with_base_dir(base_dir: impl AsRef<Path>) -> Self {
        let base = base_dir.as_ref();
        Self {
            results_path: base.join(DEFAULT_RESULTS),
            coverage_summary_path: base.join(DEFAULT_COVERAGE_SUMMARY),
            coverage_final_path: base.join(DEFAULT_COVERAGE_FINAL),
            output_path: base.join(DEFAULT_OUTPUT),
            title: default_title(),
            components: default_components(),
        }
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self::with_base_dir(".")
    }
}

/// Merge CLI arguments over the config file over defaults.
///
/// Relative paths are joined onto the base directory; absolute ones are kept.
pub fn build_report_config(cli: &Cli, config: &AppConfig) -> ReportConfig {
    let paths = &config.paths;
    let base = cli
        .base_dir
        .clone()
        .or_else(|| paths.base_dir.clone())
        .unwrap_or_else(|| PathBuf::from("."));

    let resolve = |cli_value: &Option<PathBuf>, file_value: &Option<PathBuf>, default: &str| {
        let chosen = cli_value
            .clone()
            .or_else(|| file_value.clone())
            .unwrap_or_else(|| PathBuf::from(default));
        base.join(chosen)
    };

    ReportConfig {
        results_path: resolve(&cli.results, &paths.results, DEFAULT_RESULTS),
        coverage_summary_path: resolve(
            &cli.coverage_summary,
            &paths.coverage_summary,
            DEFAULT_COVERAGE_SUMMARY,
        ),
        coverage_final_path: resolve(
            &cli.coverage_final,
            &paths.coverage_final,
            DEFAULT_COVERAGE_FINAL,
        ),
        output_path: resolve(&cli.output, &paths.output, DEFAULT_OUTPUT),
        title: config.report.title.clone(),
        components: config.report.components.clone(),
    }
}
