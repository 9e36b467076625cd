use std::path::Path;

use serde_json::Value;

use crate::coverage::convert::summary_from_final_json;
use crate::coverage::coverage_model::CoverageSummary;
use crate::error::{CoverageError, ReportError};

// ============================================================================
// Required input: test results
// ============================================================================

/// Read and parse the test results file. Every failure here is fatal.
pub fn load_results(path: &Path) -> Result<Value, ReportError> {
    if !path.exists() {
        return Err(ReportError::ResultsMissing {
            path: path.to_path_buf(),
        });
    }

    let content = std::fs::read_to_string(path).map_err(|source| ReportError::ResultsRead {
        path: path.to_path_buf(),
        source,
    })?;

    log::debug!("read {} bytes from {}", content.len(), path.display());

    serde_json::from_str(&content).map_err(|source| ReportError::ResultsParse {
        path: path.to_path_buf(),
        source,
    })
}

// ============================================================================
// Optional input: coverage
// ============================================================================

/// Load coverage, preferring the summary document and falling back to
/// converting the final document. Failures are logged and yield `None`.
pub fn load_coverage(summary_path: &Path, final_path: &Path) -> Option<CoverageSummary> {
    if summary_path.exists() {
        return match read_summary(summary_path) {
            Ok(summary) => Some(summary),
            Err(e) => {
                log::warn!("无法读取 coverage-summary.json，将跳过覆盖率部分: {}", e);
                None
            }
        };
    }

    if final_path.exists() {
        return match read_final(final_path) {
            Ok(summary) => {
                log::info!("✅ 从 coverage-final.json 生成覆盖率摘要");
                Some(summary)
            }
            Err(e) => {
                log::warn!("无法读取覆盖率数据，将跳过覆盖率部分: {}", e);
                None
            }
        };
    }

    log::debug!(
        "no coverage data at {} or {}",
        summary_path.display(),
        final_path.display()
    );
    None
}

fn read_summary(path: &Path) -> Result<CoverageSummary, CoverageError> {
    let content = read_text(path)?;
    CoverageSummary::from_json(&content).map_err(|source| CoverageError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

fn read_final(path: &Path) -> Result<CoverageSummary, CoverageError> {
    let content = read_text(path)?;
    summary_from_final_json(&content).map_err(|source| CoverageError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

fn read_text(path: &Path) -> Result<String, CoverageError> {
    std::fs::read_to_string(path).map_err(|source| CoverageError::Read {
        path: path.to_path_buf(),
        source,
    })
}
