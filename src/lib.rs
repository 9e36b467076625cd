use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::{DateTime, FixedOffset};

use crate::{
    cli::config::ReportConfig,
    error::ReportError,
    input::{
        loader::{load_coverage, load_results},
        validate::validate_results,
    },
    report::{
        markdown::render_report,
        report_model::{ReportInput, report_now},
    },
    results::results_model::TestResultsDocument,
};

pub mod cli;
pub mod coverage;
pub mod error;
pub mod input;
pub mod report;
pub mod results;
pub mod stats;

/// Run the whole pipeline with the current time as generation timestamp.
///
/// Returns the path the report was written to.
pub fn run(config: &ReportConfig) -> Result<PathBuf, ReportError> {
    run_at(config, report_now())
}

/// Run the pipeline: load, validate, aggregate, render, write.
///
/// Nothing is written unless every fatal check passed, and the report file
/// is replaced in one step.
pub fn run_at(
    config: &ReportConfig,
    generated_at: DateTime<FixedOffset>,
) -> Result<PathBuf, ReportError> {
    // ---- Required input ----
    let raw = load_results(&config.results_path)?;

    let violations = validate_results(&raw);
    if !violations.is_empty() {
        return Err(ReportError::Validation(violations));
    }

    let results = TestResultsDocument::from_raw(raw);
    log::debug!(
        "loaded {} test suites from {}",
        results.test_results.len(),
        config.results_path.display()
    );

    // ---- Optional input ----
    let coverage = load_coverage(&config.coverage_summary_path, &config.coverage_final_path);

    // ---- Render ----
    let input = ReportInput::new(
        &results,
        coverage.as_ref(),
        &config.title,
        &config.components,
        generated_at,
    );
    let markdown = render_report(&input);

    write_report(&config.output_path, &markdown)?;
    Ok(config.output_path.clone())
}

/// Write the report through a temporary file in the target directory so a
/// failed write never leaves a truncated report behind.
pub fn write_report(path: &Path, content: &str) -> Result<(), ReportError> {
    let write_error = |source: std::io::Error| ReportError::ReportWrite {
        path: path.to_path_buf(),
        source,
    };

    let dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(dir).map_err(write_error)?;

    let mut tmp = tempfile::NamedTempFile::new_in(dir).map_err(write_error)?;
    tmp.write_all(content.as_bytes()).map_err(write_error)?;
    tmp.flush().map_err(write_error)?;
    tmp.persist(path).map_err(|e| write_error(e.error))?;

    log::debug!("wrote {} bytes to {}", content.len(), path.display());
    Ok(())
}
