use chrono::{DateTime, FixedOffset, Utc};

use crate::coverage::coverage_model::{CoverageSummary, FileCoverage};
use crate::results::results_model::TestResultsDocument;
use crate::stats::aggregate::{all_suite_stats, calculate_stats};
use crate::stats::stats_model::{AggregateStats, SuiteStats};

/// Report timestamps are shown in China Standard Time.
const REPORT_UTC_OFFSET_SECS: i32 = 8 * 3600;

// ============================================================================
// Report input: everything the section renderers read
// ============================================================================

/// Aggregated data for one report.
///
/// Built once via `new()` and consumed read-only by every section renderer.
/// The generation time is part of the input so identical data renders
/// identical Markdown.
#[derive(Debug, Clone)]
pub struct ReportInput<'a> {
    pub results: &'a TestResultsDocument,
    pub coverage: Option<&'a CoverageSummary>,
    pub stats: AggregateStats,
    pub suites: Vec<SuiteStats>,
    pub title: &'a str,
    pub components: &'a [String],
    pub generated_at: DateTime<FixedOffset>,
}

impl<'a> ReportInput<'a> {
    pub fn new(
        results: &'a TestResultsDocument,
        coverage: Option<&'a CoverageSummary>,
        title: &'a str,
        components: &'a [String],
        generated_at: DateTime<FixedOffset>,
    ) -> Self {
        Self {
            results,
            coverage,
            stats: calculate_stats(results),
            suites: all_suite_stats(results),
            title,
            components,
            generated_at,
        }
    }

    /// Coverage entry for each configured component, in configured order.
    pub fn component_coverage(&self) -> Vec<(&'a str, Option<&'a FileCoverage>)> {
        let coverage = self.coverage;
        let components: &'a [String] = self.components;
        components
            .iter()
            .map(|name| {
                (
                    name.as_str(),
                    coverage.and_then(|c| c.find_component(name)),
                )
            })
            .collect()
    }

    /// Aggregate coverage, if the coverage document had a `total` entry.
    pub fn coverage_total(&self) -> Option<FileCoverage> {
        self.coverage.and_then(|c| c.total)
    }
}

/// Current time in the report time zone.
pub fn report_now() -> DateTime<FixedOffset> {
    match FixedOffset::east_opt(REPORT_UTC_OFFSET_SECS) {
        Some(offset) => Utc::now().with_timezone(&offset),
        None => Utc::now().fixed_offset(),
    }
}
