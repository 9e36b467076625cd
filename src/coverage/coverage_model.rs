use serde::Deserialize;
use serde_json::{Map, Value};

use crate::results::lenient;

/// Reserved key holding the aggregate entry of a coverage summary.
pub const TOTAL_KEY: &str = "total";

/// Counts for one coverage metric.
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
pub struct CoverageMetric {
    #[serde(default, deserialize_with = "lenient::count")]
    pub total: u64,

    #[serde(default, deserialize_with = "lenient::count")]
    pub covered: u64,

    #[serde(default, deserialize_with = "lenient::count")]
    pub skipped: u64,

    /// Percentage covered, rounded to two decimals
    #[serde(default, deserialize_with = "lenient::number_or_zero")]
    pub pct: f64,
}

impl CoverageMetric {
    /// Build a metric from counts, computing `pct`.
    pub fn from_counts(total: u64, covered: u64) -> Self {
        Self {
            total,
            covered,
            skipped: 0,
            pct: percentage(covered, total),
        }
    }

    /// `total - covered`, saturating at zero.
    pub fn uncovered(&self) -> u64 {
        self.total.saturating_sub(self.covered)
    }
}

/// The four metrics of one file (or of the aggregate).
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
pub struct FileCoverage {
    #[serde(default)]
    pub statements: CoverageMetric,

    #[serde(default)]
    pub branches: CoverageMetric,

    #[serde(default)]
    pub functions: CoverageMetric,

    #[serde(default)]
    pub lines: CoverageMetric,
}

impl FileCoverage {
    /// Unweighted mean of the four percentages.
    pub fn average_pct(&self) -> f64 {
        (self.statements.pct + self.branches.pct + self.functions.pct + self.lines.pct) / 4.0
    }
}

/// Coverage summary: per-file entries in document order plus the aggregate.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CoverageSummary {
    pub files: Vec<(String, FileCoverage)>,
    pub total: Option<FileCoverage>,
}

impl CoverageSummary {
    /// Parse a `coverage-summary.json` document.
    ///
    /// Entries that are not objects become zeroed coverage; a root that is
    /// not an object is an error.
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        let map: Map<String, Value> = serde_json::from_str(text)?;
        let mut summary = CoverageSummary::default();
        for (key, value) in map {
            let coverage: FileCoverage = serde_json::from_value(value).unwrap_or_default();
            if key == TOTAL_KEY {
                summary.total = Some(coverage);
            } else {
                summary.files.push((key, coverage));
            }
        }
        Ok(summary)
    }

    /// Coverage of the first file whose key contains `component`.
    pub fn find_component(&self, component: &str) -> Option<&FileCoverage> {
        self.files
            .iter()
            .find(|(key, _)| key.contains(component))
            .map(|(_, coverage)| coverage)
    }

    /// Aggregate entry, zeroed when the document had none.
    pub fn total_or_default(&self) -> FileCoverage {
        self.total.unwrap_or_default()
    }
}

/// `covered / total * 100` rounded to two decimals; `0` when `total == 0`.
pub fn percentage(covered: u64, total: u64) -> f64 {
    if total == 0 {
        0.0
    } else {
        round2(covered as f64 / total as f64 * 100.0)
    }
}

/// Round to two decimal places.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
