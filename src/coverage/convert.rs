//! Conversion of Istanbul `coverage-final.json` into a coverage summary.
//!
//! Each map counts as one instrumentation point per entry; a point is covered
//! when its execution count is greater than zero. Lines are reported with the
//! statement counts, since the raw document carries no separate line map.

use std::collections::BTreeMap;

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::coverage::coverage_model::{CoverageMetric, CoverageSummary, FileCoverage};

/// Raw per-file instrumentation data. Only entry counts matter here.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileInstrumentation {
    #[serde(default)]
    pub statement_map: BTreeMap<String, Value>,

    #[serde(default)]
    pub s: BTreeMap<String, Value>,

    #[serde(default)]
    pub branch_map: BTreeMap<String, Value>,

    #[serde(default)]
    pub b: BTreeMap<String, Value>,

    #[serde(default)]
    pub fn_map: BTreeMap<String, Value>,

    #[serde(default)]
    pub f: BTreeMap<String, Value>,
}

impl FileInstrumentation {
    pub fn summarize(&self) -> FileCoverage {
        let statement_total = self.statement_map.len() as u64;
        let statement_covered = count_hits(self.s.values());

        let (branch_total, branch_covered) =
            self.b.values().fold((0u64, 0u64), |(total, covered), arms| {
                match arms {
                    Value::Array(counts) => (
                        total + counts.len() as u64,
                        covered + count_hits(counts.iter()),
                    ),
                    _ => (total, covered),
                }
            });

        let function_total = self.fn_map.len() as u64;
        let function_covered = count_hits(self.f.values());

        FileCoverage {
            statements: CoverageMetric::from_counts(statement_total, statement_covered),
            branches: CoverageMetric::from_counts(branch_total, branch_covered),
            functions: CoverageMetric::from_counts(function_total, function_covered),
            lines: CoverageMetric::from_counts(statement_total, statement_covered),
        }
    }
}

/// Parse a `coverage-final.json` document and summarize it.
pub fn summary_from_final_json(text: &str) -> Result<CoverageSummary, serde_json::Error> {
    let raw: Map<String, Value> = serde_json::from_str(text)?;
    let mut files = Vec::with_capacity(raw.len());
    for (path, value) in raw {
        let data: FileInstrumentation = serde_json::from_value(value)?;
        files.push((path, data.summarize()));
    }
    Ok(summarize_files(files))
}

/// Sum per-file coverage into a summary with a `total` entry.
pub fn summarize_files(files: Vec<(String, FileCoverage)>) -> CoverageSummary {
    let mut sums = [(0u64, 0u64); 4];
    for (_, coverage) in &files {
        let metrics = [
            coverage.statements,
            coverage.branches,
            coverage.functions,
            coverage.lines,
        ];
        for (sum, metric) in sums.iter_mut().zip(metrics) {
            sum.0 += metric.total;
            sum.1 += metric.covered;
        }
    }

    let [statements, branches, functions, lines] =
        sums.map(|(total, covered)| CoverageMetric::from_counts(total, covered));

    CoverageSummary {
        files,
        total: Some(FileCoverage {
            statements,
            branches,
            functions,
            lines,
        }),
    }
}

fn count_hits<'a>(counts: impl Iterator<Item = &'a Value>) -> u64 {
    counts
        .filter(|count| count.as_f64().is_some_and(|n| n > 0.0))
        .count() as u64
}
