use serde::Deserialize;
use serde_json::Value;

use crate::results::lenient;

/// Placeholder shown for a suite without a `name`.
pub const UNKNOWN_SUITE: &str = "未知测试套件";

/// Placeholder shown for a case with neither `title` nor `fullName`.
pub const UNNAMED_TEST: &str = "未命名测试";

// ============================================================================
// Test results document (Vitest / Jest JSON reporter output)
// ============================================================================

/// Top-level document written by the JSON test reporter.
///
/// Built with `from_raw`; only `testResults` is read.
#[derive(Debug, Clone, Default)]
pub struct TestResultsDocument {
    /// One entry per executed test file
    pub test_results: Vec<TestSuiteResult>,
}

/// Execution record of one test file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestSuiteResult {
    /// Path of the test file
    #[serde(default, deserialize_with = "lenient::string")]
    pub name: Option<String>,

    /// Start timestamp in milliseconds
    #[serde(default, deserialize_with = "lenient::number")]
    pub start_time: Option<f64>,

    /// End timestamp in milliseconds
    #[serde(default, deserialize_with = "lenient::number")]
    pub end_time: Option<f64>,

    /// Individual test cases, in execution order
    #[serde(default, deserialize_with = "lenient::records")]
    pub assertion_results: Vec<TestCaseResult>,
}

/// Outcome record of one test case.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestCaseResult {
    #[serde(default, deserialize_with = "lenient::string")]
    pub title: Option<String>,

    #[serde(default, deserialize_with = "lenient::string")]
    pub full_name: Option<String>,

    /// Raw status string as reported
    #[serde(default, deserialize_with = "lenient::string")]
    pub status: Option<String>,

    /// Duration in milliseconds
    #[serde(default, deserialize_with = "lenient::number")]
    pub duration: Option<f64>,

    #[serde(default, deserialize_with = "lenient::strings")]
    pub failure_messages: Vec<String>,
}

/// Normalized test case status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    Passed,
    Failed,
    /// `skipped` or `pending`
    Skipped,
    /// Missing or unrecognized status; counted in totals but in no bucket
    Unknown,
}

impl Outcome {
    pub fn from_status(status: Option<&str>) -> Self {
        match status {
            Some("passed") => Outcome::Passed,
            Some("failed") => Outcome::Failed,
            Some("skipped") | Some("pending") => Outcome::Skipped,
            _ => Outcome::Unknown,
        }
    }
}

// ============================================================================
// Default resolution
// ============================================================================

impl TestResultsDocument {
    /// Typed view of a raw results document.
    ///
    /// Never fails: a missing or non-array `testResults` yields no suites and
    /// suites that are not objects become empty records. Callers reject such
    /// documents beforehand with `validate_results`.
    pub fn from_raw(value: Value) -> Self {
        let test_results = match value {
            Value::Object(mut root) => match root.remove("testResults") {
                Some(Value::Array(items)) => items.into_iter().map(lenient::record).collect(),
                _ => Vec::new(),
            },
            _ => Vec::new(),
        };
        Self { test_results }
    }
}

impl TestSuiteResult {
    /// Final path segment of the suite name, or the unknown-suite placeholder.
    pub fn display_name(&self) -> String {
        match self.name.as_deref() {
            Some(name) if !name.is_empty() => basename(name),
            _ => UNKNOWN_SUITE.to_string(),
        }
    }

    /// `endTime - startTime` when both timestamps are present and non-zero.
    pub fn duration_ms(&self) -> Option<f64> {
        match (self.start_time, self.end_time) {
            (Some(start), Some(end)) if start != 0.0 && end != 0.0 => Some(end - start),
            _ => None,
        }
    }

    /// Cases with the given outcome.
    pub fn cases_with(&self, outcome: Outcome) -> impl Iterator<Item = &TestCaseResult> {
        self.assertion_results
            .iter()
            .filter(move |case| case.outcome() == outcome)
    }
}

impl TestCaseResult {
    /// Title, falling back to the full name, then to the placeholder.
    pub fn display_title(&self) -> &str {
        self.title_or_full_name().unwrap_or(UNNAMED_TEST)
    }

    /// Title or full name without placeholder; used for classification.
    pub fn title_or_full_name(&self) -> Option<&str> {
        self.title
            .as_deref()
            .filter(|t| !t.is_empty())
            .or_else(|| self.full_name.as_deref().filter(|t| !t.is_empty()))
    }

    pub fn outcome(&self) -> Outcome {
        Outcome::from_status(self.status.as_deref())
    }

    /// Raw status for display; empty when missing.
    pub fn status_label(&self) -> &str {
        self.status.as_deref().unwrap_or("")
    }

    /// Reported duration when present and positive.
    pub fn duration_ms(&self) -> Option<f64> {
        self.duration.filter(|d| *d > 0.0)
    }
}

/// Final segment of a `/` or `\` separated path.
pub fn basename(path: &str) -> String {
    let trimmed = path.trim_end_matches(['/', '\\']);
    trimmed
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or(trimmed)
        .to_string()
}
