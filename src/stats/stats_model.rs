// ============================================================================
// Derived statistics
// ============================================================================

/// Run-wide counts, computed once per report.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AggregateStats {
    pub total_suites: usize,
    pub total_tests: usize,
    pub passed_tests: usize,
    pub failed_tests: usize,
    pub skipped_tests: usize,

    /// Passed / total in percent, rounded to two decimals
    pub pass_rate: f64,

    /// Sum of suite durations in milliseconds
    pub total_duration: f64,
}

impl AggregateStats {
    pub fn all_passed(&self) -> bool {
        self.failed_tests == 0 && self.total_tests > 0 && self.passed_tests == self.total_tests
    }
}

/// Counts for one suite (one test file).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SuiteStats {
    /// Basename of the suite path
    pub file_name: String,
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    pub skipped: usize,

    /// `None` when the suite did not report both timestamps
    pub duration_ms: Option<f64>,
}

impl SuiteStats {
    /// Passed / total in percent, rounded to two decimals.
    pub fn pass_rate(&self) -> f64 {
        crate::stats::aggregate::pass_rate(self.passed, self.total)
    }

    /// File name up to the first `.`, e.g. `NewFinetune` for
    /// `NewFinetune.spec.js`.
    pub fn short_name(&self) -> &str {
        self.file_name
            .split('.')
            .next()
            .filter(|s| !s.is_empty())
            .unwrap_or(&self.file_name)
    }
}

/// Semantic group of test cases within one suite.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestGroup {
    pub name: String,
    pub count: usize,
    pub passed_count: usize,
    pub failed_count: usize,
}
