use crate::coverage::coverage_model::round2;
use crate::results::results_model::{Outcome, TestResultsDocument, TestSuiteResult};
use crate::stats::stats_model::{AggregateStats, SuiteStats};

/// Compute run-wide statistics.
///
/// Cases with an unrecognized status count toward `total_tests` but toward
/// none of passed, failed or skipped. Per-test durations are not summed; the
/// total comes from suite timestamps only.
pub fn calculate_stats(document: &TestResultsDocument) -> AggregateStats {
    let mut stats = AggregateStats {
        total_suites: document.test_results.len(),
        ..Default::default()
    };

    for suite in &document.test_results {
        let counts = suite_stats(suite);
        stats.total_tests += counts.total;
        stats.passed_tests += counts.passed;
        stats.failed_tests += counts.failed;
        stats.skipped_tests += counts.skipped;
        stats.total_duration += counts.duration_ms.unwrap_or(0.0);
    }

    stats.pass_rate = pass_rate(stats.passed_tests, stats.total_tests);
    stats
}

/// Counts for a single suite.
pub fn suite_stats(suite: &TestSuiteResult) -> SuiteStats {
    let mut stats = SuiteStats {
        file_name: suite.display_name(),
        total: suite.assertion_results.len(),
        duration_ms: suite.duration_ms(),
        ..Default::default()
    };

    for case in &suite.assertion_results {
        match case.outcome() {
            Outcome::Passed => stats.passed += 1,
            Outcome::Failed => stats.failed += 1,
            Outcome::Skipped => stats.skipped += 1,
            Outcome::Unknown => {}
        }
    }

    stats
}

/// Per-suite counts in document order.
pub fn all_suite_stats(document: &TestResultsDocument) -> Vec<SuiteStats> {
    document.test_results.iter().map(suite_stats).collect()
}

/// `passed / total * 100` rounded to two decimals; `0` when `total == 0`.
///
/// Only a fully passing run reports `100`; rounding is capped at `99.99`
/// otherwise.
pub fn pass_rate(passed: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    let rate = round2(passed as f64 / total as f64 * 100.0);
    if passed < total { rate.min(99.99) } else { rate }
}
