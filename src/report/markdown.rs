use crate::report::coverage::{format_coverage_section, format_uncovered_section};
use crate::report::format::{format_duration, format_rate};
use crate::report::report_model::ReportInput;
use crate::report::strategy::format_strategy_section;
use crate::report::suites::{format_failed_tests_section, format_suites_section};
use crate::report::summary::format_summary_section;
use crate::stats::stats_model::AggregateStats;

// ============================================================================
// Markdown report: full document assembly
// ============================================================================

/// Render the complete Markdown report.
///
/// Section order:
/// 1. header and execution summary
/// 2. coverage (only with coverage data)
/// 3. suite details
/// 4. failed tests (only when something failed)
/// 5. test strategy
/// 6. uncovered code analysis (only with coverage data)
/// 7. summary
pub fn render_report(input: &ReportInput<'_>) -> String {
    let mut out = String::new();

    out.push_str(&format_header(input));
    out.push_str(&format_execution_summary(&input.stats));

    if input.coverage.is_some() {
        out.push_str(&format_coverage_section(input));
    }

    out.push_str(&format_suites_section(input));

    if input.stats.failed_tests > 0 {
        out.push_str(&format_failed_tests_section(input));
    }

    out.push_str(&format_strategy_section(input));

    if input.coverage.is_some() {
        out.push_str(&format_uncovered_section(input));
    }

    out.push_str(&format_summary_section(input));

    out
}

fn format_header(input: &ReportInput<'_>) -> String {
    format!(
        "# {}\n\n> 生成时间：{}\n\n",
        input.title,
        input.generated_at.format("%Y/%m/%d %H:%M:%S")
    )
}

/// Execution summary table with a status glyph per row.
pub fn format_execution_summary(stats: &AggregateStats) -> String {
    let mut out = String::from("## 📊 测试执行摘要\n\n### 总体统计\n\n");

    out.push_str("| 指标 | 数值 | 状态 |\n|------|------|------|\n");
    out.push_str(&format!(
        "| 测试套件总数 | {} | {} |\n",
        stats.total_suites,
        if stats.total_suites > 0 { "✅" } else { "❌" }
    ));
    out.push_str(&format!(
        "| 测试用例总数 | {} | {} |\n",
        stats.total_tests,
        if stats.total_tests > 0 { "✅" } else { "❌" }
    ));
    out.push_str(&format!(
        "| 通过用例数 | {} | {} |\n",
        stats.passed_tests,
        if stats.passed_tests == stats.total_tests { "✅" } else { "⚠️" }
    ));
    out.push_str(&format!(
        "| 失败用例数 | {} | {} |\n",
        stats.failed_tests,
        if stats.failed_tests == 0 { "✅" } else { "❌" }
    ));
    out.push_str(&format!("| 跳过用例数 | {} | - |\n", stats.skipped_tests));
    out.push_str(&format!(
        "| 测试通过率 | {}% | {} |\n",
        format_rate(stats.pass_rate),
        pass_rate_icon(stats.pass_rate)
    ));
    out.push_str(&format!(
        "| 总执行时间 | {} | - |\n\n",
        format_duration(stats.total_duration)
    ));

    out
}

fn pass_rate_icon(rate: f64) -> &'static str {
    if rate >= 100.0 {
        "✅"
    } else if rate >= 90.0 {
        "⚠️"
    } else {
        "❌"
    }
}
