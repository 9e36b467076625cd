use crate::report::format::{code_fence, escape_cell, format_duration, outcome_icon};
use crate::report::report_model::ReportInput;
use crate::results::results_model::Outcome;

// ============================================================================
// Suite details
// ============================================================================

/// One block per suite: status line and the full case table.
pub fn format_suites_section(input: &ReportInput<'_>) -> String {
    let mut out = String::from("## 🧪 测试套件详情\n\n");

    if input.results.test_results.is_empty() {
        out.push_str("*没有找到测试套件*\n\n");
        return out;
    }

    for (suite, stats) in input.results.test_results.iter().zip(&input.suites) {
        let status = if stats.failed == 0 { "✅ 通过" } else { "❌ 失败" };
        let duration = stats
            .duration_ms
            .map(format_duration)
            .unwrap_or_else(|| "未知".to_string());

        out.push_str(&format!(
            "### {}\n\n**状态**: {} | **用例数**: {} | **通过**: {} | **失败**: {} | **耗时**: {}\n\n",
            stats.file_name, status, stats.total, stats.passed, stats.failed, duration
        ));

        if suite.assertion_results.is_empty() {
            continue;
        }

        out.push_str("#### 测试用例列表\n\n| # | 测试用例 | 状态 | 耗时 |\n|---|----------|------|------|\n");
        for (index, case) in suite.assertion_results.iter().enumerate() {
            let case_duration = case
                .duration_ms()
                .map(format_duration)
                .unwrap_or_else(|| "-".to_string());
            out.push_str(&format!(
                "| {} | {} | {} {} | {} |\n",
                index + 1,
                escape_cell(case.display_title()),
                outcome_icon(case.outcome()),
                case.status_label(),
                case_duration
            ));
        }
        out.push('\n');
    }

    out
}

// ============================================================================
// Failed tests
// ============================================================================

/// Failing cases grouped by suite, with their failure messages verbatim.
pub fn format_failed_tests_section(input: &ReportInput<'_>) -> String {
    let mut out = String::from("## ❌ 失败的测试\n\n");
    let mut has_failures = false;

    for (suite, stats) in input.results.test_results.iter().zip(&input.suites) {
        let failed: Vec<_> = suite.cases_with(Outcome::Failed).collect();
        if failed.is_empty() {
            continue;
        }
        has_failures = true;

        out.push_str(&format!("### {}\n\n", stats.file_name));

        for (index, case) in failed.iter().enumerate() {
            out.push_str(&format!("#### {}. {}\n\n", index + 1, case.display_title()));

            if !case.failure_messages.is_empty() {
                let messages = case.failure_messages.join("\n\n");
                let fence = code_fence(&messages);
                out.push_str(&format!(
                    "**错误信息**:\n\n{fence}\n{messages}\n{fence}\n\n"
                ));
            }
        }
    }

    if !has_failures {
        out.push_str("*没有失败的测试* ✅\n\n");
    }

    out
}
