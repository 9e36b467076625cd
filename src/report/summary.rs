use crate::coverage::coverage_model::{FileCoverage, round2};
use crate::report::coverage::{FUNCTION_TARGET, METRIC_TARGETS, STATEMENT_TARGET};
use crate::report::format::{coverage_status, format_duration, format_pct, format_rate, star_rating};
use crate::report::report_model::ReportInput;
use crate::stats::stats_model::{AggregateStats, SuiteStats};

// ============================================================================
// Summary section
// ============================================================================

/// Closing summary: condensed tables, per-file pass rates, findings,
/// suggestions and reference pointers.
pub fn format_summary_section(input: &ReportInput<'_>) -> String {
    let mut out = String::from("## 📝 测试总结\n\n");

    out.push_str(&format_execution_table(&input.stats));

    if let Some(total) = input.coverage_total() {
        out.push_str(&format_coverage_table(&total));
        out.push_str(&format_component_ratings(input));
    }

    out.push_str(&format_distribution_table(&input.suites));

    out.push_str("### 关键发现\n\n");
    for finding in findings(input) {
        out.push_str(&finding);
        out.push_str("\n\n");
    }

    out.push_str("### 改进建议\n\n");
    let suggestions = suggestions(input);
    if suggestions.is_empty() {
        out.push_str("✅ **测试质量优秀**: 所有指标均达标。\n\n");
    } else {
        for s in &suggestions {
            out.push_str(&format!("**{}**: {}\n- {}\n\n", s.priority, s.item, s.detail));
        }
    }

    out.push_str(&format_reference_info(input));
    out.push_str("\n---\n\n*本报告由自动化测试脚本生成，客观呈现被测代码的测试执行情况*\n");

    out
}

fn format_execution_table(stats: &AggregateStats) -> String {
    let mut out = String::from("### 测试执行情况\n\n| 指标 | 数值 | 状态 |\n|------|------|------|\n");
    out.push_str(&format!("| 测试套件总数 | {} | - |\n", stats.total_suites));
    out.push_str(&format!("| 测试用例总数 | {} | - |\n", stats.total_tests));
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
    out.push_str(&format!(
        "| 测试通过率 | {}% | {} |\n",
        format_rate(stats.pass_rate),
        pass_rate_rating(stats.pass_rate)
    ));
    out.push_str(&format!(
        "| 总执行时间 | {} | - |\n\n",
        format_duration(stats.total_duration)
    ));
    out
}

/// Verbal rating of the pass rate.
pub fn pass_rate_rating(rate: f64) -> &'static str {
    if rate >= 100.0 {
        "✅ 优秀"
    } else if rate >= 90.0 {
        "✅ 良好"
    } else if rate >= 80.0 {
        "⚠️ 一般"
    } else {
        "❌ 需改进"
    }
}

fn format_coverage_table(total: &FileCoverage) -> String {
    let mut out = String::from(
        "### 代码覆盖率情况\n\n| 覆盖率类型 | 覆盖率 | 已覆盖/总数 | 状态 |\n|-----------|--------|-------------|------|\n",
    );
    for row in &METRIC_TARGETS {
        let metric = (row.metric)(total);
        out.push_str(&format!(
            "| {} | {}% | {}/{} | {} |\n",
            row.label,
            format_pct(metric.pct),
            metric.covered,
            metric.total,
            coverage_status(metric.pct, row.target)
        ));
    }
    out.push('\n');
    out
}

fn format_component_ratings(input: &ReportInput<'_>) -> String {
    let mut out = String::from(
        "### 各组件覆盖率对比\n\n| 组件 | 语句 | 分支 | 函数 | 行 | 综合评价 |\n|------|------|------|------|------|---------|\n",
    );
    for (name, coverage) in input.component_coverage() {
        match coverage {
            Some(c) => out.push_str(&format!(
                "| {} | {}% | {}% | {}% | {}% | {} |\n",
                name,
                format_pct(c.statements.pct),
                format_pct(c.branches.pct),
                format_pct(c.functions.pct),
                format_pct(c.lines.pct),
                star_rating(c.average_pct())
            )),
            None => out.push_str(&format!("| {} | - | - | - | - | 未测试 |\n", name)),
        }
    }
    out.push('\n');
    out
}

fn format_distribution_table(suites: &[SuiteStats]) -> String {
    let mut out = String::from(
        "### 测试用例分布\n\n| 测试文件 | 测试用例数 | 通过 | 失败 | 通过率 |\n|---------|-----------|------|------|--------|\n",
    );
    for suite in suites {
        out.push_str(&format!(
            "| {} | {} | {} | {} | {}% {} |\n",
            suite.file_name,
            suite.total,
            suite.passed,
            suite.failed,
            format_rate(suite.pass_rate()),
            if suite.failed == 0 { "✅" } else { "❌" }
        ));
    }
    out.push('\n');
    out
}

// ============================================================================
// Findings
// ============================================================================

/// Data-driven findings, one Markdown paragraph each.
pub fn findings(input: &ReportInput<'_>) -> Vec<String> {
    let stats = &input.stats;
    let mut findings = Vec::new();

    if stats.all_passed() {
        findings.push(format!(
            "✅ **所有测试通过**: 全部 {} 个测试用例均通过，代码功能正常",
            stats.total_tests
        ));
    } else if stats.failed_tests > 0 {
        findings.push(format!(
            "❌ **存在失败测试**: 有 {} 个测试用例失败，需要优先修复",
            stats.failed_tests
        ));
    }

    if let Some(total) = input.coverage_total() {
        findings.push(format!(
            "📊 **平均覆盖率**: {:.2}%（语句 {}% / 分支 {}% / 函数 {}% / 行 {}%）",
            total.average_pct(),
            format_pct(total.statements.pct),
            format_pct(total.branches.pct),
            format_pct(total.functions.pct),
            format_pct(total.lines.pct)
        ));

        if total.branches.pct >= 80.0 {
            findings.push(format!(
                "✅ **分支覆盖率优秀**: 达到 {}%，代码分支测试充分",
                format_pct(total.branches.pct)
            ));
        }

        let found: Vec<(&str, f64)> = input
            .component_coverage()
            .into_iter()
            .filter_map(|(name, c)| c.map(|c| (name, c.statements.pct)))
            .collect();

        if found.len() >= 2 {
            if let Some((name, pct)) = best_covered(&found) {
                findings.push(format!(
                    "📊 **{} 覆盖率**: {}%（当前覆盖率最高的组件）",
                    name,
                    format_pct(pct)
                ));
            }
        }

        if let Some((name, pct)) = worst_covered(&found) {
            findings.push(format!(
                "📊 **{} 覆盖率**: {}%（当前覆盖率最低的组件）",
                name,
                format_pct(pct)
            ));
        }
    }

    findings.push(format!(
        "📊 **测试用例总数**: {} 个（{}）",
        stats.total_tests,
        suite_breakdown(&input.suites)
    ));

    findings
}

/// Highest statement coverage; the first component wins ties.
fn best_covered<'a>(found: &[(&'a str, f64)]) -> Option<(&'a str, f64)> {
    found.iter().copied().fold(None, |best, (name, pct)| match best {
        Some((_, best_pct)) if best_pct >= pct => best,
        _ => Some((name, pct)),
    })
}

/// Lowest statement coverage below 100%; the first component wins ties.
fn worst_covered<'a>(found: &[(&'a str, f64)]) -> Option<(&'a str, f64)> {
    found
        .iter()
        .copied()
        .filter(|(_, pct)| *pct < 100.0)
        .fold(None, |worst, (name, pct)| match worst {
            Some((_, worst_pct)) if worst_pct <= pct => worst,
            _ => Some((name, pct)),
        })
}

/// `FinetuneDetail: 38 / FinetuneSettings: 67`, from the per-suite counts.
pub fn suite_breakdown(suites: &[SuiteStats]) -> String {
    suites
        .iter()
        .map(|s| format!("{}: {}", s.short_name(), s.total))
        .collect::<Vec<_>>()
        .join(" / ")
}

// ============================================================================
// Suggestions
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct Suggestion {
    pub priority: &'static str,
    pub item: String,
    pub detail: String,
}

/// Suggestions in fixed order: failing tests, coverage gaps, then one data
/// line per component found in the coverage document.
pub fn suggestions(input: &ReportInput<'_>) -> Vec<Suggestion> {
    let stats = &input.stats;
    let mut suggestions = Vec::new();

    if stats.failed_tests > 0 {
        suggestions.push(Suggestion {
            priority: "🔴 高优先级",
            item: "修复失败的测试用例".to_string(),
            detail: format!(
                "当前有 {} 个测试失败，需要立即修复以确保代码功能正常",
                stats.failed_tests
            ),
        });
    }

    let Some(total) = input.coverage_total() else {
        return suggestions;
    };

    let statements = total.statements;
    if statements.pct < STATEMENT_TARGET {
        let gap = round2(STATEMENT_TARGET - statements.pct);
        let missing = (statements.total as f64 * gap / 100.0).ceil();
        suggestions.push(Suggestion {
            priority: "📊 数据分析",
            item: "语句覆盖率".to_string(),
            detail: format!(
                "当前 {}%，距离 {}% 目标还差 {:.2}%（约 {} 条语句）",
                format_pct(statements.pct),
                STATEMENT_TARGET,
                gap,
                missing
            ),
        });
    }

    let functions = total.functions;
    if functions.pct < FUNCTION_TARGET {
        suggestions.push(Suggestion {
            priority: "📊 数据分析",
            item: "函数覆盖率".to_string(),
            detail: format!(
                "当前 {}%，未覆盖函数数量：{} 个",
                format_pct(functions.pct),
                functions.uncovered()
            ),
        });
    }

    for (name, coverage) in input.component_coverage() {
        let Some(c) = coverage else { continue };
        suggestions.push(Suggestion {
            priority: "📊 组件数据",
            item: name.to_string(),
            detail: format!(
                "语句覆盖率 {}%（已覆盖 {} / 未覆盖 {}）",
                format_pct(c.statements.pct),
                c.statements.covered,
                c.statements.uncovered()
            ),
        });
    }

    suggestions
}

// ============================================================================
// Reference info
// ============================================================================

fn format_reference_info(input: &ReportInput<'_>) -> String {
    let mut out = String::from("### 参考信息\n\n");
    let total = input.coverage_total();

    if input.stats.failed_tests > 0 {
        out.push_str(
            "1. 🔴 **失败测试**: 查看上方\"失败的测试\"章节了解详情\n\
             2. 📊 **覆盖率详情**: 查看 HTML 覆盖率报告了解未覆盖代码\n\
             3. 📝 **测试策略**: 参考上方\"测试策略\"章节\n",
        );
    } else if let Some(total) = total.filter(|t| t.statements.pct < STATEMENT_TARGET) {
        out.push_str(&format!(
            "1. 📊 **覆盖率数据**: 当前平均覆盖率 {:.2}%\n\
             2. 📝 **详细报告**: 查看 HTML 覆盖率报告了解未覆盖代码详情\n\
             3. 📖 **测试文档**: 参考测试策略章节了解测试方法\n",
            total.average_pct()
        ));
    } else {
        out.push_str(
            "1. ✅ **测试状态**: 所有测试通过，覆盖率达标\n\
             2. 📊 **覆盖率详情**: 查看 HTML 报告了解详细覆盖情况\n\
             3. 📝 **持续维护**: 保持测试与代码同步更新\n",
        );
    }

    out
}
