use crate::coverage::coverage_model::{CoverageMetric, FileCoverage};
use crate::report::format::{coverage_icon, format_pct};
use crate::report::report_model::ReportInput;

// ============================================================================
// Coverage targets
// ============================================================================

/// One coverage metric with its display label and target percentage.
#[derive(Debug, Clone, Copy)]
pub struct MetricTarget {
    pub label: &'static str,
    pub target: f64,
    pub metric: fn(&FileCoverage) -> CoverageMetric,
}

pub const METRIC_TARGETS: [MetricTarget; 4] = [
    MetricTarget {
        label: "语句覆盖率",
        target: 80.0,
        metric: |c| c.statements,
    },
    MetricTarget {
        label: "分支覆盖率",
        target: 75.0,
        metric: |c| c.branches,
    },
    MetricTarget {
        label: "函数覆盖率",
        target: 85.0,
        metric: |c| c.functions,
    },
    MetricTarget {
        label: "行覆盖率",
        target: 80.0,
        metric: |c| c.lines,
    },
];

/// Statement coverage target, used by the summary suggestions.
pub const STATEMENT_TARGET: f64 = 80.0;

/// Function coverage target, used by the summary suggestions.
pub const FUNCTION_TARGET: f64 = 85.0;

// ============================================================================
// Coverage section
// ============================================================================

/// Overview of the aggregate metrics against their targets, followed by the
/// per-component breakdown.
pub fn format_coverage_section(input: &ReportInput<'_>) -> String {
    let total = input
        .coverage
        .map(|c| c.total_or_default())
        .unwrap_or_default();

    let mut out = String::from("## 📈 代码覆盖率\n\n### 覆盖率统计\n\n");
    out.push_str("| 类型 | 覆盖率 | 已覆盖 / 总数 | 目标 | 状态 |\n");
    out.push_str("|------|--------|---------------|------|------|\n");

    for row in &METRIC_TARGETS {
        let metric = (row.metric)(&total);
        out.push_str(&format!(
            "| {} | {}% | {} / {} | ≥{}% | {} |\n",
            row.label,
            format_pct(metric.pct),
            metric.covered,
            metric.total,
            row.target,
            coverage_icon(metric.pct, row.target)
        ));
    }

    out.push_str("\n### 组件覆盖率详情\n\n");
    out.push_str("| 组件 | 语句 | 分支 | 函数 | 行 |\n|------|------|------|------|------|\n");

    for (name, coverage) in input.component_coverage() {
        match coverage {
            Some(c) => out.push_str(&format!(
                "| {} | {}% | {}% | {}% | {}% |\n",
                name,
                format_pct(c.statements.pct),
                format_pct(c.branches.pct),
                format_pct(c.functions.pct),
                format_pct(c.lines.pct)
            )),
            None => out.push_str(&format!("| {} | - | - | - | - |\n", name)),
        }
    }

    out.push('\n');
    out
}

// ============================================================================
// Uncovered code analysis
// ============================================================================

/// Components with statement coverage below 100%, with a banded comment.
pub fn format_uncovered_section(input: &ReportInput<'_>) -> String {
    let mut out = String::from("## 🔍 未覆盖代码分析\n\n");
    let mut has_uncovered = false;

    for (name, coverage) in input.component_coverage() {
        let Some(data) = coverage else { continue };
        let pct = data.statements.pct;
        if pct >= 100.0 {
            continue;
        }
        has_uncovered = true;

        let pct_text = format_pct(pct);
        let uncovered_statements = data.statements.uncovered();

        out.push_str(&format!(
            "### {}\n\n**覆盖率**: {}% | **未覆盖语句**: {} 条 | **未覆盖函数**: {} 个 | **未覆盖分支**: {} 个\n\n",
            name,
            pct_text,
            uncovered_statements,
            data.functions.uncovered(),
            data.branches.uncovered()
        ));

        if let Some(focus) = uncovered_focus(pct) {
            out.push_str(&format!(
                "📊 **覆盖情况**: 当前覆盖率为 {}%\n- 已覆盖语句：{} 条\n- 未覆盖语句：{} 条\n- {}\n\n",
                pct_text, data.statements.covered, uncovered_statements, focus
            ));
        }
    }

    if has_uncovered {
        out.push_str(UNCOVERED_HELP);
    } else {
        out.push_str("✅ **所有代码已覆盖**: 所有组件的代码覆盖率均达到 100%，测试非常全面！\n\n");
    }

    out
}

/// Where the uncovered code usually sits for a given statement coverage.
/// Coverage of 85% and above gets no comment.
pub fn uncovered_focus(pct: f64) -> Option<&'static str> {
    if pct < 50.0 {
        Some("未覆盖代码主要集中在：模板渲染、边界条件处理、错误处理分支")
    } else if pct < 70.0 {
        Some("未覆盖代码主要集中在：边界条件、异常处理、部分异步操作")
    } else if pct < 85.0 {
        Some("大部分核心功能已覆盖，剩余未覆盖代码主要为边界情况")
    } else {
        None
    }
}

const UNCOVERED_HELP: &str = "### 如何查看详细的未覆盖代码

打开 HTML 覆盖率报告可以查看具体哪些代码行未被覆盖：

```bash
# 在浏览器中打开覆盖率报告
open ../tests/reports/coverage/index.html
```

HTML 报告会用颜色标注：
- 🟢 **绿色**: 已覆盖的代码
- 🔴 **红色**: 未覆盖的代码
- 🟡 **黄色**: 部分覆盖的分支

";
