use crate::report::report_model::ReportInput;
use crate::stats::classifier::extract_test_groups;

/// Test strategy: per-suite counts and semantic groups from the actual run,
/// then the fixed notes on mocking and testing principles.
pub fn format_strategy_section(input: &ReportInput<'_>) -> String {
    let mut out = String::from("## 🎯 测试策略\n\n### 测试覆盖范围\n\n");

    for (suite, stats) in input.results.test_results.iter().zip(&input.suites) {
        out.push_str(&format!("#### {} ({} 个测试用例)\n", stats.file_name, stats.total));
        out.push_str(&format!("- 通过: {} 个\n", stats.passed));
        out.push_str(&format!("- 失败: {} 个\n", stats.failed));

        for group in extract_test_groups(&suite.assertion_results) {
            let icon = if group.failed_count == 0 { "✅" } else { "⚠️" };
            out.push_str(&format!(
                "- {} {}（{}个，{}通过，{}失败）\n",
                icon, group.name, group.count, group.passed_count, group.failed_count
            ));
        }
        out.push('\n');
    }

    out.push_str(STRATEGY_NOTES);
    out
}

const STRATEGY_NOTES: &str = "### Mock 策略

1. **API Mock**: 使用 `vi.mock('@/packs/useFetchApi')` 模拟所有 API 调用
2. **Router Mock**: 使用 `vi.mock('vue-router')` 模拟 Vue Router
3. **Store Mock**: 使用 `createTestingPinia()` 模拟 Pinia Store
4. **SSE Mock**: 使用 `vi.mock('@microsoft/fetch-event-source')` 模拟 Server-Sent Events
5. **组件 Mock**: 模拟复杂子组件以隔离测试

### 测试原则

- **隔离性**: 每个测试用例独立运行，不依赖其他测试
- **可重复性**: 测试结果稳定，多次运行结果一致
- **完整性**: 覆盖正常流程、边界条件和错误情况
- **可维护性**: 测试代码清晰，易于理解和修改

";
