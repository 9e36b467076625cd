use std::collections::HashMap;

use crate::results::results_model::{Outcome, TestCaseResult};
use crate::stats::stats_model::TestGroup;

/// Group for titles that match no keyword set.
pub const OTHER_GROUP: &str = "其他测试";

/// Ordered `(group, keywords)` table. The first entry with a keyword contained
/// in the title wins.
pub const GROUP_RULES: &[(&str, &[&str])] = &[
    ("组件渲染测试", &["渲染"]),
    ("表单验证测试", &["验证", "校验"]),
    ("Tab切换测试", &["Tab", "切换"]),
    ("iframe测试", &["iframe"]),
    ("SSE测试", &["SSE", "同步"]),
    ("数据加载测试", &["加载", "数据"]),
    ("计算属性测试", &["Computed", "计算"]),
    ("方法测试", &["方法", "函数"]),
    ("生命周期测试", &["生命周期", "挂载", "卸载"]),
    ("边界条件测试", &["边界", "异常"]),
    ("集成测试", &["集成", "完整"]),
    ("API交互测试", &["API", "接口"]),
    ("错误处理测试", &["错误", "失败"]),
    ("数据联动测试", &["联动", "关联"]),
    ("UI交互测试", &["操作", "交互"]),
    ("状态控制测试", &["状态", "控制"]),
];

/// Group name for a test title.
pub fn classify_title(title: &str) -> &'static str {
    GROUP_RULES
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|k| title.contains(k)))
        .map(|(group, _)| *group)
        .unwrap_or(OTHER_GROUP)
}

/// Classify every case of a suite and tally the groups.
///
/// Groups are ordered by descending count; equal counts keep the order in
/// which the group first appeared.
pub fn extract_test_groups(cases: &[TestCaseResult]) -> Vec<TestGroup> {
    let mut groups: Vec<TestGroup> = Vec::new();
    let mut index: HashMap<&'static str, usize> = HashMap::new();

    for case in cases {
        let name = classify_title(case.title_or_full_name().unwrap_or(""));
        let slot = *index.entry(name).or_insert_with(|| {
            groups.push(TestGroup {
                name: name.to_string(),
                count: 0,
                passed_count: 0,
                failed_count: 0,
            });
            groups.len() - 1
        });

        let group = &mut groups[slot];
        group.count += 1;
        match case.outcome() {
            Outcome::Passed => group.passed_count += 1,
            Outcome::Failed => group.failed_count += 1,
            _ => {}
        }
    }

    groups.sort_by(|a, b| b.count.cmp(&a.count));
    groups
}
