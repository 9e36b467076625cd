use serde_json::Value;

/// Check the structure of a parsed results document.
///
/// Returns every violated rule; an empty list means the document is usable.
/// A root that is not an object short-circuits, since nothing else can be
/// checked.
pub fn validate_results(document: &Value) -> Vec<String> {
    let mut errors = Vec::new();

    let Some(root) = document.as_object() else {
        errors.push("测试结果不是有效的对象".to_string());
        return errors;
    };

    match root.get("testResults") {
        Some(Value::Array(suites)) if suites.is_empty() => {
            errors.push("没有找到任何测试套件，请确认测试已正确运行".to_string());
        }
        Some(Value::Array(_)) => {}
        _ => errors.push("缺少 testResults 数组".to_string()),
    }

    errors
}
