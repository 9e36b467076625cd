mod common;

use pretty_assertions::assert_eq;
use serde_json::json;

use finetune_report::error::ReportError;
use finetune_report::{run, run_at};

use crate::common::fixtures::{Workspace, coverage_summary, fixed_time, three_passed_one_failed};

// ============================================================================
// 1. End-to-end
// ============================================================================

#[test]
fn end_to_end_without_coverage() {
    let ws = Workspace::new();
    ws.write_results(&three_passed_one_failed());

    let written = run_at(&ws.config(), fixed_time()).unwrap();
    assert_eq!(written, ws.report_path());

    let report = ws.read_report();
    assert!(report.contains("| 测试用例总数 | 4 | ✅ |"));
    assert!(report.contains("| 通过用例数 | 3 | ⚠️ |"));
    assert!(report.contains("| 失败用例数 | 1 | ❌ |"));
    assert!(report.contains("| 测试通过率 | 75.00% | ❌ |"));
    assert!(report.contains("## ❌ 失败的测试"));
    assert!(report.contains("#### 1. 提交时调用创建接口"));
    assert!(!report.contains("## 📈 代码覆盖率"));
    assert!(!report.contains("## 🔍 未覆盖代码分析"));
}

#[test]
fn end_to_end_with_coverage_summary() {
    let ws = Workspace::new();
    ws.write_results(&three_passed_one_failed());
    ws.write_json("reports/coverage/coverage-summary.json", &coverage_summary());

    run_at(&ws.config(), fixed_time()).unwrap();
    let report = ws.read_report();
    assert!(report.contains("## 📈 代码覆盖率"));
    assert!(report.contains("## 🔍 未覆盖代码分析"));
}

#[test]
fn rerun_is_byte_identical_for_the_same_timestamp() {
    let ws = Workspace::new();
    ws.write_results(&three_passed_one_failed());
    ws.write_json("reports/coverage/coverage-summary.json", &coverage_summary());

    run_at(&ws.config(), fixed_time()).unwrap();
    let first = ws.read_report();
    run_at(&ws.config(), fixed_time()).unwrap();
    let second = ws.read_report();
    assert_eq!(first, second);
}

#[test]
fn runs_with_wall_clock_differ_only_in_timestamp_line() {
    let ws = Workspace::new();
    ws.write_results(&three_passed_one_failed());

    run(&ws.config()).unwrap();
    let first = ws.read_report();
    run(&ws.config()).unwrap();
    let second = ws.read_report();

    let strip = |s: &str| {
        s.lines()
            .filter(|l| !l.starts_with("> 生成时间："))
            .collect::<Vec<_>>()
            .join("\n")
    };
    assert_eq!(strip(&first), strip(&second));
}

#[test]
fn output_directory_is_created() {
    let ws = Workspace::new();
    ws.write_results(&three_passed_one_failed());
    let mut config = ws.config();
    config.output_path = ws.root().join("out/nested/report.md");

    run_at(&config, fixed_time()).unwrap();
    assert!(config.output_path.exists());
}

// ============================================================================
// 2. Validation totality
// ============================================================================

#[test]
fn invalid_documents_abort_without_touching_output() {
    let invalid = [
        json!({}),
        json!({ "testResults": [] }),
        json!({ "testResults": "nope" }),
        json!(null),
        json!([1, 2, 3]),
    ];

    for doc in invalid {
        let ws = Workspace::new();
        ws.write_results(&doc);

        let err = run_at(&ws.config(), fixed_time()).unwrap_err();
        assert!(matches!(err, ReportError::Validation(_)), "doc {doc}: {err}");
        assert!(!ws.report_path().exists());
    }
}

#[test]
fn invalid_document_keeps_previous_report() {
    let ws = Workspace::new();
    ws.write("reports/FINETUNE-TEST-REPORT.md", "previous report");
    ws.write_results(&json!({ "testResults": [] }));

    assert!(run_at(&ws.config(), fixed_time()).is_err());
    assert_eq!(ws.read_report(), "previous report");
}

#[test]
fn missing_results_file_is_fatal() {
    let ws = Workspace::new();
    let err = run_at(&ws.config(), fixed_time()).unwrap_err();
    assert!(matches!(err, ReportError::ResultsMissing { .. }));
    assert!(!err.hints().is_empty());
    assert!(!ws.report_path().exists());
}

#[test]
fn unparsable_results_file_is_fatal() {
    let ws = Workspace::new();
    ws.write("reports/test-results.json", "{ \"testResults\": [");
    let err = run_at(&ws.config(), fixed_time()).unwrap_err();
    assert!(matches!(err, ReportError::ResultsParse { .. }));
    assert!(!ws.report_path().exists());
}

#[test]
fn validation_error_lists_every_violation() {
    let ws = Workspace::new();
    ws.write_results(&json!({ "testResults": [] }));
    match run_at(&ws.config(), fixed_time()) {
        Err(ReportError::Validation(violations)) => {
            assert_eq!(violations, vec!["没有找到任何测试套件，请确认测试已正确运行".to_string()]);
        }
        other => panic!("expected validation error, got {other:?}"),
    }
}

// ============================================================================
// 3. Degraded coverage never aborts
// ============================================================================

#[test]
fn broken_coverage_still_produces_report() {
    let ws = Workspace::new();
    ws.write_results(&three_passed_one_failed());
    ws.write("reports/coverage/coverage-summary.json", "not json at all");

    run_at(&ws.config(), fixed_time()).unwrap();
    let report = ws.read_report();
    assert!(report.contains("## 🧪 测试套件详情"));
    assert!(!report.contains("## 📈 代码覆盖率"));
}
