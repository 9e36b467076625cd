use std::path::{Path, PathBuf};

use chrono::{DateTime, FixedOffset, TimeZone};
use serde_json::{Value, json};
use tempfile::TempDir;

use finetune_report::cli::config::ReportConfig;
use finetune_report::coverage::coverage_model::CoverageSummary;
use finetune_report::results::results_model::TestResultsDocument;

// ============================================================================
// Results document builders
// ============================================================================

pub fn case(title: &str, status: &str) -> Value {
    json!({ "title": title, "status": status, "duration": 12 })
}

pub fn failed_case(title: &str, messages: &[&str]) -> Value {
    json!({ "title": title, "status": "failed", "duration": 30, "failureMessages": messages })
}

pub fn suite(name: &str, cases: Vec<Value>) -> Value {
    json!({
        "name": name,
        "startTime": 1_700_000_000_000u64,
        "endTime": 1_700_000_001_500u64,
        "assertionResults": cases
    })
}

pub fn results_doc(suites: Vec<Value>) -> Value {
    json!({ "numTotalTests": 0, "testResults": suites })
}

pub fn typed(doc: &Value) -> TestResultsDocument {
    TestResultsDocument::from_raw(doc.clone())
}

/// One suite: 3 passed, 1 failed.
pub fn three_passed_one_failed() -> Value {
    results_doc(vec![suite(
        "/repo/frontend/src/components/finetune/__tests__/NewFinetune.spec.js",
        vec![
            case("正确渲染表单", "passed"),
            case("表单验证通过", "passed"),
            case("切换 Tab", "passed"),
            failed_case(
                "提交时调用创建接口",
                &["AssertionError: expected 1 to be 2", "    at NewFinetune.spec.js:42:7"],
            ),
        ],
    )])
}

/// Coverage summary with two of the three default components present.
pub fn coverage_summary() -> Value {
    json!({
        "total": {
            "lines": { "total": 200, "covered": 150, "skipped": 0, "pct": 75 },
            "statements": { "total": 200, "covered": 150, "skipped": 0, "pct": 75 },
            "functions": { "total": 40, "covered": 30, "skipped": 0, "pct": 75 },
            "branches": { "total": 100, "covered": 82, "skipped": 0, "pct": 82 }
        },
        "/repo/frontend/src/components/finetune/FinetuneDetail.vue": {
            "lines": { "total": 100, "covered": 45, "skipped": 0, "pct": 45 },
            "statements": { "total": 100, "covered": 45, "skipped": 0, "pct": 45 },
            "functions": { "total": 20, "covered": 10, "skipped": 0, "pct": 50 },
            "branches": { "total": 50, "covered": 30, "skipped": 0, "pct": 60 }
        },
        "/repo/frontend/src/components/finetune/NewFinetune.vue": {
            "lines": { "total": 100, "covered": 100, "skipped": 0, "pct": 100 },
            "statements": { "total": 100, "covered": 100, "skipped": 0, "pct": 100 },
            "functions": { "total": 20, "covered": 20, "skipped": 0, "pct": 100 },
            "branches": { "total": 50, "covered": 50, "skipped": 0, "pct": 100 }
        }
    })
}

pub fn parsed_coverage(doc: &Value) -> CoverageSummary {
    CoverageSummary::from_json(&doc.to_string()).unwrap()
}

pub fn default_components() -> Vec<String> {
    ReportConfig::default().components
}

pub fn fixed_time() -> DateTime<FixedOffset> {
    FixedOffset::east_opt(8 * 3600)
        .unwrap()
        .with_ymd_and_hms(2026, 1, 2, 3, 4, 5)
        .unwrap()
}

// ============================================================================
// Scratch workspace with the default reports/ layout
// ============================================================================

pub struct Workspace {
    pub dir: TempDir,
}

impl Workspace {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().unwrap(),
        }
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn config(&self) -> ReportConfig {
        ReportConfig::with_base_dir(self.root())
    }

    pub fn write(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.root().join(relative);
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, content).unwrap();
        path
    }

    pub fn write_json(&self, relative: &str, value: &Value) -> PathBuf {
        self.write(relative, &serde_json::to_string_pretty(value).unwrap())
    }

    pub fn write_results(&self, value: &Value) -> PathBuf {
        self.write_json("reports/test-results.json", value)
    }

    pub fn report_path(&self) -> PathBuf {
        self.config().output_path
    }

    pub fn read_report(&self) -> String {
        std::fs::read_to_string(self.report_path()).unwrap()
    }
}
