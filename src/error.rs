use std::path::PathBuf;

use thiserror::Error;

/// Fatal errors. Any of these aborts the run before a report is written.
#[derive(Debug, Error)]
pub enum ReportError {
    /// Required results file does not exist
    #[error("找不到测试结果文件: {}", .path.display())]
    ResultsMissing { path: PathBuf },

    /// Results file exists but could not be read
    #[error("无法读取测试结果文件 {}: {source}", .path.display())]
    ResultsRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Results file is not valid JSON
    #[error("无法解析测试结果文件 {}: {source}", .path.display())]
    ResultsParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Results document failed structural validation
    #[error("测试结果数据验证失败：{}", .0.join("; "))]
    Validation(Vec<String>),

    /// Report could not be written to its destination
    #[error("无法写入报告文件 {}: {source}", .path.display())]
    ReportWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ReportError {
    /// Remediation hints printed after the diagnostic.
    pub fn hints(&self) -> Vec<&'static str> {
        match self {
            ReportError::ResultsMissing { .. } => {
                vec!["请先运行测试: npm test -- --run src/components/finetune/__tests__/"]
            }
            ReportError::Validation(_) => vec![
                "确认测试已成功运行",
                "检查 vitest.config.js 的 outputFile 配置",
                "验证测试文件路径是否正确",
            ],
            ReportError::ResultsRead { .. } | ReportError::ResultsParse { .. } => {
                vec!["确认 JSON reporter 已完整写出测试结果文件"]
            }
            ReportError::ReportWrite { .. } => vec!["检查输出目录是否存在且可写"],
        }
    }
}

/// Errors reading optional coverage input. Never fatal: the loader logs them
/// and continues without coverage.
#[derive(Debug, Error)]
pub enum CoverageError {
    #[error("无法读取 {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("无法解析 {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
