use std::path::PathBuf;

use crate::cli::config::ReportConfig;
use crate::error::ReportError;

// ============================================================================
// generate command
// ============================================================================

/// Generate the report and print where it went.
pub fn cmd_generate(config: &ReportConfig) -> Result<PathBuf, ReportError> {
    log::info!("📊 开始生成测试报告...");
    log::debug!("config: {:?}", config);

    let path = crate::run(config)?;

    println!("✅ 测试报告生成成功！");
    println!("   报告路径: {}", path.display());
    Ok(path)
}

/// Print a fatal error with its details and remediation hints to stderr.
pub fn report_failure(error: &ReportError) {
    match error {
        ReportError::Validation(violations) => {
            log::error!("测试结果数据验证失败：");
            for violation in violations {
                eprintln!("   - {}", violation);
            }
        }
        other => {
            log::error!("{}", other);
            if let ReportError::ResultsMissing { path } = other {
                eprintln!("   期望路径: {}", path.display());
            }
        }
    }

    let hints = error.hints();
    if !hints.is_empty() {
        eprintln!("\n💡 建议：");
        for (i, hint) in hints.iter().enumerate() {
            eprintln!("   {}. {}", i + 1, hint);
        }
    }
}
