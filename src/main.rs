use std::io::Write;

use clap::Parser;
use finetune_report::cli::commands::{cmd_generate, report_failure};
use finetune_report::cli::config::{Cli, build_report_config, load_config};

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    // Resolve settings: CLI > config file > defaults
    let config = load_config(cli.config.as_deref());
    let report_config = build_report_config(&cli, &config);

    if let Err(e) = cmd_generate(&report_config) {
        report_failure(&e);
        std::process::exit(1);
    }
}

/// stderr logger; errors and warnings carry a leading glyph. `RUST_LOG`
/// overrides the verbosity flag.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => log::LevelFilter::Info,
        1 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };

    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format(|buf, record| match record.level() {
            log::Level::Error => writeln!(buf, "❌ 错误：{}", record.args()),
            log::Level::Warn => writeln!(buf, "⚠️  警告：{}", record.args()),
            _ => writeln!(buf, "{}", record.args()),
        })
        .init();
}
