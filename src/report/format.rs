//! Small formatting rules shared by the Markdown sections.

use crate::results::results_model::Outcome;

/// Human-readable duration: `0ms`, `532ms`, `1.25s`, `2m 5s`.
pub fn format_duration(ms: f64) -> String {
    if ms.is_nan() || ms <= 0.0 {
        return "0ms".to_string();
    }
    if ms < 1000.0 {
        return format!("{}ms", ms.round());
    }
    if ms < 60_000.0 {
        return format!("{:.2}s", ms / 1000.0);
    }
    let minutes = (ms / 60_000.0).floor();
    // round half away from zero
    let seconds = ((ms % 60_000.0) / 1000.0).round();
    format!("{}m {}s", minutes, seconds)
}

/// Coverage percentage in shortest form: `70`, `70.5`, `66.67`.
pub fn format_pct(pct: f64) -> String {
    format!("{}", pct)
}

/// Pass rate with two decimals: `75.00`.
pub fn format_rate(rate: f64) -> String {
    format!("{:.2}", rate)
}

/// Glyph for a test case outcome in the suite tables.
pub fn outcome_icon(outcome: Outcome) -> &'static str {
    match outcome {
        Outcome::Passed => "✅",
        Outcome::Failed => "❌",
        Outcome::Skipped => "⏭️",
        Outcome::Unknown => "❓",
    }
}

/// Glyph for a coverage value against its target: unknown when zero, met at
/// or above target, near within 90% of target.
pub fn coverage_icon(value: f64, target: f64) -> &'static str {
    match coverage_band(value, target) {
        CoverageBand::Unknown => "❓",
        CoverageBand::Met => "✅",
        CoverageBand::Near => "⚠️",
        CoverageBand::Below => "📊",
    }
}

/// Status text for a coverage value against its target.
pub fn coverage_status(value: f64, target: f64) -> &'static str {
    match coverage_band(value, target) {
        CoverageBand::Unknown => "❓ 未知",
        CoverageBand::Met => "✅ 达标",
        CoverageBand::Near => "⚠️ 接近",
        CoverageBand::Below => "❌ 偏低",
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoverageBand {
    Unknown,
    Met,
    Near,
    Below,
}

pub fn coverage_band(value: f64, target: f64) -> CoverageBand {
    if value == 0.0 || value.is_nan() {
        CoverageBand::Unknown
    } else if value >= target {
        CoverageBand::Met
    } else if value >= target * 0.9 {
        CoverageBand::Near
    } else {
        CoverageBand::Below
    }
}

/// Rating from the unweighted average of the four coverage percentages.
pub fn star_rating(average: f64) -> &'static str {
    if average >= 80.0 {
        "⭐⭐⭐⭐⭐ 优秀"
    } else if average >= 70.0 {
        "⭐⭐⭐⭐ 良好"
    } else if average >= 60.0 {
        "⭐⭐⭐ 一般"
    } else {
        "⭐⭐ 需改进"
    }
}

/// Keep user text from breaking a Markdown table row.
pub fn escape_cell(s: &str) -> String {
    s.replace('|', "\\|").replace('\n', " ")
}

/// Backtick fence longer than any backtick run inside `text`, at least three.
pub fn code_fence(text: &str) -> String {
    let longest = text.split(|c| c != '`').map(str::len).max().unwrap_or(0);
    "`".repeat(longest.max(2) + 1)
}
