//! Report Aggregator
//!
//! Merges readability and policy findings into a structured lint report,
//! computes the compliance score, and renders the console report. The
//! score is a plain linear penalty model so every point lost is traceable
//! to a specific finding.

use serde::Serialize;

use crate::pack::StylePack;
use crate::policy::check_policy;
use crate::readability::grade_level;

/// Structured result of linting one text against one style pack
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LintReport {
    /// Banned terms found, in pack declaration order
    pub banned: Vec<String>,
    /// Required terms absent, in pack declaration order
    pub missing_required: Vec<String>,
    /// Computed Flesch-Kincaid grade level, one decimal place
    pub reading_level: f64,
    /// Whether the grade level falls inside the pack's band
    pub reading_level_ok: bool,
}

impl LintReport {
    /// A report is compliant when nothing was flagged
    pub fn is_compliant(&self) -> bool {
        self.banned.is_empty() && self.missing_required.is_empty() && self.reading_level_ok
    }
}

/// Kind of a style violation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ViolationKind {
    MustAvoid,
    MustUse,
    ReadingLevel,
}

/// One policy failure, flattened from a report for presentation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Violation {
    #[serde(rename = "type")]
    pub kind: ViolationKind,
    pub term: String,
    pub message: String,
}

/// Lint a text against a style pack.
///
/// Pure function: identical inputs always produce an identical report.
pub fn lint(text: &str, pack: &StylePack) -> LintReport {
    let findings = check_policy(text, pack);
    let level = grade_level(text);
    let band = pack.reading_band();

    LintReport {
        banned: findings.banned,
        missing_required: findings.missing_required,
        reading_level: level,
        reading_level_ok: band.contains(level),
    }
}

/// Compute the compliance score for a report, in `[0.0, 1.0]`.
///
/// Linear penalties: 0.2 per banned term, 0.1 per missing required term,
/// a flat 0.1 when the reading level is out of band. Clamped at both ends.
pub fn score(report: &LintReport) -> f64 {
    let mut score = 1.0;

    score -= report.banned.len() as f64 * 0.2;
    score -= report.missing_required.len() as f64 * 0.1;

    if !report.reading_level_ok {
        score -= 0.1;
    }

    score.clamp(0.0, 1.0)
}

/// Derive the flat violation list from a report
pub fn violations(report: &LintReport, pack: &StylePack) -> Vec<Violation> {
    let mut out = Vec::new();

    for term in &report.banned {
        out.push(Violation {
            kind: ViolationKind::MustAvoid,
            term: term.clone(),
            message: format!("Content contains prohibited term: '{}'", term),
        });
    }

    for term in &report.missing_required {
        out.push(Violation {
            kind: ViolationKind::MustUse,
            term: term.clone(),
            message: format!("Content is missing required term: '{}'", term),
        });
    }

    if !report.reading_level_ok {
        out.push(Violation {
            kind: ViolationKind::ReadingLevel,
            term: pack.reading_level.clone(),
            message: format!(
                "Reading level {:.1} is outside the target band '{}'",
                report.reading_level, pack.reading_level
            ),
        });
    }

    out
}

/// Render a report for console output.
///
/// The rendering is byte-stable for a given input: fixed header, fixed
/// line order, grade level always shown with one decimal.
pub fn format_report(report: &LintReport, pack: &StylePack, label: Option<&str>) -> String {
    let mut lines = Vec::new();

    match label {
        Some(name) => lines.push(format!("\nStyle Lint Report for: {}", name)),
        None => lines.push("\nStyle Lint Report".to_string()),
    }
    lines.push("=".repeat(50));

    let status_icon = if report.reading_level_ok { "✅" } else { "❌" };
    lines.push(format!(
        "Reading Level: {:.1} (Target: {})",
        report.reading_level, pack.reading_level
    ));
    lines.push(format!("Reading Level OK: {}", status_icon));

    if report.banned.is_empty() {
        lines.push("\n✅ No banned terms found".to_string());
    } else {
        lines.push(format!(
            "\n❌ Banned terms found: {}",
            report.banned.join(", ")
        ));
    }

    if !report.missing_required.is_empty() {
        lines.push(format!(
            "❌ Missing required terms: {}",
            report.missing_required.join(", ")
        ));
    } else if !pack.must_use.is_empty() {
        lines.push("✅ All required terms present".to_string());
    }

    lines.join("\n")
}
