//! Formatted terminal output.
//!
//! Formatting lives in one place so the rule code stays free of presentation
//! and output changes are localized.

use crate::assess::FrameReport;
use crate::domain::Component;
use crate::report::BatchSummary;

/// Format one frame: scores table, verdict, then findings in emission order.
pub fn format_frame_report(report: &FrameReport) -> String {
    let a = &report.evaluation.assessment;
    let mut out = String::new();

    out.push_str(&format!("=== {} ({} view) ===\n", report.name, a.view));
    out.push_str(&format!("{:<10} {:>5}\n", "component", "score"));
    out.push_str(&format!("{:-<10} {:-<5}\n", "", ""));
    for component in Component::ALL {
        out.push_str(&format!("{:<10} {:>5}\n", component.display_name(), a.scores.get(component)));
    }

    let verdict = if a.is_correct { "correct" } else { "incorrect" };
    out.push_str(&format!("Verdict: {verdict} posture\n"));

    if a.findings.is_empty() {
        out.push_str("Findings: none (no measurable joints)\n");
    } else {
        out.push_str("Findings:\n");
        for finding in &a.findings {
            let mark = if finding.is_correct { "ok" } else { "!!" };
            out.push_str(&format!("  [{mark}] {}\n", finding.message));
        }
    }

    out
}

/// Format the batch totals.
pub fn format_batch_summary(summary: &BatchSummary) -> String {
    let mut out = String::new();

    out.push_str("=== Summary ===\n");
    out.push_str(&format!(
        "Frames: {} | correct={} | incorrect={}\n",
        summary.frames, summary.correct, summary.incorrect
    ));
    out.push_str("Violations by component:\n");
    for (component, n) in &summary.violations {
        out.push_str(&format!("  {:<10} {:>5}\n", component.display_name(), n));
    }

    out
}
