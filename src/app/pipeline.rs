//! Shared "assess pipeline" logic used by the CLI commands.
//!
//! Keeping this in one place avoids duplicating the core workflow:
//! frames JSON -> validation -> per-frame assessment -> batch summary
//!
//! The commands can then focus on presentation and exports.

use rayon::prelude::*;
use tracing::{debug, info, trace, warn};

use crate::assess::{FrameReport, assess_frame};
use crate::domain::{Frame, RunConfig, Thresholds};
use crate::error::AppError;
use crate::io::ingest::load_frames;
use crate::report::BatchSummary;

/// All computed outputs of a single `rosa assess` run.
#[derive(Debug, Clone)]
pub struct RunOutput {
    pub reports: Vec<FrameReport>,
    pub summary: BatchSummary,
}

/// Load the configured input and assess every frame.
pub fn run_assess(config: &RunConfig) -> Result<RunOutput, AppError> {
    let frames = load_frames(&config.input, config.default_view)?;
    info!(input = %config.input.display(), frames = frames.len(), "loaded frames");

    let run = evaluate_frames(&frames, &config.thresholds);
    info!(
        frames = run.summary.frames,
        correct = run.summary.correct,
        incorrect = run.summary.incorrect,
        "assessment finished"
    );
    Ok(run)
}

/// Assess frames in parallel. Report order matches input order.
pub fn evaluate_frames(frames: &[Frame], thresholds: &Thresholds) -> RunOutput {
    let reports: Vec<FrameReport> = frames
        .par_iter()
        .map(|frame| {
            if frame.skeleton.detected_count() == 0 {
                warn!(frame = %frame.name, "no joints detected; scoring at baseline");
            }
            let report = assess_frame(frame, thresholds);
            log_report(&report);
            report
        })
        .collect();

    let summary = BatchSummary::from_reports(&reports);
    RunOutput { reports, summary }
}

fn log_report(report: &FrameReport) {
    let a = &report.evaluation.assessment;
    debug!(frame = %report.name, view = %a.view, correct = a.is_correct, "frame assessed");
    for finding in &a.findings {
        debug!(frame = %report.name, ok = finding.is_correct, "{}", finding.message);
    }
    for m in &report.evaluation.measurements {
        trace!(frame = %report.name, component = m.component.display_name(), name = %m.name, value = m.value);
    }
}
