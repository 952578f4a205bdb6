//! Debug bundle writer for inspecting every measured quantity of a run.

use std::fs::{File, create_dir_all};
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::Local;

use crate::assess::FrameReport;
use crate::domain::{Component, Thresholds};
use crate::error::AppError;

/// Write a markdown bundle under `debug/` and return its path.
pub fn write_debug_bundle(
    input: &Path,
    thresholds: &Thresholds,
    reports: &[FrameReport],
) -> Result<PathBuf, AppError> {
    write_debug_bundle_in(Path::new("debug"), input, thresholds, reports)
}

pub fn write_debug_bundle_in(
    dir: &Path,
    input: &Path,
    thresholds: &Thresholds,
    reports: &[FrameReport],
) -> Result<PathBuf, AppError> {
    create_dir_all(dir).map_err(|e| AppError::new(4, format!("Failed to create debug dir: {e}")))?;

    let ts = Local::now().format("%Y%m%d_%H%M%S");
    let path = dir.join(format!("rosa_debug_{ts}.md"));

    let mut file = File::create(&path)
        .map_err(|e| AppError::new(4, format!("Failed to create debug file: {e}")))?;
    write_bundle(&mut file, input, thresholds, reports)
        .map_err(|e| AppError::new(4, format!("Failed to write debug: {e}")))?;

    Ok(path)
}

fn write_bundle(
    out: &mut impl Write,
    input: &Path,
    thresholds: &Thresholds,
    reports: &[FrameReport],
) -> std::io::Result<()> {
    writeln!(out, "# rosa debug bundle")?;
    writeln!(out, "- generated: {}", Local::now().to_rfc3339())?;
    writeln!(out, "- input: {}", input.display())?;
    writeln!(out, "- frames: {}", reports.len())?;

    writeln!(out, "\n## Thresholds")?;
    let json = serde_json::to_string_pretty(thresholds).map_err(std::io::Error::other)?;
    writeln!(out, "```json\n{json}\n```")?;

    for report in reports {
        let evaluation = &report.evaluation;
        let a = &evaluation.assessment;
        writeln!(out, "\n## Frame: {} ({} view)", report.name, a.view)?;
        writeln!(
            out,
            "Verdict: {} | scores: {}",
            if a.is_correct { "correct" } else { "incorrect" },
            Component::ALL
                .iter()
                .map(|&c| format!("{}={}", c.display_name(), a.scores.get(c)))
                .collect::<Vec<_>>()
                .join(", ")
        )?;

        writeln!(out, "\n### Measurements")?;
        if evaluation.measurements.is_empty() {
            writeln!(out, "(none)")?;
        } else {
            writeln!(out, "| component | name | value |")?;
            writeln!(out, "| - | - | - |")?;
            for m in &evaluation.measurements {
                writeln!(out, "| {} | {} | {:.4} |", m.component.display_name(), m.name, m.value)?;
            }
        }

        writeln!(out, "\n### Draw intents")?;
        if evaluation.draw_intents.is_empty() {
            writeln!(out, "(none)")?;
        } else {
            for d in &evaluation.draw_intents {
                let colour = if d.is_correct { "green" } else { "red" };
                writeln!(out, "- {}-{}: {colour}", d.a, d.b)?;
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assess::assess_frame;
    use crate::data::template;
    use crate::domain::{Frame, ViewPoint};

    #[test]
    fn bundle_lists_measurements_per_frame() {
        let report = assess_frame(
            &Frame {
                name: "side.jpg".to_string(),
                view: ViewPoint::Side,
                skeleton: template(ViewPoint::Side),
            },
            &Thresholds::default(),
        );
        let dir = tempfile::tempdir().unwrap();
        let path = write_debug_bundle_in(dir.path(), Path::new("frames.json"), &Thresholds::default(), &[report])
            .unwrap();
        let text = std::fs::read_to_string(path).unwrap();
        assert!(text.starts_with("# rosa debug bundle"));
        assert!(text.contains("## Frame: side.jpg (side view)"));
        assert!(text.contains("| chair | right hip_knee_ankle |"));
        assert!(text.contains("\"chair_low_max\": 80.0"));
    }
}
