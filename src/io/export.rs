//! Export per-frame results.
//!
//! - scores CSV, easy to consume in spreadsheets or downstream scripts
//! - an appendable plain-text description log

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;

use crate::assess::FrameReport;
use crate::error::AppError;

/// Separator written after each block in the description log.
pub const LOG_SEPARATOR: &str = "****************************************";

/// Write one CSV row of component scores per frame.
pub fn write_scores_csv(path: &Path, reports: &[FrameReport]) -> Result<(), AppError> {
    let mut file = File::create(path)
        .map_err(|e| AppError::new(4, format!("Failed to create export CSV '{}': {e}", path.display())))?;

    writeln!(file, "name,view,chair,armrest,backrest,monitor,phone,correct")
        .map_err(|e| AppError::new(4, format!("Failed to write export CSV header: {e}")))?;

    for report in reports {
        let a = &report.evaluation.assessment;
        writeln!(
            file,
            "{},{},{},{},{},{},{},{}",
            csv_field(&report.name),
            a.view,
            a.scores.chair,
            a.scores.armrest,
            a.scores.backrest,
            a.scores.monitor,
            a.scores.phone,
            a.is_correct,
        )
        .map_err(|e| AppError::new(4, format!("Failed to write export CSV row: {e}")))?;
    }

    Ok(())
}

/// Append a "Description of <name>:" block per frame to a log file.
///
/// The file is created if missing; existing content is kept.
pub fn append_description_log(path: &Path, reports: &[FrameReport]) -> Result<(), AppError> {
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| AppError::new(4, format!("Failed to open log '{}': {e}", path.display())))?;

    for report in reports {
        write!(
            file,
            "Description of {}:\n{}{LOG_SEPARATOR}\n",
            report.name,
            report.evaluation.assessment.description()
        )
        .map_err(|e| AppError::new(4, format!("Failed to append to log '{}': {e}", path.display())))?;
    }

    Ok(())
}

fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}
