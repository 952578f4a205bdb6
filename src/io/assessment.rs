//! Read/write assessment JSON files.
//!
//! - full per-frame reports (scores, findings, draw intents, measurements)
//! - threshold overrides, merged over the defaults field by field

use std::fs::File;
use std::path::Path;

use crate::assess::FrameReport;
use crate::domain::Thresholds;
use crate::error::AppError;

/// Write the full reports as pretty JSON.
pub fn write_reports_json(path: &Path, reports: &[FrameReport]) -> Result<(), AppError> {
    let file = File::create(path)
        .map_err(|e| AppError::new(4, format!("Failed to create report JSON '{}': {e}", path.display())))?;
    serde_json::to_writer_pretty(file, reports)
        .map_err(|e| AppError::new(4, format!("Failed to write report JSON: {e}")))?;
    Ok(())
}

/// Read a thresholds file. Missing fields keep their defaults.
pub fn read_thresholds(path: &Path) -> Result<Thresholds, AppError> {
    let file = File::open(path)
        .map_err(|e| AppError::new(2, format!("Failed to open thresholds JSON '{}': {e}", path.display())))?;
    let thresholds: Thresholds = serde_json::from_reader(file)
        .map_err(|e| AppError::new(2, format!("Invalid thresholds JSON '{}': {e}", path.display())))?;
    thresholds.validate()?;
    Ok(thresholds)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    use crate::assess::assess_frame;
    use crate::domain::{Frame, Skeleton, ViewPoint};

    #[test]
    fn reports_json_parses_back() {
        let report = assess_frame(
            &Frame {
                name: "a.jpg".to_string(),
                view: ViewPoint::Front,
                skeleton: Skeleton::empty(),
            },
            &Thresholds::default(),
        );
        let file = tempfile::NamedTempFile::new().unwrap();
        write_reports_json(file.path(), std::slice::from_ref(&report)).unwrap();
        let text = std::fs::read_to_string(file.path()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value[0]["name"], "a.jpg");
        assert_eq!(value[0]["assessment"]["is_correct"], true);
        let parsed: Vec<FrameReport> = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed, vec![report]);
    }

    #[test]
    fn partial_thresholds_file_keeps_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(br#"{ "head_tilt_max": 25.0 }"#).unwrap();
        let thresholds = read_thresholds(file.path()).unwrap();
        assert_eq!(thresholds.head_tilt_max, 25.0);
        assert_eq!(thresholds.chair_low_max, 80.0);
    }

    #[test]
    fn invalid_thresholds_file_is_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(br#"{ "back_forward_min": 130.0 }"#).unwrap();
        assert_eq!(read_thresholds(file.path()).unwrap_err().exit_code(), 2);

        let missing = std::path::Path::new("/nonexistent/thresholds.json");
        assert_eq!(read_thresholds(missing).unwrap_err().exit_code(), 2);
    }
}
