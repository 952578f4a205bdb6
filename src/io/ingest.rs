//! Frames JSON ingest.
//!
//! The pose detector hands over one record per image:
//!
//! ```json
//! { "frames": [ { "name": "desk_01.jpg", "view": "side", "keypoints": [[412, 96], null, ...] } ] }
//! ```
//!
//! `keypoints` has exactly one slot per joint in detector order; `null` marks
//! an undetected joint. `view` is optional and falls back to the run default.
//! A wrong slot count or a non-finite coordinate is rejected for the whole
//! file (exit code 2), never treated as a missing joint.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use nalgebra::Point2;
use serde::{Deserialize, Serialize};

use crate::domain::{Frame, JointId, Skeleton, ViewPoint};
use crate::error::AppError;

/// On-disk frames file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FramesFile {
    pub frames: Vec<FrameRecord>,
}

/// One frame as stored on disk.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FrameRecord {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub view: Option<ViewPoint>,
    pub keypoints: Vec<Option<[f64; 2]>>,
}

impl FrameRecord {
    pub fn from_frame(frame: &Frame) -> Self {
        Self {
            name: frame.name.clone(),
            view: Some(frame.view),
            keypoints: frame
                .skeleton
                .slots()
                .iter()
                .map(|slot| slot.map(|p| [p.x, p.y]))
                .collect(),
        }
    }

    /// Validate and convert into a [`Frame`].
    pub fn into_frame(self, default_view: ViewPoint) -> Result<Frame, AppError> {
        if self.keypoints.len() != JointId::COUNT {
            return Err(AppError::new(
                2,
                format!(
                    "Frame '{}': expected {} keypoint slots, got {}.",
                    self.name,
                    JointId::COUNT,
                    self.keypoints.len()
                ),
            ));
        }

        let mut slots = Vec::with_capacity(JointId::COUNT);
        for (joint, keypoint) in JointId::ALL.iter().zip(&self.keypoints) {
            let point = match keypoint {
                Some([x, y]) if x.is_finite() && y.is_finite() => Some(Point2::new(*x, *y)),
                Some([x, y]) => {
                    return Err(AppError::new(
                        2,
                        format!("Frame '{}': non-finite coordinate for {joint}: ({x}, {y}).", self.name),
                    ));
                }
                None => None,
            };
            slots.push(point);
        }

        Ok(Frame {
            view: self.view.unwrap_or(default_view),
            skeleton: Skeleton::from_slots(slots)?,
            name: self.name,
        })
    }
}

/// Load and validate all frames from a JSON file.
pub fn load_frames(path: &Path, default_view: ViewPoint) -> Result<Vec<Frame>, AppError> {
    let file = File::open(path)
        .map_err(|e| AppError::new(2, format!("Failed to open frames JSON '{}': {e}", path.display())))?;
    let parsed: FramesFile = serde_json::from_reader(BufReader::new(file))
        .map_err(|e| AppError::new(2, format!("Invalid frames JSON '{}': {e}", path.display())))?;

    if parsed.frames.is_empty() {
        return Err(AppError::new(3, format!("No frames in '{}'.", path.display())));
    }

    parsed
        .frames
        .into_iter()
        .map(|record| record.into_frame(default_view))
        .collect()
}

/// Write frames to a JSON file in the ingest format.
pub fn write_frames(path: &Path, frames: &[Frame]) -> Result<(), AppError> {
    let file = File::create(path)
        .map_err(|e| AppError::new(4, format!("Failed to create frames JSON '{}': {e}", path.display())))?;
    let out = FramesFile {
        frames: frames.iter().map(FrameRecord::from_frame).collect(),
    };
    serde_json::to_writer_pretty(file, &out)
        .map_err(|e| AppError::new(4, format!("Failed to write frames JSON: {e}")))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_temp(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    fn slots_json(present: &[(usize, [f64; 2])]) -> String {
        let mut slots = vec!["null".to_string(); JointId::COUNT];
        for (idx, [x, y]) in present {
            slots[*idx] = format!("[{x}, {y}]");
        }
        format!("[{}]", slots.join(", "))
    }

    #[test]
    fn loads_frames_with_default_view() {
        let json = format!(
            r#"{{ "frames": [
                {{ "name": "a.jpg", "keypoints": {} }},
                {{ "name": "b.jpg", "view": "front", "keypoints": {} }}
            ] }}"#,
            slots_json(&[(1, [0.0, 0.0])]),
            slots_json(&[]),
        );
        let file = write_temp(&json);
        let frames = load_frames(file.path(), ViewPoint::Side).unwrap();
        assert_eq!(frames.len(), 2);
        assert_eq!(frames[0].view, ViewPoint::Side);
        assert_eq!(frames[1].view, ViewPoint::Front);
        assert!(frames[0].skeleton.is_present(JointId::Neck));
        assert_eq!(frames[1].skeleton.detected_count(), 0);
    }

    #[test]
    fn short_keypoint_list_is_an_error() {
        let file = write_temp(r#"{ "frames": [ { "name": "short.jpg", "keypoints": [[1, 2], null] } ] }"#);
        let err = load_frames(file.path(), ViewPoint::Front).unwrap_err();
        assert_eq!(err.exit_code(), 2);
        assert!(err.message().contains("short.jpg"));
    }

    #[test]
    fn empty_file_has_nothing_to_process() {
        let file = write_temp(r#"{ "frames": [] }"#);
        let err = load_frames(file.path(), ViewPoint::Front).unwrap_err();
        assert_eq!(err.exit_code(), 3);
    }

    #[test]
    fn unknown_view_is_rejected() {
        let json = format!(
            r#"{{ "frames": [ {{ "name": "x", "view": "top", "keypoints": {} }} ] }}"#,
            slots_json(&[])
        );
        let file = write_temp(&json);
        assert_eq!(load_frames(file.path(), ViewPoint::Front).unwrap_err().exit_code(), 2);
    }

    #[test]
    fn written_frames_load_back() {
        let frame = Frame {
            name: "desk.jpg".to_string(),
            view: ViewPoint::Side,
            skeleton: Skeleton::empty().with(JointId::RHip, 10.5, 20.0),
        };
        let file = tempfile::NamedTempFile::new().unwrap();
        write_frames(file.path(), std::slice::from_ref(&frame)).unwrap();
        let frames = load_frames(file.path(), ViewPoint::Front).unwrap();
        assert_eq!(frames, vec![frame]);
    }
}
