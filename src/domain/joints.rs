//! Joint model: the positional keypoint schema produced by the pose detector.
//!
//! The detector emits 18 keypoints in a fixed order (COCO layout with a
//! synthesized `Neck`). `JointId` owns the name → slot mapping; evaluators
//! only ever read through it.

use std::fmt;

use nalgebra::Point2;
use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Named body landmark. The discriminant is the slot in a [`Skeleton`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum JointId {
    Nose = 0,
    Neck = 1,
    RShoulder = 2,
    RElbow = 3,
    RWrist = 4,
    LShoulder = 5,
    LElbow = 6,
    LWrist = 7,
    RHip = 8,
    RKnee = 9,
    RAnkle = 10,
    LHip = 11,
    LKnee = 12,
    LAnkle = 13,
    REye = 14,
    LEye = 15,
    REar = 16,
    LEar = 17,
}

impl JointId {
    /// Number of slots in a skeleton.
    pub const COUNT: usize = 18;

    /// All joints in slot order.
    pub const ALL: [JointId; JointId::COUNT] = [
        JointId::Nose,
        JointId::Neck,
        JointId::RShoulder,
        JointId::RElbow,
        JointId::RWrist,
        JointId::LShoulder,
        JointId::LElbow,
        JointId::LWrist,
        JointId::RHip,
        JointId::RKnee,
        JointId::RAnkle,
        JointId::LHip,
        JointId::LKnee,
        JointId::LAnkle,
        JointId::REye,
        JointId::LEye,
        JointId::REar,
        JointId::LEar,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            JointId::Nose => "Nose",
            JointId::Neck => "Neck",
            JointId::RShoulder => "RShoulder",
            JointId::RElbow => "RElbow",
            JointId::RWrist => "RWrist",
            JointId::LShoulder => "LShoulder",
            JointId::LElbow => "LElbow",
            JointId::LWrist => "LWrist",
            JointId::RHip => "RHip",
            JointId::RKnee => "RKnee",
            JointId::RAnkle => "RAnkle",
            JointId::LHip => "LHip",
            JointId::LKnee => "LKnee",
            JointId::LAnkle => "LAnkle",
            JointId::REye => "REye",
            JointId::LEye => "LEye",
            JointId::REar => "REar",
            JointId::LEar => "LEar",
        }
    }
}

impl fmt::Display for JointId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// An anatomical edge between two joints.
///
/// Edges are unordered: `JointPair::new(Neck, RShoulder)` and
/// `JointPair::new(RShoulder, Neck)` compare equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct JointPair {
    pub a: JointId,
    pub b: JointId,
}

impl JointPair {
    pub fn new(a: JointId, b: JointId) -> Self {
        if a <= b { Self { a, b } } else { Self { a: b, b: a } }
    }
}

impl fmt::Display for JointPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.a, self.b)
    }
}

/// One frame's keypoints; each slot is either a detected point or absent.
///
/// Presence is explicit. A joint detected at the image origin is present.
#[derive(Debug, Clone, PartialEq)]
pub struct Skeleton {
    slots: [Option<Point2<f64>>; JointId::COUNT],
}

impl Skeleton {
    /// A skeleton with every joint absent.
    pub fn empty() -> Self {
        Self {
            slots: [None; JointId::COUNT],
        }
    }

    /// Build from a flat slot list in detector order.
    ///
    /// A list of the wrong length is a contract violation, not missing joints.
    pub fn from_slots(slots: Vec<Option<Point2<f64>>>) -> Result<Self, AppError> {
        let len = slots.len();
        let slots: [Option<Point2<f64>>; JointId::COUNT] = slots.try_into().map_err(|_| {
            AppError::new(
                2,
                format!("Skeleton must have exactly {} keypoint slots, got {len}.", JointId::COUNT),
            )
        })?;
        Ok(Self { slots })
    }

    pub fn get(&self, joint: JointId) -> Option<Point2<f64>> {
        self.slots[joint.index()]
    }

    pub fn set(&mut self, joint: JointId, point: Option<Point2<f64>>) {
        self.slots[joint.index()] = point;
    }

    /// Builder-style `set` for a present point.
    pub fn with(mut self, joint: JointId, x: f64, y: f64) -> Self {
        self.set(joint, Some(Point2::new(x, y)));
        self
    }

    pub fn is_present(&self, joint: JointId) -> bool {
        self.get(joint).is_some()
    }

    pub fn detected_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    pub fn slots(&self) -> &[Option<Point2<f64>>; JointId::COUNT] {
        &self.slots
    }
}

impl Default for Skeleton {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slot_order_is_stable() {
        for (idx, joint) in JointId::ALL.iter().enumerate() {
            assert_eq!(joint.index(), idx);
        }
        assert_eq!(JointId::REar.index(), 16);
    }

    #[test]
    fn wrong_length_is_rejected() {
        let err = Skeleton::from_slots(vec![None; 17]).unwrap_err();
        assert_eq!(err.exit_code(), 2);
        assert!(err.message().contains("18"));
    }

    #[test]
    fn origin_point_counts_as_present() {
        let skeleton = Skeleton::empty().with(JointId::Neck, 0.0, 0.0);
        assert!(skeleton.is_present(JointId::Neck));
        assert_eq!(skeleton.detected_count(), 1);
    }

    #[test]
    fn pairs_are_unordered() {
        assert_eq!(
            JointPair::new(JointId::Neck, JointId::RShoulder),
            JointPair::new(JointId::RShoulder, JointId::Neck)
        );
    }
}
