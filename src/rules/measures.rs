//! Named body angles and distances shared by the rules.
//!
//! Each function reads the joints it needs from the skeleton and returns
//! `None` when any of them is absent.

use crate::domain::{JointId, JointPair, Skeleton};
use crate::math::{
    angle_between_three_points, angle_between_vectors, angle_from_vertical_axis, distance,
    sweep_angle_between_three_points, vector_between,
};

/// Body side as seen by the rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Right,
    Left,
}

impl Side {
    /// Evaluation order: right first.
    pub const BOTH: [Side; 2] = [Side::Right, Side::Left];

    pub fn label(self) -> &'static str {
        match self {
            Side::Right => "right",
            Side::Left => "left",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Side::Right => "Right",
            Side::Left => "Left",
        }
    }

    pub fn shoulder(self) -> JointId {
        match self {
            Side::Right => JointId::RShoulder,
            Side::Left => JointId::LShoulder,
        }
    }

    pub fn elbow(self) -> JointId {
        match self {
            Side::Right => JointId::RElbow,
            Side::Left => JointId::LElbow,
        }
    }

    pub fn hip(self) -> JointId {
        match self {
            Side::Right => JointId::RHip,
            Side::Left => JointId::LHip,
        }
    }

    pub fn knee(self) -> JointId {
        match self {
            Side::Right => JointId::RKnee,
            Side::Left => JointId::LKnee,
        }
    }

    pub fn ankle(self) -> JointId {
        match self {
            Side::Right => JointId::RAnkle,
            Side::Left => JointId::LAnkle,
        }
    }

    pub fn eye(self) -> JointId {
        match self {
            Side::Right => JointId::REye,
            Side::Left => JointId::LEye,
        }
    }

    pub fn ear(self) -> JointId {
        match self {
            Side::Right => JointId::REar,
            Side::Left => JointId::LEar,
        }
    }
}

/// The two edges `a-b` and `b-c` that form an angle at `b`.
pub fn chain(a: JointId, b: JointId, c: JointId) -> Vec<JointPair> {
    vec![JointPair::new(a, b), JointPair::new(b, c)]
}

/// Knee angle (hip-knee-ankle, vertex at knee).
pub fn hip_knee_ankle(skeleton: &Skeleton, side: Side) -> Option<f64> {
    angle_between_three_points(
        skeleton.get(side.hip()),
        skeleton.get(side.knee()),
        skeleton.get(side.ankle()),
    )
}

/// Angle between both shoulders at the neck.
pub fn shoulders_neck(skeleton: &Skeleton) -> Option<f64> {
    angle_between_three_points(
        skeleton.get(JointId::RShoulder),
        skeleton.get(JointId::Neck),
        skeleton.get(JointId::LShoulder),
    )
}

/// Upper-arm abduction (neck-shoulder-elbow, vertex at shoulder).
pub fn neck_shoulder_elbow(skeleton: &Skeleton, side: Side) -> Option<f64> {
    angle_between_three_points(
        skeleton.get(JointId::Neck),
        skeleton.get(side.shoulder()),
        skeleton.get(side.elbow()),
    )
}

/// Upper arm (shoulder→elbow) deviation from the image vertical.
pub fn shoulder_elbow_vertical(skeleton: &Skeleton, side: Side) -> Option<f64> {
    let shoulder = skeleton.get(side.shoulder())?;
    let elbow = skeleton.get(side.elbow())?;
    angle_from_vertical_axis(&vector_between(&shoulder, &elbow))
}

/// Trunk-thigh angle (shoulder-hip-knee, vertex at hip).
pub fn shoulder_hip_knee(skeleton: &Skeleton, side: Side) -> Option<f64> {
    angle_between_three_points(
        skeleton.get(side.shoulder()),
        skeleton.get(side.hip()),
        skeleton.get(side.knee()),
    )
}

/// Horizontal direction a profile subject faces in the image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Facing {
    /// Toward +x.
    Right,
    /// Toward -x.
    Left,
}

impl Facing {
    fn from_dx(dx: f64) -> Option<Self> {
        if dx > 0.0 {
            Some(Facing::Right)
        } else if dx < 0.0 {
            Some(Facing::Left)
        } else {
            None
        }
    }
}

/// Facing direction of a side-view subject, shared by both body sides.
///
/// Cues in order: seated thighs point forward (hip to knee), the nose sits
/// ahead of the neck, the ear ahead of the shoulder. The first side with a
/// non-zero horizontal offset decides. `None` when no cue is available.
pub fn facing(skeleton: &Skeleton) -> Option<Facing> {
    let offset = |from: JointId, to: JointId| -> Option<Facing> {
        let from = skeleton.get(from)?;
        let to = skeleton.get(to)?;
        Facing::from_dx(to.x - from.x)
    };

    Side::BOTH
        .iter()
        .find_map(|side| offset(side.hip(), side.knee()))
        .or_else(|| offset(JointId::Neck, JointId::Nose))
        .or_else(|| Side::BOTH.iter().find_map(|side| offset(side.shoulder(), side.ear())))
}

/// Neck posture seen from the side (hip-shoulder-ear, vertex at shoulder).
///
/// With a known facing direction this is an oriented sweep in `[0, 360)`: the
/// ear moving toward the facing direction lowers it below 180 and moving
/// behind raises it above. Both body sides are oriented the same way. Without
/// a facing cue it falls back to the unsigned angle in `[0, 180]`.
pub fn hip_shoulder_ear(skeleton: &Skeleton, side: Side, facing: Option<Facing>) -> Option<f64> {
    let hip = skeleton.get(side.hip());
    let shoulder = skeleton.get(side.shoulder());
    let ear = skeleton.get(side.ear());
    match facing {
        Some(Facing::Right) => sweep_angle_between_three_points(ear, shoulder, hip),
        Some(Facing::Left) => sweep_angle_between_three_points(hip, shoulder, ear),
        None => angle_between_three_points(hip, shoulder, ear),
    }
}

/// Head pitch proxy (eye-ear-shoulder, vertex at ear).
pub fn ear_eye_shoulder(skeleton: &Skeleton, side: Side) -> Option<f64> {
    angle_between_three_points(
        skeleton.get(side.eye()),
        skeleton.get(side.ear()),
        skeleton.get(side.shoulder()),
    )
}

/// Angle between the eye line and the shoulder line (head tilt/twist proxy).
pub fn eye_shoulder_tilt(skeleton: &Skeleton) -> Option<f64> {
    let eyes = vector_between(&skeleton.get(JointId::REye)?, &skeleton.get(JointId::LEye)?);
    let shoulders = vector_between(
        &skeleton.get(JointId::RShoulder)?,
        &skeleton.get(JointId::LShoulder)?,
    );
    angle_between_vectors(&eyes, &shoulders)
}

/// Nose-to-neck line deviation from the image vertical.
pub fn nose_neck_vertical(skeleton: &Skeleton) -> Option<f64> {
    let nose = skeleton.get(JointId::Nose)?;
    let neck = skeleton.get(JointId::Neck)?;
    angle_from_vertical_axis(&vector_between(&nose, &neck))
}

pub fn shoulders_distance(skeleton: &Skeleton) -> Option<f64> {
    Some(distance(
        &skeleton.get(JointId::RShoulder)?,
        &skeleton.get(JointId::LShoulder)?,
    ))
}

pub fn wrists_distance(skeleton: &Skeleton) -> Option<f64> {
    Some(distance(
        &skeleton.get(JointId::RWrist)?,
        &skeleton.get(JointId::LWrist)?,
    ))
}
