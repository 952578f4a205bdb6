//! Synthetic frame generation around upright seated templates.
//!
//! Each frame is a template skeleton with Gaussian pixel jitter applied to
//! every joint and an independent chance of the joint going undetected.

use nalgebra::Point2;
use rand::prelude::*;
use rand::rngs::StdRng;
use rand_distr::Normal;

use crate::domain::{Frame, JointId, Skeleton, ViewPoint};
use crate::error::AppError;

/// Parameters for [`generate_frames`].
#[derive(Debug, Clone, Copy)]
pub struct SampleSpec {
    pub view: ViewPoint,
    pub count: usize,
    pub seed: u64,
    /// Jitter standard deviation, in pixels.
    pub noise: f64,
    /// Probability that a joint is dropped.
    pub drop_prob: f64,
}

/// Upright front-facing operator at a 640x480 desk shot.
///
/// Subject's right is image left.
fn front_template() -> Skeleton {
    Skeleton::empty()
        .with(JointId::Nose, 320.0, 100.0)
        .with(JointId::Neck, 320.0, 160.0)
        .with(JointId::RShoulder, 260.0, 165.0)
        .with(JointId::RElbow, 255.0, 260.0)
        .with(JointId::RWrist, 300.0, 300.0)
        .with(JointId::LShoulder, 380.0, 165.0)
        .with(JointId::LElbow, 385.0, 260.0)
        .with(JointId::LWrist, 340.0, 300.0)
        .with(JointId::RHip, 285.0, 330.0)
        .with(JointId::RKnee, 280.0, 430.0)
        .with(JointId::RAnkle, 280.0, 470.0)
        .with(JointId::LHip, 355.0, 330.0)
        .with(JointId::LKnee, 360.0, 430.0)
        .with(JointId::LAnkle, 360.0, 470.0)
        .with(JointId::REye, 305.0, 90.0)
        .with(JointId::LEye, 335.0, 90.0)
        .with(JointId::REar, 290.0, 95.0)
        .with(JointId::LEar, 350.0, 95.0)
}

/// Right-side profile facing +x; the left side is occluded.
///
/// Knee at 90 degrees, trunk-thigh at 100 degrees, neck sweep at 170 degrees.
fn side_template() -> Skeleton {
    Skeleton::empty()
        .with(JointId::Nose, 232.0, 58.0)
        .with(JointId::Neck, 200.0, 115.0)
        .with(JointId::RShoulder, 200.0, 120.0)
        .with(JointId::RElbow, 212.0, 215.0)
        .with(JointId::RWrist, 300.0, 225.0)
        .with(JointId::RHip, 234.73, 316.96)
        .with(JointId::RKnee, 334.73, 316.96)
        .with(JointId::RAnkle, 334.73, 416.96)
        .with(JointId::REye, 222.0, 52.0)
        .with(JointId::REar, 200.0, 60.0)
}

pub fn template(view: ViewPoint) -> Skeleton {
    match view {
        ViewPoint::Front => front_template(),
        ViewPoint::Side => side_template(),
    }
}

pub fn generate_frames(spec: &SampleSpec) -> Result<Vec<Frame>, AppError> {
    if spec.count == 0 {
        return Err(AppError::new(2, "Sample count must be > 0."));
    }
    if !(spec.noise.is_finite() && spec.noise >= 0.0) {
        return Err(AppError::new(2, "Noise must be finite and >= 0."));
    }
    if !(0.0..=1.0).contains(&spec.drop_prob) {
        return Err(AppError::new(2, "Drop probability must be within [0, 1]."));
    }

    let mut rng = StdRng::seed_from_u64(spec.seed);
    let jitter = Normal::new(0.0, spec.noise)
        .map_err(|e| AppError::new(2, format!("Noise distribution error: {e}")))?;
    let base = template(spec.view);

    let mut frames = Vec::with_capacity(spec.count);
    for i in 0..spec.count {
        let mut skeleton = Skeleton::empty();
        for joint in JointId::ALL {
            let Some(p) = base.get(joint) else {
                continue;
            };
            // Always draw both so the stream does not depend on drop outcomes.
            let dx = jitter.sample(&mut rng);
            let dy = jitter.sample(&mut rng);
            if rng.gen_bool(spec.drop_prob) {
                continue;
            }
            skeleton.set(joint, Some(Point2::new(p.x + dx, p.y + dy)));
        }

        frames.push(Frame {
            name: format!("sample-{}-{:03}", spec.view, i + 1),
            view: spec.view,
            skeleton,
        });
    }

    Ok(frames)
}
