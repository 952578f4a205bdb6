//! Phone: wrist spread and arm asymmetry from the front.
//!
//! The head tilt check (nose-to-neck line against vertical) is reported for
//! the renderer only and never changes the phone score.

use crate::domain::{Component, Finding, JointId, JointPair, Skeleton, Thresholds};
use crate::rules::measures::{self, Side};
use crate::rules::{RAISED_SCORE, Rule, RuleOutcome};

pub struct PhoneRule;

impl Rule for PhoneRule {
    fn component(&self) -> Component {
        Component::Phone
    }

    fn evaluate_front(&self, skeleton: &Skeleton, thresholds: &Thresholds) -> RuleOutcome {
        let mut outcome = RuleOutcome::baseline();
        let component = self.component();

        let shoulders = outcome.record(component, "shoulders_distance", measures::shoulders_distance(skeleton));
        let wrists = outcome.record(component, "wrists_distance", measures::wrists_distance(skeleton));
        let right = outcome.record(
            component,
            "right neck_shoulder_elbow",
            measures::neck_shoulder_elbow(skeleton, Side::Right),
        );
        let left = outcome.record(
            component,
            "left neck_shoulder_elbow",
            measures::neck_shoulder_elbow(skeleton, Side::Left),
        );

        if let (Some(shoulders), Some(wrists), Some(right), Some(left)) = (shoulders, wrists, right, left) {
            let spread = (wrists - shoulders).abs() > shoulders * thresholds.wrist_spread_ratio;
            let asymmetric = (right - left).abs() > thresholds.arm_asymmetry_max;
            if spread && asymmetric {
                outcome.score = RAISED_SCORE;
                outcome.findings.push(Finding::incorrect("Too wide wrists", Vec::new()));
            }
        }

        if let Some(angle) = outcome.record(component, "nose_neck_vertical", measures::nose_neck_vertical(skeleton)) {
            let edges = vec![JointPair::new(JointId::Neck, JointId::Nose)];
            if angle > thresholds.head_tilt_max {
                outcome.findings.push(Finding::incorrect(
                    format!("Neck is bent - angle between neck_nose and vertical axis: {angle}"),
                    edges,
                ));
            } else {
                outcome.findings.push(Finding::correct(
                    format!("Neck is normal - angle between neck_nose and vertical axis: {angle}"),
                    edges,
                ));
            }
        }

        outcome
    }
}
