//! Monitor: neck flexion and extension from the side.
//!
//! Extension is weighted more heavily than flexion. The subject's facing
//! direction is taken once per frame so near and far sides agree. The
//! ear-eye-shoulder and eye/shoulder tilt angles are measured and recorded
//! but not scored yet.

use crate::domain::{Component, Finding, Skeleton, Thresholds};
use crate::rules::measures::{self, Side, chain};
use crate::rules::{Rule, RuleOutcome};

pub struct MonitorRule;

impl Rule for MonitorRule {
    fn component(&self) -> Component {
        Component::Monitor
    }

    fn evaluate_side(&self, skeleton: &Skeleton, thresholds: &Thresholds) -> RuleOutcome {
        let mut outcome = RuleOutcome::baseline();
        let component = self.component();
        let facing = measures::facing(skeleton);

        for side in Side::BOTH {
            let name = format!("{} hip_shoulder_ear", side.label());
            let Some(angle) = outcome.record(component, name, measures::hip_shoulder_ear(skeleton, side, facing))
            else {
                continue;
            };
            let edges = chain(side.hip(), side.shoulder(), side.ear());
            let label = side.label();

            if angle < thresholds.neck_forward_min {
                outcome.score += thresholds.neck_forward_penalty;
                outcome.findings.push(Finding::incorrect(
                    format!("Neck is bent forward from {label} side view - {label} hip_shoulder_ear angle: {angle}"),
                    edges,
                ));
            } else if angle > thresholds.neck_backward_max {
                outcome.score += thresholds.neck_backward_penalty;
                outcome.findings.push(Finding::incorrect(
                    format!("Neck is bent backward from {label} side view - {label} hip_shoulder_ear angle: {angle}"),
                    edges,
                ));
            } else {
                outcome.findings.push(Finding::correct(
                    format!("Neck is normal from {label} side view - {label} hip_shoulder_ear angle: {angle}"),
                    edges,
                ));
            }
        }

        for side in Side::BOTH {
            let name = format!("{} ear_eye_shoulder", side.label());
            outcome.record(component, name, measures::ear_eye_shoulder(skeleton, side));
        }

        outcome
    }

    fn evaluate_front(&self, skeleton: &Skeleton, _thresholds: &Thresholds) -> RuleOutcome {
        let mut outcome = RuleOutcome::baseline();
        outcome.record(self.component(), "eye_shoulder_tilt", measures::eye_shoulder_tilt(skeleton));
        outcome
    }
}
