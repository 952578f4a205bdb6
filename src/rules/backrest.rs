//! Backrest: trunk recline from the side, shoulder elevation from the front.

use crate::domain::{Component, Finding, Skeleton, Thresholds};
use crate::rules::measures::{self, Side, chain};
use crate::rules::{RAISED_SCORE, Rule, RuleOutcome};

pub struct BackrestRule;

impl Rule for BackrestRule {
    fn component(&self) -> Component {
        Component::Backrest
    }

    fn evaluate_side(&self, skeleton: &Skeleton, thresholds: &Thresholds) -> RuleOutcome {
        let mut outcome = RuleOutcome::baseline();

        for side in Side::BOTH {
            let name = format!("{} shoulder_hip_knee", side.label());
            let Some(angle) = outcome.record(self.component(), name, measures::shoulder_hip_knee(skeleton, side))
            else {
                continue;
            };
            let edges = chain(side.shoulder(), side.hip(), side.knee());
            let label = side.label();

            if angle < thresholds.back_forward_min {
                outcome.score = RAISED_SCORE;
                outcome.findings.push(Finding::incorrect(
                    format!("Back rest is bent forward from {label} side - {label} shoulder_hip_knee angle: {angle}"),
                    edges,
                ));
            } else if angle > thresholds.back_backward_max {
                outcome.score = RAISED_SCORE;
                outcome.findings.push(Finding::incorrect(
                    format!("Back rest is bent backward from {label} side - {label} shoulder_hip_knee angle: {angle}"),
                    edges,
                ));
            } else {
                outcome.findings.push(Finding::correct(
                    format!("Back rest is normal from {label} side - {label} shoulder_hip_knee angle: {angle}"),
                    edges,
                ));
            }
        }

        outcome
    }

    /// Shrugged shoulders add to the backrest score. The finding itself is
    /// emitted by the armrest rule.
    fn evaluate_front(&self, skeleton: &Skeleton, thresholds: &Thresholds) -> RuleOutcome {
        let mut outcome = RuleOutcome::baseline();
        if let Some(angle) = outcome.record(self.component(), "shoulders_neck", measures::shoulders_neck(skeleton)) {
            if angle < thresholds.shoulder_shrug_min {
                outcome.score += 1;
            }
        }
        outcome
    }
}
