//! Runs every rule for one frame and combines the outcomes.
//!
//! The verdict is a logical OR over violations: a single component above
//! baseline marks the whole posture incorrect. No rule sees another's score.

use serde::{Deserialize, Serialize};

use crate::assess::highlight::draw_intents;
use crate::domain::{
    Assessment, ComponentScores, DrawIntent, Frame, Measurement, Skeleton, Thresholds, ViewPoint,
};
use crate::rules::RULES;

/// Assessment plus the side channels consumed by renderers and diagnostics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Evaluation {
    pub assessment: Assessment,
    pub draw_intents: Vec<DrawIntent>,
    pub measurements: Vec<Measurement>,
}

/// Assess one skeleton seen from `view`.
pub fn assess(skeleton: &Skeleton, view: ViewPoint, thresholds: &Thresholds) -> Evaluation {
    let mut scores = ComponentScores::baseline();
    let mut findings = Vec::new();
    let mut measurements = Vec::new();

    for rule in RULES {
        let outcome = rule.evaluate(skeleton, view, thresholds);
        scores.set(rule.component(), outcome.score);
        findings.extend(outcome.findings);
        measurements.extend(outcome.measurements);
    }

    let draw_intents = draw_intents(skeleton, &findings);
    let assessment = Assessment {
        view,
        scores,
        is_correct: scores.all_baseline(),
        findings,
    };

    Evaluation {
        assessment,
        draw_intents,
        measurements,
    }
}

/// Evaluation of one named frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameReport {
    pub name: String,
    #[serde(flatten)]
    pub evaluation: Evaluation,
}

/// Assess a frame using its own viewpoint.
pub fn assess_frame(frame: &Frame, thresholds: &Thresholds) -> FrameReport {
    FrameReport {
        name: frame.name.clone(),
        evaluation: assess(&frame.skeleton, frame.view, thresholds),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Component, JointId};

    /// Seated side profile facing +x with a 90 degree knee, 100 degree hip and upright neck.
    fn good_side_profile() -> Skeleton {
        Skeleton::empty()
            .with(JointId::REar, 200.0, 60.0)
            .with(JointId::RShoulder, 200.0, 120.0)
            .with(JointId::RHip, 234.73, 316.96)
            .with(JointId::RKnee, 334.73, 316.96)
            .with(JointId::RAnkle, 334.73, 416.96)
    }

    #[test]
    fn empty_skeleton_is_correct_with_no_findings() {
        for view in [ViewPoint::Front, ViewPoint::Side] {
            let evaluation = assess(&Skeleton::empty(), view, &Thresholds::default());
            assert_eq!(evaluation.assessment.scores, ComponentScores::baseline());
            assert!(evaluation.assessment.is_correct);
            assert!(evaluation.assessment.findings.is_empty());
            assert!(evaluation.draw_intents.is_empty());
        }
    }

    #[test]
    fn good_profile_is_correct() {
        let evaluation = assess(&good_side_profile(), ViewPoint::Side, &Thresholds::default());
        assert_eq!(evaluation.assessment.scores, ComponentScores::baseline());
        assert!(evaluation.assessment.is_correct);
        // Chair, backrest and monitor each report the right side.
        assert_eq!(evaluation.assessment.findings.len(), 3);
        assert!(evaluation.draw_intents.iter().all(|d| d.is_correct));
    }

    #[test]
    fn single_raised_component_fails_verdict() {
        // Pull the ankle back under the seat: acute knee, chair too low.
        let skeleton = good_side_profile().with(JointId::RAnkle, 260.0, 400.0);
        let evaluation = assess(&skeleton, ViewPoint::Side, &Thresholds::default());
        let scores = evaluation.assessment.scores;
        assert_eq!(scores.chair, 2);
        for component in [Component::Armrest, Component::Backrest, Component::Monitor, Component::Phone] {
            assert_eq!(scores.get(component), 1, "{component:?}");
        }
        assert!(!evaluation.assessment.is_correct);
    }

    #[test]
    fn findings_keep_rule_order() {
        let evaluation = assess(&good_side_profile(), ViewPoint::Side, &Thresholds::default());
        let messages: Vec<&str> = evaluation
            .assessment
            .findings
            .iter()
            .map(|f| f.message.as_str())
            .collect();
        assert!(messages[0].starts_with("Right knee"));
        assert!(messages[1].starts_with("Back rest"));
        assert!(messages[2].starts_with("Neck is normal"));
    }

    #[test]
    fn side_rules_ignore_front_view() {
        let skeleton = good_side_profile().with(JointId::RAnkle, 260.0, 400.0);
        let evaluation = assess(&skeleton, ViewPoint::Front, &Thresholds::default());
        assert_eq!(evaluation.assessment.scores.chair, 1);
        assert_eq!(evaluation.assessment.scores.backrest, 1);
    }

    #[test]
    fn repeated_assessment_is_identical() {
        let skeleton = good_side_profile().with(JointId::RAnkle, 260.0, 400.0);
        let first = assess(&skeleton, ViewPoint::Side, &Thresholds::default());
        let second = assess(&skeleton, ViewPoint::Side, &Thresholds::default());
        assert_eq!(first, second);
        assert_eq!(first.assessment.description(), second.assessment.description());
    }

    #[test]
    fn shared_edge_flagged_once_stays_flagged() {
        // Shrugged shoulders with both elbows hanging: the neck-shoulder edges are
        // flagged by the shrug check, then reported fine by the elbow-width check.
        let skeleton = Skeleton::empty()
            .with(JointId::Neck, 150.0, 100.0)
            .with(JointId::RShoulder, 100.0, 80.0)
            .with(JointId::LShoulder, 200.0, 80.0)
            .with(JointId::RElbow, 100.0, 180.0)
            .with(JointId::LElbow, 200.0, 180.0);
        let evaluation = assess(&skeleton, ViewPoint::Front, &Thresholds::default());
        assert_eq!(evaluation.assessment.scores.armrest, 1);
        assert_eq!(evaluation.assessment.scores.backrest, 2);
        let neck_edges: Vec<&DrawIntent> = evaluation
            .draw_intents
            .iter()
            .filter(|d| d.a == JointId::Neck || d.b == JointId::Neck)
            .collect();
        assert!(!neck_edges.is_empty());
        assert!(neck_edges.iter().all(|d| !d.is_correct));
    }
}
