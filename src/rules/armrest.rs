//! Armrest: shoulder and elbow placement from the front.
//!
//! Penalties accumulate: each side can add one point for an upper arm out of
//! line with the shoulder and one for an elbow held too wide. The shrugged
//! shoulders check is reported here but scored by the backrest rule.

use crate::domain::{Component, Finding, JointId, JointPair, Skeleton, Thresholds};
use crate::rules::measures::{self, Side, chain};
use crate::rules::{Rule, RuleOutcome};

pub struct ArmrestRule;

impl Rule for ArmrestRule {
    fn component(&self) -> Component {
        Component::Armrest
    }

    fn evaluate_front(&self, skeleton: &Skeleton, thresholds: &Thresholds) -> RuleOutcome {
        let mut outcome = RuleOutcome::baseline();
        let component = self.component();

        if let Some(angle) = outcome.record(component, "shoulders_neck", measures::shoulders_neck(skeleton)) {
            let edges = vec![
                JointPair::new(JointId::Neck, JointId::RShoulder),
                JointPair::new(JointId::Neck, JointId::LShoulder),
            ];
            if angle < thresholds.shoulder_shrug_min {
                outcome.findings.push(Finding::incorrect(
                    format!("Shoulders are shrugged - shoulders_neck angle: {angle}"),
                    edges,
                ));
            } else {
                outcome.findings.push(Finding::correct(
                    format!("Shoulders are in normal posture - shoulders_neck angle: {angle}"),
                    edges,
                ));
            }
        }

        for side in Side::BOTH {
            let name = format!("{} shoulder_elbow_vertical", side.label());
            let Some(angle) = outcome.record(component, name, measures::shoulder_elbow_vertical(skeleton, side)) else {
                continue;
            };
            if angle > thresholds.elbow_vertical_max {
                outcome.score += 1;
                outcome.findings.push(Finding::incorrect(
                    format!(
                        "{side_title} elbow is not inline with {side} shoulder - \
                         Angle between {side} shoulder_elbow and vertical axis: {angle}",
                        side_title = side.title(),
                        side = side.label(),
                    ),
                    Vec::new(),
                ));
            }
        }

        for side in Side::BOTH {
            let name = format!("{} neck_shoulder_elbow", side.label());
            let Some(angle) = outcome.record(component, name, measures::neck_shoulder_elbow(skeleton, side)) else {
                continue;
            };
            let edges = chain(JointId::Neck, side.shoulder(), side.elbow());
            let label = side.label();
            if angle > thresholds.elbow_wide_max {
                outcome.score += 1;
                outcome.findings.push(Finding::incorrect(
                    format!("Too wide {label} elbow - {label} neck_shoulder_elbow angle: {angle}"),
                    edges,
                ));
            } else {
                outcome.findings.push(Finding::correct(
                    format!(
                        "{} elbow is not too wide - {label} neck_shoulder_elbow angle: {angle}",
                        side.title()
                    ),
                    edges,
                ));
            }
        }

        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ViewPoint;

    fn arm_at(skeleton: Skeleton, side: Side, shoulder: (f64, f64), degrees_from_vertical: f64) -> Skeleton {
        let rad = degrees_from_vertical.to_radians();
        let dx = match side {
            Side::Right => -1.0,
            Side::Left => 1.0,
        };
        skeleton.with(side.shoulder(), shoulder.0, shoulder.1).with(
            side.elbow(),
            shoulder.0 + dx * 100.0 * rad.sin(),
            shoulder.1 + 100.0 * rad.cos(),
        )
    }

    #[test]
    fn right_arm_out_of_line_adds_one() {
        let skeleton = arm_at(Skeleton::empty(), Side::Right, (100.0, 100.0), 25.0);
        let outcome = ArmrestRule.evaluate(&skeleton, ViewPoint::Front, &Thresholds::default());
        assert_eq!(outcome.score, 2);
        assert_eq!(outcome.findings.len(), 1);
        assert!(outcome.findings[0].message.starts_with("Right elbow is not inline"));
        assert!(outcome.findings[0].edges.is_empty());
    }

    #[test]
    fn arm_exactly_at_vertical_limit_is_inline() {
        let skeleton = arm_at(Skeleton::empty(), Side::Right, (100.0, 100.0), 20.0);
        let outcome = ArmrestRule.evaluate(&skeleton, ViewPoint::Front, &Thresholds::default());
        assert_eq!(outcome.score, 1);
        assert!(outcome.findings.is_empty());
    }

    #[test]
    fn elbow_exactly_at_width_limit_is_not_too_wide() {
        // 30 degrees from vertical puts neck-shoulder-elbow at 120; the arm itself is out of line.
        let skeleton = Skeleton::empty().with(JointId::Neck, 150.0, 100.0);
        let skeleton = arm_at(skeleton, Side::Right, (100.0, 100.0), 30.0);
        let outcome = ArmrestRule.evaluate(&skeleton, ViewPoint::Front, &Thresholds::default());
        assert_eq!(outcome.score, 2);
        let width = outcome
            .findings
            .iter()
            .find(|f| f.message.contains("neck_shoulder_elbow angle: 120"))
            .unwrap();
        assert!(width.is_correct);
        assert!(width.message.starts_with("Right elbow is not too wide"));
    }

    #[test]
    fn left_side_unaffected_by_right_violation() {
        let skeleton = arm_at(Skeleton::empty(), Side::Right, (100.0, 100.0), 25.0);
        let skeleton = arm_at(skeleton, Side::Left, (200.0, 100.0), 5.0);
        let outcome = ArmrestRule.evaluate(&skeleton, ViewPoint::Front, &Thresholds::default());
        assert_eq!(outcome.score, 2);
        assert!(outcome.findings.iter().all(|f| !f.message.starts_with("Left")));
    }

    #[test]
    fn shrugged_shoulders_do_not_raise_armrest() {
        let skeleton = Skeleton::empty()
            .with(JointId::Neck, 150.0, 100.0)
            .with(JointId::RShoulder, 100.0, 80.0)
            .with(JointId::LShoulder, 200.0, 80.0);
        let outcome = ArmrestRule.evaluate(&skeleton, ViewPoint::Front, &Thresholds::default());
        assert_eq!(outcome.score, 1);
        assert_eq!(outcome.findings.len(), 1);
        assert!(outcome.findings[0].message.starts_with("Shoulders are shrugged"));
        assert!(!outcome.findings[0].is_correct);
    }

    #[test]
    fn wide_elbows_accumulate() {
        // Elbows raised sideways: 90 degrees from vertical, neck-shoulder-elbow = 180.
        let skeleton = Skeleton::empty().with(JointId::Neck, 150.0, 100.0);
        let skeleton = arm_at(skeleton, Side::Right, (100.0, 100.0), 90.0);
        let skeleton = arm_at(skeleton, Side::Left, (200.0, 100.0), 90.0);
        let outcome = ArmrestRule.evaluate(&skeleton, ViewPoint::Front, &Thresholds::default());
        // 1 + 2 (out of line) + 2 (too wide); shoulders_neck is 180 so no shrug.
        assert_eq!(outcome.score, 5);
        let wide = outcome.findings.iter().filter(|f| f.message.starts_with("Too wide")).count();
        assert_eq!(wide, 2);
    }

    #[test]
    fn side_view_is_noop() {
        let skeleton = arm_at(Skeleton::empty(), Side::Right, (100.0, 100.0), 45.0);
        let outcome = ArmrestRule.evaluate(&skeleton, ViewPoint::Side, &Thresholds::default());
        assert_eq!(outcome, RuleOutcome::baseline());
    }
}
