//! Chair height: knee angle from the side.

use crate::domain::{Component, Finding, Skeleton, Thresholds};
use crate::rules::measures::{self, Side, chain};
use crate::rules::{RAISED_SCORE, Rule, RuleOutcome};

pub struct ChairRule;

impl Rule for ChairRule {
    fn component(&self) -> Component {
        Component::Chair
    }

    fn evaluate_side(&self, skeleton: &Skeleton, thresholds: &Thresholds) -> RuleOutcome {
        let mut outcome = RuleOutcome::baseline();

        for side in Side::BOTH {
            let name = format!("{} hip_knee_ankle", side.label());
            let Some(angle) = outcome.record(self.component(), name, measures::hip_knee_ankle(skeleton, side)) else {
                continue;
            };
            let edges = chain(side.hip(), side.knee(), side.ankle());
            let label = side.label();

            if angle < thresholds.chair_low_max {
                outcome.score = RAISED_SCORE;
                outcome.findings.push(Finding::incorrect(
                    format!("Chair is too low - {label} hip_knee_ankle angle: {angle}"),
                    edges,
                ));
            } else if angle > thresholds.chair_high_min {
                outcome.score = RAISED_SCORE;
                outcome.findings.push(Finding::incorrect(
                    format!("Chair is too high - {label} hip_knee_ankle angle: {angle}"),
                    edges,
                ));
            } else {
                outcome.findings.push(Finding::correct(
                    format!(
                        "{} knee status is in correct posture - {label} hip_knee_ankle angle: {angle}",
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
    use crate::domain::{JointId, ViewPoint};

    /// Knee at the origin, ankle straight down, hip rotated `angle` degrees from the ankle ray.
    fn leg(skeleton: Skeleton, side: Side, angle: f64) -> Skeleton {
        let rad = angle.to_radians();
        skeleton
            .with(side.knee(), 0.0, 0.0)
            .with(side.ankle(), 0.0, 100.0)
            .with(side.hip(), 100.0 * rad.sin(), 100.0 * rad.cos())
    }

    #[test]
    fn right_angle_knees_are_correct() {
        let skeleton = leg(leg(Skeleton::empty(), Side::Right, 90.0), Side::Left, 90.0);
        let outcome = ChairRule.evaluate(&skeleton, ViewPoint::Side, &Thresholds::default());
        assert_eq!(outcome.score, 1);
        assert_eq!(outcome.findings.len(), 2);
        assert!(outcome.findings.iter().all(|f| f.is_correct));
    }

    #[test]
    fn acute_knee_means_chair_too_low() {
        let skeleton = leg(Skeleton::empty(), Side::Right, 70.0);
        let outcome = ChairRule.evaluate(&skeleton, ViewPoint::Side, &Thresholds::default());
        assert_eq!(outcome.score, 2);
        assert_eq!(outcome.findings.len(), 1);
        assert!(!outcome.findings[0].is_correct);
        assert!(outcome.findings[0].message.starts_with("Chair is too low - right"));
    }

    #[test]
    fn both_sides_report_but_score_stays_two() {
        let skeleton = leg(leg(Skeleton::empty(), Side::Right, 70.0), Side::Left, 120.0);
        let outcome = ChairRule.evaluate(&skeleton, ViewPoint::Side, &Thresholds::default());
        assert_eq!(outcome.score, 2);
        assert_eq!(outcome.findings.len(), 2);
        assert!(outcome.findings[1].message.starts_with("Chair is too high - left"));
    }

    #[test]
    fn band_edges_are_correct() {
        for angle in [80.0, 100.0] {
            let skeleton = leg(Skeleton::empty(), Side::Right, angle);
            let outcome = ChairRule.evaluate(&skeleton, ViewPoint::Side, &Thresholds::default());
            assert_eq!(outcome.score, 1, "{angle}");
            assert!(outcome.findings[0].is_correct, "{angle}");
            assert!(outcome.findings[0].message.starts_with("Right knee status is in correct posture"));
        }
    }

    #[test]
    fn missing_ankle_skips_side() {
        let mut skeleton = leg(Skeleton::empty(), Side::Right, 70.0);
        skeleton.set(JointId::RAnkle, None);
        let outcome = ChairRule.evaluate(&skeleton, ViewPoint::Side, &Thresholds::default());
        assert_eq!(outcome, RuleOutcome::baseline());
    }

    #[test]
    fn front_view_is_noop() {
        let skeleton = leg(Skeleton::empty(), Side::Right, 70.0);
        let outcome = ChairRule.evaluate(&skeleton, ViewPoint::Front, &Thresholds::default());
        assert_eq!(outcome, RuleOutcome::baseline());
    }
}
