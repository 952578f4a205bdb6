//! Reporting utilities: batch totals and formatted terminal output.

use serde::Serialize;

use crate::assess::FrameReport;
use crate::domain::{BASELINE_SCORE, Component};

pub mod format;

pub use format::*;

/// Totals over one batch of frame reports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BatchSummary {
    pub frames: usize,
    pub correct: usize,
    pub incorrect: usize,
    /// Frames whose score for the component rose above baseline, in component order.
    pub violations: Vec<(Component, usize)>,
}

impl BatchSummary {
    pub fn from_reports(reports: &[FrameReport]) -> Self {
        let correct = reports
            .iter()
            .filter(|r| r.evaluation.assessment.is_correct)
            .count();
        let violations = Component::ALL
            .iter()
            .map(|&component| {
                let n = reports
                    .iter()
                    .filter(|r| r.evaluation.assessment.scores.get(component) > BASELINE_SCORE)
                    .count();
                (component, n)
            })
            .collect();

        Self {
            frames: reports.len(),
            correct,
            incorrect: reports.len() - correct,
            violations,
        }
    }

    pub fn violations_for(&self, component: Component) -> usize {
        self.violations
            .iter()
            .find(|(c, _)| *c == component)
            .map(|(_, n)| *n)
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assess::assess_frame;
    use crate::domain::{Frame, JointId, Skeleton, Thresholds, ViewPoint};

    fn report(name: &str, view: ViewPoint, skeleton: Skeleton) -> FrameReport {
        assess_frame(
            &Frame {
                name: name.to_string(),
                view,
                skeleton,
            },
            &Thresholds::default(),
        )
    }

    #[test]
    fn summary_counts_verdicts_and_violations() {
        let low_chair = Skeleton::empty()
            .with(JointId::RHip, 0.0, 0.0)
            .with(JointId::RKnee, 100.0, 0.0)
            .with(JointId::RAnkle, 60.0, 100.0);
        let reports = vec![
            report("a", ViewPoint::Front, Skeleton::empty()),
            report("b", ViewPoint::Side, low_chair.clone()),
            report("c", ViewPoint::Side, low_chair),
        ];
        let summary = BatchSummary::from_reports(&reports);
        assert_eq!(summary.frames, 3);
        assert_eq!(summary.correct, 1);
        assert_eq!(summary.incorrect, 2);
        assert_eq!(summary.violations_for(Component::Chair), 2);
        assert_eq!(summary.violations_for(Component::Monitor), 0);
        assert_eq!(summary.violations.len(), Component::ALL.len());
    }

    #[test]
    fn empty_batch_summary() {
        let summary = BatchSummary::from_reports(&[]);
        assert_eq!(summary.frames, 0);
        assert_eq!(summary.incorrect, 0);
    }
}
