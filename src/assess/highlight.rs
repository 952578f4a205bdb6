//! Draw-intent bookkeeping for one assessment.
//!
//! Overlapping rules can highlight the same edge (e.g. neck-shoulder appears
//! in both the shrug and elbow-width checks). Once an edge has been flagged
//! incorrect it stays incorrect for the rest of the assessment, even if a
//! later rule considers it fine.

use std::collections::HashSet;

use crate::domain::{DrawIntent, Finding, JointPair, Skeleton};

/// Edges already flagged incorrect, scoped to a single assessment.
#[derive(Debug, Default)]
pub struct HighlightSet {
    incorrect: HashSet<JointPair>,
}

impl HighlightSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve the colour of `edge` given the finding's flag, updating the set.
    pub fn resolve(&mut self, edge: JointPair, is_correct: bool) -> bool {
        if is_correct && !self.is_flagged(&edge) {
            true
        } else {
            self.incorrect.insert(edge);
            false
        }
    }

    fn is_flagged(&self, edge: &JointPair) -> bool {
        self.incorrect.contains(edge)
    }
}

/// Turn findings into draw intents, in emission order.
///
/// Edges with an undetected endpoint are not drawn.
pub fn draw_intents(skeleton: &Skeleton, findings: &[Finding]) -> Vec<DrawIntent> {
    let mut highlights = HighlightSet::new();
    let mut out = Vec::new();
    for finding in findings {
        for &edge in &finding.edges {
            if !(skeleton.is_present(edge.a) && skeleton.is_present(edge.b)) {
                continue;
            }
            let is_correct = highlights.resolve(edge, finding.is_correct);
            out.push(DrawIntent {
                a: edge.a,
                b: edge.b,
                is_correct,
            });
        }
    }
    out
}
