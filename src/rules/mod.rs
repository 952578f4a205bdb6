//! ROSA rule evaluators.
//!
//! Each rule scores one component. A rule implements only the viewpoints it
//! supports; the default methods return the baseline outcome, so dispatching
//! a rule on an unsupported viewpoint is a no-op rather than an error.

use crate::domain::{BASELINE_SCORE, Component, Finding, Measurement, Skeleton, Thresholds, ViewPoint};

pub mod armrest;
pub mod backrest;
pub mod chair;
pub mod measures;
pub mod monitor;
pub mod phone;

pub use armrest::ArmrestRule;
pub use backrest::BackrestRule;
pub use chair::ChairRule;
pub use monitor::MonitorRule;
pub use phone::PhoneRule;

/// Score assigned by band rules (chair, backrest, phone) when violated.
pub const RAISED_SCORE: u32 = 2;

/// Rules in evaluation order.
pub static RULES: [&dyn Rule; 5] = [&ChairRule, &ArmrestRule, &BackrestRule, &MonitorRule, &PhoneRule];

/// Output of one rule for one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct RuleOutcome {
    pub score: u32,
    pub findings: Vec<Finding>,
    pub measurements: Vec<Measurement>,
}

impl RuleOutcome {
    /// Baseline score, no findings.
    pub fn baseline() -> Self {
        Self {
            score: BASELINE_SCORE,
            findings: Vec::new(),
            measurements: Vec::new(),
        }
    }

    /// Keep a computed value for diagnostics and pass it through.
    pub fn record(&mut self, component: Component, name: impl Into<String>, value: Option<f64>) -> Option<f64> {
        if let Some(value) = value {
            self.measurements.push(Measurement {
                component,
                name: name.into(),
                value,
            });
        }
        value
    }
}

pub trait Rule: Send + Sync {
    fn component(&self) -> Component;

    fn evaluate_side(&self, _skeleton: &Skeleton, _thresholds: &Thresholds) -> RuleOutcome {
        RuleOutcome::baseline()
    }

    fn evaluate_front(&self, _skeleton: &Skeleton, _thresholds: &Thresholds) -> RuleOutcome {
        RuleOutcome::baseline()
    }

    /// Dispatch to the sub-rule for `view`.
    fn evaluate(&self, skeleton: &Skeleton, view: ViewPoint, thresholds: &Thresholds) -> RuleOutcome {
        match view {
            ViewPoint::Side => self.evaluate_side(skeleton, thresholds),
            ViewPoint::Front => self.evaluate_front(skeleton, thresholds),
        }
    }
}
