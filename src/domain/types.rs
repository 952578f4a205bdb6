//! Shared domain types.
//!
//! These types are plain data and serializable so they can be:
//!
//! - produced by the rule evaluators and combined by the orchestrator
//! - exported to JSON/CSV
//! - handed to an external renderer (draw intents)

use std::fmt;
use std::path::PathBuf;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::domain::joints::{JointId, JointPair, Skeleton};
use crate::error::AppError;

/// Camera angle class. Decides which rules are meaningful.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ViewPoint {
    Front,
    Side,
}

impl ViewPoint {
    pub fn display_name(self) -> &'static str {
        match self {
            ViewPoint::Front => "front",
            ViewPoint::Side => "side",
        }
    }
}

impl fmt::Display for ViewPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// ROSA component, in evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Component {
    Chair,
    Armrest,
    Backrest,
    Monitor,
    Phone,
}

impl Component {
    pub const ALL: [Component; 5] = [
        Component::Chair,
        Component::Armrest,
        Component::Backrest,
        Component::Monitor,
        Component::Phone,
    ];

    pub fn display_name(self) -> &'static str {
        match self {
            Component::Chair => "chair",
            Component::Armrest => "armrest",
            Component::Backrest => "backrest",
            Component::Monitor => "monitor",
            Component::Phone => "phone",
        }
    }
}

/// Baseline component score (no risk added).
pub const BASELINE_SCORE: u32 = 1;

/// One rule's explanation plus the edges it highlights.
///
/// `edges` is empty when the finding has nothing to draw.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Finding {
    pub message: String,
    pub edges: Vec<JointPair>,
    pub is_correct: bool,
}

impl Finding {
    pub fn correct(message: impl Into<String>, edges: Vec<JointPair>) -> Self {
        Self {
            message: message.into(),
            edges,
            is_correct: true,
        }
    }

    pub fn incorrect(message: impl Into<String>, edges: Vec<JointPair>) -> Self {
        Self {
            message: message.into(),
            edges,
            is_correct: false,
        }
    }
}

/// Request to an external renderer to draw one edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrawIntent {
    pub a: JointId,
    pub b: JointId,
    pub is_correct: bool,
}

/// A computed quantity, kept for diagnostics. Never affects scoring.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Measurement {
    pub component: Component,
    pub name: String,
    pub value: f64,
}

/// Per-component scores for one assessment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentScores {
    pub chair: u32,
    pub armrest: u32,
    pub backrest: u32,
    pub monitor: u32,
    pub phone: u32,
}

impl ComponentScores {
    pub fn baseline() -> Self {
        Self {
            chair: BASELINE_SCORE,
            armrest: BASELINE_SCORE,
            backrest: BASELINE_SCORE,
            monitor: BASELINE_SCORE,
            phone: BASELINE_SCORE,
        }
    }

    pub fn get(&self, component: Component) -> u32 {
        match component {
            Component::Chair => self.chair,
            Component::Armrest => self.armrest,
            Component::Backrest => self.backrest,
            Component::Monitor => self.monitor,
            Component::Phone => self.phone,
        }
    }

    pub fn set(&mut self, component: Component, score: u32) {
        match component {
            Component::Chair => self.chair = score,
            Component::Armrest => self.armrest = score,
            Component::Backrest => self.backrest = score,
            Component::Monitor => self.monitor = score,
            Component::Phone => self.phone = score,
        }
    }

    /// Correct iff no component rose above baseline.
    pub fn all_baseline(&self) -> bool {
        Component::ALL.iter().all(|&c| self.get(c) <= BASELINE_SCORE)
    }
}

/// Result of assessing one frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assessment {
    pub view: ViewPoint,
    pub scores: ComponentScores,
    pub is_correct: bool,
    pub findings: Vec<Finding>,
}

impl Assessment {
    /// Rationale trail, one finding per line.
    pub fn description(&self) -> String {
        let mut out = String::new();
        for finding in &self.findings {
            out.push_str(&finding.message);
            out.push('\n');
        }
        out
    }
}

/// Threshold constants for every rule.
///
/// Defaults are the standard ROSA cut-offs. A thresholds file may override any
/// subset of fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Thresholds {
    /// Knee angle below this means the chair is too low.
    pub chair_low_max: f64,
    /// Knee angle above this means the chair is too high.
    pub chair_high_min: f64,
    /// Shoulder-neck-shoulder angle below this means shrugged shoulders.
    pub shoulder_shrug_min: f64,
    /// Upper arm deviation from vertical above this is out of line.
    pub elbow_vertical_max: f64,
    /// Neck-shoulder-elbow angle above this means the elbow is too wide.
    pub elbow_wide_max: f64,
    /// Trunk-thigh angle below this means leaning forward.
    pub back_forward_min: f64,
    /// Trunk-thigh angle above this means reclining backward.
    pub back_backward_max: f64,
    /// Hip-shoulder-ear sweep below this means neck flexion.
    pub neck_forward_min: f64,
    /// Hip-shoulder-ear sweep above this means neck extension.
    pub neck_backward_max: f64,
    pub neck_forward_penalty: u32,
    pub neck_backward_penalty: u32,
    /// Left/right neck-shoulder-elbow difference above this is asymmetric.
    pub arm_asymmetry_max: f64,
    /// Allowed wrist spread deviation as a fraction of shoulder width.
    pub wrist_spread_ratio: f64,
    /// Nose-to-neck deviation from vertical above this means the head is bent.
    pub head_tilt_max: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            chair_low_max: 80.0,
            chair_high_min: 100.0,
            shoulder_shrug_min: 160.0,
            elbow_vertical_max: 20.0,
            elbow_wide_max: 120.0,
            back_forward_min: 95.0,
            back_backward_max: 110.0,
            neck_forward_min: 140.0,
            neck_backward_max: 200.0,
            neck_forward_penalty: 1,
            neck_backward_penalty: 3,
            arm_asymmetry_max: 30.0,
            wrist_spread_ratio: 1.0 / 3.0,
            head_tilt_max: 30.0,
        }
    }
}

impl Thresholds {
    /// Reject non-finite values and inverted bands.
    pub fn validate(&self) -> Result<(), AppError> {
        let named = [
            ("chair_low_max", self.chair_low_max),
            ("chair_high_min", self.chair_high_min),
            ("shoulder_shrug_min", self.shoulder_shrug_min),
            ("elbow_vertical_max", self.elbow_vertical_max),
            ("elbow_wide_max", self.elbow_wide_max),
            ("back_forward_min", self.back_forward_min),
            ("back_backward_max", self.back_backward_max),
            ("neck_forward_min", self.neck_forward_min),
            ("neck_backward_max", self.neck_backward_max),
            ("arm_asymmetry_max", self.arm_asymmetry_max),
            ("wrist_spread_ratio", self.wrist_spread_ratio),
            ("head_tilt_max", self.head_tilt_max),
        ];
        for (name, value) in named {
            if !value.is_finite() || value < 0.0 {
                return Err(AppError::new(
                    2,
                    format!("Invalid threshold {name}={value} (must be finite and >= 0)."),
                ));
            }
        }

        let bands = [
            ("chair_low_max", self.chair_low_max, "chair_high_min", self.chair_high_min),
            ("back_forward_min", self.back_forward_min, "back_backward_max", self.back_backward_max),
            ("neck_forward_min", self.neck_forward_min, "neck_backward_max", self.neck_backward_max),
        ];
        for (low_name, low, high_name, high) in bands {
            if low > high {
                return Err(AppError::new(
                    2,
                    format!("Invalid threshold band: {low_name}={low} exceeds {high_name}={high}."),
                ));
            }
        }
        Ok(())
    }
}

/// One image's keypoints as delivered by the pose detector.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub name: String,
    pub view: ViewPoint,
    pub skeleton: Skeleton,
}

/// A full run's configuration as understood by the pipeline.
///
/// This is derived from CLI flags (plus environment and defaults).
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub input: PathBuf,
    /// Viewpoint for frames that do not declare one.
    pub default_view: ViewPoint,
    pub thresholds: Thresholds,

    /// Print only the batch summary.
    pub summary_only: bool,

    pub export_csv: Option<PathBuf>,
    pub export_json: Option<PathBuf>,
    pub log_path: Option<PathBuf>,
    pub debug: bool,
}
