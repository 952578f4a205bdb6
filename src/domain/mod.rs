//! Domain types used throughout the pipeline.
//!
//! This module defines:
//!
//! - the joint model (`JointId`, `JointPair`, `Skeleton`)
//! - rule inputs and outputs (`ViewPoint`, `Finding`, `DrawIntent`, `Measurement`)
//! - assessment results (`ComponentScores`, `Assessment`) and `Thresholds`

pub mod joints;
pub mod types;

pub use joints::*;
pub use types::*;
