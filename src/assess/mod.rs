//! Assessment orchestration.
//!
//! Responsibilities:
//!
//! - run the five rules in a fixed order for one frame
//! - combine scores into the correct/incorrect verdict
//! - derive draw intents with a per-assessment highlight set

pub mod highlight;
pub mod orchestrator;

pub use highlight::*;
pub use orchestrator::*;
