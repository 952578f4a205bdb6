//! `rosa-posture` library crate.
//!
//! The binary (`rosa`) is a thin wrapper around this library so that:
//!
//! - the rule engine is testable without spawning processes
//! - assessment is reusable by other front-ends (a camera loop, a renderer)
//! - code stays easy to navigate as the project grows

pub mod app;
pub mod assess;
pub mod cli;
pub mod data;
pub mod debug;
pub mod domain;
pub mod error;
pub mod io;
pub mod logging;
pub mod math;
pub mod report;
pub mod rules;
