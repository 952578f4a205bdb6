//! Input/output helpers.
//!
//! - frames JSON ingest + validation (`ingest`)
//! - result exports (CSV, description log) (`export`)
//! - report and thresholds JSON (`assessment`)

pub mod assessment;
pub mod export;
pub mod ingest;

pub use assessment::*;
pub use export::*;
pub use ingest::*;
