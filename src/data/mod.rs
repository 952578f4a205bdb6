//! Data sources.
//!
//! - seeded synthetic frames for demos and smoke runs (`sample`)

pub mod sample;

pub use sample::*;
