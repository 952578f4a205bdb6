//! Mathematical utilities: angles and distances over 2D keypoints.

pub mod geometry;

pub use geometry::*;
