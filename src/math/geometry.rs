//! Plane geometry over detected keypoints.
//!
//! Every angle function returns `Option<f64>` (degrees). `None` means the
//! angle is undefined: a zero-length vector, a missing point, or a numerical
//! failure in the inverse cosine. Missing joints are routine (occlusion,
//! out-of-frame limbs) so callers skip the dependent check instead of failing.
//!
//! Numerical notes:
//! - The cosine is rounded to 5 decimals and clamped to `[-1, 1]` before
//!   `acos`, so near-collinear vectors never produce NaN.
//! - Three-point and vertical-axis angles are rounded to 2 decimals, which is
//!   the precision the posture thresholds are written against.

use nalgebra::{Point2, Vector2};

/// Decimal places kept on the cosine before inversion.
const COSINE_DECIMALS: i32 = 5;

/// Decimal places kept on angles that feed threshold comparisons.
const ANGLE_DECIMALS: i32 = 2;

/// Vector from `from` to `to`.
pub fn vector_between(from: &Point2<f64>, to: &Point2<f64>) -> Vector2<f64> {
    to - from
}

/// Unsigned angle between two vectors, in `[0, 180]`.
pub fn angle_between_vectors(v1: &Vector2<f64>, v2: &Vector2<f64>) -> Option<f64> {
    let len1 = v1.norm();
    let len2 = v2.norm();
    if len1 == 0.0 || len2 == 0.0 || !len1.is_finite() || !len2.is_finite() {
        return None;
    }

    let cosine = round_to(v1.dot(v2) / (len1 * len2), COSINE_DECIMALS).clamp(-1.0, 1.0);
    let angle = cosine.acos().to_degrees();
    if angle.is_nan() {
        return None;
    }
    Some(angle)
}

/// Angle at vertex `b` formed by `a` and `c`, rounded to 2 decimals.
pub fn angle_between_three_points(
    a: Option<Point2<f64>>,
    b: Option<Point2<f64>>,
    c: Option<Point2<f64>>,
) -> Option<f64> {
    let (a, b, c) = (a?, b?, c?);
    angle_between_vectors(&vector_between(&b, &a), &vector_between(&b, &c))
        .map(|angle| round_to(angle, ANGLE_DECIMALS))
}

/// Angle between `v` and the image vertical axis `(0, 1)`, rounded to 2 decimals.
///
/// Image coordinates grow downward, so a vector pointing down the frame
/// measures 0°.
pub fn angle_from_vertical_axis(v: &Vector2<f64>) -> Option<f64> {
    angle_between_vectors(v, &Vector2::new(0.0, 1.0)).map(|angle| round_to(angle, ANGLE_DECIMALS))
}

/// Angle between `v` and the horizontal axis `(1, 0)`.
pub fn angle_from_horizontal_axis(v: &Vector2<f64>) -> Option<f64> {
    angle_between_vectors(v, &Vector2::new(1.0, 0.0))
}

/// Oriented angle swept from `from` to `to`, in `[0, 360)`.
///
/// Equals the unsigned angle when `to` lies on the positive side of `from`
/// (non-negative perp product) and `360 - angle` otherwise. This lets a
/// joint bend past straight (reflex angles) be told apart from an ordinary
/// flexion of the same magnitude.
pub fn sweep_angle(from: &Vector2<f64>, to: &Vector2<f64>) -> Option<f64> {
    let angle = angle_between_vectors(from, to)?;
    if from.perp(to) >= 0.0 || angle == 0.0 {
        Some(angle)
    } else {
        Some(360.0 - angle)
    }
}

/// Oriented angle at vertex `b`, swept from ray `b→a` to ray `b→c`, rounded to 2 decimals.
pub fn sweep_angle_between_three_points(
    a: Option<Point2<f64>>,
    b: Option<Point2<f64>>,
    c: Option<Point2<f64>>,
) -> Option<f64> {
    let (a, b, c) = (a?, b?, c?);
    sweep_angle(&vector_between(&b, &a), &vector_between(&b, &c))
        .map(|angle| round_to(angle, ANGLE_DECIMALS))
}

/// Euclidean distance between two present points.
pub fn distance(p1: &Point2<f64>, p2: &Point2<f64>) -> f64 {
    nalgebra::distance(p1, p2)
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    (value * scale).round() / scale
}
