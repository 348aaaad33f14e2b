use std::f64::consts::{PI, TAU};

use super::Point2;

/// Polar angle of `p` around `center`, in `(-π, π]`.
#[must_use]
pub fn angle_of(center: &Point2, p: &Point2) -> f64 {
    (p.y - center.y).atan2(p.x - center.x)
}

/// Wraps an angle into the half-open range `(-π, π]`.
///
/// Every angular comparison in the crate goes through this helper.
#[must_use]
pub fn normalize_angle(angle: f64) -> f64 {
    let wrapped = angle.rem_euclid(TAU);
    if wrapped > PI {
        wrapped - TAU
    } else {
        wrapped
    }
}

/// Signed difference `to - from`, wrapped into `(-π, π]`.
#[must_use]
pub fn angle_difference(from: f64, to: f64) -> f64 {
    normalize_angle(to - from)
}

/// Interior bisector of the angle spanned by `p1` and `p2` as seen from `center`.
///
/// This is the plain average of the two polar angles, so it is not wrapped:
/// the opposite ray (`+ π`) is the exterior bisector.
#[must_use]
pub fn bisector_angle(center: &Point2, p1: &Point2, p2: &Point2) -> f64 {
    (angle_of(center, p1) + angle_of(center, p2)) / 2.0
}
