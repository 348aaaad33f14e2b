use super::{Point2, DEGENERATE_LEN_SQ};

/// Returns the point of segment `[v, w]` closest to `p`.
///
/// The projection parameter is clamped to `[0, 1]`, so points beyond either
/// end snap to that endpoint. A zero-length segment returns `v`.
#[must_use]
pub fn closest_point_on_segment(p: &Point2, v: &Point2, w: &Point2) -> Point2 {
    let d = w - v;
    let len_sq = d.norm_squared();

    if len_sq < DEGENERATE_LEN_SQ {
        return *v;
    }

    // Project onto the infinite line, clamp to the segment.
    let t = ((p - v).dot(&d) / len_sq).clamp(0.0, 1.0);
    v + d * t
}

/// Returns the minimum distance from `p` to the segment `[v, w]`.
#[must_use]
pub fn distance_to_segment(p: &Point2, v: &Point2, w: &Point2) -> f64 {
    (p - closest_point_on_segment(p, v, w)).norm()
}

/// Returns the minimum distance from `p` to any segment of an open polyline.
///
/// Returns `f64::INFINITY` when `points` has fewer than 2 entries.
#[must_use]
pub fn distance_to_polyline(p: &Point2, points: &[Point2]) -> f64 {
    points
        .windows(2)
        .map(|seg| distance_to_segment(p, &seg[0], &seg[1]))
        .fold(f64::INFINITY, f64::min)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-10;

    #[test]
    fn segment_dist_perpendicular_projection() {
        // (1, 1) to (0,0)→(2,0): closest at (1,0).
        let d = distance_to_segment(
            &Point2::new(1.0, 1.0),
            &Point2::new(0.0, 0.0),
            &Point2::new(2.0, 0.0),
        );
        assert!((d - 1.0).abs() < TOL, "d={d}");
    }

    #[test]
    fn segment_dist_endpoint_closest() {
        let d = distance_to_segment(
            &Point2::new(-3.0, 4.0),
            &Point2::new(0.0, 0.0),
            &Point2::new(2.0, 0.0),
        );
        assert!((d - 5.0).abs() < TOL, "d={d}");
    }

    #[test]
    fn segment_dist_interior_point_is_zero() {
        let v = Point2::new(1.0, 1.0);
        let w = Point2::new(7.0, 4.0);
        let p = v + (w - v) * 0.37;
        let d = distance_to_segment(&p, &v, &w);
        assert!(d < 1e-6, "d={d}");
    }

    #[test]
    fn segment_dist_degenerate() {
        let origin = Point2::new(0.0, 0.0);
        let d = distance_to_segment(&Point2::new(3.0, 4.0), &origin, &origin);
        assert!((d - 5.0).abs() < TOL, "d={d}");
    }

    #[test]
    fn closest_point_clamps_past_far_end() {
        let c = closest_point_on_segment(
            &Point2::new(9.0, 2.0),
            &Point2::new(0.0, 0.0),
            &Point2::new(4.0, 0.0),
        );
        assert!((c.x - 4.0).abs() < TOL && c.y.abs() < TOL, "c={c}");
    }

    #[test]
    fn polyline_dist_takes_minimum_segment() {
        // L-shape: (0,0)→(10,0)→(10,10). Point (8,5) is 2 from the vertical leg.
        let pts = [
            Point2::new(0.0, 0.0),
            Point2::new(10.0, 0.0),
            Point2::new(10.0, 10.0),
        ];
        let d = distance_to_polyline(&Point2::new(8.0, 5.0), &pts);
        assert!((d - 2.0).abs() < TOL, "d={d}");
    }

    #[test]
    fn polyline_dist_too_few_points_is_infinite() {
        let p = Point2::new(1.0, 1.0);
        assert!(distance_to_polyline(&p, &[]).is_infinite());
        assert!(distance_to_polyline(&p, &[Point2::new(0.0, 0.0)]).is_infinite());
    }
}
