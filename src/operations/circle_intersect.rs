use tracing::debug;

use crate::config::SolverConfig;
use crate::geometry::{Circle, CurveId, Intersection, Polyline};
use crate::math::intersect_2d::circle_segment_intersect_2d;
use crate::math::Point2;

/// Intersects a circle with every segment of a polyline.
///
/// Segments are processed in order and each contributes 0, 1 or 2 points,
/// so a crossing exactly at a shared vertex may appear twice.
#[derive(Debug)]
pub struct CirclePolylineIntersect<'a> {
    circle: Circle,
    polyline: &'a Polyline,
}

impl<'a> CirclePolylineIntersect<'a> {
    /// Creates a new circle/polyline intersection query.
    #[must_use]
    pub fn new(circle: Circle, polyline: &'a Polyline) -> Self {
        Self { circle, polyline }
    }

    /// Executes the query, using `config.epsilon` for the on-segment test.
    #[must_use]
    pub fn execute(&self, config: &SolverConfig) -> Vec<Point2> {
        let center = self.circle.center();
        let radius = self.circle.radius();

        let points: Vec<Point2> = self
            .polyline
            .segments()
            .flat_map(|(v, w)| circle_segment_intersect_2d(center, radius, v, w, config.epsilon))
            .collect();

        debug!(
            segments = self.polyline.segment_count(),
            hits = points.len(),
            "circle/polyline intersection"
        );
        points
    }

    /// Executes the query and tags every crossing with `owner`.
    #[must_use]
    pub fn execute_tagged(&self, config: &SolverConfig, owner: CurveId) -> Vec<Intersection> {
        Intersection::tag_all(&self.execute(config), owner)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    fn unit_config() -> SolverConfig {
        SolverConfig::default()
    }

    #[test]
    fn horizontal_line_through_radius_five_circle() {
        let circle = Circle::new(Point2::new(0.0, 0.0), 5.0).unwrap();
        let line = Polyline::from_xy(&[(-10.0, 3.0), (10.0, 3.0)]).unwrap();
        let hits = CirclePolylineIntersect::new(circle, &line).execute(&unit_config());
        assert_eq!(hits.len(), 2, "hits={hits:?}");
        let mut xs: Vec<f64> = hits.iter().map(|p| p.x).collect();
        xs.sort_by(f64::total_cmp);
        assert_abs_diff_eq!(xs[0], -4.0, epsilon = 1e-6);
        assert_abs_diff_eq!(xs[1], 4.0, epsilon = 1e-6);
        for p in &hits {
            assert_abs_diff_eq!(p.y, 3.0, epsilon = 1e-6);
        }
    }

    #[test]
    fn zigzag_crosses_once_per_leg() {
        // Each leg starts inside the circle and leaves it, or vice versa.
        let circle = Circle::new(Point2::new(0.0, 0.0), 5.0).unwrap();
        let zigzag = Polyline::from_xy(&[(-8.0, 0.0), (0.0, 1.0), (8.0, 0.0)]).unwrap();
        let hits = CirclePolylineIntersect::new(circle, &zigzag).execute(&unit_config());
        assert_eq!(hits.len(), 2, "hits={hits:?}");
        for p in &hits {
            assert!(((p - circle.center()).norm() - 5.0).abs() < 1e-9, "p={p}");
        }
        assert!(hits[0].x < 0.0 && hits[1].x > 0.0);
    }

    #[test]
    fn polyline_outside_circle_has_no_hits() {
        let circle = Circle::new(Point2::new(0.0, 0.0), 1.0).unwrap();
        let line = Polyline::from_xy(&[(5.0, 5.0), (10.0, 5.0), (10.0, 10.0)]).unwrap();
        assert!(CirclePolylineIntersect::new(circle, &line)
            .execute(&unit_config())
            .is_empty());
    }

    #[test]
    fn tagged_hits_carry_owner() {
        let circle = Circle::new(Point2::new(0.0, 0.0), 5.0).unwrap();
        let line = Polyline::from_xy(&[(-10.0, 0.0), (10.0, 0.0)]).unwrap();
        let hits = CirclePolylineIntersect::new(circle, &line).execute_tagged(&unit_config(), CurveId::Blue);
        assert_eq!(hits.len(), 2);
        assert!(hits.iter().all(|h| h.owner == CurveId::Blue));
    }
}
