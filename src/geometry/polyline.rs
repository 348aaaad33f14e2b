use crate::error::{GeometryError, Result};
use crate::math::distance_2d::{closest_point_on_segment, distance_to_polyline};
use crate::math::Point2;

/// An open polyline with at least two vertices.
///
/// Vertex order is meaningful: segment `i` runs from `points[i]` to
/// `points[i + 1]`. The last vertex never connects back to the first.
#[derive(Debug, Clone, PartialEq)]
pub struct Polyline {
    points: Vec<Point2>,
}

impl Polyline {
    /// Creates a polyline from its ordered vertices.
    ///
    /// # Errors
    ///
    /// - `GeometryError::InvalidPolyline` if fewer than 2 points are given
    /// - `GeometryError::NonFinite` if any coordinate is NaN or infinite
    pub fn new(points: Vec<Point2>) -> Result<Self> {
        if points.len() < 2 {
            return Err(GeometryError::InvalidPolyline {
                points: points.len(),
            }
            .into());
        }
        if points.iter().any(|p| !(p.x.is_finite() && p.y.is_finite())) {
            return Err(GeometryError::NonFinite("polyline vertex").into());
        }
        Ok(Self { points })
    }

    /// Creates a polyline from `(x, y)` pairs.
    ///
    /// # Errors
    ///
    /// Same as [`Polyline::new`].
    pub fn from_xy(coords: &[(f64, f64)]) -> Result<Self> {
        Self::new(coords.iter().map(|&(x, y)| Point2::new(x, y)).collect())
    }

    /// Returns the ordered vertices.
    #[must_use]
    pub fn points(&self) -> &[Point2] {
        &self.points
    }

    /// Returns the number of segments (`points - 1`).
    #[must_use]
    pub fn segment_count(&self) -> usize {
        self.points.len() - 1
    }

    /// Iterates over consecutive `(start, end)` vertex pairs.
    pub fn segments(&self) -> impl Iterator<Item = (&Point2, &Point2)> + '_ {
        self.points.windows(2).map(|seg| (&seg[0], &seg[1]))
    }

    /// Minimum distance from `p` to any segment.
    #[must_use]
    pub fn distance_to(&self, p: &Point2) -> f64 {
        distance_to_polyline(p, &self.points)
    }

    /// Returns the point on the polyline closest to `p`.
    ///
    /// Ties resolve to the earliest segment.
    #[must_use]
    pub fn closest_point(&self, p: &Point2) -> Point2 {
        let mut best = self.points[0];
        let mut best_dist = f64::INFINITY;
        for (v, w) in self.segments() {
            let candidate = closest_point_on_segment(p, v, w);
            let dist = (p - candidate).norm();
            if dist < best_dist {
                best_dist = dist;
                best = candidate;
            }
        }
        best
    }
}
