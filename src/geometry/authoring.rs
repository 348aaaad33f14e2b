use tracing::{debug, info, warn};

use crate::error::{OperationError, Result};
use crate::math::distance_2d::distance_to_segment;
use crate::math::Point2;

use super::{CurveId, Polyline};

/// Relative slack on the spacing test so a point placed exactly `tolerance`
/// away from the previous vertex is not rejected by rounding.
const SPACING_SLACK: f64 = 1e-9;

/// Accumulates the vertices of one curve under the minimum-spacing rules.
///
/// Each new vertex is placed exactly `tolerance` from the previous one, and
/// is accepted only when it keeps at least `tolerance` clearance from every
/// segment of this curve and of the other, already finished, curve. Those
/// rules are what make the solver's input well-separated.
#[derive(Debug, Clone)]
pub struct PolylineBuilder {
    owner: CurveId,
    points: Vec<Point2>,
    tolerance: f64,
}

impl PolylineBuilder {
    /// Starts a curve at `start`.
    ///
    /// # Errors
    ///
    /// Returns `OperationError::InvalidInput` if `tolerance` is not positive
    /// and finite, or `start` is not finite.
    pub fn new(owner: CurveId, start: Point2, tolerance: f64) -> Result<Self> {
        if !(tolerance.is_finite() && tolerance > 0.0) {
            return Err(OperationError::InvalidInput(format!(
                "spacing tolerance must be positive and finite, got {tolerance}"
            ))
            .into());
        }
        if !(start.x.is_finite() && start.y.is_finite()) {
            return Err(
                OperationError::InvalidInput("start point must be finite".to_owned()).into(),
            );
        }
        Ok(Self {
            owner,
            points: vec![start],
            tolerance,
        })
    }

    #[must_use]
    pub fn owner(&self) -> CurveId {
        self.owner
    }

    #[must_use]
    pub fn points(&self) -> &[Point2] {
        &self.points
    }

    #[must_use]
    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    fn last(&self) -> &Point2 {
        // `new` seeds one point and nothing removes points.
        &self.points[self.points.len() - 1]
    }

    /// Checks the clearance rules for a candidate vertex.
    #[must_use]
    pub fn is_valid_point(&self, p: &Point2, other: Option<&Polyline>) -> bool {
        let min_clearance = self.tolerance * (1.0 - SPACING_SLACK);
        let too_close = |v: &Point2, w: &Point2| distance_to_segment(p, v, w) < min_clearance;

        if self.points.windows(2).any(|seg| too_close(&seg[0], &seg[1])) {
            return false;
        }
        match other {
            Some(curve) => !curve.segments().any(|(v, w)| too_close(v, w)),
            None => true,
        }
    }

    /// Proposes the next vertex: `tolerance` away from the last vertex in the
    /// direction of `target`.
    ///
    /// Returns `None` when `target` is closer than `tolerance` to the last
    /// vertex or the candidate breaks the clearance rules.
    #[must_use]
    pub fn next_point(&self, target: &Point2, other: Option<&Polyline>) -> Option<Point2> {
        let last = self.last();
        let delta = target - last;
        let dist = delta.norm();
        if !dist.is_finite() || dist < self.tolerance {
            return None;
        }

        let candidate = last + delta * (self.tolerance / dist);
        self.is_valid_point(&candidate, other).then_some(candidate)
    }

    /// Like [`next_point`](Self::next_point), but appends the accepted vertex.
    pub fn extend_toward(&mut self, target: &Point2, other: Option<&Polyline>) -> Option<Point2> {
        let next = self.next_point(target, other)?;
        self.points.push(next);
        debug!(owner = %self.owner, x = next.x, y = next.y, "vertex added");
        Some(next)
    }

    /// Closes the curve on the vertical edge `x = edge_x` of a `height`-tall area.
    ///
    /// Starting at `target_y`, scans whole-unit steps toward the vertical
    /// middle (and on to the far border) for the first edge point that keeps
    /// clearance, and appends it.
    pub fn finish_at_edge(
        &mut self,
        edge_x: f64,
        height: f64,
        target_y: f64,
        other: Option<&Polyline>,
    ) -> Option<Point2> {
        if !(height.is_finite() && edge_x.is_finite()) {
            return None;
        }

        let step = if target_y > height / 2.0 { -1.0 } else { 1.0 };
        let mut y = target_y;
        while (0.0..=height).contains(&y) {
            let edge_point = Point2::new(edge_x, y);
            if self.is_valid_point(&edge_point, other) {
                self.points.push(edge_point);
                info!("{} line finished at ({edge_x}, {y:.2})", self.owner);
                return Some(edge_point);
            }
            y += step;
        }

        warn!(
            "could not find a valid point on the right edge for {} line",
            self.owner
        );
        None
    }

    /// Finalizes the curve.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::InvalidPolyline` if fewer than 2 vertices were placed.
    pub fn build(self) -> Result<Polyline> {
        Polyline::new(self.points)
    }
}
