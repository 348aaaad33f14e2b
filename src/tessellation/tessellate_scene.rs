use std::f64::consts::TAU;

use crate::error::{OperationError, Result};
use crate::geometry::Circle;
use crate::math::Vector2;
use crate::operations::SolveReport;

use super::{Ring, Scene, SceneParams};

/// Converts a [`SolveReport`] into a [`Scene`].
pub struct TessellateScene<'a> {
    report: &'a SolveReport,
    params: SceneParams,
}

impl<'a> TessellateScene<'a> {
    /// Creates a new `TessellateScene` operation.
    #[must_use]
    pub fn new(report: &'a SolveReport, params: SceneParams) -> Self {
        Self { report, params }
    }

    /// Executes the tessellation.
    ///
    /// # Errors
    ///
    /// Returns `OperationError::InvalidInput` if fewer than 3 circle segments
    /// are requested or the ray length is not positive and finite.
    pub fn execute(&self) -> Result<Scene> {
        if self.params.circle_segments < 3 {
            return Err(OperationError::InvalidInput(
                "circle tessellation needs at least 3 segments".to_owned(),
            )
            .into());
        }
        if !(self.params.ray_length.is_finite() && self.params.ray_length > 0.0) {
            return Err(OperationError::InvalidInput(
                "ray length must be positive and finite".to_owned(),
            )
            .into());
        }

        let report = self.report;
        let center = report.equidistant.point;
        let rays = report
            .selected_bisectors
            .iter()
            .flat_map(|b| [b.first, b.second])
            .map(|angle| {
                let end = center + Vector2::new(angle.cos(), angle.sin()) * self.params.ray_length;
                [center, end]
            })
            .collect();

        Ok(Scene {
            solved_point: center,
            solved_circle: self.ring(&report.solved_circle),
            driving_circle: self.ring(&report.driving_circle),
            markers: report.intersections(),
            rays,
        })
    }

    fn ring(&self, circle: &Circle) -> Ring {
        let n = self.params.circle_segments;
        #[allow(clippy::cast_precision_loss)]
        let step = TAU / n as f64;
        #[allow(clippy::cast_precision_loss)]
        let points = (0..n).map(|i| circle.point_at(step * i as f64)).collect();
        Ring { points }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::config::SolverConfig;
    use crate::geometry::Polyline;
    use crate::math::Point2;
    use crate::operations::{GatewaySolve, SolveInput};

    fn parallel_report() -> SolveReport {
        let input = SolveInput::new(
            Polyline::from_xy(&[(0.0, 0.0), (100.0, 0.0)]).unwrap(),
            Polyline::from_xy(&[(0.0, 10.0), (100.0, 10.0)]).unwrap(),
            Point2::new(50.0, 0.0),
            Point2::new(50.0, 10.0),
        );
        GatewaySolve::new(&input).execute(&SolverConfig::default()).unwrap()
    }

    #[test]
    fn scene_carries_markers_rings_and_rays() {
        let report = parallel_report();
        let scene = TessellateScene::new(&report, SceneParams::default()).execute().unwrap();

        assert_eq!(scene.markers.len(), 4);
        assert_eq!(scene.solved_circle.points.len(), 64);
        assert_eq!(scene.driving_circle.points.len(), 64);
        for p in &scene.driving_circle.points {
            let r = (p - scene.solved_point).norm();
            assert!((r - report.driving_circle.radius()).abs() < 1e-9, "r={r}");
        }

        assert_eq!(scene.rays.len(), 2);
        for [start, end] in &scene.rays {
            assert!((start - scene.solved_point).norm() < 1e-12);
            assert!(((end - start).norm() - 1000.0).abs() < 1e-9);
        }
    }

    #[test]
    fn too_few_segments_rejected() {
        let report = parallel_report();
        let params = SceneParams {
            circle_segments: 2,
            ..SceneParams::default()
        };
        assert!(TessellateScene::new(&report, params).execute().is_err());
    }

    #[test]
    fn non_positive_ray_length_rejected() {
        let report = parallel_report();
        let params = SceneParams {
            ray_length: 0.0,
            ..SceneParams::default()
        };
        assert!(TessellateScene::new(&report, params).execute().is_err());
    }
}
