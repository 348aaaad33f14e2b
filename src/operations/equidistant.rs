use tracing::{debug, info};

use crate::config::SolverConfig;
use crate::error::{OperationError, Result};
use crate::geometry::Polyline;
use crate::math::{Point2, DEGENERATE_LEN_SQ};

/// Outcome of the equidistant-point search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EquidistantResult {
    /// Sample point on the seed chord.
    pub point: Point2,
    /// Mean of the distances to the two curves.
    pub radius: f64,
    /// Whether the distances agreed within `epsilon`.
    pub exact: bool,
    /// `|distance to red - distance to blue|` at `point`.
    pub difference: f64,
}

/// Finds a point on the chord between two seeds that is equidistant from
/// both curves.
///
/// # Algorithm
///
/// The chord `red_seed → blue_seed` is sampled at `t = i / steps` for
/// `i = 0..=steps`. The first sample whose distances to the two curves differ
/// by less than `epsilon` is returned as an exact solution. Otherwise the
/// sample with the smallest difference is returned with `exact = false`.
///
/// This is a fixed-budget scan, not a root finder: it assumes the
/// equidistant locus crosses the chord.
#[derive(Debug)]
pub struct EquidistantSolve<'a> {
    red: &'a Polyline,
    blue: &'a Polyline,
    red_seed: Point2,
    blue_seed: Point2,
}

impl<'a> EquidistantSolve<'a> {
    /// Creates a new equidistant search.
    #[must_use]
    pub fn new(red: &'a Polyline, blue: &'a Polyline, red_seed: Point2, blue_seed: Point2) -> Self {
        Self {
            red,
            blue,
            red_seed,
            blue_seed,
        }
    }

    /// Executes the scan.
    ///
    /// # Errors
    ///
    /// - `OperationError::InvalidInput` if `config` is invalid
    /// - `OperationError::NoEquidistantPoint` if the seeds coincide or no
    ///   sample produced a comparable pair of distances
    pub fn execute(&self, config: &SolverConfig) -> Result<EquidistantResult> {
        config.validate()?;

        let chord = self.blue_seed - self.red_seed;
        let chord_len_sq = chord.norm_squared();
        if chord_len_sq.is_nan() || chord_len_sq < DEGENERATE_LEN_SQ {
            return Err(OperationError::NoEquidistantPoint(
                "seed points coincide or are not finite".to_owned(),
            )
            .into());
        }

        let steps = f64::from(config.steps);
        let mut best: Option<EquidistantResult> = None;

        for i in 0..=config.steps {
            let t = f64::from(i) / steps;
            let point = self.red_seed + chord * t;

            let dist_red = self.red.distance_to(&point);
            let dist_blue = self.blue.distance_to(&point);
            let difference = (dist_red - dist_blue).abs();
            let radius = (dist_red + dist_blue) / 2.0;

            if difference < config.epsilon {
                debug!(sample = i, difference, "equidistant sample within epsilon");
                info!(
                    "equidistant point found at ({:.2}, {:.2}), radius: {radius:.2}",
                    point.x, point.y
                );
                return Ok(EquidistantResult {
                    point,
                    radius,
                    exact: true,
                    difference,
                });
            }

            if best.map_or(difference.is_finite(), |b| difference < b.difference) {
                best = Some(EquidistantResult {
                    point,
                    radius,
                    exact: false,
                    difference,
                });
            }
        }

        let best = best.ok_or_else(|| {
            OperationError::NoEquidistantPoint(format!(
                "none of {} samples produced finite distances",
                u64::from(config.steps) + 1
            ))
        })?;

        info!(
            "approximate equidistant point found at ({:.2}, {:.2}), radius: {:.2}",
            best.point.x, best.point.y, best.radius
        );
        Ok(best)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::error::EquigateError;

    fn parallel_lines() -> (Polyline, Polyline) {
        (
            Polyline::from_xy(&[(0.0, 0.0), (100.0, 0.0)]).unwrap(),
            Polyline::from_xy(&[(0.0, 10.0), (100.0, 10.0)]).unwrap(),
        )
    }

    #[test]
    fn parallel_lines_midpoint_is_exact() {
        let (red, blue) = parallel_lines();
        let result = EquidistantSolve::new(&red, &blue, Point2::new(50.0, 0.0), Point2::new(50.0, 10.0))
            .execute(&SolverConfig::default())
            .unwrap();
        assert!(result.exact);
        assert_abs_diff_eq!(result.point, Point2::new(50.0, 5.0), epsilon = 1e-9);
        assert_abs_diff_eq!(result.radius, 5.0, epsilon = 1e-9);
    }

    #[test]
    fn coarse_sampling_returns_best_approximation() {
        // Three intervals: samples at y = 0, 10/3, 20/3, 10. None is exact.
        let (red, blue) = parallel_lines();
        let config = SolverConfig::default().with_steps(3);
        let result = EquidistantSolve::new(&red, &blue, Point2::new(50.0, 0.0), Point2::new(50.0, 10.0))
            .execute(&config)
            .unwrap();
        assert!(!result.exact);
        // Either inner sample is 5/3 away from the true midline.
        assert_abs_diff_eq!((result.point.y - 5.0).abs(), 5.0 / 3.0, epsilon = 1e-9);
        assert_abs_diff_eq!(result.radius, 5.0, epsilon = 1e-9);
        assert_abs_diff_eq!(result.difference, 10.0 / 3.0, epsilon = 1e-9);
    }

    #[test]
    fn coincident_seeds_fail() {
        let (red, blue) = parallel_lines();
        let seed = Point2::new(50.0, 5.0);
        let err = EquidistantSolve::new(&red, &blue, seed, seed)
            .execute(&SolverConfig::default())
            .unwrap_err();
        assert!(matches!(
            err,
            EquigateError::Operation(OperationError::NoEquidistantPoint(_))
        ));
    }

    #[test]
    fn nan_seed_fails() {
        let (red, blue) = parallel_lines();
        let result = EquidistantSolve::new(&red, &blue, Point2::new(f64::NAN, 0.0), Point2::new(50.0, 10.0))
            .execute(&SolverConfig::default());
        assert!(result.is_err());
    }

    #[test]
    fn invalid_config_is_rejected() {
        let (red, blue) = parallel_lines();
        let config = SolverConfig::default().with_steps(0);
        let err = EquidistantSolve::new(&red, &blue, Point2::new(50.0, 0.0), Point2::new(50.0, 10.0))
            .execute(&config)
            .unwrap_err();
        assert!(matches!(
            err,
            EquigateError::Operation(OperationError::InvalidInput(_))
        ));
    }

    #[test]
    fn repeated_solves_are_bit_identical() {
        let red = Polyline::from_xy(&[(0.0, 0.0), (30.0, 7.0), (100.0, 3.0)]).unwrap();
        let blue = Polyline::from_xy(&[(0.0, 40.0), (45.0, 31.0), (100.0, 44.0)]).unwrap();
        let solve = EquidistantSolve::new(&red, &blue, Point2::new(40.0, 5.0), Point2::new(40.0, 33.0));
        let config = SolverConfig::default();
        let a = solve.execute(&config).unwrap();
        let b = solve.execute(&config).unwrap();
        assert_eq!(a.point.x.to_bits(), b.point.x.to_bits());
        assert_eq!(a.point.y.to_bits(), b.point.y.to_bits());
        assert_eq!(a.radius.to_bits(), b.radius.to_bits());
        assert_eq!(a.exact, b.exact);
    }

    #[test]
    fn solution_balances_distances() {
        let red = Polyline::from_xy(&[(0.0, 0.0), (50.0, 20.0), (100.0, 0.0)]).unwrap();
        let blue = Polyline::from_xy(&[(0.0, 60.0), (100.0, 60.0)]).unwrap();
        let result = EquidistantSolve::new(&red, &blue, Point2::new(50.0, 20.0), Point2::new(50.0, 60.0))
            .execute(&SolverConfig::default())
            .unwrap();
        let dr = red.distance_to(&result.point);
        let db = blue.distance_to(&result.point);
        // Sample spacing is 0.04, so the difference is at most one step's worth.
        assert!((dr - db).abs() < 0.1, "dr={dr}, db={db}");
        assert!((result.point.y - 40.0).abs() < 0.1, "p={}", result.point);
    }
}
