use tracing::{info, warn};

use crate::config::SolverConfig;
use crate::error::{OperationError, Result};
use crate::geometry::{Circle, CurveId, GatewayPair, Intersection, Polyline};
use crate::math::Point2;

use super::{
    BisectorPair, BisectorSelect, CirclePolylineIntersect, EquidistantResult, EquidistantSolve,
    GatewayPairing,
};

/// Immutable snapshot of everything one solve needs.
#[derive(Debug, Clone, PartialEq)]
pub struct SolveInput {
    pub red: Polyline,
    pub blue: Polyline,
    pub red_seed: Point2,
    pub blue_seed: Point2,
}

impl SolveInput {
    #[must_use]
    pub fn new(red: Polyline, blue: Polyline, red_seed: Point2, blue_seed: Point2) -> Self {
        Self {
            red,
            blue,
            red_seed,
            blue_seed,
        }
    }

    /// Seeds the search with the point of each curve closest to `probe`.
    #[must_use]
    pub fn from_probe(red: Polyline, blue: Polyline, probe: &Point2) -> Self {
        let red_seed = red.closest_point(probe);
        let blue_seed = blue.closest_point(probe);
        Self::new(red, blue, red_seed, blue_seed)
    }
}

/// Everything computed by one [`GatewaySolve`].
#[derive(Debug, Clone, PartialEq)]
pub struct SolveReport {
    pub equidistant: EquidistantResult,
    /// Circle with the solved radius.
    pub solved_circle: Circle,
    /// Solved circle inflated by the growth factor; all crossings are on it.
    pub driving_circle: Circle,
    pub red_intersections: Vec<Point2>,
    pub blue_intersections: Vec<Point2>,
    pub gateway_pairs: Vec<GatewayPair>,
    /// Present only when exactly two gateway pairs were found.
    pub selected_bisectors: Option<BisectorPair>,
}

impl SolveReport {
    /// The selected bisector rays.
    ///
    /// # Errors
    ///
    /// Returns `OperationError::DegenerateGatewayConfiguration` when the
    /// crossings did not form exactly two gateway pairs.
    pub fn bisectors(&self) -> Result<&BisectorPair> {
        self.selected_bisectors.as_ref().ok_or_else(|| {
            OperationError::DegenerateGatewayConfiguration {
                pairs: self.gateway_pairs.len(),
            }
            .into()
        })
    }

    /// All crossings on the driving circle, red first.
    #[must_use]
    pub fn intersections(&self) -> Vec<Intersection> {
        let mut all = Intersection::tag_all(&self.red_intersections, CurveId::Red);
        all.extend(Intersection::tag_all(&self.blue_intersections, CurveId::Blue));
        all
    }

    /// One-line description of the solved point.
    #[must_use]
    pub fn summary(&self) -> String {
        let p = self.equidistant.point;
        let prefix = if self.equidistant.exact {
            "Equidistant"
        } else {
            "Approximate equidistant"
        };
        format!(
            "{prefix} point found at ({:.2}, {:.2}), radius: {:.2}",
            p.x, p.y, self.equidistant.radius
        )
    }
}

/// Runs the whole chain: equidistant point, driving circle, crossings,
/// gateway pairs, bisectors.
///
/// A crossing layout that does not yield exactly two gateway pairs is not an
/// error here: the report is returned without bisectors.
#[derive(Debug)]
pub struct GatewaySolve<'a> {
    input: &'a SolveInput,
}

impl<'a> GatewaySolve<'a> {
    /// Creates a new solve over `input`.
    #[must_use]
    pub fn new(input: &'a SolveInput) -> Self {
        Self { input }
    }

    /// Executes the solve.
    ///
    /// # Errors
    ///
    /// - `OperationError::InvalidInput` if `config` is invalid
    /// - `OperationError::NoEquidistantPoint` if the search fails
    /// - `GeometryError::InvalidRadius` if the solved radius is unusable
    pub fn execute(&self, config: &SolverConfig) -> Result<SolveReport> {
        let input = self.input;
        let equidistant =
            EquidistantSolve::new(&input.red, &input.blue, input.red_seed, input.blue_seed)
                .execute(config)?;

        let solved_circle = Circle::new(equidistant.point, equidistant.radius)?;
        let driving_circle = solved_circle.grown(config.growth_factor)?;

        let red_intersections = CirclePolylineIntersect::new(driving_circle, &input.red).execute(config);
        let blue_intersections =
            CirclePolylineIntersect::new(driving_circle, &input.blue).execute(config);

        let gateway_pairs =
            GatewayPairing::new(&red_intersections, &blue_intersections, equidistant.point).execute();

        let selected_bisectors = match BisectorSelect::from_pairs(&gateway_pairs, equidistant.point) {
            Ok(select) => select.execute(),
            Err(err) => {
                warn!("{err}; skipping bisector selection");
                None
            }
        };

        if let Some(b) = &selected_bisectors {
            info!(
                first = b.first,
                second = b.second,
                separation = b.separation,
                "bisectors selected"
            );
        }

        Ok(SolveReport {
            equidistant,
            solved_circle,
            driving_circle,
            red_intersections,
            blue_intersections,
            gateway_pairs,
            selected_bisectors,
        })
    }
}
