use tracing::debug;

use crate::geometry::{CurveId, GatewayPair, Intersection};
use crate::math::angle_2d::angle_of;
use crate::math::Point2;

/// Pairs angularly adjacent crossings that belong to different curves.
///
/// All crossings are sorted by polar angle around `center` (ascending,
/// `(-π, π]`), then walked as a ring: every adjacent `(current, next)`
/// including `(last, first)` whose owners differ becomes a gateway pair.
/// A well-formed configuration produces exactly two pairs.
#[derive(Debug)]
pub struct GatewayPairing<'a> {
    red: &'a [Point2],
    blue: &'a [Point2],
    center: Point2,
}

impl<'a> GatewayPairing<'a> {
    /// Creates a new pairing over the red and blue crossings.
    #[must_use]
    pub fn new(red: &'a [Point2], blue: &'a [Point2], center: Point2) -> Self {
        Self { red, blue, center }
    }

    /// Executes the pairing. The sort is stable, so crossings at equal
    /// angles keep red-before-blue input order.
    #[must_use]
    pub fn execute(&self) -> Vec<GatewayPair> {
        let mut ring: Vec<(f64, Intersection)> = self
            .red
            .iter()
            .map(|&p| (p, CurveId::Red))
            .chain(self.blue.iter().map(|&p| (p, CurveId::Blue)))
            .map(|(p, owner)| (angle_of(&self.center, &p), Intersection::new(p, owner)))
            .collect();
        ring.sort_by(|a, b| a.0.total_cmp(&b.0));

        let n = ring.len();
        let pairs: Vec<GatewayPair> = (0..n)
            .filter_map(|i| {
                let current = ring[i].1;
                let next = ring[(i + 1) % n].1;
                (current.owner != next.owner).then_some(GatewayPair {
                    first: current,
                    second: next,
                })
            })
            .collect();

        debug!(crossings = n, pairs = pairs.len(), "gateway pairing");
        pairs
    }
}
