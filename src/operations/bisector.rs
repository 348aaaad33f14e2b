use std::cmp::Ordering;
use std::f64::consts::{PI, TAU};

use tracing::debug;

use crate::error::{OperationError, Result};
use crate::geometry::GatewayPair;
use crate::math::angle_2d::{angle_difference, angle_of, bisector_angle, normalize_angle};
use crate::math::{Point2, DEGENERATE_LEN_SQ};

/// Separations closer than this are treated as equal when choosing a combination.
const SEPARATION_TIE: f64 = 1e-9;

/// Which of the two bisectors of a gateway pair was chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BisectorKind {
    /// Average of the two member angles.
    Interior,
    /// The interior bisector rotated by π.
    Exterior,
}

/// The two selected rays, as angles in `(-π, π]` from the circle center.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BisectorPair {
    pub first: f64,
    pub second: f64,
    pub first_kind: BisectorKind,
    pub second_kind: BisectorKind,
    /// Absolute wrapped angle between the two rays, in `[0, π]`.
    pub separation: f64,
}

/// Per-pair bisector data.
#[derive(Debug, Clone, Copy)]
struct PairBisectors {
    interior: f64,
    start: f64,
    gap: f64,
}

impl PairBisectors {
    fn of(pair: &GatewayPair, center: &Point2) -> Self {
        let start = angle_of(center, &pair.first.point);
        let end = angle_of(center, &pair.second.point);
        Self {
            interior: bisector_angle(center, &pair.first.point, &pair.second.point),
            start,
            gap: (end - start).rem_euclid(TAU),
        }
    }

    fn angle(&self, kind: BisectorKind) -> f64 {
        match kind {
            BisectorKind::Interior => self.interior,
            BisectorKind::Exterior => self.interior + PI,
        }
    }

    /// Whether `angle` points into the counter-clockwise gap from the first
    /// crossing to the second.
    fn opens_gap(&self, angle: f64) -> bool {
        (angle - self.start).rem_euclid(TAU) <= self.gap
    }

    fn sort_key(&self, pair: &GatewayPair, center: &Point2) -> [f64; 3] {
        [
            normalize_angle(self.interior),
            self.start,
            angle_of(center, &pair.second.point),
        ]
    }
}

/// Chooses one bisector ray per gateway pair so the two rays diverge as much
/// as possible.
///
/// Each pair offers an interior bisector (mean of its member angles) and an
/// exterior one (interior + π). Of the four combinations the one with the
/// largest wrapped angular difference wins. The combinations come in tied
/// twins (`interior/exterior` vs `exterior/interior`); among tied
/// combinations the one whose rays point into their own pair's gap between
/// crossings is preferred.
///
/// The two pairs are put in a canonical order first, so swapping the
/// arguments yields the same result.
#[derive(Debug)]
pub struct BisectorSelect {
    first: GatewayPair,
    second: GatewayPair,
    center: Point2,
}

impl BisectorSelect {
    /// Creates a new selection over two gateway pairs.
    #[must_use]
    pub fn new(first: GatewayPair, second: GatewayPair, center: Point2) -> Self {
        Self {
            first,
            second,
            center,
        }
    }

    /// Creates a selection from a pairing result.
    ///
    /// # Errors
    ///
    /// Returns `OperationError::DegenerateGatewayConfiguration` unless
    /// exactly two pairs are given.
    pub fn from_pairs(pairs: &[GatewayPair], center: Point2) -> Result<Self> {
        match pairs {
            [first, second] => Ok(Self::new(*first, *second, center)),
            _ => Err(OperationError::DegenerateGatewayConfiguration { pairs: pairs.len() }.into()),
        }
    }

    /// Executes the selection.
    ///
    /// Returns `None` if a crossing coincides with the center or has
    /// non-finite coordinates, since its angle is undefined.
    #[must_use]
    pub fn execute(&self) -> Option<BisectorPair> {
        let defined = [&self.first, &self.second].iter().all(|pair| {
            [pair.first.point, pair.second.point].iter().all(|p| {
                let r_sq = (p - self.center).norm_squared();
                r_sq.is_finite() && r_sq >= DEGENERATE_LEN_SQ
            })
        });
        if !defined {
            return None;
        }

        let mut a = PairBisectors::of(&self.first, &self.center);
        let mut b = PairBisectors::of(&self.second, &self.center);
        let key_a = a.sort_key(&self.first, &self.center);
        let key_b = b.sort_key(&self.second, &self.center);
        if compare_keys(&key_b, &key_a) == Ordering::Less {
            std::mem::swap(&mut a, &mut b);
        }

        let kinds = [
            (BisectorKind::Interior, BisectorKind::Interior),
            (BisectorKind::Interior, BisectorKind::Exterior),
            (BisectorKind::Exterior, BisectorKind::Interior),
            (BisectorKind::Exterior, BisectorKind::Exterior),
        ];
        let candidates = kinds.map(|(ka, kb)| {
            let (angle_a, angle_b) = (a.angle(ka), b.angle(kb));
            let separation = angle_difference(angle_a, angle_b).abs();
            let aligned = u8::from(a.opens_gap(angle_a)) + u8::from(b.opens_gap(angle_b));
            (ka, kb, separation, aligned)
        });

        let max_separation = candidates
            .iter()
            .map(|c| c.2)
            .fold(f64::NEG_INFINITY, f64::max);
        let (kind_a, kind_b, separation, aligned) = candidates
            .into_iter()
            .filter(|c| c.2 >= max_separation - SEPARATION_TIE)
            .reduce(|best, c| if c.3 > best.3 { c } else { best })?;

        debug!(?kind_a, ?kind_b, separation, aligned, "bisectors selected");
        Some(BisectorPair {
            first: normalize_angle(a.angle(kind_a)),
            second: normalize_angle(b.angle(kind_b)),
            first_kind: kind_a,
            second_kind: kind_b,
            separation,
        })
    }
}

fn compare_keys(lhs: &[f64; 3], rhs: &[f64; 3]) -> Ordering {
    lhs.iter()
        .zip(rhs)
        .map(|(l, r)| l.total_cmp(r))
        .find(|ord| ord.is_ne())
        .unwrap_or(Ordering::Equal)
}
