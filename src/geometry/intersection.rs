use std::fmt;

use crate::math::Point2;

/// Which of the two input curves a point belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CurveId {
    Red,
    Blue,
}

impl fmt::Display for CurveId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Red => f.write_str("red"),
            Self::Blue => f.write_str("blue"),
        }
    }
}

/// A point where a circle crosses one of the curves.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Intersection {
    pub point: Point2,
    pub owner: CurveId,
}

impl Intersection {
    #[must_use]
    pub fn new(point: Point2, owner: CurveId) -> Self {
        Self { point, owner }
    }

    /// Tags every point with the same owner.
    #[must_use]
    pub fn tag_all(points: &[Point2], owner: CurveId) -> Vec<Self> {
        points.iter().map(|&point| Self { point, owner }).collect()
    }
}

/// Two angularly adjacent crossings owned by different curves.
///
/// `first` precedes `second` in counter-clockwise order around the circle
/// (the wraparound pair has `first` last in sort order).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GatewayPair {
    pub first: Intersection,
    pub second: Intersection,
}
