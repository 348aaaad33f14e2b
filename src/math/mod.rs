pub mod angle_2d;
pub mod distance_2d;
pub mod intersect_2d;

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// Squared length below which a segment is treated as a single point.
pub(crate) const DEGENERATE_LEN_SQ: f64 = 1e-20;
