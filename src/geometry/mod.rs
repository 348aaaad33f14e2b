pub mod authoring;
pub mod circle;
pub mod intersection;
pub mod polyline;

pub use authoring::PolylineBuilder;
pub use circle::Circle;
pub use intersection::{CurveId, GatewayPair, Intersection};
pub use polyline::Polyline;
