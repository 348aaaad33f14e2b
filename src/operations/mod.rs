mod bisector;
mod circle_intersect;
mod equidistant;
mod gateway;
mod solve;

pub use bisector::{BisectorKind, BisectorPair, BisectorSelect};
pub use circle_intersect::CirclePolylineIntersect;
pub use equidistant::{EquidistantResult, EquidistantSolve};
pub use gateway::GatewayPairing;
pub use solve::{GatewaySolve, SolveInput, SolveReport};
