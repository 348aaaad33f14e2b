pub mod config;
pub mod error;
pub mod geometry;
pub mod math;
pub mod operations;
pub mod tessellation;

pub use config::SolverConfig;
pub use error::{EquigateError, Result};
