use crate::error::{OperationError, Result};

/// Default tolerance for equal distances and on-segment tests.
pub const DEFAULT_EPSILON: f64 = 1e-6;

/// Default number of sampling intervals along the seed chord.
pub const DEFAULT_STEPS: u32 = 1000;

/// Default inflation applied to the solved radius before intersecting.
pub const DEFAULT_GROWTH_FACTOR: f64 = 1.01;

/// Numeric constants supplied by the host to every solve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverConfig {
    /// Tolerance for treating two distances as equal and a point as lying on a segment.
    pub epsilon: f64,
    /// Number of intervals the seed chord is split into (`steps + 1` samples).
    pub steps: u32,
    /// Multiplier applied to the solved radius to obtain the driving circle.
    pub growth_factor: f64,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            epsilon: DEFAULT_EPSILON,
            steps: DEFAULT_STEPS,
            growth_factor: DEFAULT_GROWTH_FACTOR,
        }
    }
}

impl SolverConfig {
    #[must_use]
    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon;
        self
    }

    #[must_use]
    pub fn with_steps(mut self, steps: u32) -> Self {
        self.steps = steps;
        self
    }

    #[must_use]
    pub fn with_growth_factor(mut self, growth_factor: f64) -> Self {
        self.growth_factor = growth_factor;
        self
    }

    /// Checks that every constant is usable.
    ///
    /// # Errors
    ///
    /// Returns `OperationError::InvalidInput` if `epsilon` is not a positive
    /// finite number, `steps` is zero, or `growth_factor` is below 1 or not finite.
    pub fn validate(&self) -> Result<()> {
        if !(self.epsilon.is_finite() && self.epsilon > 0.0) {
            return Err(OperationError::InvalidInput(format!(
                "epsilon must be positive and finite, got {}",
                self.epsilon
            ))
            .into());
        }
        if self.steps == 0 {
            return Err(
                OperationError::InvalidInput("steps must be at least 1".to_owned()).into(),
            );
        }
        if !(self.growth_factor.is_finite() && self.growth_factor >= 1.0) {
            return Err(OperationError::InvalidInput(format!(
                "growth factor must be finite and >= 1, got {}",
                self.growth_factor
            ))
            .into());
        }
        Ok(())
    }
}
