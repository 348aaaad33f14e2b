use crate::error::{GeometryError, Result};
use crate::math::Point2;

/// A circle in the plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    center: Point2,
    radius: f64,
}

impl Circle {
    /// Creates a new circle.
    ///
    /// A zero radius is accepted: it arises when the solved point lies on
    /// both curves at once.
    ///
    /// # Errors
    ///
    /// - `GeometryError::NonFinite` if the center has a NaN or infinite coordinate
    /// - `GeometryError::InvalidRadius` if the radius is negative or not finite
    pub fn new(center: Point2, radius: f64) -> Result<Self> {
        if !(center.x.is_finite() && center.y.is_finite()) {
            return Err(GeometryError::NonFinite("circle center").into());
        }
        if !(radius.is_finite() && radius >= 0.0) {
            return Err(GeometryError::InvalidRadius(radius).into());
        }
        Ok(Self { center, radius })
    }

    /// Returns the center of the circle.
    #[must_use]
    pub fn center(&self) -> &Point2 {
        &self.center
    }

    /// Returns the radius of the circle.
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Returns a concentric circle with the radius multiplied by `factor`.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::InvalidRadius` if the scaled radius is invalid.
    pub fn grown(&self, factor: f64) -> Result<Self> {
        Self::new(self.center, self.radius * factor)
    }

    /// Point on the circle at polar angle `angle`.
    #[must_use]
    pub fn point_at(&self, angle: f64) -> Point2 {
        Point2::new(
            self.center.x + self.radius * angle.cos(),
            self.center.y + self.radius * angle.sin(),
        )
    }
}
