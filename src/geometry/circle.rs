use crate::error::{GeometryError, Result};
use crate::math::Point2;

/// A circle in the 2D plane: center plus non-negative radius.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    center: Point2,
    radius: f64,
}

impl Circle {
    /// Creates a new circle.
    ///
    /// # Errors
    ///
    /// Returns an error if the radius is negative.
    pub fn new(center: Point2, radius: f64) -> Result<Self> {
        if radius < 0.0 {
            return Err(GeometryError::NegativeRadius { radius });
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
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn accessors() {
        let c = Circle::new(Point2::new(1.0, 2.0), 3.0).unwrap();
        assert_eq!(*c.center(), Point2::new(1.0, 2.0));
        assert!((c.radius() - 3.0).abs() < 1e-15);
    }

    #[test]
    fn zero_radius_is_allowed() {
        assert!(Circle::new(Point2::origin(), 0.0).is_ok());
    }

    #[test]
    fn negative_radius_is_rejected() {
        assert!(Circle::new(Point2::origin(), -1.0).is_err());
    }
}
