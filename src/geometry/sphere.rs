use crate::error::{GeometryError, Result};
use crate::math::Point3;

/// A sphere in 3D space: center plus non-negative radius.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sphere {
    center: Point3,
    radius: f64,
}

impl Sphere {
    /// Creates a new sphere.
    ///
    /// # Errors
    ///
    /// Returns an error if the radius is negative.
    pub fn new(center: Point3, radius: f64) -> Result<Self> {
        if radius < 0.0 {
            return Err(GeometryError::NegativeRadius { radius });
        }
        Ok(Self { center, radius })
    }

    /// Returns the center of the sphere.
    #[must_use]
    pub fn center(&self) -> &Point3 {
        &self.center
    }

    /// Returns the radius of the sphere.
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
        let s = Sphere::new(Point3::new(1.0, 2.0, 3.0), 4.0).unwrap();
        assert_eq!(*s.center(), Point3::new(1.0, 2.0, 3.0));
        assert!((s.radius() - 4.0).abs() < 1e-15);
    }

    #[test]
    fn negative_radius_is_rejected() {
        assert!(Sphere::new(Point3::origin(), -0.5).is_err());
    }
}
