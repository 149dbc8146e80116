use crate::error::{GeometryError, Result};
use crate::math::{fuzzy_equal, Point2, Point3, Vector2, Vector3};

/// An infinite 2D line in point-plus-direction form.
///
/// Parametric form: `P(t) = origin + t * direction`. The direction is kept
/// exactly as given, not normalized, so a line built with
/// [`Line2::from_points`] reaches `p1` at `t = 0` and `p2` at `t = 1`.
///
/// The direction must be non-zero. This is not validated: a zero direction
/// makes every downstream computation undefined and is the caller's
/// precondition to uphold.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line2 {
    origin: Point2,
    direction: Vector2,
}

impl Line2 {
    /// Creates a line from an origin and a (non-zero) direction.
    #[must_use]
    pub fn new(origin: Point2, direction: Vector2) -> Self {
        Self { origin, direction }
    }

    /// Creates a line through two distinct points, with `direction = p2 - p1`.
    #[must_use]
    pub fn from_points(p1: Point2, p2: Point2) -> Self {
        Self::new(p1, p2 - p1)
    }

    /// Returns the origin point of the line.
    #[must_use]
    pub fn origin(&self) -> &Point2 {
        &self.origin
    }

    /// Returns the direction vector of the line.
    #[must_use]
    pub fn direction(&self) -> &Vector2 {
        &self.direction
    }

    /// Evaluates the line at parameter `t`.
    #[must_use]
    pub fn point_at(&self, t: f64) -> Point2 {
        self.origin + self.direction * t
    }
}

/// An infinite 3D line in point-plus-direction form.
///
/// Same conventions as [`Line2`]: the direction is kept as given and must be
/// non-zero (not validated).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line3 {
    origin: Point3,
    direction: Vector3,
}

impl Line3 {
    /// Creates a line from an origin and a (non-zero) direction.
    #[must_use]
    pub fn new(origin: Point3, direction: Vector3) -> Self {
        Self { origin, direction }
    }

    /// Creates a line through two distinct points, with `direction = p2 - p1`.
    #[must_use]
    pub fn from_points(p1: Point3, p2: Point3) -> Self {
        Self::new(p1, p2 - p1)
    }

    /// Returns the origin point of the line.
    #[must_use]
    pub fn origin(&self) -> &Point3 {
        &self.origin
    }

    /// Returns the direction vector of the line.
    #[must_use]
    pub fn direction(&self) -> &Vector3 {
        &self.direction
    }

    /// Evaluates the line at parameter `t`.
    #[must_use]
    pub fn point_at(&self, t: f64) -> Point3 {
        self.origin + self.direction * t
    }
}

/// A bounded 2D line segment between two endpoints.
///
/// Zero-length segments are representable; routines that need a carrier
/// line go through [`Segment2::to_line`], which rejects them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment2 {
    start: Point2,
    end: Point2,
}

impl Segment2 {
    /// Creates a segment from its two endpoints.
    #[must_use]
    pub fn new(start: Point2, end: Point2) -> Self {
        Self { start, end }
    }

    /// Returns the start point.
    #[must_use]
    pub fn start(&self) -> &Point2 {
        &self.start
    }

    /// Returns the end point.
    #[must_use]
    pub fn end(&self) -> &Point2 {
        &self.end
    }

    /// Returns `end - start`.
    #[must_use]
    pub fn direction(&self) -> Vector2 {
        self.end - self.start
    }

    /// Returns the midpoint of the segment.
    #[must_use]
    pub fn midpoint(&self) -> Point2 {
        self.start + self.direction() * 0.5
    }

    /// Returns the segment length.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.direction().norm()
    }

    /// Returns the squared segment length, avoiding the square root.
    #[must_use]
    pub fn length_squared(&self) -> f64 {
        self.direction().norm_squared()
    }

    /// Evaluates the segment at parameter `t`; `t = 0` is `start`, `t = 1` is `end`.
    #[must_use]
    pub fn point_at(&self, t: f64) -> Point2 {
        self.start + self.direction() * t
    }

    /// Converts the segment to its carrier line.
    ///
    /// # Errors
    ///
    /// Returns an error if the segment has zero length.
    pub fn to_line(&self) -> Result<Line2> {
        if fuzzy_equal(self.length_squared(), 0.0) {
            return Err(GeometryError::ZeroVector);
        }
        Ok(Line2::from_points(self.start, self.end))
    }
}

/// A bounded 3D line segment between two endpoints.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment3 {
    start: Point3,
    end: Point3,
}

impl Segment3 {
    /// Creates a segment from its two endpoints.
    #[must_use]
    pub fn new(start: Point3, end: Point3) -> Self {
        Self { start, end }
    }

    /// Returns the start point.
    #[must_use]
    pub fn start(&self) -> &Point3 {
        &self.start
    }

    /// Returns the end point.
    #[must_use]
    pub fn end(&self) -> &Point3 {
        &self.end
    }

    /// Returns `end - start`.
    #[must_use]
    pub fn direction(&self) -> Vector3 {
        self.end - self.start
    }

    /// Returns the midpoint of the segment.
    #[must_use]
    pub fn midpoint(&self) -> Point3 {
        self.start + self.direction() * 0.5
    }

    /// Returns the segment length.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.direction().norm()
    }

    /// Returns the squared segment length, avoiding the square root.
    #[must_use]
    pub fn length_squared(&self) -> f64 {
        self.direction().norm_squared()
    }

    /// Evaluates the segment at parameter `t`; `t = 0` is `start`, `t = 1` is `end`.
    #[must_use]
    pub fn point_at(&self, t: f64) -> Point3 {
        self.start + self.direction() * t
    }

    /// Converts the segment to its carrier line.
    ///
    /// # Errors
    ///
    /// Returns an error if the segment has zero length.
    pub fn to_line(&self) -> Result<Line3> {
        if fuzzy_equal(self.length_squared(), 0.0) {
            return Err(GeometryError::ZeroVector);
        }
        Ok(Line3::from_points(self.start, self.end))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn from_points_parameter_semantics() {
        let line = Line2::from_points(Point2::new(1.0, 2.0), Point2::new(3.0, 6.0));
        assert_eq!(line.point_at(0.0), Point2::new(1.0, 2.0));
        assert_eq!(line.point_at(1.0), Point2::new(3.0, 6.0));
        assert_eq!(line.point_at(0.5), Point2::new(2.0, 4.0));
    }

    #[test]
    fn direction_is_not_normalized() {
        let line = Line3::from_points(Point3::origin(), Point3::new(3.0, 0.0, 4.0));
        assert_eq!(*line.direction(), Vector3::new(3.0, 0.0, 4.0));
    }

    #[test]
    fn segment_midpoint_and_length() {
        let seg = Segment2::new(Point2::new(0.0, 0.0), Point2::new(3.0, 4.0));
        assert_eq!(seg.midpoint(), Point2::new(1.5, 2.0));
        assert!((seg.length() - 5.0).abs() < 1e-15);
        assert!((seg.length_squared() - 25.0).abs() < 1e-15);
    }

    #[test]
    fn segment_to_line_keeps_endpoints() {
        let seg = Segment3::new(Point3::new(1.0, 1.0, 1.0), Point3::new(2.0, 3.0, 4.0));
        let line = seg.to_line().unwrap();
        assert_eq!(line.point_at(0.0), *seg.start());
        assert_eq!(line.point_at(1.0), *seg.end());
    }

    #[test]
    fn zero_length_segment_has_no_carrier_line() {
        let p = Point2::new(1.0, 1.0);
        assert!(Segment2::new(p, p).to_line().is_err());
    }
}
