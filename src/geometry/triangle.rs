use crate::math::intersect_2d::{line_line_intersect, LineLineRelation2};
use crate::math::{Point2, Vector2};

use super::Line2;

/// A triangle in the 2D plane, given by its three vertices.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle2 {
    a: Point2,
    b: Point2,
    c: Point2,
}

impl Triangle2 {
    /// Creates a triangle from its vertices.
    #[must_use]
    pub fn new(a: Point2, b: Point2, c: Point2) -> Self {
        Self { a, b, c }
    }

    /// Returns the first vertex.
    #[must_use]
    pub fn a(&self) -> &Point2 {
        &self.a
    }

    /// Returns the second vertex.
    #[must_use]
    pub fn b(&self) -> &Point2 {
        &self.b
    }

    /// Returns the third vertex.
    #[must_use]
    pub fn c(&self) -> &Point2 {
        &self.c
    }

    /// Computes the orthocenter, the common point of the three altitudes.
    ///
    /// Intersects the altitudes through `a` and `b`. Returns `None` for a
    /// degenerate (collinear or repeated-vertex) triangle, where the
    /// altitudes are parallel or coincident.
    #[must_use]
    pub fn orthocenter(&self) -> Option<Point2> {
        let altitude_a = Line2::new(self.a, perpendicular(self.c - self.b));
        let altitude_b = Line2::new(self.b, perpendicular(self.c - self.a));
        match line_line_intersect(&altitude_a, &altitude_b) {
            LineLineRelation2::Intersecting { point } => Some(point),
            LineLineRelation2::Coincident | LineLineRelation2::Parallel => None,
        }
    }
}

/// Counterclockwise perpendicular of a 2D vector.
fn perpendicular(v: Vector2) -> Vector2 {
    Vector2::new(-v.y, v.x)
}
