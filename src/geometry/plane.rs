use crate::math::{Point3, Vector3};

/// An infinite plane given by the implicit equation `Ax + By + Cz + D = 0`.
///
/// `(A, B, C)` is the plane normal. It need not be unit length except in
/// Hessian normal form (see [`Plane::normalized`]), where the normal has
/// unit magnitude and `|D|` is the distance of the plane from the origin.
///
/// The normal must be non-zero for distance and intersection computations to
/// be defined. This is not validated; it is the caller's precondition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    a: f64,
    b: f64,
    c: f64,
    d: f64,
}

impl Plane {
    /// Creates a plane from its implicit coefficients.
    #[must_use]
    pub fn new(a: f64, b: f64, c: f64, d: f64) -> Self {
        Self { a, b, c, d }
    }

    /// Creates the plane through `point` with the given (non-zero) normal.
    #[must_use]
    pub fn from_point_normal(point: Point3, normal: Vector3) -> Self {
        Self::new(normal.x, normal.y, normal.z, -normal.dot(&point.coords))
    }

    /// The `A` coefficient.
    #[must_use]
    pub fn a(&self) -> f64 {
        self.a
    }

    /// The `B` coefficient.
    #[must_use]
    pub fn b(&self) -> f64 {
        self.b
    }

    /// The `C` coefficient.
    #[must_use]
    pub fn c(&self) -> f64 {
        self.c
    }

    /// The `D` coefficient.
    #[must_use]
    pub fn d(&self) -> f64 {
        self.d
    }

    /// Returns the normal vector `(A, B, C)`.
    #[must_use]
    pub fn normal(&self) -> Vector3 {
        Vector3::new(self.a, self.b, self.c)
    }

    /// Raw evaluation of the implicit equation at `point`.
    ///
    /// Zero means the point lies on the plane; the sign tells which
    /// half-space the point is in relative to the normal.
    #[must_use]
    pub fn evaluate(&self, point: &Point3) -> f64 {
        self.a * point.x + self.b * point.y + self.c * point.z + self.d
    }

    /// Returns the plane in Hessian normal form: all four coefficients
    /// divided by the normal's magnitude.
    #[must_use]
    pub fn normalized(&self) -> Self {
        let len = self.normal().norm();
        Self::new(self.a / len, self.b / len, self.c / len, self.d / len)
    }
}
