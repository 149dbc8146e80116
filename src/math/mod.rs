pub mod distance_2d;
pub mod distance_3d;
pub mod intersect_2d;
pub mod intersect_3d;

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 3D point type.
pub type Point3 = nalgebra::Point3<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// 3D vector type.
pub type Vector3 = nalgebra::Vector3<f64>;

/// Relative tolerance used by [`fuzzy_equal`].
pub const EPSILON: f64 = 1e-12;

/// Relative-tolerance equality: true iff `|a - b| <= EPSILON * min(|a|, |b|)`.
///
/// The tolerance scales with operand magnitude, so comparisons near zero are
/// stricter in absolute terms than comparisons of large numbers. When either
/// operand is exactly zero the bound collapses and the test degrades to
/// exact equality. The relation is reflexive and symmetric but not
/// transitive near the tolerance boundary; callers must not chain it.
#[must_use]
pub fn fuzzy_equal(a: f64, b: f64) -> bool {
    (a - b).abs() <= EPSILON * a.abs().min(b.abs())
}

/// Componentwise fuzzy equality of two 2D points.
#[must_use]
pub fn fuzzy_equal_point_2(a: &Point2, b: &Point2) -> bool {
    fuzzy_equal(a.x, b.x) && fuzzy_equal(a.y, b.y)
}

/// Componentwise fuzzy equality of two 3D points.
#[must_use]
pub fn fuzzy_equal_point_3(a: &Point3, b: &Point3) -> bool {
    fuzzy_equal(a.x, b.x) && fuzzy_equal(a.y, b.y) && fuzzy_equal(a.z, b.z)
}
