use crate::geometry::Plane;

use super::Point3;

/// Signed distance from `point` to `plane`: the implicit equation evaluated
/// at the point, divided by the normal's magnitude.
///
/// Positive when the point lies in the half-space the normal points toward.
#[must_use]
pub fn plane_point_distance(plane: &Plane, point: &Point3) -> f64 {
    plane.evaluate(point) / plane.normal().norm()
}

/// Signed distance from `point` to a plane already in Hessian normal form.
///
/// With a unit normal the raw evaluation is directly the distance, so the
/// magnitude divide is skipped. The caller asserts the normalization; a
/// non-unit normal silently scales the result.
#[must_use]
pub fn plane_point_distance_normalized(plane: &Plane, point: &Point3) -> f64 {
    plane.evaluate(point)
}

/// Squared unsigned distance from `point` to `plane`, avoiding the square
/// root.
#[must_use]
pub fn plane_point_distance_squared(plane: &Plane, point: &Point3) -> f64 {
    let e = plane.evaluate(point);
    e * e / plane.normal().norm_squared()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn p(x: f64, y: f64, z: f64) -> Point3 {
        Point3::new(x, y, z)
    }

    #[test]
    fn signed_distance_follows_the_normal() {
        // The plane z = 0 with normal +Z.
        let plane = Plane::new(0.0, 0.0, 1.0, 0.0);
        assert_relative_eq!(plane_point_distance(&plane, &p(3.0, 4.0, 5.0)), 5.0);
        assert_relative_eq!(plane_point_distance(&plane, &p(3.0, 4.0, -5.0)), -5.0);
    }

    #[test]
    fn general_form_divides_by_the_normal_magnitude() {
        // 2z - 4 = 0 is the plane z = 2.
        let plane = Plane::new(0.0, 0.0, 2.0, -4.0);
        assert_relative_eq!(plane_point_distance(&plane, &p(1.0, 1.0, 5.0)), 3.0);
    }

    #[test]
    fn normalized_form_skips_the_divide() {
        let plane = Plane::new(0.0, 0.0, 2.0, -4.0);
        let hessian = plane.normalized();
        assert_relative_eq!(
            plane_point_distance_normalized(&hessian, &p(1.0, 1.0, 5.0)),
            plane_point_distance(&plane, &p(1.0, 1.0, 5.0))
        );
    }

    #[test]
    fn on_plane_point_is_at_distance_zero_in_both_forms() {
        let plane = Plane::new(1.0, 2.0, 2.0, -9.0);
        let on = p(1.0, 2.0, 2.0); // 1 + 4 + 4 - 9 = 0
        assert_relative_eq!(plane_point_distance(&plane, &on), 0.0, epsilon = 1e-12);
        assert_relative_eq!(
            plane_point_distance_normalized(&plane.normalized(), &on),
            0.0,
            epsilon = 1e-12
        );
    }

    #[test]
    fn squared_distance_skips_the_square_root() {
        let plane = Plane::new(0.0, 0.0, 2.0, -4.0);
        assert_relative_eq!(plane_point_distance_squared(&plane, &p(0.0, 0.0, 5.0)), 9.0);
        // Sign is lost.
        assert_relative_eq!(plane_point_distance_squared(&plane, &p(0.0, 0.0, -1.0)), 9.0);
    }
}
