use crate::geometry::{Line3, Plane, Segment3, Sphere};

use super::{fuzzy_equal, Point3};

/// Closest-approach segment between two infinite 3D lines.
///
/// Minimizing the distance between `pa + mua * va` and `pb + mub * vb`
/// yields a 2x2 linear system in the dot products `d1343`, `d4321`,
/// `d1321`, `d4343`, `d2121`:
///
/// ```text
/// mua = (d1343 * d4321 - d1321 * d4343) / (d2121 * d4343 - d4321^2)
/// mub = (d1343 + mua * d4321) / d4343
/// ```
///
/// The returned segment runs from the closest point on `a` to the closest
/// point on `b`. The computation always succeeds; a true intersection is
/// the zero-length case, left to the caller to detect with a distance
/// check. Parallel lines make the system singular and yield non-finite
/// points.
#[must_use]
pub fn line_line_closest(a: &Line3, b: &Line3) -> Segment3 {
    let va = a.direction();
    let vb = b.direction();
    let p13 = a.origin() - b.origin();

    let d1343 = p13.dot(vb);
    let d4321 = vb.dot(va);
    let d1321 = p13.dot(va);
    let d4343 = vb.norm_squared();
    let d2121 = va.norm_squared();

    let mua = (d1343 * d4321 - d1321 * d4343) / (d2121 * d4343 - d4321 * d4321);
    let mub = (d1343 + mua * d4321) / d4343;

    Segment3::new(a.point_at(mua), b.point_at(mub))
}

/// Closest-approach segment between two bounded 3D segments.
///
/// Solves the same system as [`line_line_closest`], clamping both
/// parameters to `[0, 1]` before evaluating the endpoints, which handles
/// the endpoint-projection case.
#[must_use]
pub fn segment_segment_closest(a: &Segment3, b: &Segment3) -> Segment3 {
    let va = a.direction();
    let vb = b.direction();
    let p13 = a.start() - b.start();

    let d1343 = p13.dot(&vb);
    let d4321 = vb.dot(&va);
    let d1321 = p13.dot(&va);
    let d4343 = vb.norm_squared();
    let d2121 = va.norm_squared();

    let mua = ((d1343 * d4321 - d1321 * d4343) / (d2121 * d4343 - d4321 * d4321)).clamp(0.0, 1.0);
    let mub = ((d1343 + mua * d4321) / d4343).clamp(0.0, 1.0);

    Segment3::new(a.point_at(mua), b.point_at(mub))
}

/// Meeting points of a 3D line and a sphere.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SphereIntersection {
    /// The line misses the sphere.
    None,
    /// The line touches the sphere at one point.
    Tangent { point: Point3 },
    /// The line crosses the sphere; `first` is the `+` root branch.
    Two { first: Point3, second: Point3 },
}

/// Intersection of a 3D line with a sphere.
///
/// Substituting the parametric line into the sphere equation gives
/// `aa*u^2 + bb*u + cc = 0` with discriminant `rr = bb^2 - 4*aa*cc`:
/// negative means no intersection, zero a tangent point, positive two hits.
#[must_use]
pub fn line_sphere_intersect(line: &Line3, sphere: &Sphere) -> SphereIntersection {
    let v = line.direction();
    let f = line.origin() - sphere.center();

    let aa = v.norm_squared();
    let bb = 2.0 * f.dot(v);
    let cc = f.norm_squared() - sphere.radius() * sphere.radius();

    let rr = bb * bb - 4.0 * aa * cc;
    if rr < 0.0 {
        SphereIntersection::None
    } else if fuzzy_equal(rr, 0.0) {
        SphereIntersection::Tangent {
            point: line.point_at(-bb / (2.0 * aa)),
        }
    } else {
        let root = rr.sqrt();
        SphereIntersection::Two {
            first: line.point_at((-bb + root) / (2.0 * aa)),
            second: line.point_at((-bb - root) / (2.0 * aa)),
        }
    }
}

/// Relationship between a plane and a 3D line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PlaneLineRelation {
    /// The line lies in the plane.
    Coincident,
    /// The line is parallel to the plane and off it.
    Parallel,
    /// The line pierces the plane at a single point.
    Intersecting { point: Point3 },
}

/// Intersection of a plane with a 3D line, classifying the parallel and
/// in-plane configurations instead of dividing by (near-)zero.
///
/// The line is parallel to the plane when its direction is fuzzy
/// perpendicular to the normal; it is coincident when additionally its
/// origin satisfies the plane equation.
#[must_use]
pub fn plane_line_intersect(plane: &Plane, line: &Line3) -> PlaneLineRelation {
    let denom = plane.normal().dot(line.direction());
    if fuzzy_equal(denom, 0.0) {
        if fuzzy_equal(plane.evaluate(line.origin()), 0.0) {
            PlaneLineRelation::Coincident
        } else {
            PlaneLineRelation::Parallel
        }
    } else {
        let u = -plane.evaluate(line.origin()) / denom;
        PlaneLineRelation::Intersecting {
            point: line.point_at(u),
        }
    }
}

/// Direct solve for the plane-line intersection with no degeneracy checks;
/// parallel input yields non-finite coordinates.
#[must_use]
pub fn plane_line_intersect_exact(plane: &Plane, line: &Line3) -> Point3 {
    let u = -plane.evaluate(line.origin()) / plane.normal().dot(line.direction());
    line.point_at(u)
}

/// Relationship between two planes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PlanePairRelation {
    /// The planes are the same plane.
    Coincident,
    /// Parallel and never meeting.
    Parallel,
    /// Meeting along a line.
    Intersecting { line: Line3 },
}

/// Intersection of two planes, classifying parallel and coincident stacks.
///
/// The line direction is the cross product of the normals. When that is
/// fuzzy-zero the planes are parallel, and coincidence is decided by
/// comparing their Hessian-normalized `D` coefficients (sign-corrected for
/// anti-parallel normals).
#[must_use]
pub fn plane_plane_intersect(a: &Plane, b: &Plane) -> PlanePairRelation {
    let dir = a.normal().cross(&b.normal());
    if fuzzy_equal(dir.norm_squared(), 0.0) {
        let ha = a.normalized();
        let hb = b.normalized();
        let db = if ha.normal().dot(&hb.normal()) > 0.0 {
            hb.d()
        } else {
            -hb.d()
        };
        if fuzzy_equal(ha.d(), db) {
            PlanePairRelation::Coincident
        } else {
            PlanePairRelation::Parallel
        }
    } else {
        PlanePairRelation::Intersecting {
            line: plane_plane_intersect_exact(a, b),
        }
    }
}

/// Plane-plane intersection line with no degeneracy checks.
///
/// The direction is `n1 x n2`; a point on the line comes from solving the
/// two plane equations restricted to the subspace spanned by the normals.
/// Parallel input makes that 2x2 system singular and the line non-finite.
#[must_use]
pub fn plane_plane_intersect_exact(a: &Plane, b: &Plane) -> Line3 {
    let na = a.normal();
    let nb = b.normal();
    let dir = na.cross(&nb);

    // Solve for origin = s*na + t*nb with na.origin = -Da, nb.origin = -Db.
    let dot = na.dot(&nb);
    let det = na.norm_squared() * nb.norm_squared() - dot * dot;
    let s = (-a.d() * nb.norm_squared() + b.d() * dot) / det;
    let t = (-b.d() * na.norm_squared() + a.d() * dot) / det;

    Line3::new(Point3::from(na * s + nb * t), dir)
}

/// Configuration of three planes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PlaneTripleRelation {
    /// All three are the same plane.
    Coincident,
    /// All three share a single line.
    CommonLine { line: Line3 },
    /// The pairwise intersection lines are parallel but distinct: two
    /// parallel planes cut by a third, or a prism configuration.
    ParallelLines,
    /// All normals are parallel and at least two planes are distinct.
    Parallel,
    /// A single common point.
    Intersecting { point: Point3 },
}

/// Intersection of three planes, classifying every degenerate stacking.
///
/// The degeneracy tests run in a fixed order, and that order decides which
/// classification boundary configurations receive:
///
/// 1. all normals mutually parallel: `Coincident` if the planes all match,
///    `Parallel` otherwise;
/// 2. two pairwise intersection lines coincide: `CommonLine`;
/// 3. those lines are parallel but distinct: `ParallelLines`;
/// 4. otherwise the unique point, by the same cofactor expansion as
///    [`plane_plane_plane_intersect_exact`].
#[must_use]
pub fn plane_plane_plane_intersect(a: &Plane, b: &Plane, c: &Plane) -> PlaneTripleRelation {
    let ab_parallel = fuzzy_equal(a.normal().cross(&b.normal()).norm_squared(), 0.0);
    let ac_parallel = fuzzy_equal(a.normal().cross(&c.normal()).norm_squared(), 0.0);

    if ab_parallel && ac_parallel {
        let ab = plane_plane_intersect(a, b);
        let ac = plane_plane_intersect(a, c);
        return if ab == PlanePairRelation::Coincident && ac == PlanePairRelation::Coincident {
            PlaneTripleRelation::Coincident
        } else {
            PlaneTripleRelation::Parallel
        };
    }

    // Two pairwise intersection lines from pairs with independent normals;
    // not every pair can be parallel past the check above.
    let (la, lb) = if ab_parallel {
        (plane_plane_intersect_exact(a, c), plane_plane_intersect_exact(b, c))
    } else if ac_parallel {
        (plane_plane_intersect_exact(a, b), plane_plane_intersect_exact(c, b))
    } else {
        (plane_plane_intersect_exact(a, b), plane_plane_intersect_exact(a, c))
    };

    let cross = la.direction().cross(lb.direction());
    if fuzzy_equal(cross.norm_squared(), 0.0) {
        if point_on_line(lb.origin(), &la) {
            PlaneTripleRelation::CommonLine { line: la }
        } else {
            PlaneTripleRelation::ParallelLines
        }
    } else {
        PlaneTripleRelation::Intersecting {
            point: plane_plane_plane_intersect_exact(a, b, c),
        }
    }
}

/// Direct Cramer-style solve for the common point of three planes, with
/// cross products standing in for the adjugate:
///
/// ```text
/// p = (-D1 * (n2 x n3) - D2 * (n3 x n1) - D3 * (n1 x n2)) / (n1 . (n2 x n3))
/// ```
///
/// Degenerate input zeroes the determinant and yields non-finite
/// coordinates.
#[must_use]
pub fn plane_plane_plane_intersect_exact(a: &Plane, b: &Plane, c: &Plane) -> Point3 {
    let na = a.normal();
    let nb = b.normal();
    let nc = c.normal();

    let det = na.dot(&nb.cross(&nc));
    let num = nb.cross(&nc) * -a.d() + nc.cross(&na) * -b.d() + na.cross(&nb) * -c.d();
    Point3::from(num / det)
}

/// Whether `p` lies on `line`, by a fuzzy-zero cross product of the offset
/// with the direction.
fn point_on_line(p: &Point3, line: &Line3) -> bool {
    let w = p - line.origin();
    fuzzy_equal(w.cross(line.direction()).norm_squared(), 0.0)
}
