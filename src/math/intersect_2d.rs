use crate::geometry::{Circle, Line2, Segment2};

use super::{fuzzy_equal, fuzzy_equal_point_2, Point2};

/// Relationship between two infinite 2D lines.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LineLineRelation2 {
    /// The lines are the same line.
    Coincident,
    /// Parallel and never meeting.
    Parallel,
    /// Meeting at a single point.
    Intersecting { point: Point2 },
}

/// 2D line-line intersection with degeneracy classification.
///
/// The cross-term denominator `d = vb.y * va.x - vb.x * va.y` decides the
/// generic case. When `d` is fuzzy-zero the directions are parallel, and
/// coincident lines are told apart from merely parallel ones by comparing
/// the y-intercepts computed from the slopes. Vertical parallel lines have
/// no finite intercept and always classify as `Parallel`.
///
/// Symmetric in its arguments: swapping `a` and `b` yields the same
/// classification and the same point for non-degenerate input.
#[must_use]
pub fn line_line_intersect(a: &Line2, b: &Line2) -> LineLineRelation2 {
    let va = a.direction();
    let vb = b.direction();

    let d = vb.y * va.x - vb.x * va.y;
    if fuzzy_equal(d, 0.0) {
        if fuzzy_equal(y_intercept(a), y_intercept(b)) {
            LineLineRelation2::Coincident
        } else {
            LineLineRelation2::Parallel
        }
    } else {
        let ua = (vb.x * (a.origin().y - b.origin().y) - vb.y * (a.origin().x - b.origin().x)) / d;
        LineLineRelation2::Intersecting {
            point: a.point_at(ua),
        }
    }
}

/// The carrier's y-intercept, `y - slope * x` at the origin point.
///
/// Non-finite for vertical lines, which makes the coincidence test above
/// fail and vertical parallel pairs classify as `Parallel`.
fn y_intercept(line: &Line2) -> f64 {
    line.origin().y - (line.direction().y / line.direction().x) * line.origin().x
}

/// Fast-path 2D line-line intersection with no degeneracy checks.
///
/// Divides by the cross-term denominator directly: parallel input yields
/// non-finite coordinates. That is a documented precondition violation, not
/// an error this function reports.
#[must_use]
pub fn line_line_intersect_exact(a: &Line2, b: &Line2) -> Point2 {
    let va = a.direction();
    let vb = b.direction();
    let d = vb.y * va.x - vb.x * va.y;
    let ua = (vb.x * (a.origin().y - b.origin().y) - vb.y * (a.origin().x - b.origin().x)) / d;
    a.point_at(ua)
}

/// Relationship between two bounded 2D segments.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SegmentSegmentRelation2 {
    /// Collinear with an open overlap range.
    Coincident,
    /// No shared point: parallel, collinear without overlap, or crossing
    /// outside at least one of the segments.
    Disjoint,
    /// A single shared point.
    Intersecting { point: Point2 },
}

/// 2D segment-segment intersection with degeneracy classification.
///
/// Parallel directions fall into three cases, tested in order: a fuzzy
/// endpoint-to-endpoint match reports that single point, a collinear open
/// overlap reports `Coincident`, anything else is `Disjoint`. In the
/// generic case both parameters must lie in `[0, 1]` for the segments to
/// actually meet.
#[must_use]
pub fn segment_segment_intersect(a: &Segment2, b: &Segment2) -> SegmentSegmentRelation2 {
    let va = a.direction();
    let vb = b.direction();

    let d = vb.y * va.x - vb.x * va.y;
    if fuzzy_equal(d, 0.0) {
        return parallel_segments(a, b);
    }

    let dx = a.start().x - b.start().x;
    let dy = a.start().y - b.start().y;
    let ua = (vb.x * dy - vb.y * dx) / d;
    let ub = (va.x * dy - va.y * dx) / d;
    if (0.0..=1.0).contains(&ua) && (0.0..=1.0).contains(&ub) {
        SegmentSegmentRelation2::Intersecting {
            point: a.point_at(ua),
        }
    } else {
        SegmentSegmentRelation2::Disjoint
    }
}

/// Parallel-direction cases of [`segment_segment_intersect`].
fn parallel_segments(a: &Segment2, b: &Segment2) -> SegmentSegmentRelation2 {
    for pa in [a.start(), a.end()] {
        for pb in [b.start(), b.end()] {
            if fuzzy_equal_point_2(pa, pb) {
                return SegmentSegmentRelation2::Intersecting { point: *pa };
            }
        }
    }

    // Collinearity of the carrier lines: the offset between the segments
    // must be parallel to the shared direction. The 2D cross product needs
    // no slope divide and so also handles vertical segments.
    let va = a.direction();
    if !fuzzy_equal((b.start() - a.start()).perp(&va), 0.0) {
        return SegmentSegmentRelation2::Disjoint;
    }

    // Open overlap range by endpoint ordering along the shared line.
    let ta = va.norm_squared();
    let tb0 = (b.start() - a.start()).dot(&va);
    let tb1 = (b.end() - a.start()).dot(&va);
    let (a_min, a_max) = (ta.min(0.0), ta.max(0.0));
    let (b_min, b_max) = (tb0.min(tb1), tb0.max(tb1));
    if b_min < a_max && a_min < b_max {
        SegmentSegmentRelation2::Coincident
    } else {
        SegmentSegmentRelation2::Disjoint
    }
}

/// Meeting points of a 2D line and a circle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CircleIntersection2 {
    /// The line misses the circle.
    None,
    /// The line touches the circle at one point.
    Tangent { point: Point2 },
    /// The line crosses the circle; `first` is the `+` root branch.
    Two { first: Point2, second: Point2 },
}

/// Intersection of a 2D line with a circle.
///
/// Substituting the parametric line into the circle equation gives the
/// quadratic `aa*u^2 + bb*u + cc = 0`; the discriminant classifies the hit
/// count.
#[must_use]
pub fn line_circle_intersect(line: &Line2, circle: &Circle) -> CircleIntersection2 {
    let v = line.direction();
    let f = line.origin() - circle.center();

    let aa = v.norm_squared();
    let bb = 2.0 * f.dot(v);
    let cc = f.norm_squared() - circle.radius() * circle.radius();

    let rr = bb * bb - 4.0 * aa * cc;
    if rr < 0.0 {
        CircleIntersection2::None
    } else if fuzzy_equal(rr, 0.0) {
        CircleIntersection2::Tangent {
            point: line.point_at(-bb / (2.0 * aa)),
        }
    } else {
        let root = rr.sqrt();
        CircleIntersection2::Two {
            first: line.point_at((-bb + root) / (2.0 * aa)),
            second: line.point_at((-bb - root) / (2.0 * aa)),
        }
    }
}
