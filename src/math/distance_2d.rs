use std::f64::consts::{FRAC_PI_2, PI};

use crate::geometry::{Line2, Segment2};

use super::Point2;

/// Perpendicular distance from `point` to the infinite line.
#[must_use]
pub fn line_point_distance(line: &Line2, point: &Point2) -> f64 {
    line_point_distance_squared(line, point).sqrt()
}

/// Squared perpendicular distance from `point` to the infinite line,
/// avoiding the square root.
#[must_use]
pub fn line_point_distance_squared(line: &Line2, point: &Point2) -> f64 {
    let v = line.direction();
    let w = point - line.origin();
    let t = w.dot(v) / v.norm_squared();
    let foot = line.origin() + v * t;
    (point - foot).norm_squared()
}

/// Distance from `point` to the bounded segment.
///
/// When the perpendicular foot falls outside the segment, the distance to
/// the nearest endpoint is returned instead.
#[must_use]
pub fn segment_point_distance(segment: &Segment2, point: &Point2) -> f64 {
    segment_point_distance_squared(segment, point).sqrt()
}

/// Squared distance from `point` to the bounded segment.
///
/// The out-of-range test compares the projection numerator against the
/// parameter range scaled by the squared length, so no division happens
/// until the foot is known to be interior. A zero-length segment degrades
/// to the point-to-point distance.
#[must_use]
pub fn segment_point_distance_squared(segment: &Segment2, point: &Point2) -> f64 {
    let v = segment.direction();
    let w = point - segment.start();

    let c1 = w.dot(&v);
    if c1 <= 0.0 {
        return (point - segment.start()).norm_squared();
    }
    let c2 = v.norm_squared();
    if c1 >= c2 {
        return (point - segment.end()).norm_squared();
    }

    let foot = segment.start() + v * (c1 / c2);
    (point - foot).norm_squared()
}

/// Angle in `[0, pi/2]` the segment would have to rotate about its midpoint
/// to pass through `point`.
///
/// Computed as the arccosine of the normalized dot product between the
/// segment's half-vector and the midpoint-to-point vector, folded into the
/// first quadrant. Undefined (NaN) when `point` is the midpoint or the
/// segment has zero length.
#[must_use]
pub fn segment_point_angular_distance(segment: &Segment2, point: &Point2) -> f64 {
    let half = segment.direction() * 0.5;
    let w = point - segment.midpoint();
    let cos = half.dot(&w) / (half.norm() * w.norm());
    let angle = cos.clamp(-1.0, 1.0).acos();
    if angle > FRAC_PI_2 {
        PI - angle
    } else {
        angle
    }
}

/// Cosine-squared variant of [`segment_point_angular_distance`], skipping
/// the arccosine.
///
/// The value is 1 at zero angular distance and 0 at a quarter turn, and it
/// is monotonically decreasing (not linear) in the angle. It orders
/// candidates correctly but must not be read as an angle.
#[must_use]
pub fn segment_point_angular_distance_cos_sq(segment: &Segment2, point: &Point2) -> f64 {
    let half = segment.direction() * 0.5;
    let w = point - segment.midpoint();
    let d = half.dot(&w);
    d * d / (half.norm_squared() * w.norm_squared())
}
