//! Distance helpers and the segment intersection test that gates cutting.

use crate::float::Float;
use crate::vec::Vec2;

/// Turn direction of an ordered point triplet.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Orientation {
    Collinear,
    Clockwise,
    CounterClockwise,
}

/// Euclidean distance between two positions.
pub fn distance<F: Float>(a: Vec2<F>, b: Vec2<F>) -> F {
    vector_length(difference(a, b))
}

/// Magnitude of a 2D vector.
pub fn vector_length<F: Float>(v: Vec2<F>) -> F {
    v.length()
}

/// Component-wise `a - b`.
pub fn difference<F: Float>(a: Vec2<F>, b: Vec2<F>) -> Vec2<F> {
    a - b
}

/// Orientation of `(p, q, r)` from the sign of
/// `(q.y - p.y) * (r.x - q.x) - (q.x - p.x) * (r.y - q.y)`.
///
/// Exact zero is collinear; no epsilon is applied.
pub fn orientation<F: Float>(p: Vec2<F>, q: Vec2<F>, r: Vec2<F>) -> Orientation {
    let val = (q.y - p.y) * (r.x - q.x) - (q.x - p.x) * (r.y - q.y);
    if val == F::zero() {
        Orientation::Collinear
    } else if val > F::zero() {
        Orientation::Clockwise
    } else {
        Orientation::CounterClockwise
    }
}

/// True if `q` lies inside the inclusive bounding box of `p`..`r`.
///
/// Only meaningful once `p`, `q`, `r` are known to be collinear.
pub fn on_segment<F: Float>(p: Vec2<F>, q: Vec2<F>, r: Vec2<F>) -> bool {
    q.x <= p.x.max(r.x)
        && q.x >= p.x.min(r.x)
        && q.y <= p.y.max(r.y)
        && q.y >= p.y.min(r.y)
}

/// Returns true if segment `p1`-`p2` crosses or touches segment `p3`-`p4`.
///
/// Shared endpoints and collinear overlap count as intersecting. A
/// zero-length segment intersects only when it lies on the other segment.
pub fn segments_intersect<F: Float>(p1: Vec2<F>, p2: Vec2<F>, p3: Vec2<F>, p4: Vec2<F>) -> bool {
    let o1 = orientation(p1, p2, p3);
    let o2 = orientation(p1, p2, p4);
    let o3 = orientation(p3, p4, p1);
    let o4 = orientation(p3, p4, p2);

    if o1 != o2 && o3 != o4 {
        return true;
    }

    (o1 == Orientation::Collinear && on_segment(p1, p3, p2))
        || (o2 == Orientation::Collinear && on_segment(p1, p4, p2))
        || (o3 == Orientation::Collinear && on_segment(p3, p1, p4))
        || (o4 == Orientation::Collinear && on_segment(p3, p2, p4))
}
