//! Orientation and in-circle tests used by the divide-and-conquer
//! construction. Both are pure functions of their coordinates, use exact
//! comparisons against zero, and report degeneracies (collinear points,
//! cocircular points) as first-class results rather than errors.

use crate::point::Point;
use crate::traits::Scalar;

/// Position of a point relative to a directed segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Strictly to the left of the segment's direction.
    Left,
    /// Exactly on the carrying line.
    OnSegment,
    /// Strictly to the right of the segment's direction.
    Right,
}

/// Position of a point relative to the circle through three other points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CirclePosition {
    Inside,
    OnCircle,
    Outside,
}

/// Classifies `p` against the directed segment from `s` to `e` by the sign
/// of the cross product `(e - s) × (p - s)`.
pub fn classify<T: Scalar>(s: Point<T>, e: Point<T>, p: Point<T>) -> Orientation {
    let zero = T::from(0.0);
    let res = (e - s).perp_dot(p - s);

    if res > zero {
        Orientation::Left
    } else if res < zero {
        Orientation::Right
    } else {
        Orientation::OnSegment
    }
}

fn det3<T: Scalar>(m: [[T; 3]; 3]) -> T {
    m[0][0] * (m[1][1] * m[2][2] - m[1][2] * m[2][1])
        - m[0][1] * (m[1][0] * m[2][2] - m[1][2] * m[2][0])
        + m[0][2] * (m[1][0] * m[2][1] - m[1][1] * m[2][0])
}

/// Tests `p` against the circumcircle of `a`, `b`, `c` using the 3x3
/// determinant formulation.
///
/// The triple `(a, b, c)` must be in counter-clockwise order for the sign
/// convention to hold; the merge routine guarantees this for its callers.
pub fn in_circle<T: Scalar>(a: Point<T>, b: Point<T>, c: Point<T>, p: Point<T>) -> CirclePosition {
    let zero = T::from(0.0);
    let one = T::from(1.0);

    let al = a.length_squared();
    let bl = b.length_squared();
    let cl = c.length_squared();

    let da = det3([[a.x, a.y, one], [b.x, b.y, one], [c.x, c.y, one]]);
    let dbx = det3([[al, a.y, one], [bl, b.y, one], [cl, c.y, one]]);
    let dby = -det3([[al, a.x, one], [bl, b.x, one], [cl, c.x, one]]);
    let dc = -det3([[al, a.x, a.y], [bl, b.x, b.y], [cl, c.x, c.y]]);

    let res = da * p.length_squared() - dbx * p.x - dby * p.y + dc;

    if res < zero {
        CirclePosition::Inside
    } else if res > zero {
        CirclePosition::Outside
    } else {
        CirclePosition::OnCircle
    }
}
