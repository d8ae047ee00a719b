use crate::core::Vector;

/// True when A, B, C make a counter-clockwise turn
#[inline]
pub fn ccw(a: Vector, b: Vector, c: Vector) -> bool {
    (c.y - a.y) * (b.x - a.x) > (b.y - a.y) * (c.x - a.x)
}

/// Segment AB intersects segment CD iff C, D lie on opposite sides of AB
/// and A, B lie on opposite sides of CD.
#[inline]
pub fn segments_intersect(a: Vector, b: Vector, c: Vector, d: Vector) -> bool {
    ccw(a, c, d) != ccw(b, c, d) && ccw(a, b, c) != ccw(a, b, d)
}
