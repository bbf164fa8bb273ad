//! Orientation predicates built on the exact cross product.
//!
//! Conventions
//! - y points up; a vertex is "right of" a directed edge when the cross
//!   product of the edge direction and `v - e.v1` is strictly negative. CCW
//!   polygons therefore have their interior on the left.
//! - `is_vertex_on_edge` tests collinearity with the edge's supporting line
//!   and excludes the two endpoints. Adjacent edges share endpoints legally.
//! - `edges_touch_or_cross` is directional: `(a, b)` and `(b, a)` may differ.
//!   Callers wanting both directions test every ordered pair.
//! - `segments_intersect` is the symmetric, bounds-aware alternative.

use std::cmp::Ordering;

use crate::rational::Rational;

use super::types::{Edge, Vertex};

/// `u.x * v.y - v.x * u.y`.
pub fn cross_product(u: &Vertex, v: &Vertex) -> Rational {
    &(&u.x * &v.y) - &(&v.x * &u.y)
}

// Cross product of `e`'s direction and `v - e.v1`.
#[inline]
fn edge_cross(e: &Edge, v: &Vertex) -> Rational {
    cross_product(&e.direction(), &(v - &e.v1))
}

/// `v` lies on the line through `e` and is not one of its endpoints.
pub fn is_vertex_on_edge(e: &Edge, v: &Vertex) -> bool {
    if *v == e.v1 || *v == e.v2 {
        return false;
    }
    edge_cross(e, v).abs().is_zero()
}

/// `v` lies strictly right of the directed edge `e`.
pub fn is_vertex_right_of_edge(e: &Edge, v: &Vertex) -> bool {
    edge_cross(e, v).lt_int(0)
}

/// Either endpoint of `e2` is on `e1`, or both are strictly right of `e1`.
pub fn edges_touch_or_cross(e1: &Edge, e2: &Edge) -> bool {
    is_vertex_on_edge(e1, &e2.v1)
        || is_vertex_on_edge(e1, &e2.v2)
        || (is_vertex_right_of_edge(e1, &e2.v1) && is_vertex_right_of_edge(e1, &e2.v2))
}

fn orientation(a: &Vertex, b: &Vertex, p: &Vertex) -> Ordering {
    cross_product(&(b - a), &(p - a)).cmp_exact(&Rational::zero())
}

fn same_point(a: &Vertex, b: &Vertex) -> bool {
    a.x.cmp_exact(&b.x) == Ordering::Equal && a.y.cmp_exact(&b.y) == Ordering::Equal
}

fn within(p: &Rational, a: &Rational, b: &Rational) -> bool {
    let (lo, hi) = if a.cmp_exact(b) == Ordering::Greater {
        (b, a)
    } else {
        (a, b)
    };
    p.cmp_exact(lo) != Ordering::Less && p.cmp_exact(hi) != Ordering::Greater
}

// `p` is on segment `ab` and differs from both endpoints.
fn on_open_segment(p: &Vertex, a: &Vertex, b: &Vertex) -> bool {
    !same_point(p, a)
        && !same_point(p, b)
        && orientation(a, b, p) == Ordering::Equal
        && within(&p.x, &a.x, &b.x)
        && within(&p.y, &a.y, &b.y)
}

/// Closed segments share a point other than a single common endpoint.
///
/// Flags proper crossings, T-touches, collinear overlaps and duplicated
/// segments; two segments meeting only at a shared endpoint are accepted.
/// Symmetric in its arguments and independent of edge direction.
pub fn segments_intersect(e1: &Edge, e2: &Edge) -> bool {
    let (a, b, c, d) = (&e1.v1, &e1.v2, &e2.v1, &e2.v2);
    if !same_point(a, b)
        && ((same_point(a, c) && same_point(b, d)) || (same_point(a, d) && same_point(b, c)))
    {
        return true;
    }
    if on_open_segment(c, a, b)
        || on_open_segment(d, a, b)
        || on_open_segment(a, c, d)
        || on_open_segment(b, c, d)
    {
        return true;
    }
    let o1 = orientation(a, b, c);
    let o2 = orientation(a, b, d);
    let o3 = orientation(c, d, a);
    let o4 = orientation(c, d, b);
    let opposite = |s: Ordering, t: Ordering| s != Ordering::Equal && s == t.reverse();
    opposite(o1, o2) && opposite(o3, o4)
}
