use std::cmp::Ordering;

use crate::rational::Rational;

use super::predicates::cross_product;
use super::types::{Polygon, Vertex};

fn cmp_xy(a: &Vertex, b: &Vertex) -> Ordering {
    a.x.cmp_exact(&b.x).then_with(|| a.y.cmp_exact(&b.y))
}

#[inline]
fn turn(a: &Vertex, b: &Vertex, c: &Vertex) -> Rational {
    cross_product(&(b - a), &(c - a))
}

/// Andrew’s monotone chain convex hull, exact.
///
/// Returns the strictly convex hull in CCW order starting at the lowest-x
/// (then lowest-y) point; collinear points are dropped. `None` when fewer than
/// three non-collinear points remain.
pub fn convex_hull(points: &[Vertex]) -> Option<Polygon> {
    let mut pts: Vec<Vertex> = points.to_vec();
    pts.sort_by(cmp_xy);
    pts.dedup_by(|a, b| cmp_xy(a, b) == Ordering::Equal);
    if pts.len() < 3 {
        return None;
    }
    let mut lower: Vec<Vertex> = Vec::with_capacity(pts.len());
    for p in &pts {
        while lower.len() >= 2
            && !turn(&lower[lower.len() - 2], &lower[lower.len() - 1], p).is_positive()
        {
            lower.pop();
        }
        lower.push(p.clone());
    }
    let mut upper: Vec<Vertex> = Vec::with_capacity(pts.len());
    for p in pts.iter().rev() {
        while upper.len() >= 2
            && !turn(&upper[upper.len() - 2], &upper[upper.len() - 1], p).is_positive()
        {
            upper.pop();
        }
        upper.push(p.clone());
    }
    lower.pop();
    upper.pop();
    let mut hull = lower;
    hull.extend(upper);
    if hull.len() < 3 {
        return None;
    }
    Some(Polygon::new(hull))
}
