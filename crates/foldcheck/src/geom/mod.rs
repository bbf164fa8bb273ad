//! Exact 2D primitives: vertices, edges, polygons and their predicates.
//!
//! Purpose
//! - Provide the orientation, area and touch/cross predicates the validator
//!   composes. Everything is computed with `Rational`; there are no tolerances.
//!
//! Assumptions and conventions
//! - Vertex coordinates are reduced, so `==` on vertices is point equality.
//! - Polygon edges are derived from consecutive vertex pairs only. The closing
//!   edge from the last vertex back to the first is not part of `edges()` or the
//!   orientation sum; `closed_edges()` exists for callers that want it.
//! - Areas come from a fan triangulation at vertex 0 and are exact only for
//!   polygons that are star-shaped from that vertex.
//!
//! Code cross-refs: `Vertex`, `Edge`, `Polygon`, `Triangle`, `validate`

mod predicates;
mod types;
mod util;

pub use predicates::{
    cross_product, edges_touch_or_cross, is_vertex_on_edge, is_vertex_right_of_edge,
    segments_intersect,
};
pub use types::{Edge, Polygon, Triangle, Vertex};
pub use util::convex_hull;

#[cfg(test)]
mod tests;
