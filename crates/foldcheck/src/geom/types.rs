//! Value types of the kernel: vertices, directed edges, polygons, triangles.
//!
//! - `Vertex` doubles as a direction vector from an implicit origin.
//! - `Edge` is directed (`v1 → v2`); orientation predicates depend on it.
//! - `Polygon` is an ordered vertex list. Edge derivation and the orientation
//!   sum use consecutive pairs only; the last vertex is not joined back to the
//!   first. `closed_edges` adds that wrap edge for callers that opt in.
//!
//! Code cross-refs: `predicates::{cross_product, is_vertex_on_edge}`, `validate`

use std::fmt;
use std::ops::Sub;

use crate::rational::Rational;

use super::predicates::cross_product;

/// Point (or vector) with exact coordinates. Coordinates are expected reduced
/// so that structural equality means geometric equality.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Vertex {
    pub x: Rational,
    pub y: Rational,
}

impl Vertex {
    #[inline]
    pub fn new(x: Rational, y: Rational) -> Self {
        Self { x, y }
    }

    /// Shorthand for integer-over-integer coordinates, reduced.
    pub fn frac(xn: i64, xd: i64, yn: i64, yd: i64) -> Self {
        Self::new(Rational::new(xn, xd), Rational::new(yn, yd))
    }

    #[inline]
    pub fn int(x: i64, y: i64) -> Self {
        Self::new(Rational::from_integer(x), Rational::from_integer(y))
    }
}

impl<'a> Sub<&'a Vertex> for &'a Vertex {
    type Output = Vertex;
    fn sub(self, rhs: &'a Vertex) -> Vertex {
        Vertex::new(&self.x - &rhs.x, &self.y - &rhs.y)
    }
}

impl fmt::Display for Vertex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}

/// Directed segment `v1 → v2`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Edge {
    pub v1: Vertex,
    pub v2: Vertex,
}

impl Edge {
    #[inline]
    pub fn new(v1: Vertex, v2: Vertex) -> Self {
        Self { v1, v2 }
    }

    /// `v2 - v1`.
    #[inline]
    pub fn direction(&self) -> Vertex {
        &self.v2 - &self.v1
    }

    #[inline]
    pub fn is_length_zero(&self) -> bool {
        self.v1 == self.v2
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.v1, self.v2)
    }
}

/// Area unit of the fan triangulation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Triangle {
    pub v1: Vertex,
    pub v2: Vertex,
    pub v3: Vertex,
}

impl Triangle {
    /// `|cross(v2 - v1, v3 - v1)| / 2`.
    pub fn area(&self) -> Rational {
        let a = &self.v2 - &self.v1;
        let b = &self.v3 - &self.v1;
        &cross_product(&a, &b).abs() * &Rational::new(1, 2)
    }
}

/// Ordered vertex list.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Polygon {
    pub vertices: Vec<Vertex>,
}

impl Polygon {
    #[inline]
    pub fn new(vertices: Vec<Vertex>) -> Self {
        Self { vertices }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Edges between consecutive vertices `(i, i + 1)`; no closing edge.
    pub fn edges(&self) -> Vec<Edge> {
        self.vertices
            .windows(2)
            .map(|w| Edge::new(w[0].clone(), w[1].clone()))
            .collect()
    }

    /// `edges()` plus the wrap edge from the last vertex to the first.
    /// Empty for fewer than two vertices.
    pub fn closed_edges(&self) -> Vec<Edge> {
        let mut es = self.edges();
        let n = self.len();
        if n >= 2 {
            es.push(Edge::new(self.vertices[n - 1].clone(), self.vertices[0].clone()));
        }
        es
    }

    pub fn has_length_zero_edges(&self) -> bool {
        self.edges().iter().any(Edge::is_length_zero)
    }

    /// `Σ (x[i+1] + x[i]) * (y[i+1] - y[i]) >= 0` over consecutive pairs.
    ///
    /// The sum does not include the closing pair, so it equals twice the
    /// signed area only when the omitted term vanishes (e.g. the polygon
    /// starts and ends at the same height).
    pub fn orientation_is_positive(&self) -> bool {
        !self.orientation_sum().is_negative()
    }

    pub(crate) fn orientation_sum(&self) -> Rational {
        self.vertices
            .windows(2)
            .map(|w| &(&w[1].x + &w[0].x) * &(&w[1].y - &w[0].y))
            .sum()
    }

    /// Fan from vertex 0: `(v0, v[i-1], v[i])` for `i in 2..n`.
    pub fn triangulate(&self) -> Vec<Triangle> {
        let vs = &self.vertices;
        if vs.len() < 3 {
            return Vec::new();
        }
        (2..vs.len())
            .map(|i| Triangle {
                v1: vs[0].clone(),
                v2: vs[i - 1].clone(),
                v3: vs[i].clone(),
            })
            .collect()
    }

    /// Sum of the fan triangle areas.
    ///
    /// Exact for polygons that are star-shaped from vertex 0 (every convex
    /// polygon is). Other polygons get the unsigned fan total, which
    /// overcounts overlapping triangles.
    pub fn area(&self) -> Rational {
        self.triangulate().iter().map(Triangle::area).sum()
    }
}

impl From<Vec<Vertex>> for Polygon {
    fn from(vertices: Vec<Vertex>) -> Self {
        Self { vertices }
    }
}
