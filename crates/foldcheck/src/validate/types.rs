//! Problem and solution entities as handed over by the reader.

use crate::geom::{Edge, Polygon, Vertex};

/// Signed union of polygons plus a free-standing skeleton.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Problem {
    /// Polygons whose orientation sum is non-negative.
    pub pos_polys: Vec<Polygon>,
    /// Remaining polygons; their area is subtracted.
    pub neg_polys: Vec<Polygon>,
    /// Not validated geometrically.
    pub skeleton: Vec<Edge>,
}

impl Problem {
    /// Partition `polygons` by `Polygon::orientation_is_positive`, keeping
    /// input order within each side.
    pub fn from_polygons(polygons: Vec<Polygon>, skeleton: Vec<Edge>) -> Self {
        let (pos_polys, neg_polys): (Vec<Polygon>, Vec<Polygon>) = polygons
            .into_iter()
            .partition(Polygon::orientation_is_positive);
        Self {
            pos_polys,
            neg_polys,
            skeleton,
        }
    }
}

/// Claimed flat source shape, its facet partition and folded destination.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Solution {
    pub source: Vec<Vertex>,
    /// Facet polygons with vertices copied out of `source`.
    pub facets: Vec<Polygon>,
    /// Same length as `source`; not cross-checked against it.
    pub destination: Vec<Vertex>,
}

impl Solution {
    pub fn new(source: Vec<Vertex>, facets: Vec<Polygon>, destination: Vec<Vertex>) -> Self {
        Self {
            source,
            facets,
            destination,
        }
    }

    /// Open polyline through `source`: `(i - 1, i)` pairs, no closing edge.
    pub fn source_edges(&self) -> Vec<Edge> {
        self.source
            .windows(2)
            .map(|w| Edge::new(w[0].clone(), w[1].clone()))
            .collect()
    }
}
