//! Flat re-export surface for callers that want every operation in one place.
//!
//! Mirrors the module layout one-to-one; prefer the module paths inside this
//! crate.

// Exact arithmetic
pub use crate::error::{ArithError, ParseError, ParseRationalError};
pub use crate::rational::Rational;
// Primitives and predicates
pub use crate::geom::{
    convex_hull, cross_product, edges_touch_or_cross, is_vertex_on_edge, is_vertex_right_of_edge,
    segments_intersect, Edge, Polygon, Triangle, Vertex,
};
// Validation
pub use crate::validate::{
    any_facet_has_zero_length_edge, any_facet_has_zero_length_edge_with, check_solution,
    first_source_conflict, problem_area, source_has_no_edge_crosses_or_touches,
    source_has_no_edge_crosses_or_touches_with, source_is_within_unit_square,
    source_vertices_are_unique, validate, validate_with, CheckCfg, CrossingRule, Problem,
    Solution, ValidationReport,
};
// Text format
pub use crate::format::{parse_problem, parse_solution, write_solution};
// Random inputs
pub use crate::sample::{draw_convex_polygon, draw_solution, ReplayToken, SamplerCfg};
