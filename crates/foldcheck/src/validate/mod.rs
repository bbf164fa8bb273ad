//! Problem area and solution validation.
//!
//! Purpose
//! - Compose the `geom` predicates into the problem-area computation and the
//!   four solution checks: unit-square containment, unique source vertices,
//!   no zero-length facet edge, no touching or crossing source edges.
//!
//! Assumptions and conventions
//! - Inputs are borrowed and never mutated. Results are a `Rational` (area) or
//!   booleans; `check_solution` bundles the booleans into a `ValidationReport`.
//! - The source boundary is an open polyline: consecutive source vertices only.
//! - With `CrossingRule::Reference` the pairwise predicate is directional, so
//!   the scan visits every ordered pair `(i, j)`, `i != j`.
//! - Folding is not simulated; `destination` is carried but never checked.
//!
//! Code cross-refs: `geom::{Polygon, edges_touch_or_cross, segments_intersect}`

mod cfg;
mod check;
mod types;

pub use cfg::{CheckCfg, CrossingRule};
pub use check::{
    any_facet_has_zero_length_edge, any_facet_has_zero_length_edge_with, check_solution,
    first_source_conflict, problem_area, source_has_no_edge_crosses_or_touches,
    source_has_no_edge_crosses_or_touches_with, source_is_within_unit_square,
    source_vertices_are_unique, validate, validate_with, ValidationReport,
};
pub use types::{Problem, Solution};
