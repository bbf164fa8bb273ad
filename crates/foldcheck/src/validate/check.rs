//! Problem area and solution self-consistency checks.
//!
//! Every check is a total function of its input: a failed condition is
//! `false`, never an error. Failures are logged at `debug` with the offending
//! indices so that a caller running with verbose logging can see why.

use tracing::debug;

use crate::geom::{edges_touch_or_cross, segments_intersect, Edge, Polygon};
use crate::rational::Rational;

use super::cfg::{CheckCfg, CrossingRule};
use super::types::{Problem, Solution};

/// Σ area(pos_polys) − Σ area(neg_polys).
pub fn problem_area(problem: &Problem) -> Rational {
    let pos: Rational = problem.pos_polys.iter().map(Polygon::area).sum();
    problem
        .neg_polys
        .iter()
        .fold(pos, |acc, p| &acc - &p.area())
}

/// Every source vertex has `0 <= x <= 1` and `0 <= y <= 1`.
pub fn source_is_within_unit_square(solution: &Solution) -> bool {
    let mut ok = true;
    for (i, v) in solution.source.iter().enumerate() {
        let inside = v.x.ge_int(0) && v.x.le_int(1) && v.y.ge_int(0) && v.y.le_int(1);
        if !inside {
            debug!(index = i, vertex = %v, "source vertex outside unit square");
            ok = false;
        }
    }
    ok
}

/// No two distinct source indices hold the same vertex.
pub fn source_vertices_are_unique(solution: &Solution) -> bool {
    let src = &solution.source;
    for (i, a) in src.iter().enumerate() {
        for (j, b) in src.iter().enumerate() {
            if i != j && a == b {
                debug!(first = i, second = j, vertex = %a, "duplicate source vertex");
                return false;
            }
        }
    }
    true
}

/// Some facet has two consecutive equal vertices.
pub fn any_facet_has_zero_length_edge(solution: &Solution) -> bool {
    any_facet_has_zero_length_edge_with(solution, CheckCfg::default())
}

pub fn any_facet_has_zero_length_edge_with(solution: &Solution, cfg: CheckCfg) -> bool {
    solution.facets.iter().enumerate().any(|(k, f)| {
        let edges = if cfg.close_facets {
            f.closed_edges()
        } else {
            f.edges()
        };
        let hit = edges.iter().position(Edge::is_length_zero);
        if let Some(i) = hit {
            debug!(facet = k, edge = i, "facet has a zero-length edge");
        }
        hit.is_some()
    })
}

/// No ordered pair of distinct source polyline edges touches or crosses.
pub fn source_has_no_edge_crosses_or_touches(solution: &Solution) -> bool {
    source_has_no_edge_crosses_or_touches_with(solution, CheckCfg::default())
}

pub fn source_has_no_edge_crosses_or_touches_with(solution: &Solution, cfg: CheckCfg) -> bool {
    first_source_conflict(solution, cfg).is_none()
}

/// First ordered pair `(i, j)` of source edge indices that conflict under
/// `cfg.crossing`, scanning `i` then `j`.
pub fn first_source_conflict(solution: &Solution, cfg: CheckCfg) -> Option<(usize, usize)> {
    let edges = solution.source_edges();
    let conflict = |a: &Edge, b: &Edge| match cfg.crossing {
        CrossingRule::Reference => edges_touch_or_cross(a, b),
        CrossingRule::Exact => segments_intersect(a, b),
    };
    for (i, a) in edges.iter().enumerate() {
        for (j, b) in edges.iter().enumerate() {
            if i != j && conflict(a, b) {
                debug!(first = i, second = j, edge_a = %a, edge_b = %b, "source edges touch or cross");
                return Some((i, j));
            }
        }
    }
    None
}

/// All four checks with the default configuration.
pub fn validate(solution: &Solution) -> bool {
    validate_with(solution, CheckCfg::default())
}

/// Short-circuits in order; the quadratic crossing scan runs last.
pub fn validate_with(solution: &Solution, cfg: CheckCfg) -> bool {
    source_is_within_unit_square(solution)
        && source_vertices_are_unique(solution)
        && !any_facet_has_zero_length_edge_with(solution, cfg)
        && source_has_no_edge_crosses_or_touches_with(solution, cfg)
}

/// Per-check outcome of a solution, for callers that report what failed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValidationReport {
    pub within_unit_square: bool,
    pub vertices_unique: bool,
    pub has_zero_length_facet_edge: bool,
    /// First conflicting ordered pair of source edge indices.
    pub edge_conflict: Option<(usize, usize)>,
}

impl ValidationReport {
    #[inline]
    pub fn no_edge_crosses_or_touches(&self) -> bool {
        self.edge_conflict.is_none()
    }

    pub fn is_valid(&self) -> bool {
        self.within_unit_square
            && self.vertices_unique
            && !self.has_zero_length_facet_edge
            && self.no_edge_crosses_or_touches()
    }
}

/// Run every check (no short-circuit) and collect the outcomes.
pub fn check_solution(solution: &Solution, cfg: CheckCfg) -> ValidationReport {
    ValidationReport {
        within_unit_square: source_is_within_unit_square(solution),
        vertices_unique: source_vertices_are_unique(solution),
        has_zero_length_facet_edge: any_facet_has_zero_length_edge_with(solution, cfg),
        edge_conflict: first_source_conflict(solution, cfg),
    }
}
