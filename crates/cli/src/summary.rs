//! Serializable summaries of a problem or solution check.

use foldcheck::validate::{
    check_solution, problem_area, CheckCfg, CrossingRule, Problem, Solution,
};
use serde::Serialize;

/// Name of a crossing rule as it appears in summaries and sidecars.
pub fn rule_name(rule: CrossingRule) -> &'static str {
    match rule {
        CrossingRule::Reference => "reference",
        CrossingRule::Exact => "exact",
    }
}

#[derive(Debug, Serialize)]
pub struct ProblemSummary {
    pub file: String,
    /// Exact area as `n/d` (or `n`).
    pub area: String,
    pub positive_polygons: usize,
    pub negative_polygons: usize,
    pub skeleton_edges: usize,
}

impl ProblemSummary {
    pub fn new(file: &str, problem: &Problem) -> Self {
        Self {
            file: file.to_string(),
            area: problem_area(problem).to_string(),
            positive_polygons: problem.pos_polys.len(),
            negative_polygons: problem.neg_polys.len(),
            skeleton_edges: problem.skeleton.len(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SolutionSummary {
    pub file: String,
    pub vertices: usize,
    pub facets: usize,
    pub crossing_rule: &'static str,
    pub close_facets: bool,
    pub within_unit_square: bool,
    pub vertices_unique: bool,
    pub zero_length_facet_edge: bool,
    /// First conflicting pair of source edge indices.
    pub edge_conflict: Option<(usize, usize)>,
    pub valid: bool,
}

impl SolutionSummary {
    pub fn new(file: &str, solution: &Solution, cfg: CheckCfg) -> Self {
        let report = check_solution(solution, cfg);
        Self {
            file: file.to_string(),
            vertices: solution.source.len(),
            facets: solution.facets.len(),
            crossing_rule: rule_name(cfg.crossing),
            close_facets: cfg.close_facets,
            within_unit_square: report.within_unit_square,
            vertices_unique: report.vertices_unique,
            zero_length_facet_edge: report.has_zero_length_facet_edge,
            edge_conflict: report.edge_conflict,
            valid: report.is_valid(),
        }
    }

    /// Human-readable lines, one per check, verdict last.
    pub fn lines(&self) -> Vec<String> {
        let conflict = match self.edge_conflict {
            Some((i, j)) => format!("edges {i} and {j} touch or cross"),
            None => "none".to_string(),
        };
        vec![
            format!("within unit square: {}", self.within_unit_square),
            format!("vertices unique: {}", self.vertices_unique),
            format!("zero-length facet edge: {}", self.zero_length_facet_edge),
            format!("edge conflict ({}): {}", self.crossing_rule, conflict),
            format!("valid: {}", self.valid),
        ]
    }
}
