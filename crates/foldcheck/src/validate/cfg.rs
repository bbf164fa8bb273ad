//! Check configuration.
//!
//! Defaults reproduce the reference checker exactly. The alternatives exist
//! for callers who want a symmetric crossing test or closed facets.

/// Which pairwise predicate decides that two source edges conflict.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CrossingRule {
    /// `geom::edges_touch_or_cross` on every ordered pair: an endpoint on the
    /// other edge's line, or both endpoints strictly to its right.
    #[default]
    Reference,
    /// `geom::segments_intersect`: exact closed-segment intersection that
    /// tolerates a single shared endpoint.
    Exact,
}

/// Solution check configuration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CheckCfg {
    pub crossing: CrossingRule,
    /// Also test the wrap edge (last → first vertex) of every facet for zero
    /// length. Off by default: facet edges are consecutive pairs only.
    pub close_facets: bool,
}

impl CheckCfg {
    /// Exact crossing rule, closed facets.
    pub fn strict() -> Self {
        Self {
            crossing: CrossingRule::Exact,
            close_facets: true,
        }
    }
}
