//! Exact checker for fold-puzzle problems and solutions.
//!
//! Layout
//! - `rational`: canonical arbitrary-precision fractions; all arithmetic.
//! - `geom`: vertices, edges, polygons and the orientation predicates.
//! - `validate`: problem area and the solution self-consistency checks.
//! - `format`: line-oriented text reader (and solution writer).
//! - `sample`: seeded random convex inputs for tests and benches.
//!
//! No floating point is used anywhere. Folding itself is not simulated: a
//! solution is only checked for a well-formed source shape.

pub mod api;
pub mod error;
pub mod format;
pub mod geom;
pub mod rational;
pub mod sample;
pub mod validate;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use error::{ArithError, ParseError, ParseRationalError};
pub use rational::Rational;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::format::{parse_problem, parse_solution};
    pub use crate::geom::{Edge, Polygon, Triangle, Vertex};
    pub use crate::rational::Rational;
    pub use crate::validate::{
        check_solution, problem_area, validate, validate_with, CheckCfg, CrossingRule, Problem,
        Solution, ValidationReport,
    };
}
