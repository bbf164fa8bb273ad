//! Error types shared by the exact kernel and the text reader.
//!
//! Geometric checks never fail: a violated condition is a `false` verdict.
//! Only arithmetic faults and malformed input surface as errors.

/// Arithmetic fault raised by the exact kernel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ArithError {
    #[error("division by zero")]
    DivisionByZero,
}

/// Failure to read a single rational coordinate (`a` or `a/b`).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseRationalError {
    #[error("invalid integer {0:?}")]
    InvalidInteger(String),

    #[error("zero denominator")]
    ZeroDenominator,
}

/// Errors while reading problem or solution text. Line numbers are 1-based.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("line {line}: unexpected end of input, expected {expected}")]
    UnexpectedEof { line: usize, expected: &'static str },

    #[error("line {line}: invalid count {text:?}")]
    InvalidCount { line: usize, text: String },

    #[error("line {line}: invalid vertex {text:?}")]
    InvalidVertex { line: usize, text: String },

    #[error("line {line}: invalid coordinate in {text:?}: {source}")]
    InvalidCoordinate {
        line: usize,
        text: String,
        source: ParseRationalError,
    },

    #[error("line {line}: invalid edge {text:?}")]
    InvalidEdge { line: usize, text: String },

    #[error("line {line}: facet declares {declared} vertices but lists {found}")]
    FacetLength {
        line: usize,
        declared: usize,
        found: usize,
    },

    #[error("line {line}: facet index {index} out of range (source has {len} vertices)")]
    FacetIndex { line: usize, index: usize, len: usize },

    #[error("line {line}: trailing input {text:?}")]
    TrailingInput { line: usize, text: String },
}
