use thiserror::Error;

/// A problem instance that violates the structural contract of the solver.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("network must have at least one node")]
    NoNodes,

    #[error("{nodes} nodes exceeds the limit of {max}")]
    TooManyNodes { nodes: usize, max: usize },

    #[error("pipe costs and discount can overflow a 64-bit total")]
    CostOverflow,

    #[error("declared {declared} pipes but {actual} were supplied")]
    EdgeCount { declared: usize, actual: usize },

    #[error("pipe {index} endpoint {node} is outside 1..={nodes}")]
    NodeOutOfRange {
        index: usize,
        node: usize,
        nodes: usize,
    },
}

/// Failure to read a problem or an expected answer from its text form.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("input is empty")]
    Empty,

    #[error("line {line}: expected {expected} fields, found {found}")]
    FieldCount {
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("line {line}: '{token}' is not an integer")]
    NotInteger { line: usize, token: String },

    #[error("line {line}: value {value} must not be negative")]
    Negative { line: usize, value: i64 },

    #[error("expected {expected} pipe lines, input ended after {found}")]
    MissingPipes { expected: usize, found: usize },

    #[error("line {0}: unexpected data after the last pipe")]
    TrailingData(usize),

    #[error(transparent)]
    Input(#[from] InputError),
}
