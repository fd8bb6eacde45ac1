//! Solver error types.

use thiserror::Error;

/// Reasons a `/solve` request cannot produce an answer.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SolveError {
    /// `sample_id` does not name a sample of the requested topic.
    #[error("Unknown sample: '{0}'")]
    UnknownSample(String),

    #[error("data must be a JSON object")]
    DataNotObject,

    /// A field is present but has the wrong type or range.
    #[error("Field '{field}' {reason}")]
    InvalidField { field: String, reason: String },

    #[error("Total number of balls must be > 0")]
    EmptyTotal,

    #[error("A and B must be 2x2 lists")]
    MatricesNotLists,

    #[error("Only 2x2 matrices are supported in this demo")]
    UnsupportedShape,

    /// Finite inputs whose result overflowed to infinity or NaN.
    #[error("Result is out of range: {0} is not finite")]
    ResultOutOfRange(String),
}

impl SolveError {
    /// Whether the request referenced something that does not exist,
    /// as opposed to carrying malformed input.
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::UnknownSample(_))
    }
}
