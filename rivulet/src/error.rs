//! Error reporting for stream construction and runs.

use std::fmt;

/// The closed set of errors a stream can surface.
///
/// User-supplied logic (predicates, mappers, comparators, reducers) is never
/// caught: a panic there unwinds through the run and the partially
/// accumulated state is dropped with it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A terminal method was invoked on a handle whose chain already ran.
    StreamClosed,
    /// A range was requested with its minimum above its maximum.
    InvalidRange {
        /// The offending lower bound.
        min: i64,
        /// The offending upper bound.
        max: i64,
    },
    /// A range was requested with a zero or non-ascending step.
    InvalidStep {
        /// The offending step.
        step: i64,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Error::StreamClosed => write!(f, "stream handles cannot be rerun once consumed"),
            Error::InvalidRange { min, max } => {
                write!(f, "range minimum {} must not exceed maximum {}", min, max)
            }
            Error::InvalidStep { step } => {
                write!(f, "range step {} must be a positive increment", step)
            }
        }
    }
}

impl std::error::Error for Error {}
