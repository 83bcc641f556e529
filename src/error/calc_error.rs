use thiserror::Error;

use crate::error::{ParseError, RuntimeError};

/// Any failure on the way from an input argument to a number.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalcError {
    /// No expression was supplied at all.
    #[error("empty expression")]
    InputAbsent,
    /// The expression could not be built.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// The built tree could not be evaluated.
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}
