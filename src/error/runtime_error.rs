use thiserror::Error;

use crate::ast::{Operand, Operator};

/// Represents all errors that can occur during evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuntimeError {
    /// An operation was reached with one of its operand slots unset, as in
    /// `+1` or `2*`.
    #[error("Incomplete expression: {operand} operand of '{operator}' is missing.")]
    IncompleteExpression {
        /// The operation missing an operand.
        operator: Operator,
        /// Which side is missing.
        operand:  Operand,
    },
}
