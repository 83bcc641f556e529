use std::num::ParseFloatError;

use thiserror::Error;

use crate::ast::Function;

/// Represents all errors that can occur while building an expression tree.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The accumulated literal is not a valid number, e.g. `1.2.3` or `.`.
    #[error("Malformed literal '{literal}'.")]
    MalformedLiteral {
        /// The literal text as scanned.
        literal: String,
        /// Why the conversion failed.
        #[source]
        source:  ParseFloatError,
    },
    /// A `)` appeared with no open group to close.
    #[error("Closing parenthesis ')' has no matching '('.")]
    UnmatchedClose,
    /// The input ended while groups were still open.
    #[error("Expected closing parenthesis ')' but none found ({depth} group(s) left open).")]
    UnclosedGroup {
        /// Number of groups still open.
        depth: usize,
    },
    /// A `,` appeared outside a function call, or twice in one call.
    #[error("Argument separator ',' is only allowed once inside a function call.")]
    UnexpectedSeparator,
    /// A function call was closed before its second argument started.
    #[error("Function '{function}' expects two arguments separated by ','.")]
    MissingArgument {
        /// The function being called.
        function: Function,
    },
    /// A function name was not followed by `(`.
    #[error("Function '{function}' must be followed by '('.")]
    ExpectedArguments {
        /// The function named.
        function: Function,
    },
}
