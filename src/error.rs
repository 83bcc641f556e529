/// Parsing errors.
///
/// Defines the errors the single-pass builder raises while scanning an
/// expression: malformed literals, unbalanced groups and misused function
/// calls.
pub mod parse_error;
/// Runtime errors.
///
/// Contains the errors raised while evaluating a finished tree. Arithmetic
/// edge cases such as division by zero are not errors; they follow `f64`
/// semantics.
pub mod runtime_error;
/// Top-level errors.
///
/// Combines parse and runtime failures with the absence of any input.
pub mod calc_error;

pub use calc_error::CalcError;
pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
