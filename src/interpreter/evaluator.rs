/// Core evaluation logic.
///
/// Declares the `Evaluate` capability and implements it for every node kind.
pub mod core;

/// Binary operator evaluation.
///
/// Combines two evaluated operands according to an operator.
pub mod binary;
