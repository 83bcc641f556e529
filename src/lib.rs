//! # chaincalc
//!
//! chaincalc evaluates a single arithmetic expression. The expression is turned
//! into a tree in one left-to-right pass over its characters and the tree is
//! then evaluated once.
//!
//! There is no operator precedence: every operator wraps everything to its
//! left, so `2+3*4` is `(2+3)*4`. Parentheses are the only way to change the
//! order, and `pow(a, b)` raises `a` to the power `b`.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc, clippy::multiple_crate_versions)]

use log::debug;

use crate::{
    error::CalcError,
    interpreter::{dialect::Dialect, evaluator::core::Evaluate, parser::core::parse_expression},
};

/// Defines the expression tree.
///
/// This module declares `Node`, the tree the parser builds and the evaluator
/// walks, along with operator, operand-side and function tags.
///
/// # Responsibilities
/// - Represents literals and binary operations with exclusively owned
///   operands.
/// - Allows operand slots to be unset while a tree is under construction.
/// - Renders trees in fully parenthesised form for diagnostics.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// # Responsibilities
/// - Defines error enums for every failure mode (input, parser, evaluator).
/// - Supports integration with standard error handling traits.
pub mod error;
/// Ties together classification, tree building and evaluation.
///
/// # Responsibilities
/// - Exposes the dialect selection.
/// - Provides the parser and evaluator entry points.
pub mod interpreter;

/// Parses and evaluates `source`.
///
/// Returns `Ok(None)` when the input holds nothing to evaluate, for example an
/// empty string or only whitespace.
///
/// # Errors
/// Returns an error if the expression cannot be built or if the built tree is
/// missing an operand.
///
/// # Examples
/// ```
/// use chaincalc::{get_result, interpreter::dialect::Dialect};
///
/// // No precedence: evaluated as (2+3)*4.
/// assert_eq!(get_result("2+3*4", Dialect::Extended).unwrap(), Some(20.0));
/// assert_eq!(get_result("pow(2,3)+1", Dialect::Extended).unwrap(), Some(9.0));
///
/// // Nothing to evaluate.
/// assert_eq!(get_result("", Dialect::Extended).unwrap(), None);
///
/// // Unbalanced parentheses.
/// assert!(get_result("(1+2", Dialect::Extended).is_err());
/// ```
pub fn get_result(source: &str, dialect: Dialect) -> Result<Option<f64>, CalcError> {
    let Some(root) = parse_expression(source, dialect)? else {
        debug!("nothing to evaluate in {source:?}");
        return Ok(None);
    };

    Ok(Some(root.evaluate()?))
}

/// Evaluates an optional command-line argument.
///
/// A missing argument is reported as [`CalcError::InputAbsent`] without
/// building a tree. A present argument that holds nothing to evaluate is not
/// an error and yields `Ok(None)`.
///
/// # Examples
/// ```
/// use chaincalc::{error::CalcError, interpreter::dialect::Dialect, run};
///
/// assert_eq!(run(None, Dialect::Grouped), Err(CalcError::InputAbsent));
/// assert_eq!(run(Some("  "), Dialect::Grouped), Ok(None));
/// ```
pub fn run(argument: Option<&str>, dialect: Dialect) -> Result<Option<f64>, CalcError> {
    let source = argument.ok_or(CalcError::InputAbsent)?;
    debug!("evaluating {source:?} with the {dialect} dialect");
    get_result(source, dialect)
}
