/// The evaluator module computes the value of a finished tree.
///
/// Evaluation is a single recursive pass over an owned tree. It never mutates
/// the tree, so the same tree can be evaluated any number of times.
///
/// # Responsibilities
/// - Combines operands according to each node's operator.
/// - Reports operations whose operand slots were left unset.
pub mod evaluator;
/// The lexer module classifies input characters for the builder.
///
/// Items are produced lazily one at a time; the parser consumes each item as
/// soon as it is produced, so no token list is ever collected.
pub mod lexer;
/// The parser module builds the expression tree in one left-to-right pass.
///
/// # Responsibilities
/// - Threads the builder state (current node, pending subtree, suspended
///   groups, literal buffer) through the scan.
/// - Applies one tree mutation per classified item.
/// - Rejects unbalanced groups and malformed literals.
pub mod parser;
/// Grammar variants accepted by the parser.
pub mod dialect;
