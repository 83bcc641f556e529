/// Entry point of the parser.
///
/// Drives the lexer and dispatches every classified item to the builder
/// according to the active dialect.
pub mod core;

/// Builder state machine.
///
/// Holds the construction cursor (current node, pending subtree, suspended
/// groups and literal buffer) and implements one mutation rule per kind of
/// input.
pub mod builder;
