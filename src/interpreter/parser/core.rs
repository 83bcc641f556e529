use log::trace;
use logos::Logos;

use crate::{
    ast::{Function, Node},
    error::ParseError,
    interpreter::{dialect::Dialect, lexer::Token, parser::builder::Builder},
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Parses an expression into a tree in a single left-to-right pass.
///
/// Each item produced by the lexer is handed straight to the builder. Items
/// the dialect does not recognise, and characters the lexer cannot classify,
/// are skipped without error.
///
/// # Returns
/// - `Ok(Some(root))` when the input describes a tree.
/// - `Ok(None)` when it contains nothing to evaluate, e.g. `""` or `"()"`.
///
/// # Errors
/// - `MalformedLiteral` for literals such as `1.2.3`.
/// - `UnmatchedClose` / `UnclosedGroup` for unbalanced parentheses.
/// - `UnexpectedSeparator`, `MissingArgument`, `ExpectedArguments` for
///   misused function calls in the extended dialect.
///
/// # Example
/// ```
/// use chaincalc::interpreter::{dialect::Dialect, parser::core::parse_expression};
///
/// let tree = parse_expression("2+(3*4)", Dialect::Extended).unwrap().unwrap();
/// assert_eq!(tree.to_string(), "(2 + (3 * 4))");
///
/// assert!(parse_expression("   ", Dialect::Extended).unwrap().is_none());
/// assert!(parse_expression("(1+2", Dialect::Extended).is_err());
/// ```
pub fn parse_expression(source: &str, dialect: Dialect) -> ParseResult<Option<Node>> {
    let mut builder = Builder::new();
    let mut lexer = Token::lexer(source);

    while let Some(item) = lexer.next() {
        match item {
            Ok(token) => feed(&mut builder, token, dialect)?,
            Err(()) => trace!("ignoring {:?}", lexer.slice()),
        }
    }

    builder.finish()
}

/// Applies the mutation rule for one token.
fn feed(builder: &mut Builder, token: Token, dialect: Dialect) -> ParseResult<()> {
    trace!("scanning {token:?}");

    if token != Token::LParen {
        builder.reject_awaiting_call()?;
    }

    if let Some(op) = token.operator() {
        return builder.apply_operator(op);
    }

    match token {
        Token::Digit(digit) => builder.push_digit(digit),
        Token::LParen if dialect.groups() => builder.open_group(),
        Token::RParen if dialect.groups() => builder.close_group()?,
        Token::Comma if dialect.calls() => builder.separate_arguments()?,
        Token::Name(name) if dialect.calls() => match Function::from_name(&name) {
            Some(function) => builder.await_call(function),
            None => trace!("ignoring name {name:?}"),
        },
        other => trace!("ignoring {other:?} in {dialect} dialect"),
    }

    Ok(())
}
