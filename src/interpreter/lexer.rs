use logos::Logos;

use crate::ast::Operator;

/// A classified piece of input.
///
/// Digits are produced one character at a time so that the builder owns the
/// literal buffer. Characters that match no variant surface as lexer errors
/// and are skipped by the parser.
#[derive(Logos, Debug, PartialEq, Eq, Clone)]
pub enum Token {
    /// A digit or decimal point, such as `7` or `.`.
    #[regex(r"[0-9.]", |lex| lex.slice().chars().next())]
    Digit(char),
    /// A run of letters, such as `pow`.
    #[regex(r"[a-zA-Z]+", |lex| lex.slice().to_string())]
    Name(String),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `,`
    #[token(",")]
    Comma,
    /// Spaces, tabs and line breaks.
    #[regex(r"[ \t\r\n\f]+", logos::skip)]
    Ignored,
}

impl Token {
    /// The operator this token denotes, if it is one of `+ - * /`.
    #[must_use]
    pub const fn operator(&self) -> Option<Operator> {
        match self {
            Self::Plus => Some(Operator::Add),
            Self::Minus => Some(Operator::Subtract),
            Self::Star => Some(Operator::Multiply),
            Self::Slash => Some(Operator::Divide),
            _ => None,
        }
    }
}
