use std::fmt;

use clap::ValueEnum;

/// Selects which structural characters the parser honours.
///
/// Operators and literals behave the same in every dialect: each new operator
/// wraps everything to its left, so evaluation chains left to right with no
/// precedence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Dialect {
    /// Parentheses, separators and names are ignored.
    Sequential,
    /// Parentheses group; separators and names are ignored.
    Grouped,
    /// Parentheses group and `pow(a, b)` is available.
    #[default]
    Extended,
}

impl Dialect {
    /// Whether `(` and `)` open and close groups.
    #[must_use]
    pub const fn groups(self) -> bool {
        matches!(self, Self::Grouped | Self::Extended)
    }

    /// Whether function names and `,` are recognised.
    #[must_use]
    pub const fn calls(self) -> bool {
        matches!(self, Self::Extended)
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Sequential => "sequential",
            Self::Grouped => "grouped",
            Self::Extended => "extended",
        };
        write!(f, "{name}")
    }
}
