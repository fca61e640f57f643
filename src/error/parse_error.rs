use crate::interpreter::lexer::TokenKind;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while parsing a token stream.
///
/// The parser collects these instead of stopping at the first failure, so a
/// single run can report several of them.
pub enum ParseError {
    /// The parser required a specific token kind and found another.
    UnexpectedToken {
        /// The kind the grammar required at this point.
        expected: TokenKind,
        /// The kind that was actually found.
        got:      TokenKind,
    },
    /// No expression can start with the current token.
    NoPrefixParseFn {
        /// The kind that has no prefix handler.
        kind: TokenKind,
    },
    /// An integer literal did not fit into a 64-bit integer.
    BadIntegerLiteral {
        /// The offending literal text.
        literal: String,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedToken { expected, got } => {
                write!(f, "expected next token to be '{expected}', got '{got}' instead")
            },
            Self::NoPrefixParseFn { kind } => {
                write!(f, "no prefix parse function for '{kind}' found")
            },
            Self::BadIntegerLiteral { literal } => {
                write!(f, "could not parse '{literal}' as integer")
            },
        }
    }
}

impl std::error::Error for ParseError {}
