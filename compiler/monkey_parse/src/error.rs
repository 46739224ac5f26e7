//! Parse error types.
//!
//! Display output is the plain message; callers that want a location prefix
//! resolve [`ParseError::span`] against the source themselves.

use monkey_ir::{Span, TokenKind};
use thiserror::Error;

/// What went wrong.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ParseErrorKind {
    /// A required token was missing.
    #[error("expected next token to be {expected}, got {found} instead")]
    UnexpectedToken {
        expected: TokenKind,
        found: TokenKind,
    },
    /// The token cannot start an expression.
    #[error("no prefix parse function for {found} found")]
    NoPrefixParse { found: TokenKind },
    /// An integer literal does not fit in a signed 64-bit integer.
    #[error("could not parse {literal:?} as integer")]
    InvalidInteger { literal: String },
}

/// A syntax error and the span of the token it was reported at.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{kind}")]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub span: Span,
}

impl ParseError {
    pub fn new(kind: ParseErrorKind, span: Span) -> Self {
        ParseError { kind, span }
    }

    pub fn unexpected_token(expected: TokenKind, found: TokenKind, span: Span) -> Self {
        ParseError::new(ParseErrorKind::UnexpectedToken { expected, found }, span)
    }

    pub fn no_prefix_parse(found: TokenKind, span: Span) -> Self {
        ParseError::new(ParseErrorKind::NoPrefixParse { found }, span)
    }

    pub fn invalid_integer(literal: &str, span: Span) -> Self {
        ParseError::new(
            ParseErrorKind::InvalidInteger {
                literal: literal.to_owned(),
            },
            span,
        )
    }
}
