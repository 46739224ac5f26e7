//! Parser for Monkey.
//!
//! A Pratt (operator-precedence) parser over a pull-based [`Lexer`]. The
//! parser keeps the current token and one token of lookahead, and dispatches
//! on the current token's kind for prefix rules and on the lookahead's kind
//! for infix rules.
//!
//! Syntax errors do not stop parsing. Each one is recorded, the statement
//! being built is dropped, and parsing resumes with the next token, so a
//! single pass reports as many errors as possible. Check
//! [`ParseOutput::errors`] before trusting the program to be complete.

mod error;
mod grammar;
mod precedence;

pub use error::{ParseError, ParseErrorKind};
pub use precedence::Precedence;

use monkey_ir::{Program, Token, TokenKind};
use monkey_lexer::Lexer;
use tracing::{debug, trace};

/// Result of parsing: the (possibly partial) program and every error seen.
#[derive(Clone, Debug, Default)]
pub struct ParseOutput {
    pub program: Program,
    pub errors: Vec<ParseError>,
}

impl ParseOutput {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Error messages in the order they were reported.
    pub fn error_messages(&self) -> Vec<String> {
        self.errors.iter().map(ToString::to_string).collect()
    }
}

/// Pratt parser state.
pub struct Parser<'l> {
    lexer: &'l mut Lexer,
    cur: Token,
    peek: Token,
    errors: Vec<ParseError>,
}

impl<'l> Parser<'l> {
    pub fn new(lexer: &'l mut Lexer) -> Self {
        let cur = lexer.next_token();
        let peek = lexer.next_token();
        Parser {
            lexer,
            cur,
            peek,
            errors: Vec::new(),
        }
    }

    /// Parse statements until end of input.
    pub fn parse_program(mut self) -> ParseOutput {
        let mut statements = Vec::new();
        while !self.cur_is(TokenKind::Eof) {
            if let Some(stmt) = self.parse_statement() {
                statements.push(stmt);
            }
            self.next_token();
        }
        debug!(
            statements = statements.len(),
            errors = self.errors.len(),
            "parse_program complete"
        );
        ParseOutput {
            program: Program::new(statements),
            errors: self.errors,
        }
    }

    // Token handling

    fn next_token(&mut self) {
        let next = self.lexer.next_token();
        self.cur = std::mem::replace(&mut self.peek, next);
        trace!(
            kind = %self.cur.kind,
            literal = %self.cur.literal,
            span_start = self.cur.span.start,
            span_end = self.cur.span.end,
            "advance"
        );
    }

    #[inline]
    fn cur_is(&self, kind: TokenKind) -> bool {
        self.cur.kind == kind
    }

    #[inline]
    fn peek_is(&self, kind: TokenKind) -> bool {
        self.peek.kind == kind
    }

    /// Advance if the lookahead is `kind`; otherwise record an error and
    /// stay put.
    fn expect_peek(&mut self, kind: TokenKind) -> bool {
        if self.peek_is(kind) {
            self.next_token();
            true
        } else {
            self.peek_error(kind);
            false
        }
    }

    fn peek_error(&mut self, expected: TokenKind) {
        let error = ParseError::unexpected_token(expected, self.peek.kind, self.peek.span);
        self.push_error(error);
    }

    fn push_error(&mut self, error: ParseError) {
        debug!(%error, "syntax error");
        self.errors.push(error);
    }

    #[inline]
    fn peek_precedence(&self) -> Precedence {
        Precedence::of(self.peek.kind)
    }

    #[inline]
    fn cur_precedence(&self) -> Precedence {
        Precedence::of(self.cur.kind)
    }
}

/// Parse `source` into a program.
pub fn parse(source: &str) -> ParseOutput {
    let mut lexer = Lexer::new(source);
    Parser::new(&mut lexer).parse_program()
}

#[cfg(test)]
mod tests;
