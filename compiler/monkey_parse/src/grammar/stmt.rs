//! Statement parsing.

use monkey_ir::{Block, ExprStmt, Ident, LetStmt, ReturnStmt, Stmt, TokenKind};
use tracing::trace;

use crate::{ParseError, Parser, Precedence};

impl Parser<'_> {
    /// Parse the statement starting at the current token.
    ///
    /// On return the current token is the last token of the statement.
    pub(crate) fn parse_statement(&mut self) -> Option<Stmt> {
        trace!(kind = %self.cur.kind, "parse_statement");
        match self.cur.kind {
            TokenKind::Let => self.parse_let_statement().map(Stmt::Let),
            TokenKind::Return => self.parse_return_statement().map(Stmt::Return),
            _ => self.parse_expression_statement().map(Stmt::Expr),
        }
    }

    /// `let <ident> = <expr>;`
    fn parse_let_statement(&mut self) -> Option<LetStmt> {
        let token = self.cur.clone();
        if !self.expect_peek(TokenKind::Ident) {
            return None;
        }
        let name = Ident::from_token(self.cur.clone());
        if !self.expect_peek(TokenKind::Assign) {
            return None;
        }
        self.next_token();
        let value = self.parse_expression(Precedence::Lowest)?;
        if self.peek_is(TokenKind::Semicolon) {
            self.next_token();
        }
        Some(LetStmt { token, name, value })
    }

    /// `return <expr>;`
    fn parse_return_statement(&mut self) -> Option<ReturnStmt> {
        let token = self.cur.clone();
        self.next_token();
        let value = self.parse_expression(Precedence::Lowest)?;
        if self.peek_is(TokenKind::Semicolon) {
            self.next_token();
        }
        Some(ReturnStmt { token, value })
    }

    fn parse_expression_statement(&mut self) -> Option<ExprStmt> {
        let token = self.cur.clone();
        let expr = self.parse_expression(Precedence::Lowest)?;
        if self.peek_is(TokenKind::Semicolon) {
            self.next_token();
        }
        Some(ExprStmt { token, expr })
    }

    /// `{ <statements> }`; the current token is the opening brace.
    ///
    /// Reaching end of input before `}` records an error but still returns
    /// the statements parsed so far.
    pub(crate) fn parse_block(&mut self) -> Block {
        let token = self.cur.clone();
        let mut statements = Vec::new();
        self.next_token();
        while !self.cur_is(TokenKind::RBrace) && !self.cur_is(TokenKind::Eof) {
            if let Some(stmt) = self.parse_statement() {
                statements.push(stmt);
            }
            self.next_token();
        }
        if self.cur_is(TokenKind::Eof) {
            let error =
                ParseError::unexpected_token(TokenKind::RBrace, TokenKind::Eof, self.cur.span);
            self.push_error(error);
        }
        Block { token, statements }
    }
}
