//! Expression parsing (Pratt core and per-construct rules).

use std::rc::Rc;

use monkey_ir::{
    BoolLit, CallExpr, Expr, FunctionLit, Ident, IfExpr, InfixExpr, IntLit, PrefixExpr,
    PrefixOp, StrLit, TokenKind,
};
use monkey_stack::ensure_sufficient_stack;
use tracing::trace;

use crate::precedence::match_infix_op;
use crate::{ParseError, Parser, Precedence};

impl Parser<'_> {
    /// Parse an expression whose operators bind tighter than `precedence`.
    ///
    /// Starts at the current token and leaves the current token on the last
    /// token of the expression. An infix rule only applies when the
    /// lookahead binds strictly tighter, so equal-precedence operators
    /// associate to the left.
    pub(crate) fn parse_expression(&mut self, precedence: Precedence) -> Option<Expr> {
        ensure_sufficient_stack(|| {
            let mut left = self.parse_prefix()?;
            while !self.peek_is(TokenKind::Semicolon) && precedence < self.peek_precedence() {
                trace!(kind = %self.peek.kind, "infix dispatch");
                left = match self.peek.kind {
                    TokenKind::LParen => {
                        self.next_token();
                        self.parse_call(left)?
                    }
                    kind if match_infix_op(kind).is_some() => {
                        self.next_token();
                        self.parse_infix(left)?
                    }
                    _ => return Some(left),
                };
            }
            Some(left)
        })
    }

    /// Prefix dispatch on the current token.
    fn parse_prefix(&mut self) -> Option<Expr> {
        trace!(kind = %self.cur.kind, "prefix dispatch");
        match self.cur.kind {
            TokenKind::Ident => Some(Expr::Ident(Ident::from_token(self.cur.clone()))),
            TokenKind::Int => self.parse_integer_literal(),
            TokenKind::String => Some(Expr::Str(StrLit {
                token: self.cur.clone(),
                value: self.cur.literal.clone(),
            })),
            TokenKind::True | TokenKind::False => Some(Expr::Bool(BoolLit {
                token: self.cur.clone(),
                value: self.cur_is(TokenKind::True),
            })),
            TokenKind::Bang => self.parse_prefix_expression(PrefixOp::Not),
            TokenKind::Minus => self.parse_prefix_expression(PrefixOp::Neg),
            TokenKind::LParen => self.parse_grouped_expression(),
            TokenKind::If => self.parse_if_expression(),
            TokenKind::Function => self.parse_function_literal(),
            found => {
                let error = ParseError::no_prefix_parse(found, self.cur.span);
                self.push_error(error);
                None
            }
        }
    }

    fn parse_integer_literal(&mut self) -> Option<Expr> {
        let token = self.cur.clone();
        match token.literal.parse::<i64>() {
            Ok(value) => Some(Expr::Int(IntLit { token, value })),
            Err(_) => {
                let error = ParseError::invalid_integer(&token.literal, token.span);
                self.push_error(error);
                None
            }
        }
    }

    fn parse_prefix_expression(&mut self, op: PrefixOp) -> Option<Expr> {
        let token = self.cur.clone();
        self.next_token();
        let operand = self.parse_expression(Precedence::Prefix)?;
        Some(Expr::Prefix(PrefixExpr {
            token,
            op,
            operand: Box::new(operand),
        }))
    }

    /// The current token is the operator; `left` is already parsed.
    fn parse_infix(&mut self, left: Expr) -> Option<Expr> {
        let token = self.cur.clone();
        let op = match_infix_op(token.kind)?;
        let precedence = self.cur_precedence();
        self.next_token();
        let right = self.parse_expression(precedence)?;
        Some(Expr::Infix(InfixExpr {
            token,
            op,
            left: Box::new(left),
            right: Box::new(right),
        }))
    }

    /// `( <expr> )`
    fn parse_grouped_expression(&mut self) -> Option<Expr> {
        self.next_token();
        let expr = self.parse_expression(Precedence::Lowest)?;
        self.expect_peek(TokenKind::RParen).then_some(expr)
    }

    /// `if (<cond>) { ... } [else { ... }]`
    fn parse_if_expression(&mut self) -> Option<Expr> {
        let token = self.cur.clone();
        if !self.expect_peek(TokenKind::LParen) {
            return None;
        }
        self.next_token();
        let condition = self.parse_expression(Precedence::Lowest)?;
        if !self.expect_peek(TokenKind::RParen) || !self.expect_peek(TokenKind::LBrace) {
            return None;
        }
        let consequence = self.parse_block();

        let alternative = if self.peek_is(TokenKind::Else) {
            self.next_token();
            if !self.expect_peek(TokenKind::LBrace) {
                return None;
            }
            Some(self.parse_block())
        } else {
            None
        };

        Some(Expr::If(IfExpr {
            token,
            condition: Box::new(condition),
            consequence,
            alternative,
        }))
    }

    /// `fn(<params>) { <body> }`
    fn parse_function_literal(&mut self) -> Option<Expr> {
        let token = self.cur.clone();
        if !self.expect_peek(TokenKind::LParen) {
            return None;
        }
        let parameters = self.parse_function_parameters()?;
        if !self.expect_peek(TokenKind::LBrace) {
            return None;
        }
        let body = self.parse_block();
        Some(Expr::Function(Rc::new(FunctionLit {
            token,
            parameters,
            body,
        })))
    }

    /// Comma-separated identifiers; the current token is `(`.
    fn parse_function_parameters(&mut self) -> Option<Vec<Ident>> {
        let mut params = Vec::new();
        if self.peek_is(TokenKind::RParen) {
            self.next_token();
            return Some(params);
        }

        if !self.expect_peek(TokenKind::Ident) {
            return None;
        }
        params.push(Ident::from_token(self.cur.clone()));
        while self.peek_is(TokenKind::Comma) {
            self.next_token();
            if !self.expect_peek(TokenKind::Ident) {
                return None;
            }
            params.push(Ident::from_token(self.cur.clone()));
        }

        self.expect_peek(TokenKind::RParen).then_some(params)
    }

    /// `<function>(<args>)`; the current token is `(`.
    fn parse_call(&mut self, function: Expr) -> Option<Expr> {
        let token = self.cur.clone();
        let arguments = self.parse_call_arguments()?;
        Some(Expr::Call(CallExpr {
            token,
            function: Box::new(function),
            arguments,
        }))
    }

    fn parse_call_arguments(&mut self) -> Option<Vec<Expr>> {
        let mut args = Vec::new();
        if self.peek_is(TokenKind::RParen) {
            self.next_token();
            return Some(args);
        }

        self.next_token();
        args.push(self.parse_expression(Precedence::Lowest)?);
        while self.peek_is(TokenKind::Comma) {
            self.next_token();
            self.next_token();
            args.push(self.parse_expression(Precedence::Lowest)?);
        }

        self.expect_peek(TokenKind::RParen).then_some(args)
    }
}
