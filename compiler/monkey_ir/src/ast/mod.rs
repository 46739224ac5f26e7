//! AST node types.
//!
//! The node set is closed: statements are [`Stmt`], expressions are [`Expr`],
//! and the parser, evaluator and renderer all match on them exhaustively.
//!
//! Every node keeps the token it started at. Function bodies sit behind an
//! `Rc` so closures can share the body with the tree that defined them.
//!
//! Trees nest as deeply as the source does. Cloning, comparing and rendering
//! an [`Expr`] run under `ensure_sufficient_stack`, and nodes with child
//! expressions are torn down iteratively (see `teardown`).

mod display;
mod teardown;

use std::rc::Rc;

use monkey_stack::ensure_sufficient_stack;

use crate::{Span, Token};

/// Root node: top-level statements in source order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Program {
    pub statements: Vec<Stmt>,
}

impl Program {
    pub fn new(statements: Vec<Stmt>) -> Self {
        Program { statements }
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }
}

/// Statements.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Stmt {
    Let(LetStmt),
    Return(ReturnStmt),
    Expr(ExprStmt),
}

impl Stmt {
    pub fn token(&self) -> &Token {
        match self {
            Stmt::Let(s) => &s.token,
            Stmt::Return(s) => &s.token,
            Stmt::Expr(s) => &s.token,
        }
    }

    pub fn span(&self) -> Span {
        self.token().span
    }
}

/// `let <name> = <value>;`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LetStmt {
    pub token: Token,
    pub name: Ident,
    pub value: Expr,
}

/// `return <value>;`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReturnStmt {
    pub token: Token,
    pub value: Expr,
}

/// An expression in statement position; the trailing `;` is optional.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExprStmt {
    pub token: Token,
    pub expr: Expr,
}

/// Block statement: `{ <statements> }`.
///
/// Appears only as the body of `if` branches and function literals.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Block {
    pub token: Token,
    pub statements: Vec<Stmt>,
}

/// Expressions.
#[derive(Debug)]
pub enum Expr {
    Ident(Ident),
    Int(IntLit),
    Bool(BoolLit),
    Str(StrLit),
    Prefix(PrefixExpr),
    Infix(InfixExpr),
    If(IfExpr),
    Function(Rc<FunctionLit>),
    Call(CallExpr),
}

impl Expr {
    pub fn token(&self) -> &Token {
        match self {
            Expr::Ident(e) => &e.token,
            Expr::Int(e) => &e.token,
            Expr::Bool(e) => &e.token,
            Expr::Str(e) => &e.token,
            Expr::Prefix(e) => &e.token,
            Expr::Infix(e) => &e.token,
            Expr::If(e) => &e.token,
            Expr::Function(e) => &e.token,
            Expr::Call(e) => &e.token,
        }
    }

    pub fn span(&self) -> Span {
        self.token().span
    }
}

impl Clone for Expr {
    fn clone(&self) -> Self {
        ensure_sufficient_stack(|| match self {
            Expr::Ident(e) => Expr::Ident(e.clone()),
            Expr::Int(e) => Expr::Int(e.clone()),
            Expr::Bool(e) => Expr::Bool(e.clone()),
            Expr::Str(e) => Expr::Str(e.clone()),
            Expr::Prefix(e) => Expr::Prefix(e.clone()),
            Expr::Infix(e) => Expr::Infix(e.clone()),
            Expr::If(e) => Expr::If(e.clone()),
            Expr::Function(e) => Expr::Function(Rc::clone(e)),
            Expr::Call(e) => Expr::Call(e.clone()),
        })
    }
}

impl PartialEq for Expr {
    fn eq(&self, other: &Self) -> bool {
        ensure_sufficient_stack(|| match (self, other) {
            (Expr::Ident(a), Expr::Ident(b)) => a == b,
            (Expr::Int(a), Expr::Int(b)) => a == b,
            (Expr::Bool(a), Expr::Bool(b)) => a == b,
            (Expr::Str(a), Expr::Str(b)) => a == b,
            (Expr::Prefix(a), Expr::Prefix(b)) => a == b,
            (Expr::Infix(a), Expr::Infix(b)) => a == b,
            (Expr::If(a), Expr::If(b)) => a == b,
            (Expr::Function(a), Expr::Function(b)) => a == b,
            (Expr::Call(a), Expr::Call(b)) => a == b,
            _ => false,
        })
    }
}

impl Eq for Expr {}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Ident {
    pub token: Token,
    pub name: String,
}

impl Ident {
    /// Identifier whose name is the token's literal.
    pub fn from_token(token: Token) -> Self {
        let name = token.literal.clone();
        Ident { token, name }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IntLit {
    pub token: Token,
    pub value: i64,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BoolLit {
    pub token: Token,
    pub value: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StrLit {
    pub token: Token,
    pub value: String,
}

/// Unary operators.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum PrefixOp {
    /// `-x`
    Neg,
    /// `!x`
    Not,
}

impl PrefixOp {
    pub fn as_symbol(self) -> &'static str {
        match self {
            PrefixOp::Neg => "-",
            PrefixOp::Not => "!",
        }
    }
}

/// Binary operators.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum InfixOp {
    Add,
    Sub,
    Mul,
    Div,
    Lt,
    Gt,
    Eq,
    NotEq,
}

impl InfixOp {
    pub fn as_symbol(self) -> &'static str {
        match self {
            InfixOp::Add => "+",
            InfixOp::Sub => "-",
            InfixOp::Mul => "*",
            InfixOp::Div => "/",
            InfixOp::Lt => "<",
            InfixOp::Gt => ">",
            InfixOp::Eq => "==",
            InfixOp::NotEq => "!=",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PrefixExpr {
    pub token: Token,
    pub op: PrefixOp,
    pub operand: Box<Expr>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InfixExpr {
    pub token: Token,
    pub op: InfixOp,
    pub left: Box<Expr>,
    pub right: Box<Expr>,
}

/// `if (<condition>) { ... } else { ... }`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IfExpr {
    pub token: Token,
    pub condition: Box<Expr>,
    pub consequence: Block,
    pub alternative: Option<Block>,
}

/// `fn(<parameters>) { <body> }`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FunctionLit {
    pub token: Token,
    pub parameters: Vec<Ident>,
    pub body: Block,
}

/// `<function>(<arguments>)`; the token is the opening `(`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CallExpr {
    pub token: Token,
    pub function: Box<Expr>,
    pub arguments: Vec<Expr>,
}

#[cfg(test)]
mod tests;
