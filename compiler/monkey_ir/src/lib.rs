//! Shared data model for the Monkey interpreter.
//!
//! Everything downstream of the lexer speaks in these types:
//!
//! - [`Span`]: byte range into the source text
//! - [`Token`] / [`TokenKind`]: lexical units
//! - [`ast`]: the closed set of statement and expression nodes
//!
//! AST nodes render back to canonical source via `Display`. Infix and prefix
//! expressions are fully parenthesized, so the rendering of a parsed program
//! shows exactly how precedence was resolved and parses back to the same tree.

pub mod ast;
mod span;
mod token;

pub use ast::{
    Block, BoolLit, CallExpr, Expr, ExprStmt, FunctionLit, Ident, IfExpr, InfixExpr, InfixOp,
    IntLit, LetStmt, PrefixExpr, PrefixOp, Program, ReturnStmt, Stmt, StrLit,
};
pub use span::{LineCol, Span};
pub use token::{lookup_keyword, Token, TokenKind};
