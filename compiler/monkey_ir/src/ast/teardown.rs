//! Iterative destruction of expression trees.
//!
//! The parser builds trees as deep as its input nests, but compiler-generated
//! drop glue recurses once per level and would overflow the native stack on
//! inputs like `----...----1`. Every node that owns a child expression
//! detaches its children here and drops them from a heap worklist instead.

use std::mem;
use std::rc::Rc;

use super::{Block, CallExpr, Expr, FunctionLit, IfExpr, InfixExpr, IntLit, PrefixExpr, Stmt};
use crate::{Token, TokenKind};

/// Childless stand-in left behind in a detached slot. Builds no heap data.
fn placeholder() -> Expr {
    Expr::Int(IntLit {
        token: Token::synthetic(TokenKind::Int, String::new()),
        value: 0,
    })
}

fn take(slot: &mut Expr) -> Expr {
    mem::replace(slot, placeholder())
}

fn is_leaf(expr: &Expr) -> bool {
    matches!(expr, Expr::Ident(_) | Expr::Int(_) | Expr::Bool(_) | Expr::Str(_))
}

fn stmt_expr(stmt: Stmt) -> Expr {
    match stmt {
        Stmt::Let(s) => s.value,
        Stmt::Return(s) => s.value,
        Stmt::Expr(s) => s.expr,
    }
}

fn take_block(block: &mut Block, work: &mut Vec<Expr>) {
    work.extend(mem::take(&mut block.statements).into_iter().map(stmt_expr));
}

/// Move the children of `expr` onto `work`, leaving `expr` shallow.
fn detach_children(expr: &mut Expr, work: &mut Vec<Expr>) {
    match expr {
        Expr::Ident(_) | Expr::Int(_) | Expr::Bool(_) | Expr::Str(_) => {}
        Expr::Prefix(e) => work.push(take(&mut e.operand)),
        Expr::Infix(e) => {
            work.push(take(&mut e.left));
            work.push(take(&mut e.right));
        }
        Expr::If(e) => e.detach(work),
        // A literal still shared with a closure is not ours to take apart.
        Expr::Function(f) => {
            if let Some(f) = Rc::get_mut(f) {
                take_block(&mut f.body, work);
            }
        }
        Expr::Call(e) => e.detach(work),
    }
}

/// Drop everything on `work` without recursing.
fn drain(mut work: Vec<Expr>) {
    while let Some(mut expr) = work.pop() {
        detach_children(&mut expr, &mut work);
    }
}

impl IfExpr {
    fn detach(&mut self, work: &mut Vec<Expr>) {
        work.push(take(&mut self.condition));
        take_block(&mut self.consequence, work);
        if let Some(alt) = &mut self.alternative {
            take_block(alt, work);
        }
    }
}

impl CallExpr {
    fn detach(&mut self, work: &mut Vec<Expr>) {
        work.push(take(&mut self.function));
        work.append(&mut self.arguments);
    }
}

impl Drop for PrefixExpr {
    fn drop(&mut self) {
        if !is_leaf(&self.operand) {
            drain(vec![take(&mut self.operand)]);
        }
    }
}

impl Drop for InfixExpr {
    fn drop(&mut self) {
        if is_leaf(&self.left) && is_leaf(&self.right) {
            return;
        }
        drain(vec![take(&mut self.left), take(&mut self.right)]);
    }
}

impl Drop for IfExpr {
    fn drop(&mut self) {
        let mut work = Vec::new();
        self.detach(&mut work);
        drain(work);
    }
}

impl Drop for CallExpr {
    fn drop(&mut self) {
        let mut work = Vec::new();
        self.detach(&mut work);
        drain(work);
    }
}

impl Drop for FunctionLit {
    fn drop(&mut self) {
        let mut work = Vec::new();
        take_block(&mut self.body, &mut work);
        drain(work);
    }
}
