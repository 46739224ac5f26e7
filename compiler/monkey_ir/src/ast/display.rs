//! Canonical source rendering.
//!
//! Operator expressions are always parenthesized. Statements are separated
//! by a space, and an expression statement that is followed by another
//! statement keeps its `;` so the output re-parses into the same tree.

use std::fmt::{self, Display, Formatter};

use monkey_stack::ensure_sufficient_stack;

use super::{
    Block, CallExpr, Expr, ExprStmt, FunctionLit, IfExpr, InfixExpr, LetStmt, PrefixExpr,
    Program, ReturnStmt, Stmt,
};

fn write_statements(f: &mut Formatter<'_>, statements: &[Stmt]) -> fmt::Result {
    for (i, stmt) in statements.iter().enumerate() {
        if i > 0 {
            f.write_str(" ")?;
        }
        write!(f, "{stmt}")?;
        if matches!(stmt, Stmt::Expr(_)) && i + 1 < statements.len() {
            f.write_str(";")?;
        }
    }
    Ok(())
}

fn write_comma_separated<T: Display>(f: &mut Formatter<'_>, items: &[T]) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{item}")?;
    }
    Ok(())
}

impl Display for Program {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write_statements(f, &self.statements)
    }
}

impl Display for Stmt {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Stmt::Let(s) => s.fmt(f),
            Stmt::Return(s) => s.fmt(f),
            Stmt::Expr(s) => s.fmt(f),
        }
    }
}

impl Display for LetStmt {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "let {} = {};", self.name.name, self.value)
    }
}

impl Display for ReturnStmt {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "return {};", self.value)
    }
}

impl Display for ExprStmt {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.expr.fmt(f)
    }
}

impl Display for Block {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.statements.is_empty() {
            return f.write_str("{ }");
        }
        f.write_str("{ ")?;
        write_statements(f, &self.statements)?;
        f.write_str(" }")
    }
}

impl Display for Expr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        ensure_sufficient_stack(|| match self {
            Expr::Ident(e) => f.write_str(&e.name),
            Expr::Int(e) => write!(f, "{}", e.value),
            Expr::Bool(e) => write!(f, "{}", e.value),
            Expr::Str(e) => write!(f, "\"{}\"", e.value),
            Expr::Prefix(e) => e.fmt(f),
            Expr::Infix(e) => e.fmt(f),
            Expr::If(e) => e.fmt(f),
            Expr::Function(e) => e.fmt(f),
            Expr::Call(e) => e.fmt(f),
        })
    }
}

impl Display for PrefixExpr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "({}{})", self.op.as_symbol(), self.operand)
    }
}

impl Display for InfixExpr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "({} {} {})", self.left, self.op.as_symbol(), self.right)
    }
}

impl Display for IfExpr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        // Operator conditions already carry their own parentheses.
        match &*self.condition {
            cond @ (Expr::Prefix(_) | Expr::Infix(_)) => write!(f, "if {cond} ")?,
            cond => write!(f, "if ({cond}) ")?,
        }
        write!(f, "{}", self.consequence)?;
        if let Some(alt) = &self.alternative {
            write!(f, " else {alt}")?;
        }
        Ok(())
    }
}

impl Display for FunctionLit {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str("fn(")?;
        let names: Vec<&str> = self.parameters.iter().map(|p| p.name.as_str()).collect();
        write_comma_separated(f, &names)?;
        write!(f, ") {}", self.body)
    }
}

impl Display for CallExpr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.function)?;
        write_comma_separated(f, &self.arguments)?;
        f.write_str(")")
    }
}
