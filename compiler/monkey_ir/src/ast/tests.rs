use std::rc::Rc;

use pretty_assertions::assert_eq;

use super::*;
use crate::TokenKind;

fn ident(name: &str) -> Ident {
    Ident::from_token(Token::synthetic(TokenKind::Ident, name))
}

fn ident_expr(name: &str) -> Expr {
    Expr::Ident(ident(name))
}

fn int(value: i64) -> Expr {
    Expr::Int(IntLit {
        token: Token::synthetic(TokenKind::Int, value.to_string()),
        value,
    })
}

fn infix(left: Expr, op: InfixOp, right: Expr) -> Expr {
    Expr::Infix(InfixExpr {
        token: Token::synthetic(TokenKind::Plus, op.as_symbol()),
        op,
        left: Box::new(left),
        right: Box::new(right),
    })
}

fn expr_stmt(expr: Expr) -> Stmt {
    Stmt::Expr(ExprStmt {
        token: expr.token().clone(),
        expr,
    })
}

fn block(statements: Vec<Stmt>) -> Block {
    Block {
        token: Token::synthetic(TokenKind::LBrace, "{"),
        statements,
    }
}

#[test]
fn test_let_statement_renders_source() {
    let program = Program::new(vec![Stmt::Let(LetStmt {
        token: Token::synthetic(TokenKind::Let, "let"),
        name: ident("myVar"),
        value: ident_expr("anotherVar"),
    })]);
    assert_eq!(program.to_string(), "let myVar = anotherVar;");
}

#[test]
fn test_return_statement() {
    let stmt = Stmt::Return(ReturnStmt {
        token: Token::synthetic(TokenKind::Return, "return"),
        value: int(5),
    });
    assert_eq!(stmt.to_string(), "return 5;");
}

#[test]
fn test_operators_are_parenthesized() {
    let expr = infix(
        ident_expr("a"),
        InfixOp::Add,
        infix(ident_expr("b"), InfixOp::Mul, ident_expr("c")),
    );
    assert_eq!(expr.to_string(), "(a + (b * c))");

    let neg = Expr::Prefix(PrefixExpr {
        token: Token::synthetic(TokenKind::Minus, "-"),
        op: PrefixOp::Neg,
        operand: Box::new(ident_expr("a")),
    });
    assert_eq!(neg.to_string(), "(-a)");
}

#[test]
fn test_expression_statements_keep_separators() {
    let program = Program::new(vec![expr_stmt(int(1)), expr_stmt(ident_expr("x"))]);
    assert_eq!(program.to_string(), "1; x");
}

#[test]
fn test_if_else_rendering() {
    let cond = infix(ident_expr("x"), InfixOp::Lt, ident_expr("y"));
    let expr = Expr::If(IfExpr {
        token: Token::synthetic(TokenKind::If, "if"),
        condition: Box::new(cond),
        consequence: block(vec![expr_stmt(ident_expr("x"))]),
        alternative: Some(block(vec![expr_stmt(ident_expr("y"))])),
    });
    assert_eq!(expr.to_string(), "if (x < y) { x } else { y }");
}

#[test]
fn test_if_wraps_bare_condition() {
    let expr = Expr::If(IfExpr {
        token: Token::synthetic(TokenKind::If, "if"),
        condition: Box::new(ident_expr("ok")),
        consequence: block(vec![]),
        alternative: None,
    });
    assert_eq!(expr.to_string(), "if (ok) { }");
}

#[test]
fn test_function_and_call_rendering() {
    let func = Expr::Function(Rc::new(FunctionLit {
        token: Token::synthetic(TokenKind::Function, "fn"),
        parameters: vec![ident("x"), ident("y")],
        body: block(vec![expr_stmt(infix(
            ident_expr("x"),
            InfixOp::Add,
            ident_expr("y"),
        ))]),
    }));
    assert_eq!(func.to_string(), "fn(x, y) { (x + y) }");

    let call = Expr::Call(CallExpr {
        token: Token::synthetic(TokenKind::LParen, "("),
        function: Box::new(ident_expr("add")),
        arguments: vec![int(1), infix(int(2), InfixOp::Mul, int(3))],
    });
    assert_eq!(call.to_string(), "add(1, (2 * 3))");
}

#[test]
fn test_string_literal_is_quoted() {
    let expr = Expr::Str(StrLit {
        token: Token::synthetic(TokenKind::String, "hello world"),
        value: "hello world".to_string(),
    });
    assert_eq!(expr.to_string(), "\"hello world\"");
}

#[test]
fn test_nodes_keep_their_token() {
    let stmt = expr_stmt(ident_expr("foo"));
    assert_eq!(stmt.token().literal, "foo");
    assert_eq!(stmt.token().kind, TokenKind::Ident);
}

const DEEP: usize = 100_000;

fn negate(operand: Expr) -> Expr {
    Expr::Prefix(PrefixExpr {
        token: Token::synthetic(TokenKind::Minus, "-"),
        op: PrefixOp::Neg,
        operand: Box::new(operand),
    })
}

fn if_expr(condition: Expr, body: Expr) -> Expr {
    Expr::If(IfExpr {
        token: Token::synthetic(TokenKind::If, "if"),
        condition: Box::new(condition),
        consequence: block(vec![expr_stmt(body)]),
        alternative: None,
    })
}

fn call(function: Expr, arguments: Vec<Expr>) -> Expr {
    Expr::Call(CallExpr {
        token: Token::synthetic(TokenKind::LParen, "("),
        function: Box::new(function),
        arguments,
    })
}

fn function(body: Expr) -> Expr {
    Expr::Function(Rc::new(FunctionLit {
        token: Token::synthetic(TokenKind::Function, "fn"),
        parameters: Vec::new(),
        body: block(vec![expr_stmt(body)]),
    }))
}

#[test]
fn test_deep_prefix_chain_clones_compares_renders_and_drops() {
    let mut expr = int(1);
    for _ in 0..DEEP {
        expr = negate(expr);
    }
    let copy = expr.clone();
    assert!(copy == expr);
    let rendered = expr.to_string();
    assert_eq!(rendered.len(), DEEP * 3 + 1);
    assert!(rendered.starts_with("(-(-"));
    drop(copy);
    drop(expr);
}

#[test]
fn test_deep_infix_chain_drops() {
    let mut expr = int(0);
    for i in 0..DEEP {
        expr = infix(expr, InfixOp::Add, int(i64::try_from(i).unwrap_or_default()));
    }
    drop(Program::new(vec![expr_stmt(expr)]));
}

#[test]
fn test_deep_block_nesting_drops() {
    let mut expr = ident_expr("x");
    for i in 0..DEEP {
        expr = match i % 3 {
            0 => if_expr(ident_expr("c"), expr),
            1 => call(ident_expr("f"), vec![expr]),
            _ => function(expr),
        };
    }
    drop(expr);
}

#[test]
fn test_shared_function_body_survives_tree_drop() {
    let body = infix(ident_expr("x"), InfixOp::Mul, int(2));
    let literal = function(body);
    let Expr::Function(shared) = &literal else {
        panic!("expected function literal");
    };
    let shared = Rc::clone(shared);
    drop(literal);
    assert_eq!(shared.body.to_string(), "{ (x * 2) }");
}
