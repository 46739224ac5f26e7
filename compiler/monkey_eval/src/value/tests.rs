use std::rc::Rc;

use monkey_ir::{Block, FunctionLit, Ident, Token, TokenKind};
use pretty_assertions::assert_eq;

use super::*;

fn literal(params: &[&str]) -> Rc<FunctionLit> {
    Rc::new(FunctionLit {
        token: Token::synthetic(TokenKind::Function, "fn"),
        parameters: params
            .iter()
            .map(|p| Ident::from_token(Token::synthetic(TokenKind::Ident, *p)))
            .collect(),
        body: Block {
            token: Token::synthetic(TokenKind::LBrace, "{"),
            statements: Vec::new(),
        },
    })
}

#[test]
fn test_display() {
    assert_eq!(Value::Integer(-42).to_string(), "-42");
    assert_eq!(Value::Boolean(true).to_string(), "true");
    assert_eq!(Value::from("hi there").to_string(), "hi there");
    assert_eq!(Value::Null.to_string(), "nil");
    assert_eq!(
        Value::Error(EvalError::IdentifierNotFound {
            name: "x".to_owned()
        })
        .to_string(),
        "ERROR: identifier not found: x"
    );
}

#[test]
fn test_function_display() {
    let closure = Closure::new(literal(&["x", "y"]), Environment::new());
    assert_eq!(Value::Function(closure).to_string(), "fn(x, y) { }");
}

#[test]
fn test_kinds() {
    assert_eq!(Value::Integer(1).kind(), "INTEGER");
    assert_eq!(Value::Boolean(false).kind(), "BOOLEAN");
    assert_eq!(Value::from("").kind(), "STRING");
    assert_eq!(Value::Null.kind(), "NULL");
    assert_eq!(
        Value::Function(Closure::new(literal(&[]), Environment::new())).kind(),
        "FUNCTION"
    );
}

#[test]
fn test_truthiness() {
    assert!(Value::Integer(0).is_truthy());
    assert!(Value::from("").is_truthy());
    assert!(Value::Boolean(true).is_truthy());
    assert!(!Value::Boolean(false).is_truthy());
    assert!(!Value::Null.is_truthy());
}

#[test]
fn test_booleans_compare_by_value() {
    assert_eq!(Value::Boolean(true), Value::from(true));
    assert_ne!(Value::Boolean(true), Value::Boolean(false));
    assert_eq!(Value::Null, Value::Null);
    assert_ne!(Value::Null, Value::Boolean(false));
}

#[test]
fn test_closure_identity() {
    let env = Environment::new();
    let lit = literal(&["x"]);
    let a = Value::Function(Closure::new(Rc::clone(&lit), env.clone()));
    let b = Value::Function(Closure::new(Rc::clone(&lit), env));
    let c = Value::Function(Closure::new(lit, Environment::new()));
    assert_eq!(a, b);
    assert_ne!(a, c);
}

#[test]
fn test_debug_does_not_recurse_into_environment() {
    let env = Environment::new();
    let f = Value::Function(Closure::new(literal(&["n"]), env.clone()));
    env.set("f", f.clone());
    assert_eq!(format!("{f:?}"), "Function(fn(n) { })");
    assert!(format!("{env:?}").contains("\"f\""));
}
