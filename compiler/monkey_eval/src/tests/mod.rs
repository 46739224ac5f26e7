//! End-to-end evaluator tests: source text through the parser and evaluator.
//!
//! - `evaluator`: literals, operators, conditionals, let, return
//! - `functions`: calls, closures, recursion
//! - `errors`: runtime errors and short-circuiting
//! - `builtins`: `len`, `puts`, `type`


use monkey_parse::parse;

use crate::{silent_handler, Environment, Evaluator, Value};

/// Evaluate `source` in a fresh environment.
fn eval(source: &str) -> Value {
    eval_in(source, &Environment::new())
}

/// Evaluate `source` in `env`, failing the test on syntax errors.
fn eval_in(source: &str, env: &Environment) -> Value {
    let output = parse(source);
    assert!(
        !output.has_errors(),
        "syntax errors in {source:?}: {:?}",
        output.error_messages()
    );
    Evaluator::builder()
        .print_handler(silent_handler())
        .build()
        .evaluate_program(&output.program, env)
}

/// Evaluate and render, for compact expectations.
fn eval_str(source: &str) -> String {
    eval(source).to_string()
}
