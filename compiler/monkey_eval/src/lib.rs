//! Evaluator for Monkey.
//!
//! Walks the AST produced by `monkey_parse` and produces a [`Value`].
//!
//! # Architecture
//!
//! - [`Evaluator`]: statement and expression dispatch, calls, builtins
//! - [`Environment`]: chained lexical scopes shared by closures
//! - [`Value`]: runtime values, rendered for display via `Display`
//! - [`operators`] / [`unary_operators`]: per-kind operator semantics
//!
//! Runtime errors are values, not panics. Inside evaluation they travel as
//! [`Unwind::Error`] and surface from [`Evaluator::evaluate_program`] as
//! [`Value::Error`].

pub mod builtins;
mod environment;
mod errors;
mod interpreter;
pub mod operators;
mod print_handler;
pub mod unary_operators;
mod value;

pub use builtins::Builtin;
pub use environment::Environment;
pub use errors::{EvalError, EvalResult, Unwind};
pub use interpreter::{Evaluator, EvaluatorBuilder, DEFAULT_MAX_CALL_DEPTH};
pub use print_handler::{
    buffer_handler, silent_handler, stdout_handler, BufferPrintHandler, PrintHandler,
    SharedPrintHandler,
};
pub use value::{Closure, Value};

#[cfg(test)]
mod tests;
