//! Monkey interpreter front door.
//!
//! Ties the pipeline together for the `monkey` binary and for embedders:
//!
//! - [`parse`]: source text to a program plus syntax errors
//! - [`evaluate`]: program to value in a caller-owned [`Environment`]
//! - [`Session`]: a long-lived root environment fed one input at a time
//!
//! Values render for display through their `Display` impl.

pub mod commands;
mod session;
mod tracing_setup;

pub use monkey_eval::{Environment, EvalError, Evaluator, Value};
pub use monkey_ir::Program;
pub use monkey_parse::{ParseError, ParseOutput};
pub use session::{LineOutcome, Session};
pub use tracing_setup::init_tracing;

/// Parse `source` into a program and the syntax errors found along the way.
pub fn parse(source: &str) -> ParseOutput {
    monkey_parse::parse(source)
}

/// Evaluate `program` in `env` with a default evaluator (output to stdout,
/// builtins enabled).
pub fn evaluate(program: &Program, env: &Environment) -> Value {
    Evaluator::new().evaluate_program(program, env)
}

/// `line:col: message` for a syntax error in `source`.
pub fn describe_parse_error(source: &str, error: &ParseError) -> String {
    format!("{}: {error}", error.span.line_col(source))
}
