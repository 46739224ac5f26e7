#![expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]

//! Whole-pipeline tests: source text through lexer, parser and evaluator.
//!
//! - `parse/`: canonical rendering and syntax error reporting
//! - `eval/`: evaluation results, including the demo programs
//! - `session/`: state carried between inputs

mod pipeline {
    pub mod eval;
    pub mod parse;
    pub mod session;
}
