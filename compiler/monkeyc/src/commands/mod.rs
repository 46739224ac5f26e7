//! Command handlers for the `monkey` CLI.
//!
//! Each submodule implements one command. Shared helpers for reading files
//! and reporting syntax errors live here.

mod debug;
mod repl;
mod run;

pub use debug::{lex_file, parse_file};
pub use repl::{repl, PROMPT};
pub use run::{eval_source, run_file};

use monkey_parse::ParseError;

use crate::describe_parse_error;

/// Read a source file, exiting with a message if it cannot be read.
pub(crate) fn read_file(path: &str) -> String {
    match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            let msg = match e.kind() {
                std::io::ErrorKind::NotFound => format!("cannot find file '{path}'"),
                std::io::ErrorKind::PermissionDenied => {
                    format!("permission denied reading '{path}'")
                }
                std::io::ErrorKind::InvalidData => {
                    format!("'{path}' contains invalid UTF-8 data")
                }
                _ => format!("error reading '{path}': {e}"),
            };
            eprintln!("{msg}");
            std::process::exit(1);
        }
    }
}

/// Print syntax errors to stderr as `origin:line:col: message`.
pub(crate) fn report_parse_errors(origin: &str, source: &str, errors: &[ParseError]) {
    for error in errors {
        eprintln!("{origin}:{}", describe_parse_error(source, error));
    }
    eprintln!(
        "{} syntax error{}",
        errors.len(),
        if errors.len() == 1 { "" } else { "s" }
    );
}
