//! The `run` and `eval` commands: parse and evaluate a whole program.

use monkey_eval::{Environment, Evaluator, Value};

use super::{read_file, report_parse_errors};
use crate::parse;

/// Run a Monkey source file.
pub fn run_file(path: &str) {
    let source = read_file(path);
    execute(path, &source);
}

/// Evaluate source text given on the command line.
pub fn eval_source(source: &str) {
    execute("<eval>", source);
}

/// Parse and evaluate, printing the program's value unless it is `nil` or
/// absent. Exits with status 1 on syntax or runtime errors.
fn execute(origin: &str, source: &str) {
    let output = parse(source);
    if output.has_errors() {
        report_parse_errors(origin, source, &output.errors);
        std::process::exit(1);
    }

    let evaluator = Evaluator::new();
    match evaluator.run_program(&output.program, &Environment::new()) {
        Some(error) if error.is_error() => {
            eprintln!("{origin}: {error}");
            std::process::exit(1);
        }
        Some(Value::Null) | None => {}
        Some(value) => println!("{value}"),
    }
}
