//! Debug commands: `lex` and `parse` for inspecting the front end.

use monkey_lexer::tokenize;

use super::{read_file, report_parse_errors};
use crate::parse;

/// Print the token stream of a file, one token per line.
pub fn lex_file(path: &str) {
    let source = read_file(path);
    let tokens = tokenize(&source);

    println!("Tokens for '{}' ({} tokens):", path, tokens.len());
    for tok in &tokens {
        let pos = tok.span.line_col(&source);
        println!("  {:<8} {:<12?} @ {pos}", tok.kind.display_name(), tok.literal);
    }
}

/// Parse a file and print the canonical rendering of each statement.
pub fn parse_file(path: &str) {
    let source = read_file(path);
    let output = parse(&source);

    println!("Parse result for '{path}':");
    println!("  Statements: {}", output.program.statements.len());
    println!("  Errors: {}", output.errors.len());

    if !output.program.is_empty() {
        println!();
        for stmt in &output.program.statements {
            println!("  {stmt}");
        }
    }

    if output.has_errors() {
        println!();
        report_parse_errors(path, &source, &output.errors);
        std::process::exit(1);
    }
}
