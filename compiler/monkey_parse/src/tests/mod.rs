//! Parser tests.
//!
//! - `parser`: statements, precedence, and every expression form
//! - `errors`: syntax error messages and recovery
//! - `properties`: render/re-parse stability on generated expressions


use crate::{parse, ParseOutput};

/// Parse `source`, failing the test if any syntax error was reported.
fn parse_ok(source: &str) -> ParseOutput {
    let output = parse(source);
    assert!(
        !output.has_errors(),
        "unexpected errors for {source:?}: {:?}",
        output.error_messages()
    );
    output
}
