//! Interactive line loop.
//!
//! Reads one line at a time, evaluates it in a persistent [`Session`], and
//! prints the result. `exit` or end of input ends the loop.

use std::io::{self, BufRead, Write};

use crate::{describe_parse_error, LineOutcome, Session};

pub const PROMPT: &str = ">> ";

/// Run the loop over stdin and stdout.
pub fn repl() {
    let stdin = io::stdin();
    let stdout = io::stdout();
    if let Err(e) = run_loop(stdin.lock(), &mut stdout.lock(), &mut Session::new()) {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

/// The loop itself, over any line source and sink.
pub(crate) fn run_loop(
    input: impl BufRead,
    out: &mut impl Write,
    session: &mut Session,
) -> io::Result<()> {
    let mut lines = input.lines();
    loop {
        write!(out, "{PROMPT}")?;
        out.flush()?;

        let Some(line) = lines.next().transpose()? else {
            writeln!(out)?;
            return Ok(());
        };
        let line = line.trim();
        if line == "exit" {
            return Ok(());
        }
        if line.is_empty() {
            continue;
        }

        match session.eval_line(line) {
            LineOutcome::SyntaxErrors(errors) => {
                writeln!(out, "parser errors:")?;
                for error in &errors {
                    writeln!(out, "\t{}", describe_parse_error(line, error))?;
                }
            }
            LineOutcome::Evaluated(Some(value)) => writeln!(out, "{value}")?,
            LineOutcome::Evaluated(None) => {}
        }
    }
}
