//! Incremental evaluation against one root environment.

use monkey_eval::{Environment, Evaluator, Value};
use monkey_lexer::Lexer;
use monkey_parse::{ParseError, Parser};
use tracing::debug;

/// What happened to one input.
#[derive(Debug)]
pub enum LineOutcome {
    /// The input did not parse; nothing was evaluated.
    SyntaxErrors(Vec<ParseError>),
    /// The input was evaluated. `None` when it produced no value, e.g. a
    /// trailing `let`.
    Evaluated(Option<Value>),
}

/// A root environment that persists across inputs, plus a lexer reused for
/// each of them.
pub struct Session {
    lexer: Lexer,
    env: Environment,
    evaluator: Evaluator,
}

impl Session {
    pub fn new() -> Self {
        Session::with_evaluator(Evaluator::new())
    }

    pub fn with_evaluator(evaluator: Evaluator) -> Self {
        Session {
            lexer: Lexer::default(),
            env: Environment::new(),
            evaluator,
        }
    }

    /// Parse and evaluate `input`. Bindings made by earlier inputs are
    /// visible, and bindings made here stay visible to later ones.
    pub fn eval_line(&mut self, input: &str) -> LineOutcome {
        self.lexer.reset(input);
        let output = Parser::new(&mut self.lexer).parse_program();
        if output.has_errors() {
            debug!(errors = output.errors.len(), "input rejected");
            return LineOutcome::SyntaxErrors(output.errors);
        }
        LineOutcome::Evaluated(self.evaluator.run_program(&output.program, &self.env))
    }

    pub fn env(&self) -> &Environment {
        &self.env
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
