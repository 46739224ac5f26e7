//! `EvaluatorBuilder` for configuring an [`Evaluator`].

use std::cell::Cell;

use super::{Evaluator, DEFAULT_MAX_CALL_DEPTH};
use crate::{stdout_handler, SharedPrintHandler};

/// Builder for [`Evaluator`].
///
/// Defaults: output to stdout, builtins enabled, call depth capped at
/// [`DEFAULT_MAX_CALL_DEPTH`].
pub struct EvaluatorBuilder {
    print_handler: Option<SharedPrintHandler>,
    builtins: bool,
    max_call_depth: usize,
}

impl EvaluatorBuilder {
    pub fn new() -> Self {
        EvaluatorBuilder {
            print_handler: None,
            builtins: true,
            max_call_depth: DEFAULT_MAX_CALL_DEPTH,
        }
    }

    /// Where `puts` writes.
    #[must_use]
    pub fn print_handler(mut self, handler: SharedPrintHandler) -> Self {
        self.print_handler = Some(handler);
        self
    }

    /// Whether identifier lookup falls back to the builtin table.
    #[must_use]
    pub fn builtins(mut self, enabled: bool) -> Self {
        self.builtins = enabled;
        self
    }

    /// Deepest allowed nesting of function calls.
    #[must_use]
    pub fn max_call_depth(mut self, depth: usize) -> Self {
        self.max_call_depth = depth;
        self
    }

    pub fn build(self) -> Evaluator {
        Evaluator {
            print_handler: self.print_handler.unwrap_or_else(stdout_handler),
            builtins: self.builtins,
            max_call_depth: self.max_call_depth,
            call_depth: Cell::new(0),
        }
    }
}

impl Default for EvaluatorBuilder {
    fn default() -> Self {
        Self::new()
    }
}
