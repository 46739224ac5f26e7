//! Runtime errors and control-flow unwinding.
//!
//! Evaluation returns `Result<_, Unwind>`. A pending `return` and a runtime
//! error both travel up through `?` until something handles them: a call
//! boundary consumes [`Unwind::Return`], and the program boundary turns
//! whatever is left into a value.

use thiserror::Error;

use crate::Value;

/// A runtime error. `Display` is the message shown after `ERROR: `.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EvalError {
    /// Binary operator applied to operands of different kinds.
    #[error("type mismatch: {left} {op} {right}")]
    TypeMismatch {
        left: &'static str,
        op: &'static str,
        right: &'static str,
    },
    /// Binary operator not defined for this kind.
    #[error("unknown operator: {left} {op} {right}")]
    UnknownInfixOperator {
        left: &'static str,
        op: &'static str,
        right: &'static str,
    },
    /// Unary operator not defined for this kind.
    #[error("unknown operator: {op}{operand}")]
    UnknownPrefixOperator {
        op: &'static str,
        operand: &'static str,
    },
    #[error("identifier not found: {name}")]
    IdentifierNotFound { name: String },
    #[error("not a function: {kind}")]
    NotAFunction { kind: &'static str },
    #[error("wrong number of arguments: want={want}, got={got}")]
    WrongArgumentCount { want: usize, got: usize },
    #[error("argument to \"{builtin}\" not supported, got {got}")]
    UnsupportedArgument {
        builtin: &'static str,
        got: &'static str,
    },
    #[error("division by zero")]
    DivisionByZero,
    #[error("integer overflow in {operation}")]
    IntegerOverflow { operation: &'static str },
    #[error("maximum call depth of {limit} exceeded")]
    CallDepthExceeded { limit: usize },
}

// Factories for the common cases, so operator code reads as one line.

#[cold]
pub fn type_mismatch(left: &Value, op: &'static str, right: &Value) -> EvalError {
    EvalError::TypeMismatch {
        left: left.kind(),
        op,
        right: right.kind(),
    }
}

#[cold]
pub fn unknown_infix_operator(left: &Value, op: &'static str, right: &Value) -> EvalError {
    EvalError::UnknownInfixOperator {
        left: left.kind(),
        op,
        right: right.kind(),
    }
}

#[cold]
pub fn integer_overflow(operation: &'static str) -> EvalError {
    EvalError::IntegerOverflow { operation }
}

#[cold]
pub fn wrong_argument_count(want: usize, got: usize) -> EvalError {
    EvalError::WrongArgumentCount { want, got }
}

/// Non-local exit from a statement sequence.
#[derive(Clone, Debug, PartialEq)]
pub enum Unwind {
    /// `return <value>` on its way to the enclosing call.
    Return(Value),
    /// Runtime error on its way to the program boundary.
    Error(EvalError),
}

impl From<EvalError> for Unwind {
    fn from(error: EvalError) -> Self {
        Unwind::Error(error)
    }
}

/// Result of evaluating a node.
pub type EvalResult<T = Value> = Result<T, Unwind>;
