//! Runtime values.
//!
//! `Value` is a closed enum; operators and builtins match on it directly.
//! Booleans and null are plain variants compared by value, so there is no
//! canonical instance to preserve.
//!
//! Cloning is cheap: strings are `Rc<str>`, and a closure is two `Rc`s
//! (the function literal and its captured environment).

use std::fmt;
use std::rc::Rc;

use monkey_ir::FunctionLit;

use crate::builtins::Builtin;
use crate::{Environment, EvalError};

/// A Monkey runtime value.
#[derive(Clone)]
pub enum Value {
    Integer(i64),
    Boolean(bool),
    String(Rc<str>),
    /// The unit value produced by an `if` with no taken branch.
    Null,
    /// A runtime error that reached the program boundary.
    Error(EvalError),
    Function(Closure),
    Builtin(Builtin),
}

impl Value {
    /// Type tag used in error messages and by the `type` builtin.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Integer(_) => "INTEGER",
            Value::Boolean(_) => "BOOLEAN",
            Value::String(_) => "STRING",
            Value::Null => "NULL",
            Value::Error(_) => "ERROR",
            Value::Function(_) => "FUNCTION",
            Value::Builtin(_) => "BUILTIN",
        }
    }

    #[inline]
    pub fn string(s: impl Into<Rc<str>>) -> Self {
        Value::String(s.into())
    }

    /// Everything except `false` and `null` is truthy.
    #[inline]
    pub fn is_truthy(&self) -> bool {
        !matches!(self, Value::Boolean(false) | Value::Null)
    }

    #[inline]
    pub fn is_error(&self) -> bool {
        matches!(self, Value::Error(_))
    }
}

impl PartialEq for Value {
    /// Scalars compare by value. Closures are equal only when they are the
    /// same literal closed over the same environment.
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Integer(a), Value::Integer(b)) => a == b,
            (Value::Boolean(a), Value::Boolean(b)) => a == b,
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Null, Value::Null) => true,
            (Value::Error(a), Value::Error(b)) => a == b,
            (Value::Function(a), Value::Function(b)) => a.ptr_eq(b),
            (Value::Builtin(a), Value::Builtin(b)) => a.name() == b.name(),
            _ => false,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Integer(n) => write!(f, "{n}"),
            Value::Boolean(b) => write!(f, "{b}"),
            Value::String(s) => f.write_str(s),
            Value::Null => f.write_str("nil"),
            Value::Error(e) => write!(f, "ERROR: {e}"),
            Value::Function(closure) => write!(f, "{}", closure.literal),
            Value::Builtin(_) => f.write_str("builtin function"),
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Integer(n) => write!(f, "Integer({n})"),
            Value::Boolean(b) => write!(f, "Boolean({b})"),
            Value::String(s) => write!(f, "String({s:?})"),
            Value::Null => f.write_str("Null"),
            Value::Error(e) => write!(f, "Error({e:?})"),
            // The captured environment may contain this closure.
            Value::Function(closure) => write!(f, "Function({})", closure.literal),
            Value::Builtin(b) => write!(f, "Builtin({})", b.name()),
        }
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Integer(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::string(s)
    }
}

/// A function value: the literal it was created from and the environment
/// active where it was evaluated.
#[derive(Clone)]
pub struct Closure {
    pub literal: Rc<FunctionLit>,
    pub env: Environment,
}

impl Closure {
    pub fn new(literal: Rc<FunctionLit>, env: Environment) -> Self {
        Closure { literal, env }
    }

    pub fn arity(&self) -> usize {
        self.literal.parameters.len()
    }

    pub fn ptr_eq(&self, other: &Closure) -> bool {
        Rc::ptr_eq(&self.literal, &other.literal) && self.env.ptr_eq(&other.env)
    }
}

#[cfg(test)]
mod tests;
