//! Native functions available to every program.
//!
//! Builtins are not bound in any environment. Identifier lookup falls back
//! to this table after the whole scope chain misses, so user bindings
//! shadow them.

use crate::errors::wrong_argument_count;
use crate::{EvalError, Evaluator, Value};

type BuiltinFn = fn(&Evaluator, &[Value]) -> Result<Value, EvalError>;

/// A native function value.
#[derive(Clone, Copy)]
pub struct Builtin {
    name: &'static str,
    func: BuiltinFn,
}

impl Builtin {
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub(crate) fn call(&self, evaluator: &Evaluator, args: &[Value]) -> Result<Value, EvalError> {
        (self.func)(evaluator, args)
    }
}

const BUILTINS: &[Builtin] = &[
    Builtin {
        name: "len",
        func: builtin_len,
    },
    Builtin {
        name: "puts",
        func: builtin_puts,
    },
    Builtin {
        name: "type",
        func: builtin_type,
    },
];

/// The builtin called `name`, if any.
pub fn lookup(name: &str) -> Option<Builtin> {
    BUILTINS.iter().find(|b| b.name == name).copied()
}

/// Names of all builtins, in table order.
pub fn names() -> impl Iterator<Item = &'static str> {
    BUILTINS.iter().map(|b| b.name)
}

fn single_arg(args: &[Value]) -> Result<&Value, EvalError> {
    match args {
        [arg] => Ok(arg),
        _ => Err(wrong_argument_count(1, args.len())),
    }
}

/// `len(s)`: byte length of a string.
fn builtin_len(_: &Evaluator, args: &[Value]) -> Result<Value, EvalError> {
    match single_arg(args)? {
        Value::String(s) => Ok(Value::Integer(i64::try_from(s.len()).unwrap_or(i64::MAX))),
        other => Err(EvalError::UnsupportedArgument {
            builtin: "len",
            got: other.kind(),
        }),
    }
}

/// `puts(args...)`: print each argument on its own line.
fn builtin_puts(evaluator: &Evaluator, args: &[Value]) -> Result<Value, EvalError> {
    let handler = evaluator.print_handler();
    for arg in args {
        handler.println(&arg.to_string());
    }
    Ok(Value::Null)
}

/// `type(x)`: the kind tag of `x` as a string.
fn builtin_type(_: &Evaluator, args: &[Value]) -> Result<Value, EvalError> {
    Ok(Value::string(single_arg(args)?.kind()))
}
