//! Binary operators.
//!
//! Operands of different kinds are always a type mismatch. Operands of the
//! same kind dispatch to a per-kind function; anything that kind does not
//! define is an unknown operator.

use monkey_ir::InfixOp;

use crate::errors::{integer_overflow, type_mismatch, unknown_infix_operator};
use crate::{EvalError, Value};

/// Checked arithmetic where the only failure is overflow.
#[inline]
fn checked_arith(result: Option<i64>, op_name: &'static str) -> Result<Value, EvalError> {
    result
        .map(Value::Integer)
        .ok_or_else(|| integer_overflow(op_name))
}

/// Evaluate `left <op> right`.
pub fn evaluate_binary(left: &Value, op: InfixOp, right: &Value) -> Result<Value, EvalError> {
    match (left, right) {
        (Value::Integer(a), Value::Integer(b)) => eval_int_binary(*a, op, *b),
        (Value::Boolean(a), Value::Boolean(b)) => match op {
            InfixOp::Eq => Ok(Value::Boolean(a == b)),
            InfixOp::NotEq => Ok(Value::Boolean(a != b)),
            _ => Err(unknown_infix_operator(left, op.as_symbol(), right)),
        },
        (Value::String(a), Value::String(b)) => match op {
            InfixOp::Add => {
                let mut joined = String::with_capacity(a.len() + b.len());
                joined.push_str(a);
                joined.push_str(b);
                Ok(Value::string(joined))
            }
            InfixOp::Eq => Ok(Value::Boolean(a == b)),
            InfixOp::NotEq => Ok(Value::Boolean(a != b)),
            _ => Err(unknown_infix_operator(left, op.as_symbol(), right)),
        },
        (Value::Null, Value::Null) => match op {
            InfixOp::Eq => Ok(Value::Boolean(true)),
            InfixOp::NotEq => Ok(Value::Boolean(false)),
            _ => Err(unknown_infix_operator(left, op.as_symbol(), right)),
        },
        _ if left.kind() != right.kind() => Err(type_mismatch(left, op.as_symbol(), right)),
        _ => Err(unknown_infix_operator(left, op.as_symbol(), right)),
    }
}

/// Integer arithmetic and comparison. Division truncates toward zero.
fn eval_int_binary(a: i64, op: InfixOp, b: i64) -> Result<Value, EvalError> {
    match op {
        InfixOp::Add => checked_arith(a.checked_add(b), "addition"),
        InfixOp::Sub => checked_arith(a.checked_sub(b), "subtraction"),
        InfixOp::Mul => checked_arith(a.checked_mul(b), "multiplication"),
        InfixOp::Div => {
            if b == 0 {
                Err(EvalError::DivisionByZero)
            } else {
                checked_arith(a.checked_div(b), "division")
            }
        }
        InfixOp::Lt => Ok(Value::Boolean(a < b)),
        InfixOp::Gt => Ok(Value::Boolean(a > b)),
        InfixOp::Eq => Ok(Value::Boolean(a == b)),
        InfixOp::NotEq => Ok(Value::Boolean(a != b)),
    }
}
