//! Prefix operators.

use monkey_ir::PrefixOp;

use crate::errors::integer_overflow;
use crate::{EvalError, Value};

/// Evaluate `<op><operand>`.
///
/// `!` applies to every value through truthiness. `-` only applies to
/// integers.
pub fn evaluate_unary(op: PrefixOp, operand: &Value) -> Result<Value, EvalError> {
    match (op, operand) {
        (PrefixOp::Not, value) => Ok(Value::Boolean(!value.is_truthy())),
        (PrefixOp::Neg, Value::Integer(n)) => n
            .checked_neg()
            .map(Value::Integer)
            .ok_or_else(|| integer_overflow("negation")),
        (PrefixOp::Neg, value) => Err(EvalError::UnknownPrefixOperator {
            op: op.as_symbol(),
            operand: value.kind(),
        }),
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests {
    use super::*;

    #[test]
    fn test_bang_uses_truthiness() {
        let cases = [
            (Value::Boolean(true), false),
            (Value::Boolean(false), true),
            (Value::Null, true),
            (Value::Integer(5), false),
            (Value::Integer(0), false),
            (Value::from(""), false),
        ];
        for (value, expected) in cases {
            assert_eq!(
                evaluate_unary(PrefixOp::Not, &value).unwrap(),
                Value::Boolean(expected),
                "!{value:?}"
            );
        }
    }

    #[test]
    fn test_negation() {
        assert_eq!(
            evaluate_unary(PrefixOp::Neg, &Value::Integer(5)).unwrap(),
            Value::Integer(-5)
        );
        assert_eq!(
            evaluate_unary(PrefixOp::Neg, &Value::Integer(-5)).unwrap(),
            Value::Integer(5)
        );
    }

    #[test]
    fn test_negation_errors() {
        assert_eq!(
            evaluate_unary(PrefixOp::Neg, &Value::Boolean(true))
                .unwrap_err()
                .to_string(),
            "unknown operator: -BOOLEAN"
        );
        assert_eq!(
            evaluate_unary(PrefixOp::Neg, &Value::Integer(i64::MIN))
                .unwrap_err()
                .to_string(),
            "integer overflow in negation"
        );
    }
}
