use crate::{
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::core::Value},
};

/// Applies a unary operator to an evaluated operand.
///
/// `-` and `~` accept integers and booleans (booleans promote to `1`/`0`);
/// `!` accepts any value and negates its truthiness. Symbols outside the
/// table report an unknown operator.
pub fn eval_unary(operator: &str, operand: &Value) -> EvalResult<Value> {
    match operator {
        "-" => negate(operand),
        "!" => Ok(Value::Boolean(!operand.is_truthy())),
        "~" => bitwise_not(operand),
        _ => Err(RuntimeError::UnknownOperator { operator: operator.to_string() }),
    }
}

/// Arithmetic negation. Wraps on `i64::MIN`.
fn negate(operand: &Value) -> EvalResult<Value> {
    operand.as_i64()
           .map(|value| Value::Integer(value.wrapping_neg()))
           .ok_or_else(|| RuntimeError::BadUnaryOperand { operator: "-".to_string(),
                                                          operand:  operand.kind(), })
}

/// Bitwise complement over the full 64-bit pattern, so `~65535 == -65536`.
fn bitwise_not(operand: &Value) -> EvalResult<Value> {
    operand.as_i64()
           .map(|value| Value::Integer(!value))
           .ok_or_else(|| RuntimeError::BadUnaryOperand { operator: "~".to_string(),
                                                          operand:  operand.kind(), })
}
