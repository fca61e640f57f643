use crate::{
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::core::Value},
};

/// Applies a binary operator to two evaluated operands.
///
/// Dispatch is by operator symbol. Integers and booleans coerce to `i64`
/// for the arithmetic, bitwise and shift operators; strings and arrays have
/// their own `+` and `*` behaviours; the comparison family derives from a
/// single `<` comparator. Arithmetic wraps on overflow. Symbols outside the
/// table report an unknown operator, and operand kinds an operator does not
/// combine report a mismatch naming both kinds.
pub fn eval_binary(operator: &str, left: &Value, right: &Value) -> EvalResult<Value> {
    match operator {
        "+" => add(left, right),
        "-" => integer_op(operator, left, right, |a, b| Ok(a.wrapping_sub(b))),
        "*" => mul(left, right),
        "/" => integer_op(operator, left, right, divide),
        "%" => integer_op(operator, left, right, modulo),
        "&" => integer_op(operator, left, right, |a, b| Ok(a & b)),
        "|" => integer_op(operator, left, right, |a, b| Ok(a | b)),
        "^" => integer_op(operator, left, right, |a, b| Ok(a ^ b)),
        "<<" => integer_op(operator, left, right, shift_left),
        ">>" => integer_op(operator, left, right, shift_right),
        "<" => less_than(left, right).map(Value::Boolean),
        ">" => less_than(right, left).map(Value::Boolean),
        "<=" => less_than(right, left).map(|ordered| Value::Boolean(!ordered)),
        ">=" => less_than(left, right).map(|ordered| Value::Boolean(!ordered)),
        "==" => equals("==", left, right).map(Value::Boolean),
        "!=" => equals("!=", left, right).map(|equal| Value::Boolean(!equal)),
        _ => Err(RuntimeError::UnknownOperator { operator: operator.to_string() }),
    }
}

/// Runs an integer operation after coercing both operands, or reports the
/// operand kinds that failed to combine.
fn integer_op(operator: &str,
              left: &Value,
              right: &Value,
              op: impl Fn(i64, i64) -> EvalResult<i64>)
              -> EvalResult<Value> {
    match (left.as_i64(), right.as_i64()) {
        (Some(a), Some(b)) => op(a, b).map(Value::Integer),
        _ => Err(mismatch(operator, left, right)),
    }
}

fn divide(a: i64, b: i64) -> EvalResult<i64> {
    if b == 0 {
        return Err(RuntimeError::DivisionByZero);
    }

    Ok(a.wrapping_div(b))
}

/// Floored modulo: the result takes the sign of the divisor, so
/// `-7 % 3 == 2`.
fn modulo(a: i64, b: i64) -> EvalResult<i64> {
    if b == 0 {
        return Err(RuntimeError::ModuloByZero);
    }

    Ok(a.wrapping_rem(b).wrapping_add(b).wrapping_rem(b))
}

fn shift_left(a: i64, b: i64) -> EvalResult<i64> {
    if b < 0 {
        return Err(RuntimeError::NegativeShift);
    }
    if b >= 64 {
        return Ok(0);
    }

    Ok(a.wrapping_shl(u32::try_from(b).unwrap_or(0)))
}

/// Arithmetic right shift; amounts past the width fill with the sign bit.
fn shift_right(a: i64, b: i64) -> EvalResult<i64> {
    if b < 0 {
        return Err(RuntimeError::NegativeShift);
    }

    Ok(a >> b.min(63))
}

/// Addition, concatenation and element insertion.
///
/// Arrays always build a new array: two arrays concatenate, a left array
/// appends the right value as one element, and a non-array left prepends to
/// a right array.
fn add(left: &Value, right: &Value) -> EvalResult<Value> {
    if let (Some(a), Some(b)) = (left.as_i64(), right.as_i64()) {
        return Ok(Value::Integer(a.wrapping_add(b)));
    }

    match (left, right) {
        (Value::String(a), Value::String(b)) => Ok(Value::String(format!("{a}{b}"))),
        (Value::Array(a), Value::Array(b)) => {
            let mut elements = a.borrow().clone();
            elements.extend(b.borrow().iter().cloned());

            Ok(Value::array(elements))
        },
        (Value::Array(a), other) => {
            let mut elements = a.borrow().clone();
            elements.push(other.clone());

            Ok(Value::array(elements))
        },
        (other, Value::Array(b)) => {
            let mut elements = vec![other.clone()];
            elements.extend(b.borrow().iter().cloned());

            Ok(Value::array(elements))
        },
        _ => Err(mismatch("+", left, right)),
    }
}

/// Multiplication and repetition.
///
/// A string or array on the left repeats by an integer (or boolean) count
/// on the right; a count of zero or less yields the empty value. Repetition
/// copies, leaving the operand untouched.
fn mul(left: &Value, right: &Value) -> EvalResult<Value> {
    if let (Some(a), Some(b)) = (left.as_i64(), right.as_i64()) {
        return Ok(Value::Integer(a.wrapping_mul(b)));
    }

    match (left, right.as_i64()) {
        (Value::String(s), Some(count)) => {
            Ok(Value::String(s.repeat(usize::try_from(count).unwrap_or(0))))
        },
        (Value::Array(a), Some(count)) => {
            let elements = a.borrow();
            let mut repeated = Vec::new();

            for _ in 0..usize::try_from(count).unwrap_or(0) {
                repeated.extend(elements.iter().cloned());
            }

            Ok(Value::array(repeated))
        },
        _ => Err(mismatch("*", left, right)),
    }
}

/// The base comparator every ordering and equality operator derives from.
///
/// Integers (and coerced booleans) compare numerically, strings compare
/// lexicographically, and nothing compares across kinds.
pub(super) fn less_than(left: &Value, right: &Value) -> EvalResult<bool> {
    if let (Some(a), Some(b)) = (left.as_i64(), right.as_i64()) {
        return Ok(a < b);
    }

    if let (Value::String(a), Value::String(b)) = (left, right) {
        return Ok(a < b);
    }

    Err(mismatch("<", left, right))
}

/// Equality derived from the comparator: two values are equal when neither
/// is less than the other. Two nulls are equal. A comparator failure is
/// reported under the equality operator's own symbol.
fn equals(operator: &str, left: &Value, right: &Value) -> EvalResult<bool> {
    if matches!((left, right), (Value::Null, Value::Null)) {
        return Ok(true);
    }

    match (less_than(left, right), less_than(right, left)) {
        (Ok(lt), Ok(gt)) => Ok(!lt && !gt),
        _ => Err(mismatch(operator, left, right)),
    }
}

fn mismatch(operator: &str, left: &Value, right: &Value) -> RuntimeError {
    RuntimeError::OperandMismatch { operator: operator.to_string(),
                                    left:     left.kind(),
                                    right:    right.kind(), }
}
