use crate::{
    ast::Expression,
    error::RuntimeError,
    interpreter::{
        environment::Env,
        evaluator::core::{EvalResult, eval_expression},
        value::{core::Value, lvalue::LValue},
    },
};

/// Evaluates the target of a `let` statement.
///
/// A target with an initializer runs as an assignment in declaration mode,
/// so every named lvalue is created in the current scope before the values
/// land. A bare identifier or identifier list declares `null` bindings.
pub fn eval_let(target: &Expression, env: &Env) -> EvalResult<()> {
    match target {
        Expression::Assignment { left, right, .. } => {
            eval_assignment(left, right, env, true)?;
            Ok(())
        },
        _ => {
            resolve_lvalues(target, env, true)?;
            Ok(())
        },
    }
}

/// Evaluates an assignment expression.
///
/// The right-hand side is evaluated first; a nested assignment on the right
/// runs recursively in the same mode, which is what makes
/// `let a = b = [...]` declare both names against one shared value. The
/// left-hand side then resolves to a list of write handles: an expression
/// list unpacks pairwise against an expression-list value, anything else
/// takes exactly one target.
///
/// The assignment yields the right-hand value, so a chain sees the tuple or
/// scalar unchanged.
///
/// # Errors
/// - [`RuntimeError::UnpackMismatch`] when target and value counts differ.
/// - [`RuntimeError::AlreadyDeclared`] for a duplicate name in declaration
///   mode, [`RuntimeError::NameNotDefined`] for an unknown name otherwise.
/// - [`RuntimeError::CannotAssign`] for a target that is not assignable.
pub fn eval_assignment(left: &Expression,
                       right: &Expression,
                       env: &Env,
                       declare: bool)
                       -> EvalResult<Value> {
    let value = match right {
        Expression::Assignment { left: inner_left,
                                 right: inner_right,
                                 .. } => eval_assignment(inner_left, inner_right, env, declare)?,
        _ => eval_expression(right, env)?,
    };

    let targets = resolve_lvalues(left, env, declare)?;

    match &value {
        Value::ExprList(values) => {
            if values.len() != targets.len() {
                return Err(RuntimeError::UnpackMismatch { got:  values.len(),
                                                          want: targets.len(), });
            }

            for (target, element) in targets.iter().zip(values) {
                target.set(element.clone())?;
            }
        },
        single => {
            if targets.len() != 1 {
                return Err(RuntimeError::UnpackMismatch { got:  1,
                                                          want: targets.len(), });
            }

            targets[0].set(single.clone())?;
        },
    }

    Ok(value)
}

/// Resolves an assignment target into its write handles.
///
/// Identifiers bind to a scope, index expressions bind to an array slot,
/// and expression lists recurse component-wise. Everything else is
/// rejected.
fn resolve_lvalues(target: &Expression, env: &Env, declare: bool) -> EvalResult<Vec<LValue>> {
    match target {
        Expression::Identifier { name, .. } => Ok(vec![resolve_binding(name, env, declare)?]),
        Expression::Index { left, index, .. } => Ok(vec![resolve_slot(left, index, env)?]),
        Expression::ExprList { elements, .. } => {
            let mut targets = Vec::with_capacity(elements.len());

            for element in elements {
                targets.extend(resolve_lvalues(element, env, declare)?);
            }

            Ok(targets)
        },
        _ => Err(RuntimeError::CannotAssign),
    }
}

/// Resolves a named target.
///
/// In declaration mode the name must be new to the current scope and is
/// bound to `null` immediately, which also makes duplicate names inside one
/// `let` collide. Otherwise the name must already exist somewhere along the
/// chain, and the handle points at its defining scope so the write lands
/// where the declaration did.
fn resolve_binding(name: &str, env: &Env, declare: bool) -> EvalResult<LValue> {
    if declare {
        if env.exists_local(name) {
            return Err(RuntimeError::AlreadyDeclared { name: name.to_string() });
        }

        env.set(name, Value::Null);

        return Ok(LValue::Binding { env:  env.clone(),
                                    name: name.to_string(), });
    }

    let (_, defining) = env.get(name)
                           .ok_or_else(|| RuntimeError::NameNotDefined { name:
                                                                             name.to_string() })?;

    Ok(LValue::Binding { env:  defining,
                         name: name.to_string(), })
}

/// Resolves an `array[index]` target to a slot handle.
///
/// The container and index evaluate before the write; the index must be an
/// integer and the container an array. Bounds are checked by the write
/// itself.
fn resolve_slot(left: &Expression, index: &Expression, env: &Env) -> EvalResult<LValue> {
    let container = eval_expression(left, env)?;
    let index = eval_expression(index, env)?;

    let array = match container {
        Value::Array(array) => array,
        other => return Err(RuntimeError::NotIndexable { got: other.kind() }),
    };

    let index = match index {
        Value::Integer(index) => index,
        other => return Err(RuntimeError::BadIndexType { got: other.kind() }),
    };

    Ok(LValue::Slot { array, index })
}
