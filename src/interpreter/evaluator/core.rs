use std::rc::Rc;

use crate::{
    ast::{Expression, Program, Statement},
    error::RuntimeError,
    interpreter::{
        environment::Env,
        evaluator::{assignment, binary, builtin, for_loop, function, unary},
        value::core::{FunctionValue, Value},
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// [`RuntimeError`] describing the failure. On error, evaluation aborts
/// immediately to the caller; there is no recovery.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Evaluates a parsed program in the given environment.
///
/// Statements run in order. A `return` at the top level unwraps its payload
/// and ends the program early. The result is the last statement's value, or
/// `None` when that statement produces nothing (a declaration, for
/// instance); the REPL uses the distinction to decide whether to print.
///
/// # Errors
/// Returns the first [`RuntimeError`] raised by any statement.
///
/// # Example
/// ```
/// use brook::interpreter::{environment::Env, evaluator::core::eval_program, value::core::Value};
///
/// let program = brook::parse_program("let a = 5; a * 2").unwrap();
/// let result = eval_program(&program, &Env::new()).unwrap();
///
/// assert_eq!(result, Some(Value::Integer(10)));
/// ```
pub fn eval_program(program: &Program, env: &Env) -> EvalResult<Option<Value>> {
    let mut result = None;

    for statement in &program.statements {
        match eval_statement(statement, env)? {
            Some(Value::ReturnValue(value)) => return Ok(Some(*value)),
            other => result = other,
        }
    }

    Ok(result)
}

/// Evaluates a single statement.
///
/// Declarations yield `None`; every other statement yields a value. A
/// `return` wraps its payload in [`Value::ReturnValue`] so enclosing blocks
/// can propagate it without evaluating further statements.
pub fn eval_statement(statement: &Statement, env: &Env) -> EvalResult<Option<Value>> {
    match statement {
        Statement::Let { target, .. } => {
            assignment::eval_let(target, env)?;
            Ok(None)
        },
        Statement::Return { value, .. } => {
            let payload = match value {
                Some(expression) => eval_expression(expression, env)?,
                None => Value::Null,
            };

            Ok(Some(Value::ReturnValue(Box::new(payload))))
        },
        Statement::Expression { expression, .. } => Ok(Some(eval_expression(expression, env)?)),
        Statement::Block { statements, .. } => eval_block(statements, env),
        Statement::ForLoop { init,
                             condition,
                             update,
                             body,
                             .. } => for_loop::eval_for_loop(init.as_deref(),
                                                             condition.as_ref(),
                                                             update.as_ref(),
                                                             body,
                                                             env),
    }
}

/// Evaluates the statements of a block in order.
///
/// A [`Value::ReturnValue`] ends the traversal and is handed back
/// unwrapped, so the enclosing function call can consume it. Blocks do not
/// open a scope; the statements see the caller's environment directly.
pub fn eval_block(statements: &[Statement], env: &Env) -> EvalResult<Option<Value>> {
    let mut result = None;

    for statement in statements {
        result = eval_statement(statement, env)?;

        if matches!(result, Some(Value::ReturnValue(_))) {
            return Ok(result);
        }
    }

    Ok(result)
}

/// Evaluates one expression to a value.
pub fn eval_expression(expression: &Expression, env: &Env) -> EvalResult<Value> {
    match expression {
        Expression::Identifier { name, .. } => eval_identifier(name, env),
        Expression::IntegerLiteral { value, .. } => Ok(Value::Integer(*value)),
        Expression::StringLiteral { value, .. } => Ok(Value::String(value.clone())),
        Expression::BooleanLiteral { value, .. } => Ok(Value::Boolean(*value)),
        Expression::Prefix { operator, right, .. } => {
            let operand = eval_expression(right, env)?;
            unary::eval_unary(operator, &operand)
        },
        Expression::Infix { operator, left, right, .. } => {
            let lhs = eval_expression(left, env)?;
            let rhs = eval_expression(right, env)?;
            binary::eval_binary(operator, &lhs, &rhs)
        },
        Expression::ShortCircuit { operator, left, right, .. } => {
            eval_short_circuit(operator, left, right, env)
        },
        Expression::Assignment { left, right, .. } => {
            assignment::eval_assignment(left, right, env, false)
        },
        Expression::If { condition,
                         consequence,
                         alternative,
                         .. } => eval_if(condition, consequence, alternative.as_deref(), env),
        Expression::FunctionLiteral { parameters, body, .. } => {
            Ok(Value::Function(Rc::new(FunctionValue { parameters: parameters.clone(),
                                                       body:       (**body).clone(),
                                                       env:        env.clone(), })))
        },
        Expression::Call { callee, arguments, .. } => function::eval_call(callee, arguments, env),
        Expression::ArrayLiteral { elements, .. } => {
            Ok(Value::array(eval_expressions(elements, env)?))
        },
        Expression::Index { left, index, .. } => {
            let container = eval_expression(left, env)?;
            let index = eval_expression(index, env)?;
            eval_index(&container, &index)
        },
        Expression::ExprList { elements, .. } => {
            Ok(Value::ExprList(eval_expressions(elements, env)?))
        },
    }
}

/// Evaluates a slice of expressions strictly left to right.
pub(super) fn eval_expressions(expressions: &[Expression], env: &Env)
                               -> EvalResult<Vec<Value>> {
    let mut values = Vec::with_capacity(expressions.len());

    for expression in expressions {
        values.push(eval_expression(expression, env)?);
    }

    Ok(values)
}

/// Resolves a name, checking the environment chain first and the builtin
/// table second.
fn eval_identifier(name: &str, env: &Env) -> EvalResult<Value> {
    if let Some((value, _)) = env.get(name) {
        return Ok(value);
    }

    if let Some(def) = builtin::lookup(name) {
        return Ok(Value::Builtin(def));
    }

    Err(RuntimeError::NameNotDefined { name: name.to_string() })
}

/// Evaluates a conditional expression.
///
/// A missing branch produces `null`. A `return` inside the chosen block
/// flows through as a [`Value::ReturnValue`] untouched.
fn eval_if(condition: &Expression,
           consequence: &Statement,
           alternative: Option<&Statement>,
           env: &Env)
           -> EvalResult<Value> {
    let condition = eval_expression(condition, env)?;

    let chosen = if condition.is_truthy() {
        Some(consequence)
    } else {
        alternative
    };

    match chosen {
        Some(block) => Ok(eval_statement(block, env)?.unwrap_or(Value::Null)),
        None => Ok(Value::Null),
    }
}

/// Evaluates `&&` and `||` lazily.
///
/// The deciding operand is returned unchanged rather than coerced to a
/// boolean, so `0 && 2` yields `0` and `0 || 2` yields `2`.
fn eval_short_circuit(operator: &str,
                      left: &Expression,
                      right: &Expression,
                      env: &Env)
                      -> EvalResult<Value> {
    let lhs = eval_expression(left, env)?;

    let decided = match operator {
        "&&" => !lhs.is_truthy(),
        "||" => lhs.is_truthy(),
        _ => {
            return Err(RuntimeError::UnknownOperator { operator: operator.to_string() });
        },
    };

    if decided {
        Ok(lhs)
    } else {
        eval_expression(right, env)
    }
}

/// Reads one element out of an array.
///
/// Only `ARRAY × INTEGER` combinations index; negative and past-the-end
/// indices are range errors.
fn eval_index(container: &Value, index: &Value) -> EvalResult<Value> {
    let elements = match container {
        Value::Array(elements) => elements.borrow(),
        other => return Err(RuntimeError::NotIndexable { got: other.kind() }),
    };

    let index = match index {
        Value::Integer(index) => *index,
        other => return Err(RuntimeError::BadIndexType { got: other.kind() }),
    };

    usize::try_from(index)
        .ok()
        .and_then(|index| elements.get(index).cloned())
        .ok_or(RuntimeError::IndexOutOfRange)
}
