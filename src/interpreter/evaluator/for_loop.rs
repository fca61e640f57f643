use crate::{
    ast::{Expression, Statement},
    interpreter::{
        environment::Env,
        evaluator::core::{EvalResult, eval_expression, eval_statement},
        value::core::Value,
    },
};

/// Evaluates a `for` statement.
///
/// The whole loop runs inside one fresh scope enclosed by the caller's, so
/// header declarations are invisible after the statement. The initializer
/// runs once; then each iteration checks the condition (a missing condition
/// loops forever), runs the body and runs the update expression.
///
/// A `return` unwinding out of the body ends the loop and propagates the
/// sentinel to the enclosing function. A completed loop produces `null`.
pub fn eval_for_loop(init: Option<&Statement>,
                     condition: Option<&Expression>,
                     update: Option<&Expression>,
                     body: &Statement,
                     env: &Env)
                     -> EvalResult<Option<Value>> {
    let loop_env = Env::new_enclosed(env);

    if let Some(init) = init {
        eval_statement(init, &loop_env)?;
    }

    loop {
        if let Some(condition) = condition
           && !eval_expression(condition, &loop_env)?.is_truthy()
        {
            break;
        }

        let result = eval_statement(body, &loop_env)?;
        if matches!(result, Some(Value::ReturnValue(_))) {
            return Ok(result);
        }

        if let Some(update) = update {
            eval_expression(update, &loop_env)?;
        }
    }

    Ok(Some(Value::Null))
}
