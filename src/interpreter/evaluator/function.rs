use crate::{
    ast::Expression,
    error::RuntimeError,
    interpreter::{
        environment::Env,
        evaluator::core::{EvalResult, eval_expressions, eval_expression, eval_statement},
        value::core::{FunctionValue, Value},
    },
};

/// Evaluates a call expression.
///
/// The callee and then the arguments evaluate strictly left to right before
/// dispatch. User functions run their body in a fresh scope enclosed by the
/// function's captured environment (not the caller's), which is what gives
/// closures their lexical behaviour. Builtins receive the evaluated
/// argument vector directly.
pub fn eval_call(callee: &Expression, arguments: &[Expression], env: &Env) -> EvalResult<Value> {
    let callee = eval_expression(callee, env)?;
    let arguments = eval_expressions(arguments, env)?;

    match callee {
        Value::Function(function) => apply_function(&function, arguments),
        Value::Builtin(builtin) => builtin.apply(&arguments),
        other => Err(RuntimeError::NotAFunction { got: other.kind() }),
    }
}

/// Applies a user-defined function to evaluated arguments.
///
/// Parameters bind positionally in the call scope. The body runs as a
/// block; a [`Value::ReturnValue`] coming back out is unwrapped here, and a
/// body that falls off the end yields its last statement's value, or `null`
/// when there is none.
fn apply_function(function: &FunctionValue, arguments: Vec<Value>) -> EvalResult<Value> {
    if arguments.len() != function.parameters.len() {
        return Err(RuntimeError::WrongArgumentCount { got:  arguments.len(),
                                                      want: format!("want={}",
                                                                    function.parameters.len()), });
    }

    let call_env = Env::new_enclosed(&function.env);

    for (parameter, value) in function.parameters.iter().zip(arguments) {
        call_env.set(parameter, value);
    }

    match eval_statement(&function.body, &call_env)? {
        Some(Value::ReturnValue(value)) => Ok(*value),
        Some(value) => Ok(value),
        None => Ok(Value::Null),
    }
}
