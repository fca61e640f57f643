use rustyline::{DefaultEditor, Result as RlResult, error::ReadlineError};

use crate::{
    eval_program,
    interpreter::{environment::Env, value::core::Value},
    parse_program,
};

const PROMPT: &str = ">>> ";

/// Runs the interactive shell until end of input.
///
/// Every line parses and evaluates against one persistent environment, so
/// bindings and functions survive across inputs. Parse errors print as a
/// list and the line is not evaluated; runtime errors print with an
/// `Error:` prefix and the session continues.
///
/// # Errors
/// Returns a readline error when the underlying terminal fails.
pub fn start() -> RlResult<()> {
    let mut editor = DefaultEditor::new()?;
    let env = Env::new();

    println!("Feel free to type in commands");

    loop {
        match editor.readline(PROMPT) {
            Ok(line) => {
                if line.trim().is_empty() {
                    continue;
                }

                let _ = editor.add_history_entry(line.as_str());
                run_line(&line, &env);
            },
            Err(ReadlineError::Interrupted) => {
                println!("^C");
            },
            Err(ReadlineError::Eof) => break,
            Err(error) => {
                eprintln!("Error: {error}");
                break;
            },
        }
    }

    Ok(())
}

/// Parses and evaluates one line of input, printing what the original shell
/// would: inspect forms for values, nothing for declarations and
/// expression-list results.
fn run_line(line: &str, env: &Env) {
    let program = match parse_program(line) {
        Ok(program) => program,
        Err(errors) => {
            println!("parser errors:");

            for error in errors {
                println!("{error}");
            }

            return;
        },
    };

    match eval_program(&program, env) {
        Ok(Some(value)) => {
            if !matches!(value, Value::ExprList(_)) {
                println!("{value}");
            }
        },
        Ok(None) => {},
        Err(error) => println!("Error: {error}"),
    }
}
