use std::{
    fs,
    path::{Path, PathBuf},
    process::ExitCode,
};

use brook::{eval_program, interpreter::environment::Env, parse_program, repl};
use clap::Parser;

/// brook is a small, dynamically typed, C-like scripting language.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to a script to run. The REPL starts when no script is given.
    script: Option<PathBuf>,
}

fn main() -> ExitCode {
    let args = Args::parse();

    match args.script {
        Some(path) => run_script(&path),
        None => match repl::start() {
            Ok(()) => ExitCode::SUCCESS,
            Err(error) => {
                eprintln!("Error: {error}");
                ExitCode::FAILURE
            },
        },
    }
}

fn run_script(path: &Path) -> ExitCode {
    let Ok(source) = fs::read_to_string(path) else {
        eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                  path.display());
        return ExitCode::FAILURE;
    };

    let program = match parse_program(&source) {
        Ok(program) => program,
        Err(errors) => {
            eprintln!("parser errors:");

            for error in errors {
                eprintln!("{error}");
            }

            return ExitCode::FAILURE;
        },
    };

    match eval_program(&program, &Env::new()) {
        Ok(_) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("Error: {error}");
            ExitCode::FAILURE
        },
    }
}
