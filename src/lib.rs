//! # brook
//!
//! brook is a small, dynamically typed, C-like scripting language. The crate
//! contains the whole pipeline: a lexer producing tokens on demand, a Pratt
//! parser building precedence-correct syntax trees, and a tree-walking
//! evaluator with lexically scoped environments, first-class functions with
//! closures, reference-semantics arrays and a small builtin library.
//!
//! The binary fronts the same pipeline with a REPL and a script runner.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

/// Defines the structure of parsed code.
///
/// Declares the `Program`, `Statement` and `Expression` types that represent
/// source code as a tree. The AST is built by the parser, traversed by the
/// evaluator, and renders back to equivalent source through `Display`.
pub mod ast;
/// Provides the error types for parsing and evaluation.
///
/// Parse errors are collected per run; runtime errors abort evaluation.
/// Their display texts are part of the language's interface.
pub mod error;
/// Implements the language pipeline: lexer, parser, environments, values and
/// the evaluator.
pub mod interpreter;
/// The interactive shell wired over the public interface.
pub mod repl;

use crate::{
    ast::Program,
    error::{ParseError, RuntimeError},
    interpreter::{environment::Env, evaluator, lexer::Lexer, parser::core::Parser, value::core::Value},
};

/// Parses source text into a [`Program`].
///
/// # Errors
/// Returns every parse error collected over the run; the program is not
/// evaluated when any statement failed to parse.
///
/// # Examples
/// ```
/// let program = brook::parse_program("let a = 1; a + 2;").unwrap();
/// assert_eq!(program.statements.len(), 2);
///
/// let errors = brook::parse_program("let = 5;").unwrap_err();
/// assert!(!errors.is_empty());
/// ```
pub fn parse_program(source: &str) -> Result<Program, Vec<ParseError>> {
    Parser::new(Lexer::new(source)).parse_program()
}

/// Evaluates a parsed program against an environment.
///
/// The result is the last statement's value, or `None` when that statement
/// produces nothing. Passing the same environment across calls accumulates
/// state, which is how the REPL keeps its session.
///
/// # Errors
/// Returns the first runtime error raised during evaluation.
///
/// # Examples
/// ```
/// use brook::interpreter::{environment::Env, value::core::Value};
///
/// let env = Env::new();
/// let program = brook::parse_program("(5 + 10 * 2 + 15 / 3) * 2 + -10").unwrap();
///
/// let result = brook::eval_program(&program, &env).unwrap();
/// assert_eq!(result, Some(Value::Integer(50)));
/// ```
pub fn eval_program(program: &Program, env: &Env) -> Result<Option<Value>, RuntimeError> {
    evaluator::core::eval_program(program, env)
}
