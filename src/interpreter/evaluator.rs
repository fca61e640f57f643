/// Lvalue resolution and assignment, including `let` declarations and
/// multi-target unpacking.
pub mod assignment;
/// The binary operator table over runtime values.
pub mod binary;
/// The native function library and its lookup table.
pub mod builtin;
/// The central recursive dispatcher over AST nodes.
pub mod core;
/// Evaluation of `for` statements.
pub mod for_loop;
/// Function application for user functions and builtins.
pub mod function;
/// The unary operator table over runtime values.
pub mod unary;
