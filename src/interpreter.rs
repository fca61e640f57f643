/// Name resolution with lexical scoping.
///
/// Declares the shared environment handle used by the evaluator and by
/// closures. Scopes chain outward to the global scope; function values keep
/// their defining scope alive.
pub mod environment;
/// Tree-walking evaluation of parsed programs.
///
/// The evaluator dispatches recursively over the AST, manages scopes and
/// control flow, and applies the operator tables and the builtin library.
pub mod evaluator;
/// Tokenization of source text.
///
/// Defines the token vocabulary and the on-demand lexer built on a
/// generated automaton. Lexical errors surface as `ILLEGAL` tokens that the
/// parser rejects.
pub mod lexer;
/// Top-down operator precedence parsing.
///
/// Builds precedence-correct expression trees from the token stream and
/// collects parse errors instead of stopping at the first one.
pub mod parser;
/// Runtime values and write handles.
///
/// Defines the tagged value union shared by the evaluator, the operator
/// tables and the builtins, plus the transient lvalue handles assignments
/// consume.
pub mod value;
