use std::{cell::RefCell, rc::Rc};

use crate::{
    ast::Statement,
    interpreter::{environment::Env, evaluator::builtin::BuiltinDef},
};

/// A shared, in-place mutable array of values.
///
/// Assignment copies the handle, not the contents, so every binding that
/// obtained the same array observes the same mutations.
pub type ArrayRef = Rc<RefCell<Vec<Value>>>;

/// Represents a runtime value in the interpreter.
///
/// This enum models every type that can appear in expressions, bindings,
/// function returns and conditions. Integers and strings are freshly
/// allocated per evaluation; arrays, functions and builtins are shared
/// handles.
#[derive(Debug, Clone)]
pub enum Value {
    /// A 64-bit signed integer. Arithmetic wraps on overflow.
    Integer(i64),
    /// A boolean value, `true` or `false`.
    Boolean(bool),
    /// An immutable UTF-8 string.
    String(String),
    /// The absence of a value.
    Null,
    /// An ordered, mutable sequence of values, shared by reference.
    Array(ArrayRef),
    /// A user-defined function together with its captured scope.
    Function(Rc<FunctionValue>),
    /// A native function from the builtin library.
    Builtin(&'static BuiltinDef),
    /// The internal carrier a `return` statement wraps its payload in while
    /// it unwinds through enclosing blocks. Never observable by user code or
    /// builtins.
    ReturnValue(Box<Value>),
    /// A tuple-like list produced by a top-level comma expression and
    /// consumed by multi-target assignment.
    ExprList(Vec<Value>),
}

/// A user-defined function value.
///
/// The body is a clone of the parsed block; the environment handle is the
/// scope that was active when the literal was evaluated, which every call
/// encloses. A function stored inside its own captured scope forms a cycle
/// that is tolerated and not reclaimed.
#[derive(Debug)]
pub struct FunctionValue {
    /// The parameter names, bound positionally at each call.
    pub parameters: Vec<String>,
    /// The function body, always a [`Statement::Block`].
    pub body:       Statement,
    /// The defining scope captured at creation.
    pub env:        Env,
}

impl Value {
    /// Returns the kind string used in error messages and by the REPL.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Integer(_) => "INTEGER",
            Self::Boolean(_) => "BOOLEAN",
            Self::String(_) => "STRING",
            Self::Null => "NULL",
            Self::Array(_) => "ARRAY",
            Self::Function(_) => "FUNCTION",
            Self::Builtin(_) => "BUILTIN",
            Self::ReturnValue(_) => "RETURN_VALUE",
            Self::ExprList(_) => "EXPLIST",
        }
    }

    /// Coerces the value to a boolean for use as a condition.
    ///
    /// `false`, `null`, `0`, the empty string and the empty array are falsy;
    /// every other value is truthy.
    ///
    /// # Example
    /// ```
    /// use brook::interpreter::value::core::Value;
    ///
    /// assert!(Value::Integer(2).is_truthy());
    /// assert!(!Value::Integer(0).is_truthy());
    /// assert!(!Value::String(String::new()).is_truthy());
    /// assert!(!Value::Null.is_truthy());
    /// ```
    #[must_use]
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Boolean(b) => *b,
            Self::Integer(n) => *n != 0,
            Self::String(s) => !s.is_empty(),
            Self::Array(elements) => !elements.borrow().is_empty(),
            Self::Null => false,
            _ => true,
        }
    }

    /// Reads the value as an `i64` where integers and booleans coerce.
    ///
    /// Booleans promote to `1` and `0`. Every other kind yields `None`; the
    /// operator tables turn that into their own mismatch errors.
    #[must_use]
    pub const fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Integer(n) => Some(*n),
            Self::Boolean(true) => Some(1),
            Self::Boolean(false) => Some(0),
            _ => None,
        }
    }

    /// Returns `true` if the value is an array.
    #[must_use]
    pub const fn is_array(&self) -> bool {
        matches!(self, Self::Array(_))
    }

    /// Wraps a vector of values into a fresh shared array.
    #[must_use]
    pub fn array(elements: Vec<Self>) -> Self {
        Self::Array(Rc::new(RefCell::new(elements)))
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Boolean(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::String(v.to_string())
    }
}

impl From<Vec<Self>> for Value {
    fn from(v: Vec<Self>) -> Self {
        Self::array(v)
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Integer(a), Self::Integer(b)) => a == b,
            (Self::Boolean(a), Self::Boolean(b)) => a == b,
            (Self::String(a), Self::String(b)) => a == b,
            (Self::Null, Self::Null) => true,
            (Self::Array(a), Self::Array(b)) => {
                Rc::ptr_eq(a, b) || *a.borrow() == *b.borrow()
            },
            (Self::Function(a), Self::Function(b)) => Rc::ptr_eq(a, b),
            (Self::Builtin(a), Self::Builtin(b)) => std::ptr::eq(*a, *b),
            (Self::ReturnValue(a), Self::ReturnValue(b)) => a == b,
            (Self::ExprList(a), Self::ExprList(b)) => a == b,
            _ => false,
        }
    }
}

/// The REPL print form of a value.
///
/// Arrays render their elements recursively, functions render as
/// re-parseable source and builtins render as the opaque text
/// `builtin function`.
impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Boolean(b) => write!(f, "{b}"),
            Self::String(s) => write!(f, "\"{s}\""),
            Self::Null => write!(f, "null"),
            Self::Array(elements) => {
                write!(f, "[")?;

                for (index, value) in elements.borrow().iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }

                    write!(f, "{value}")?;
                }

                write!(f, "]")
            },
            Self::Function(function) => {
                write!(f,
                       "fn({}) {{\n{}\n}}",
                       function.parameters.join(", "),
                       function.body)
            },
            Self::Builtin(_) => write!(f, "builtin function"),
            Self::ReturnValue(value) => write!(f, "{value}"),
            Self::ExprList(values) => {
                let rendered = values.iter()
                                     .map(ToString::to_string)
                                     .collect::<Vec<_>>()
                                     .join(", ");
                write!(f, "{rendered}")
            },
        }
    }
}
