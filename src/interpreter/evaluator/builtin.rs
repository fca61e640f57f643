use std::cmp::Ordering;

use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::{binary, core::EvalResult},
        value::core::{ArrayRef, Value},
    },
};

/// Type alias for builtin function handlers.
///
/// A builtin receives the evaluated argument vector and returns a value or
/// a runtime error. Builtins never see or produce the internal return
/// sentinel.
pub type BuiltinFn = fn(&[Value]) -> EvalResult<Value>;

/// Specifies the allowed number of arguments for a builtin.
#[derive(Debug, Clone, Copy)]
pub enum Arity {
    /// Exactly `n` arguments.
    Exact(usize),
    /// At least `n` arguments.
    AtLeast(usize),
    /// Any count listed in the slice.
    OneOf(&'static [usize]),
}

impl Arity {
    /// Tests whether the given argument count satisfies this constraint.
    fn accepts(self, count: usize) -> bool {
        match self {
            Self::Exact(want) => count == want,
            Self::AtLeast(want) => count >= want,
            Self::OneOf(options) => options.contains(&count),
        }
    }

    /// Renders the want clause for the arity error message: `want=2`,
    /// `want>0` or `want=1 or 2`. Open-ended arities carry their own
    /// comparison operator instead of the `=`.
    fn describe(self) -> String {
        match self {
            Self::Exact(want) => format!("want={want}"),
            Self::AtLeast(want) => format!("want>{}", want.saturating_sub(1)),
            Self::OneOf(options) => format!("want={}",
                                            options.iter()
                                                   .map(ToString::to_string)
                                                   .collect::<Vec<_>>()
                                                   .join(" or ")),
        }
    }
}

/// One entry of the builtin library: a name, an arity constraint and the
/// native handler.
#[derive(Debug)]
pub struct BuiltinDef {
    name:  &'static str,
    arity: Arity,
    func:  BuiltinFn,
}

impl BuiltinDef {
    /// The name the builtin registers under.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Checks the arity constraint and runs the handler.
    ///
    /// # Errors
    /// Returns [`RuntimeError::WrongArgumentCount`] when the count is not
    /// accepted, otherwise whatever the handler reports.
    pub fn apply(&self, arguments: &[Value]) -> EvalResult<Value> {
        if !self.arity.accepts(arguments.len()) {
            return Err(RuntimeError::WrongArgumentCount { got:  arguments.len(),
                                                          want: self.arity.describe(), });
        }

        (self.func)(arguments)
    }
}

/// Defines the builtin library by generating its lookup table and name
/// list.
macro_rules! builtin_functions {
    (
        $(
            $name:literal => {
                arity: $arity:expr,
                func: $func:expr $(,)?
            }
        ),* $(,)?
    ) => {
        static BUILTIN_TABLE: &[BuiltinDef] = &[
            $(
                BuiltinDef { name: $name, arity: $arity, func: $func },
            )*
        ];
        /// The names of all registered builtins.
        pub const BUILTIN_FUNCTIONS: &[&str] = &[
            $($name,)*
        ];
    };
}

builtin_functions! {
    "len"     => { arity: Arity::Exact(1), func: len },
    "exit"    => { arity: Arity::Exact(0), func: exit },
    "append"  => { arity: Arity::AtLeast(1), func: append },
    "pop"     => { arity: Arity::Exact(1), func: pop },
    "reverse" => { arity: Arity::Exact(1), func: reverse },
    "sort"    => { arity: Arity::Exact(1), func: sort },
    "sum"     => { arity: Arity::OneOf(&[1, 2]), func: sum },
}

/// Looks a builtin up by name. Identifier evaluation falls back to this
/// table after the environment chain comes up empty.
#[must_use]
pub fn lookup(name: &str) -> Option<&'static BuiltinDef> {
    BUILTIN_TABLE.iter().find(|builtin| builtin.name == name)
}

/// `len(x)`: the element count of an array or the byte length of a string.
fn len(arguments: &[Value]) -> EvalResult<Value> {
    match &arguments[0] {
        Value::String(s) => Ok(Value::Integer(i64::try_from(s.len()).unwrap_or(i64::MAX))),
        Value::Array(elements) => {
            Ok(Value::Integer(i64::try_from(elements.borrow().len()).unwrap_or(i64::MAX)))
        },
        other => Err(RuntimeError::LenUnsupported { got: other.kind() }),
    }
}

/// `exit()`: terminates the process with status 0.
fn exit(_arguments: &[Value]) -> EvalResult<Value> {
    std::process::exit(0)
}

/// `append(arr, xs...)`: appends in place and returns the same array.
fn append(arguments: &[Value]) -> EvalResult<Value> {
    let array = check_array("append", &arguments[0])?;

    array.borrow_mut().extend(arguments[1..].iter().cloned());

    Ok(arguments[0].clone())
}

/// `pop(arr)`: removes and returns the last element.
fn pop(arguments: &[Value]) -> EvalResult<Value> {
    let array = check_array("pop", &arguments[0])?;
    let value = array.borrow_mut().pop();

    value.ok_or(RuntimeError::PopFromEmptyArray)
}

/// `reverse(arr)`: reverses in place and returns the same array.
fn reverse(arguments: &[Value]) -> EvalResult<Value> {
    let array = check_array("reverse", &arguments[0])?;

    array.borrow_mut().reverse();

    Ok(arguments[0].clone())
}

/// `sort(arr)`: stable ascending sort in place through the `<` comparator.
///
/// Comparability is validated against the first element before anything
/// moves, so an array that cannot be ordered is left untouched.
fn sort(arguments: &[Value]) -> EvalResult<Value> {
    let array = check_array("sort", &arguments[0])?;

    {
        let elements = array.borrow();

        if let Some((first, rest)) = elements.split_first() {
            for other in rest {
                binary::less_than(first, other)?;
            }
        }
    }

    array.borrow_mut().sort_by(|a, b| {
                          if binary::less_than(a, b).unwrap_or(false) {
                              Ordering::Less
                          } else if binary::less_than(b, a).unwrap_or(false) {
                              Ordering::Greater
                          } else {
                              Ordering::Equal
                          }
                      });

    Ok(arguments[0].clone())
}

/// `sum(arr[, init])`: folds the elements with `+`.
///
/// Without an initializer an empty array sums to integer `0`; with one, the
/// initializer seeds the fold and comes back unchanged for an empty array.
/// Because the fold uses the `+` operator, string and array elements
/// concatenate the way they would in source.
fn sum(arguments: &[Value]) -> EvalResult<Value> {
    let array = check_array("sum", &arguments[0])?;
    let elements = array.borrow().clone();

    match arguments.get(1) {
        Some(init) => fold_add(init.clone(), &elements),
        None => match elements.split_first() {
            None => Ok(Value::Integer(0)),
            Some((first, rest)) => fold_add(first.clone(), rest),
        },
    }
}

fn fold_add(init: Value, elements: &[Value]) -> EvalResult<Value> {
    let mut accumulator = init;

    for element in elements {
        accumulator = binary::eval_binary("+", &accumulator, element)?;
    }

    Ok(accumulator)
}

/// Requires an array argument, naming the builtin in the failure.
fn check_array(function: &'static str, value: &Value) -> EvalResult<ArrayRef> {
    match value {
        Value::Array(array) => Ok(array.clone()),
        other => Err(RuntimeError::BadArrayArgument { function,
                                                      got: other.kind(), }),
    }
}
