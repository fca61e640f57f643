use std::{cell::RefCell, collections::HashMap, rc::Rc};

use crate::interpreter::value::core::Value;

/// A lexically scoped binding table.
///
/// An `Env` is a cheap handle to a shared scope: cloning it clones the
/// handle, not the bindings. Every scope optionally links to an enclosing
/// scope, and lookup walks that chain outward. Function values hold the
/// scope they were created in, which is what makes closures work: a call
/// opens a scope whose outer link is the function's captured scope, not the
/// caller's.
///
/// Declarations write to the local scope only. Plain assignment resolves the
/// defining scope first and writes there, so mutating a captured variable is
/// visible to every closure sharing the scope.
///
/// # Example
/// ```
/// use brook::interpreter::{environment::Env, value::core::Value};
///
/// let global = Env::new();
/// global.set("x", Value::Integer(1));
///
/// let inner = Env::new_enclosed(&global);
/// let (value, defining) = inner.get("x").unwrap();
///
/// assert_eq!(value, Value::Integer(1));
///
/// // Writing through the defining scope is seen from both handles.
/// defining.set("x", Value::Integer(2));
/// assert_eq!(global.get("x").unwrap().0, Value::Integer(2));
/// ```
#[derive(Clone)]
pub struct Env {
    inner: Rc<RefCell<Scope>>,
}

struct Scope {
    bindings: HashMap<String, Value>,
    outer:    Option<Env>,
}

impl Env {
    /// Creates the top-level scope, which has no outer link.
    #[must_use]
    pub fn new() -> Self {
        Self::with_outer(None)
    }

    /// Creates a scope enclosed by `outer`.
    ///
    /// Used for function calls and `for` statements; bare blocks share their
    /// enclosing scope.
    #[must_use]
    pub fn new_enclosed(outer: &Self) -> Self {
        Self::with_outer(Some(outer.clone()))
    }

    fn with_outer(outer: Option<Self>) -> Self {
        Self { inner: Rc::new(RefCell::new(Scope { bindings: HashMap::new(),
                                                   outer })), }
    }

    /// Looks a name up along the scope chain.
    ///
    /// # Returns
    /// The bound value together with a handle to the scope that defines it,
    /// or `None` when the name is unbound everywhere.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<(Value, Self)> {
        let scope = self.inner.borrow();

        if let Some(value) = scope.bindings.get(name) {
            return Some((value.clone(), self.clone()));
        }

        scope.outer.as_ref().and_then(|outer| outer.get(name))
    }

    /// Reports whether the name is bound in this scope, ignoring outer
    /// scopes. Declarations use this to reject duplicates without being
    /// confused by shadowed outer bindings.
    #[must_use]
    pub fn exists_local(&self, name: &str) -> bool {
        self.inner.borrow().bindings.contains_key(name)
    }

    /// Binds a name in this scope, replacing any previous local binding.
    pub fn set(&self, name: &str, value: Value) {
        self.inner
            .borrow_mut()
            .bindings
            .insert(name.to_string(), value);
    }

    /// Reports whether two handles refer to the same scope.
    #[must_use]
    pub fn same_scope(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl Default for Env {
    fn default() -> Self {
        Self::new()
    }
}

// Scopes can be cyclic through captured closures, so the debug form stays
// shallow: local binding names only.
impl std::fmt::Debug for Env {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let scope = self.inner.borrow();
        let mut names: Vec<&String> = scope.bindings.keys().collect();
        names.sort();

        f.debug_struct("Env")
         .field("bindings", &names)
         .field("has_outer", &scope.outer.is_some())
         .finish()
    }
}
