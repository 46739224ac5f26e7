//! Lexical environments.
//!
//! An [`Environment`] is a handle to one scope; cloning the handle shares the
//! scope. Each scope owns its bindings and links to the scope it was created
//! in, forming a chain that lookups walk from innermost to outermost.
//!
//! Closures keep a handle to the scope they were defined in, so a call's
//! scope lives as long as any closure created during the call.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use rustc_hash::FxHashMap;

use crate::Value;

/// A single scope: its own bindings plus the enclosing scope.
#[derive(Default)]
struct Scope {
    bindings: FxHashMap<String, Value>,
    outer: Option<Environment>,
}

/// Shared handle to a scope in the environment chain.
#[derive(Clone, Default)]
pub struct Environment(Rc<RefCell<Scope>>);

impl Environment {
    /// A root scope with no enclosing scope.
    pub fn new() -> Self {
        Environment::default()
    }

    /// A fresh scope whose lookups fall back to `outer`.
    pub fn new_enclosed(outer: &Environment) -> Self {
        Environment(Rc::new(RefCell::new(Scope {
            bindings: FxHashMap::default(),
            outer: Some(outer.clone()),
        })))
    }

    /// Look `name` up in this scope, then each enclosing scope in turn.
    pub fn get(&self, name: &str) -> Option<Value> {
        let scope = self.0.borrow();
        if let Some(value) = scope.bindings.get(name) {
            return Some(value.clone());
        }
        scope.outer.as_ref().and_then(|outer| outer.get(name))
    }

    /// Bind `name` in this scope, shadowing any outer binding.
    pub fn set(&self, name: impl Into<String>, value: Value) {
        self.0.borrow_mut().bindings.insert(name.into(), value);
    }

    /// Number of scopes from here to the root, counting this one.
    pub fn depth(&self) -> usize {
        let outer = self.0.borrow().outer.clone();
        1 + outer.map_or(0, |outer| outer.depth())
    }

    /// Names bound in this scope, sorted.
    pub fn local_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.0.borrow().bindings.keys().cloned().collect();
        names.sort_unstable();
        names
    }

    /// Whether both handles refer to the same scope.
    pub fn ptr_eq(&self, other: &Environment) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for Environment {
    // Bindings can hold closures over this very scope, so only names print.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Environment")
            .field("names", &self.local_names())
            .field("depth", &self.depth())
            .finish()
    }
}
