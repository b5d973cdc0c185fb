use std::collections::HashMap;

use crate::interpreter::value::core::Value;

/// A single binding stored in one of the variable tables.
#[derive(Debug, Clone, PartialEq)]
pub struct Variable {
    /// The bound value.
    pub value:     Value,
    /// `true` when the binding lives in the shared table.
    pub is_shared: bool,
}

/// Which of the two tables a binding belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    /// Bindings created by plain assignment.
    Local,
    /// Bindings copied over with `sunum`.
    Shared,
}

/// One name → variable mapping. Keys are unique; order is irrelevant.
#[derive(Debug, Default, Clone)]
pub struct VariableTable {
    variables: HashMap<String, Variable>,
}

impl VariableTable {
    /// Looks up a binding by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Variable> {
        self.variables.get(name)
    }

    /// Creates the binding, or replaces the value of an existing one. A value
    /// of a different kind simply replaces the old one.
    pub fn set(&mut self, name: &str, value: Value, is_shared: bool) {
        self.variables
            .insert(name.to_string(), Variable { value, is_shared });
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.variables.contains_key(name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.variables.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }
}

/// The interpreter's variable state: one local table and one shared table.
///
/// The tables are not a scope stack. A name may be bound in both at once with
/// independent values, and both live for the whole interpreter run.
///
/// Lookups search the local table first and fall back to the shared one, so a
/// local assignment shadows a shared binding of the same name.
#[derive(Debug, Default, Clone)]
pub struct Environment {
    local:  VariableTable,
    shared: VariableTable,
}

impl Environment {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn local(&self) -> &VariableTable {
        &self.local
    }

    #[must_use]
    pub const fn shared(&self) -> &VariableTable {
        &self.shared
    }

    /// Finds a binding by the lookup rule: local first, then shared.
    ///
    /// # Example
    /// ```
    /// use sunum::interpreter::{environment::Environment, value::core::Value};
    ///
    /// let mut env = Environment::new();
    /// env.assign("x", Value::Number(1.0));
    /// env.mark_shared("x");
    /// env.assign("x", Value::Number(2.0));
    ///
    /// assert_eq!(env.lookup("x").map(|v| &v.value), Some(&Value::Number(2.0)));
    /// assert_eq!(env.shared().get("x").map(|v| &v.value), Some(&Value::Number(1.0)));
    /// ```
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<&Variable> {
        self.local.get(name).or_else(|| self.shared.get(name))
    }

    /// Which table `lookup` would find the name in.
    #[must_use]
    pub fn resolve(&self, name: &str) -> Option<Tier> {
        if self.local.contains(name) {
            Some(Tier::Local)
        } else if self.shared.contains(name) {
            Some(Tier::Shared)
        } else {
            None
        }
    }

    /// Creates or overwrites a local binding.
    pub fn assign(&mut self, name: &str, value: Value) {
        self.local.set(name, value, false);
    }

    /// Overwrites an existing binding in whichever table `lookup` finds it,
    /// keeping its tier. Returns `false`, changing nothing, if the name is
    /// unbound.
    pub fn reassign(&mut self, name: &str, value: Value) -> bool {
        match self.resolve(name) {
            Some(Tier::Local) => self.local.set(name, value, false),
            Some(Tier::Shared) => self.shared.set(name, value, true),
            None => return false,
        }
        true
    }

    /// Copies the current local value of `name` into the shared table. The
    /// local binding is left as it is. Returns `false` if there is no local
    /// binding to copy.
    pub fn mark_shared(&mut self, name: &str) -> bool {
        let Some(variable) = self.local.get(name) else {
            return false;
        };
        let value = variable.value.clone();
        self.shared.set(name, value, true);
        true
    }
}
