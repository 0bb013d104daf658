use std::collections::HashMap;

use crate::{error::EvalError, tree::eval::EvalResult};

/// Stores the variable bindings an expression is evaluated against.
///
/// An `Environment` is a flat mapping from variable name to integer value,
/// built by the caller and passed by reference to [`Expr::eval`] and
/// [`Expr::format_with`]. Lookups never fault: a missing name surfaces as
/// [`EvalError::UnboundVariable`] so the caller decides whether that is
/// fatal.
///
/// A variable only has to be bound in the environment actually passed to the
/// call that resolves it; different calls may use different environments for
/// the same tree.
///
/// [`Expr::eval`]: crate::ast::Expr::eval
/// [`Expr::format_with`]: crate::ast::Expr::format_with
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Environment {
    bindings: HashMap<String, i64>,
}

impl Environment {
    /// Creates an empty environment with no bindings.
    #[must_use]
    pub fn new() -> Self {
        Self { bindings: HashMap::new() }
    }

    /// Binds `name` to `value`, replacing any previous binding of the same
    /// name.
    pub fn bind(&mut self, name: impl Into<String>, value: i64) {
        self.bindings.insert(name.into(), value);
    }

    /// Resolves a variable name to its bound value.
    ///
    /// # Errors
    /// Returns [`EvalError::UnboundVariable`] if `name` has no binding.
    ///
    /// # Example
    /// ```
    /// use exprsimp::tree::env::Environment;
    ///
    /// let mut env = Environment::new();
    /// env.bind("a", 3);
    ///
    /// assert_eq!(env.value_of("a").unwrap(), 3);
    /// assert!(env.value_of("b").is_err());
    /// ```
    pub fn value_of(&self, name: &str) -> EvalResult<i64> {
        self.bindings
            .get(name)
            .copied()
            .ok_or_else(|| EvalError::UnboundVariable { name: name.to_string() })
    }

    /// Returns `true` if `name` currently has a binding.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.bindings.contains_key(name)
    }
}

impl<S: Into<String>> FromIterator<(S, i64)> for Environment {
    fn from_iter<I: IntoIterator<Item = (S, i64)>>(iter: I) -> Self {
        Self { bindings: iter.into_iter().map(|(name, value)| (name.into(), value)).collect() }
    }
}

impl std::fmt::Display for Environment {
    /// Renders the bindings as `{a: 3, b: 111}` with names in sorted order,
    /// so the output is stable across runs.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut names: Vec<&String> = self.bindings.keys().collect();
        names.sort();

        write!(f, "{{")?;
        for (i, name) in names.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{name}: {}", self.bindings[*name])?;
        }
        write!(f, "}}")
    }
}
