use crate::{ast::Expr, error::EvalError, tree::env::Environment};

/// Result type used by evaluation and formatting.
///
/// All fallible tree operations return either a value of type `T` or an
/// [`EvalError`] describing the failure.
pub type EvalResult<T> = Result<T, EvalError>;

impl Expr {
    /// Computes the integer value of the tree under the given environment.
    ///
    /// Constants yield their literal value, variables resolve through `env`,
    /// and binary nodes evaluate both children and combine them with the
    /// corresponding operation. Arithmetic wraps on overflow (64-bit
    /// two's-complement); nothing is detected or reported.
    ///
    /// The walk is read-only and touches no state outside `env`, so it is
    /// safe to evaluate the same tree from multiple threads.
    ///
    /// # Errors
    /// Returns [`EvalError::UnboundVariable`] if any variable in the tree has
    /// no binding in `env`.
    ///
    /// # Example
    /// ```
    /// use exprsimp::{ast::Expr, tree::env::Environment};
    ///
    /// let expr = Expr::add(Expr::constant(3), Expr::variable("a"));
    /// let env: Environment = [("a", 3)].into_iter().collect();
    ///
    /// assert_eq!(expr.eval(&env).unwrap(), 6);
    /// ```
    pub fn eval(&self, env: &Environment) -> EvalResult<i64> {
        match self {
            Self::Constant { value } => Ok(*value),
            Self::Variable { name } => env.value_of(name),
            Self::Add { left, right } => Ok(left.eval(env)?.wrapping_add(right.eval(env)?)),
            Self::Multiply { left, right } => Ok(left.eval(env)?.wrapping_mul(right.eval(env)?)),
            Self::Subtract { left, right } => Ok(left.eval(env)?.wrapping_sub(right.eval(env)?)),
        }
    }
}
