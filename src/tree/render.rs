use crate::{
    ast::Expr,
    tree::{env::Environment, eval::EvalResult},
};

impl std::fmt::Display for Expr {
    /// Renders the tree as fully parenthesized infix notation.
    ///
    /// Constants print as their decimal value, variables as their name, and
    /// every binary node as `(left OP right)`. The output is a pure function
    /// of the tree shape; no environment is involved, so rendering never
    /// fails and repeated calls produce identical strings.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Constant { value } => write!(f, "{value}"),
            Self::Variable { name } => write!(f, "{name}"),
            Self::Add { left, right } => write!(f, "({left} + {right})"),
            Self::Multiply { left, right } => write!(f, "({left} * {right})"),
            Self::Subtract { left, right } => write!(f, "({left} - {right})"),
        }
    }
}

impl Expr {
    /// Renders the tree like `Display`, but with every variable replaced by
    /// the decimal value it is bound to in `env`.
    ///
    /// The structural shape is identical to the symbolic rendering; only the
    /// leaves differ. Each call re-walks the tree and re-resolves every
    /// variable; no results are shared with [`Expr::eval`].
    ///
    /// # Errors
    /// Returns [`EvalError::UnboundVariable`] under the same condition as
    /// [`Expr::eval`]: some variable in the tree has no binding in `env`.
    ///
    /// [`EvalError::UnboundVariable`]: crate::error::EvalError::UnboundVariable
    ///
    /// # Example
    /// ```
    /// use exprsimp::{ast::Expr, tree::env::Environment};
    ///
    /// let expr = Expr::add(Expr::constant(3), Expr::variable("a"));
    /// let env: Environment = [("a", 3)].into_iter().collect();
    ///
    /// assert_eq!(expr.to_string(), "(3 + a)");
    /// assert_eq!(expr.format_with(&env).unwrap(), "(3 + 3)");
    /// ```
    pub fn format_with(&self, env: &Environment) -> EvalResult<String> {
        match self {
            Self::Constant { value } => Ok(value.to_string()),
            Self::Variable { name } => Ok(env.value_of(name)?.to_string()),
            Self::Add { left, right } => {
                Ok(format!("({} + {})", left.format_with(env)?, right.format_with(env)?))
            },
            Self::Multiply { left, right } => {
                Ok(format!("({} * {})", left.format_with(env)?, right.format_with(env)?))
            },
            Self::Subtract { left, right } => {
                Ok(format!("({} - {})", left.format_with(env)?, right.format_with(env)?))
            },
        }
    }
}
