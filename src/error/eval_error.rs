#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while evaluating or formatting an
/// expression tree.
pub enum EvalError {
    /// Tried to resolve a variable with no binding in the supplied
    /// environment.
    UnboundVariable {
        /// The name of the variable.
        name: String,
    },
}

impl std::fmt::Display for EvalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnboundVariable { name } => {
                write!(f, "Unbound variable '{name}'.")
            },
        }
    }
}

impl std::error::Error for EvalError {}
