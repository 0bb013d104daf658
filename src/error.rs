/// Evaluation errors.
///
/// Contains all error types that can be raised while evaluating or formatting
/// an expression tree against an environment. The only failure mode in this
/// domain is a variable whose name has no binding.
pub mod eval_error;

pub use eval_error::EvalError;
