//! # exprsimp
//!
//! exprsimp is a small library for building, evaluating, formatting, and
//! simplifying immutable arithmetic expression trees. Trees are built
//! programmatically from constants, variables, and the binary operations
//! `+`, `*`, and `-`; variables are resolved against an environment supplied
//! per call.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    ast::Expr,
    tree::{env::Environment, eval::EvalResult},
};

/// Defines the structure of expression trees.
///
/// This module declares the `Expr` enum that represents an arithmetic
/// formula as an immutable tree. Trees are constructed directly by callers;
/// there is no parser and no textual syntax.
///
/// # Responsibilities
/// - Defines the closed set of node kinds: constant, variable, add,
///   multiply, subtract.
/// - Provides constructors and `From` conversions for building trees.
/// - Guarantees exclusive ownership of children (no sharing, no cycles).
pub mod ast;
/// Provides unified error types for tree evaluation.
///
/// This module defines the errors that can be raised while evaluating or
/// formatting a tree. The only failure mode is resolving a variable that the
/// supplied environment does not bind.
///
/// # Responsibilities
/// - Defines the `EvalError` enum.
/// - Attaches the offending variable name for context.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Implements the operations on expression trees.
///
/// This module ties together environments, evaluation, rendering, and
/// simplification. Each operation is a finite recursive walk over the tree;
/// none mutates an existing node.
///
/// # Responsibilities
/// - Resolves variables through externally supplied environments.
/// - Evaluates trees to integers with wrapping arithmetic.
/// - Renders trees symbolically and with substituted values.
/// - Folds algebraic identities into a new, simpler tree.
pub mod tree;
/// General utilities independent of the expression tree.
///
/// # Responsibilities
/// - Merges ascending integer sequences.
pub mod util;

/// Renders the standard demonstration line for one expression.
///
/// The line has the shape `display = format = eval`: the symbolic rendering,
/// the rendering with variables substituted from `env`, and the evaluated
/// value, joined by ` = `.
///
/// # Errors
/// Returns an error if the expression references a variable that `env` does
/// not bind.
///
/// # Examples
/// ```
/// use exprsimp::{ast::Expr, report, tree::env::Environment};
///
/// let expr = Expr::add(Expr::constant(3), Expr::variable("a"));
/// let env: Environment = [("a", 3)].into_iter().collect();
///
/// assert_eq!(report(&expr, &env).unwrap(), "(3 + a) = (3 + 3) = 6");
///
/// // Unbound variables surface as errors, not crashes.
/// let expr = Expr::variable("missing");
/// assert!(report(&expr, &env).is_err());
/// ```
pub fn report(expr: &Expr, env: &Environment) -> EvalResult<String> {
    Ok(format!("{expr} = {} = {}", expr.format_with(env)?, expr.eval(env)?))
}
