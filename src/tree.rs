/// The environment module maps variable names to integer values.
///
/// An environment is supplied externally per evaluation or formatting call.
/// Lookup is fallible: resolving a name with no binding yields a typed
/// [`EvalError::UnboundVariable`] instead of a fault.
///
/// # Responsibilities
/// - Stores flat name-to-value bindings (no scoping, no shadowing rules).
/// - Resolves names with an explicit found/not-found result.
/// - Renders bindings deterministically for display.
///
/// [`EvalError::UnboundVariable`]: crate::error::EvalError::UnboundVariable
pub mod env;

/// The eval module computes the integer value of an expression tree.
///
/// Evaluation is a single recursive walk: constants yield their literal,
/// variables are resolved against the environment, and binary nodes combine
/// the values of their children. Arithmetic uses wrapping 64-bit semantics,
/// so overflow is silent rather than reported.
///
/// # Responsibilities
/// - Defines the `EvalResult` alias used by every fallible operation.
/// - Evaluates each node kind, propagating unbound-variable errors.
pub mod eval;

/// The render module turns expression trees into strings.
///
/// Two renderings share the same fully parenthesized infix shape: the
/// symbolic one (`Display`) prints variable names, while the substituted one
/// (`format_with`) prints the values an environment binds them to.
///
/// # Responsibilities
/// - Implements `Display` for expressions (pure, environment-free).
/// - Implements environment-substituted formatting with fallible lookup.
pub mod render;

/// The simplify module rewrites trees by folding out algebraic identities.
///
/// Simplification is a single bottom-up pass: both children are simplified
/// first, then one local rule fires at the current node. Only identity and
/// absorbing elements are folded; no commutativity, distribution, or
/// fixed-point iteration.
///
/// # Responsibilities
/// - Produces a new tree; the input is never mutated.
/// - Applies the per-node rewrite rules with left-operand precedence.
pub mod simplify;
