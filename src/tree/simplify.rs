use crate::ast::Expr;

impl Expr {
    /// Produces a new tree with identity and absorbing elements folded out.
    ///
    /// Both children are simplified first, then one local rule fires at the
    /// current node:
    ///
    /// - `0 + e` and `e + 0` become `e`
    /// - `0 * e` and `e * 0` become `0`
    /// - `1 * e` and `e * 1` become `e`
    /// - `e - 0` becomes `e`
    /// - `c - c` (equal constants) becomes `0`
    ///
    /// Rules on the left operand are checked before rules on the right, so
    /// `0 * 1` folds to `0`. This is a single bottom-up pass, not a
    /// fixed-point iteration: children are fully reduced before their parent
    /// rule fires, but no further passes run over the result. No other
    /// identities apply (no commutativity, no distribution, no folding of
    /// `2 + 3` into `5`).
    ///
    /// The input tree is left untouched.
    ///
    /// # Example
    /// ```
    /// use exprsimp::ast::Expr;
    ///
    /// let expr = Expr::multiply(Expr::constant(1), Expr::variable("b"));
    /// assert_eq!(expr.simplify(), Expr::variable("b"));
    /// ```
    #[must_use]
    pub fn simplify(&self) -> Self {
        match self {
            Self::Constant { .. } | Self::Variable { .. } => self.clone(),
            Self::Add { left, right } => simplify_add(left.simplify(), right.simplify()),
            Self::Multiply { left, right } => simplify_multiply(left.simplify(), right.simplify()),
            Self::Subtract { left, right } => simplify_subtract(left.simplify(), right.simplify()),
        }
    }
}

/// Rewrites an addition node whose children are already simplified.
fn simplify_add(left: Expr, right: Expr) -> Expr {
    if let Expr::Constant { value: 0 } = left {
        return right;
    }
    if let Expr::Constant { value: 0 } = right {
        return left;
    }
    Expr::add(left, right)
}

/// Rewrites a multiplication node whose children are already simplified.
///
/// The left operand's conditions are checked before the right operand's.
fn simplify_multiply(left: Expr, right: Expr) -> Expr {
    if let Expr::Constant { value: 0 } = left {
        return Expr::constant(0);
    }
    if let Expr::Constant { value: 1 } = left {
        return right;
    }
    if let Expr::Constant { value: 0 } = right {
        return Expr::constant(0);
    }
    if let Expr::Constant { value: 1 } = right {
        return left;
    }
    Expr::multiply(left, right)
}

/// Rewrites a subtraction node whose children are already simplified.
fn simplify_subtract(left: Expr, right: Expr) -> Expr {
    if let Expr::Constant { value: 0 } = right {
        return left;
    }
    if let (Expr::Constant { value: l }, Expr::Constant { value: r }) = (&left, &right) {
        if l == r {
            return Expr::constant(0);
        }
    }
    Expr::subtract(left, right)
}
