/// An arithmetic expression, represented as an immutable tree.
///
/// `Expr` is a closed set of node kinds: integer constants, named variables,
/// and the three binary operations. Every compound node exclusively owns its
/// two children, so a value of this type is always a tree (no sharing, no
/// cycles). Nodes are never mutated after construction; operations that
/// rewrite a tree, like [`Expr::simplify`], build and return a new one.
///
/// Every operation on this type is written as an exhaustive `match`, so
/// adding a node kind makes the compiler point at each place that must learn
/// about it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// A literal integer value.
    Constant {
        /// The literal value.
        value: i64,
    },
    /// A named variable, resolved against an [`Environment`] at evaluation or
    /// formatting time.
    ///
    /// [`Environment`]: crate::tree::env::Environment
    Variable {
        /// The variable's name.
        name: String,
    },
    /// The sum of two subexpressions.
    Add {
        /// The left operand.
        left:  Box<Expr>,
        /// The right operand.
        right: Box<Expr>,
    },
    /// The product of two subexpressions.
    Multiply {
        /// The left operand.
        left:  Box<Expr>,
        /// The right operand.
        right: Box<Expr>,
    },
    /// The difference of two subexpressions (left minus right).
    Subtract {
        /// The left operand.
        left:  Box<Expr>,
        /// The right operand.
        right: Box<Expr>,
    },
}

impl Expr {
    /// Builds an [`Expr::Constant`] node.
    #[must_use]
    pub const fn constant(value: i64) -> Self {
        Self::Constant { value }
    }

    /// Builds an [`Expr::Variable`] node.
    #[must_use]
    pub fn variable(name: impl Into<String>) -> Self {
        Self::Variable { name: name.into() }
    }

    /// Builds an [`Expr::Add`] node owning both children.
    #[must_use]
    pub fn add(left: Self, right: Self) -> Self {
        Self::Add { left:  Box::new(left),
                    right: Box::new(right), }
    }

    /// Builds an [`Expr::Multiply`] node owning both children.
    #[must_use]
    pub fn multiply(left: Self, right: Self) -> Self {
        Self::Multiply { left:  Box::new(left),
                         right: Box::new(right), }
    }

    /// Builds an [`Expr::Subtract`] node owning both children.
    #[must_use]
    pub fn subtract(left: Self, right: Self) -> Self {
        Self::Subtract { left:  Box::new(left),
                         right: Box::new(right), }
    }
}

impl From<i64> for Expr {
    fn from(value: i64) -> Self {
        Self::constant(value)
    }
}

impl From<&str> for Expr {
    fn from(name: &str) -> Self {
        Self::variable(name)
    }
}

impl From<String> for Expr {
    fn from(name: String) -> Self {
        Self::variable(name)
    }
}
