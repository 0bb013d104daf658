use exprsimp::{
    ast::Expr,
    error::EvalError,
    report,
    tree::env::Environment,
    util::merge::merge_sorted,
};

fn env(bindings: &[(&str, i64)]) -> Environment {
    bindings.iter().map(|&(name, value)| (name, value)).collect()
}

fn cst(value: i64) -> Expr {
    Expr::constant(value)
}

fn var(name: &str) -> Expr {
    Expr::variable(name)
}

/// A representative set of trees exercising every node kind and every
/// simplification rule, including ones no rule touches.
fn corpus() -> Vec<Expr> {
    vec![cst(17),
         var("a"),
         Expr::add(cst(3), var("a")),
         Expr::add(cst(0), var("a")),
         Expr::add(var("a"), cst(0)),
         Expr::multiply(cst(0), var("b")),
         Expr::multiply(cst(1), var("b")),
         Expr::multiply(var("b"), cst(0)),
         Expr::multiply(var("b"), cst(1)),
         Expr::multiply(cst(0), cst(1)),
         Expr::subtract(var("a"), cst(0)),
         Expr::subtract(cst(5), cst(5)),
         Expr::subtract(cst(5), cst(2)),
         Expr::add(Expr::multiply(var("b"), cst(9)), var("a")),
         Expr::add(Expr::multiply(cst(0), var("a")), cst(0)),
         Expr::subtract(Expr::add(var("a"), cst(0)),
                        Expr::multiply(cst(1), var("b")))]
}

#[test]
fn constant_trees_ignore_the_environment() {
    let tree = Expr::add(cst(3), Expr::multiply(cst(4), cst(5)));

    let empty = Environment::new();
    let full = env(&[("a", 3), ("b", 111)]);

    assert_eq!(tree.eval(&empty).unwrap(), 23);
    assert_eq!(tree.eval(&full).unwrap(), 23);
}

#[test]
fn lecture_example_reports() {
    let env = env(&[("a", 3), ("c", 78), ("baf", 666), ("b", 111)]);

    let e1 = cst(17);
    let e2 = Expr::add(cst(3), var("a"));
    let e3 = Expr::add(Expr::multiply(var("b"), cst(9)), var("a"));

    assert_eq!(report(&e1, &env).unwrap(), "17 = 17 = 17");
    assert_eq!(report(&e2, &env).unwrap(), "(3 + a) = (3 + 3) = 6");
    assert_eq!(report(&e3, &env).unwrap(), "((b * 9) + a) = ((111 * 9) + 3) = 1002");
}

#[test]
fn display_is_environment_free_and_stable() {
    let tree = Expr::subtract(Expr::add(var("x"), cst(2)), Expr::multiply(var("y"), cst(0)));

    assert_eq!(tree.to_string(), "((x + 2) - (y * 0))");
    // Repeated calls agree, and no environment is ever consulted.
    assert_eq!(tree.to_string(), tree.to_string());
}

#[test]
fn format_substitutes_bound_values() {
    let env = env(&[("n", 42), ("m", -7)]);

    assert_eq!(var("n").format_with(&env).unwrap(), "42");
    assert_eq!(var("m").format_with(&env).unwrap(), "-7");
    assert_eq!(Expr::add(var("n"), var("m")).format_with(&env).unwrap(), "(42 + -7)");
}

#[test]
fn unbound_variable_is_an_error_not_a_crash() {
    let env = env(&[("a", 3)]);
    let tree = var("x");

    assert_eq!(tree.eval(&env),
               Err(EvalError::UnboundVariable { name: "x".to_string() }));
    assert_eq!(tree.format_with(&env),
               Err(EvalError::UnboundVariable { name: "x".to_string() }));

    // A variable buried in a larger tree fails the same way.
    let buried = Expr::add(cst(1), Expr::multiply(var("x"), cst(2)));
    assert!(buried.eval(&env).is_err());
    assert!(report(&buried, &env).is_err());
}

#[test]
fn additive_identities_fold() {
    assert_eq!(Expr::add(cst(0), var("a")).simplify(), var("a"));
    assert_eq!(Expr::add(var("a"), cst(0)).simplify(), var("a"));
    assert_eq!(Expr::add(var("a"), var("b")).simplify(), Expr::add(var("a"), var("b")));
}

#[test]
fn multiplicative_identities_and_zero_fold() {
    assert_eq!(Expr::multiply(cst(0), var("b")).simplify(), cst(0));
    assert_eq!(Expr::multiply(var("b"), cst(0)).simplify(), cst(0));
    assert_eq!(Expr::multiply(cst(1), var("b")).simplify(), var("b"));
    assert_eq!(Expr::multiply(var("b"), cst(1)).simplify(), var("b"));
    assert_eq!(Expr::multiply(var("a"), var("b")).simplify(),
               Expr::multiply(var("a"), var("b")));
    // Nested constants are not folded; only identities and zeros are.
    assert_eq!(Expr::multiply(cst(2), cst(3)).simplify(), Expr::multiply(cst(2), cst(3)));
}

#[test]
fn subtraction_rules_fold() {
    assert_eq!(Expr::subtract(var("a"), cst(0)).simplify(), var("a"));
    assert_eq!(Expr::subtract(cst(5), cst(5)).simplify(), cst(0));
    assert_eq!(Expr::subtract(cst(5), cst(2)).simplify(), Expr::subtract(cst(5), cst(2)));
    // 0 - a only folds when the operands are equal constants.
    assert_eq!(Expr::subtract(cst(0), var("a")).simplify(),
               Expr::subtract(cst(0), var("a")));
}

#[test]
fn multiply_tie_break_prefers_left() {
    // Both children match a rule; the left one wins, yielding 0 rather than
    // the right-rule result.
    assert_eq!(Expr::multiply(cst(0), cst(1)).simplify(), cst(0));
    assert_eq!(Expr::multiply(cst(1), cst(0)).simplify(), cst(0));
}

#[test]
fn children_reduce_before_the_parent_rule_fires() {
    // (0 * a) + 0 collapses all the way to 0 in one bottom-up pass: the
    // product folds first, then the addition sees two zero constants.
    let tree = Expr::add(Expr::multiply(cst(0), var("a")), cst(0));
    assert_eq!(tree.simplify(), cst(0));

    // (a + 0) - (1 * b) reduces both sides before rebuilding the subtraction.
    let tree = Expr::subtract(Expr::add(var("a"), cst(0)), Expr::multiply(cst(1), var("b")));
    assert_eq!(tree.simplify(), Expr::subtract(var("a"), var("b")));
}

#[test]
fn simplify_is_idempotent_on_corpus() {
    for tree in corpus() {
        let once = tree.simplify();
        assert_eq!(once.simplify(), once, "second pass changed {tree}");
    }
}

#[test]
fn simplify_preserves_evaluation() {
    let env = env(&[("a", 3), ("b", 111)]);

    for tree in corpus() {
        assert_eq!(tree.simplify().eval(&env).unwrap(),
                   tree.eval(&env).unwrap(),
                   "simplification changed the value of {tree}");
    }
}

#[test]
fn simplify_leaves_the_input_untouched() {
    let tree = Expr::multiply(cst(1), var("b"));
    let copy = tree.clone();

    let _ = tree.simplify();
    assert_eq!(tree, copy);
}

#[test]
fn overflow_wraps_silently() {
    let env = Environment::new();

    let tree = Expr::add(cst(i64::MAX), cst(1));
    assert_eq!(tree.eval(&env).unwrap(), i64::MIN);

    let tree = Expr::multiply(cst(i64::MAX), cst(2));
    assert_eq!(tree.eval(&env).unwrap(), -2);

    let tree = Expr::subtract(cst(i64::MIN), cst(1));
    assert_eq!(tree.eval(&env).unwrap(), i64::MAX);
}

#[test]
fn merge_interleaves_sorted_runs() {
    assert_eq!(merge_sorted(&[1, 3, 5, 7, 9], &[2, 4, 6, 8, 10]),
               vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 10]);
    assert_eq!(merge_sorted(&[1, 1, 2], &[1, 3]), vec![1, 1, 1, 2, 3]);
}

#[test]
fn merge_handles_uneven_and_empty_inputs() {
    assert_eq!(merge_sorted(&[], &[]), Vec::<i64>::new());
    assert_eq!(merge_sorted(&[1, 2, 3], &[]), vec![1, 2, 3]);
    assert_eq!(merge_sorted(&[], &[4, 5]), vec![4, 5]);
    assert_eq!(merge_sorted(&[10], &[1, 2, 3, 4]), vec![1, 2, 3, 4, 10]);

    let a = [-5, 0, 3];
    let b = [-2, 7];
    assert_eq!(merge_sorted(&a, &b).len(), a.len() + b.len());
}
