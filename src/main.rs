use clap::Parser;
use exprsimp::{ast::Expr, report, tree::env::Environment};

/// exprsimp demonstrates immutable arithmetic expression trees: it builds a
/// few sample trees and prints each one symbolically, with variables
/// substituted, and fully evaluated.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {}

fn main() {
    Args::parse();

    let trees = [Expr::constant(17),
                 Expr::add(Expr::constant(3), Expr::variable("a")),
                 Expr::add(Expr::multiply(Expr::variable("b"), Expr::constant(9)),
                           Expr::variable("a"))];

    let env: Environment =
        [("a", 3), ("c", 78), ("baf", 666), ("b", 111)].into_iter().collect();

    println!("Env: {env}");

    for expr in &trees {
        match report(expr, &env) {
            Ok(line) => println!("{line}"),
            Err(e) => eprintln!("{e}"),
        }
    }
}
