//! Partial evaluation of expressions with constant folding.

use poly_parser::parser::token::op::BinOpKind;
use std::collections::HashMap;
use super::expr::SymExpr;

/// Substitutes variables from the given environment and folds constant subtrees.
///
/// Variables found in `env` are replaced with their numeric value; variables not in `env` are
/// left untouched, and extra keys in `env` are ignored. Folding happens bottom-up: after both
/// operands of a binary operation have been simplified, the operation is evaluated if (and only
/// if) both operands are numbers. Nothing is distributed or reordered, so `2*(3+x)` stays as-is
/// until `x` is bound.
///
/// If every variable in the expression is bound by `env`, the result is a single
/// [`SymExpr::Number`].
///
/// ```
/// use poly_compute::symbolic::{simplify, SymExpr};
/// use poly_parser::parser::{expr::Expr, Parser};
/// use std::collections::HashMap;
///
/// let mut parser = Parser::new("10 + 2 * var");
/// let expr = SymExpr::from(parser.try_parse_full::<Expr>().unwrap());
///
/// let env = HashMap::from([("var".to_string(), 100.0)]);
/// assert_eq!(simplify(&expr, &env), SymExpr::Number(210.0));
/// ```
pub fn simplify(expr: &SymExpr, env: &HashMap<String, f64>) -> SymExpr {
    match expr {
        SymExpr::Number(value) => SymExpr::Number(*value),
        SymExpr::Symbol(name) => match env.get(name) {
            Some(value) => SymExpr::Number(*value),
            None => SymExpr::Symbol(name.clone()),
        },
        SymExpr::Binary { op, lhs, rhs } => {
            let lhs = simplify(lhs, env);
            let rhs = simplify(rhs, env);
            match (lhs, rhs) {
                (SymExpr::Number(left), SymExpr::Number(right)) => match op {
                    BinOpKind::Add => SymExpr::Number(left + right),
                    BinOpKind::Mul => SymExpr::Number(left * right),
                },
                (lhs, rhs) => SymExpr::Binary {
                    op: *op,
                    lhs: Box::new(lhs),
                    rhs: Box::new(rhs),
                },
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use assert_float_eq::assert_float_absolute_eq;
    use pretty_assertions::assert_eq;
    use poly_parser::parser::{expr::Expr, Parser};
    use super::*;

    /// Parses the given source into a [`SymExpr`].
    fn parse(source: &str) -> SymExpr {
        let mut parser = Parser::new(source);
        SymExpr::from(parser.try_parse_full::<Expr>().unwrap())
    }

    /// Builds an environment from name / value pairs.
    fn env<const N: usize>(pairs: [(&str, f64); N]) -> HashMap<String, f64> {
        pairs.into_iter().map(|(name, value)| (name.to_string(), value)).collect()
    }

    /// Simplifies the parsed source and compares the printed result.
    fn check<const N: usize>(source: &str, pairs: [(&str, f64); N], expected: &str) {
        assert_eq!(simplify(&parse(source), &env(pairs)).to_string(), expected);
    }

    #[test]
    fn constant_folding_without_env() {
        check("1+10+100", [], "111");
        check("2*5.0*100", [], "1000");
        check("10+5.0*(10.99+39.01)", [], "260");
    }

    #[test]
    fn substitution() {
        check("10 + 2 * var", [("var", 100.0)], "210");
        check("10+2+x+y", [("x", 8.0)], "(20+y)");
        check("10+2+x+y", [("x", 8.0), ("y", 80.0)], "100");
        check("10*2*x*y", [("x", 8.0)], "160*y");
        check("10*2*x*y", [("x", 8.0), ("y", 80.0)], "12800");
    }

    #[test]
    fn folding_respects_grouping() {
        check("(10+2)*x+y", [("x", 8.0)], "(96+y)");
        check("10 * (2 + x) * y", [("x", 8.0), ("y", 80.0)], "8000");
    }

    #[test]
    fn irrelevant_keys_ignored() {
        check("10 + 2 + y", [("x", 8.0)], "(12+y)");
    }

    #[test]
    fn case_sensitive_keys() {
        check("y + Y", [("y", 1.0)], "(1+Y)");
    }

    #[test]
    fn empty_env_preserves_variables() {
        for source in ["x", "x + y", "2*x*y + 3"] {
            assert_eq!(simplify(&parse(source), &env([])), parse(source));
        }
    }

    #[test]
    fn fully_bound_is_idempotent() {
        let bindings = env([("x", 8.0), ("y", 80.0)]);
        let once = simplify(&parse("(1+x)*(2+y)"), &bindings);

        let SymExpr::Number(value) = once else {
            panic!("expected a fully folded number, got {once}");
        };
        assert_float_absolute_eq!(value, 738.0);

        assert_eq!(simplify(&SymExpr::Number(value), &bindings), SymExpr::Number(value));
    }

    #[test]
    fn cleans_up_derivative_output() {
        use crate::symbolic::derivative;

        // d/dx (x*x) = x*1 + x*1, which folds once x is bound
        let derived = derivative(&parse("x*x"), "x");
        assert_eq!(simplify(&derived, &env([("x", 3.0)])), SymExpr::Number(6.0));
    }
}
