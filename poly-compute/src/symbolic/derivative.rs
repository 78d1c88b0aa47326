//! Symbolic differentiation of expressions.

use poly_parser::parser::token::op::BinOpKind;
use super::expr::SymExpr;

/// Computes the symbolic derivative of the given expression with respect to the variable `var`.
///
/// The sum and product rules are applied verbatim:
///
/// - `(f + g)' = f' + g'`
/// - `(f * g)' = f * g' + g * f'`
///
/// No simplification is performed, so the result usually contains redundant `0` and `1` terms.
/// That is intentional; cleanup is left to a subsequent [`simplify`](super::simplify) call.
///
/// ```
/// use poly_compute::symbolic::{derivative, SymExpr};
/// use poly_parser::parser::{expr::Expr, Parser};
///
/// let mut parser = Parser::new("x*x");
/// let expr = SymExpr::from(parser.try_parse_full::<Expr>().unwrap());
/// assert_eq!(derivative(&expr, "x").to_string(), "(x*1+x*1)");
/// ```
pub fn derivative(expr: &SymExpr, var: &str) -> SymExpr {
    match expr {
        SymExpr::Number(_) => SymExpr::Number(0.0),
        SymExpr::Symbol(name) => if name == var {
            SymExpr::Number(1.0)
        } else {
            SymExpr::Number(0.0)
        },
        SymExpr::Binary { op: BinOpKind::Add, lhs, rhs } => {
            derivative(lhs, var) + derivative(rhs, var)
        },
        SymExpr::Binary { op: BinOpKind::Mul, lhs, rhs } => {
            (*lhs.clone()) * derivative(rhs, var) + (*rhs.clone()) * derivative(lhs, var)
        },
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use poly_parser::parser::{expr::Expr, Parser};
    use super::*;

    /// Parses the given source into a [`SymExpr`].
    fn parse(source: &str) -> SymExpr {
        let mut parser = Parser::new(source);
        SymExpr::from(parser.try_parse_full::<Expr>().unwrap())
    }

    /// Differentiates the parsed source and compares the printed derivative.
    fn check(source: &str, var: &str, expected: &str) {
        assert_eq!(derivative(&parse(source), var).to_string(), expected);
    }

    #[test]
    fn constant() {
        check("1", "x", "0");
        check("3.14", "x", "0");
    }

    #[test]
    fn variable() {
        check("x", "x", "1");
        check("y", "x", "0");
    }

    #[test]
    fn sum_rule() {
        check("x+y", "x", "(1+0)");
        check("x + x + x", "x", "((1+1)+1)");
    }

    #[test]
    fn product_rule() {
        check("x*x", "x", "(x*1+x*1)");
        check("x * y", "y", "(x*1+y*0)");
    }

    #[test]
    fn nested_product_rule() {
        // d/dx (x*x*x), with the left-nested (x*x) differentiated in place
        check("x*x*x", "x", "(x*x*1+x*(x*1+x*1))");
    }

    #[test]
    fn symmetric_products() {
        check("x*y + y*x", "x", "((x*0+y*1)+(y*1+x*0))");
    }

    #[test]
    fn no_cleanup_of_zeros_and_ones() {
        // the raw rule output is kept verbatim
        check("2*x", "x", "(2*1+x*0)");
    }

    #[test]
    fn case_sensitive_variable() {
        check("Y", "y", "0");
        check("y", "y", "1");
    }
}
