//! String-in, string-out commands over polynomial expressions.
//!
//! These functions bundle parsing, transformation, and printing into single calls, suitable for
//! driving from a REPL or other thin front end. Parse failures are propagated to the caller as
//! [`Error`]s rather than being swallowed; use [`Error::build_report`] to render them as
//! diagnostics against the input string.

use poly_parser::parser::{error::Error, expr::Expr, Parser};
use std::collections::HashMap;
use crate::symbolic::{self, SymExpr};

/// Parses the given source text into a [`SymExpr`].
///
/// Fails on any text not matching the expression grammar: empty input, unbalanced parentheses,
/// unsupported operators, and so on.
pub fn parse(input: &str) -> Result<SymExpr, Error> {
    let mut parser = Parser::new(input);
    Ok(SymExpr::from(parser.try_parse_full::<Expr>()?))
}

/// Parses the given source text, differentiates it with respect to `var`, and prints the result.
///
/// `var` is expected to be a non-empty alphabetic variable name; a name that can never appear in
/// an expression simply yields the derivative of a constant.
pub fn differentiate(input: &str, var: &str) -> Result<String, Error> {
    let expr = parse(input)?;
    Ok(symbolic::derivative(&expr, var).to_string())
}

/// Parses the given source text, substitutes variables from `env`, folds constants, and prints
/// the result. If every variable is bound, the output is a single plain decimal number.
pub fn simplify(input: &str, env: &HashMap<String, f64>) -> Result<String, Error> {
    let expr = parse(input)?;
    Ok(symbolic::simplify(&expr, env).to_string())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn differentiate_command() {
        assert_eq!(differentiate("x*x", "x").unwrap(), "(x*1+x*1)");
        assert_eq!(differentiate("x+y", "x").unwrap(), "(1+0)");
    }

    #[test]
    fn differentiate_bare_literals() {
        assert_eq!(differentiate("1", "x").unwrap(), "0");
        assert_eq!(differentiate("x", "x").unwrap(), "1");
    }

    #[test]
    fn simplify_command() {
        let env = HashMap::from([("var".to_string(), 100.0)]);
        assert_eq!(simplify("10 + 2 * var", &env).unwrap(), "210");
        assert_eq!(simplify("1+10+100", &HashMap::new()).unwrap(), "111");
    }

    #[test]
    fn parse_failure_is_propagated() {
        assert!(differentiate("3 x", "x").is_err());
        assert!(simplify("x +", &HashMap::new()).is_err());
        assert!(parse("").is_err());
        assert!(parse("(x").is_err());
        assert!(parse("x - 3").is_err());
    }
}
