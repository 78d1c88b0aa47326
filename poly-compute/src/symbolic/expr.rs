//! A representation of polynomial expressions that is easier to manipulate than an AST.
//!
//! The [`Expr`](poly_parser::parser::expr::Expr) type from `poly_parser` is convenient for
//! parsing, but it carries source spans and explicit parenthesis nodes that are irrelevant for
//! algebraic manipulation. This module defines [`SymExpr`], a stripped-down tree with exactly
//! three kinds of nodes: numbers, variables, and binary operations.

use poly_parser::parser::{
    expr::Expr as AstExpr,
    literal::Literal,
    token::op::BinOpKind,
};
use std::fmt;
use std::fmt::Write;
use std::hash::{Hash, Hasher};
use std::ops::{Add, Mul};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A polynomial expression over nonnegative numbers and case-sensitive variables.
///
/// The tree is immutable once constructed; every operation on it produces a new tree. Numbers
/// produced by parsing are always finite and nonnegative, since the grammar has no negation;
/// a non-finite number can only appear by substituting one through [`simplify`](super::simplify).
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SymExpr {
    /// A literal numeric constant, such as `2` or `3.14`.
    Number(f64),

    /// A variable, such as `x` or `y`. Names are case-sensitive.
    Symbol(String),

    /// A binary operation over two subexpressions, such as `x + y` or `2 * x`.
    Binary {
        /// The operation being performed.
        op: BinOpKind,

        /// The left-hand side of the operation.
        lhs: Box<SymExpr>,

        /// The right-hand side of the operation.
        rhs: Box<SymExpr>,
    },
}

impl SymExpr {
    /// Returns the canonical fully-parenthesized contents string of the expression.
    ///
    /// Unlike the [`Display`](fmt::Display) form, **every** binary operation is parenthesized
    /// here, regardless of the operator. This makes the contents string a faithful encoding of
    /// the tree shape: two expressions are structurally equal if and only if their contents
    /// strings are character-equal.
    pub fn contents(&self) -> String {
        let mut out = String::new();
        self.write_contents(&mut out);
        out
    }

    fn write_contents(&self, out: &mut String) {
        match self {
            Self::Number(value) => {
                // `f64`'s `Display` never uses exponent notation
                let _ = write!(out, "{}", canonical(*value));
            },
            Self::Symbol(name) => out.push_str(name),
            Self::Binary { op, lhs, rhs } => {
                out.push('(');
                lhs.write_contents(out);
                out.push(match op {
                    BinOpKind::Add => '+',
                    BinOpKind::Mul => '*',
                });
                rhs.write_contents(out);
                out.push(')');
            },
        }
    }
}

/// Normalizes `-0.0` to `0.0` before rendering. The two compare equal, so they must render as
/// the same text for hashing to agree with equality; `-0.0` can enter through an environment
/// value during simplification.
fn canonical(value: f64) -> f64 {
    if value == 0.0 { 0.0 } else { value }
}

/// The printed, *parsable* form of the expression.
///
/// This differs from [`SymExpr::contents`] only in parenthesization: additions are always
/// parenthesized, while a multiplication is parenthesized only when it appears as the right
/// operand of another multiplication. Multiplication associates to the left, so dropping the
/// parentheses there would re-associate the product; everywhere else they are redundant. Parsing
/// the printed form of any expression produced by this crate yields a structurally equal
/// expression.
impl fmt::Display for SymExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(value) => write!(f, "{}", canonical(*value)),
            Self::Symbol(name) => write!(f, "{}", name),
            Self::Binary { op: BinOpKind::Add, lhs, rhs } => write!(f, "({}+{})", lhs, rhs),
            Self::Binary { op: BinOpKind::Mul, lhs, rhs } => {
                if matches!(**rhs, Self::Binary { op: BinOpKind::Mul, .. }) {
                    write!(f, "{}*({})", lhs, rhs)
                } else {
                    write!(f, "{}*{}", lhs, rhs)
                }
            },
        }
    }
}

/// [`PartialEq`] is implemented manually to treat two `NaN` numbers as equal. This keeps equality
/// consistent with comparing contents strings, where every `NaN` renders as the same text.
impl PartialEq for SymExpr {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Number(a), Self::Number(b)) => a == b || (a.is_nan() && b.is_nan()),
            (Self::Symbol(a), Self::Symbol(b)) => a == b,
            (
                Self::Binary { op: a_op, lhs: a_lhs, rhs: a_rhs },
                Self::Binary { op: b_op, lhs: b_lhs, rhs: b_rhs },
            ) => a_op == b_op && a_lhs == b_lhs && a_rhs == b_rhs,
            _ => false,
        }
    }
}

impl Eq for SymExpr {}

/// [`Hash`] hashes the canonical contents string, so expressions that compare equal always hash
/// equally, even when they were built through different routes (parsing, differentiation, or
/// direct construction).
impl Hash for SymExpr {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.contents().hash(state);
    }
}

impl From<AstExpr> for SymExpr {
    fn from(expr: AstExpr) -> Self {
        match expr {
            AstExpr::Literal(Literal::Number(num)) => Self::Number(num.value),
            AstExpr::Literal(Literal::Symbol(sym)) => Self::Symbol(sym.name),
            // the tree structure already encodes the grouping
            AstExpr::Paren(paren) => Self::from(*paren.expr),
            AstExpr::Binary(binary) => Self::Binary {
                op: binary.op.kind,
                lhs: Box::new(Self::from(*binary.lhs)),
                rhs: Box::new(Self::from(*binary.rhs)),
            },
        }
    }
}

impl Add for SymExpr {
    type Output = SymExpr;

    fn add(self, rhs: SymExpr) -> SymExpr {
        SymExpr::Binary {
            op: BinOpKind::Add,
            lhs: Box::new(self),
            rhs: Box::new(rhs),
        }
    }
}

impl Mul for SymExpr {
    type Output = SymExpr;

    fn mul(self, rhs: SymExpr) -> SymExpr {
        SymExpr::Binary {
            op: BinOpKind::Mul,
            lhs: Box::new(self),
            rhs: Box::new(rhs),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use poly_parser::parser::{expr::Expr, Parser};
    use std::collections::hash_map::DefaultHasher;
    use super::*;

    /// Parses the given source into a [`SymExpr`].
    fn parse(source: &str) -> SymExpr {
        let mut parser = Parser::new(source);
        SymExpr::from(parser.try_parse_full::<Expr>().unwrap())
    }

    fn hash_of(expr: &SymExpr) -> u64 {
        let mut hasher = DefaultHasher::new();
        expr.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn left_associative_folding() {
        assert_eq!(
            parse("a+b+c"),
            (SymExpr::Symbol("a".to_string()) + SymExpr::Symbol("b".to_string()))
                + SymExpr::Symbol("c".to_string()),
        );
        assert_eq!(
            parse("a*b*c"),
            (SymExpr::Symbol("a".to_string()) * SymExpr::Symbol("b".to_string()))
                * SymExpr::Symbol("c".to_string()),
        );
    }

    #[test]
    fn parens_dissolve() {
        assert_eq!(parse("(x)"), SymExpr::Symbol("x".to_string()));
        assert_eq!(parse("((3 + x))"), SymExpr::Number(3.0) + SymExpr::Symbol("x".to_string()));
    }

    #[test]
    fn grouping_is_structural() {
        // same contents once parenthesized differently, different trees
        assert_ne!(parse("a+(b+c)"), parse("a+b+c"));
        assert_ne!(parse("x*(y*z)"), parse("x*y*z"));
    }

    #[test]
    fn contents_fully_parenthesized() {
        assert_eq!(parse("1 + 2*x + y").contents(), "((1+(2*x))+y)");
        assert_eq!(parse("3.14").contents(), "3.14");
    }

    #[test]
    fn display_parenthesization() {
        assert_eq!(parse("1 + 2*x + y").to_string(), "((1+2*x)+y)");
        assert_eq!(parse("x * (y + 3) * z").to_string(), "x*(y+3)*z");
    }

    #[test]
    fn display_integral_numbers() {
        assert_eq!(SymExpr::Number(111.0).to_string(), "111");
        assert_eq!(SymExpr::Number(0.5).to_string(), "0.5");
        assert_eq!(SymExpr::Number(8000.0).to_string(), "8000");
    }

    #[test]
    fn right_nested_mul_keeps_parens() {
        // without the parentheses, the printed product would re-associate to the left
        let expr = SymExpr::Symbol("x".to_string())
            * (SymExpr::Symbol("y".to_string()) * SymExpr::Symbol("z".to_string()));
        assert_eq!(expr.to_string(), "x*(y*z)");
        assert_eq!(parse(&expr.to_string()), expr);
        assert_ne!(expr, parse("x*y*z"));
    }

    #[test]
    fn negative_zero_renders_as_zero() {
        let pos = SymExpr::Number(0.0);
        let neg = SymExpr::Number(-0.0);
        assert_eq!(neg.to_string(), "0");
        assert_eq!(neg.contents(), "0");
        assert_eq!(pos, neg);
        assert_eq!(hash_of(&pos), hash_of(&neg));
    }

    #[test]
    fn case_sensitive_variables() {
        assert_ne!(parse("y"), parse("Y"));
    }

    #[test]
    fn roundtrip_through_display() {
        for source in [
            "x",
            "17",
            "0.25",
            "x + y + z",
            "2*x*y",
            "(1+x)*(2+y)",
            "10*(2+x)*y",
            "x*(y*z)",
            "a*(b*(c*d))",
        ] {
            let expr = parse(source);
            let reparsed = parse(&expr.to_string());
            assert_eq!(expr, reparsed);
            assert_eq!(hash_of(&expr), hash_of(&reparsed));
        }
    }

    #[test]
    fn equal_expressions_hash_equally() {
        let built = (SymExpr::Number(1.0) + SymExpr::Symbol("x".to_string()))
            * SymExpr::Symbol("y".to_string());
        let parsed = parse("(1 + x) * y");
        assert_eq!(built, parsed);
        assert_eq!(hash_of(&built), hash_of(&parsed));
    }
}
