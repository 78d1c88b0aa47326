//! Algebraic manipulation of expressions.
//!
//! # Expression representation
//!
//! Expressions in this module are represented as a tree of [`SymExpr`] nodes. It mirrors the
//! [`poly_parser::parser::expr::Expr`] nodes produced by [`poly_parser`], with two differences:
//! span information is dropped, and parenthesized groupings are dissolved into their inner
//! expression, since the tree structure already encodes the grouping.
//!
//! If you have a [`poly_parser::parser::expr::Expr`], you can convert it to a [`SymExpr`] using
//! the [`From`] trait:
//!
//! ```
//! use poly_compute::symbolic::SymExpr;
//! use poly_parser::parser::{expr::Expr, Parser};
//!
//! let mut parser = Parser::new("x * (y + 3)");
//! let ast_expr = parser.try_parse_full::<Expr>().unwrap();
//!
//! let expr = SymExpr::from(ast_expr);
//! assert_eq!(expr.to_string(), "x*(y+3)");
//! ```
//!
//! # Structural equality
//!
//! The [`PartialEq`] implementation for [`SymExpr`] implements **structural equality**: two
//! expressions are equal if and only if they are built from the same nodes in the same shape.
//! `x + y` and `y + x` are semantically equal, but not structurally equal. Structural equality
//! is equivalent to comparing the canonical contents strings of the two expressions (see
//! [`SymExpr::contents`]), and the [`Hash`](std::hash::Hash) implementation hashes that string so
//! that equal expressions always hash equally.
//!
//! # Differentiation and simplification
//!
//! [`derivative()`] computes the symbolic derivative of an expression with respect to a variable,
//! applying the sum and product rules verbatim without any cleanup. [`simplify()`] substitutes
//! variables from an environment and folds constant subtrees bottom-up, which also cleans up the
//! redundant `0` and `1` terms produced by differentiation once their operands become numeric.

pub mod derivative;
pub mod expr;
pub mod simplify;

pub use derivative::derivative;
pub use expr::SymExpr;
pub use simplify::simplify;
