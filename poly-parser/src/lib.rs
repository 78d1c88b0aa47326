//! Tokenizer and parser for polynomial expressions built from addition and multiplication of
//! nonnegative numbers and alphabetic variables.
//!
//! The grammar is intentionally small:
//!
//! ```text
//! root       ::= sum
//! sum        ::= product ('+' product)*
//! product    ::= primitive ('*' primitive)*
//! primitive  ::= NUMBER | VARIABLE | '(' sum ')'
//! ```
//!
//! Whitespace is insignificant between tokens. Both operators are left-associative, so `a+b+c`
//! parses as `(a+b)+c`.
//!
//! # Example
//!
//! ```
//! use poly_parser::parser::{expr::Expr, Parser};
//!
//! let mut parser = Parser::new("10 + 2 * var");
//! let expr = parser.try_parse_full::<Expr>().unwrap();
//! ```

pub mod parser;
pub mod tokenizer;
