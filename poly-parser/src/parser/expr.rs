use std::ops::Range;
use crate::{
    parser::{
        binary::Binary,
        error::{kind, Error},
        literal::Literal,
        paren::Paren,
        token::CloseParen,
        Parse,
        Parser,
        Precedence,
    },
    try_parse_catch_fatal,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Represents a general polynomial expression.
///
/// An expression is any valid piece of source code that denotes a polynomial: a number, a
/// variable, or a sum or product of smaller expressions.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Expr {
    /// A literal value.
    Literal(Literal),

    /// A parenthesized expression, such as `(1 + 2)`.
    Paren(Paren),

    /// A binary operation, such as `1 + 2` or `x * y`.
    Binary(Binary),
}

impl Expr {
    /// Returns the span of the expression.
    pub fn span(&self) -> Range<usize> {
        match self {
            Expr::Literal(literal) => literal.span(),
            Expr::Paren(paren) => paren.span(),
            Expr::Binary(binary) => binary.span(),
        }
    }
}

impl Parse for Expr {
    fn parse(input: &mut Parser) -> Result<Self, Error> {
        if input.clone().try_parse::<CloseParen>().is_ok() {
            return Err(input.error_fatal(kind::UnclosedParenthesis { opening: false }));
        }

        let lhs = input.try_parse::<Primary>().map(Expr::from)?;
        Binary::parse_expr(input, lhs, Precedence::Any)
    }
}

/// Represents a primary expression.
///
/// Primary expressions are the simplest expressions, and are the building blocks of more complex
/// expressions.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Primary {
    /// A literal value.
    Literal(Literal),

    /// A parenthesized expression, such as `(1 + 2)`.
    Paren(Paren),
}

impl Primary {
    /// Returns the span of the primary expression.
    pub fn span(&self) -> Range<usize> {
        match self {
            Primary::Literal(literal) => literal.span(),
            Primary::Paren(paren) => paren.span(),
        }
    }
}

impl Parse for Primary {
    fn parse(input: &mut Parser) -> Result<Self, Error> {
        let _ = try_parse_catch_fatal!(input.try_parse::<Literal>().map(Self::Literal));

        input.try_parse::<Paren>().map(Self::Paren)
    }
}

impl From<Primary> for Expr {
    fn from(primary: Primary) -> Self {
        match primary {
            Primary::Literal(literal) => Self::Literal(literal),
            Primary::Paren(paren) => Self::Paren(paren),
        }
    }
}
