use std::ops::Range;
use super::{
    error::Error,
    token::{Float, Int, Name},
    Parse,
    Parser,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A number literal. Integers and floating-point numbers are both supported and represented here
/// as `f64`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LitNum {
    /// The value of the number literal.
    pub value: f64,

    /// The region of the source code that this literal was parsed from.
    pub span: Range<usize>,
}

impl Parse for LitNum {
    fn parse(input: &mut Parser) -> Result<Self, Error> {
        let (lexeme, span) = input
            .try_parse::<Int>()
            .map(|num| (num.lexeme, num.span))
            .or_else(|_| input.try_parse::<Float>().map(|num| (num.lexeme, num.span)))?;
        Ok(Self {
            // the tokenizer only accepts digits and a dot, which always parse as `f64`
            value: lexeme.parse().unwrap(),
            span,
        })
    }
}

/// A symbol / identifier literal. Symbols are used to represent variables. Names are
/// case-sensitive, so `y` and `Y` are distinct variables.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LitSym {
    /// The name of the symbol.
    pub name: String,

    /// The region of the source code that this literal was parsed from.
    pub span: Range<usize>,
}

impl Parse for LitSym {
    fn parse(input: &mut Parser) -> Result<Self, Error> {
        let token = input.try_parse::<Name>()?;
        Ok(Self {
            name: token.lexeme,
            span: token.span,
        })
    }
}

/// Represents a literal value in a polynomial expression.
///
/// A literal is any value that is written directly into the source code, either a nonnegative
/// number or a variable name.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Literal {
    /// A number literal. Integers and floating-point numbers are both supported and represented
    /// here as `f64`.
    Number(LitNum),

    /// A symbol / identifier literal. Symbols are used to represent variables.
    Symbol(LitSym),
}

impl Literal {
    /// Returns the span of the literal.
    pub fn span(&self) -> Range<usize> {
        match self {
            Literal::Number(num) => num.span.clone(),
            Literal::Symbol(name) => name.span.clone(),
        }
    }
}

impl Parse for Literal {
    fn parse(input: &mut Parser) -> Result<Self, Error> {
        input.try_parse::<LitNum>().map(Literal::Number)
            .or_else(|_| input.try_parse::<LitSym>().map(Literal::Symbol))
    }
}
