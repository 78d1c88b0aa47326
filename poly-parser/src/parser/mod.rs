pub mod binary;
pub mod error;
pub mod expr;
pub mod literal;
pub mod paren;
pub mod token;

use error::{Error, kind};
use poly_error::ErrorKind;
use super::tokenizer::{tokenize_complete, Token};
use std::ops::Range;

/// Attempts to parse a value from the given stream of tokens, using multiple parsing functions
/// in order. The first function that succeeds is used to parse the value.
///
/// This function can also catch fatal errors and immediately short-circuit the parsing
/// process.
///
/// If parsing is successful, the stream is advanced past the consumed tokens and the parsed
/// value is returned. Otherwise, the stream is left unchanged and the error of the last
/// attempted parsing function is returned.
#[macro_export]
macro_rules! try_parse_catch_fatal {
    ($($expr:expr),+ $(,)?) => {{
        $(
            match $expr {
                Ok(value) => return Ok(value),
                Err(err) if err.fatal => return Err(err),
                // ignore this error and try the next parser, or return it
                err => err,
            }
        )+
    }};
}

/// A high-level parser for the expression language. This is the type to use to parse an arbitrary
/// piece of source code into an abstract syntax tree.
#[derive(Debug, Clone)]
pub struct Parser<'source> {
    /// The tokens that this parser is currently parsing.
    tokens: Box<[Token<'source>]>,

    /// The index of the **next** token to be parsed.
    cursor: usize,
}

impl<'source> Parser<'source> {
    /// Create a new parser for the given source.
    pub fn new(source: &'source str) -> Self {
        Self {
            tokens: tokenize_complete(source),
            cursor: 0,
        }
    }

    /// Creates an error that points at the current token, or the end of the source code if the
    /// cursor is at the end of the stream.
    pub fn error(&self, kind: impl ErrorKind + 'static) -> Error {
        Error::new(vec![self.span()], kind)
    }

    /// Creates a fatal error that points at the current token, or the end of the source code if
    /// the cursor is at the end of the stream.
    pub fn error_fatal(&self, kind: impl ErrorKind + 'static) -> Error {
        Error::new_fatal(vec![self.span()], kind)
    }

    /// Returns a span pointing at the end of the source code.
    pub fn eof_span(&self) -> Range<usize> {
        self.tokens.last().map_or(0..0, |token| token.span.end..token.span.end)
    }

    /// Returns the span of the current token, or the end of the source code if the cursor is at
    /// the end of the stream.
    pub fn span(&self) -> Range<usize> {
        self.tokens
            .get(self.cursor)
            .map_or(self.eof_span(), |token| token.span.clone())
    }

    /// Moves the cursor of this parser to the cursor of another parser, usually one slightly
    /// ahead of this one. This is useful when emulating peeking with a cloned parser.
    pub fn set_cursor(&mut self, other: &Parser) {
        self.cursor = other.cursor;
    }

    /// Returns the current token. The cursor is not moved. Returns [`None`] if the cursor is at
    /// the end of the stream.
    pub fn current_token(&self) -> Option<&Token<'source>> {
        self.tokens.get(self.cursor)
    }

    /// Returns the next token to be parsed, then advances the cursor. Whitespace tokens are
    /// skipped.
    ///
    /// Returns an EOF error if there are no more tokens.
    pub fn next_token(&mut self) -> Result<Token<'source>, Error> {
        while self.cursor < self.tokens.len() {
            let token = &self.tokens[self.cursor];
            self.cursor += 1;
            if token.is_whitespace() {
                continue;
            } else {
                // cloning is cheap: only Range<_> is cloned
                return Ok(token.clone());
            }
        }

        Err(self.error(kind::UnexpectedEof))
    }

    /// Speculatively parses a value from the given stream of tokens. This function can be used
    /// in the [`Parse::parse`] implementation of a type with the given [`Parser`], as it will
    /// automatically backtrack the cursor position if parsing fails.
    ///
    /// If parsing is successful, the stream is advanced past the consumed tokens and the parsed
    /// value is returned. Otherwise, the stream is left unchanged and an error is returned.
    pub fn try_parse<T: Parse>(&mut self) -> Result<T, Error> {
        self.try_parse_with_fn(T::parse)
    }

    /// Speculatively parses a value from the given stream of tokens, using a custom parsing
    /// function to parse the value. This function can be used in the [`Parse::parse`]
    /// implementation of a type with the given [`Parser`], as it will automatically backtrack the
    /// cursor position if parsing fails.
    ///
    /// If parsing is successful, the stream is advanced past the consumed tokens and the parsed
    /// value is returned. Otherwise, the stream is left unchanged and an error is returned.
    pub fn try_parse_with_fn<T, F>(&mut self, f: F) -> Result<T, Error>
    where
        F: FnOnce(&mut Parser) -> Result<T, Error>,
    {
        let start = self.cursor;
        match f(self) {
            Ok(value) => Ok(value),
            err => {
                self.cursor = start;
                err
            },
        }
    }

    /// Speculatively parses a value from the given stream of tokens, with a validation predicate.
    /// The value must parse successfully, **and** the predicate must return [`Ok`] for this
    /// function to return successfully.
    ///
    /// If parsing is successful, the stream is advanced past the consumed tokens and the parsed
    /// value is returned. Otherwise, the stream is left unchanged and an error is returned.
    pub fn try_parse_then<T: Parse, F>(&mut self, predicate: F) -> Result<T, Error>
    where
        F: FnOnce(&T, &Parser) -> Result<(), Error>,
    {
        let start = self.cursor;

        // closure workaround allows us to use `?` in the closure
        let compute = || {
            let value = T::parse(self)?;
            predicate(&value, self)?;
            Ok(value)
        };

        match compute() {
            Ok(value) => Ok(value),
            err => {
                self.cursor = start;
                err
            },
        }
    }

    /// Attempts to parse a value from the given stream of tokens. All the tokens must be consumed
    /// by the parser (trailing whitespace is allowed); if not, an error is returned.
    pub fn try_parse_full<T: Parse>(&mut self) -> Result<T, Error> {
        let value = T::parse(self)?;
        while let Some(token) = self.current_token() {
            if token.is_whitespace() {
                self.cursor += 1;
            } else {
                return Err(self.error(kind::ExpectedEof));
            }
        }
        Ok(value)
    }
}

/// Any type that can be parsed from a source of tokens.
pub trait Parse: Sized {
    /// Parses a value from the given stream of tokens, advancing the stream past the consumed
    /// tokens if parsing is successful.
    ///
    /// This function should be used by consumers of the library.
    fn parse(input: &mut Parser) -> Result<Self, Error>;
}

/// The associativity of a binary operation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Associativity {
    /// The binary operation is left-associative, meaning `a op b op c` is evaluated as
    /// `(a op b) op c`.
    Left,

    /// The binary operation is right-associative, meaning `a op b op c` is evaluated as
    /// `a op (b op c)`.
    Right,
}

/// The precedence of an operation, in order from lowest precedence (evaluated last) to highest
/// precedence (evaluated first).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Precedence {
    /// Any precedence.
    Any,

    /// Precedence of addition (`+`), which separates terms.
    Term,

    /// Precedence of multiplication (`*`), which separates factors.
    Factor,
}

impl PartialOrd for Precedence {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        let left = *self as u8;
        let right = *other as u8;
        left.partial_cmp(&right)
    }
}
