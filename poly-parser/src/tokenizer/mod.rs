pub mod token;

use logos::{Lexer, Logos};
pub use token::{Token, TokenKind};

/// Returns an iterator over the token kinds produced by the tokenizer.
pub fn tokenize(input: &str) -> Lexer<TokenKind> {
    TokenKind::lexer(input)
}

/// Returns an owned array containing all of the tokens produced by the tokenizer. This allows us
/// to backtrack in case of an error.
pub fn tokenize_complete(input: &str) -> Box<[Token]> {
    let mut lexer = tokenize(input);
    let mut tokens = Vec::new();

    while let Some(Ok(kind)) = lexer.next() {
        tokens.push(Token {
            span: lexer.span(),
            kind,
            lexeme: lexer.slice(),
        });
    }

    tokens.into_boxed_slice()
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Compares the tokens produced by the tokenizer to the raw expected tokens.
    fn compare_tokens<'source, const N: usize>(input: &'source str, expected: [(TokenKind, &'source str); N]) {
        let mut lexer = tokenize(input);

        for (expected_kind, expected_lexeme) in expected.into_iter() {
            assert_eq!(lexer.next(), Some(Ok(expected_kind)));
            assert_eq!(lexer.slice(), expected_lexeme);
        }

        assert_eq!(lexer.next(), None);
    }

    #[test]
    fn basic_expr() {
        compare_tokens(
            "1 + 2",
            [
                (TokenKind::Int, "1"),
                (TokenKind::Whitespace, " "),
                (TokenKind::Add, "+"),
                (TokenKind::Whitespace, " "),
                (TokenKind::Int, "2"),
            ],
        );
    }

    #[test]
    fn numbers_and_names() {
        compare_tokens(
            "3.25*abc   + x",
            [
                (TokenKind::Float, "3.25"),
                (TokenKind::Mul, "*"),
                (TokenKind::Name, "abc"),
                (TokenKind::Whitespace, "   "),
                (TokenKind::Add, "+"),
                (TokenKind::Whitespace, " "),
                (TokenKind::Name, "x"),
            ],
        );
    }

    #[test]
    fn parenthesized() {
        compare_tokens(
            "(4.5 + y) * 2",
            [
                (TokenKind::OpenParen, "("),
                (TokenKind::Float, "4.5"),
                (TokenKind::Whitespace, " "),
                (TokenKind::Add, "+"),
                (TokenKind::Whitespace, " "),
                (TokenKind::Name, "y"),
                (TokenKind::CloseParen, ")"),
                (TokenKind::Whitespace, " "),
                (TokenKind::Mul, "*"),
                (TokenKind::Whitespace, " "),
                (TokenKind::Int, "2"),
            ],
        );
    }

    #[test]
    fn unsupported_operator() {
        compare_tokens(
            "x - 3",
            [
                (TokenKind::Name, "x"),
                (TokenKind::Whitespace, " "),
                (TokenKind::Symbol, "-"),
                (TokenKind::Whitespace, " "),
                (TokenKind::Int, "3"),
            ],
        );
    }
}
