//! Hand-written byte scanner for Monkey source

use super::token::{Token, TokenKind, lookup_ident};
use crate::common::Span;
use std::iter::FusedIterator;

/// Sentinel held in `ch` once the input is exhausted
const EOF_BYTE: u8 = 0;

/// Lexer for Monkey source code
///
/// Pull-based: every call to [`Scanner::next_token`] yields one token, and
/// once the input is exhausted it keeps yielding `Eof`.
pub struct Scanner<'a> {
    input: &'a str,
    /// Index of the current byte
    position: usize,
    /// Index of the next byte to read
    read_position: usize,
    /// Byte under examination, `EOF_BYTE` past the end
    ch: u8,
}

impl<'a> Scanner<'a> {
    /// Create a new scanner positioned on the first byte of `input`
    pub fn new(input: &'a str) -> Self {
        let mut scanner = Self {
            input,
            position: 0,
            read_position: 0,
            ch: EOF_BYTE,
        };
        scanner.read_char();
        scanner
    }

    fn read_char(&mut self) {
        self.ch = self
            .input
            .as_bytes()
            .get(self.read_position)
            .copied()
            .unwrap_or(EOF_BYTE);
        self.position = self.read_position;
        self.read_position += 1;
    }

    /// Get the next token
    pub fn next_token(&mut self) -> Token {
        let token = self.scan_token();
        tracing::trace!(
            kind = %token.kind,
            literal = %token.literal,
            span = %token.span,
            "scanned token"
        );
        token
    }

    fn scan_token(&mut self) -> Token {
        self.skip_whitespace();

        let start = self.position;
        match self.ch {
            EOF_BYTE => Token::eof(start),
            // Identifier and number readers leave the cursor on the byte
            // after the run, so these arms must not advance again.
            ch if is_letter(ch) => {
                let literal = self.read_identifier();
                Token::new(lookup_ident(literal), literal, Span::new(start, self.position))
            }
            ch if is_digit(ch) => {
                let literal = self.read_number();
                Token::new(TokenKind::Int, literal, Span::new(start, self.position))
            }
            ch => {
                let kind = TokenKind::from_symbol(ch).unwrap_or(TokenKind::Illegal);
                let token = Token::new(kind, char::from(ch), Span::new(start, start + 1));
                self.read_char();
                token
            }
        }
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.ch, b' ' | b'\t' | b'\n' | b'\r') {
            self.read_char();
        }
    }

    fn read_identifier(&mut self) -> &'a str {
        self.read_while(is_letter)
    }

    fn read_number(&mut self) -> &'a str {
        self.read_while(is_digit)
    }

    fn read_while(&mut self, accept: fn(u8) -> bool) -> &'a str {
        let input = self.input;
        let start = self.position;
        while accept(self.ch) {
            self.read_char();
        }
        // Runs only contain ASCII bytes, so both ends sit on char boundaries
        &input[start..self.position]
    }

    /// Tokenize the entire source, including the trailing `Eof`
    pub fn tokenize_all(mut self) -> Vec<Token> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token();
            let is_eof = token.is_eof();
            tokens.push(token);
            if is_eof {
                break;
            }
        }
        tokens
    }

    /// Get the source being scanned
    pub fn source(&self) -> &'a str {
        self.input
    }
}

/// Yields every token up to, but not including, `Eof`
impl Iterator for Scanner<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        let token = self.next_token();
        (!token.is_eof()).then_some(token)
    }
}

impl FusedIterator for Scanner<'_> {}

fn is_letter(ch: u8) -> bool {
    ch.is_ascii_alphabetic() || ch == b'_'
}

fn is_digit(ch: u8) -> bool {
    ch.is_ascii_digit()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn scan(source: &str) -> Vec<(TokenKind, String)> {
        Scanner::new(source)
            .tokenize_all()
            .into_iter()
            .map(|token| (token.kind, token.literal))
            .collect()
    }

    fn expected(tokens: &[(TokenKind, &str)]) -> Vec<(TokenKind, String)> {
        tokens
            .iter()
            .map(|&(kind, literal)| (kind, literal.to_string()))
            .collect()
    }

    #[test]
    fn test_single_character_tokens() {
        assert_eq!(
            scan("=;(),+{}"),
            expected(&[
                (TokenKind::Assign, "="),
                (TokenKind::Semicolon, ";"),
                (TokenKind::LParen, "("),
                (TokenKind::RParen, ")"),
                (TokenKind::Comma, ","),
                (TokenKind::Plus, "+"),
                (TokenKind::LBrace, "{"),
                (TokenKind::RBrace, "}"),
                (TokenKind::Eof, ""),
            ])
        );
    }

    #[test]
    fn test_let_statement() {
        assert_eq!(
            scan("let five = 5;"),
            expected(&[
                (TokenKind::Let, "let"),
                (TokenKind::Ident, "five"),
                (TokenKind::Assign, "="),
                (TokenKind::Int, "5"),
                (TokenKind::Semicolon, ";"),
                (TokenKind::Eof, ""),
            ])
        );
    }

    #[test]
    fn test_program() {
        let source = "let five = 5;
let ten = 10;

let add = fn(x, y) {
  x + y;
};

let result = add(five, ten);
";
        assert_eq!(
            scan(source),
            expected(&[
                (TokenKind::Let, "let"),
                (TokenKind::Ident, "five"),
                (TokenKind::Assign, "="),
                (TokenKind::Int, "5"),
                (TokenKind::Semicolon, ";"),
                (TokenKind::Let, "let"),
                (TokenKind::Ident, "ten"),
                (TokenKind::Assign, "="),
                (TokenKind::Int, "10"),
                (TokenKind::Semicolon, ";"),
                (TokenKind::Let, "let"),
                (TokenKind::Ident, "add"),
                (TokenKind::Assign, "="),
                (TokenKind::Function, "fn"),
                (TokenKind::LParen, "("),
                (TokenKind::Ident, "x"),
                (TokenKind::Comma, ","),
                (TokenKind::Ident, "y"),
                (TokenKind::RParen, ")"),
                (TokenKind::LBrace, "{"),
                (TokenKind::Ident, "x"),
                (TokenKind::Plus, "+"),
                (TokenKind::Ident, "y"),
                (TokenKind::Semicolon, ";"),
                (TokenKind::RBrace, "}"),
                (TokenKind::Semicolon, ";"),
                (TokenKind::Let, "let"),
                (TokenKind::Ident, "result"),
                (TokenKind::Assign, "="),
                (TokenKind::Ident, "add"),
                (TokenKind::LParen, "("),
                (TokenKind::Ident, "five"),
                (TokenKind::Comma, ","),
                (TokenKind::Ident, "ten"),
                (TokenKind::RParen, ")"),
                (TokenKind::Semicolon, ";"),
                (TokenKind::Eof, ""),
            ])
        );
    }

    #[test]
    fn test_digits_end_identifier() {
        assert_eq!(
            scan("foobar123"),
            expected(&[
                (TokenKind::Ident, "foobar"),
                (TokenKind::Int, "123"),
                (TokenKind::Eof, ""),
            ])
        );
        assert_eq!(
            scan("x1y"),
            expected(&[
                (TokenKind::Ident, "x"),
                (TokenKind::Int, "1"),
                (TokenKind::Ident, "y"),
                (TokenKind::Eof, ""),
            ])
        );
    }

    #[test]
    fn test_keyword_prefix_is_identifier() {
        assert_eq!(
            scan("lets fnord _let"),
            expected(&[
                (TokenKind::Ident, "lets"),
                (TokenKind::Ident, "fnord"),
                (TokenKind::Ident, "_let"),
                (TokenKind::Eof, ""),
            ])
        );
    }

    #[test]
    fn test_illegal_characters() {
        assert_eq!(
            scan("@"),
            expected(&[(TokenKind::Illegal, "@"), (TokenKind::Eof, "")])
        );
        assert_eq!(
            scan("@@"),
            expected(&[
                (TokenKind::Illegal, "@"),
                (TokenKind::Illegal, "@"),
                (TokenKind::Eof, ""),
            ])
        );
    }

    #[test]
    fn test_multi_character_operators_split() {
        assert_eq!(
            scan("a == -1"),
            expected(&[
                (TokenKind::Ident, "a"),
                (TokenKind::Assign, "="),
                (TokenKind::Assign, "="),
                (TokenKind::Illegal, "-"),
                (TokenKind::Int, "1"),
                (TokenKind::Eof, ""),
            ])
        );
    }

    #[test]
    fn test_whitespace_is_skipped() {
        assert_eq!(
            scan("  x   =\t1\n;"),
            expected(&[
                (TokenKind::Ident, "x"),
                (TokenKind::Assign, "="),
                (TokenKind::Int, "1"),
                (TokenKind::Semicolon, ";"),
                (TokenKind::Eof, ""),
            ])
        );
        assert_eq!(scan(" \r\n\t "), expected(&[(TokenKind::Eof, "")]));
    }

    #[test]
    fn test_empty_input() {
        let mut scanner = Scanner::new("");
        assert_eq!(scanner.next_token(), Token::eof(0));
    }

    #[test]
    fn test_eof_is_idempotent() {
        let mut scanner = Scanner::new("x;");
        assert_eq!(scanner.next_token().kind, TokenKind::Ident);
        assert_eq!(scanner.next_token().kind, TokenKind::Semicolon);
        for _ in 0..5 {
            let token = scanner.next_token();
            assert_eq!(token.kind, TokenKind::Eof);
            assert_eq!(token.literal, "");
            assert_eq!(token.span, Span::point(2));
        }
    }

    #[test]
    fn test_calls_until_eof() {
        let source = "let add = fn(a, b) { a + b };";
        let non_eof = Scanner::new(source).count();

        let mut scanner = Scanner::new(source);
        let mut calls = 0;
        loop {
            calls += 1;
            if scanner.next_token().is_eof() {
                break;
            }
        }
        assert_eq!(calls, non_eof + 1);
        assert_eq!(non_eof, 15);
    }

    #[test]
    fn test_spans_slice_source() {
        let source = "let  ten=10 ;";
        for token in Scanner::new(source) {
            assert_eq!(&source[token.span.start..token.span.end], token.literal);
        }

        let tokens = Scanner::new(source).tokenize_all();
        assert_eq!(tokens[1].span, Span::new(5, 8));
        assert_eq!(tokens[3].span, Span::new(9, 11));
        assert_eq!(tokens.last().map(|t| t.span), Some(Span::point(13)));
    }

    #[test]
    fn test_non_ascii_is_illegal_per_byte() {
        let tokens = Scanner::new("é").tokenize_all();
        assert_eq!(tokens.len(), 3);
        assert!(tokens[0].is_illegal());
        assert!(tokens[1].is_illegal());
        assert_eq!(tokens[0].span, Span::new(0, 1));
        assert_eq!(tokens[1].span, Span::new(1, 2));
        assert!(tokens[2].is_eof());
    }

    #[test]
    fn test_iterator_is_fused() {
        let mut scanner = Scanner::new("+");
        assert_eq!(scanner.next().map(|t| t.kind), Some(TokenKind::Plus));
        assert_eq!(scanner.next(), None);
        assert_eq!(scanner.next(), None);
        assert_eq!(scanner.source(), "+");
    }

    mod properties {
        use super::super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn literals_cover_non_whitespace(source in "[ -~\t\n\r]{0,128}") {
                let joined: String = Scanner::new(&source).map(|t| t.literal).collect();
                let stripped: String = source
                    .chars()
                    .filter(|c| !matches!(c, ' ' | '\t' | '\n' | '\r'))
                    .collect();
                prop_assert_eq!(joined, stripped);
            }

            #[test]
            fn scanning_terminates(source in any::<String>()) {
                let tokens = Scanner::new(&source).tokenize_all();
                prop_assert!(tokens.len() <= source.len() + 1);
                prop_assert!(tokens.last().is_some_and(Token::is_eof));
                for pair in tokens.windows(2) {
                    prop_assert!(pair[0].span.end <= pair[1].span.start);
                }
            }

            #[test]
            fn every_token_advances(source in "[a-z0-9=;(),+{}@ ]{1,64}") {
                for token in Scanner::new(&source) {
                    prop_assert!(!token.span.is_empty());
                    prop_assert_eq!(token.span.len(), token.literal.len());
                }
            }
        }
    }
}
