//! Monkey token definitions

use crate::common::Span;
use std::fmt;

/// A Monkey token with its kind, lexeme and source location
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    /// Exact source text the token was scanned from (empty for `Eof`)
    pub literal: String,
    pub span: Span,
}

impl Token {
    pub fn new(kind: TokenKind, literal: impl Into<String>, span: Span) -> Self {
        Self {
            kind,
            literal: literal.into(),
            span,
        }
    }

    /// End-of-input marker at `offset`
    pub fn eof(offset: usize) -> Self {
        Self::new(TokenKind::Eof, String::new(), Span::point(offset))
    }

    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }

    pub fn is_illegal(&self) -> bool {
        self.kind == TokenKind::Illegal
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{} {}}}", self.kind, self.literal)
    }
}

/// Monkey token kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // Special
    Illegal,
    Eof,

    // Identifiers and literals
    Ident,
    Int,

    // Operators
    Assign,
    Plus,

    // Delimiters
    Comma,
    Semicolon,
    LParen,
    RParen,
    LBrace,
    RBrace,

    // Keywords
    Function,
    Let,
}

impl TokenKind {
    /// Kind of a single-character operator or delimiter
    pub fn from_symbol(ch: u8) -> Option<Self> {
        let kind = match ch {
            b'=' => TokenKind::Assign,
            b'+' => TokenKind::Plus,
            b',' => TokenKind::Comma,
            b';' => TokenKind::Semicolon,
            b'(' => TokenKind::LParen,
            b')' => TokenKind::RParen,
            b'{' => TokenKind::LBrace,
            b'}' => TokenKind::RBrace,
            _ => return None,
        };
        Some(kind)
    }

    pub fn is_keyword(self) -> bool {
        matches!(self, TokenKind::Function | TokenKind::Let)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Illegal => write!(f, "ILLEGAL"),
            TokenKind::Eof => write!(f, "EOF"),

            TokenKind::Ident => write!(f, "IDENT"),
            TokenKind::Int => write!(f, "INT"),

            TokenKind::Assign => write!(f, "="),
            TokenKind::Plus => write!(f, "+"),

            TokenKind::Comma => write!(f, ","),
            TokenKind::Semicolon => write!(f, ";"),
            TokenKind::LParen => write!(f, "("),
            TokenKind::RParen => write!(f, ")"),
            TokenKind::LBrace => write!(f, "{{"),
            TokenKind::RBrace => write!(f, "}}"),

            TokenKind::Function => write!(f, "FUNCTION"),
            TokenKind::Let => write!(f, "LET"),
        }
    }
}

/// Reserved words of the language
pub const KEYWORDS: &[(&str, TokenKind)] = &[
    ("fn", TokenKind::Function),
    ("let", TokenKind::Let),
];

/// Classify an identifier-shaped lexeme as a keyword or a plain identifier
pub fn lookup_ident(ident: &str) -> TokenKind {
    KEYWORDS
        .iter()
        .find(|(word, _)| *word == ident)
        .map_or(TokenKind::Ident, |&(_, kind)| kind)
}
