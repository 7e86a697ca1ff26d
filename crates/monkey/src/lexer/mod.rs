//! Monkey lexer module

mod token;
mod scanner;

pub use token::{KEYWORDS, Token, TokenKind, lookup_ident};
pub use scanner::Scanner;
