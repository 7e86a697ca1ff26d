//! Monkey Lexer - lexical scanner for the Monkey programming language
//!
//! This library turns Monkey source text into the token stream consumed by
//! a parser. Scanning never fails: unsupported bytes become illegal tokens
//! and it is up to the consumer to report them.
//!
//! ## Architecture
//!
//! The crate is organized into:
//! - **Lexer** (`lexer/`): Token definitions, keyword lookup and the scanner
//! - **Common** (`common/`): Shared infrastructure (errors, spans, diagnostics)
//! - **Driver** (`driver/`): Token dumping used by the `monkey-lex` tool

pub mod common;
pub mod lexer;
pub mod driver;

// Re-exports for convenience
pub use common::{DiagnosticReporter, LexError, LexResult, Span};
pub use lexer::{Scanner, Token, TokenKind, lookup_ident};
pub use driver::{DumpConfig, DumpFormat, TokenDump};
