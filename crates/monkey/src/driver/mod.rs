//! Token dump driver
//!
//! Runs the scanner over a whole source once and renders the resulting
//! stream for inspection. Illegal tokens are turned into [`LexError`]s here;
//! the scanner itself never fails.

use crate::common::{LexError, LexResult};
use crate::lexer::{Scanner, Token};
use std::fmt::Write;

/// How the token stream is printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DumpFormat {
    /// One `KIND literal` line per token, `Eof` included
    #[default]
    Lines,
    /// Literals separated by spaces on a single line
    Inline,
}

/// Configuration options for a token dump
#[derive(Debug, Clone, Default)]
pub struct DumpConfig {
    pub format: DumpFormat,
    pub show_spans: bool,
    /// Treat illegal tokens as an error instead of a warning
    pub deny_illegal: bool,
}

/// Fully scanned source, ready to render or check
pub struct TokenDump {
    tokens: Vec<Token>,
}

impl TokenDump {
    pub fn new(source: &str) -> Self {
        let tokens = Scanner::new(source).tokenize_all();
        let illegal = tokens.iter().filter(|t| t.is_illegal()).count();
        tracing::debug!(tokens = tokens.len(), illegal, "scanned source");
        Self { tokens }
    }

    /// All tokens, terminated by `Eof`
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn illegal(&self) -> impl Iterator<Item = &Token> {
        self.tokens.iter().filter(|t| t.is_illegal())
    }

    /// One error per illegal token, in source order
    pub fn errors(&self) -> Vec<LexError> {
        self.illegal()
            .map(|t| LexError::illegal(t.literal.clone(), t.span))
            .collect()
    }

    /// Fails on the first illegal token when `deny_illegal` is set
    pub fn check(&self, config: &DumpConfig) -> LexResult<()> {
        if !config.deny_illegal {
            return Ok(());
        }
        match self.illegal().next() {
            Some(token) => Err(LexError::illegal(token.literal.clone(), token.span)),
            None => Ok(()),
        }
    }

    pub fn render(&self, config: &DumpConfig) -> String {
        let mut out = String::new();
        match config.format {
            DumpFormat::Lines => {
                for token in &self.tokens {
                    let kind = token.kind.to_string();
                    let mut line = format!("{kind:<8} {}", token.literal.escape_debug());
                    if config.show_spans {
                        let _ = write!(line, " @{}", token.span);
                    }
                    out.push_str(line.trim_end());
                    out.push('\n');
                }
            }
            DumpFormat::Inline => {
                let words: Vec<String> = self
                    .tokens
                    .iter()
                    .filter(|t| !t.is_eof())
                    .map(|t| {
                        if config.show_spans {
                            format!("{}@{}", t.literal.escape_debug(), t.span)
                        } else {
                            t.literal.escape_debug().to_string()
                        }
                    })
                    .collect();
                out.push_str(&words.join(" "));
                out.push('\n');
            }
        }
        out
    }
}
