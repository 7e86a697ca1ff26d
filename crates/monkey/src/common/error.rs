//! Error types and diagnostic reporting

use codespan_reporting::diagnostic::{Diagnostic, Label, Severity};
use codespan_reporting::files::SimpleFiles;
use codespan_reporting::term;
use codespan_reporting::term::termcolor::{ColorChoice, NoColor, StandardStream};
use thiserror::Error;
use super::Span;

/// Lexical error with source location
///
/// The scanner itself never produces these. Consumers build them from
/// illegal tokens when they decide that unrecognized input is fatal.
#[derive(Error, Debug)]
pub enum LexError {
    #[error("illegal character '{literal}' at {span}")]
    IllegalCharacter { literal: String, span: Span },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl LexError {
    pub fn illegal(literal: impl Into<String>, span: Span) -> Self {
        Self::IllegalCharacter {
            literal: literal.into(),
            span,
        }
    }

    /// Source location of the error, if it has one
    pub fn span(&self) -> Option<Span> {
        match self {
            LexError::IllegalCharacter { span, .. } => Some(*span),
            LexError::Io(_) => None,
        }
    }
}

pub type LexResult<T> = Result<T, LexError>;

/// Diagnostic reporter for pretty error output
pub struct DiagnosticReporter {
    files: SimpleFiles<String, String>,
    writer: StandardStream,
    config: term::Config,
}

impl DiagnosticReporter {
    pub fn new() -> Self {
        Self::with_color(ColorChoice::Auto)
    }

    pub fn with_color(color: ColorChoice) -> Self {
        Self {
            files: SimpleFiles::new(),
            writer: StandardStream::stderr(color),
            config: term::Config::default(),
        }
    }

    pub fn add_file(&mut self, name: impl Into<String>, source: impl Into<String>) -> usize {
        self.files.add(name.into(), source.into())
    }

    fn diagnostic(file_id: usize, error: &LexError, severity: Severity) -> Diagnostic<usize> {
        match error {
            LexError::IllegalCharacter { literal, span } => Diagnostic::new(severity)
                .with_message("Illegal character")
                .with_labels(vec![
                    Label::primary(file_id, *span)
                        .with_message(format!("unexpected character '{}'", literal.escape_debug())),
                ]),

            LexError::Io(err) => {
                Diagnostic::new(severity).with_message(format!("IO error: {}", err))
            }
        }
    }

    /// Emit `error` to stderr
    pub fn report(&self, file_id: usize, error: &LexError, severity: Severity) {
        let diagnostic = Self::diagnostic(file_id, error, severity);
        let _ = term::emit(&mut self.writer.lock(), &self.config, &self.files, &diagnostic);
    }

    pub fn report_error(&self, file_id: usize, error: &LexError) {
        self.report(file_id, error, Severity::Error);
    }

    pub fn report_warning(&self, file_id: usize, error: &LexError) {
        self.report(file_id, error, Severity::Warning);
    }

    /// Render `error` without color, as it would appear on stderr
    pub fn render(&self, file_id: usize, error: &LexError, severity: Severity) -> String {
        let diagnostic = Self::diagnostic(file_id, error, severity);
        let mut buffer = NoColor::new(Vec::new());
        let _ = term::emit(&mut buffer, &self.config, &self.files, &diagnostic);
        String::from_utf8_lossy(&buffer.into_inner()).into_owned()
    }
}

impl Default for DiagnosticReporter {
    fn default() -> Self {
        Self::new()
    }
}
