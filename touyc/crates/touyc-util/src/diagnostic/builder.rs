//! Fluent construction of diagnostics.

use super::{Diagnostic, DiagnosticCode, Handler, Level};
use crate::Span;

/// Builds a [`Diagnostic`] one field at a time.
///
/// # Examples
///
/// ```
/// use touyc_util::diagnostic::{DiagnosticBuilder, DiagnosticCode, Handler};
/// use touyc_util::Span;
///
/// let handler = Handler::new();
/// DiagnosticBuilder::error("unexpected '.' in numeric literal")
///     .code(DiagnosticCode::E_LEXER_MALFORMED_NUMBER)
///     .span(Span::new(3, 4, 1, 4))
///     .help("a numeric literal may contain at most one decimal point")
///     .emit(&handler);
///
/// assert_eq!(handler.diagnostics()[0].helps.len(), 1);
/// ```
#[must_use = "a diagnostic does nothing until it is emitted"]
pub struct DiagnosticBuilder {
    diagnostic: Diagnostic,
}

impl DiagnosticBuilder {
    /// Starts an error with no location.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            diagnostic: Diagnostic {
                level: Level::Error,
                message: message.into(),
                span: Span::DUMMY,
                code: None,
                helps: Vec::new(),
            },
        }
    }

    /// Sets the code.
    pub fn code(mut self, code: DiagnosticCode) -> Self {
        self.diagnostic.code = Some(code);
        self
    }

    /// Sets the location.
    pub fn span(mut self, span: Span) -> Self {
        self.diagnostic.span = span;
        self
    }

    /// Adds a suggestion.
    pub fn help(mut self, help: impl Into<String>) -> Self {
        self.diagnostic.helps.push(help.into());
        self
    }

    /// Finishes and hands the diagnostic to `handler`.
    pub fn emit(self, handler: &Handler) {
        handler.emit_diagnostic(self.diagnostic);
    }
}
