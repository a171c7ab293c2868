//! Diagnostic module - Error reporting infrastructure.
//!
//! Producers build a [`Diagnostic`] with a [`DiagnosticBuilder`] and hand it
//! to the [`Handler`], which keeps everything in emission order. Rendering
//! is deferred until the driver has the [`SourceMap`] at hand.
//!
//! # Examples
//!
//! ```
//! use touyc_util::diagnostic::{DiagnosticBuilder, DiagnosticCode, Handler};
//! use touyc_util::Span;
//!
//! let handler = Handler::new();
//! DiagnosticBuilder::error("unrecognized byte '@'")
//!     .code(DiagnosticCode::E_LEXER_UNRECOGNIZED_BYTE)
//!     .span(Span::new(0, 1, 1, 1))
//!     .emit(&handler);
//!
//! if handler.has_errors() {
//!     eprintln!("lexing failed with {} errors", handler.error_count());
//! }
//! ```

mod builder;
mod codes;
mod level;

pub use builder::DiagnosticBuilder;
pub use codes::DiagnosticCode;
pub use level::Level;

use std::cell::RefCell;

use crate::span::{SourceMap, Span};

/// A reported problem and where it is.
#[derive(Clone, Debug)]
pub struct Diagnostic {
    /// Severity.
    pub level: Level,
    /// One-line description.
    pub message: String,
    /// Where the problem is.
    pub span: Span,
    /// Stable code such as `E1001`.
    pub code: Option<DiagnosticCode>,
    /// Suggestions, printed after the source context.
    pub helps: Vec<String>,
}

impl Diagnostic {
    /// Render the diagnostic for a terminal.
    ///
    /// The header reads `error[E1001]: message`; when the span's file is
    /// known to `sources`, the source line and a caret underline follow.
    ///
    /// # Examples
    ///
    /// ```
    /// use touyc_util::diagnostic::{DiagnosticBuilder, DiagnosticCode, Handler};
    /// use touyc_util::span::{SourceMap, Span};
    ///
    /// let mut sources = SourceMap::new();
    /// let file = sources.add_file("main.touy", "@");
    /// let handler = Handler::new();
    /// DiagnosticBuilder::error("unrecognized byte '@'")
    ///     .code(DiagnosticCode::E_LEXER_UNRECOGNIZED_BYTE)
    ///     .span(Span::with_file(0, 1, file, 1, 1))
    ///     .emit(&handler);
    ///
    /// let rendered = handler.diagnostics()[0].render(&sources);
    /// assert!(rendered.starts_with("error[E1001]: unrecognized byte '@'"));
    /// assert!(rendered.contains("--> main.touy:1:1"));
    /// ```
    pub fn render(&self, sources: &SourceMap) -> String {
        let mut out = match self.code {
            Some(code) => format!("{}[{}]: {}\n", self.level, code, self.message),
            None => format!("{}: {}\n", self.level, self.message),
        };

        match sources.format_span(self.span) {
            Some(context) => {
                out.push_str(&context);
                out.push('\n');
            },
            None => out.push_str(&format!("--> {}:{}\n", self.span.line, self.span.column)),
        }

        for help in &self.helps {
            out.push_str(&format!("    = help: {}\n", help));
        }
        out
    }
}

/// The diagnostic sink.
///
/// Emitting takes `&self`, so a lexer can hold a shared reference while the
/// driver still reads the results afterwards.
#[derive(Default)]
pub struct Handler {
    diagnostics: RefCell<Vec<Diagnostic>>,
}

impl Handler {
    /// Creates an empty handler.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a diagnostic.
    pub fn emit_diagnostic(&self, diagnostic: Diagnostic) {
        self.diagnostics.borrow_mut().push(diagnostic);
    }

    /// Check if any errors have been reported
    pub fn has_errors(&self) -> bool {
        self.error_count() > 0
    }

    /// Get the number of errors
    pub fn error_count(&self) -> usize {
        self.diagnostics
            .borrow()
            .iter()
            .filter(|d| d.level.is_error())
            .count()
    }

    /// Everything recorded so far, oldest first.
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.diagnostics.borrow().clone()
    }
}
