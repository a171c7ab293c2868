//! touyc-util - Core Utilities and Foundation Types
//!
//! This crate provides the types shared by every phase of the touyc
//! toolchain:
//!
//! - [`span`] - Source locations, source files and the source map
//! - [`diagnostic`] - Diagnostics, severity levels, codes and the [`Handler`]
//!   that collects them
//! - [`error`] - Error types for fallible utility operations
//!
//! # Example
//!
//! ```
//! use touyc_util::{DiagnosticBuilder, DiagnosticCode, Handler, Span};
//!
//! let handler = Handler::new();
//! DiagnosticBuilder::error("unrecognized byte '@'")
//!     .code(DiagnosticCode::E_LEXER_UNRECOGNIZED_BYTE)
//!     .span(Span::new(0, 1, 1, 1))
//!     .emit(&handler);
//!
//! assert!(handler.has_errors());
//! ```

#![warn(missing_docs)]

pub mod diagnostic;
pub mod error;
pub mod span;

pub use diagnostic::{Diagnostic, DiagnosticBuilder, DiagnosticCode, Handler, Level};
pub use error::{SourceMapError, SourceMapResult};
pub use span::{FileId, SourceFile, SourceMap, Span};
