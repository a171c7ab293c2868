//! touyc-lex - Lexical Analyzer for the touy Programming Language
//!
//! This crate turns touy source into tokens. It is the first phase of the
//! toolchain and has no other dependencies than the shared utilities.
//! Input is taken as raw bytes (`&str` works too); only ASCII forms tokens
//! and every other byte is reported on its own.
//!
//! # Example Usage
//!
//! ```
//! use touyc_lex::{Lexer, Operator, TokenKind};
//! use touyc_util::Handler;
//!
//! let handler = Handler::new();
//! let mut lexer = Lexer::new("foo := 42", &handler);
//!
//! // Peeking does not move the lexer
//! assert_eq!(lexer.peek().kind, TokenKind::Identifier);
//! assert_eq!(lexer.consume().text, Some("foo"));
//! assert_eq!(lexer.consume().kind, TokenKind::Operator(Operator::DeclAssign));
//!
//! // Lexer implements Iterator and stops before the end-of-input token
//! for token in &mut lexer {
//!     println!("{:?}", token);
//! }
//! assert!(lexer.is_finished());
//! ```
//!
//! # Module Structure
//!
//! - [`token`] - Token type definitions
//! - [`lexer`] - The scan primitive and the [`Lexer`]
//! - [`cursor`] - Source buffer, scan cursor and positions
//! - [`chars`] - Byte classification
//! - [`error`] - Lexical errors
//!
//! # Token Categories
//!
//! ## Keywords
//!
//! `void`, `char`, `int`, `u8`, `u16`, `u32`, `u64`, `s8`, `s16`, `s32`,
//! `s64`, `f32`, `f64`, `enum`, `struct`, `union`, `defer`, `return`
//!
//! ## Identifiers
//!
//! Pattern: `[a-zA-Z_][a-zA-Z0-9_]*`, excluding exact keyword matches.
//!
//! ## Numbers
//!
//! Decimal digits with at most one `.`: `42`, `3.25`, `7.`. Integers carry
//! their minimum unsigned width; floats carry both `f32` and `f64` values.
//!
//! ## Operators
//!
//! `:=`, `::`, `==`, `=>`, `++`, `+=`, `--`, `-=`, `->`, `*=`, `%=`, `/=`
//!
//! ## Punctuation
//!
//! `(` `)` `[` `]` `{` `}` `'` `.` `,` `;` `$` `#` `?` `^` and the bare
//! forms `:` `=` `+` `-` `*` `%` `/`
//!
//! ## Comments
//!
//! `// line` and `/* block */`. Block comments do not nest.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod chars;
pub mod cursor;
pub mod error;
pub mod lexer;
pub mod token;

#[cfg(test)]
mod edge_cases;

// Re-export main types for convenience
pub use cursor::{Cursor, Position, SourceBuffer};
pub use error::LexError;
pub use lexer::{scan, tokenize, Lexer};
pub use token::{Keyword, NumericValue, Operator, Punct, Token, TokenKind, WidthFlags};
