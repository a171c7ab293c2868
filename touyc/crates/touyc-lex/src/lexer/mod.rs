//! Lexer module.
//!
//! The scanner is split by token family:
//! - `core` - [`scan`], [`Lexer`] and dispatch
//! - `identifier` - Identifier and keyword lexing
//! - `number` - Number literal lexing
//! - `operator` - Operator and punctuation lexing
//! - `comment` - Comment skipping

mod comment;
mod core;
mod identifier;
mod number;
mod operator;

pub use self::core::{scan, tokenize, Lexer};
