//! Token listing.
//!
//! Each token becomes a row of `line`, `column`, `kind` and `detail`. The
//! table form prints rows tab-separated; the JSON form prints an array.

use std::io::Write;

use serde::Serialize;
use touyc_lex::{NumericValue, Token, TokenKind};

use crate::config::OutputFormat;
use crate::error::Result;

/// One printed token.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TokenRow {
    /// 1-based line of the token start.
    pub line: u32,
    /// 1-based column of the token start.
    pub column: u32,
    /// `Identifier`, `Keyword`, `Integer`, `Float`, `Operator` or `Punct`.
    pub kind: &'static str,
    /// Identifier text, literal value or spelling.
    pub detail: String,
}

impl TokenRow {
    /// Builds the row for a token. End of input and errors have no row.
    pub fn from_token(token: &Token<'_>) -> Option<TokenRow> {
        let (kind, detail) = match token.kind {
            TokenKind::Identifier => ("Identifier", token.text.unwrap_or_default().to_string()),
            TokenKind::Keyword(keyword) => ("Keyword", keyword.to_string()),
            TokenKind::Number => match token.value? {
                NumericValue::Integer { magnitude, .. } => ("Integer", magnitude.to_string()),
                NumericValue::Float { double, .. } => ("Float", format!("{:.6}", double)),
            },
            TokenKind::Operator(op) => ("Operator", op.to_string()),
            TokenKind::Punct(punct) => ("Punct", punct.to_string()),
            TokenKind::EndOfInput | TokenKind::Error(_) => return None,
        };

        Some(TokenRow {
            line: token.span.line,
            column: token.span.column,
            kind,
            detail,
        })
    }
}

/// Writes `rows` to `out` in the requested format.
pub fn write_rows(rows: &[TokenRow], format: OutputFormat, out: &mut impl Write) -> Result<()> {
    match format {
        OutputFormat::Table => {
            for row in rows {
                writeln!(out, "{}\t{}\t{}\t{}", row.line, row.column, row.kind, row.detail)?;
            }
        },
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, rows)?;
            writeln!(out)?;
        },
    }
    Ok(())
}
