//! Diagnostic codes.
//!
//! Lexer codes live in the 1000 range.
//!
//! | Code    | Meaning                                      |
//! |---------|----------------------------------------------|
//! | `E1001` | byte that matches no token rule              |
//! | `E1002` | numeric literal with more than one `.`       |
//! | `E1003` | input ends inside a block comment            |

use std::fmt;

/// Stable identifier printed in brackets after the severity.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct DiagnosticCode(&'static str);

impl DiagnosticCode {
    /// Byte that matches no token rule
    pub const E_LEXER_UNRECOGNIZED_BYTE: Self = Self("E1001");
    /// Numeric literal with more than one decimal point
    pub const E_LEXER_MALFORMED_NUMBER: Self = Self("E1002");
    /// Input ends inside a block comment
    pub const E_LEXER_UNTERMINATED_COMMENT: Self = Self("E1003");
}

impl fmt::Display for DiagnosticCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

impl fmt::Debug for DiagnosticCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DiagnosticCode({})", self.0)
    }
}
