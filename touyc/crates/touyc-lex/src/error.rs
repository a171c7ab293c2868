//! Lexical error types.

use thiserror::Error;
use touyc_util::DiagnosticCode;

use crate::cursor::Position;

/// An error found while scanning.
///
/// Errors are carried inside [`crate::TokenKind::Error`] tokens; the lexer
/// never aborts on them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum LexError {
    /// A byte that starts no token.
    #[error("unrecognized byte {}", describe_byte(.byte))]
    UnrecognizedByte {
        /// The offending byte.
        byte: u8,
        /// Where it was found.
        position: Position,
    },

    /// A numeric literal with a second decimal point.
    #[error("unexpected '.' in numeric literal")]
    MalformedNumber {
        /// Position of the second `.`.
        position: Position,
    },

    /// A `/*` with no matching `*/` before the end of input.
    #[error("unterminated block comment")]
    UnterminatedComment {
        /// Position of the opening `/*`.
        position: Position,
    },
}

impl LexError {
    /// Where the problem is, which is not always where the token starts.
    pub fn position(&self) -> Position {
        match *self {
            LexError::UnrecognizedByte { position, .. }
            | LexError::MalformedNumber { position }
            | LexError::UnterminatedComment { position } => position,
        }
    }

    /// Diagnostic code reported for this error.
    pub fn code(&self) -> DiagnosticCode {
        match self {
            LexError::UnrecognizedByte { .. } => DiagnosticCode::E_LEXER_UNRECOGNIZED_BYTE,
            LexError::MalformedNumber { .. } => DiagnosticCode::E_LEXER_MALFORMED_NUMBER,
            LexError::UnterminatedComment { .. } => DiagnosticCode::E_LEXER_UNTERMINATED_COMMENT,
        }
    }

    /// A suggestion to attach to the diagnostic, if one applies.
    pub fn help(&self) -> Option<&'static str> {
        match self {
            LexError::UnrecognizedByte { byte, .. } => match *byte {
                b'"' => Some("string literals are not supported"),
                b'<' | b'>' | b'!' | b'&' | b'|' | b'~' => {
                    Some("this operator is not part of the language")
                },
                b if !b.is_ascii() => Some("only ASCII source text is accepted"),
                _ => None,
            },
            LexError::MalformedNumber { .. } => {
                Some("a numeric literal may contain at most one decimal point")
            },
            LexError::UnterminatedComment { .. } => Some("add `*/` to close the comment"),
        }
    }
}

/// Printable form of a byte for messages: `'@'` or `0xC3`.
fn describe_byte(byte: &u8) -> String {
    if byte.is_ascii_graphic() {
        format!("'{}'", *byte as char)
    } else {
        format!("0x{:02X}", byte)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(line: u32, column: u32) -> Position {
        Position { line, column }
    }

    #[test]
    fn test_messages() {
        let err = LexError::UnrecognizedByte {
            byte: b'@',
            position: at(1, 1),
        };
        assert_eq!(err.to_string(), "unrecognized byte '@'");

        let err = LexError::UnrecognizedByte {
            byte: 0xC3,
            position: at(1, 1),
        };
        assert_eq!(err.to_string(), "unrecognized byte 0xC3");

        let err = LexError::MalformedNumber { position: at(1, 4) };
        assert_eq!(err.to_string(), "unexpected '.' in numeric literal");
    }

    #[test]
    fn test_position_and_code() {
        let err = LexError::UnterminatedComment { position: at(3, 2) };
        assert_eq!(err.position(), at(3, 2));
        assert_eq!(err.code(), DiagnosticCode::E_LEXER_UNTERMINATED_COMMENT);
    }

    #[test]
    fn test_help_for_unsupported_bytes() {
        let quote = LexError::UnrecognizedByte {
            byte: b'"',
            position: at(1, 1),
        };
        assert!(quote.help().is_some());

        let at_sign = LexError::UnrecognizedByte {
            byte: b'@',
            position: at(1, 1),
        };
        assert_eq!(at_sign.help(), None);
    }

    #[test]
    fn test_describe_byte() {
        assert_eq!(describe_byte(&b'x'), "'x'");
        assert_eq!(describe_byte(&b' '), "0x20");
        assert_eq!(describe_byte(&0), "0x00");
    }
}
