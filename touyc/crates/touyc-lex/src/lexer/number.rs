//! Number literal lexing.
//!
//! Literals are decimal digit runs with at most one `.`; a `.` turns the
//! literal into a float.

use super::core::Scanner;
use crate::error::LexError;
use crate::token::{NumericValue, Token, TokenKind, WidthFlags};

impl<'a> Scanner<'a> {
    /// Lexes a number literal.
    ///
    /// A second `.` ends the scan with [`LexError::MalformedNumber`]; the
    /// cursor is left on that dot.
    pub(super) fn lex_number(&mut self) -> Token<'a> {
        let mut is_float = false;
        loop {
            let byte = self.current();
            if byte.is_ascii_digit() {
                self.bump();
            } else if byte == b'.' {
                if is_float {
                    return self.error(LexError::MalformedNumber {
                        position: self.cursor.position(),
                    });
                }
                is_float = true;
                self.bump();
            } else {
                break;
            }
        }

        let text = self.source.slice(self.start.offset, self.cursor.offset);
        let value = if is_float {
            float_value(text)
        } else {
            integer_value(text)
        };

        Token {
            text: Some(text),
            value: Some(value),
            ..self.token(TokenKind::Number)
        }
    }
}

/// Base-10 value of a digit run, saturating at `u64::MAX`.
fn integer_value(digits: &str) -> NumericValue {
    let mut magnitude: u64 = 0;
    let mut overflowed = false;
    for byte in digits.bytes() {
        let digit = u64::from(byte - b'0');
        match magnitude
            .checked_mul(10)
            .and_then(|shifted| shifted.checked_add(digit))
        {
            Some(next) => magnitude = next,
            None => {
                magnitude = u64::MAX;
                overflowed = true;
                break;
            },
        }
    }

    let mut width = WidthFlags::for_magnitude(magnitude);
    width.set(WidthFlags::WIDER_THAN_64, overflowed);
    NumericValue::Integer { magnitude, width }
}

fn float_value(text: &str) -> NumericValue {
    // Digits with one '.' always parse; "7." reads as 7.0.
    NumericValue::Float {
        single: text.parse().unwrap_or_default(),
        double: text.parse().unwrap_or_default(),
    }
}
