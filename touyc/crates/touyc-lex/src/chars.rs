//! Byte classification.
//!
//! Source text is scanned byte by byte; only ASCII bytes can start or
//! continue a token.

/// Letter or underscore.
///
/// # Example
///
/// ```
/// use touyc_lex::chars::is_ident_start;
///
/// assert!(is_ident_start(b'_'));
/// assert!(is_ident_start(b'q'));
/// assert!(!is_ident_start(b'7'));
/// ```
#[inline]
pub fn is_ident_start(byte: u8) -> bool {
    byte.is_ascii_alphabetic() || byte == b'_'
}

/// Letter, digit or underscore.
#[inline]
pub fn is_ident_continue(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || byte == b'_'
}

/// Space, tab, newline, vertical tab, form feed or carriage return.
#[inline]
pub fn is_whitespace(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n' | 0x0B | 0x0C | b'\r')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ident_classes() {
        for byte in b'a'..=b'z' {
            assert!(is_ident_start(byte));
            assert!(is_ident_continue(byte));
        }
        for byte in b'0'..=b'9' {
            assert!(!is_ident_start(byte));
            assert!(is_ident_continue(byte));
        }
        assert!(!is_ident_start(b'$'));
        assert!(!is_ident_continue(b'-'));
    }

    #[test]
    fn test_non_ascii_is_never_ident() {
        for byte in 0x80..=0xFFu8 {
            assert!(!is_ident_start(byte));
            assert!(!is_ident_continue(byte));
        }
    }

    #[test]
    fn test_whitespace() {
        assert!(is_whitespace(b' '));
        assert!(is_whitespace(0x0B));
        assert!(is_whitespace(b'\r'));
        assert!(!is_whitespace(0));
        assert!(!is_whitespace(b'_'));
    }
}
