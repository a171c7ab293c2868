//! Identifier and keyword lexing.

use super::core::Scanner;
use crate::chars::is_ident_continue;
use crate::token::{Keyword, Token, TokenKind};

impl<'a> Scanner<'a> {
    /// Lexes an identifier or keyword.
    ///
    /// Takes the longest run of letters, digits and underscores, then checks
    /// the whole run against the keyword table. Keywords carry no text.
    pub(super) fn lex_identifier(&mut self) -> Token<'a> {
        self.bump();
        while is_ident_continue(self.current()) {
            self.bump();
        }

        let text = self.source.slice(self.start.offset, self.cursor.offset);
        match Keyword::from_ident(text) {
            Some(keyword) => self.token(TokenKind::Keyword(keyword)),
            None => Token {
                text: Some(text),
                ..self.token(TokenKind::Identifier)
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::cursor::{Cursor, Position, SourceBuffer};
    use crate::scan;
    use crate::token::{Keyword, Token, TokenKind};

    fn lex_ident(source: &str) -> Token<'_> {
        scan(SourceBuffer::new(source), Cursor::START).0
    }

    #[test]
    fn test_simple_identifier() {
        let token = lex_ident("foo");
        assert_eq!(token.kind, TokenKind::Identifier);
        assert_eq!(token.text, Some("foo"));
    }

    #[test]
    fn test_identifier_with_underscore_and_digits() {
        let token = lex_ident("_foo_bar_123 rest");
        assert_eq!(token.text, Some("_foo_bar_123"));
        assert_eq!(token.end, Some(Position::new(1, 12)));
    }

    #[test]
    fn test_every_keyword() {
        for keyword in Keyword::ALL {
            let token = lex_ident(keyword.as_str());
            assert_eq!(token.kind, TokenKind::Keyword(keyword));
            assert_eq!(token.text, None);
        }
    }

    #[test]
    fn test_keyword_prefix_and_superstring_are_identifiers() {
        // Regression: keyword lookup must compare the full scanned text.
        for source in ["intx", "in", "i", "returns", "retur", "u6", "u640", "s8_", "_int"] {
            let token = lex_ident(source);
            assert_eq!(token.kind, TokenKind::Identifier, "source {:?}", source);
            assert_eq!(token.text, Some(source));
        }
    }

    #[test]
    fn test_keyword_followed_by_punct() {
        let token = lex_ident("int;");
        assert_eq!(token.kind, TokenKind::Keyword(Keyword::Int));
        assert_eq!(token.span.len(), 3);
    }

    #[test]
    fn test_digits_stop_identifier_start_only() {
        let token = lex_ident("x1y2");
        assert_eq!(token.text, Some("x1y2"));
    }
}
