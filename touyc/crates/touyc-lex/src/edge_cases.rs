//! Edge case tests for touyc-lex

#[cfg(test)]
mod tests {
    use crate::{tokenize, Keyword, LexError, Lexer, Position, Punct, TokenKind, WidthFlags};
    use touyc_util::Handler;

    fn lex_all(source: &str) -> Vec<TokenKind> {
        let handler = Handler::new();
        Lexer::new(source, &handler).map(|t| t.kind).collect()
    }

    // ==================== EDGE CASES ====================

    #[test]
    fn test_edge_empty_source() {
        assert!(lex_all("").is_empty());
    }

    #[test]
    fn test_edge_single_char_ident() {
        assert_eq!(lex_all("x"), vec![TokenKind::Identifier]);
    }

    #[test]
    fn test_edge_long_identifier() {
        let name = "a".repeat(10_000);
        let source = format!("{} := 1;", name);
        let handler = Handler::new();
        let tokens = tokenize(&source, &handler);
        assert_eq!(tokens[0].text, Some(name.as_str()));
        assert_eq!(tokens[0].end, Some(Position::new(1, 10_000)));
    }

    #[test]
    fn test_edge_many_comments_do_not_recurse() {
        let source = "/**/".repeat(100_000) + "// tail\n".repeat(10_000).as_str() + "x";
        let handler = Handler::new();
        let tokens = tokenize(&source, &handler);
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].text, Some("x"));
    }

    #[test]
    fn test_edge_keywords_adjacent_to_punct() {
        assert_eq!(
            lex_all("(u8)"),
            vec![
                TokenKind::Punct(Punct::LParen),
                TokenKind::Keyword(Keyword::U8),
                TokenKind::Punct(Punct::RParen),
            ]
        );
    }

    #[test]
    fn test_edge_keyword_case_sensitive() {
        assert_eq!(
            lex_all("Void VOID void"),
            vec![
                TokenKind::Identifier,
                TokenKind::Identifier,
                TokenKind::Keyword(Keyword::Void),
            ]
        );
    }

    #[test]
    fn test_edge_width_boundaries() {
        let handler = Handler::new();
        let tokens = tokenize("255 256 65535 65536 4294967295 4294967296", &handler);
        let widths: Vec<u32> = tokens
            .iter()
            .filter_map(|t| match t.value {
                Some(crate::NumericValue::Integer { width, .. }) => Some(width.min_width_bits()),
                _ => None,
            })
            .collect();
        assert_eq!(widths, vec![8, 16, 16, 32, 32, 64]);
    }

    #[test]
    fn test_edge_overflowing_literal_resumes() {
        let handler = Handler::new();
        let tokens = tokenize("123456789012345678901234567890 x", &handler);
        match tokens[0].value {
            Some(crate::NumericValue::Integer { width, .. }) => {
                assert!(width.contains(WidthFlags::WIDER_THAN_64))
            },
            ref other => panic!("expected integer, got {:?}", other),
        }
        assert_eq!(tokens[1].text, Some("x"));
    }

    #[test]
    fn test_edge_crlf_line_endings() {
        let handler = Handler::new();
        let tokens = tokenize("a\r\nb", &handler);
        assert_eq!(tokens[1].start(), Position::new(2, 1));
    }

    #[test]
    fn test_edge_comment_inside_operator() {
        // `:` and `=` separated by a comment are two tokens
        assert_eq!(
            lex_all(":/**/="),
            vec![TokenKind::Punct(Punct::Colon), TokenKind::Punct(Punct::Eq)]
        );
    }

    #[test]
    fn test_edge_slash_before_eof() {
        assert_eq!(lex_all("/"), vec![TokenKind::Punct(Punct::Slash)]);
    }

    #[test]
    fn test_edge_block_comment_open_at_eof() {
        let handler = Handler::new();
        let tokens = tokenize("/*", &handler);
        assert_eq!(
            tokens[0].error(),
            Some(LexError::UnterminatedComment {
                position: Position::new(1, 1),
            })
        );
    }

    #[test]
    fn test_edge_star_at_eof_inside_comment() {
        let handler = Handler::new();
        let tokens = tokenize("/* *", &handler);
        assert!(matches!(
            tokens[0].error(),
            Some(LexError::UnterminatedComment { .. })
        ));
    }

    #[test]
    fn test_edge_all_unsupported_operators() {
        let handler = Handler::new();
        let errors = Lexer::new("< > | & ~ !", &handler)
            .filter(|t| t.error().is_some())
            .count();
        assert_eq!(errors, 6);
        assert_eq!(handler.error_count(), 6);
    }

    #[test]
    fn test_edge_string_quote_is_error_with_help() {
        let handler = Handler::new();
        let _ = tokenize("\"hi\"", &handler);
        let diags = handler.diagnostics();
        assert_eq!(diags.len(), 1);
        assert!(!diags[0].helps.is_empty());
    }

    #[test]
    fn test_edge_error_position_after_newlines() {
        let handler = Handler::new();
        let tokens = tokenize("a\n\n   @", &handler);
        assert_eq!(
            tokens[1].error(),
            Some(LexError::UnrecognizedByte {
                byte: b'@',
                position: Position::new(3, 4),
            })
        );
    }
}
