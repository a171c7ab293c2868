//! Core lexer implementation.
//!
//! [`scan`] is the whole tokenizer: it takes a cursor by value and returns
//! the next token together with the advanced cursor. [`Lexer`] stores one
//! cursor and decides whether a scan result is kept (`consume`) or thrown
//! away (`peek`).

use touyc_util::{DiagnosticBuilder, FileId, Handler, Span};

use crate::chars;
use crate::cursor::{Cursor, Position, SourceBuffer};
use crate::error::LexError;
use crate::token::{Punct, Token, TokenKind};

/// Working state of a single scan.
pub(super) struct Scanner<'a> {
    pub(super) source: SourceBuffer<'a>,
    pub(super) cursor: Cursor,
    /// Where the token being built starts.
    pub(super) start: Cursor,
}

impl<'a> Scanner<'a> {
    fn new(source: SourceBuffer<'a>, cursor: Cursor) -> Self {
        Self {
            source,
            cursor,
            start: cursor,
        }
    }

    #[inline]
    pub(super) fn current(&self) -> u8 {
        self.source.byte_at(self.cursor.offset)
    }

    #[inline]
    pub(super) fn peek(&self, ahead: usize) -> u8 {
        self.source.byte_at(self.cursor.offset + ahead)
    }

    #[inline]
    pub(super) fn at_end(&self) -> bool {
        self.source.is_end(self.cursor.offset)
    }

    #[inline]
    pub(super) fn bump(&mut self) {
        let byte = self.current();
        self.cursor.advance(byte);
    }

    /// Consumes the current byte if it is `expected`.
    #[inline]
    pub(super) fn eat(&mut self, expected: u8) -> bool {
        if !self.at_end() && self.current() == expected {
            self.bump();
            true
        } else {
            false
        }
    }

    fn span(&self) -> Span {
        Span::new(
            self.start.offset,
            self.cursor.offset,
            self.start.line + 1,
            self.start.column + 1,
        )
    }

    /// Finishes a token spanning `start..cursor`.
    pub(super) fn token(&self, kind: TokenKind) -> Token<'a> {
        // Tokens never contain a newline, so the last byte sits on the start line.
        let end = Position::new(self.cursor.line + 1, self.cursor.column);
        Token {
            kind,
            span: self.span(),
            end: Some(end),
            text: None,
            value: None,
        }
    }

    pub(super) fn error(&self, err: LexError) -> Token<'a> {
        Token {
            kind: TokenKind::Error(err),
            span: self.span(),
            end: None,
            text: None,
            value: None,
        }
    }

    fn scan_token(&mut self) -> Token<'a> {
        if let Err(err) = self.skip_trivia() {
            return self.error(err);
        }

        self.start = self.cursor;

        if self.at_end() {
            return self.end_of_input();
        }

        let byte = self.current();
        if chars::is_ident_start(byte) {
            return self.lex_identifier();
        }
        if byte.is_ascii_digit() {
            return self.lex_number();
        }
        if let Some(punct) = Punct::standalone(byte) {
            self.bump();
            return self.token(TokenKind::Punct(punct));
        }

        match byte {
            b':' => self.lex_colon(),
            b'=' => self.lex_equals(),
            b'+' => self.lex_plus(),
            b'-' => self.lex_minus(),
            b'*' => self.lex_star(),
            b'%' => self.lex_percent(),
            b'/' => self.lex_slash(),
            _ => {
                let position = self.cursor.position();
                self.bump();
                self.error(LexError::UnrecognizedByte { byte, position })
            },
        }
    }

    /// The terminal token. The cursor does not move, so every later scan
    /// yields it again.
    fn end_of_input(&self) -> Token<'a> {
        Token {
            kind: TokenKind::EndOfInput,
            span: self.span(),
            end: None,
            text: None,
            value: None,
        }
    }

    /// Skips whitespace and comments in one loop.
    fn skip_trivia(&mut self) -> Result<(), LexError> {
        loop {
            let byte = self.current();
            if chars::is_whitespace(byte) {
                self.bump();
            } else if byte == b'/' && self.peek(1) == b'/' {
                self.skip_line_comment();
            } else if byte == b'/' && self.peek(1) == b'*' {
                self.skip_block_comment()?;
            } else {
                return Ok(());
            }
        }
    }
}

/// Scans one token starting at `cursor`.
///
/// This is pure: the caller's cursor is untouched and the advanced cursor is
/// returned alongside the token.
///
/// # Example
///
/// ```
/// use touyc_lex::cursor::{Cursor, SourceBuffer};
/// use touyc_lex::{scan, TokenKind};
///
/// let source = SourceBuffer::new("foo := 42");
/// let (token, next) = scan(source, Cursor::START);
/// assert_eq!(token.kind, TokenKind::Identifier);
/// assert_eq!(token.text, Some("foo"));
/// assert_eq!(next.offset, 3);
/// ```
pub fn scan(source: SourceBuffer<'_>, cursor: Cursor) -> (Token<'_>, Cursor) {
    let mut scanner = Scanner::new(source, cursor);
    let token = scanner.scan_token();
    (token, scanner.cursor)
}

/// Lexer for touy source text.
///
/// Errors come back as [`TokenKind::Error`] tokens. `consume` also reports
/// each of them to the [`Handler`]; `peek` never does.
pub struct Lexer<'a> {
    source: SourceBuffer<'a>,
    cursor: Cursor,
    handler: &'a Handler,
    file_id: FileId,
}

impl<'a> Lexer<'a> {
    /// Creates a lexer at the start of `source`, given as `&str` or raw
    /// bytes.
    pub fn new<S>(source: &'a S, handler: &'a Handler) -> Self
    where
        S: AsRef<[u8]> + ?Sized,
    {
        Self::with_file(source, handler, FileId::DUMMY)
    }

    /// Creates a lexer whose spans are attributed to `file_id`.
    pub fn with_file<S>(source: &'a S, handler: &'a Handler, file_id: FileId) -> Self
    where
        S: AsRef<[u8]> + ?Sized,
    {
        Self {
            source: SourceBuffer::new(source),
            cursor: Cursor::START,
            handler,
            file_id,
        }
    }

    /// Returns the next token without moving the lexer.
    pub fn peek(&self) -> Token<'a> {
        let (token, _) = scan(self.source, self.cursor);
        self.attribute(token)
    }

    /// Returns the next token and moves past it.
    ///
    /// Once the end of input is reached every call returns
    /// [`TokenKind::EndOfInput`] again.
    pub fn consume(&mut self) -> Token<'a> {
        let (token, next) = scan(self.source, self.cursor);
        self.cursor = next;
        let token = self.attribute(token);
        if let TokenKind::Error(err) = token.kind {
            self.report(&token, err);
        }
        token
    }

    fn attribute(&self, mut token: Token<'a>) -> Token<'a> {
        token.span = token.span.in_file(self.file_id);
        token
    }

    fn report(&self, token: &Token<'a>, err: LexError) {
        tracing::debug!(
            position = %err.position(),
            code = %err.code(),
            "lexical error: {}",
            err
        );

        let mut builder = DiagnosticBuilder::error(err.to_string())
            .code(err.code())
            .span(diagnostic_span(token, err));
        if let Some(help) = err.help() {
            builder = builder.help(help);
        }
        builder.emit(self.handler);
    }

    /// The stored cursor.
    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    /// 1-based line of the stored cursor.
    pub fn line(&self) -> u32 {
        self.cursor.line + 1
    }

    /// 1-based column of the stored cursor.
    pub fn column(&self) -> u32 {
        self.cursor.column + 1
    }

    /// Byte offset of the stored cursor.
    pub fn offset(&self) -> usize {
        self.cursor.offset
    }

    /// The bytes being tokenized.
    pub fn source(&self) -> &'a [u8] {
        self.source.as_bytes()
    }

    /// Returns true once only [`TokenKind::EndOfInput`] remains.
    pub fn is_finished(&self) -> bool {
        self.peek().is_eof()
    }
}

/// Span pointing at the problem rather than at the token start.
fn diagnostic_span(token: &Token<'_>, err: LexError) -> Span {
    let position = err.position();
    let (start, len) = match err {
        // The cursor stops on the second '.', which is where the token ends.
        LexError::MalformedNumber { .. } => (token.span.end, 1),
        LexError::UnrecognizedByte { .. } => (token.span.start, 1),
        LexError::UnterminatedComment { .. } => (token.span.start, 2),
    };
    Span::with_file(
        start,
        start + len,
        token.span.file_id,
        position.line,
        position.column,
    )
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let token = self.consume();
        if token.is_eof() {
            None
        } else {
            Some(token)
        }
    }
}

/// Tokenizes `source` the way the driver does: every token up to and
/// including [`TokenKind::EndOfInput`], stopping early after the first
/// error token.
///
/// # Example
///
/// ```
/// use touyc_lex::{tokenize, TokenKind};
/// use touyc_util::Handler;
///
/// let handler = Handler::new();
/// let tokens = tokenize("x @ y", &handler);
/// assert_eq!(tokens.len(), 2);
/// assert!(matches!(tokens[1].kind, TokenKind::Error(_)));
/// assert_eq!(handler.error_count(), 1);
/// ```
pub fn tokenize<'a, S>(source: &'a S, handler: &'a Handler) -> Vec<Token<'a>>
where
    S: AsRef<[u8]> + ?Sized,
{
    let mut lexer = Lexer::new(source, handler);
    let mut tokens = Vec::new();
    loop {
        let token = lexer.consume();
        let stop = token.is_eof() || token.error().is_some();
        tokens.push(token);
        if stop {
            return tokens;
        }
    }
}
