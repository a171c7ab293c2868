//! Source buffer and scan cursor.
//!
//! The [`Cursor`] is a small `Copy` value: a byte offset plus the 0-based
//! line and column it corresponds to. Scanning never mutates a cursor held
//! elsewhere; it produces a new one. That is what lets `peek` be a plain
//! scan on a copy.

use std::fmt;

/// Immutable view of the bytes being tokenized.
///
/// The buffer is raw bytes, not text: nothing is decoded, so bytes that do
/// not form valid UTF-8 reach the scanner like any other. Reading at or past
/// the end yields `0`; the end itself is decided by length, so an embedded
/// NUL is an ordinary (unrecognized) byte.
///
/// # Example
///
/// ```
/// use touyc_lex::cursor::SourceBuffer;
///
/// let source = SourceBuffer::new(b"a\xE9");
/// assert_eq!(source.byte_at(1), 0xE9);
/// assert_eq!(source.byte_at(2), 0);
/// assert!(source.is_end(2));
/// ```
#[derive(Clone, Copy, Debug)]
pub struct SourceBuffer<'a> {
    bytes: &'a [u8],
}

impl<'a> SourceBuffer<'a> {
    /// Wraps anything that can be viewed as bytes: `&str`, `&[u8]`,
    /// `&Vec<u8>` and so on.
    pub fn new<S>(source: &'a S) -> Self
    where
        S: AsRef<[u8]> + ?Sized,
    {
        Self {
            bytes: source.as_ref(),
        }
    }

    /// The full source.
    #[inline]
    pub fn as_bytes(&self) -> &'a [u8] {
        self.bytes
    }

    /// Length in bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Returns true for an empty buffer.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Byte at `offset`, or `0` past the end.
    #[inline]
    pub fn byte_at(&self, offset: usize) -> u8 {
        self.bytes.get(offset).copied().unwrap_or(0)
    }

    /// Returns true once `offset` has run off the buffer.
    #[inline]
    pub fn is_end(&self, offset: usize) -> bool {
        offset >= self.bytes.len()
    }

    /// Text between two offsets.
    ///
    /// Only called on identifier and number spans, which are ASCII. A range
    /// that is out of bounds or not UTF-8 comes back empty.
    #[inline]
    pub fn slice(&self, start: usize, end: usize) -> &'a str {
        let bytes = self.bytes.get(start..end).unwrap_or_default();
        std::str::from_utf8(bytes).unwrap_or_default()
    }
}

/// A human-facing location: 1-based line and column.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    /// Line number, starting at 1.
    pub line: u32,
    /// Column number in bytes, starting at 1.
    pub column: u32,
}

impl Position {
    /// Creates a position.
    pub const fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Scan position within a [`SourceBuffer`].
///
/// `line` and `column` are 0-based; use [`Cursor::position`] for the
/// 1-based form.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Cursor {
    /// Byte offset of the next unread byte.
    pub offset: usize,
    /// 0-based line.
    pub line: u32,
    /// 0-based column, counted in bytes.
    pub column: u32,
}

impl Cursor {
    /// Cursor at the start of a buffer.
    pub const START: Cursor = Cursor {
        offset: 0,
        line: 0,
        column: 0,
    };

    /// Steps over `byte`, which must be the byte at `self.offset`.
    ///
    /// # Example
    ///
    /// ```
    /// use touyc_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::START;
    /// cursor.advance(b'a');
    /// cursor.advance(b'\n');
    /// assert_eq!((cursor.offset, cursor.line, cursor.column), (2, 1, 0));
    /// ```
    #[inline]
    pub fn advance(&mut self, byte: u8) {
        self.offset += 1;
        if byte == b'\n' {
            self.line += 1;
            self.column = 0;
        } else {
            self.column += 1;
        }
    }

    /// 1-based position of the next unread byte.
    #[inline]
    pub fn position(&self) -> Position {
        Position {
            line: self.line + 1,
            column: self.column + 1,
        }
    }
}
