//! Span module - Source location tracking.
//!
//! A [`Span`] names a byte range in one file together with the 1-based line
//! and column where it starts. Files themselves live in the [`SourceMap`].
//!
//! # Examples
//!
//! ```
//! use touyc_util::span::{FileId, Span};
//!
//! let span = Span::with_file(10, 12, FileId(0), 2, 5);
//! assert_eq!(span.len(), 2);
//! ```

mod source_map;

pub use source_map::{SourceFile, SourceMap};

/// Index of a file in the [`SourceMap`], in the order files were added.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FileId(pub usize);

impl FileId {
    /// File id used when the caller has no source map.
    pub const DUMMY: FileId = FileId(0);
}

/// Byte range in a source file plus the human-facing start position.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Span {
    /// First byte of the range.
    pub start: usize,
    /// One past the last byte.
    pub end: usize,
    /// 1-based line of `start`.
    pub line: u32,
    /// 1-based column of `start`, counted in bytes.
    pub column: u32,
    /// File the range belongs to.
    pub file_id: FileId,
}

impl Span {
    /// Placeholder for diagnostics built before a location is known.
    pub const DUMMY: Span = Span {
        start: 0,
        end: 0,
        line: 0,
        column: 0,
        file_id: FileId::DUMMY,
    };

    /// Span in the [`FileId::DUMMY`] file.
    #[inline]
    pub fn new(start: usize, end: usize, line: u32, column: u32) -> Self {
        Self::with_file(start, end, FileId::DUMMY, line, column)
    }

    /// Span in `file_id`.
    #[inline]
    pub fn with_file(start: usize, end: usize, file_id: FileId, line: u32, column: u32) -> Self {
        Self {
            start,
            end,
            line,
            column,
            file_id,
        }
    }

    /// The same range, attributed to `file_id`.
    #[inline]
    pub fn in_file(self, file_id: FileId) -> Self {
        Self { file_id, ..self }
    }

    /// Width in bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// True for a zero-width span such as the end-of-input position.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
