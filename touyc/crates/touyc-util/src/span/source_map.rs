//! Loaded source files.
//!
//! Files are kept as raw bytes, exactly as read. Decoding happens only when
//! a line is shown to the user, and then lossily, so a stray non-UTF-8 byte
//! still gets its source context in a diagnostic.

use std::borrow::Cow;
use std::sync::Arc;

use super::{FileId, Span};
use crate::error::{SourceMapError, SourceMapResult};

/// One loaded file.
pub struct SourceFile {
    id: FileId,
    name: String,
    content: Arc<[u8]>,
    /// Offset of the first byte of every line.
    line_starts: Vec<usize>,
}

impl SourceFile {
    fn new(id: FileId, name: String, content: Vec<u8>) -> Self {
        let line_starts = std::iter::once(0)
            .chain(newline_ends(&content))
            .collect();
        Self {
            id,
            name,
            content: content.into(),
            line_starts,
        }
    }

    /// Display name, usually the path it was read from.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The file's bytes.
    #[inline]
    pub fn content(&self) -> &[u8] {
        &self.content
    }

    /// Line `line` (1-based) without its terminator, decoded lossily.
    ///
    /// # Examples
    ///
    /// ```
    /// use touyc_util::SourceMap;
    ///
    /// let mut map = SourceMap::new();
    /// let id = map.add_file("main.touy", b"x := 1;\r\n\xE9\n".to_vec());
    /// let file = map.get_file(id).unwrap();
    /// assert_eq!(file.line_at(1).as_deref(), Some("x := 1;"));
    /// assert_eq!(file.line_at(2).as_deref(), Some("\u{FFFD}"));
    /// assert_eq!(file.line_at(4), None);
    /// ```
    pub fn line_at(&self, line: usize) -> Option<Cow<'_, str>> {
        let start = *self.line_starts.get(line.checked_sub(1)?)?;
        let end = self
            .line_starts
            .get(line)
            .copied()
            .unwrap_or(self.content.len());

        let mut bytes = self.content.get(start..end)?;
        while let [rest @ .., b'\n' | b'\r'] = bytes {
            bytes = rest;
        }
        Some(String::from_utf8_lossy(bytes))
    }
}

impl std::fmt::Debug for SourceFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SourceFile")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("bytes", &self.content.len())
            .finish()
    }
}

fn newline_ends(content: &[u8]) -> impl Iterator<Item = usize> + '_ {
    content
        .iter()
        .enumerate()
        .filter(|&(_, &byte)| byte == b'\n')
        .map(|(i, _)| i + 1)
}

/// Every file loaded during a run, indexed by [`FileId`].
#[derive(Default)]
pub struct SourceMap {
    files: Vec<Arc<SourceFile>>,
}

impl SourceMap {
    /// Creates an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a file and returns its id. `content` may be text or bytes.
    pub fn add_file(&mut self, name: impl Into<String>, content: impl Into<Vec<u8>>) -> FileId {
        let id = FileId(self.files.len());
        self.files
            .push(Arc::new(SourceFile::new(id, name.into(), content.into())));
        id
    }

    /// Looks a file up by id.
    pub fn get_file(&self, id: FileId) -> SourceMapResult<Arc<SourceFile>> {
        self.files
            .get(id.0)
            .cloned()
            .ok_or(SourceMapError::UnknownFile(id))
    }

    /// Renders `span` as a location line, the source line and a caret
    /// underline. Returns `None` when the file or line is unknown.
    ///
    /// ```text
    /// --> main.touy:1:6
    ///   1 | x := @
    ///     |      ^
    /// ```
    pub fn format_span(&self, span: Span) -> Option<String> {
        let file = self.get_file(span.file_id).ok()?;
        let line = file.line_at(span.line as usize)?;
        let gutter = file.line_starts.len().to_string().len().max(3);

        // Carets stay within the displayed line, and there is always one
        let indent = (span.column as usize).saturating_sub(1);
        let room = line.chars().count().saturating_sub(indent).max(1);
        let carets = span.len().clamp(1, room);

        Some(format!(
            "--> {name}:{l}:{c}\n{l:>gutter$} | {line}\n{blank:>gutter$} | {pad}{marks}",
            name = file.name(),
            l = span.line,
            c = span.column,
            blank = "",
            pad = " ".repeat(indent),
            marks = "^".repeat(carets),
        ))
    }
}
