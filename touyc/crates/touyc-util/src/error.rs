//! Error types for touyc-util.

use thiserror::Error;

use crate::span::FileId;

/// Error type for source map lookups.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SourceMapError {
    /// The id was never handed out by this source map.
    #[error("no source file with {0:?}")]
    UnknownFile(FileId),
}

/// Result type alias for source map operations.
pub type SourceMapResult<T> = std::result::Result<T, SourceMapError>;
