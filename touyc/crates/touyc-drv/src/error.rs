//! Driver error types.

use std::path::PathBuf;

use thiserror::Error;
use touyc_util::SourceMapError;

/// Errors that stop the driver.
#[derive(Error, Debug)]
pub enum DriverError {
    /// Configuration could not be found or parsed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// An input file could not be read.
    #[error("could not read `{}`: {source}", .path.display())]
    ReadSource {
        /// The file that failed.
        path: PathBuf,
        /// Underlying failure.
        source: std::io::Error,
    },

    /// Writing output failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serializing the JSON listing failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A file id did not resolve.
    #[error(transparent)]
    SourceMap(#[from] SourceMapError),

    /// Lexing reported errors; they have already been rendered.
    #[error("aborting due to {errors} previous error{}", plural(.errors))]
    Aborted {
        /// Number of errors reported.
        errors: usize,
    },
}

fn plural(count: &usize) -> &'static str {
    if *count == 1 {
        ""
    } else {
        "s"
    }
}

/// Result type alias using DriverError.
pub type Result<T> = std::result::Result<T, DriverError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let err = DriverError::Config("missing field".to_string());
        assert_eq!(err.to_string(), "Configuration error: missing field");
    }

    #[test]
    fn test_read_source_display() {
        let err = DriverError::ReadSource {
            path: PathBuf::from("main.touy"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        assert_eq!(err.to_string(), "could not read `main.touy`: not found");
    }

    #[test]
    fn test_aborted_display() {
        assert_eq!(
            DriverError::Aborted { errors: 1 }.to_string(),
            "aborting due to 1 previous error"
        );
        assert_eq!(
            DriverError::Aborted { errors: 3 }.to_string(),
            "aborting due to 3 previous errors"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed");
        let err: DriverError = io_err.into();
        assert!(matches!(err, DriverError::Io(_)));
    }

    #[test]
    fn test_source_map_error_conversion() {
        let err: DriverError = SourceMapError::UnknownFile(touyc_util::FileId(9)).into();
        assert!(matches!(err, DriverError::SourceMap(_)));
    }
}
