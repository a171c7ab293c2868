//! Diagnostic severity levels.

use std::fmt;

/// How serious a diagnostic is. Only errors make the driver fail.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Level {
    /// Stops the run.
    Error,
    /// Reported but not fatal.
    Warning,
}

impl Level {
    /// Returns true for [`Level::Error`].
    #[inline]
    pub fn is_error(self) -> bool {
        matches!(self, Level::Error)
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Level::Error => "error",
            Level::Warning => "warning",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level() {
        assert_eq!(Level::Error.to_string(), "error");
        assert_eq!(Level::Warning.to_string(), "warning");
        assert!(Level::Error.is_error());
        assert!(!Level::Warning.is_error());
    }
}
