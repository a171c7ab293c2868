//! Lexing session.
//!
//! A [`Session`] owns the loaded sources and the diagnostic handler for one
//! run of the driver.

use std::path::Path;

use touyc_lex::Lexer;
use touyc_util::{FileId, Handler, SourceMap};

use crate::config::Config;
use crate::error::{DriverError, Result};
use crate::listing::TokenRow;

/// State for one driver run.
pub struct Session {
    config: Config,
    sources: SourceMap,
    handler: Handler,
}

impl Session {
    /// Creates an empty session.
    pub fn new(config: Config) -> Self {
        Self {
            config,
            sources: SourceMap::new(),
            handler: Handler::new(),
        }
    }

    /// The active configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Reads `path` into the source map.
    ///
    /// The file is read as bytes; text that is not UTF-8 is left for the
    /// lexer to report byte by byte.
    pub fn load_file(&mut self, path: &Path) -> Result<FileId> {
        let content = std::fs::read(path).map_err(|source| DriverError::ReadSource {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::info!(path = %path.display(), bytes = content.len(), "loaded source file");
        Ok(self.add_source(path.display().to_string(), content))
    }

    /// Adds in-memory source, text or bytes, under `name`.
    pub fn add_source(&mut self, name: impl Into<String>, content: impl Into<Vec<u8>>) -> FileId {
        self.sources.add_file(name, content)
    }

    /// Tokenizes a loaded file into listing rows.
    ///
    /// Without `keep_going` the listing stops at the first lexical error;
    /// otherwise error tokens are skipped and lexing resumes after them.
    /// Errors are recorded in the session either way.
    pub fn list_tokens(&self, file_id: FileId) -> Result<Vec<TokenRow>> {
        let file = self.sources.get_file(file_id)?;
        let lexer = Lexer::with_file(file.content(), &self.handler, file_id);

        let mut rows = Vec::new();
        for token in lexer {
            match TokenRow::from_token(&token) {
                Some(row) => rows.push(row),
                None if self.config.keep_going => {
                    tracing::debug!(position = %token.start(), "skipping lexical error");
                },
                None => {
                    tracing::debug!(position = %token.start(), "halting at first lexical error");
                    break;
                },
            }
        }

        tracing::debug!(file = file.name(), tokens = rows.len(), "lexed file");
        Ok(rows)
    }

    /// Renders every recorded diagnostic with its source context.
    pub fn render_diagnostics(&self) -> String {
        self.handler
            .diagnostics()
            .iter()
            .map(|diagnostic| diagnostic.render(&self.sources))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Number of errors recorded so far.
    pub fn error_count(&self) -> usize {
        self.handler.error_count()
    }

    /// Fails with [`DriverError::Aborted`] if any error was recorded.
    pub fn finish(&self) -> Result<()> {
        match self.handler.error_count() {
            0 => Ok(()),
            errors => Err(DriverError::Aborted { errors }),
        }
    }
}
