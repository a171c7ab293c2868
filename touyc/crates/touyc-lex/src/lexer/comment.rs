//! Comment skipping.
//!
//! Comments are trivia: they are skipped before a token starts and never
//! produce tokens of their own. Block comments do not nest.

use super::core::Scanner;
use crate::error::LexError;

impl<'a> Scanner<'a> {
    /// Skips `//` up to, not including, the next newline or end of input.
    pub(super) fn skip_line_comment(&mut self) {
        self.bump();
        self.bump();
        while !self.at_end() && self.current() != b'\n' {
            self.bump();
        }
    }

    /// Skips `/* ... */`.
    ///
    /// Reaching end of input first is an error reported at the `/*`, and
    /// the token start is moved there so the error token covers the comment.
    pub(super) fn skip_block_comment(&mut self) -> Result<(), LexError> {
        let open = self.cursor;
        self.bump();
        self.bump();

        while self.current() != b'*' || self.peek(1) != b'/' {
            if self.at_end() {
                self.start = open;
                return Err(LexError::UnterminatedComment {
                    position: open.position(),
                });
            }
            self.bump();
        }

        self.bump();
        self.bump();
        Ok(())
    }
}
