//! Operator and punctuation lexing.
//!
//! Every operator leader looks at one byte of lookahead and falls back to
//! its bare single-byte punctuation.

use super::core::Scanner;
use crate::token::{Operator, Punct, Token, TokenKind};

impl<'a> Scanner<'a> {
    fn operator(&self, op: Operator) -> Token<'a> {
        self.token(TokenKind::Operator(op))
    }

    fn punct(&self, punct: Punct) -> Token<'a> {
        self.token(TokenKind::Punct(punct))
    }

    /// Handles: `:`, `:=`, `::`
    pub(super) fn lex_colon(&mut self) -> Token<'a> {
        self.bump();
        if self.eat(b'=') {
            self.operator(Operator::DeclAssign)
        } else if self.eat(b':') {
            self.operator(Operator::DeclDecl)
        } else {
            self.punct(Punct::Colon)
        }
    }

    /// Handles: `=`, `==`, `=>`
    pub(super) fn lex_equals(&mut self) -> Token<'a> {
        self.bump();
        if self.eat(b'=') {
            self.operator(Operator::IsEqual)
        } else if self.eat(b'>') {
            self.operator(Operator::EqualArrow)
        } else {
            self.punct(Punct::Eq)
        }
    }

    /// Handles: `+`, `++`, `+=`
    pub(super) fn lex_plus(&mut self) -> Token<'a> {
        self.bump();
        if self.eat(b'+') {
            self.operator(Operator::PlusPlus)
        } else if self.eat(b'=') {
            self.operator(Operator::PlusEquals)
        } else {
            self.punct(Punct::Plus)
        }
    }

    /// Handles: `-`, `--`, `-=`, `->`
    pub(super) fn lex_minus(&mut self) -> Token<'a> {
        self.bump();
        if self.eat(b'-') {
            self.operator(Operator::MinusMinus)
        } else if self.eat(b'=') {
            self.operator(Operator::MinusEquals)
        } else if self.eat(b'>') {
            self.operator(Operator::MinusArrow)
        } else {
            self.punct(Punct::Minus)
        }
    }

    /// Handles: `*`, `*=`
    pub(super) fn lex_star(&mut self) -> Token<'a> {
        self.bump();
        if self.eat(b'=') {
            self.operator(Operator::TimesEquals)
        } else {
            self.punct(Punct::Star)
        }
    }

    /// Handles: `%`, `%=`
    pub(super) fn lex_percent(&mut self) -> Token<'a> {
        self.bump();
        if self.eat(b'=') {
            self.operator(Operator::ModEquals)
        } else {
            self.punct(Punct::Percent)
        }
    }

    /// Handles: `/`, `/=`
    ///
    /// `//` and `/*` never get here; they are skipped as trivia first.
    pub(super) fn lex_slash(&mut self) -> Token<'a> {
        self.bump();
        if self.eat(b'=') {
            self.operator(Operator::DivEquals)
        } else {
            self.punct(Punct::Slash)
        }
    }
}
