//! Token definitions.
//!
//! A [`Token`] is a transient value produced by one scan. It borrows the
//! source buffer for its `text` slice and therefore cannot outlive it.

use std::fmt;

use bitflags::bitflags;
use touyc_util::Span;

use crate::cursor::Position;
use crate::error::LexError;

/// Reserved words of the language.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Keyword {
    /// `void`
    Void,
    /// `char`
    Char,
    /// `int`
    Int,
    /// `u8`
    U8,
    /// `u16`
    U16,
    /// `u32`
    U32,
    /// `u64`
    U64,
    /// `s8`
    S8,
    /// `s16`
    S16,
    /// `s32`
    S32,
    /// `s64`
    S64,
    /// `f32`
    F32,
    /// `f64`
    F64,
    /// `enum`
    Enum,
    /// `struct`
    Struct,
    /// `union`
    Union,
    /// `defer`
    Defer,
    /// `return`
    Return,
}

impl Keyword {
    /// Every keyword, in table order.
    pub const ALL: [Keyword; 18] = [
        Keyword::Void,
        Keyword::Char,
        Keyword::Int,
        Keyword::U8,
        Keyword::U16,
        Keyword::U32,
        Keyword::U64,
        Keyword::S8,
        Keyword::S16,
        Keyword::S32,
        Keyword::S64,
        Keyword::F32,
        Keyword::F64,
        Keyword::Enum,
        Keyword::Struct,
        Keyword::Union,
        Keyword::Defer,
        Keyword::Return,
    ];

    /// Resolves a scanned identifier to a keyword.
    ///
    /// Only an exact, full-length match counts: `int` is a keyword, `intx`
    /// and `in` are not.
    ///
    /// # Examples
    ///
    /// ```
    /// use touyc_lex::Keyword;
    ///
    /// assert_eq!(Keyword::from_ident("defer"), Some(Keyword::Defer));
    /// assert_eq!(Keyword::from_ident("intx"), None);
    /// ```
    pub fn from_ident(text: &str) -> Option<Keyword> {
        let keyword = match text {
            "void" => Keyword::Void,
            "char" => Keyword::Char,
            "int" => Keyword::Int,
            "u8" => Keyword::U8,
            "u16" => Keyword::U16,
            "u32" => Keyword::U32,
            "u64" => Keyword::U64,
            "s8" => Keyword::S8,
            "s16" => Keyword::S16,
            "s32" => Keyword::S32,
            "s64" => Keyword::S64,
            "f32" => Keyword::F32,
            "f64" => Keyword::F64,
            "enum" => Keyword::Enum,
            "struct" => Keyword::Struct,
            "union" => Keyword::Union,
            "defer" => Keyword::Defer,
            "return" => Keyword::Return,
            _ => return None,
        };
        Some(keyword)
    }

    /// Source spelling of the keyword.
    pub fn as_str(self) -> &'static str {
        match self {
            Keyword::Void => "void",
            Keyword::Char => "char",
            Keyword::Int => "int",
            Keyword::U8 => "u8",
            Keyword::U16 => "u16",
            Keyword::U32 => "u32",
            Keyword::U64 => "u64",
            Keyword::S8 => "s8",
            Keyword::S16 => "s16",
            Keyword::S32 => "s32",
            Keyword::S64 => "s64",
            Keyword::F32 => "f32",
            Keyword::F64 => "f64",
            Keyword::Enum => "enum",
            Keyword::Struct => "struct",
            Keyword::Union => "union",
            Keyword::Defer => "defer",
            Keyword::Return => "return",
        }
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Single-byte punctuation, including the bare forms of the operator
/// leaders (`:`, `=`, `+`, `-`, `*`, `%`, `/`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Punct {
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `[`
    LBracket,
    /// `]`
    RBracket,
    /// `{`
    LBrace,
    /// `}`
    RBrace,
    /// `'`
    Quote,
    /// `.`
    Dot,
    /// `,`
    Comma,
    /// `;`
    Semicolon,
    /// `$`
    Dollar,
    /// `#`
    Hash,
    /// `?`
    Question,
    /// `^`
    Caret,
    /// `:`
    Colon,
    /// `=`
    Eq,
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Star,
    /// `%`
    Percent,
    /// `/`
    Slash,
}

impl Punct {
    /// Maps a byte that always forms a token on its own.
    ///
    /// Operator leaders are not included; they need a byte of lookahead.
    pub fn standalone(byte: u8) -> Option<Punct> {
        let punct = match byte {
            b'(' => Punct::LParen,
            b')' => Punct::RParen,
            b'[' => Punct::LBracket,
            b']' => Punct::RBracket,
            b'{' => Punct::LBrace,
            b'}' => Punct::RBrace,
            b'\'' => Punct::Quote,
            b'.' => Punct::Dot,
            b',' => Punct::Comma,
            b';' => Punct::Semicolon,
            b'$' => Punct::Dollar,
            b'#' => Punct::Hash,
            b'?' => Punct::Question,
            b'^' => Punct::Caret,
            _ => return None,
        };
        Some(punct)
    }

    /// The byte this punctuation is spelled with.
    pub fn as_char(self) -> char {
        match self {
            Punct::LParen => '(',
            Punct::RParen => ')',
            Punct::LBracket => '[',
            Punct::RBracket => ']',
            Punct::LBrace => '{',
            Punct::RBrace => '}',
            Punct::Quote => '\'',
            Punct::Dot => '.',
            Punct::Comma => ',',
            Punct::Semicolon => ';',
            Punct::Dollar => '$',
            Punct::Hash => '#',
            Punct::Question => '?',
            Punct::Caret => '^',
            Punct::Colon => ':',
            Punct::Eq => '=',
            Punct::Plus => '+',
            Punct::Minus => '-',
            Punct::Star => '*',
            Punct::Percent => '%',
            Punct::Slash => '/',
        }
    }
}

impl fmt::Display for Punct {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Two-byte operators.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operator {
    /// `:=`
    DeclAssign,
    /// `::`
    DeclDecl,
    /// `==`
    IsEqual,
    /// `=>`
    EqualArrow,
    /// `++`
    PlusPlus,
    /// `+=`
    PlusEquals,
    /// `--`
    MinusMinus,
    /// `-=`
    MinusEquals,
    /// `->`
    MinusArrow,
    /// `*=`
    TimesEquals,
    /// `%=`
    ModEquals,
    /// `/=`
    DivEquals,
}

impl Operator {
    /// Source spelling of the operator.
    pub fn as_str(self) -> &'static str {
        match self {
            Operator::DeclAssign => ":=",
            Operator::DeclDecl => "::",
            Operator::IsEqual => "==",
            Operator::EqualArrow => "=>",
            Operator::PlusPlus => "++",
            Operator::PlusEquals => "+=",
            Operator::MinusMinus => "--",
            Operator::MinusEquals => "-=",
            Operator::MinusArrow => "->",
            Operator::TimesEquals => "*=",
            Operator::ModEquals => "%=",
            Operator::DivEquals => "/=",
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

bitflags! {
    /// Minimum unsigned width needed to hold an integer literal.
    ///
    /// Each flag is set when the magnitude does not fit the named width.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct WidthFlags: u8 {
        /// Magnitude exceeds `u8::MAX`.
        const WIDER_THAN_8 = 1 << 0;
        /// Magnitude exceeds `u16::MAX`.
        const WIDER_THAN_16 = 1 << 1;
        /// Magnitude exceeds `u32::MAX`.
        const WIDER_THAN_32 = 1 << 2;
        /// The digit run overflowed `u64`; the stored magnitude is saturated.
        const WIDER_THAN_64 = 1 << 3;
    }
}

impl WidthFlags {
    /// Classifies a magnitude that fit in 64 bits.
    pub fn for_magnitude(magnitude: u64) -> WidthFlags {
        let mut flags = WidthFlags::empty();
        flags.set(WidthFlags::WIDER_THAN_8, magnitude > u64::from(u8::MAX));
        flags.set(WidthFlags::WIDER_THAN_16, magnitude > u64::from(u16::MAX));
        flags.set(WidthFlags::WIDER_THAN_32, magnitude > u64::from(u32::MAX));
        flags
    }

    /// Smallest unsigned width in bits that holds the literal.
    ///
    /// Literals that overflowed 64 bits also report 64; check
    /// [`WidthFlags::WIDER_THAN_64`] to detect them.
    ///
    /// # Examples
    ///
    /// ```
    /// use touyc_lex::WidthFlags;
    ///
    /// assert_eq!(WidthFlags::for_magnitude(255).min_width_bits(), 8);
    /// assert_eq!(WidthFlags::for_magnitude(256).min_width_bits(), 16);
    /// ```
    pub fn min_width_bits(self) -> u32 {
        if self.contains(WidthFlags::WIDER_THAN_32) {
            64
        } else if self.contains(WidthFlags::WIDER_THAN_16) {
            32
        } else if self.contains(WidthFlags::WIDER_THAN_8) {
            16
        } else {
            8
        }
    }
}

/// Materialized value of a numeric literal.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum NumericValue {
    /// Literal without a decimal point.
    Integer {
        /// Base-10 value of the digits.
        magnitude: u64,
        /// Width classification of `magnitude`.
        width: WidthFlags,
    },
    /// Literal with one decimal point, parsed at both precisions.
    Float {
        /// Single-precision parse.
        single: f32,
        /// Double-precision parse.
        double: f64,
    },
}

impl NumericValue {
    /// Returns true for float literals.
    pub fn is_float(&self) -> bool {
        matches!(self, NumericValue::Float { .. })
    }

    /// Integer magnitude, if this is an integer literal.
    pub fn as_integer(&self) -> Option<u64> {
        match *self {
            NumericValue::Integer { magnitude, .. } => Some(magnitude),
            NumericValue::Float { .. } => None,
        }
    }

    /// Double-precision value, if this is a float literal.
    pub fn as_f64(&self) -> Option<f64> {
        match *self {
            NumericValue::Float { double, .. } => Some(double),
            NumericValue::Integer { .. } => None,
        }
    }

    /// Single-precision value, if this is a float literal.
    pub fn as_f32(&self) -> Option<f32> {
        match *self {
            NumericValue::Float { single, .. } => Some(single),
            NumericValue::Integer { .. } => None,
        }
    }
}

/// Classification of a token.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TokenKind {
    /// A name that is not a keyword.
    Identifier,
    /// A reserved word.
    Keyword(Keyword),
    /// A numeric literal; see [`Token::value`].
    Number,
    /// Single-byte punctuation.
    Punct(Punct),
    /// Two-byte operator.
    Operator(Operator),
    /// Terminal token; repeated for every scan past the end.
    EndOfInput,
    /// A lexical error. Scanning may resume after it, but no guarantees
    /// are made about what follows.
    Error(LexError),
}

/// A classified lexical unit.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Token<'src> {
    /// What the token is.
    pub kind: TokenKind,
    /// Byte range covered by the token, with its 1-based start line/column.
    pub span: Span,
    /// Inclusive 1-based position of the last byte. Not computed for
    /// [`TokenKind::EndOfInput`] and [`TokenKind::Error`].
    pub end: Option<Position>,
    /// Slice of the source for identifiers and numbers.
    pub text: Option<&'src str>,
    /// Value of a [`TokenKind::Number`].
    pub value: Option<NumericValue>,
}

impl<'src> Token<'src> {
    /// 1-based position of the first byte of the token.
    pub fn start(&self) -> Position {
        Position {
            line: self.span.line,
            column: self.span.column,
        }
    }

    /// Returns true for the terminal token.
    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::EndOfInput
    }

    /// The error carried by an error token.
    pub fn error(&self) -> Option<LexError> {
        match self.kind {
            TokenKind::Error(err) => Some(err),
            _ => None,
        }
    }
}
