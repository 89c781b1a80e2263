use std::fmt;
use std::fmt::Formatter;

/// The kind of a discrete part of an RPN expression.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Number,
    Plus,
    Minus,
    Star,
    Slash,
    Eof,
}

/// A discrete part of an RPN expression, along with where in the source it starts.
///
/// `text` holds the verbatim lexeme. Numbers keep their sign and decimal point exactly as
/// written, and the end marker has an empty `text`.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub line: usize,
    pub column: usize,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>, line: usize, column: usize) -> Token {
        Token {
            kind,
            text: text.into(),
            line,
            column,
        }
    }

    pub fn new_number(text: impl Into<String>, line: usize, column: usize) -> Token {
        Self::new(TokenKind::Number, text, line, column)
    }

    pub fn new_eof(line: usize, column: usize) -> Token {
        Self::new(TokenKind::Eof, "", line, column)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.kind {
            TokenKind::Eof => write!(f, "<eof>"),
            _ => write!(f, "{}", self.text),
        }
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}({}) @ {}:{}", self.kind, self, self.line, self.column)
    }
}
