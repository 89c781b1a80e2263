use crate::interpreter::operator::BinaryOperator;
use thiserror::Error;

/// Raised when the lexer meets a character that is not part of the RPN alphabet.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    #[error("Unexpected character '{character}'")]
    UnexpectedChar {
        character: char,
        line: usize,
        column: usize,
    },
}

impl LexError {
    pub fn line(&self) -> usize {
        match self {
            LexError::UnexpectedChar { line, .. } => *line,
        }
    }

    pub fn column(&self) -> usize {
        match self {
            LexError::UnexpectedChar { column, .. } => *column,
        }
    }
}

/// Raised when a token sequence does not form exactly one RPN expression.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("Empty expression")]
    EmptyExpression { line: usize, column: usize },
    #[error("Operator '{operator}' requires two operands, but only {available} available")]
    InsufficientOperands {
        operator: BinaryOperator,
        available: usize,
        line: usize,
        column: usize,
    },
    #[error("Invalid RPN expression: {count} values remain on stack (missing operators?)")]
    LeftoverOperands {
        count: usize,
        line: usize,
        column: usize,
    },
}

impl ParseError {
    pub fn line(&self) -> usize {
        match self {
            ParseError::EmptyExpression { line, .. }
            | ParseError::InsufficientOperands { line, .. }
            | ParseError::LeftoverOperands { line, .. } => *line,
        }
    }

    pub fn column(&self) -> usize {
        match self {
            ParseError::EmptyExpression { column, .. }
            | ParseError::InsufficientOperands { column, .. }
            | ParseError::LeftoverOperands { column, .. } => *column,
        }
    }
}

/// Any failure of the full source-to-LaTeX conversion.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConversionError {
    #[error(transparent)]
    Lex(#[from] LexError),
    #[error(transparent)]
    Parse(#[from] ParseError),
}

impl ConversionError {
    pub fn line(&self) -> usize {
        match self {
            ConversionError::Lex(error) => error.line(),
            ConversionError::Parse(error) => error.line(),
        }
    }

    pub fn column(&self) -> usize {
        match self {
            ConversionError::Lex(error) => error.column(),
            ConversionError::Parse(error) => error.column(),
        }
    }
}
