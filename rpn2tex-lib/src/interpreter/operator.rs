use crate::interpreter::token::TokenKind;
use std::fmt;
use std::fmt::Formatter;

/// A binary arithmetic operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl BinaryOperator {
    /// Maps an operator token kind onto its operator, if it is one.
    pub fn from_token_kind(kind: TokenKind) -> Option<BinaryOperator> {
        match kind {
            TokenKind::Plus => Some(BinaryOperator::Add),
            TokenKind::Minus => Some(BinaryOperator::Subtract),
            TokenKind::Star => Some(BinaryOperator::Multiply),
            TokenKind::Slash => Some(BinaryOperator::Divide),
            TokenKind::Number | TokenKind::Eof => None,
        }
    }

    pub fn symbol(&self) -> char {
        match self {
            BinaryOperator::Add => '+',
            BinaryOperator::Subtract => '-',
            BinaryOperator::Multiply => '*',
            BinaryOperator::Divide => '/',
        }
    }

    /// The math-mode LaTeX used to print the operator.
    pub fn latex(&self) -> &'static str {
        match self {
            BinaryOperator::Add => "+",
            BinaryOperator::Subtract => "-",
            BinaryOperator::Multiply => r"\times",
            BinaryOperator::Divide => r"\div",
        }
    }

    /// Higher binds tighter.
    pub fn precedence(&self) -> u8 {
        match self {
            BinaryOperator::Add | BinaryOperator::Subtract => 1,
            BinaryOperator::Multiply | BinaryOperator::Divide => 2,
        }
    }

    /// Whether `a op (b op c)` equals `(a op b) op c`. All four operators parse left-associatively,
    /// so only these can have a grouped right operand printed without parentheses.
    pub(crate) fn is_associative(&self) -> bool {
        matches!(self, BinaryOperator::Add | BinaryOperator::Multiply)
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parameterized_macro::parameterized;

    #[parameterized(
    operator = {
    BinaryOperator::Add,
    BinaryOperator::Subtract,
    BinaryOperator::Multiply,
    BinaryOperator::Divide,
    },
    expected_precedence = { 1, 1, 2, 2 }
    )]
    fn multiplicative_operators_bind_tighter(operator: BinaryOperator, expected_precedence: u8) {
        assert_eq!(operator.precedence(), expected_precedence);
    }

    #[test]
    fn only_subtraction_and_division_are_non_associative() {
        assert!(BinaryOperator::Add.is_associative());
        assert!(BinaryOperator::Multiply.is_associative());
        assert!(!BinaryOperator::Subtract.is_associative());
        assert!(!BinaryOperator::Divide.is_associative());
    }

    #[parameterized(
    kind = {
    TokenKind::Plus,
    TokenKind::Minus,
    TokenKind::Star,
    TokenKind::Slash,
    },
    expected_latex = {
    "+",
    "-",
    r"\times",
    r"\div",
    }
    )]
    fn operator_token_maps_to_latex_symbol(kind: TokenKind, expected_latex: &str) {
        let operator = BinaryOperator::from_token_kind(kind).unwrap();
        assert_eq!(operator.latex(), expected_latex);
    }

    #[test]
    fn non_operator_tokens_have_no_operator() {
        assert_eq!(BinaryOperator::from_token_kind(TokenKind::Number), None);
        assert_eq!(BinaryOperator::from_token_kind(TokenKind::Eof), None);
    }
}
