pub mod error;
pub mod generator;
pub mod lexer;
pub mod operator;
pub mod parser;
pub mod syntax;
pub mod token;

use crate::interpreter::error::ConversionError;
use crate::interpreter::syntax::expression_tree::Node;
use log::{debug, trace};

/// Converts an RPN expression into infix LaTeX for math mode.
///
/// # Arguments
///
/// * `source`: A text expression in postfix (RPN) format, e.g. `5 3 + 2 *`.
///
/// returns: The LaTeX text, or the first lexing or parsing error. No partial output is produced.
///
/// # Examples
///
/// ```
/// use rpn2tex::interpreter::convert;
///
/// let latex = convert("5 3 + 2 *").unwrap();
/// assert_eq!(latex, r"$( 5 + 3 ) \times 2$");
///
/// let error = convert("2 3 ^").unwrap_err();
/// assert_eq!((error.line(), error.column()), (1, 5));
/// ```
pub fn convert(source: &str) -> Result<String, ConversionError> {
    let expression_tree = convert_to_tree(source)?;
    let latex = generator::generate(&expression_tree);
    debug!("generated {}", latex);
    Ok(latex)
}

/// Converts the given input string into an equivalent expression tree.
///
/// # Arguments
///
/// * `source`: The text-representation of the postfix expression.
///
/// returns: The equivalent expression tree.
///
/// # Examples
///
/// ```
/// use rpn2tex::interpreter::convert_to_tree;
///
/// let tree = convert_to_tree("4 7 *").unwrap();
/// assert_eq!(tree.size(), 3);
/// ```
pub fn convert_to_tree(source: &str) -> Result<Node, ConversionError> {
    let tokens = lexer::tokenize(source)?;
    trace!("tokens: {:?}", tokens);
    let expression_tree = parser::parse(tokens)?;
    debug!("parsed a tree of {} nodes", expression_tree.size());
    Ok(expression_tree)
}

#[cfg(test)]
mod interpreter_tests {
    use super::*;
    use crate::interpreter::error::{LexError, ParseError};
    use crate::interpreter::operator::BinaryOperator;
    use parameterized_macro::parameterized;
    use pretty_assertions::assert_eq;

    #[parameterized(
    expression = {
    "5 3 +",
    "4 7 *",
    "5 3 + 2 *",
    "5 3 - 2 -",
    "5 3 2 - -",
    "100 10 / 5 / 2 /",
    "1.5 0.5 *\n2 +",
    },
    expected_latex = {
    "$5 + 3$",
    r"$4 \times 7$",
    r"$( 5 + 3 ) \times 2$",
    "$5 - 3 - 2$",
    "$5 - ( 3 - 2 )$",
    r"$100 \div 10 \div 5 \div 2$",
    r"$1.5 \times 0.5 + 2$",
    }
    )]
    fn convert_expression_returns_correct_latex(expression: &str, expected_latex: &str) {
        assert_eq!(convert(expression).unwrap(), expected_latex);
    }

    #[test]
    fn empty_input_is_an_empty_expression() {
        assert!(matches!(
            convert(""),
            Err(ConversionError::Parse(ParseError::EmptyExpression { .. }))
        ));
    }

    #[test]
    fn missing_operator_leaves_operands() {
        assert!(matches!(
            convert("5 3"),
            Err(ConversionError::Parse(ParseError::LeftoverOperands { count: 2, .. }))
        ));
    }

    #[test]
    fn missing_operand_is_reported_with_operator() {
        assert!(matches!(
            convert("5 +"),
            Err(ConversionError::Parse(ParseError::InsufficientOperands {
                operator: BinaryOperator::Add,
                ..
            }))
        ));
    }

    #[test]
    fn unknown_symbol_is_a_lex_error() {
        assert_eq!(
            convert("2 3 ^").unwrap_err(),
            ConversionError::Lex(LexError::UnexpectedChar {
                character: '^',
                line: 1,
                column: 5,
            })
        );
    }

    #[test]
    fn lex_errors_win_over_parse_errors() {
        // `5 3` alone would leave two operands on the stack.
        let error = convert("5 3 @").unwrap_err();

        assert_eq!(error.to_string(), "Unexpected character '@'");
        assert_eq!((error.line(), error.column()), (1, 5));
    }

    #[test]
    fn adjacent_minus_produces_negative_operand() {
        // `5-3` lexes as `5` and `-3`, which is two values and no operator.
        assert!(matches!(
            convert("5-3"),
            Err(ConversionError::Parse(ParseError::LeftoverOperands { count: 2, .. }))
        ));
    }

    #[test]
    fn conversion_is_reentrant() {
        let handles: Vec<_> = (0..4)
            .map(|_| std::thread::spawn(|| convert("5 3 2 - -")))
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap().unwrap(), "$5 - ( 3 - 2 )$");
        }
    }
}
