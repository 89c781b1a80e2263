use crate::interpreter::error::ParseError;
use crate::interpreter::operator::BinaryOperator;
use crate::interpreter::syntax::expression_tree::Node;
use crate::interpreter::token::{Token, TokenKind};

/// Builds an expression tree from tokens ordered in postfix notation.
///
/// # Arguments
///
/// * `tokens`: The output of the lexer. Scanning stops at the first end-of-input token.
///
/// returns: The root of the generated expression tree.
///
/// # Examples
///
/// ```
/// use rpn2tex::interpreter::lexer::tokenize;
/// use rpn2tex::interpreter::parser::parse;
///
/// let tokens = tokenize("10 2 /").unwrap();
/// let tree = parse(tokens).unwrap();
///
/// assert_eq!(format!("{:?}", tree), r#"Divide("10", "2")"#);
/// ```
pub fn parse(mut tokens: Vec<Token>) -> Result<Node, ParseError> {
    let (first_line, first_column) = tokens
        .first()
        .map_or((1, 1), |token| (token.line, token.column));
    let (mut end_line, mut end_column) = (first_line, first_column);

    tokens.reverse();
    let mut operands: Vec<Node> = Vec::new();

    while let Some(token) = tokens.pop() {
        if token.kind == TokenKind::Eof {
            (end_line, end_column) = (token.line, token.column);
            break;
        }

        match BinaryOperator::from_token_kind(token.kind) {
            None => operands.push(Node::new_number(token.text, token.line, token.column)),
            Some(operator) => {
                let node = reduce(&mut operands, operator, &token)?;
                operands.push(node);
            }
        }
    }

    match operands.len() {
        0 => Err(ParseError::EmptyExpression {
            line: end_line,
            column: end_column,
        }),
        1 => Ok(operands.remove(0)),
        count => Err(ParseError::LeftoverOperands {
            count,
            line: first_line,
            column: first_column,
        }),
    }
}

/// Pops the two topmost operands and combines them under `operator`.
fn reduce(
    operands: &mut Vec<Node>,
    operator: BinaryOperator,
    token: &Token,
) -> Result<Node, ParseError> {
    let available = operands.len();
    let insufficient = || ParseError::InsufficientOperands {
        operator,
        available,
        line: token.line,
        column: token.column,
    };

    // The right operand was pushed last, so it comes off the stack first.
    let right_operand = operands.pop().ok_or_else(insufficient)?;
    let left_operand = operands.pop().ok_or_else(insufficient)?;

    Ok(Node::new_binary_operation(
        operator,
        left_operand,
        right_operand,
        token.line,
        token.column,
    ))
}
