use crate::interpreter::syntax::expression_tree::Node;

/// Prints an expression tree as infix LaTeX, wrapped in `$` for inline math mode.
///
/// Only the parentheses needed to keep the tree's evaluation order are emitted. Printing recurses
/// once per tree level, so extremely deep trees (hundreds of thousands of nested operations) can
/// exhaust the thread's stack.
///
/// # Arguments
///
/// * `expression`: The root of the tree to print.
///
/// returns: The LaTeX text, e.g. `$( 5 + 3 ) \times 2$`.
///
/// # Examples
///
/// ```
/// use rpn2tex::interpreter::generator::generate;
/// use rpn2tex::interpreter::lexer::tokenize;
/// use rpn2tex::interpreter::parser::parse;
///
/// let tree = parse(tokenize("5 3 + 2 *").unwrap()).unwrap();
///
/// assert_eq!(generate(&tree), r"$( 5 + 3 ) \times 2$");
/// ```
pub fn generate(expression: &Node) -> String {
    format!("${}$", build_expression(expression))
}

fn build_expression(node: &Node) -> String {
    match node {
        Node::Number { text, .. } => text.clone(),
        Node::BinaryOperation {
            operator,
            left_operand,
            right_operand,
            ..
        } => {
            let precedence = operator.precedence();
            let left = parenthesize_if(
                needs_parens(left_operand, precedence, false),
                build_expression(left_operand),
            );
            let right = parenthesize_if(
                needs_parens(right_operand, precedence, true),
                build_expression(right_operand),
            );
            format!("{} {} {}", left, operator.latex(), right)
        }
    }
}

fn parenthesize_if(predicate: bool, interior: String) -> String {
    if predicate {
        format!("( {} )", interior)
    } else {
        interior
    }
}

/// Decides whether `child`, printed as an operand of an operator with `parent_precedence`,
/// has to be wrapped in parentheses to keep its grouping.
///
/// A child operation binding looser than its parent is always grouped. One binding equally
/// tight is grouped only on the right-hand side, and only for `-` and `/`: `(5 - 3) - 2` prints
/// as `5 - 3 - 2`, while `5 - (3 - 2)` keeps its parentheses.
pub fn needs_parens(child: &Node, parent_precedence: u8, is_right_operand: bool) -> bool {
    let operator = match child.as_binary_operator() {
        Some(operator) => operator,
        None => return false,
    };

    if operator.precedence() < parent_precedence {
        return true;
    }

    operator.precedence() == parent_precedence && is_right_operand && !operator.is_associative()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpreter::lexer::tokenize;
    use crate::interpreter::operator::BinaryOperator;
    use crate::interpreter::parser::parse;
    use parameterized_macro::parameterized;
    use pretty_assertions::assert_eq;

    fn generate_source(source: &str) -> String {
        generate(&parse(tokenize(source).unwrap()).unwrap())
    }

    fn number(text: &str) -> Node {
        Node::new_number(text, 1, 1)
    }

    fn operation(operator: BinaryOperator, left_operand: Node, right_operand: Node) -> Node {
        Node::new_binary_operation(operator, left_operand, right_operand, 1, 1)
    }

    #[parameterized(
    source = {
    "5 3 +",
    "4 7 *",
    "10 2 /",
    "5 3 -",
    "5 3 + 2 *",
    "5 3 - 2 -",
    "5 3 2 - -",
    "100 10 / 5 / 2 /",
    "2 3 4 * +",
    "2 3 + 4 *",
    "1 2 + 3 4 + *",
    "10 2 / 5 *",
    "10 2 5 * /",
    "10 2 5 / /",
    "1 2 3 4 + + +",
    "1 2 3 4 * * *",
    "3.14 2 *",
    "-5 3 +",
    "007 5. -",
    },
    expected_latex = {
    "$5 + 3$",
    r"$4 \times 7$",
    r"$10 \div 2$",
    "$5 - 3$",
    r"$( 5 + 3 ) \times 2$",
    "$5 - 3 - 2$",
    "$5 - ( 3 - 2 )$",
    r"$100 \div 10 \div 5 \div 2$",
    r"$2 + 3 \times 4$",
    r"$( 2 + 3 ) \times 4$",
    r"$( 1 + 2 ) \times ( 3 + 4 )$",
    r"$10 \div 2 \times 5$",
    r"$10 \div ( 2 \times 5 )$",
    r"$10 \div ( 2 \div 5 )$",
    "$1 + 2 + 3 + 4$",
    r"$1 \times 2 \times 3 \times 4$",
    r"$3.14 \times 2$",
    "$-5 + 3$",
    "$007 - 5.$",
    }
    )]
    fn expression_generates_expected_latex(source: &str, expected_latex: &str) {
        assert_eq!(generate_source(source), expected_latex);
    }

    #[test]
    fn right_operand_grouping_follows_the_child_operator() {
        // Rule three only looks at the child: a right-hand `+` under `-` is printed flat.
        assert_eq!(generate_source("5 3 2 + -"), "$5 - 3 + 2$");
    }

    #[test]
    fn single_number_is_wrapped_in_math_mode() {
        assert_eq!(generate(&number("42")), "$42$");
    }

    #[parameterized(
    parent_precedence = { 0, 1, 2, 3, 1, 2 },
    is_right_operand = { false, true, false, true, false, true }
    )]
    fn number_never_needs_parens(parent_precedence: u8, is_right_operand: bool) {
        assert!(!needs_parens(
            &number("-1.5"),
            parent_precedence,
            is_right_operand
        ));
    }

    #[test]
    fn lower_precedence_child_needs_parens_on_either_side() {
        let sum = operation(BinaryOperator::Add, number("1"), number("2"));

        assert!(needs_parens(&sum, 2, false));
        assert!(needs_parens(&sum, 2, true));
    }

    #[test]
    fn higher_precedence_child_never_needs_parens() {
        let quotient = operation(BinaryOperator::Divide, number("1"), number("2"));

        assert!(!needs_parens(&quotient, 1, false));
        assert!(!needs_parens(&quotient, 1, true));
    }

    #[parameterized(
    operator = {
    BinaryOperator::Add,
    BinaryOperator::Subtract,
    BinaryOperator::Multiply,
    BinaryOperator::Divide,
    },
    expected_on_right = { false, true, false, true }
    )]
    fn equal_precedence_child_needs_parens_only_when_right_and_non_associative(
        operator: BinaryOperator,
        expected_on_right: bool,
    ) {
        let child = operation(operator, number("1"), number("2"));

        assert!(!needs_parens(&child, operator.precedence(), false));
        assert_eq!(
            needs_parens(&child, operator.precedence(), true),
            expected_on_right
        );
    }

    #[test]
    fn left_chain_of_any_operator_prints_without_parentheses() {
        for operator in [
            BinaryOperator::Add,
            BinaryOperator::Subtract,
            BinaryOperator::Multiply,
            BinaryOperator::Divide,
        ] {
            let chain = (2..6).fold(number("1"), |chain, value| {
                operation(operator, chain, number(&value.to_string()))
            });

            assert!(!generate(&chain).contains('('), "{:?}", operator);
        }
    }

    #[test]
    fn deep_left_chain_generates_flat_latex() {
        let source = format!("1{}", " 1 +".repeat(1_000));

        let latex = generate_source(&source);

        assert_eq!(latex, format!("$1{}$", " + 1".repeat(1_000)));
    }

    #[test]
    fn hand_built_tree_regenerates_identically() {
        let source = "5 3 2 - - 4 1 + *";
        let parsed = parse(tokenize(source).unwrap()).unwrap();
        let hand_built = operation(
            BinaryOperator::Multiply,
            operation(
                BinaryOperator::Subtract,
                number("5"),
                operation(BinaryOperator::Subtract, number("3"), number("2")),
            ),
            operation(BinaryOperator::Add, number("4"), number("1")),
        );

        assert_eq!(generate(&hand_built), generate(&parsed));
        assert_eq!(generate(&hand_built), r"$( 5 - ( 3 - 2 ) ) \times ( 4 + 1 )$");
    }
}
