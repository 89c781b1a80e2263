use crate::interpreter::operator::BinaryOperator;
use crate::interpreter::syntax::syntax_visitor::{walk_binary_operation, SyntaxVisitor};
use ptree::{write_tree, TreeBuilder};
use std::fmt;
use std::fmt::{Debug, Display, Formatter};
use std::hash::{Hash, Hasher};

/// A node of an arithmetic expression tree. Every node owns its children and remembers the
/// source position of the token it was built from.
#[derive(Clone, Eq)]
pub enum Node {
    // Terminal symbols (leaves)
    Number {
        text: String,
        line: usize,
        column: usize,
    },
    // Non-terminal symbols (non-leaves)
    BinaryOperation {
        operator: BinaryOperator,
        left_operand: Box<Node>,
        right_operand: Box<Node>,
        line: usize,
        column: usize,
    },
}

impl Node {
    pub fn new_number(text: impl Into<String>, line: usize, column: usize) -> Node {
        Node::Number {
            text: text.into(),
            line,
            column,
        }
    }

    pub fn new_binary_operation(
        operator: BinaryOperator,
        left_operand: Node,
        right_operand: Node,
        line: usize,
        column: usize,
    ) -> Node {
        Node::BinaryOperation {
            operator,
            left_operand: Box::new(left_operand),
            right_operand: Box::new(right_operand),
            line,
            column,
        }
    }

    pub fn as_binary_operator(&self) -> Option<BinaryOperator> {
        match self {
            Node::Number { .. } => None,
            Node::BinaryOperation { operator, .. } => Some(*operator),
        }
    }

    pub fn line(&self) -> usize {
        match self {
            Node::Number { line, .. } | Node::BinaryOperation { line, .. } => *line,
        }
    }

    pub fn column(&self) -> usize {
        match self {
            Node::Number { column, .. } | Node::BinaryOperation { column, .. } => *column,
        }
    }

    /// Number of nodes in the tree rooted at this node.
    pub fn size(&self) -> usize {
        let mut visitor = CountingVisitor { count: 0 };
        self.accept(&mut visitor);
        visitor.count
    }

    /// Calls the correct visitor method for the node variant on the given visitor.
    pub(crate) fn accept(&self, visitor: &mut impl SyntaxVisitor) {
        match self {
            Node::Number { text, .. } => visitor.visit_number(text),
            Node::BinaryOperation {
                operator,
                left_operand,
                right_operand,
                ..
            } => visitor.visit_binary_operation(operator, left_operand, right_operand),
        }
    }

    fn format_tree(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut visitor = TreeBuilderVisitor {
            builder: TreeBuilder::new("expression".into()),
        };
        self.accept(&mut visitor);

        let mut buffer: Vec<u8> = Vec::new();
        match write_tree(&visitor.builder.build(), &mut buffer) {
            Ok(_) => {}
            Err(_) => return Err(fmt::Error),
        }
        let text = match std::str::from_utf8(&buffer) {
            Ok(text) => text,
            Err(_) => return Err(fmt::Error),
        };
        f.write_str(text)
    }
}

impl Display for Node {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.format_tree(f)
    }
}

impl Debug for Node {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Node::Number { text, .. } => write!(f, "{:?}", text),
            Node::BinaryOperation {
                operator,
                left_operand,
                right_operand,
                ..
            } => write!(f, "{:?}({:?}, {:?})", operator, left_operand, right_operand),
        }
    }
}

// Source positions take no part in hashing or equality.
impl Hash for Node {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self {
            Node::Number { text, .. } => text.hash(state),
            Node::BinaryOperation {
                operator,
                left_operand,
                right_operand,
                ..
            } => {
                operator.hash(state);
                left_operand.hash(state);
                right_operand.hash(state);
            }
        }
    }
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        node_eq(self, other)
    }
}

fn node_eq(node1: &Node, node2: &Node) -> bool {
    match (node1, node2) {
        (Node::Number { text: text1, .. }, Node::Number { text: text2, .. }) => text1 == text2,
        (
            Node::BinaryOperation {
                operator: operator1,
                left_operand: left_operand1,
                right_operand: right_operand1,
                ..
            },
            Node::BinaryOperation {
                operator: operator2,
                left_operand: left_operand2,
                right_operand: right_operand2,
                ..
            },
        ) => {
            if operator1 != operator2 {
                return false;
            }

            node_eq(left_operand1, left_operand2) && node_eq(right_operand1, right_operand2)
        }
        _ => false, // node1 and node2 are different variants
    }
}

struct CountingVisitor {
    count: usize,
}

impl SyntaxVisitor for CountingVisitor {
    fn visit_number(&mut self, _text: &str) {
        self.count += 1;
    }
    fn visit_binary_operation(
        &mut self,
        _operator: &BinaryOperator,
        left_operand: &Node,
        right_operand: &Node,
    ) {
        self.count += 1;
        walk_binary_operation(self, left_operand, right_operand);
    }
}

struct TreeBuilderVisitor {
    builder: TreeBuilder,
}

impl SyntaxVisitor for TreeBuilderVisitor {
    fn visit_number(&mut self, text: &str) {
        self.builder.add_empty_child(text.to_string());
    }
    fn visit_binary_operation(
        &mut self,
        operator: &BinaryOperator,
        left_operand: &Node,
        right_operand: &Node,
    ) {
        self.builder.begin_child(format!("{}", operator));
        walk_binary_operation(self, left_operand, right_operand);
        self.builder.end_child();
    }
}
