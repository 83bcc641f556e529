use std::fmt;

/// An expression tree node.
///
/// A tree is built in one pass by the parser and evaluated once by the
/// evaluator. Operand slots of a [`BinaryOp`] may stay unset while the tree is
/// under construction; a finished tree is only guaranteed to be complete when
/// the input was syntactically complete.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// A decimal literal such as `3` or `2.5`.
    Literal(f64),
    /// An operation combining two operands.
    Binary(BinaryOp),
}

impl Node {
    /// Creates a literal leaf.
    #[must_use]
    pub const fn literal(value: f64) -> Self {
        Self::Literal(value)
    }

    /// Creates a binary node with both operands set.
    ///
    /// ## Example
    /// ```
    /// use chaincalc::ast::{Node, Operator};
    ///
    /// let node = Node::binary(Operator::Add, Node::literal(1.0), Node::literal(2.0));
    /// assert!(node.is_complete());
    /// assert_eq!(node.to_string(), "(1 + 2)");
    /// ```
    #[must_use]
    pub fn binary(op: Operator, left: Self, right: Self) -> Self {
        Self::Binary(BinaryOp { op,
                                left: Some(Box::new(left)),
                                right: Some(Box::new(right)) })
    }

    /// Returns `true` when every operation in the tree has both operands.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        let mut nodes = vec![self];

        while let Some(node) = nodes.pop() {
            if let Self::Binary(op) = node {
                match (op.left.as_deref(), op.right.as_deref()) {
                    (Some(left), Some(right)) => nodes.extend([left, right]),
                    _ => return false,
                }
            }
        }
        true
    }
}

impl From<BinaryOp> for Node {
    fn from(op: BinaryOp) -> Self {
        Self::Binary(op)
    }
}

/// A binary operation with exclusively owned operand slots.
#[derive(Debug, Clone, PartialEq)]
pub struct BinaryOp {
    /// The operator tag.
    pub op:    Operator,
    /// Left operand, unset until a value is available.
    pub left:  Option<Box<Node>>,
    /// Right operand, unset until a value is available.
    pub right: Option<Box<Node>>,
}

impl BinaryOp {
    /// Starts a new operation with an optional left operand and no right
    /// operand.
    #[must_use]
    pub fn new(op: Operator, left: Option<Node>) -> Self {
        Self { op,
               left: left.map(Box::new),
               right: None }
    }

    /// Returns the operand on the given side, if set.
    #[must_use]
    pub fn operand(&self, side: Operand) -> Option<&Node> {
        match side {
            Operand::Left => self.left.as_deref(),
            Operand::Right => self.right.as_deref(),
        }
    }
}

/// Represents a binary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Operator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Subtract,
    /// Division (`/`)
    Divide,
    /// Multiplication (`*`)
    Multiply,
    /// Exponentiation (`pow(a, b)`)
    Power,
}

/// Which operand slot of a [`BinaryOp`].
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Operand {
    /// The left-hand side.
    Left,
    /// The right-hand side.
    Right,
}

/// A named function recognised by the extended dialect.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Function {
    /// `pow(base, exponent)`
    Pow,
}

impl Function {
    /// Looks up a function by its exact name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "pow" => Some(Self::Pow),
            _ => None,
        }
    }

    /// The operator a call to this function builds.
    #[must_use]
    pub const fn operator(self) -> Operator {
        match self {
            Self::Pow => Operator::Power,
        }
    }
}

/// Chains of operators nest as deep as the input is long, so trees are torn
/// down with a work list instead of recursive drops.
impl Drop for BinaryOp {
    fn drop(&mut self) {
        let mut detached: Vec<Box<Node>> =
            self.left.take().into_iter().chain(self.right.take()).collect();

        while let Some(mut node) = detached.pop() {
            if let Node::Binary(op) = node.as_mut() {
                detached.extend(op.left.take());
                detached.extend(op.right.take());
            }
        }
    }
}

/// A piece of a rendered tree.
enum Piece<'a> {
    Slot(Option<&'a Node>),
    Operation(&'a BinaryOp),
    Text(&'static str),
}

/// Renders a tree fully parenthesised without recursing.
fn write_tree(f: &mut fmt::Formatter<'_>, root: Piece<'_>) -> fmt::Result {
    let mut pieces = vec![root];

    while let Some(piece) = pieces.pop() {
        match piece {
            Piece::Text(text) => f.write_str(text)?,
            Piece::Slot(None) => f.write_str("_")?,
            Piece::Slot(Some(Node::Literal(value))) => write!(f, "{value}")?,
            Piece::Slot(Some(Node::Binary(op))) => pieces.push(Piece::Operation(op)),
            Piece::Operation(op) => {
                let (open, between) = match op.op {
                    Operator::Power => ("pow(", ", "),
                    other => ("(", other.infix()),
                };
                pieces.extend([Piece::Text(")"),
                               Piece::Slot(op.operand(Operand::Right)),
                               Piece::Text(between),
                               Piece::Slot(op.operand(Operand::Left)),
                               Piece::Text(open)]);
            },
        }
    }
    Ok(())
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_tree(f, Piece::Slot(Some(self)))
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_tree(f, Piece::Operation(self))
    }
}

impl Operator {
    /// The operator with surrounding spaces, as rendered between operands.
    const fn infix(self) -> &'static str {
        match self {
            Self::Add => " + ",
            Self::Subtract => " - ",
            Self::Divide => " / ",
            Self::Multiply => " * ",
            Self::Power => ", ",
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let operator = match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Divide => "/",
            Self::Multiply => "*",
            Self::Power => "pow",
        };
        write!(f, "{operator}")
    }
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left => write!(f, "left"),
            Self::Right => write!(f, "right"),
        }
    }
}

impl fmt::Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pow => write!(f, "pow"),
        }
    }
}
