use crate::{
    ast::{BinaryOp, Node, Operand, Operator},
    error::RuntimeError,
};

/// Result type used by the evaluator.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// The single capability every tree node shares.
///
/// Evaluation takes `&self`, so a tree can be evaluated repeatedly with the
/// same outcome.
pub trait Evaluate {
    /// Computes the numeric value of `self`.
    ///
    /// # Errors
    /// `IncompleteExpression` when an operation is missing an operand.
    fn evaluate(&self) -> EvalResult<f64>;
}

impl Evaluate for Node {
    /// # Example
    /// ```
    /// use chaincalc::{
    ///     ast::{Node, Operator},
    ///     interpreter::evaluator::core::Evaluate,
    /// };
    ///
    /// let tree = Node::binary(Operator::Power, Node::literal(2.0), Node::literal(10.0));
    /// assert_eq!(tree.evaluate().unwrap(), 1024.0);
    /// ```
    fn evaluate(&self) -> EvalResult<f64> {
        match self {
            Self::Literal(value) => Ok(*value),
            Self::Binary(op) => op.evaluate(),
        }
    }
}

/// Pending work while walking a tree.
enum Task<'a> {
    /// Evaluate a node and push its value.
    Visit(&'a Node),
    /// Pop two values and push their combination.
    Combine(Operator),
}

impl Evaluate for BinaryOp {
    /// Walks the tree with an explicit work stack, since chained operators
    /// build trees as deep as the expression is long.
    ///
    /// Both operand slots of an operation are checked before either side is
    /// evaluated, and left subtrees are evaluated before right ones.
    fn evaluate(&self) -> EvalResult<f64> {
        let mut tasks = Vec::new();
        let mut values = Vec::new();
        self.schedule(&mut tasks)?;

        while let Some(task) = tasks.pop() {
            match task {
                Task::Visit(Node::Literal(value)) => values.push(*value),
                Task::Visit(Node::Binary(op)) => op.schedule(&mut tasks)?,
                Task::Combine(op) => {
                    let (Some(right), Some(left)) = (values.pop(), values.pop()) else {
                        unreachable!("every combine follows the values of both operands");
                    };
                    values.push(op.apply(left, right));
                },
            }
        }

        Ok(values.pop().unwrap_or_else(|| unreachable!("a complete walk leaves one value")))
    }
}

impl BinaryOp {
    /// Queues both operands and their combination.
    fn schedule<'a>(&'a self, tasks: &mut Vec<Task<'a>>) -> EvalResult<()> {
        let left = self.require(Operand::Left)?;
        let right = self.require(Operand::Right)?;

        tasks.push(Task::Combine(self.op));
        tasks.push(Task::Visit(right));
        tasks.push(Task::Visit(left));
        Ok(())
    }

    fn require(&self, operand: Operand) -> EvalResult<&Node> {
        self.operand(operand)
            .ok_or(RuntimeError::IncompleteExpression { operator: self.op,
                                                         operand })
    }
}
