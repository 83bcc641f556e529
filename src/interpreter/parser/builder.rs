use std::mem;

use log::debug;

use crate::{
    ast::{BinaryOp, Function, Node, Operator},
    error::ParseError,
    interpreter::parser::core::ParseResult,
};

/// A group suspended by `(`.
#[derive(Debug)]
struct Frame {
    /// The enclosing `current`, restored when the group closes.
    outer:     Option<BinaryOp>,
    /// The function whose argument list this group is, if any.
    call:      Option<Function>,
    /// Whether the call's `,` has been seen.
    separated: bool,
}

/// Incremental tree builder.
///
/// Every new operator wraps the whole left-hand accumulation so far, which is
/// what makes evaluation chain strictly left to right. Groups suspend the
/// accumulation on a stack and resume it once closed.
#[derive(Debug, Default)]
pub struct Builder {
    /// Operation being filled; its right operand is pending.
    current:   Option<BinaryOp>,
    /// Last completed subtree not yet attached to anything.
    pending:   Option<Node>,
    /// Enclosing scopes, innermost last.
    suspended: Vec<Frame>,
    /// Characters of the literal being scanned.
    literal:   String,
    /// A function name waiting for its `(`.
    awaiting:  Option<Function>,
}

impl Builder {
    /// Creates a builder with empty cursor state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a digit or decimal point to the literal being scanned.
    pub fn push_digit(&mut self, digit: char) {
        self.literal.push(digit);
    }

    /// Starts a group, saving the current operation (possibly none).
    ///
    /// A literal scanned right before `(` is discarded.
    pub fn open_group(&mut self) {
        let frame = Frame { outer:     self.current.take(),
                            call:      self.awaiting.take(),
                            separated: false, };
        debug!("open group at depth {} ({:?})", self.suspended.len() + 1, frame.call);

        self.suspended.push(frame);
        self.literal.clear();
    }

    /// Ends the innermost group; its value becomes the pending subtree.
    pub fn close_group(&mut self) -> ParseResult<()> {
        let frame = self.suspended.pop().ok_or(ParseError::UnmatchedClose)?;
        if let Some(function) = frame.call {
            if !frame.separated {
                return Err(ParseError::MissingArgument { function });
            }
        }

        let group = self.complete()?;
        debug!("close group at depth {}", self.suspended.len() + 1);

        self.pending = group;
        self.current = frame.outer;
        self.literal.clear();
        Ok(())
    }

    /// Starts a new operation whose left operand is everything so far.
    pub fn apply_operator(&mut self, op: Operator) -> ParseResult<()> {
        let left = self.complete()?;
        self.current = Some(BinaryOp::new(op, left));
        self.literal.clear();
        Ok(())
    }

    /// Records a function name; the next token must open its argument list.
    pub fn await_call(&mut self, function: Function) {
        self.awaiting = Some(function);
    }

    /// Fails if a function name is still waiting for its `(`.
    pub fn reject_awaiting_call(&self) -> ParseResult<()> {
        match self.awaiting {
            Some(function) => Err(ParseError::ExpectedArguments { function }),
            None => Ok(()),
        }
    }

    /// Handles the `,` of a call: the first argument becomes the left
    /// operand of the function's operation.
    pub fn separate_arguments(&mut self) -> ParseResult<()> {
        let function = match self.suspended.last_mut() {
            Some(Frame { call: Some(function),
                         separated,
                         .. }) if !*separated => {
                *separated = true;
                *function
            },
            _ => return Err(ParseError::UnexpectedSeparator),
        };

        let left = match self.current.take() {
            Some(current) => Some(self.fill_right(current)?),
            None => match self.pending.take() {
                Some(pending) => Some(pending),
                None => self.take_literal()?,
            },
        };

        self.current = Some(BinaryOp::new(function.operator(), left));
        self.literal.clear();
        Ok(())
    }

    /// Consumes the builder and returns the root, if any.
    pub fn finish(mut self) -> ParseResult<Option<Node>> {
        self.reject_awaiting_call()?;
        if !self.suspended.is_empty() {
            return Err(ParseError::UnclosedGroup { depth: self.suspended.len() });
        }

        let root = self.complete()?;
        if let Some(root) = &root {
            debug!("built {root}");
        }
        Ok(root)
    }

    /// Completes the accumulation: the current operation with its right
    /// operand filled, or the bare operand when no operation is open.
    fn complete(&mut self) -> ParseResult<Option<Node>> {
        match self.current.take() {
            Some(current) => self.fill_right(current).map(Some),
            None => self.take_operand(),
        }
    }

    /// Fills `current.right` from the next operand, leaving it unset if
    /// there is none.
    fn fill_right(&mut self, mut current: BinaryOp) -> ParseResult<Node> {
        if let Some(operand) = self.take_operand()? {
            current.right = Some(Box::new(operand));
        }
        Ok(current.into())
    }

    /// The literal buffer takes priority over the pending subtree.
    fn take_operand(&mut self) -> ParseResult<Option<Node>> {
        match self.take_literal()? {
            Some(literal) => Ok(Some(literal)),
            None => Ok(self.pending.take()),
        }
    }

    fn take_literal(&mut self) -> ParseResult<Option<Node>> {
        if self.literal.is_empty() {
            return Ok(None);
        }

        let literal = mem::take(&mut self.literal);
        match literal.parse() {
            Ok(value) => Ok(Some(Node::Literal(value))),
            Err(source) => Err(ParseError::MalformedLiteral { literal, source }),
        }
    }
}
