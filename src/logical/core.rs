//! Core logical combinator node and its factory constructors
//!
//! Provides the `LogicalExpressionNode` tagged union for NOT, OR, and AND
//! combinators over filter sub-expressions, with atomic factory
//! construction and ordered operand access.

use std::slice;

use crate::ast::{ExpressionNode, LogicalOp};
use crate::error::{FilterExprError, FilterExprResult};

/// Boolean combinator over filter sub-expressions
///
/// Built by the filter compiler through the factory constructors and read
/// by the evaluator through [`operator`](Self::operator) and
/// [`operands`](Self::operands). Operand order is preserved exactly as
/// constructed; a short-circuiting evaluator relies on it.
///
/// Invariant: `Or` and `And` operand sequences are non-empty. The factory
/// constructors maintain this; trees should be built through them.
#[derive(Debug, Clone, PartialEq)]
pub enum LogicalExpressionNode<P> {
    /// Negation of a single sub-expression
    Not(Box<ExpressionNode<P>>),
    /// Disjunction over an ordered operand sequence
    Or(Vec<ExpressionNode<P>>),
    /// Conjunction over an ordered operand sequence
    And(Vec<ExpressionNode<P>>),
}

impl<P> LogicalExpressionNode<P> {
    /// Negate a sub-expression
    #[inline]
    #[must_use]
    pub fn not(node: ExpressionNode<P>) -> Self {
        LogicalExpressionNode::Not(Box::new(node))
    }

    /// Combine two sub-expressions with OR semantics
    #[inline]
    #[must_use]
    pub fn or(left: ExpressionNode<P>, right: ExpressionNode<P>) -> Self {
        LogicalExpressionNode::Or(vec![left, right])
    }

    /// Combine an ordered operand sequence with OR semantics
    ///
    /// # Errors
    ///
    /// Returns an `InvalidArgument` error if `nodes` is empty.
    pub fn or_all(nodes: Vec<ExpressionNode<P>>) -> FilterExprResult<Self> {
        if nodes.is_empty() {
            tracing::debug!(
                target: "jsonpath_filter_expr::logical",
                "rejected empty operand sequence for logical OR"
            );
            return Err(FilterExprError::empty_operands(LogicalOp::Or));
        }
        tracing::trace!(
            target: "jsonpath_filter_expr::logical",
            operand_count = nodes.len(),
            "building n-ary logical OR node"
        );
        Ok(LogicalExpressionNode::Or(nodes))
    }

    /// Combine two sub-expressions with AND semantics
    #[inline]
    #[must_use]
    pub fn and(left: ExpressionNode<P>, right: ExpressionNode<P>) -> Self {
        LogicalExpressionNode::And(vec![left, right])
    }

    /// Combine an ordered operand sequence with AND semantics
    ///
    /// # Errors
    ///
    /// Returns an `InvalidArgument` error if `nodes` is empty.
    pub fn and_all(nodes: Vec<ExpressionNode<P>>) -> FilterExprResult<Self> {
        if nodes.is_empty() {
            tracing::debug!(
                target: "jsonpath_filter_expr::logical",
                "rejected empty operand sequence for logical AND"
            );
            return Err(FilterExprError::empty_operands(LogicalOp::And));
        }
        tracing::trace!(
            target: "jsonpath_filter_expr::logical",
            operand_count = nodes.len(),
            "building n-ary logical AND node"
        );
        Ok(LogicalExpressionNode::And(nodes))
    }

    /// Operator kind of this node
    #[inline]
    #[must_use]
    pub fn operator(&self) -> LogicalOp {
        match self {
            LogicalExpressionNode::Not(_) => LogicalOp::Not,
            LogicalExpressionNode::Or(_) => LogicalOp::Or,
            LogicalExpressionNode::And(_) => LogicalOp::And,
        }
    }

    /// Ordered operands of this node
    ///
    /// A NOT node yields a single-element slice holding its child.
    #[inline]
    pub fn operands(&self) -> &[ExpressionNode<P>] {
        match self {
            LogicalExpressionNode::Not(node) => slice::from_ref(&**node),
            LogicalExpressionNode::Or(nodes) | LogicalExpressionNode::And(nodes) => nodes,
        }
    }

    /// Number of operands held by this node
    #[inline]
    #[must_use]
    pub fn operand_count(&self) -> usize {
        self.operands().len()
    }

    /// Consume this combinator into a tree node
    #[inline]
    #[must_use]
    pub fn into_node(self) -> ExpressionNode<P> {
        ExpressionNode::Logical(self)
    }
}
