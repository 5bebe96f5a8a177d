//! Source-form rendering of filter-expression nodes
//!
//! Combinators render the way they appear in filter source text:
//! `(a && b)`, `(a || b || c)`, `!(x)`. Available whenever the leaf
//! predicate type renders itself.

use std::fmt;

use crate::ast::{ExpressionNode, LogicalOp};
use crate::logical::LogicalExpressionNode;

impl<P: fmt::Display> fmt::Display for LogicalExpressionNode<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogicalExpressionNode::Not(node) => write!(f, "!({node})"),
            LogicalExpressionNode::Or(nodes) => write_joined(f, nodes, LogicalOp::Or),
            LogicalExpressionNode::And(nodes) => write_joined(f, nodes, LogicalOp::And),
        }
    }
}

impl<P: fmt::Display> fmt::Display for ExpressionNode<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExpressionNode::Logical(node) => fmt::Display::fmt(node, f),
            ExpressionNode::Predicate(predicate) => fmt::Display::fmt(predicate, f),
        }
    }
}

/// Write operands parenthesized and joined by the operator token
fn write_joined<P: fmt::Display>(
    f: &mut fmt::Formatter<'_>,
    nodes: &[ExpressionNode<P>],
    operator: LogicalOp,
) -> fmt::Result {
    f.write_str("(")?;
    for (i, node) in nodes.iter().enumerate() {
        if i > 0 {
            write!(f, " {operator} ")?;
        }
        write!(f, "{node}")?;
    }
    f.write_str(")")
}
