//! Logical combinator nodes for JSONPath filter expressions
//!
//! Building blocks for the boolean layer of a JSONPath filter-expression
//! tree: NOT, OR, and AND combinators over externally compiled predicate
//! leaves. A filter compiler constructs the tree once through the factory
//! operations; an evaluator reads operator kinds and ordered operands to
//! compute a boolean result against a document context.
//!
//! # Features
//!
//! - **Immutable value nodes** safe to share across evaluator threads
//! - **Closed, pattern-matchable node variant** (combinator vs. leaf predicate)
//! - **Order-preserving operand sequences** for short-circuiting evaluators
//! - **Atomic construction** with descriptive `InvalidArgument` errors
//! - **Source-form rendering** of combinators for diagnostics
//!
//! # Examples
//!
//! ```rust
//! use jsonpath_filter_expr::{ExpressionNode, LogicalExpressionNode};
//!
//! // Leaf predicates come from the surrounding filter compiler; any type
//! // can stand in for them.
//! let a = ExpressionNode::predicate("@.price < 10");
//! let b = ExpressionNode::predicate("@.category == 'fiction'");
//! let c = ExpressionNode::predicate("@.in_stock");
//!
//! let inner = LogicalExpressionNode::and(b, c);
//! let either = LogicalExpressionNode::or(a, inner.into());
//! let node = LogicalExpressionNode::not(either.into());
//!
//! assert_eq!(
//!     node.to_string(),
//!     "!((@.price < 10 || (@.category == 'fiction' && @.in_stock)))"
//! );
//! ```

#![deny(unsafe_code)]
#![warn(clippy::all)]

pub mod ast;
pub mod error;
pub mod logical;

pub use self::{
    ast::{ExpressionNode, LogicalOp},
    error::{ErrorKind, FilterExprError, FilterExprResult},
    logical::LogicalExpressionNode,
};
