//! Filter-expression error types
//!
//! Core error type for node construction failures.

use thiserror::Error;

use crate::ast::LogicalOp;

/// Construction error kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A factory operation received an empty operand sequence where at
    /// least one operand is required
    InvalidArgument,
}

/// Error raised when a filter-expression node cannot be constructed
///
/// Construction either fully succeeds or fails with this error; no
/// partially built node exists afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("filter expression error: {message}")]
pub struct FilterExprError {
    /// Error classification
    pub kind: ErrorKind,
    /// Description identifying the malformed logical operation
    pub message: String,
}

/// Result type for node construction
pub type FilterExprResult<T> = Result<T, FilterExprError>;

impl FilterExprError {
    #[must_use]
    pub fn new(kind: ErrorKind, message: String) -> Self {
        Self { kind, message }
    }

    /// Invalid construction argument
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidArgument, msg.into())
    }

    /// Empty operand sequence handed to an n-ary factory
    #[must_use]
    pub fn empty_operands(operator: LogicalOp) -> Self {
        Self::invalid_argument(format!(
            "logical {operator} requires at least one operand"
        ))
    }
}
