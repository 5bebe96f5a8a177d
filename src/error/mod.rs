//! Filter-expression construction error handling
//!
//! Error types raised by the node factory constructors when handed
//! malformed arguments. Construction errors surface immediately to the
//! caller; there is no recovery or retry at this level.

mod types;

pub use self::types::{ErrorKind, FilterExprError, FilterExprResult};
