//! Error types
//!
//! [`ContextError`] covers programmer errors (bad arguments, writing a
//! disabled flags register) and is raised before any work is done.
//! [`TrapError`] is the data-dependent failure raised when an operation
//! signals a condition the context traps.

use std::num::ParseIntError;

use num_bigint::ParseBigIntError;
use thiserror::Error;

use crate::{Context, Flags};

/// Failure constructing or using a [`Context`]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContextError {
    /// Malformed or out-of-domain argument
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Operation not allowed in the current state of the context
    #[error("illegal state: {0}")]
    IllegalState(String),
}

/// A trapped condition
///
/// Raised after the context's flags (if enabled) have been updated.
/// `result` holds the value the operation would have returned had the
/// condition not been trapped, so callers can recover by using it.
#[derive(Debug, Clone, Error)]
#[error("decimal operation trapped condition {flag:?}")]
pub struct TrapError<D> {
    /// The trapped condition that caused the failure (a single flag)
    pub flag: Flags,
    /// Every condition raised by the operation, trapped or not
    pub errors: Flags,
    /// Snapshot of the context after flag bookkeeping
    pub context: Context,
    /// The would-be result
    pub result: D,
}

impl<D> TrapError<D> {
    /// Consume the error, returning the would-be result
    pub fn into_result(self) -> D {
        self.result
    }
}

/// Failure parsing a decimal value from a string
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseDecimalError {
    #[error("failed to parse empty string")]
    Empty,

    #[error(transparent)]
    ParseInt(#[from] ParseIntError),

    #[error(transparent)]
    ParseBigInt(#[from] ParseBigIntError),

    #[error("{0}")]
    Other(String),
}
