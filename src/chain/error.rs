use std::error::Error;
use std::fmt;

use super::HandlerFault;

/// Error type for chain construction and traversal.
#[derive(Debug)]
pub enum ChainError {
    /// Two handlers with the same id were supplied at build time.
    DuplicateHandler(String),
    /// A handler accepted the request and then failed processing it.
    HandlerFailed {
        handler: String,
        fault: HandlerFault,
    },
}

impl fmt::Display for ChainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChainError::DuplicateHandler(id) => {
                write!(f, "handler {} appears twice in the chain", id)
            }
            ChainError::HandlerFailed { handler, fault } => {
                write!(f, "handler {} failed: {}", handler, fault)
            }
        }
    }
}

impl Error for ChainError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ChainError::HandlerFailed { fault, .. } => Some(fault.as_ref()),
            _ => None,
        }
    }
}
