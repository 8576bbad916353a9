use std::fmt;

use super::ElementKind;

/// Error type for dispatch operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchError {
    /// The dispatcher cannot serve this element kind.
    UnsupportedKind {
        kind: ElementKind,
        dispatcher: String,
    },
}

impl fmt::Display for DispatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DispatchError::UnsupportedKind { kind, dispatcher } => {
                write!(f, "dispatcher {} does not support {:?}", dispatcher, kind)
            }
        }
    }
}

impl std::error::Error for DispatchError {}
