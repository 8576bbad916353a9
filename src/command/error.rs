use std::error::Error;
use std::fmt;

use crate::snapshot::SnapshotError;

use super::CommandFault;

/// Error type for command log operations.
#[derive(Debug)]
pub enum HistoryError {
    /// Undo was called with nothing to undo.
    EmptyHistory,
    /// The command's operation failed; no inverse record was pushed.
    CommandFailed {
        command: String,
        fault: CommandFault,
    },
    /// Capturing or restoring an inverse record failed.
    Snapshot(SnapshotError),
    /// The log's critical section was poisoned.
    LockPoisoned(&'static str),
}

impl fmt::Display for HistoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HistoryError::EmptyHistory => write!(f, "undo with empty history"),
            HistoryError::CommandFailed { command, fault } => {
                write!(f, "command {} failed: {}", command, fault)
            }
            HistoryError::Snapshot(err) => write!(f, "{}", err),
            HistoryError::LockPoisoned(operation) => {
                write!(f, "command log lock poisoned during {}", operation)
            }
        }
    }
}

impl Error for HistoryError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            HistoryError::CommandFailed { fault, .. } => Some(fault.as_ref()),
            HistoryError::Snapshot(err) => Some(err),
            _ => None,
        }
    }
}

impl From<SnapshotError> for HistoryError {
    fn from(err: SnapshotError) -> Self {
        HistoryError::Snapshot(err)
    }
}
