use std::fmt;

/// Error type for snapshot capture and restore.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SnapshotError {
    /// Serializing the captured state failed.
    Encode(String),
    /// The token's bytes did not decode into the receiver's state.
    Decode(String),
}

impl fmt::Display for SnapshotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SnapshotError::Encode(msg) => write!(f, "snapshot encode failed: {}", msg),
            SnapshotError::Decode(msg) => write!(f, "snapshot decode failed: {}", msg),
        }
    }
}

impl std::error::Error for SnapshotError {}
