//! Snapshot - opaque state capture and restore
//!
//! A receiver that implements `Snapshottable` can have its state
//! captured into a `Snapshot` token and restored later. The token is
//! genuinely opaque: its bytes are private, so the caretaker holding it
//! can neither read nor forge the captured fields. Access control does
//! the enforcing, not convention.

mod error;
mod snapshottable;
mod token;

pub use error::SnapshotError;
pub use snapshottable::Snapshottable;
pub use token::Snapshot;
