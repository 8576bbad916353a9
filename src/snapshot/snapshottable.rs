use serde::{de::DeserializeOwned, Serialize};

/// Opt-in trait for receivers whose state can be captured and restored.
///
/// The associated `State` type is a separate struct (e.g., `HeroState`)
/// holding everything a restore needs. Capture must be complete:
/// restoring a captured state reproduces an observably identical
/// receiver.
pub trait Snapshottable {
    type State: Serialize + DeserializeOwned;

    /// Capture the current state.
    fn capture_state(&self) -> Self::State;

    /// Replace the current state with a previously captured one.
    fn restore_state(&mut self, state: Self::State);
}
