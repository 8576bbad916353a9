use std::fmt;
use std::marker::PhantomData;

use serde::{Deserialize, Serialize};

use super::{SnapshotError, Snapshottable};

/// An opaque capture of a receiver's state.
///
/// The payload is bitcode-encoded and private; the only operation a
/// holder can perform is `restore` into a receiver of the same type
/// (the phantom tag prevents cross-receiver restores at compile time).
/// Tokens serialize (bytes as base64 under JSON) so a caretaker can
/// park them externally, still unreadable without the receiver type.
#[derive(Serialize, Deserialize)]
#[serde(bound(serialize = "", deserialize = ""))]
pub struct Snapshot<R> {
    #[serde(with = "data_serde")]
    data: Vec<u8>,
    #[serde(skip)]
    _receiver: PhantomData<fn() -> R>,
}

mod data_serde {
    use base64::{engine::general_purpose::STANDARD, Engine};
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S>(data: &Vec<u8>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        STANDARD.encode(data).serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Vec<u8>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s: String = String::deserialize(deserializer)?;
        STANDARD.decode(&s).map_err(serde::de::Error::custom)
    }
}

impl<R> PartialEq for Snapshot<R> {
    fn eq(&self, other: &Self) -> bool {
        self.data == other.data
    }
}

impl<R> Eq for Snapshot<R> {}

impl<R> Clone for Snapshot<R> {
    fn clone(&self) -> Self {
        Snapshot {
            data: self.data.clone(),
            _receiver: PhantomData,
        }
    }
}

impl<R> fmt::Debug for Snapshot<R> {
    // Contents stay hidden; only the size is observable.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Snapshot")
            .field("bytes", &self.data.len())
            .finish()
    }
}

impl<R: Snapshottable> Snapshot<R> {
    /// Capture the receiver's current state into an opaque token.
    pub fn capture(receiver: &R) -> Result<Self, SnapshotError> {
        let data = bitcode::serialize(&receiver.capture_state())
            .map_err(|e| SnapshotError::Encode(e.to_string()))?;
        Ok(Snapshot {
            data,
            _receiver: PhantomData,
        })
    }

    /// Restore the receiver to the captured state.
    pub fn restore(&self, receiver: &mut R) -> Result<(), SnapshotError> {
        let state = bitcode::deserialize(&self.data)
            .map_err(|e| SnapshotError::Decode(e.to_string()))?;
        receiver.restore_state(state);
        Ok(())
    }
}
