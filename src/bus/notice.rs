use serde::{Deserialize, Serialize};

/// An immutable value delivered to participants at publish time.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct Notice {
    /// What happened (e.g., "RatesChanged", "OrderPlaced")
    pub topic: String,
    /// Serialized payload (typically bitcode or JSON)
    #[serde(with = "payload_serde")]
    pub payload: Vec<u8>,
    /// Optional metadata (correlation IDs, sender tags, etc.)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub metadata: Vec<(String, String)>,
}

mod payload_serde {
    use base64::{engine::general_purpose::STANDARD, Engine};
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S>(payload: &Vec<u8>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        STANDARD.encode(payload).serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Vec<u8>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s: String = String::deserialize(deserializer)?;
        STANDARD.decode(&s).map_err(serde::de::Error::custom)
    }
}

impl Notice {
    /// Create a notice with the given topic and raw payload bytes.
    pub fn new(topic: impl Into<String>, payload: Vec<u8>) -> Self {
        Notice {
            topic: topic.into(),
            payload,
            metadata: Vec::new(),
        }
    }

    /// Create a notice with a bitcode-serialized payload.
    pub fn encode<T: serde::Serialize>(
        topic: impl Into<String>,
        payload: &T,
    ) -> Result<Self, bitcode::Error> {
        let bytes = bitcode::serialize(payload)?;
        Ok(Notice::new(topic, bytes))
    }

    /// Create a notice with a JSON-serialized payload.
    pub fn json<T: serde::Serialize>(
        topic: impl Into<String>,
        payload: &T,
    ) -> Result<Self, serde_json::Error> {
        let bytes = serde_json::to_vec(payload)?;
        Ok(Notice::new(topic, bytes))
    }

    /// Create a notice with a plain-text payload.
    pub fn with_text(topic: impl Into<String>, text: impl Into<String>) -> Self {
        Notice::new(topic, text.into().into_bytes())
    }

    /// Decode the payload from bitcode binary format.
    pub fn decode<T: serde::de::DeserializeOwned>(&self) -> Result<T, bitcode::Error> {
        bitcode::deserialize(&self.payload)
    }

    /// Decode the payload from JSON.
    pub fn decode_json<T: serde::de::DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_slice(&self.payload)
    }

    /// Get the payload as text (if valid UTF-8).
    pub fn text(&self) -> Option<&str> {
        std::str::from_utf8(&self.payload).ok()
    }

    /// Add a metadata pair to the notice.
    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata.push((key.into(), value.into()));
        self
    }
}
