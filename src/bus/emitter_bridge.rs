use event_emitter_rs::EventEmitter;

use super::{Notice, Participant, ParticipantFault};

/// A participant that forwards notices into an `EventEmitter`.
///
/// This lets closure-style listeners observe bus traffic without
/// implementing `Participant` themselves: each delivered notice is
/// emitted under its topic with the payload text as the value.
///
/// # Example
///
/// ```ignore
/// let bridge = Arc::new(Mutex::new(EmitterBridge::new("bridge")));
/// bridge.lock().unwrap().on("RatesChanged", |data| {
///     println!("rates: {}", data);
/// });
/// bus.subscribe(&bridge)?;
/// ```
pub struct EmitterBridge {
    name: String,
    emitter: EventEmitter,
}

impl EmitterBridge {
    pub fn new(name: impl Into<String>) -> Self {
        EmitterBridge {
            name: name.into(),
            emitter: EventEmitter::new(),
        }
    }

    /// Register a listener for a topic.
    pub fn on<F>(&mut self, topic: &str, listener: F)
    where
        F: Fn(String) + Send + Sync + 'static,
    {
        self.emitter.on(topic, listener);
    }

    /// Access the underlying emitter.
    pub fn emitter_mut(&mut self) -> &mut EventEmitter {
        &mut self.emitter
    }
}

impl Participant for EmitterBridge {
    fn name(&self) -> &str {
        &self.name
    }

    fn receive(&mut self, notice: &Notice) -> Result<(), ParticipantFault> {
        // Non-UTF-8 payloads are forwarded lossily; listeners that need
        // the raw bytes should implement Participant directly.
        let text = String::from_utf8_lossy(&notice.payload).into_owned();
        self.emitter.emit(&notice.topic, text);
        Ok(())
    }
}
