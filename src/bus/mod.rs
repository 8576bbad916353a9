//! Notification Bus - publish/subscribe with optional role routing
//!
//! This module provides the registry that lets decoupled participants
//! exchange notices without holding references to each other.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                     NotificationBus                          │
//! │  - subscribe() / unsubscribe() by handle                    │
//! │  - publish() broadcasts in subscription order               │
//! │  - route() delivers only to a named role                    │
//! └─────────────────────────────────────────────────────────────┘
//!                            │
//!                            ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    Participant trait                         │
//! │  name() identifies the registration                         │
//! │  receive(&Notice) runs synchronously in publish order       │
//! └─────────────────────────────────────────────────────────────┘
//!          │                  │                     │
//!          ▼                  ▼                     ▼
//! ┌─────────────┐    ┌─────────────┐    ┌─────────────────────┐
//! │ Plain impl  │    │EmitterBridge│    │  Wrapped/adapted    │
//! │ (caller's)  │    │ ("emitter") │    │   participants      │
//! └─────────────┘    └─────────────┘    └─────────────────────┘
//! ```
//!
//! The bus holds only weak registrations; it is never the reason a
//! participant stays alive. Delivery takes a read-snapshot of the
//! registry, so subscribing or unsubscribing from inside a callback
//! cannot corrupt an in-flight publish.
//!
//! ## Usage
//!
//! ```ignore
//! let bus = NotificationBus::new();
//! let broker = Arc::new(Mutex::new(Broker::default()));
//! let handle = bus.subscribe(&broker)?;
//!
//! bus.publish(&Notice::encode("RatesChanged", &rates)?)?;
//!
//! bus.unsubscribe(handle)?;
//! ```

mod bus;
mod error;
mod notice;
mod participant;

#[cfg(feature = "emitter")]
mod emitter_bridge;

pub use bus::{NotificationBus, SubscriptionHandle};
pub use error::{BusError, DeliveryFailure};
pub use notice::Notice;
pub use participant::{Participant, ParticipantFault};

#[cfg(feature = "emitter")]
pub use emitter_bridge::EmitterBridge;
