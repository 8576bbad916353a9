mod bus;
mod chain;
mod command;
mod dispatch;
mod snapshot;
mod state;

pub use bus::{
    BusError, DeliveryFailure, Notice, NotificationBus, Participant, ParticipantFault,
    SubscriptionHandle,
};
pub use chain::{ChainError, Handler, HandlerFault, Outcome, RequestChain};
pub use command::{Command, CommandFault, CommandLog, FnCommand, HistoryError};
pub use dispatch::{
    CompanyAccount, DispatchError, Dispatcher, Element, ElementKind, ElementSet, HtmlRenderer,
    PersonAccount, XmlRenderer,
};
pub use snapshot::{Snapshot, SnapshotError, Snapshottable};
pub use state::{NoHooks, StateHooks, StateMachine, StateSpec, Transition};

#[cfg(feature = "emitter")]
pub use bus::EmitterBridge;

// Re-export the EventEmitter from the event_emitter_rs crate
#[cfg(feature = "emitter")]
pub use event_emitter_rs::EventEmitter;
