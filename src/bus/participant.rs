use std::error::Error;

use super::Notice;

/// Opaque failure raised by a participant's callback.
///
/// The bus passes these through unmodified: it records them in the
/// aggregated delivery report and keeps notifying the rest.
pub type ParticipantFault = Box<dyn Error + Send + Sync>;

/// An entity that can receive notices via the bus.
///
/// The name identifies the registration: subscribing two participants
/// with the same name is a `DuplicateSubscription` error.
pub trait Participant: Send {
    /// Identity of this participant within the bus.
    fn name(&self) -> &str;

    /// Called synchronously for each delivered notice, in subscription order.
    fn receive(&mut self, notice: &Notice) -> Result<(), ParticipantFault>;
}
