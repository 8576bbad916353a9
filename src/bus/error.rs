use std::error::Error;
use std::fmt;

use super::ParticipantFault;

/// One participant's failed delivery within a publish or route call.
#[derive(Debug)]
pub struct DeliveryFailure {
    /// Name the participant was registered under.
    pub participant: String,
    /// The callback's failure, passed through unmodified.
    pub fault: ParticipantFault,
}

impl fmt::Display for DeliveryFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.participant, self.fault)
    }
}

/// Error type for bus operations.
#[derive(Debug)]
pub enum BusError {
    /// A participant with this name is already registered.
    DuplicateSubscription(String),
    /// The handle does not refer to a live registration.
    UnknownSubscription,
    /// No participant is registered under the target role (non-fatal).
    UnroutableMessage { role: String },
    /// One or more participants failed; the rest were still notified.
    Delivery {
        delivered: usize,
        failures: Vec<DeliveryFailure>,
    },
    /// An internal lock was poisoned.
    LockPoisoned(&'static str),
}

impl fmt::Display for BusError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BusError::DuplicateSubscription(name) => {
                write!(f, "participant {} is already subscribed", name)
            }
            BusError::UnknownSubscription => write!(f, "subscription handle is not registered"),
            BusError::UnroutableMessage { role } => {
                write!(f, "no participant registered under role {}", role)
            }
            BusError::Delivery {
                delivered,
                failures,
            } => {
                write!(
                    f,
                    "delivered to {} participant(s), {} failed:",
                    delivered,
                    failures.len()
                )?;
                for failure in failures {
                    write!(f, " [{}]", failure)?;
                }
                Ok(())
            }
            BusError::LockPoisoned(what) => write!(f, "bus lock poisoned during {}", what),
        }
    }
}

impl Error for BusError {}
