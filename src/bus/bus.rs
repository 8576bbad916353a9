use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, RwLock, Weak};

use super::{BusError, DeliveryFailure, Notice, Participant};

/// Opaque token identifying one registration on the bus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionHandle(u64);

struct Registration {
    handle: SubscriptionHandle,
    name: String,
    role: Option<String>,
    participant: Weak<Mutex<dyn Participant>>,
}

/// Publish/subscribe registry with optional role routing.
///
/// Participants are held as weak references: the caller keeps the
/// owning `Arc` and must explicitly unsubscribe when done. Delivery
/// walks a read-snapshot of the registry in subscription order, so
/// registry mutation during a publish cannot corrupt the walk.
pub struct NotificationBus {
    registry: RwLock<Vec<Registration>>,
    next_handle: AtomicU64,
}

impl Default for NotificationBus {
    fn default() -> Self {
        Self::new()
    }
}

impl NotificationBus {
    pub fn new() -> Self {
        NotificationBus {
            registry: RwLock::new(Vec::new()),
            next_handle: AtomicU64::new(1),
        }
    }

    /// Register a participant for broadcast delivery.
    ///
    /// Fails with `DuplicateSubscription` if a participant with the same
    /// name is already registered; re-subscribing is not idempotent.
    pub fn subscribe<P>(&self, participant: &Arc<Mutex<P>>) -> Result<SubscriptionHandle, BusError>
    where
        P: Participant + 'static,
    {
        self.register(None, participant)
    }

    /// Register a participant under a named role for `route` delivery.
    ///
    /// Role-registered participants also receive broadcasts.
    pub fn subscribe_as<P>(
        &self,
        role: impl Into<String>,
        participant: &Arc<Mutex<P>>,
    ) -> Result<SubscriptionHandle, BusError>
    where
        P: Participant + 'static,
    {
        self.register(Some(role.into()), participant)
    }

    /// Remove a registration. `UnknownSubscription` if the handle is not live.
    pub fn unsubscribe(&self, handle: SubscriptionHandle) -> Result<(), BusError> {
        let mut registry = self
            .registry
            .write()
            .map_err(|_| BusError::LockPoisoned("unsubscribe"))?;
        match registry.iter().position(|r| r.handle == handle) {
            Some(index) => {
                registry.remove(index);
                Ok(())
            }
            None => Err(BusError::UnknownSubscription),
        }
    }

    /// Deliver a notice to every registered participant, in subscription
    /// order, synchronously in the calling context.
    ///
    /// A failing callback is recorded and delivery continues; the
    /// aggregated `Delivery` error reports every failure alongside the
    /// count of successful deliveries.
    pub fn publish(&self, notice: &Notice) -> Result<usize, BusError> {
        let targets = self.snapshot(None)?;
        Self::deliver(targets, notice)
    }

    /// Deliver a notice only to participants registered under `role`.
    ///
    /// Selection is by exact role match. No match is the non-fatal
    /// `UnroutableMessage` outcome, reported to the sender.
    pub fn route(&self, role: &str, notice: &Notice) -> Result<usize, BusError> {
        let targets = self.snapshot(Some(role))?;
        if targets.is_empty() {
            return Err(BusError::UnroutableMessage {
                role: role.to_string(),
            });
        }
        Self::deliver(targets, notice)
    }

    /// Number of registrations currently held.
    pub fn len(&self) -> usize {
        self.registry.read().map(|r| r.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Names of all registered participants, in subscription order.
    pub fn participant_names(&self) -> Vec<String> {
        self.registry
            .read()
            .map(|r| r.iter().map(|reg| reg.name.clone()).collect())
            .unwrap_or_default()
    }

    fn register<P>(
        &self,
        role: Option<String>,
        participant: &Arc<Mutex<P>>,
    ) -> Result<SubscriptionHandle, BusError>
    where
        P: Participant + 'static,
    {
        let name = participant
            .lock()
            .map_err(|_| BusError::LockPoisoned("participant"))?
            .name()
            .to_string();

        let mut registry = self
            .registry
            .write()
            .map_err(|_| BusError::LockPoisoned("subscribe"))?;

        // A dead registration (holder dropped without unsubscribing) no
        // longer blocks the name.
        let taken = registry
            .iter()
            .any(|r| r.name == name && r.participant.upgrade().is_some());
        if taken {
            return Err(BusError::DuplicateSubscription(name));
        }

        let handle = SubscriptionHandle(self.next_handle.fetch_add(1, Ordering::Relaxed));
        let shared: Arc<Mutex<dyn Participant>> = participant.clone();
        registry.push(Registration {
            handle,
            name,
            role,
            participant: Arc::downgrade(&shared),
        });
        Ok(handle)
    }

    /// Read-snapshot of the registry, optionally filtered by role.
    fn snapshot(
        &self,
        role: Option<&str>,
    ) -> Result<Vec<(String, Weak<Mutex<dyn Participant>>)>, BusError> {
        let registry = self
            .registry
            .read()
            .map_err(|_| BusError::LockPoisoned("publish"))?;
        Ok(registry
            .iter()
            .filter(|r| match role {
                Some(target) => r.role.as_deref() == Some(target),
                None => true,
            })
            .map(|r| (r.name.clone(), Weak::clone(&r.participant)))
            .collect())
    }

    fn deliver(
        targets: Vec<(String, Weak<Mutex<dyn Participant>>)>,
        notice: &Notice,
    ) -> Result<usize, BusError> {
        let mut delivered = 0;
        let mut failures = Vec::new();

        for (name, weak) in targets {
            let strong = match weak.upgrade() {
                Some(strong) => strong,
                None => {
                    failures.push(DeliveryFailure {
                        participant: name,
                        fault: "participant dropped without unsubscribing".into(),
                    });
                    continue;
                }
            };
            let mut participant = match strong.lock() {
                Ok(participant) => participant,
                Err(_) => {
                    failures.push(DeliveryFailure {
                        participant: name,
                        fault: "participant mutex poisoned".into(),
                    });
                    continue;
                }
            };
            match participant.receive(notice) {
                Ok(()) => delivered += 1,
                Err(fault) => failures.push(DeliveryFailure {
                    participant: name,
                    fault,
                }),
            }
        }

        if failures.is_empty() {
            Ok(delivered)
        } else {
            Err(BusError::Delivery {
                delivered,
                failures,
            })
        }
    }
}
