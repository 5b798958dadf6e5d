//! Guest responses, namespaced per event.

use std::collections::BTreeMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::RsvpResult;
use crate::event::RsvpStatus;
use crate::store::{KeyValueStore, KeyValueStoreExt};

/// Store key holding the JSON object of responses.
pub const STATUSES_KEY: &str = "guest-statuses-by-event";

/// Anything that can answer "what did this guest say for this event".
pub trait ResolveStatus {
    /// Recorded status, or `NoResponse` when nothing is recorded.
    fn status(&self, event_id: &str, guest: &str) -> RsvpStatus;
}

/// Event id -> guest name -> status, as persisted.
///
/// A missing event, a missing guest and a missing ledger all read as
/// `NoResponse`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Ledger {
    events: BTreeMap<String, BTreeMap<String, RsvpStatus>>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a status. `NoResponse` removes the guest's entry.
    pub fn set(&mut self, event_id: &str, guest: &str, status: RsvpStatus) {
        let responses = self.events.entry(event_id.to_string()).or_default();

        match status {
            RsvpStatus::NoResponse => {
                responses.remove(guest);
            }
            _ => {
                responses.insert(guest.to_string(), status);
            }
        }
    }

    /// Recorded entries for one event. Guests without an entry are absent.
    pub fn responses(&self, event_id: &str) -> BTreeMap<String, RsvpStatus> {
        self.events.get(event_id).cloned().unwrap_or_default()
    }
}

impl ResolveStatus for Ledger {
    fn status(&self, event_id: &str, guest: &str) -> RsvpStatus {
        self.events
            .get(event_id)
            .and_then(|responses| responses.get(guest))
            .copied()
            .unwrap_or_default()
    }
}

/// Store-backed ledger persisted under [`STATUSES_KEY`].
pub struct RsvpLedger<S: KeyValueStore> {
    store: Arc<S>,
}

impl<S: KeyValueStore> RsvpLedger<S> {
    pub fn new(store: Arc<S>) -> Self {
        RsvpLedger { store }
    }

    /// The whole ledger as currently stored.
    pub fn snapshot(&self) -> Ledger {
        self.store.get(STATUSES_KEY, Ledger::default())
    }

    /// Never fails, whether or not the event or guest is known.
    pub fn get_status(&self, event_id: &str, guest: &str) -> RsvpStatus {
        self.snapshot().status(event_id, guest)
    }

    pub fn set_status(&self, event_id: &str, guest: &str, status: RsvpStatus) -> RsvpResult<()> {
        self.store
            .update(STATUSES_KEY, Ledger::default(), |mut ledger: Ledger| {
                ledger.set(event_id, guest, status);
                ledger
            })?;

        tracing::debug!(event_id, guest, %status, "set rsvp status");
        Ok(())
    }
}

impl<S: KeyValueStore> ResolveStatus for RsvpLedger<S> {
    fn status(&self, event_id: &str, guest: &str) -> RsvpStatus {
        self.get_status(event_id, guest)
    }
}
