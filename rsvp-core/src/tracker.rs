//! Application-wide handle over one store.

use std::path::Path;
use std::sync::Arc;

use crate::attendance::{self, Attendance, StatusCounts};
use crate::config::RsvpConfig;
use crate::error::RsvpResult;
use crate::event_store::EventStore;
use crate::guests::GUESTS;
use crate::ledger::RsvpLedger;
use crate::store::{FileStore, KeyValueStore};

/// Owns the store for the life of the program and hands out the event list
/// and the response ledger, both writing through it.
pub struct Tracker<S: KeyValueStore> {
    store: Arc<S>,
    events: EventStore<S>,
    ledger: RsvpLedger<S>,
}

impl Tracker<FileStore> {
    /// Open the on-disk store under the configured data directory.
    pub fn open(config: &RsvpConfig) -> RsvpResult<Self> {
        Self::open_dir(&config.data_path())
    }

    pub fn open_dir(dir: &Path) -> RsvpResult<Self> {
        Ok(Self::with_store(Arc::new(FileStore::open(dir)?)))
    }
}

impl<S: KeyValueStore> Tracker<S> {
    pub fn with_store(store: Arc<S>) -> Self {
        Tracker {
            events: EventStore::new(store.clone()),
            ledger: RsvpLedger::new(store.clone()),
            store,
        }
    }

    pub fn events(&self) -> &EventStore<S> {
        &self.events
    }

    pub fn ledger(&self) -> &RsvpLedger<S> {
        &self.ledger
    }

    pub fn counts(&self, event_id: &str) -> StatusCounts {
        attendance::count_statuses(event_id, &self.ledger.snapshot(), &GUESTS)
    }

    pub fn attendance(&self, event_id: &str) -> Attendance {
        attendance::attendance(event_id, &self.ledger.snapshot(), &GUESTS)
    }

    pub fn flush(&self) -> RsvpResult<()> {
        self.store.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::resolve_event_type;
    use crate::draft::EventDraft;
    use crate::event::RsvpStatus;
    use chrono::Utc;

    #[test]
    fn test_open_dir_persists_across_instances() {
        let dir = tempfile::tempdir().unwrap();

        let mut draft = EventDraft::for_type("movie-night").unwrap();
        draft.date = "2024-07-04".to_string();
        draft.time = "21:00".to_string();
        let event = draft.build(Utc::now()).unwrap();

        {
            let tracker = Tracker::open_dir(dir.path()).unwrap();
            tracker.events().create(event.clone()).unwrap();
            tracker
                .ledger()
                .set_status(&event.id, "Mihail", RsvpStatus::Declined)
                .unwrap();
            tracker.flush().unwrap();
        }

        let tracker = Tracker::open_dir(dir.path()).unwrap();
        assert_eq!(tracker.events().find_by_id(&event.id), Some(event.clone()));
        assert_eq!(tracker.counts(&event.id).declined, 1);
        assert_eq!(resolve_event_type(&event).id, "movie-night");
    }
}
