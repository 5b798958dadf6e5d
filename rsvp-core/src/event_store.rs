//! The list of all events.

use std::sync::Arc;

use crate::error::RsvpResult;
use crate::event::{Event, EventPatch};
use crate::store::{KeyValueStore, KeyValueStoreExt};

/// Store key holding the JSON array of events.
pub const EVENTS_KEY: &str = "all-events";

/// Insertion-ordered events, persisted under [`EVENTS_KEY`].
///
/// Events are appended and edited in place; there is no delete.
pub struct EventStore<S: KeyValueStore> {
    store: Arc<S>,
}

impl<S: KeyValueStore> EventStore<S> {
    pub fn new(store: Arc<S>) -> Self {
        EventStore { store }
    }

    /// All events in the order they were created.
    pub fn list(&self) -> Vec<Event> {
        self.store.get(EVENTS_KEY, Vec::new())
    }

    /// Append an event.
    ///
    /// The record is stored as given: callers must supply a complete event
    /// with a unique id (see [`crate::draft::EventDraft`]). A duplicate id is
    /// not rejected; lookups then return the earlier record.
    pub fn create(&self, event: Event) -> RsvpResult<()> {
        let id = event.id.clone();
        self.store.update(EVENTS_KEY, Vec::new(), |mut events: Vec<Event>| {
            events.push(event);
            events
        })?;

        tracing::debug!(event_id = %id, "created event");
        Ok(())
    }

    /// Apply `patch` to every event with this id. Unknown ids are a no-op.
    pub fn update(&self, id: &str, patch: &EventPatch) -> RsvpResult<()> {
        let mut matched = false;
        self.store.update(EVENTS_KEY, Vec::new(), |mut events: Vec<Event>| {
            for event in events.iter_mut().filter(|e| e.id == id) {
                event.apply(patch);
                matched = true;
            }
            events
        })?;

        if matched {
            tracing::debug!(event_id = id, ?patch, "updated event");
        } else {
            tracing::warn!(event_id = id, "update ignored, no such event");
        }
        Ok(())
    }

    pub fn find_by_id(&self, id: &str) -> Option<Event> {
        self.list().into_iter().find(|e| e.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    fn make_event(id: &str, venue: &str) -> Event {
        Event {
            id: id.to_string(),
            name: "Karaoke Night".to_string(),
            description: "Sing your heart out with friends".to_string(),
            icon: "MusicNote".to_string(),
            date: "2024-06-01".to_string(),
            time: "19:00".to_string(),
            venue: venue.to_string(),
            color: "oklch(0.58 0.15 65)".to_string(),
            event_type: Some("karaoke".to_string()),
        }
    }

    fn make_store() -> EventStore<MemoryStore> {
        EventStore::new(Arc::new(MemoryStore::new()))
    }

    #[test]
    fn test_list_starts_empty() {
        assert!(make_store().list().is_empty());
    }

    #[test]
    fn test_create_keeps_insertion_order() {
        let events = make_store();
        events.create(make_event("karaoke-2", "B")).unwrap();
        events.create(make_event("karaoke-1", "A")).unwrap();

        let ids: Vec<String> = events.list().into_iter().map(|e| e.id).collect();
        assert_eq!(ids, vec!["karaoke-2", "karaoke-1"]);
    }

    #[test]
    fn test_update_changes_only_patched_fields() {
        let events = make_store();
        events.create(make_event("karaoke-1000", "Lucky Strike")).unwrap();
        let before = events.find_by_id("karaoke-1000").unwrap();

        let patch = EventPatch {
            venue: Some("X".to_string()),
            ..Default::default()
        };
        events.update("karaoke-1000", &patch).unwrap();

        let after = events.find_by_id("karaoke-1000").unwrap();
        assert_eq!(after.venue, "X");
        assert_eq!(after.date, before.date);
        assert_eq!(after.time, before.time);
        assert_eq!(after.name, before.name);
        assert_eq!(after.description, before.description);
        assert_eq!(after.icon, before.icon);
        assert_eq!(after.color, before.color);
    }

    #[test]
    fn test_update_unknown_id_is_noop() {
        let events = make_store();
        events.create(make_event("karaoke-1000", "Lucky Strike")).unwrap();
        let before = events.list();

        let patch = EventPatch {
            venue: Some("Y".to_string()),
            ..Default::default()
        };
        events.update("nonexistent-id", &patch).unwrap();

        assert_eq!(events.list(), before);
    }

    #[test]
    fn test_find_by_id_returns_first_duplicate() {
        let events = make_store();
        events.create(make_event("karaoke-1", "First")).unwrap();
        events.create(make_event("karaoke-1", "Second")).unwrap();

        assert_eq!(events.find_by_id("karaoke-1").unwrap().venue, "First");
        assert!(events.find_by_id("karaoke-2").is_none());
    }
}
