pub mod config;
pub mod edit;
pub mod events;
pub mod new;
pub mod set;
pub mod show;
pub mod types;

use anyhow::{Context, Result};
use rsvp_core::store::KeyValueStore;
use rsvp_core::{Event, RsvpError, Tracker};

/// Look up an event or fail with a pointer to `rsvp events`.
pub fn require_event<S: KeyValueStore>(tracker: &Tracker<S>, event_id: &str) -> Result<Event> {
    tracker
        .events()
        .find_by_id(event_id)
        .ok_or_else(|| RsvpError::EventNotFound(event_id.to_string()))
        .context("List existing events with: rsvp events")
}
