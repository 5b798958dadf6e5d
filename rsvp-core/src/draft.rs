//! Form input for creating and editing events.
//!
//! The stores accept whatever they are given; these types are where
//! required fields are checked and new ids are minted.

use chrono::{DateTime, Utc};

use crate::catalog::{EventType, find_event_type};
use crate::error::{RsvpError, RsvpResult};
use crate::event::{Event, EventPatch};

/// A new event being filled in.
#[derive(Debug, Clone)]
pub struct EventDraft {
    event_type: &'static EventType,
    pub name: String,
    pub date: String,
    pub time: String,
    pub venue: String,
}

impl EventDraft {
    /// Start a draft from a template, prefilled with its name and default venue.
    pub fn new(event_type: &'static EventType) -> Self {
        EventDraft {
            event_type,
            name: event_type.name.to_string(),
            date: String::new(),
            time: String::new(),
            venue: event_type.default_venue.unwrap_or_default().to_string(),
        }
    }

    pub fn for_type(type_id: &str) -> RsvpResult<Self> {
        find_event_type(type_id)
            .map(Self::new)
            .ok_or_else(|| RsvpError::UnknownEventType(type_id.to_string()))
    }

    /// Validate and produce the event, with an id derived from `now`.
    pub fn build(self, now: DateTime<Utc>) -> RsvpResult<Event> {
        require("name", &self.name)?;
        require("date", &self.date)?;
        require("time", &self.time)?;
        require("venue", &self.venue)?;

        let event_type = self.event_type;

        Ok(Event {
            id: format!("{}-{}", event_type.id, now.timestamp_millis()),
            name: self.name.trim().to_string(),
            description: event_type.description.to_string(),
            icon: event_type.icon.name().to_string(),
            date: self.date.trim().to_string(),
            time: self.time.trim().to_string(),
            venue: self.venue.trim().to_string(),
            color: event_type.color.to_string(),
            event_type: Some(event_type.id.to_string()),
        })
    }
}

/// The editable details of an existing event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailsForm {
    pub date: String,
    pub time: String,
    pub venue: String,
}

impl DetailsForm {
    pub fn from_event(event: &Event) -> Self {
        DetailsForm {
            date: event.date.clone(),
            time: event.time.clone(),
            venue: event.venue.clone(),
        }
    }

    /// Validate and turn the form into an update for all three fields.
    pub fn into_patch(self) -> RsvpResult<EventPatch> {
        require("date", &self.date)?;
        require("time", &self.time)?;
        require("venue", &self.venue)?;

        Ok(EventPatch {
            date: Some(self.date.trim().to_string()),
            time: Some(self.time.trim().to_string()),
            venue: Some(self.venue.trim().to_string()),
            description: None,
        })
    }
}

fn require(field: &'static str, value: &str) -> RsvpResult<()> {
    if value.trim().is_empty() {
        return Err(RsvpError::MissingField(field));
    }
    Ok(())
}
