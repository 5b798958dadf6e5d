//! Event records and RSVP statuses.
//!
//! These are the persisted shapes: an `Event` is stored as one element of
//! the `all-events` array, and `RsvpStatus` values are the leaves of the
//! `guest-statuses-by-event` object.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::RsvpError;

/// A scheduled event that guests respond to.
///
/// `id` is `{eventTypeId}-{creationMillis}` and never changes after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub id: String,
    pub name: String,
    pub description: String,
    pub icon: String,
    pub date: String,
    pub time: String,
    pub venue: String,
    pub color: String,

    /// Catalog id this event was created from.
    ///
    /// Records written before this field existed leave it empty, in which
    /// case the type is derived from the id prefix.
    #[serde(
        rename = "eventType",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub event_type: Option<String>,
}

impl Event {
    /// Overwrite the fields present in `patch`, leaving the rest untouched.
    pub fn apply(&mut self, patch: &EventPatch) {
        if let Some(date) = &patch.date {
            self.date = date.clone();
        }
        if let Some(time) = &patch.time {
            self.time = time.clone();
        }
        if let Some(venue) = &patch.venue {
            self.venue = venue.clone();
        }
        if let Some(description) = &patch.description {
            self.description = description.clone();
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// A partial update for an existing event.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventPatch {
    pub date: Option<String>,
    pub time: Option<String>,
    pub venue: Option<String>,
    /// Replacement description text, e.g. generated copy accepted by the user
    pub description: Option<String>,
}

/// A guest's response to an event.
///
/// `NoResponse` is what every guest has until they answer; it is never
/// written to the ledger.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RsvpStatus {
    Going,
    Maybe,
    Declined,
    #[default]
    NoResponse,
}

impl RsvpStatus {
    pub const ALL: [RsvpStatus; 4] = [
        RsvpStatus::Going,
        RsvpStatus::Maybe,
        RsvpStatus::Declined,
        RsvpStatus::NoResponse,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RsvpStatus::Going => "going",
            RsvpStatus::Maybe => "maybe",
            RsvpStatus::Declined => "declined",
            RsvpStatus::NoResponse => "no-response",
        }
    }

    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            RsvpStatus::Going => "Going",
            RsvpStatus::Maybe => "Maybe",
            RsvpStatus::Declined => "Can't Make It",
            RsvpStatus::NoResponse => "No Response",
        }
    }
}

impl fmt::Display for RsvpStatus {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RsvpStatus {
    type Err = RsvpError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RsvpStatus::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| RsvpError::InvalidStatus(s.to_string()))
    }
}
