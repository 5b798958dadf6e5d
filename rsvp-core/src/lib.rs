//! Core types for the rsvp tracker.
//!
//! This crate holds everything except presentation:
//! - `Event`, `RsvpStatus` and the event-type catalog
//! - `EventStore` and `RsvpLedger`, both persisted through a `KeyValueStore`
//! - attendance counting over the fixed guest list
//! - form validation for creating and editing events

pub mod attendance;
pub mod catalog;
pub mod config;
pub mod draft;
pub mod error;
pub mod event;
pub mod event_store;
pub mod guests;
pub mod ledger;
pub mod store;
pub mod tracker;

// Re-export the common types at crate root for convenience
pub use attendance::{Attendance, StatusCounts, attendance, count_statuses};
pub use catalog::{EVENT_TYPES, EventType, Icon, find_event_type, resolve_event_type};
pub use error::{RsvpError, RsvpResult};
pub use event::{Event, EventPatch, RsvpStatus};
pub use event_store::EventStore;
pub use guests::{GUESTS, find_guest, require_guest};
pub use ledger::{Ledger, ResolveStatus, RsvpLedger};
pub use tracker::Tracker;
