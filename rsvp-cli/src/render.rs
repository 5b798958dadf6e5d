//! TUI rendering traits for rsvp types.
//!
//! This module provides extension traits that add colored terminal rendering
//! to rsvp-core types using owo_colors.

use owo_colors::OwoColorize;
use rsvp_core::{Event, Icon, RsvpStatus, StatusCounts, resolve_event_type};

/// Extension trait for TUI rendering with colors.
pub trait Render {
    fn render(&self) -> String;
}

impl Render for RsvpStatus {
    fn render(&self) -> String {
        colorize_status(*self, self.label())
    }
}

/// Colorize text according to the status it describes
fn colorize_status(status: RsvpStatus, text: &str) -> String {
    match status {
        RsvpStatus::Going => text.green().to_string(),
        RsvpStatus::Maybe => text.yellow().to_string(),
        RsvpStatus::Declined => text.red().to_string(),
        RsvpStatus::NoResponse => text.dimmed().to_string(),
    }
}

impl Render for Event {
    fn render(&self) -> String {
        let glyph = Icon::from_name(&self.icon).glyph();
        let event_type = resolve_event_type(self);

        format!(
            "{} {} {}",
            glyph,
            self.name.bold(),
            format!("({})", event_type.name).dimmed()
        )
    }
}

/// Non-zero status badges, e.g. "1 Going  2 Maybe"
impl Render for StatusCounts {
    fn render(&self) -> String {
        let badges: Vec<String> = [RsvpStatus::Going, RsvpStatus::Maybe, RsvpStatus::Declined]
            .into_iter()
            .filter(|status| self.get(*status) > 0)
            .map(|status| colorize_status(status, &format!("{} {}", self.get(status), status.label())))
            .collect();

        if badges.is_empty() {
            return "No responses yet".dimmed().to_string();
        }
        badges.join("  ")
    }
}

/// The date/time/venue block shared by list and detail views
pub fn render_details(event: &Event, indent: &str) -> Vec<String> {
    vec![
        format!("{}{}  {}", indent, "Date ".dimmed(), event.date),
        format!("{}{}  {}", indent, "Time ".dimmed(), event.time),
        format!("{}{}  {}", indent, "Venue".dimmed(), event.venue),
    ]
}

/// Render field-by-field differences between two versions of an event
pub fn render_field_diffs(old: &Event, new: &Event) -> Vec<String> {
    let fields = [
        ("date", &old.date, &new.date),
        ("time", &old.time, &new.time),
        ("venue", &old.venue, &new.venue),
        ("description", &old.description, &new.description),
    ];

    fields
        .into_iter()
        .filter(|(_, before, after)| before != after)
        .map(|(label, before, after)| {
            format!("{}: {} → {}", label.dimmed(), before.red(), after.green())
        })
        .collect()
}

/// Simple pluralization helper
pub fn pluralize(word: &str, count: usize) -> String {
    if count == 1 {
        word.to_string()
    } else {
        format!("{}s", word)
    }
}
