//! Event type templates.
//!
//! The catalog is fixed at compile time. New events copy their description,
//! icon and color from the template they were created from.

use std::fmt;

use crate::event::Event;

/// Icon shown next to an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Icon {
    MusicNote,
    Brain,
    GameController,
    ForkKnife,
    FilmStrip,
    Calendar,
}

static ICON_NAMES: [(&str, Icon); 6] = [
    ("MusicNote", Icon::MusicNote),
    ("Brain", Icon::Brain),
    ("GameController", Icon::GameController),
    ("ForkKnife", Icon::ForkKnife),
    ("FilmStrip", Icon::FilmStrip),
    ("Calendar", Icon::Calendar),
];

impl Icon {
    /// Resolve a stored icon tag. Unknown tags fall back to `Calendar`.
    pub fn from_name(name: &str) -> Icon {
        ICON_NAMES
            .iter()
            .find(|(tag, _)| *tag == name)
            .map(|(_, icon)| *icon)
            .unwrap_or(Icon::Calendar)
    }

    pub fn name(&self) -> &'static str {
        ICON_NAMES
            .iter()
            .find(|(_, icon)| icon == self)
            .map(|(tag, _)| *tag)
            .unwrap_or("Calendar")
    }

    /// Terminal glyph for the icon
    pub fn glyph(&self) -> &'static str {
        match self {
            Icon::MusicNote => "🎤",
            Icon::Brain => "🧠",
            Icon::GameController => "🎲",
            Icon::ForkKnife => "🍲",
            Icon::FilmStrip => "🎬",
            Icon::Calendar => "📅",
        }
    }
}

impl fmt::Display for Icon {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A template that seeds new events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EventType {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub icon: Icon,
    pub color: &'static str,
    pub default_venue: Option<&'static str>,
}

pub static EVENT_TYPES: [EventType; 5] = [
    EventType {
        id: "karaoke",
        name: "Karaoke Night",
        description: "Sing your heart out with friends",
        icon: Icon::MusicNote,
        color: "oklch(0.58 0.15 65)",
        default_venue: Some("Lucky Strike"),
    },
    EventType {
        id: "trivia",
        name: "Trivia Night",
        description: "Test your knowledge and compete",
        icon: Icon::Brain,
        color: "oklch(0.65 0.12 280)",
        default_venue: Some("The Pub Quiz"),
    },
    EventType {
        id: "game-night",
        name: "Board Game Night",
        description: "Classic games and good times",
        icon: Icon::GameController,
        color: "oklch(0.62 0.14 120)",
        default_venue: Some("Community Center"),
    },
    EventType {
        id: "potluck",
        name: "Potluck Dinner",
        description: "Share food and stories together",
        icon: Icon::ForkKnife,
        color: "oklch(0.68 0.13 45)",
        default_venue: Some("Sarah's House"),
    },
    EventType {
        id: "movie-night",
        name: "Movie Night",
        description: "Popcorn, movies, and chill vibes",
        icon: Icon::FilmStrip,
        color: "oklch(0.55 0.16 15)",
        default_venue: Some("Mike's Living Room"),
    },
];

pub fn find_event_type(id: &str) -> Option<&'static EventType> {
    EVENT_TYPES.iter().find(|t| t.id == id)
}

/// The template an event was created from.
///
/// Uses the event's recorded type when it has one. Older records only carry
/// the type as the part of the id before the first `-`, which cannot name a
/// hyphenated type such as `game-night`. Anything unresolvable falls back to
/// the first catalog entry.
pub fn resolve_event_type(event: &Event) -> &'static EventType {
    let type_id = match &event.event_type {
        Some(id) => id.as_str(),
        None => id_prefix(&event.id),
    };

    find_event_type(type_id).unwrap_or(&EVENT_TYPES[0])
}

fn id_prefix(id: &str) -> &str {
    id.split('-').next().unwrap_or(id)
}
