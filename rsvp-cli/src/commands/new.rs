use anyhow::{Context, Result};
use chrono::Utc;
use owo_colors::OwoColorize;
use rsvp_core::Tracker;
use rsvp_core::draft::EventDraft;
use rsvp_core::store::KeyValueStore;

pub fn run<S: KeyValueStore>(
    tracker: &Tracker<S>,
    event_type: &str,
    date: String,
    time: String,
    venue: Option<String>,
    name: Option<String>,
) -> Result<()> {
    let mut draft = EventDraft::for_type(event_type).context("Run `rsvp types` to see the options")?;

    draft.date = date;
    draft.time = time;
    if let Some(venue) = venue {
        draft.venue = venue;
    }
    if let Some(name) = name {
        draft.name = name;
    }

    let event = draft.build(Utc::now())?;
    let id = event.id.clone();
    let name = event.name.clone();

    tracker.events().create(event)?;

    println!("{}", format!("  Created: {}", name).green());
    println!("  {}", format!("rsvp show {}", id).dimmed());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::tests::make_tracker;

    #[test]
    fn test_new_uses_template_defaults() {
        let tracker = make_tracker();
        run(&tracker, "potluck", "2024-06-01".to_string(), "18:00".to_string(), None, None).unwrap();

        let events = tracker.events().list();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].name, "Potluck Dinner");
        assert_eq!(events[0].venue, "Sarah's House");
        assert!(events[0].id.starts_with("potluck-"));
    }

    #[test]
    fn test_new_applies_overrides() {
        let tracker = make_tracker();
        run(
            &tracker,
            "movie-night",
            "2024-07-04".to_string(),
            "21:00".to_string(),
            Some("Rooftop".to_string()),
            Some("Summer Screening".to_string()),
        )
        .unwrap();

        let event = &tracker.events().list()[0];
        assert_eq!(event.name, "Summer Screening");
        assert_eq!(event.venue, "Rooftop");
        assert_eq!(event.event_type.as_deref(), Some("movie-night"));
    }

    #[test]
    fn test_new_rejects_unknown_type_and_blank_fields() {
        let tracker = make_tracker();

        assert!(run(&tracker, "bowling", "2024-06-01".to_string(), "18:00".to_string(), None, None).is_err());
        assert!(run(&tracker, "trivia", String::new(), "20:00".to_string(), None, None).is_err());
        assert!(tracker.events().list().is_empty());
    }
}
