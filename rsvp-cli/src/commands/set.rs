use anyhow::{Context, Result};
use rsvp_core::store::KeyValueStore;
use rsvp_core::{GUESTS, RsvpStatus, Tracker, require_guest};

use super::require_event;
use crate::render::Render;

pub fn run<S: KeyValueStore>(
    tracker: &Tracker<S>,
    event_id: &str,
    guest: &str,
    status: RsvpStatus,
) -> Result<()> {
    let event = require_event(tracker, event_id)?;
    let guest = require_guest(guest).with_context(|| format!("Guests: {}", GUESTS.join(", ")))?;

    tracker.ledger().set_status(&event.id, guest, status)?;

    let counts = tracker.counts(&event.id);
    println!("  {} → {}", guest, status.render());
    println!("  {}: {}", event.name, counts.render());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::tests::{make_tracker, seed_event};
    use rsvp_core::Ledger;

    #[test]
    fn test_set_records_canonical_guest_name() {
        let tracker = make_tracker();
        let event = seed_event(&tracker);

        run(&tracker, &event.id, "liza", RsvpStatus::Going).unwrap();

        assert_eq!(tracker.ledger().get_status(&event.id, "Liza"), RsvpStatus::Going);
        assert_eq!(tracker.counts(&event.id).going, 1);
    }

    #[test]
    fn test_set_rejects_unknown_guest() {
        let tracker = make_tracker();
        let event = seed_event(&tracker);

        assert!(run(&tracker, &event.id, "Zelda", RsvpStatus::Going).is_err());
        assert_eq!(tracker.ledger().snapshot(), Ledger::new());
    }

    #[test]
    fn test_set_rejects_unknown_event() {
        let tracker = make_tracker();
        let before = tracker.events().list();

        assert!(run(&tracker, "karaoke-404", "Liza", RsvpStatus::Going).is_err());
        assert_eq!(tracker.ledger().snapshot(), Ledger::new());
        assert_eq!(tracker.events().list(), before);
    }
}
