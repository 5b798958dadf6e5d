use anyhow::Result;
use owo_colors::OwoColorize;
use rsvp_core::Tracker;
use rsvp_core::draft::DetailsForm;
use rsvp_core::store::KeyValueStore;

use super::require_event;
use crate::render::render_field_diffs;

pub fn run<S: KeyValueStore>(
    tracker: &Tracker<S>,
    event_id: &str,
    date: Option<String>,
    time: Option<String>,
    venue: Option<String>,
    description: Option<String>,
) -> Result<()> {
    let before = require_event(tracker, event_id)?;

    if date.is_none() && time.is_none() && venue.is_none() && description.is_none() {
        anyhow::bail!("Nothing to change. Pass --date, --time, --venue or --description.");
    }

    let mut form = DetailsForm::from_event(&before);
    if let Some(date) = date {
        form.date = date;
    }
    if let Some(time) = time {
        form.time = time;
    }
    if let Some(venue) = venue {
        form.venue = venue;
    }

    let mut patch = form.into_patch()?;
    patch.description = description;

    tracker.events().update(event_id, &patch)?;

    let after = require_event(tracker, event_id)?;
    let diffs = render_field_diffs(&before, &after);

    if diffs.is_empty() {
        println!("{}", "  No changes".dimmed());
    } else {
        println!("{}", format!("  Updated: {}", after.name).yellow());
        for line in diffs {
            println!("     {}", line);
        }
    }

    Ok(())
}
