use anyhow::Result;
use owo_colors::OwoColorize;
use rsvp_core::store::KeyValueStore;
use rsvp_core::{GUESTS, RsvpStatus, Tracker};

use super::require_event;
use crate::render::{Render, pluralize, render_details};

pub fn run<S: KeyValueStore>(tracker: &Tracker<S>, event_id: &str) -> Result<()> {
    let event = require_event(tracker, event_id)?;
    let attendance = tracker.attendance(event_id);

    println!("{}", event.render());
    println!("   {}", event.description);
    println!();

    for line in render_details(&event, "   ") {
        println!("{}", line);
    }
    println!();

    println!("{}", "RSVP Overview".bold());
    for status in RsvpStatus::ALL {
        let count = attendance.counts.get(status);
        println!("   {:>2} {}", count, status.render());
    }
    println!();

    println!(
        "{} {}",
        "Guest List".bold(),
        format!("({} {})", GUESTS.len(), pluralize("guest", GUESTS.len())).dimmed()
    );
    for status in RsvpStatus::ALL {
        for guest in attendance.guests_with(status) {
            println!("   {:<10} {}", guest, status.render());
        }
    }

    Ok(())
}
