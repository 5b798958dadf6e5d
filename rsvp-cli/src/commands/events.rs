use anyhow::Result;
use owo_colors::OwoColorize;
use rsvp_core::Tracker;
use rsvp_core::store::KeyValueStore;

use crate::render::{Render, render_details};

pub fn run<S: KeyValueStore>(tracker: &Tracker<S>) -> Result<()> {
    let events = tracker.events().list();

    if events.is_empty() {
        println!("{}", "No events yet".dimmed());
        println!("{}", "Create your first one with: rsvp new <type> --date <date> --time <time>".dimmed());
        return Ok(());
    }

    for (i, event) in events.iter().enumerate() {
        if i > 0 {
            println!();
        }

        let counts = tracker.counts(&event.id);

        println!("{} {}", event.render(), format!("[{}]", event.id).dimmed());
        for line in render_details(event, "   ") {
            println!("{}", line);
        }
        println!(
            "   {} {}/{}  {}",
            "RSVPs".dimmed(),
            counts.attending(),
            counts.total(),
            counts.render()
        );
    }

    Ok(())
}
