use anyhow::Result;
use owo_colors::OwoColorize;
use rsvp_core::EVENT_TYPES;

pub fn run() -> Result<()> {
    for event_type in &EVENT_TYPES {
        println!(
            "{} {} {}",
            event_type.icon.glyph(),
            event_type.name.bold(),
            format!("[{}]", event_type.id).dimmed()
        );
        println!("   {}", event_type.description);
        if let Some(venue) = event_type.default_venue {
            println!("   {} {}", "Usual venue:".dimmed(), venue);
        }
    }

    Ok(())
}
