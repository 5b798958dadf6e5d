use std::path::Path;

use anyhow::Result;
use owo_colors::OwoColorize;
use rsvp_core::config::RsvpConfig;
use rsvp_core::event_store::EVENTS_KEY;
use rsvp_core::ledger::STATUSES_KEY;

pub fn run(data_dir_override: Option<&Path>) -> Result<()> {
    let config_path = RsvpConfig::config_path()?;
    let config = RsvpConfig::load()?;

    let data_path = match data_dir_override {
        Some(dir) => dir.to_path_buf(),
        None => config.data_path(),
    };

    println!("{}", "Paths".bold());
    println!("  Config:     {}", config_path.display());
    println!("  Data:       {}", data_path.display());
    println!("  Events:     {}", data_path.join(format!("{EVENTS_KEY}.json")).display());
    println!("  Responses:  {}", data_path.join(format!("{STATUSES_KEY}.json")).display());

    Ok(())
}
