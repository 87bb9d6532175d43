pub mod config;
pub mod rewards;
pub mod run;
pub mod session;
pub mod target;

use codeshrine_core::Event;

/// Print each event as a pretty JSON document, one per line group.
pub fn print_events(events: &[Event]) -> Result<(), Box<dyn std::error::Error>> {
    for event in events {
        println!("{}", serde_json::to_string_pretty(event)?);
    }
    Ok(())
}
