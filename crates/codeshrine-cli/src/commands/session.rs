use clap::Subcommand;
use codeshrine_core::Settings;

use super::print_events;
use crate::store;

#[derive(Subcommand)]
pub enum SessionAction {
    /// Begin a session on the selected target
    Start,
    /// Pause the running session
    Pause,
    /// Resume a paused session
    Resume,
    /// Finish the session and collect the end-of-session drop
    End,
    /// Print the current state snapshot as JSON
    Status,
}

pub fn run(action: SessionAction) -> Result<(), Box<dyn std::error::Error>> {
    let mut state = store::load()?;
    print_events(&store::catch_up(&mut state))?;

    let events = match action {
        SessionAction::Start => {
            let events = state.shrine.start();
            if !events.is_empty() {
                persist_onboarding(&state)?;
            }
            events
        }
        SessionAction::Pause => state.shrine.pause(),
        SessionAction::Resume => state.shrine.resume(),
        SessionAction::End => state.shrine.end(),
        SessionAction::Status => vec![state.shrine.snapshot()],
    };
    print_events(&events)?;
    store::save(&state)?;
    Ok(())
}

/// The onboarding flag is written once, the first time a session starts.
fn persist_onboarding(state: &store::StoredState) -> Result<(), Box<dyn std::error::Error>> {
    let mut settings = Settings::load()?;
    if !settings.onboarding_completed && state.shrine.onboarding().is_complete() {
        settings.onboarding_completed = true;
        settings.save()?;
    }
    Ok(())
}
