//! On-disk shrine state between CLI invocations.
//!
//! The core is tick-driven with no internal clock, and the CLI is its host
//! scheduler. Between one-shot invocations the state sleeps in a JSON file
//! next to the settings; on load we replay one tick per whole second of
//! wall clock that passed since the last save, so elapsed time and the
//! periodic reward check behave as if the process had stayed alive.

use chrono::{DateTime, Duration, Utc};
use codeshrine_core::storage;
use codeshrine_core::{Event, Settings, Shrine};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::path::PathBuf;
use tracing::warn;

const STATE_FILE: &str = "state.json";

#[derive(Debug, Serialize, Deserialize)]
pub struct StoredState {
    pub shrine: Shrine,
    pub last_tick: DateTime<Utc>,
}

pub fn state_path() -> Result<PathBuf, Box<dyn Error>> {
    Ok(storage::config_dir()?.join(STATE_FILE))
}

/// Load the saved state, or build a fresh shrine from the settings file.
pub fn load() -> Result<StoredState, Box<dyn Error>> {
    let path = state_path()?;
    if path.exists() {
        let raw = std::fs::read_to_string(&path)?;
        match serde_json::from_str::<StoredState>(&raw) {
            Ok(state) => return Ok(state),
            // An unreadable snapshot is discarded, not fatal.
            Err(e) => warn!(path = %path.display(), error = %e, "discarding unreadable state snapshot"),
        }
    }
    let settings = Settings::load()?;
    Ok(StoredState {
        shrine: Shrine::from_settings(&settings)?,
        last_tick: Utc::now(),
    })
}

pub fn save(state: &StoredState) -> Result<(), Box<dyn Error>> {
    let path = state_path()?;
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(&path, serde_json::to_string(state)?)?;
    Ok(())
}

/// Replay one tick per whole second since the last save. Returns any
/// events (periodic reward drops) produced along the way. Sub-second
/// remainders are carried forward, not dropped.
pub fn catch_up(state: &mut StoredState) -> Vec<Event> {
    let now = Utc::now();
    let seconds = (now - state.last_tick).num_seconds().max(0);
    let mut events = Vec::new();
    for _ in 0..seconds {
        events.extend(state.shrine.tick());
    }
    state.last_tick += Duration::seconds(seconds);
    events
}
