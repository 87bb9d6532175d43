//! Session state machine.
//!
//! The controller is tick-driven: it owns no timers and spawns no threads.
//! The host scheduler calls [`SessionController::tick`] once per whole
//! elapsed second while a session is running, passing the [`TickToken`] it
//! was handed when the session (re)started. Tokens are invalidated on every
//! transition out of Active, so a timer callback that fires after `pause()`
//! or `end()` has returned is a guaranteed no-op.
//!
//! ## State Transitions
//!
//! ```text
//! Idle -> Active -> (Paused -> Active)* -> Idle
//! ```
//!
//! Commands with unmet preconditions never panic and never return an error:
//! they log a diagnostic and return `None` (the original app's defensive
//! no-op policy).

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::events::Event;
use crate::target::Target;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionState {
    Idle,
    Active,
    Paused,
}

/// Cancellation token for the 1-second tick.
///
/// Handed out by `start()`/`resume()` via [`SessionController::tick_token`];
/// stale tokens (from before the latest transition) are rejected by
/// [`SessionController::tick`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickToken {
    generation: u64,
}

/// Core session state machine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionController {
    state: SessionState,
    /// Whole seconds accumulated while Active. Frozen while Paused.
    elapsed_secs: u64,
    /// The subject of the session. Required to start; cleared on end.
    target: Option<Target>,
    /// Completed Idle -> Active -> Idle cycles today.
    completed_today: u32,
    /// Bumped on every transition in or out of Active; the live half of
    /// every outstanding [`TickToken`].
    generation: u64,
}

impl Default for SessionController {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionController {
    pub fn new() -> Self {
        Self {
            state: SessionState::Idle,
            elapsed_secs: 0,
            target: None,
            completed_today: 0,
            generation: 0,
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn elapsed_secs(&self) -> u64 {
        self.elapsed_secs
    }

    pub fn completed_today(&self) -> u32 {
        self.completed_today
    }

    pub fn target(&self) -> Option<&Target> {
        self.target.as_ref()
    }

    /// Token the host scheduler must present with each tick. Refetch after
    /// every start/resume; tokens from before the latest transition are dead.
    pub fn tick_token(&self) -> TickToken {
        TickToken {
            generation: self.generation,
        }
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Set the session target. Only legal while Idle: the target may not
    /// change under a running or paused session.
    pub fn select_target(&mut self, target: Target) -> Option<Event> {
        if self.state != SessionState::Idle {
            warn!(state = ?self.state, target_id = %target.id, "select_target ignored: session underway");
            return None;
        }
        let target_id = target.id.clone();
        self.target = Some(target);
        Some(Event::TargetSelected {
            target_id,
            at: Utc::now(),
        })
    }

    /// Begin a session. Requires Idle state and a selected target.
    pub fn start(&mut self) -> Option<Event> {
        if self.state != SessionState::Idle {
            warn!(state = ?self.state, "start ignored: session already underway");
            return None;
        }
        let Some(target) = self.target.as_ref() else {
            warn!("start ignored: no target selected");
            return None;
        };
        self.state = SessionState::Active;
        self.elapsed_secs = 0;
        self.generation += 1;
        Some(Event::SessionStarted {
            target_id: target.id.clone(),
            at: Utc::now(),
        })
    }

    /// Suspend ticking. Elapsed time freezes; outstanding tick tokens die.
    pub fn pause(&mut self) -> Option<Event> {
        if self.state != SessionState::Active {
            warn!(state = ?self.state, "pause ignored: session not active");
            return None;
        }
        self.state = SessionState::Paused;
        self.generation += 1;
        Some(Event::SessionPaused {
            elapsed_secs: self.elapsed_secs,
            at: Utc::now(),
        })
    }

    /// Resume ticking from the frozen elapsed count.
    pub fn resume(&mut self) -> Option<Event> {
        if self.state != SessionState::Paused {
            warn!(state = ?self.state, "resume ignored: session not paused");
            return None;
        }
        self.state = SessionState::Active;
        self.generation += 1;
        Some(Event::SessionResumed {
            elapsed_secs: self.elapsed_secs,
            at: Utc::now(),
        })
    }

    /// Finish the session, from Active or Paused. The `SessionEnded` event
    /// is produced before any state is reset; the completed counter goes up
    /// exactly once per call.
    pub fn end(&mut self) -> Option<Event> {
        match self.state {
            SessionState::Active | SessionState::Paused => {
                let event = Event::SessionEnded { at: Utc::now() };
                self.completed_today += 1;
                self.state = SessionState::Idle;
                self.elapsed_secs = 0;
                self.target = None;
                self.generation += 1;
                Some(event)
            }
            SessionState::Idle => {
                warn!("end ignored: no session underway");
                None
            }
        }
    }

    /// Record one whole elapsed second. Returns `true` iff the second was
    /// counted; a stale token or a non-Active state makes this a no-op, so
    /// a timer that outlives its session cannot corrupt the counter.
    pub fn tick(&mut self, token: TickToken) -> bool {
        if self.state != SessionState::Active {
            return false;
        }
        if token.generation != self.generation {
            debug!(
                token = token.generation,
                current = self.generation,
                "tick ignored: stale token"
            );
            return false;
        }
        self.elapsed_secs += 1;
        true
    }
}
