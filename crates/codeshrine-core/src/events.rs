use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::reward::{DrawTrigger, RewardKind};
use crate::session::SessionState;

/// Every state change in the system produces an Event.
/// The GUI polls for events; the reward scheduler subscribes to the
/// session lifecycle ones.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    TargetSelected {
        target_id: String,
        at: DateTime<Utc>,
    },
    SessionStarted {
        target_id: String,
        at: DateTime<Utc>,
    },
    SessionPaused {
        elapsed_secs: u64,
        at: DateTime<Utc>,
    },
    SessionResumed {
        elapsed_secs: u64,
        at: DateTime<Utc>,
    },
    /// Emitted before the session state is reset. Carries no session data:
    /// the reward scheduler uses it purely as a trigger.
    SessionEnded {
        at: DateTime<Utc>,
    },
    /// A reward was drawn and appended to the unread queue.
    RewardDropped {
        reward_id: Uuid,
        kind: RewardKind,
        trigger: DrawTrigger,
        at: DateTime<Utc>,
    },
    /// Full read-only state snapshot for the presentation layer.
    Snapshot {
        state: SessionState,
        elapsed_secs: u64,
        completed_today: u32,
        target_id: Option<String>,
        unread_count: usize,
        archive_count: usize,
        at: DateTime<Utc>,
    },
}
