//! Rewards: randomly drawn content queued for the user.

pub mod catalog;
mod inbox;
mod scheduler;

pub use inbox::RewardInbox;
pub use scheduler::{DrawPolicy, DrawTrigger, RewardScheduler, CHECK_PERIOD_SECS};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RewardKind {
    /// Text-only advice (AI coding tips).
    Tip,
    /// A physical/claimable prize, with an image.
    PhysicalPrize,
}

/// One drawn reward. Immutable except for the read flag.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reward {
    pub id: Uuid,
    pub kind: RewardKind,
    pub title: String,
    pub body: String,
    /// Asset name for prize artwork; tips have none.
    pub image: Option<String>,
    pub created_at: DateTime<Utc>,
    pub is_read: bool,
}
