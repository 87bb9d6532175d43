//! Unread queue and historical archive.
//!
//! Every reward ever drawn lives in exactly one of the two sequences:
//! `unread` (insertion order, front = oldest) until the user has seen it
//! and the batch is claimed, `archive` afterwards. Nothing is ever dropped;
//! there is no purge.

use serde::{Deserialize, Serialize};
use tracing::warn;
use uuid::Uuid;

use super::Reward;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RewardInbox {
    unread: Vec<Reward>,
    archive: Vec<Reward>,
}

impl RewardInbox {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a freshly drawn reward to the tail of the unread queue.
    pub fn append(&mut self, reward: Reward) {
        self.unread.push(reward);
    }

    /// Flag an unread reward as seen. Unknown ids are a logged no-op, so
    /// the operation is idempotent from the caller's point of view.
    pub fn mark_read(&mut self, id: Uuid) -> bool {
        match self.unread.iter_mut().find(|r| r.id == id) {
            Some(reward) => {
                reward.is_read = true;
                true
            }
            None => {
                warn!(%id, "mark_read ignored: no such unread reward");
                false
            }
        }
    }

    /// Move every read entry from the unread queue into the archive,
    /// preserving order on both sides. Returns how many moved; calling
    /// again without an intervening `mark_read` moves nothing.
    pub fn claim_read(&mut self) -> usize {
        let mut kept = Vec::with_capacity(self.unread.len());
        let mut moved = 0;
        for reward in self.unread.drain(..) {
            if reward.is_read {
                self.archive.push(reward);
                moved += 1;
            } else {
                kept.push(reward);
            }
        }
        self.unread = kept;
        moved
    }

    /// Oldest undisplayed reward, if any.
    pub fn peek_next(&self) -> Option<&Reward> {
        self.unread.first()
    }

    pub fn unread_count(&self) -> usize {
        self.unread.len()
    }

    pub fn unread(&self) -> &[Reward] {
        &self.unread
    }

    /// All claimed rewards, oldest first.
    pub fn archive(&self) -> &[Reward] {
        &self.archive
    }

    /// Unread + archive. Monotonically non-decreasing.
    pub fn total_count(&self) -> usize {
        self.unread.len() + self.archive.len()
    }
}
