//! Probabilistic reward drops tied to the session lifecycle.
//!
//! Three triggers, with deliberately asymmetric behavior:
//!
//! - session start: p = 0.9, tip pool only
//! - periodic check (every 5 minutes of active ticking): p = 0.3, tip pool
//! - session end: p = 1.0, full weighted pool (0.7 physical / 0.3 tip),
//!   uniform within the chosen pool
//!
//! The scheduler owns no session state beyond "is the periodic check
//! armed". Armed state and the cadence counter live in a single `Option`,
//! set on start/resume and taken on pause/end, so arming and cancelling
//! can never be observed half-done. Only one session is ever active at a
//! time (the controller enforces that), so draws are naturally serialized;
//! a multi-session redesign would have to revisit this.

use rand::prelude::*;
use rand_pcg::Mcg128Xsl64;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::catalog::{CatalogEntry, PRIZES, TIPS};
use super::RewardInbox;
use crate::error::ValidationError;
use crate::events::Event;

/// Seconds of active session time between periodic reward checks.
pub const CHECK_PERIOD_SECS: u64 = 300;

/// What prompted a draw attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DrawTrigger {
    SessionStart,
    PeriodicCheck,
    SessionEnd,
}

/// Per-trigger draw probabilities and the end-of-session pool weight.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct DrawPolicy {
    /// Chance of a tip drop when a session starts.
    pub start_probability: f64,
    /// Chance of a tip drop on each periodic check.
    pub periodic_probability: f64,
    /// Weight of the physical-prize pool in the end-of-session draw;
    /// the tip pool gets the remainder.
    pub physical_weight: f64,
    /// Active seconds between periodic checks.
    pub check_period_secs: u64,
}

impl Default for DrawPolicy {
    fn default() -> Self {
        Self {
            start_probability: 0.9,
            periodic_probability: 0.3,
            physical_weight: 0.7,
            check_period_secs: CHECK_PERIOD_SECS,
        }
    }
}

impl DrawPolicy {
    pub fn validate(&self) -> Result<(), ValidationError> {
        for (field, value) in [
            ("start_probability", self.start_probability),
            ("periodic_probability", self.periodic_probability),
            ("physical_weight", self.physical_weight),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ValidationError::InvalidValue {
                    field: field.to_string(),
                    message: format!("{value} is outside 0.0..=1.0"),
                });
            }
        }
        if self.check_period_secs == 0 {
            return Err(ValidationError::InvalidValue {
                field: "check_period_secs".to_string(),
                message: "period must be at least one second".to_string(),
            });
        }
        Ok(())
    }
}

/// Cadence state for the 5-minute check. Present iff the check is armed;
/// the counter restarts from zero on every arm (start and resume alike).
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
struct PeriodicCheck {
    secs_since_check: u64,
}

/// Draws rewards in response to session lifecycle events and periodic
/// checks, appending them to the inbox. Never mutates session state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RewardScheduler {
    policy: DrawPolicy,
    periodic: Option<PeriodicCheck>,
    /// Not persisted; a restored scheduler draws from fresh entropy.
    #[serde(skip, default = "entropy_rng")]
    rng: Mcg128Xsl64,
}

fn entropy_rng() -> Mcg128Xsl64 {
    Mcg128Xsl64::from_entropy()
}

impl RewardScheduler {
    pub fn new(policy: DrawPolicy) -> Self {
        Self {
            policy,
            periodic: None,
            rng: entropy_rng(),
        }
    }

    /// Deterministic scheduler for tests and replays.
    pub fn with_seed(policy: DrawPolicy, seed: u64) -> Self {
        Self {
            policy,
            periodic: None,
            rng: Mcg128Xsl64::seed_from_u64(seed),
        }
    }

    pub fn policy(&self) -> &DrawPolicy {
        &self.policy
    }

    /// Whether the periodic check is currently armed. Mirrors the session's
    /// Active state exactly.
    pub fn is_armed(&self) -> bool {
        self.periodic.is_some()
    }

    /// Consume a session lifecycle event: arm/disarm the periodic check and
    /// perform the start/end draws. Returns the drop event, if any.
    pub fn handle(&mut self, event: &Event, inbox: &mut RewardInbox) -> Option<Event> {
        match event {
            Event::SessionStarted { .. } => {
                self.periodic = Some(PeriodicCheck::default());
                self.draw(DrawTrigger::SessionStart, inbox)
            }
            Event::SessionResumed { .. } => {
                self.periodic = Some(PeriodicCheck::default());
                None
            }
            Event::SessionPaused { .. } => {
                self.periodic = None;
                None
            }
            Event::SessionEnded { .. } => {
                self.periodic = None;
                self.draw(DrawTrigger::SessionEnd, inbox)
            }
            _ => None,
        }
    }

    /// Advance the periodic cadence by one active second. Fires a check
    /// draw each time the period elapses; a disarmed scheduler ignores
    /// ticks entirely.
    pub fn tick(&mut self, inbox: &mut RewardInbox) -> Option<Event> {
        let check = self.periodic.as_mut()?;
        check.secs_since_check += 1;
        if check.secs_since_check < self.policy.check_period_secs {
            return None;
        }
        check.secs_since_check = 0;
        self.draw(DrawTrigger::PeriodicCheck, inbox)
    }

    /// One draw attempt: weighted coin flip for the trigger probability,
    /// pool choice, then uniform selection within the pool.
    fn draw(&mut self, trigger: DrawTrigger, inbox: &mut RewardInbox) -> Option<Event> {
        let probability = match trigger {
            DrawTrigger::SessionStart => self.policy.start_probability,
            DrawTrigger::PeriodicCheck => self.policy.periodic_probability,
            DrawTrigger::SessionEnd => 1.0,
        };
        if self.rng.gen::<f64>() >= probability {
            return None;
        }

        // Start and periodic triggers draw from the tip pool only; the end
        // trigger uses the full weighted pool.
        let pool: &[CatalogEntry] = match trigger {
            DrawTrigger::SessionStart | DrawTrigger::PeriodicCheck => TIPS,
            DrawTrigger::SessionEnd => {
                if self.rng.gen::<f64>() < self.policy.physical_weight {
                    PRIZES
                } else {
                    TIPS
                }
            }
        };
        let reward = pool.choose(&mut self.rng)?.instantiate();
        debug!(?trigger, kind = ?reward.kind, title = %reward.title, "reward dropped");
        let event = Event::RewardDropped {
            reward_id: reward.id,
            kind: reward.kind,
            trigger,
            at: reward.created_at,
        };
        inbox.append(reward);
        Some(event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reward::RewardKind;
    use chrono::Utc;

    fn started() -> Event {
        Event::SessionStarted {
            target_id: "cursor".into(),
            at: Utc::now(),
        }
    }

    fn ended() -> Event {
        Event::SessionEnded { at: Utc::now() }
    }

    fn policy(start: f64, periodic: f64) -> DrawPolicy {
        DrawPolicy {
            start_probability: start,
            periodic_probability: periodic,
            ..DrawPolicy::default()
        }
    }

    #[test]
    fn end_always_drops_exactly_one() {
        let mut scheduler = RewardScheduler::with_seed(DrawPolicy::default(), 7);
        let mut inbox = RewardInbox::new();
        for i in 0..50 {
            scheduler.handle(&started(), &mut inbox);
            let before = inbox.total_count();
            let event = scheduler.handle(&ended(), &mut inbox);
            assert!(matches!(event, Some(Event::RewardDropped { .. })));
            assert_eq!(inbox.total_count(), before + 1, "iteration {i}");
        }
    }

    #[test]
    fn start_and_periodic_draw_tips_only() {
        let mut scheduler = RewardScheduler::with_seed(policy(1.0, 1.0), 11);
        let mut inbox = RewardInbox::new();
        scheduler.handle(&started(), &mut inbox);
        for _ in 0..CHECK_PERIOD_SECS * 3 {
            scheduler.tick(&mut inbox);
        }
        assert!(inbox.unread().iter().all(|r| r.kind == RewardKind::Tip));
        // 1 start drop + 3 periodic drops at p = 1.0.
        assert_eq!(inbox.unread_count(), 4);
    }

    #[test]
    fn periodic_check_fires_on_the_period_boundary() {
        let mut scheduler = RewardScheduler::with_seed(policy(0.0, 1.0), 3);
        let mut inbox = RewardInbox::new();
        scheduler.handle(&started(), &mut inbox);
        assert_eq!(inbox.unread_count(), 0);

        for _ in 0..CHECK_PERIOD_SECS - 1 {
            assert!(scheduler.tick(&mut inbox).is_none());
        }
        assert!(scheduler.tick(&mut inbox).is_some());
        assert_eq!(inbox.unread_count(), 1);
    }

    #[test]
    fn cadence_restarts_on_resume() {
        let mut scheduler = RewardScheduler::with_seed(policy(0.0, 1.0), 3);
        let mut inbox = RewardInbox::new();
        scheduler.handle(&started(), &mut inbox);
        for _ in 0..CHECK_PERIOD_SECS - 1 {
            scheduler.tick(&mut inbox);
        }
        // Pause one second short of the boundary, then resume: the counter
        // starts over, so the next check is a full period away.
        scheduler.handle(
            &Event::SessionPaused {
                elapsed_secs: 299,
                at: Utc::now(),
            },
            &mut inbox,
        );
        assert!(!scheduler.is_armed());
        scheduler.handle(
            &Event::SessionResumed {
                elapsed_secs: 299,
                at: Utc::now(),
            },
            &mut inbox,
        );
        for _ in 0..CHECK_PERIOD_SECS - 1 {
            assert!(scheduler.tick(&mut inbox).is_none());
        }
        assert!(scheduler.tick(&mut inbox).is_some());
    }

    #[test]
    fn disarmed_scheduler_ignores_ticks() {
        let mut scheduler = RewardScheduler::with_seed(policy(0.0, 1.0), 3);
        let mut inbox = RewardInbox::new();
        for _ in 0..CHECK_PERIOD_SECS * 2 {
            assert!(scheduler.tick(&mut inbox).is_none());
        }
        assert_eq!(inbox.unread_count(), 0);
    }

    #[test]
    fn start_rate_converges_to_policy() {
        let mut scheduler = RewardScheduler::with_seed(DrawPolicy::default(), 42);
        let mut inbox = RewardInbox::new();
        let trials = 10_000;
        for _ in 0..trials {
            scheduler.handle(&started(), &mut inbox);
            // Disarm without the end draw.
            scheduler.handle(
                &Event::SessionPaused {
                    elapsed_secs: 0,
                    at: Utc::now(),
                },
                &mut inbox,
            );
        }
        let rate = inbox.total_count() as f64 / trials as f64;
        assert!((rate - 0.9).abs() < 0.02, "start rate {rate}");
    }

    #[test]
    fn periodic_rate_converges_to_policy() {
        let mut scheduler = RewardScheduler::with_seed(
            DrawPolicy {
                start_probability: 0.0,
                ..DrawPolicy::default()
            },
            42,
        );
        let mut inbox = RewardInbox::new();
        scheduler.handle(&started(), &mut inbox);
        let trials = 10_000u64;
        for _ in 0..trials * CHECK_PERIOD_SECS {
            scheduler.tick(&mut inbox);
        }
        let rate = inbox.total_count() as f64 / trials as f64;
        assert!((rate - 0.3).abs() < 0.02, "periodic rate {rate}");
    }

    #[test]
    fn end_pool_weight_converges_to_policy() {
        let mut scheduler = RewardScheduler::with_seed(
            DrawPolicy {
                start_probability: 0.0,
                ..DrawPolicy::default()
            },
            42,
        );
        let mut inbox = RewardInbox::new();
        let trials = 10_000;
        for _ in 0..trials {
            scheduler.handle(&started(), &mut inbox);
            scheduler.handle(&ended(), &mut inbox);
        }
        let physical = inbox
            .unread()
            .iter()
            .filter(|r| r.kind == RewardKind::PhysicalPrize)
            .count();
        let rate = physical as f64 / trials as f64;
        assert!((rate - 0.7).abs() < 0.02, "physical share {rate}");
    }

    #[test]
    fn policy_validation() {
        assert!(DrawPolicy::default().validate().is_ok());
        let bad = DrawPolicy {
            start_probability: 1.5,
            ..DrawPolicy::default()
        };
        assert!(bad.validate().is_err());
        let zero_period = DrawPolicy {
            check_period_secs: 0,
            ..DrawPolicy::default()
        };
        assert!(zero_period.validate().is_err());
    }
}
