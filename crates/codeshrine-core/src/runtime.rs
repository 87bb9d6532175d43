//! The `Shrine` aggregate: explicitly owned application state.
//!
//! Replaces the original app's ambient global state object with one
//! dependency-injected value that wires the session controller, reward
//! scheduler and inbox together. The host scheduler drives a single
//! [`Shrine::tick`] entry point once per second; the elapsed counter and
//! the periodic reward check are re-armed and cancelled together on every
//! state transition, so the two timers cannot drift apart from the
//! session state.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ValidationError;
use crate::events::Event;
use crate::onboarding::{Onboarding, OnboardingStep};
use crate::reward::{DrawPolicy, RewardInbox, RewardScheduler};
use crate::session::{SessionController, TickToken};
use crate::storage::Settings;
use crate::target::Target;
use crate::view::ViewState;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Shrine {
    session: SessionController,
    scheduler: RewardScheduler,
    inbox: RewardInbox,
    view: ViewState,
    onboarding: Onboarding,
    /// Live tick token while a session is Active; `None` otherwise.
    /// Set and cleared in the same places the scheduler is armed/disarmed.
    timer: Option<TickToken>,
}

impl Shrine {
    pub fn new(policy: DrawPolicy, onboarding_completed: bool) -> Self {
        Self::build(RewardScheduler::new(policy), onboarding_completed)
    }

    /// Deterministic draws for tests and replays.
    pub fn with_seed(policy: DrawPolicy, onboarding_completed: bool, seed: u64) -> Self {
        Self::build(RewardScheduler::with_seed(policy, seed), onboarding_completed)
    }

    pub fn from_settings(settings: &Settings) -> Result<Self, ValidationError> {
        Ok(Self::new(
            settings.rewards.draw_policy()?,
            settings.onboarding_completed,
        ))
    }

    fn build(scheduler: RewardScheduler, onboarding_completed: bool) -> Self {
        Self {
            session: SessionController::new(),
            scheduler,
            inbox: RewardInbox::new(),
            view: ViewState::default(),
            onboarding: Onboarding::new(onboarding_completed),
            timer: None,
        }
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Place a target on the shrine. Advances a first-run user past the
    /// welcome hint.
    pub fn select_target(&mut self, target: Target) -> Vec<Event> {
        let Some(event) = self.session.select_target(target) else {
            return Vec::new();
        };
        if self.onboarding.step() == OnboardingStep::Welcome {
            self.onboarding.advance();
        }
        vec![event]
    }

    pub fn start(&mut self) -> Vec<Event> {
        let Some(event) = self.session.start() else {
            return Vec::new();
        };
        self.timer = Some(self.session.tick_token());
        if !self.onboarding.is_complete() {
            self.onboarding.complete();
        }
        self.collect(event)
    }

    pub fn pause(&mut self) -> Vec<Event> {
        let Some(event) = self.session.pause() else {
            return Vec::new();
        };
        self.timer = None;
        self.collect(event)
    }

    pub fn resume(&mut self) -> Vec<Event> {
        let Some(event) = self.session.resume() else {
            return Vec::new();
        };
        self.timer = Some(self.session.tick_token());
        self.collect(event)
    }

    pub fn end(&mut self) -> Vec<Event> {
        let Some(event) = self.session.end() else {
            return Vec::new();
        };
        self.timer = None;
        self.collect(event)
    }

    /// One whole second of host time. No-op unless a session is Active
    /// with a live token.
    pub fn tick(&mut self) -> Vec<Event> {
        let Some(token) = self.timer else {
            return Vec::new();
        };
        if !self.session.tick(token) {
            return Vec::new();
        }
        self.scheduler.tick(&mut self.inbox).into_iter().collect()
    }

    pub fn mark_reward_read(&mut self, id: Uuid) -> bool {
        self.inbox.mark_read(id)
    }

    pub fn claim_read_rewards(&mut self) -> usize {
        self.inbox.claim_read()
    }

    pub fn set_view(&mut self, view: ViewState) {
        self.view = view;
    }

    /// Run the lifecycle event through the scheduler and return the event
    /// plus any reward drop, in that order.
    fn collect(&mut self, event: Event) -> Vec<Event> {
        let drop = self.scheduler.handle(&event, &mut self.inbox);
        let mut events = vec![event];
        events.extend(drop);
        events
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn session(&self) -> &SessionController {
        &self.session
    }

    pub fn inbox(&self) -> &RewardInbox {
        &self.inbox
    }

    pub fn view(&self) -> ViewState {
        self.view
    }

    pub fn onboarding(&self) -> &Onboarding {
        &self.onboarding
    }

    pub fn snapshot(&self) -> Event {
        Event::Snapshot {
            state: self.session.state(),
            elapsed_secs: self.session.elapsed_secs(),
            completed_today: self.session.completed_today(),
            target_id: self.session.target().map(|t| t.id.clone()),
            unread_count: self.inbox.unread_count(),
            archive_count: self.inbox.archive().len(),
            at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reward::{DrawTrigger, RewardKind, CHECK_PERIOD_SECS};
    use crate::session::SessionState;

    fn deterministic(start_p: f64, periodic_p: f64) -> Shrine {
        let policy = DrawPolicy {
            start_probability: start_p,
            periodic_probability: periodic_p,
            ..DrawPolicy::default()
        };
        Shrine::with_seed(policy, true, 99)
    }

    #[test]
    fn full_session_scenario() {
        let mut shrine = deterministic(1.0, 1.0);
        shrine.select_target(Target::preset("cursor").unwrap());
        let events = shrine.start();
        assert!(matches!(events[0], Event::SessionStarted { .. }));
        assert!(matches!(
            events[1],
            Event::RewardDropped {
                trigger: DrawTrigger::SessionStart,
                kind: RewardKind::Tip,
                ..
            }
        ));
        assert_eq!(shrine.session().state(), SessionState::Active);
        assert_eq!(shrine.session().elapsed_secs(), 0);

        // Five simulated minutes: the periodic check fires exactly once.
        let mut periodic_drops = 0;
        for _ in 0..CHECK_PERIOD_SECS {
            periodic_drops += shrine.tick().len();
        }
        assert_eq!(periodic_drops, 1);
        assert_eq!(shrine.session().elapsed_secs(), CHECK_PERIOD_SECS);

        let events = shrine.end();
        assert!(matches!(events[0], Event::SessionEnded { .. }));
        assert!(matches!(
            events[1],
            Event::RewardDropped {
                trigger: DrawTrigger::SessionEnd,
                ..
            }
        ));
        assert_eq!(shrine.session().state(), SessionState::Idle);
        assert_eq!(shrine.session().elapsed_secs(), 0);
        assert_eq!(shrine.session().completed_today(), 1);
        assert_eq!(shrine.inbox().unread_count(), 3);
    }

    #[test]
    fn ticks_are_inert_outside_active() {
        let mut shrine = deterministic(0.0, 1.0);
        assert!(shrine.tick().is_empty());

        shrine.select_target(Target::preset("kiro").unwrap());
        shrine.start();
        shrine.tick();
        shrine.pause();
        for _ in 0..CHECK_PERIOD_SECS * 2 {
            assert!(shrine.tick().is_empty());
        }
        assert_eq!(shrine.session().elapsed_secs(), 1);

        shrine.resume();
        shrine.tick();
        assert_eq!(shrine.session().elapsed_secs(), 2);

        shrine.end();
        assert!(shrine.tick().is_empty());
    }

    #[test]
    fn end_without_session_drops_nothing() {
        let mut shrine = deterministic(1.0, 1.0);
        assert!(shrine.end().is_empty());
        assert_eq!(shrine.inbox().total_count(), 0);
    }

    #[test]
    fn onboarding_completes_on_first_start() {
        let mut shrine = Shrine::with_seed(DrawPolicy::default(), false, 1);
        assert_eq!(shrine.onboarding().step(), OnboardingStep::Welcome);
        shrine.select_target(Target::preset("gemini").unwrap());
        assert_eq!(shrine.onboarding().step(), OnboardingStep::TargetSelected);
        shrine.start();
        assert!(shrine.onboarding().is_complete());
    }

    #[test]
    fn read_and_claim_flow() {
        let mut shrine = deterministic(1.0, 0.0);
        shrine.select_target(Target::preset("trae").unwrap());
        shrine.start();
        shrine.end();
        assert_eq!(shrine.inbox().unread_count(), 2);

        let ids: Vec<Uuid> = shrine.inbox().unread().iter().map(|r| r.id).collect();
        for id in &ids {
            assert!(shrine.mark_reward_read(*id));
        }
        assert_eq!(shrine.claim_read_rewards(), 2);
        assert_eq!(shrine.inbox().unread_count(), 0);
        assert_eq!(shrine.inbox().archive().len(), 2);
        // Unknown id stays a no-op.
        assert!(!shrine.mark_reward_read(Uuid::new_v4()));
    }

    #[test]
    fn snapshot_reflects_state() {
        let mut shrine = deterministic(0.0, 0.0);
        shrine.select_target(Target::preset("lovable").unwrap());
        shrine.start();
        shrine.tick();
        match shrine.snapshot() {
            Event::Snapshot {
                state,
                elapsed_secs,
                completed_today,
                target_id,
                unread_count,
                ..
            } => {
                assert_eq!(state, SessionState::Active);
                assert_eq!(elapsed_secs, 1);
                assert_eq!(completed_today, 0);
                assert_eq!(target_id.as_deref(), Some("lovable"));
                assert_eq!(unread_count, 0);
            }
            other => panic!("expected Snapshot, got {other:?}"),
        }
    }
}
