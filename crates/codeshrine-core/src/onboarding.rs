//! First-run onboarding flow.
//!
//! Three steps: a welcome hint, a "light the candle" hint once a target is
//! on the shrine, then done. Completion is the single piece of state that
//! persists across launches (a boolean in the settings file); everything
//! else here is per-process.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OnboardingStep {
    /// First launch: explain the two-step ritual.
    Welcome,
    /// Target chosen: prompt to start the session.
    TargetSelected,
    /// Normal operation.
    Completed,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Onboarding {
    step: OnboardingStep,
}

impl Onboarding {
    /// `completed` comes from the persisted flag at startup.
    pub fn new(completed: bool) -> Self {
        Self {
            step: if completed {
                OnboardingStep::Completed
            } else {
                OnboardingStep::Welcome
            },
        }
    }

    pub fn step(&self) -> OnboardingStep {
        self.step
    }

    pub fn is_complete(&self) -> bool {
        self.step == OnboardingStep::Completed
    }

    /// Move to the next step. Terminal once completed.
    pub fn advance(&mut self) {
        self.step = match self.step {
            OnboardingStep::Welcome => OnboardingStep::TargetSelected,
            OnboardingStep::TargetSelected | OnboardingStep::Completed => {
                OnboardingStep::Completed
            }
        };
    }

    pub fn complete(&mut self) {
        self.step = OnboardingStep::Completed;
    }
}
