//! # Codeshrine Core Library
//!
//! Core business logic for Codeshrine, a menu-bar focus/prayer timer that
//! rewards finished (and sometimes merely started) sessions with randomly
//! drawn content. The library follows a CLI-first philosophy: every
//! operation is available through a standalone CLI binary, and any GUI is a
//! thin presentation layer over the same core.
//!
//! ## Architecture
//!
//! - **Session controller**: a tick-driven state machine (Idle -> Active ->
//!   Paused -> Idle). It has no internal threads - the host scheduler calls
//!   `tick()` once per second while a session runs.
//! - **Reward scheduler**: listens to session lifecycle events and performs
//!   weighted-random reward draws at start, every five minutes, and at end.
//! - **Reward inbox**: the unread queue plus the historical archive the
//!   presentation layer reads.
//! - **Storage**: TOML-based settings (onboarding flag, draw-policy
//!   overrides).
//!
//! ## Key Components
//!
//! - [`Shrine`]: the dependency-injected aggregate tying the pieces together
//! - [`SessionController`]: session lifecycle state machine
//! - [`RewardScheduler`]: probabilistic reward drops
//! - [`RewardInbox`]: unread queue and archive

pub mod error;
pub mod events;
pub mod onboarding;
pub mod reward;
pub mod runtime;
pub mod session;
pub mod storage;
pub mod target;
pub mod view;

pub use error::{ConfigError, CoreError, ValidationError};
pub use events::Event;
pub use onboarding::{Onboarding, OnboardingStep};
pub use reward::{DrawPolicy, DrawTrigger, Reward, RewardInbox, RewardKind, RewardScheduler};
pub use runtime::Shrine;
pub use session::{SessionController, SessionState, TickToken};
pub use storage::Settings;
pub use target::{Target, TargetCategory};
pub use view::ViewState;
