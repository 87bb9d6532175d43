//! Session lifecycle: state machine, tick handling, display formatting.

mod controller;
pub mod format;

pub use controller::{SessionController, SessionState, TickToken};
