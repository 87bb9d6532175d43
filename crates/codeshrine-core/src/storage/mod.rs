//! Settings persistence.
//!
//! The core persists exactly one thing across launches - the onboarding
//! completion flag - plus optional draw-policy overrides, all in a TOML
//! file under the platform config directory.

mod config;

pub use config::{RewardSettings, Settings};

use std::path::PathBuf;

use crate::error::ConfigError;

/// Platform config directory for codeshrine (`~/.config/codeshrine` on
/// Linux). Created on demand by save paths, not here.
pub fn config_dir() -> Result<PathBuf, ConfigError> {
    dirs::config_dir()
        .map(|dir| dir.join("codeshrine"))
        .ok_or(ConfigError::NoConfigDir)
}
