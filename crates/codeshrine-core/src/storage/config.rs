//! TOML-based application settings.
//!
//! Stored at `~/.config/codeshrine/config.toml`. Every field has a serde
//! default so old or partial files keep loading as the schema grows.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use super::config_dir;
use crate::error::{ConfigError, ValidationError};
use crate::reward::{DrawPolicy, CHECK_PERIOD_SECS};

/// Reward draw-policy overrides.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RewardSettings {
    #[serde(default = "default_start_probability")]
    pub start_probability: f64,
    #[serde(default = "default_periodic_probability")]
    pub periodic_probability: f64,
    #[serde(default = "default_physical_weight")]
    pub physical_weight: f64,
    #[serde(default = "default_check_period_secs")]
    pub check_period_secs: u64,
}

impl Default for RewardSettings {
    fn default() -> Self {
        Self {
            start_probability: default_start_probability(),
            periodic_probability: default_periodic_probability(),
            physical_weight: default_physical_weight(),
            check_period_secs: default_check_period_secs(),
        }
    }
}

impl RewardSettings {
    /// Validated draw policy for the scheduler.
    pub fn draw_policy(&self) -> Result<DrawPolicy, ValidationError> {
        let policy = DrawPolicy {
            start_probability: self.start_probability,
            periodic_probability: self.periodic_probability,
            physical_weight: self.physical_weight,
            check_period_secs: self.check_period_secs,
        };
        policy.validate()?;
        Ok(policy)
    }
}

fn default_start_probability() -> f64 {
    0.9
}

fn default_periodic_probability() -> f64 {
    0.3
}

fn default_physical_weight() -> f64 {
    0.7
}

fn default_check_period_secs() -> u64 {
    CHECK_PERIOD_SECS
}

/// Application settings.
///
/// Serialized to/from TOML at `~/.config/codeshrine/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    /// Written once, the first time a session is started.
    #[serde(default)]
    pub onboarding_completed: bool,
    #[serde(default)]
    pub rewards: RewardSettings,
}

impl Settings {
    pub fn path() -> Result<PathBuf, ConfigError> {
        Ok(config_dir()?.join("config.toml"))
    }

    /// Load settings; a missing file yields the defaults.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = std::fs::read_to_string(path).map_err(|e| ConfigError::LoadFailed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        toml::from_str(&raw).map_err(|e| ConfigError::ParseFailed(e.to_string()))
    }

    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&Self::path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let save_err = |e: std::io::Error| ConfigError::SaveFailed {
            path: path.to_path_buf(),
            message: e.to_string(),
        };
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(save_err)?;
        }
        let raw = toml::to_string_pretty(self).map_err(|e| ConfigError::SaveFailed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        std::fs::write(path, raw).map_err(save_err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_shipped_policy() {
        let settings = Settings::default();
        assert!(!settings.onboarding_completed);
        let policy = settings.rewards.draw_policy().unwrap();
        assert_eq!(policy.start_probability, 0.9);
        assert_eq!(policy.periodic_probability, 0.3);
        assert_eq!(policy.physical_weight, 0.7);
        assert_eq!(policy.check_period_secs, 300);
    }

    #[test]
    fn partial_toml_fills_in_defaults() {
        let settings: Settings = toml::from_str("onboarding_completed = true").unwrap();
        assert!(settings.onboarding_completed);
        assert_eq!(settings.rewards.periodic_probability, 0.3);
    }

    #[test]
    fn out_of_range_override_is_rejected() {
        let settings: Settings = toml::from_str(
            "[rewards]\nphysical_weight = 1.7\n",
        )
        .unwrap();
        assert!(settings.rewards.draw_policy().is_err());
    }
}
