//! View-state value read by the presentation layer.
//!
//! A plain tagged union - the core never branches on it, the host UI does.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewState {
    #[default]
    Main,
    RewardDetail,
    RewardHistory,
}
