//! Session targets: the user-chosen subject of a focus session.
//!
//! Ships a preset catalog of AI coding tools; custom targets are plain
//! values built by the presentation layer. The selection grid shows eight
//! targets per page (two rows of four).

use serde::{Deserialize, Serialize};

/// Targets per selection-grid page.
pub const PAGE_SIZE: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetCategory {
    App,
    Person,
    Custom,
}

/// The subject of a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Target {
    pub id: String,
    pub name: String,
    pub icon: String,
    pub category: TargetCategory,
}

impl Target {
    fn app(id: &str, name: &str, icon: &str) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            icon: icon.into(),
            category: TargetCategory::App,
        }
    }

    /// The built-in target catalog.
    pub fn presets() -> Vec<Target> {
        vec![
            Target::app("lovable", "Lovable", "Lovable_icon"),
            Target::app("cursor", "Cursor", "Cursor_icon"),
            Target::app("trae", "Trae", "Trae_icon"),
            Target::app("kiro", "Kiro", "kiro_icon"),
            Target::app("github_copilot", "GitHub Copilot", "GithubCopilot_icon"),
            Target::app("perplexity", "Perplexity", "Perplexity_icon"),
            Target::app("gemini", "Gemini", "Gemini_icon"),
            Target::app("gpt5", "Codex", "GPT5_icon"),
            Target::app("claude_code", "Claude Code", "ClaudeCode_icon"),
        ]
    }

    /// Look up a preset by id.
    pub fn preset(id: &str) -> Option<Target> {
        Target::presets().into_iter().find(|t| t.id == id)
    }

    /// One page of the preset catalog, [`PAGE_SIZE`] entries per page.
    /// Out-of-range pages are empty.
    pub fn page(index: usize) -> Vec<Target> {
        let presets = Target::presets();
        presets
            .into_iter()
            .skip(index * PAGE_SIZE)
            .take(PAGE_SIZE)
            .collect()
    }

    /// Number of pages in the preset catalog.
    pub fn page_count() -> usize {
        Target::presets().len().div_ceil(PAGE_SIZE)
    }
}
