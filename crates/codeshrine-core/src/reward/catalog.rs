//! Static reward content tables.
//!
//! Two fixed pools: text-only AI coding tips and physical prizes with
//! artwork. These are seed data, not generated content; a draw instantiates
//! a fresh [`Reward`] from one entry with a new id and timestamp.

use chrono::Utc;
use uuid::Uuid;

use super::{Reward, RewardKind};

/// One row of a content table.
pub struct CatalogEntry {
    pub kind: RewardKind,
    pub title: &'static str,
    pub body: &'static str,
    pub image: Option<&'static str>,
}

impl CatalogEntry {
    /// Mint a fresh, unread reward from this entry.
    pub fn instantiate(&self) -> Reward {
        Reward {
            id: Uuid::new_v4(),
            kind: self.kind,
            title: self.title.to_string(),
            body: self.body.to_string(),
            image: self.image.map(str::to_string),
            created_at: Utc::now(),
            is_read: false,
        }
    }
}

const fn tip(title: &'static str, body: &'static str) -> CatalogEntry {
    CatalogEntry {
        kind: RewardKind::Tip,
        title,
        body,
        image: None,
    }
}

const fn prize(title: &'static str, body: &'static str, image: &'static str) -> CatalogEntry {
    CatalogEntry {
        kind: RewardKind::PhysicalPrize,
        title,
        body,
        image: Some(image),
    }
}

/// AI coding tip pool. Drawn at session start and on periodic checks.
pub const TIPS: &[CatalogEntry] = &[
    tip(
        "Cursor Completion Shortcuts",
        "Tab accepts the AI suggestion, Cmd+K opens the inline chat, and @ pulls a \
         specific file into context. Clear comments in the surrounding code make the \
         completions noticeably more precise.",
    ),
    tip(
        "Prompt Engineering for Claude",
        "Use structured prompts: 'As [role], help me [task], with [constraints]'. \
         Split complex features into small steps and let the model implement them one \
         at a time - and keep the context window focused rather than overloaded.",
    ),
    tip(
        "AI-Assisted Debugging",
        "Paste the complete error stack together with the surrounding code context. \
         With both in hand the model can usually localize the fault and propose a fix \
         far faster than stepping through a debugger.",
    ),
    tip(
        "The Art of the Git Commit",
        "Each commit should be one complete logical unit; never mix unrelated changes. \
         A good message explains why, not just what. Rebase to keep the history clean \
         before sharing a branch.",
    ),
    tip(
        "SwiftUI Performance",
        "Prefer @StateObject over @ObservedObject to avoid needless view rebuilds: \
         @StateObject keeps the object alive when the parent view is recreated. Used \
         well, @State, @Binding and @Published keep the whole UI fluid.",
    ),
    tip(
        "Code Review Mastery",
        "Review architecture and logic first, details and formatting second. Offer \
         concrete improvements rather than bare objections - the point of review is \
         raising quality and skills, not scoring hits.",
    ),
    tip(
        "API Design Philosophy",
        "A good API is intuitive and hard to misuse: clear names, consistent shapes, \
         sensible defaults. Published APIs are nearly impossible to change, so spend \
         the design time up front.",
    ),
    tip(
        "Iterative AI Collaboration",
        "Work with the model in small, fast iterations: land the core behavior first, \
         then refine. Verifying each step keeps both the code quality and the schedule \
         under control.",
    ),
];

/// Physical prize pool. Only drawn from the full weighted pool at session end.
pub const PRIZES: &[CatalogEntry] = &[
    prize(
        "Crazy Thursday Host",
        "You have won hosting rights for Crazy Thursday! For one day you lead the \
         group chat into the weekly festivities - have your jokes and reaction images \
         ready.",
        "vibefriends",
    ),
    prize(
        "PPT.AI Pro Monthly Pass",
        "One month of PPT.AI professional membership: every premium template and AI \
         feature unlocked, for work reports and talks alike.",
        "pptai",
    ),
    prize(
        "ZenMux $20 Credit",
        "A $20 usage credit on the ZenMux platform, good for any of its digital tools \
         and services. Spend it where it multiplies.",
        "zenmux",
    ),
    prize(
        "Kiro Membership Month",
        "One month of Kiro platform membership with the full tool set unlocked - a \
         good excuse to explore a new workflow.",
        "kiro",
    ),
];
