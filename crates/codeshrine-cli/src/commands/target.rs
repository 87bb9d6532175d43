use clap::Subcommand;
use codeshrine_core::Target;

use super::print_events;
use crate::store;

#[derive(Subcommand)]
pub enum TargetAction {
    /// List the preset target catalog
    List {
        /// Show one 8-entry page instead of the whole catalog
        #[arg(long)]
        page: Option<usize>,
    },
    /// Place a preset target on the shrine
    Select {
        /// Preset id, e.g. "cursor" or "claude_code"
        id: String,
    },
}

pub fn run(action: TargetAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        TargetAction::List { page } => {
            let targets = match page {
                Some(index) => Target::page(index),
                None => Target::presets(),
            };
            println!("{}", serde_json::to_string_pretty(&targets)?);
        }
        TargetAction::Select { id } => {
            let target =
                Target::preset(&id).ok_or_else(|| format!("unknown target id '{id}'"))?;
            let mut state = store::load()?;
            print_events(&store::catch_up(&mut state))?;
            print_events(&state.shrine.select_target(target))?;
            store::save(&state)?;
        }
    }
    Ok(())
}
