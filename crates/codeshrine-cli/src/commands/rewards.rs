use clap::Subcommand;
use codeshrine_core::Reward;
use uuid::Uuid;

use super::print_events;
use crate::store;

#[derive(Subcommand)]
pub enum RewardsAction {
    /// List the unread queue, oldest first
    List,
    /// Print the oldest unread reward
    Next,
    /// Mark an unread reward as read
    Read {
        /// Reward id from `rewards list`
        id: Uuid,
    },
    /// Move every read reward into the archive
    Claim,
    /// List the archive, newest first
    History,
}

pub fn run(action: RewardsAction) -> Result<(), Box<dyn std::error::Error>> {
    let mut state = store::load()?;
    print_events(&store::catch_up(&mut state))?;

    match action {
        RewardsAction::List => {
            println!("{}", serde_json::to_string_pretty(state.shrine.inbox().unread())?);
        }
        RewardsAction::Next => match state.shrine.inbox().peek_next() {
            Some(reward) => println!("{}", serde_json::to_string_pretty(reward)?),
            None => println!("null"),
        },
        RewardsAction::Read { id } => {
            let found = state.shrine.mark_reward_read(id);
            println!("{{\"type\": \"reward_read\", \"found\": {found}}}");
        }
        RewardsAction::Claim => {
            let moved = state.shrine.claim_read_rewards();
            println!("{{\"type\": \"rewards_claimed\", \"count\": {moved}}}");
        }
        RewardsAction::History => {
            let newest_first: Vec<&Reward> =
                state.shrine.inbox().archive().iter().rev().collect();
            println!("{}", serde_json::to_string_pretty(&newest_first)?);
        }
    }

    store::save(&state)?;
    Ok(())
}
