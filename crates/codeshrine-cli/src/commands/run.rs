//! Live mode: keep the process alive and tick the shrine once per second.
//!
//! This is the host-scheduler role a GUI shell would otherwise play.
//! Reward drops stream to stdout as they happen; Ctrl+C (or `--seconds`)
//! stops the loop and saves the state.

use std::time::Duration;

use chrono::Utc;
use clap::Args;

use super::print_events;
use crate::store;

#[derive(Args)]
pub struct RunArgs {
    /// Stop after this many seconds instead of waiting for Ctrl+C
    #[arg(long)]
    seconds: Option<u64>,
}

pub fn run(args: RunArgs) -> Result<(), Box<dyn std::error::Error>> {
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(drive(args))
}

async fn drive(args: RunArgs) -> Result<(), Box<dyn std::error::Error>> {
    let mut state = store::load()?;
    print_events(&store::catch_up(&mut state))?;
    print_events(&[state.shrine.snapshot()])?;

    let mut interval = tokio::time::interval(Duration::from_secs(1));
    // The first interval tick completes immediately; consume it so every
    // later tick represents one whole second.
    interval.tick().await;

    let mut remaining = args.seconds;
    loop {
        tokio::select! {
            _ = interval.tick() => {
                print_events(&state.shrine.tick())?;
                state.last_tick = Utc::now();
                if let Some(left) = remaining.as_mut() {
                    *left = left.saturating_sub(1);
                    if *left == 0 {
                        break;
                    }
                }
            }
            _ = tokio::signal::ctrl_c() => break,
        }
    }

    print_events(&[state.shrine.snapshot()])?;
    store::save(&state)?;
    Ok(())
}
