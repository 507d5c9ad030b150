//! Timer commands.
//!
//! The session is persisted between invocations, so `tick` advances it by
//! whole seconds on demand. `run` owns a real one-second interval and keeps
//! going until the session goes idle with nothing queued, or Ctrl-C.

use std::time::Duration;

use clap::Subcommand;
use tracing::info;
use wheelwork_core::{Event, SessionState};

use super::{print_events, print_json, CliResult, Context};

#[derive(Subcommand)]
pub enum TimerAction {
    /// Start the head of the queue, or resume a paused session
    Start,
    /// Pause the running session
    Pause,
    /// Abandon the current task and move to the next one
    Skip,
    /// Reset to idle state
    Reset,
    /// Print current session state as JSON
    Status,
    /// Deliver one-second ticks from the live interval
    Tick {
        #[arg(long, default_value_t = 1)]
        count: u64,
    },
    /// Drive the session in real time
    Run,
}

pub fn run(action: TimerAction) -> CliResult {
    let mut ctx = Context::open()?;

    match action {
        TimerAction::Start => {
            let events = ctx.session.start();
            print_events(&ctx.session, events)?;
        }
        TimerAction::Pause => {
            let events = ctx.session.pause();
            print_events(&ctx.session, events)?;
        }
        TimerAction::Skip => {
            let events = ctx.session.skip();
            print_events(&ctx.session, events)?;
        }
        TimerAction::Reset => {
            let events = ctx.session.reset();
            print_events(&ctx.session, events)?;
        }
        TimerAction::Status => {
            print_json(&ctx.session.snapshot())?;
        }
        TimerAction::Tick { count } => {
            let mut events = Vec::new();
            for _ in 0..count {
                let Some(id) = ctx.session.interval() else {
                    break;
                };
                events.extend(ctx.session.tick(id, &mut ctx.store));
            }
            print_events(&ctx.session, events)?;
        }
        TimerAction::Run => {
            let runtime = tokio::runtime::Runtime::new()?;
            runtime.block_on(run_live(&mut ctx))?;
        }
    }

    ctx.save()?;
    Ok(())
}

async fn run_live(ctx: &mut Context) -> CliResult {
    if ctx.session.state() == SessionState::Idle {
        let events = ctx.session.start();
        print_events(&ctx.session, events)?;
    }

    let mut interval = tokio::time::interval(Duration::from_secs(1));
    // The first tick of a tokio interval fires immediately.
    interval.tick().await;

    loop {
        tokio::select! {
            _ = interval.tick() => {
                let Some(id) = ctx.session.interval() else {
                    info!("no live interval, leaving run loop");
                    break;
                };
                let events = ctx.session.tick(id, &mut ctx.store);
                if !events.is_empty() {
                    print_events(&ctx.session, events.clone())?;
                    ctx.save()?;
                }
                if events.iter().any(|e| matches!(e, Event::CompletionFailed { .. })) {
                    break;
                }
            }
            _ = tokio::signal::ctrl_c() => {
                let events = ctx.session.pause();
                print_events(&ctx.session, events)?;
                break;
            }
        }
    }
    Ok(())
}
