use clap::Subcommand;
use wheelwork_core::TaskPool;

use super::{print_events, print_json, CliResult, Context};

#[derive(Subcommand)]
pub enum QueueAction {
    /// Print the queue, head first
    List,
    /// Empty the queue and stop the timer
    Clear,
    /// Pull a leisure task to the front of the queue
    Meal,
}

pub fn run(action: QueueAction) -> CliResult {
    let mut ctx = Context::open()?;

    match action {
        QueueAction::List => {
            let queue: Vec<_> = ctx.session.queue().iter().collect();
            print_json(&queue)?;
        }
        QueueAction::Clear => {
            let events = ctx.session.clear_queue();
            print_events(&ctx.session, events)?;
        }
        QueueAction::Meal => {
            let tasks = ctx.store.tasks()?;
            let events = ctx.session.promote_leisure(&tasks);
            print_events(&ctx.session, events)?;
        }
    }

    ctx.save()?;
    Ok(())
}
