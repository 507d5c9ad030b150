//! Task pool commands.

use clap::Subcommand;
use wheelwork_core::{NewTask, TaskCategory, TaskPool};

use super::{print_json, CliResult, Context};

#[derive(Subcommand)]
pub enum TaskAction {
    /// Add a task to the pool
    Add {
        /// Task title
        title: String,
        /// Category: work, leisure or creative
        #[arg(long, default_value = "work")]
        category: TaskCategory,
        /// Custom focus length in minutes
        #[arg(long)]
        duration: Option<u32>,
    },
    /// List tasks in the pool
    List,
    /// Delete a task (also drops it from the queue)
    Delete {
        /// Task ID
        id: String,
    },
    /// Completion history, oldest first
    History,
}

pub fn run(action: TaskAction) -> CliResult {
    let mut ctx = Context::open()?;

    match action {
        TaskAction::Add {
            title,
            category,
            duration,
        } => {
            let new_task = NewTask {
                title,
                category,
                duration,
            };
            let task = ctx.store.create_task(new_task)?;
            print_json(&task)?;
        }
        TaskAction::List => {
            print_json(&ctx.store.tasks()?)?;
        }
        TaskAction::Delete { id } => {
            if !ctx.store.delete_task(&id)? {
                return Err(format!("task not found: {id}").into());
            }
            let dropped = ctx.session.forget_task(&id);
            ctx.save()?;
            print_json(&serde_json::json!({ "deleted": id, "dequeued": dropped }))?;
        }
        TaskAction::History => {
            print_json(&ctx.store.completed_tasks()?)?;
        }
    }
    Ok(())
}
