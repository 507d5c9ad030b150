//! Wheel commands: spin, confirm, and advanced-mode tuning.

use clap::Subcommand;
use rand::SeedableRng;
use rand_pcg::Mcg128Xsl64;
use wheelwork_core::{SelectionMode, TaskCategory, TaskPool};

use super::{print_events, print_json, CliResult, Context};

#[derive(Subcommand)]
pub enum WheelAction {
    /// Spin the wheel; the result waits for confirm or cancel
    Spin {
        /// Seed for a reproducible draw
        #[arg(long)]
        seed: Option<u64>,
        /// Queue the result right away
        #[arg(long)]
        confirm: bool,
    },
    /// Queue the pending result
    Confirm,
    /// Discard the pending result
    Cancel,
    /// Tasks the wheel currently shows
    Eligible,
    /// Wheel segments with their probability shares
    Segments,
    /// Set the selection mode
    Mode {
        /// normal, hard-working, time-to-work or advanced
        mode: SelectionMode,
    },
    /// Set an advanced-mode category weight (others rebalance to 100)
    Weight {
        category: TaskCategory,
        value: u32,
    },
    /// Include or exclude a category in advanced mode
    Toggle {
        category: TaskCategory,
        #[arg(action = clap::ArgAction::Set)]
        enabled: bool,
    },
}

pub fn run(action: WheelAction) -> CliResult {
    let mut ctx = Context::open()?;

    match action {
        WheelAction::Spin { seed, confirm } => {
            let tasks = ctx.store.tasks()?;
            let chosen = match seed {
                Some(seed) => ctx
                    .session
                    .spin(&tasks, &mut Mcg128Xsl64::seed_from_u64(seed))?,
                None => ctx.session.spin(&tasks, &mut rand::thread_rng())?,
            };
            if confirm {
                let events = ctx.session.confirm()?;
                print_events(&ctx.session, events)?;
            } else {
                print_json(&chosen)?;
            }
        }
        WheelAction::Confirm => {
            let events = ctx.session.confirm()?;
            print_events(&ctx.session, events)?;
        }
        WheelAction::Cancel => {
            let event = ctx.session.cancel_selection()?;
            print_events(&ctx.session, vec![event])?;
        }
        WheelAction::Eligible => {
            let tasks = ctx.store.tasks()?;
            print_json(&ctx.session.eligible(&tasks))?;
        }
        WheelAction::Segments => {
            let tasks = ctx.store.tasks()?;
            print_json(&ctx.session.segments(&tasks))?;
        }
        WheelAction::Mode { mode } => {
            ctx.config.set("wheel.mode", mode.as_str())?;
            ctx.session.set_wheel(ctx.config.wheel);
            print_json(&ctx.config.wheel)?;
        }
        WheelAction::Weight { category, value } => {
            ctx.config
                .set(&format!("wheel.weights.{category}"), &value.to_string())?;
            ctx.session.set_wheel(ctx.config.wheel);
            print_json(&ctx.config.wheel)?;
        }
        WheelAction::Toggle { category, enabled } => {
            ctx.config
                .set(&format!("wheel.enabled.{category}"), &enabled.to_string())?;
            ctx.session.set_wheel(ctx.config.wheel);
            print_json(&ctx.config.wheel)?;
        }
    }

    ctx.save()?;
    Ok(())
}
