use clap::Subcommand;
use wheelwork_core::{daily_progress, has_activity, ProgressStats, TaskPool, TaskStore};

use super::{print_json, CliResult};

#[derive(Subcommand)]
pub enum StatsAction {
    /// All-time totals per category
    Summary,
    /// Per-day completions
    Daily {
        /// Window length, 1 to 366 days
        #[arg(long, default_value_t = 7, value_parser = clap::value_parser!(u32).range(1..=366))]
        days: u32,
    },
}

pub fn run(action: StatsAction) -> CliResult {
    let store = TaskStore::open()?;
    let completed = store.completed_tasks()?;

    match action {
        StatsAction::Summary => {
            print_json(&ProgressStats::from_completed(&completed))?;
        }
        StatsAction::Daily { days } => {
            let today = chrono::Utc::now().date_naive();
            let series = daily_progress(&completed, today, days);
            print_json(&serde_json::json!({
                "has_activity": has_activity(&series),
                "days": series,
            }))?;
        }
    }
    Ok(())
}
