use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "wheelwork-cli", version, about = "Wheelwork CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Task pool management
    Task {
        #[command(subcommand)]
        action: commands::task::TaskAction,
    },
    /// Spin the wheel and tune its weights
    Wheel {
        #[command(subcommand)]
        action: commands::wheel::WheelAction,
    },
    /// Inspect and edit the task queue
    Queue {
        #[command(subcommand)]
        action: commands::queue::QueueAction,
    },
    /// Timer control
    Timer {
        #[command(subcommand)]
        action: commands::timer::TimerAction,
    },
    /// Progress statistics
    Stats {
        #[command(subcommand)]
        action: commands::stats::StatsAction,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

fn init_tracing() {
    // Quiet by default; WHEELWORK_LOG=debug shows selections and redistribution.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("WHEELWORK_LOG").unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    init_tracing();
    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Task { action } => commands::task::run(action),
        Commands::Wheel { action } => commands::wheel::run(action),
        Commands::Queue { action } => commands::queue::run(action),
        Commands::Timer { action } => commands::timer::run(action),
        Commands::Stats { action } => commands::stats::run(action),
        Commands::Config { action } => commands::config::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
