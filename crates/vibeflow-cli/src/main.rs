mod cmd;
mod data_dir;
mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use vibeflow_core::storage::FileStorage;
use vibeflow_core::store::ProgressStore;

#[derive(Parser)]
#[command(
    name = "vibeflow",
    about = "Self-guided therapy paths — browse programs, work through daily sessions, track progress",
    version,
    propagate_version = true
)]
struct Cli {
    /// Data directory (default: ~/.vibeflow)
    #[arg(long, global = true, env = "VIBEFLOW_DATA_DIR")]
    data_dir: Option<PathBuf>,

    /// Output as JSON
    #[arg(long, global = true, short = 'j')]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List every path in the catalog with its progress
    List,

    /// Show a path day by day, expanding the current session
    Show { path_id: String },

    /// Print the current session of a path (the "Continue Path" action)
    Continue { path_id: String },

    /// Mark a day complete, or unmark a completed day
    Toggle { path_id: String, day: u32 },

    /// Group all paths into in-progress / completed / not-started
    Dashboard,

    /// Erase progress for one path, or all local data with --all
    Reset {
        /// Path to reset (omit with --all)
        path_id: Option<String>,

        /// Remove progress for every path plus favorites, journal, mood
        /// log, and chat alias
        #[arg(long)]
        all: bool,

        /// Confirm the deletion (required; this cannot be undone)
        #[arg(long)]
        yes: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_target(false)
        .init();

    let result = run(cli);
    if let Err(e) = result {
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let data_dir = data_dir::resolve(cli.data_dir)?;
    let mut store = ProgressStore::new(FileStorage::open(data_dir)?);

    match cli.command {
        Commands::List => cmd::list::run(&store, cli.json),
        Commands::Show { path_id } => cmd::show::run(&store, &path_id, cli.json),
        Commands::Continue { path_id } => cmd::continue_path::run(&store, &path_id, cli.json),
        Commands::Toggle { path_id, day } => cmd::toggle::run(&mut store, &path_id, day, cli.json),
        Commands::Dashboard => cmd::dashboard::run(&store, cli.json),
        Commands::Reset { path_id, all, yes } => {
            cmd::reset::run(&mut store, path_id.as_deref(), all, yes)
        }
    }
}
