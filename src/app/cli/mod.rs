//! CLI Adapter.

mod compare;
mod form;
mod session;

use crate::domain::AppError;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "quakediff")]
#[command(version)]
#[command(
    about = "Collect pre/post-earthquake wall inspections and generate a discrepancy report",
    long_about = None
)]
struct Cli {
    /// Config file (defaults to ./quakediff.toml when present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start an interactive inspection session
    #[clap(visible_alias = "s")]
    Session,
    /// Compare the entries of an inspection file
    #[clap(visible_alias = "c")]
    Compare {
        /// TOML file with [[pre]] and [[post]] entries
        #[arg(short, long)]
        input: PathBuf,
        /// Print the assembled prompt instead of calling the model
        #[arg(long, conflicts_with = "save")]
        prompt_preview: bool,
        /// Also write the report to this markdown file
        #[arg(short, long)]
        save: Option<PathBuf>,
    },
}

/// Entry point for the CLI.
pub fn run() {
    // A missing .env is normal; the credential may come from the shell.
    let _ = dotenvy::dotenv();
    init_tracing();

    let cli = Cli::parse();

    let result: Result<(), AppError> =
        crate::app::api::load_config(cli.config.as_deref()).and_then(|config| match cli.command {
            Commands::Session => session::run_session(&config),
            Commands::Compare { input, prompt_preview, save } => {
                compare::run_compare(&config, &input, prompt_preview, save.as_deref())
            }
        });

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
}
