//! Hexy CLI - Command-line interface
//!
//! Commands:
//! - play: Interactive two-player game in the terminal
//! - selfplay: Batch of random games with win statistics

mod board_args;
mod play_cmd;
mod render;
mod selfplay_cmd;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "hexy")]
#[command(about = "Hex connection game with universal corners")]
struct Cli {
    /// Random seed for reproducible automated play
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play an interactive game
    Play(play_cmd::PlayArgs),
    /// Play random games and report statistics
    Selfplay(selfplay_cmd::SelfplayArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Play(args) => play_cmd::run(args),
        Commands::Selfplay(args) => selfplay_cmd::run(args, cli.seed),
    }
}
