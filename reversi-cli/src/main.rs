//! Reversi CLI - drive the search engine from the command line
//!
//! Commands:
//! - play: play a single clocked game and print the final position
//! - match: play a multi-game match and report aggregate results

use clap::{Parser, Subcommand};

mod match_cmd;
mod play_cmd;

#[derive(Parser)]
#[command(name = "reversi")]
#[command(about = "Time-budgeted Reversi search engine")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a single game
    Play(play_cmd::PlayArgs),
    /// Play a multi-game match
    Match(match_cmd::MatchArgs),
}

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Play(args) => play_cmd::run(args),
        Commands::Match(args) => match_cmd::run(args),
    }
}
