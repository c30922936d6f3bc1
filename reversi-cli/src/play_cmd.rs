//! Play command - one clocked game with a printed final position

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

use reversi_core::Player;
use reversi_tournament::{GameRunner, SeatPlayer};

use crate::match_cmd::{load_engine_config, parse_player};

#[derive(Args)]
pub struct PlayArgs {
    /// Black seat: "engine" or "random"
    #[arg(long, default_value = "engine")]
    pub black: String,

    /// White seat: "engine" or "random"
    #[arg(long, default_value = "random")]
    pub white: String,

    /// Board rows
    #[arg(long, default_value = "8")]
    pub rows: usize,

    /// Board columns
    #[arg(long, default_value = "8")]
    pub cols: usize,

    /// Starting clock per seat, in milliseconds
    #[arg(long, default_value = "60000")]
    pub clock_ms: u64,

    /// Engine configuration JSON file
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Seed for reproducible games
    #[arg(long, default_value = "42")]
    pub seed: u64,
}

pub fn run(args: PlayArgs) -> Result<()> {
    let engine_config = load_engine_config(args.config.as_deref())?;

    let black_spec = parse_player(&args.black, &engine_config)?;
    let white_spec = parse_player(&args.white, &engine_config)?;
    let mut black = SeatPlayer::from_spec(&black_spec, args.seed);
    let mut white = SeatPlayer::from_spec(&white_spec, args.seed.wrapping_add(1));

    let runner = GameRunner::new(args.rows, args.cols, args.clock_ms);
    let outcome = runner.play(&mut black, &mut white)?;

    println!("{}", outcome.board);
    println!(
        "Result: {:?} after {} moves (B {} - W {})",
        outcome.result,
        outcome.turns,
        outcome.board.count(Player::Black),
        outcome.board.count(Player::White),
    );
    Ok(())
}
