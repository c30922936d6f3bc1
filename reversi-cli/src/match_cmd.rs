//! Match command - multi-game matches with aggregate reporting

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;

use reversi_engine::EngineConfig;
use reversi_tournament::{play_match, MatchConfig, MatchResult, PlayerSpec};

#[derive(Args)]
pub struct MatchArgs {
    /// Number of games to play (seats alternate every game)
    #[arg(long, default_value = "10")]
    pub games: usize,

    /// Board rows
    #[arg(long, default_value = "8")]
    pub rows: usize,

    /// Board columns
    #[arg(long, default_value = "8")]
    pub cols: usize,

    /// Starting clock per seat, in milliseconds
    #[arg(long, default_value = "60000")]
    pub clock_ms: u64,

    /// Opponent of the engine: "engine" or "random"
    #[arg(long, default_value = "random")]
    pub opponent: String,

    /// Engine configuration JSON file
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Base seed for reproducible matches
    #[arg(long)]
    pub seed: Option<u64>,

    /// Run games in parallel
    #[arg(long)]
    pub parallel: bool,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

/// Aggregate numbers reported for a match
#[derive(Serialize)]
struct MatchReport {
    games: u32,
    engine_wins: u32,
    opponent_wins: u32,
    draws: u32,
    engine_win_rate: f32,
    avg_turns: f32,
}

impl MatchReport {
    fn from_result(result: &MatchResult) -> Self {
        Self {
            games: result.games_played,
            engine_wins: result.a_wins,
            opponent_wins: result.b_wins,
            draws: result.draws,
            engine_win_rate: result.a_win_rate(),
            avg_turns: result.avg_turns,
        }
    }
}

pub fn run(args: MatchArgs) -> Result<()> {
    let engine_config = load_engine_config(args.config.as_deref())?;
    let engine = PlayerSpec::Engine(engine_config.clone());
    let opponent = parse_player(&args.opponent, &engine_config)?;

    let config = MatchConfig {
        games: args.games,
        rows: args.rows,
        cols: args.cols,
        clock_ms: args.clock_ms,
        seed: args.seed,
        parallel: args.parallel,
    };

    tracing::info!(
        games = config.games,
        rows = config.rows,
        cols = config.cols,
        clock_ms = config.clock_ms,
        opponent = %args.opponent,
        "starting match"
    );

    let result = play_match(&config, &engine, &opponent)?;
    let report = MatchReport::from_result(&result);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!(
            "Engine {} - {} {} ({} draws) over {} games, {:.1} moves/game",
            report.engine_wins,
            report.opponent_wins,
            args.opponent,
            report.draws,
            report.games,
            report.avg_turns,
        );
    }
    Ok(())
}

/// Read an engine configuration file, or fall back to defaults
pub fn load_engine_config(path: Option<&Path>) -> Result<EngineConfig> {
    match path {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("reading engine config {}", path.display()))?;
            serde_json::from_str(&text)
                .with_context(|| format!("parsing engine config {}", path.display()))
        }
        None => Ok(EngineConfig::default()),
    }
}

/// Player spec from a command-line name
pub fn parse_player(name: &str, engine_config: &EngineConfig) -> Result<PlayerSpec> {
    match name {
        "engine" => Ok(PlayerSpec::Engine(engine_config.clone())),
        "random" => Ok(PlayerSpec::Random),
        other => anyhow::bail!("unknown player {other:?}, expected \"engine\" or \"random\""),
    }
}
