//! Reversi Tournament - clocked turn loop and match play
//!
//! This crate provides the tournament infrastructure around the engine:
//! - Single games under per-seat clocks, with forfeit rules
//! - The baseline random player
//! - Matches with seat alternation, optionally parallel across games

mod config;
mod game_runner;
mod match_play;

pub use config::{MatchConfig, PlayerSpec};
pub use game_runner::{GameOutcome, GameRunner, MatchError, RandomPlayer, SeatPlayer};
pub use match_play::{play_match, MatchResult};
