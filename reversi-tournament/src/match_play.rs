//! Match play - multiple games with seat alternation

use rayon::prelude::*;

use reversi_core::Player;

use crate::config::{MatchConfig, PlayerSpec};
use crate::game_runner::{GameOutcome, GameRunner, MatchError, SeatPlayer};

/// Aggregated result of a match between player A and player B
#[derive(Clone, Debug)]
pub struct MatchResult {
    pub games_played: u32,
    pub a_wins: u32,
    pub b_wins: u32,
    pub draws: u32,
    pub avg_turns: f32,
    /// Individual game outcomes, in game order
    pub outcomes: Vec<GameOutcome>,
}

impl MatchResult {
    pub fn a_win_rate(&self) -> f32 {
        if self.games_played == 0 {
            0.0
        } else {
            self.a_wins as f32 / self.games_played as f32
        }
    }

    pub fn b_win_rate(&self) -> f32 {
        if self.games_played == 0 {
            0.0
        } else {
            self.b_wins as f32 / self.games_played as f32
        }
    }
}

/// Seat of player A in the given game; colors alternate every game
fn seat_of_a(game_index: usize) -> Player {
    if game_index % 2 == 0 {
        Player::Black
    } else {
        Player::White
    }
}

fn play_one(
    config: &MatchConfig,
    a: &PlayerSpec,
    b: &PlayerSpec,
    game_index: usize,
) -> Result<GameOutcome, MatchError> {
    let base_seed = config.seed.unwrap_or(42);
    let seed_a = base_seed.wrapping_add(game_index as u64 * 2);
    let seed_b = base_seed.wrapping_add(game_index as u64 * 2 + 1);

    let runner = GameRunner::new(config.rows, config.cols, config.clock_ms);
    let (mut black, mut white) = if seat_of_a(game_index) == Player::Black {
        (
            SeatPlayer::from_spec(a, seed_a),
            SeatPlayer::from_spec(b, seed_b),
        )
    } else {
        (
            SeatPlayer::from_spec(b, seed_b),
            SeatPlayer::from_spec(a, seed_a),
        )
    };
    runner.play(&mut black, &mut white)
}

/// Play a match of `config.games` games between A and B, alternating
/// seats. Games run in parallel when the config asks for it.
pub fn play_match(
    config: &MatchConfig,
    a: &PlayerSpec,
    b: &PlayerSpec,
) -> Result<MatchResult, MatchError> {
    let outcomes: Vec<GameOutcome> = if config.parallel {
        (0..config.games)
            .into_par_iter()
            .map(|i| play_one(config, a, b, i))
            .collect::<Result<_, _>>()?
    } else {
        (0..config.games)
            .map(|i| play_one(config, a, b, i))
            .collect::<Result<_, _>>()?
    };

    let mut result = MatchResult {
        games_played: outcomes.len() as u32,
        a_wins: 0,
        b_wins: 0,
        draws: 0,
        avg_turns: 0.0,
        outcomes: Vec::new(),
    };
    let mut total_turns = 0u64;
    for (i, outcome) in outcomes.iter().enumerate() {
        total_turns += u64::from(outcome.turns);
        match outcome.winner() {
            Some(winner) if winner == seat_of_a(i) => result.a_wins += 1,
            Some(_) => result.b_wins += 1,
            None => result.draws += 1,
        }
    }
    if !outcomes.is_empty() {
        result.avg_turns = total_turns as f32 / outcomes.len() as f32;
    }
    result.outcomes = outcomes;
    Ok(result)
}
