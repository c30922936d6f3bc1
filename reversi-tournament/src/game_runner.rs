//! Game runner - plays single games under tournament clocks

use std::time::Instant;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use thiserror::Error;
use tracing::debug;

use reversi_core::{outcome, Board, BoardError, GameResult, Move, Player};
use reversi_engine::{Agent, EngineError, Percept};

use crate::config::PlayerSpec;

/// Errors from running a game
#[derive(Debug, Error)]
pub enum MatchError {
    #[error(transparent)]
    Board(#[from] BoardError),
    #[error(transparent)]
    Engine(#[from] EngineError),
}

/// Outcome of a single game
#[derive(Clone, Debug)]
pub struct GameOutcome {
    /// Final game result, including clock and illegal-move forfeits
    pub result: GameResult,
    /// Number of placements made
    pub turns: u32,
    /// Placement history
    pub moves: Vec<Move>,
    /// Position the game ended in
    pub board: Board,
}

impl GameOutcome {
    pub fn winner(&self) -> Option<Player> {
        self.result.winner()
    }

    pub fn is_draw(&self) -> bool {
        self.result == GameResult::Draw
    }
}

/// Uniform random over legal moves (baseline opponent)
pub struct RandomPlayer {
    rng: ChaCha8Rng,
}

impl RandomPlayer {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    pub fn choose(&mut self, percept: &Percept) -> Option<Move> {
        let moves = percept.board.valid_moves(percept.side);
        if moves.is_empty() {
            return None;
        }
        Some(moves[self.rng.gen_range(0..moves.len())])
    }
}

/// One seat at the table
pub enum SeatPlayer {
    Engine(Agent),
    Random(RandomPlayer),
}

impl SeatPlayer {
    /// Build a player from its spec with a per-game seed
    pub fn from_spec(spec: &PlayerSpec, seed: u64) -> Self {
        match spec {
            PlayerSpec::Engine(config) => SeatPlayer::Engine(Agent::with_seed(config.clone(), seed)),
            PlayerSpec::Random => SeatPlayer::Random(RandomPlayer::new(seed)),
        }
    }

    fn reset(&mut self, side: Player, rows: usize, cols: usize, clock_ms: u64) {
        if let SeatPlayer::Engine(agent) = self {
            agent.reset(side, rows, cols, clock_ms);
        }
    }

    fn choose(&mut self, percept: &Percept) -> Result<Option<Move>, EngineError> {
        match self {
            SeatPlayer::Engine(agent) => agent.compute(percept),
            SeatPlayer::Random(player) => Ok(player.choose(percept)),
        }
    }
}

/// Plays one game between two seats, charging each side's clock with its
/// measured think time. A seat forfeits on an illegal move, on refusing to
/// move while legal moves exist, or on exhausting its clock.
pub struct GameRunner {
    rows: usize,
    cols: usize,
    clock_ms: u64,
}

impl GameRunner {
    pub fn new(rows: usize, cols: usize, clock_ms: u64) -> Self {
        Self {
            rows,
            cols,
            clock_ms,
        }
    }

    pub fn play(
        &self,
        black: &mut SeatPlayer,
        white: &mut SeatPlayer,
    ) -> Result<GameOutcome, MatchError> {
        let mut board = Board::new(self.rows, self.cols)?;
        black.reset(Player::Black, self.rows, self.cols, self.clock_ms);
        white.reset(Player::White, self.rows, self.cols, self.clock_ms);

        let mut clocks = [self.clock_ms; 2];
        let mut side = Player::Black;
        let mut turns = 0u32;
        let mut moves = Vec::new();

        let result = loop {
            if board.is_terminal() {
                break outcome(&board);
            }
            if !board.can_play(side) {
                side = side.opponent();
                continue;
            }

            let percept = Percept {
                side,
                board: board.clone(),
                remaining_ms: clocks,
            };
            let started = Instant::now();
            let chosen = match side {
                Player::Black => black.choose(&percept)?,
                Player::White => white.choose(&percept)?,
            };
            let spent = started.elapsed().as_millis() as u64;

            if spent >= clocks[side.index()] {
                debug!(?side, spent_ms = spent, "clock exhausted");
                break GameResult::forfeit_by(side);
            }
            clocks[side.index()] -= spent;

            let Some(mv) = chosen else {
                debug!(?side, "refused to move with legal moves available");
                break GameResult::forfeit_by(side);
            };
            if board.apply_move(mv, side).is_err() {
                debug!(?side, row = mv.row, col = mv.col, "illegal move");
                break GameResult::forfeit_by(side);
            }

            moves.push(mv);
            turns += 1;
            side = side.opponent();
        };

        Ok(GameOutcome {
            result,
            turns,
            moves,
            board,
        })
    }
}
