//! Per-turn agent: clock budgeting, search dispatch, move validation

use crate::config::EngineConfig;
use crate::eval::Evaluator;
use crate::ordering::{order_moves, HistoryTable};
use crate::search::SearchContext;
use crate::symmetry::SymmetryHasher;
use crate::table::TranspositionTable;
use crate::time::{TimeBudget, TimeManager};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use reversi_core::{Board, Move, Player};
use thiserror::Error;
use tracing::debug;

/// Per-turn input from the turn loop
#[derive(Clone, Debug)]
pub struct Percept {
    pub side: Player,
    pub board: Board,
    /// Remaining clock per seat, indexed by [`Player::index`]
    pub remaining_ms: [u64; 2],
}

impl Percept {
    pub fn remaining(&self, side: Player) -> u64 {
        self.remaining_ms[side.index()]
    }
}

/// Caller contract violations. These are never recovered locally: the
/// turn loop owns seat assignment and must reset the agent first.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("compute() called before reset()")]
    NotInitialized,
    #[error("percept is for seat {got:?}, agent was reset for {expected:?}")]
    SeatMismatch { expected: Player, got: Player },
    #[error("percept board is {got_rows}x{got_cols}, agent was reset for {rows}x{cols}")]
    BoardSizeMismatch {
        rows: usize,
        cols: usize,
        got_rows: usize,
        got_cols: usize,
    },
}

/// Everything tied to one seat on one board: rebuilt wholesale by
/// [`Agent::reset`], dropped with the game.
struct Session {
    side: Player,
    rows: usize,
    cols: usize,
    evaluator: Evaluator,
    hasher: SymmetryHasher,
    table: TranspositionTable,
    history: HistoryTable,
    time: TimeManager,
    turn: u32,
}

/// Move-choosing agent. One `compute()` call returns exactly one move (or
/// a pass); all state lives in memory for the duration of one game.
pub struct Agent {
    config: EngineConfig,
    rng: ChaCha8Rng,
    session: Option<Session>,
}

impl Agent {
    pub fn new(config: EngineConfig) -> Self {
        Self::with_seed(config, 42)
    }

    pub fn with_seed(config: EngineConfig, seed: u64) -> Self {
        Self {
            config,
            rng: ChaCha8Rng::seed_from_u64(seed),
            session: None,
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Bind the agent to a seat and board size, rebuilding the weight
    /// grid, symmetry grids, tables and clock model. The caller invokes
    /// this at game start and on any seat or dimension change.
    pub fn reset(&mut self, side: Player, rows: usize, cols: usize, clock_ms: u64) {
        self.session = Some(Session {
            side,
            rows,
            cols,
            evaluator: Evaluator::new(rows, cols, &self.config.weights, self.config.phases.clone()),
            hasher: SymmetryHasher::new(rows, cols),
            table: TranspositionTable::new(self.config.cache.max_entries),
            history: HistoryTable::new(rows, cols),
            time: TimeManager::new(clock_ms, rows * cols, self.config.time.clone()),
            turn: 0,
        });
    }

    /// Choose a move for the percept. `Ok(None)` is a pass (no legal
    /// move); contract violations fail fast with an error.
    pub fn compute(&mut self, percept: &Percept) -> Result<Option<Move>, EngineError> {
        let session = self.session.as_mut().ok_or(EngineError::NotInitialized)?;
        if percept.side != session.side {
            return Err(EngineError::SeatMismatch {
                expected: session.side,
                got: percept.side,
            });
        }
        let board = &percept.board;
        if board.rows() != session.rows || board.cols() != session.cols {
            return Err(EngineError::BoardSizeMismatch {
                rows: session.rows,
                cols: session.cols,
                got_rows: board.rows(),
                got_cols: board.cols(),
            });
        }

        session.turn += 1;
        let mut moves = board.valid_moves(session.side);
        if moves.is_empty() {
            return Ok(None);
        }

        let remaining = percept.remaining(session.side);
        if session.time.is_emergency(remaining) {
            let pick = moves[self.rng.gen_range(0..moves.len())];
            debug!(
                turn = session.turn,
                remaining_ms = remaining,
                "clock critical, playing random legal move"
            );
            return Ok(Some(pick));
        }

        let phase = session.evaluator.phase(board);
        let TimeBudget { depth, deadline } = session.time.budget(remaining, session.turn, phase);
        debug!(
            turn = session.turn,
            remaining_ms = remaining,
            ?phase,
            depth,
            "searching"
        );

        let mut ctx = SearchContext {
            evaluator: &session.evaluator,
            hasher: &session.hasher,
            table: &mut session.table,
            history: &mut session.history,
            deadline,
        };
        let chosen = ctx.search_root(board, session.side, depth);

        // The search can only surface a member of the legal-move list; an
        // out-of-list move would forfeit the game in the caller's loop.
        let mv = match chosen {
            Some((mv, score)) if moves.contains(&mv) => {
                debug!(row = mv.row, col = mv.col, score = f64::from(score), "move chosen");
                mv
            }
            _ => {
                order_moves(&mut moves, session.rows, session.cols, &session.history);
                moves[0]
            }
        };
        Ok(Some(mv))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn percept(board: &Board, side: Player, remaining_ms: u64) -> Percept {
        Percept {
            side,
            board: board.clone(),
            remaining_ms: [remaining_ms; 2],
        }
    }

    #[test]
    fn test_compute_before_reset_fails() {
        let mut agent = Agent::new(EngineConfig::default());
        let board = Board::new(8, 8).unwrap();
        assert_eq!(
            agent.compute(&percept(&board, Player::Black, 60_000)),
            Err(EngineError::NotInitialized)
        );
    }

    #[test]
    fn test_seat_mismatch_fails_fast() {
        let mut agent = Agent::new(EngineConfig::default());
        agent.reset(Player::Black, 8, 8, 60_000);
        let board = Board::new(8, 8).unwrap();
        assert!(matches!(
            agent.compute(&percept(&board, Player::White, 60_000)),
            Err(EngineError::SeatMismatch { .. })
        ));
    }

    #[test]
    fn test_board_size_mismatch_fails_fast() {
        let mut agent = Agent::new(EngineConfig::default());
        agent.reset(Player::Black, 8, 8, 60_000);
        let board = Board::new(6, 6).unwrap();
        assert!(matches!(
            agent.compute(&percept(&board, Player::Black, 60_000)),
            Err(EngineError::BoardSizeMismatch { .. })
        ));
    }

    #[test]
    fn test_compute_returns_legal_move() {
        let mut agent = Agent::new(EngineConfig::default());
        agent.reset(Player::Black, 8, 8, 60_000);
        let board = Board::new(8, 8).unwrap();
        let mv = agent
            .compute(&percept(&board, Player::Black, 60_000))
            .unwrap()
            .unwrap();
        assert!(board.valid_moves(Player::Black).contains(&mv));
    }

    #[test]
    fn test_blocked_seat_passes() {
        use reversi_core::Cell;
        let mut agent = Agent::new(EngineConfig::default());
        agent.reset(Player::White, 4, 4, 60_000);
        let board = Board::from_cells(4, 4, vec![Cell::Black; 16]).unwrap();
        assert_eq!(
            agent.compute(&percept(&board, Player::White, 60_000)),
            Ok(None)
        );
    }

    #[test]
    fn test_emergency_clock_still_yields_legal_move() {
        let mut agent = Agent::new(EngineConfig::default());
        agent.reset(Player::Black, 8, 8, 60_000);
        let board = Board::new(8, 8).unwrap();
        let mv = agent
            .compute(&percept(&board, Player::Black, 500))
            .unwrap()
            .unwrap();
        assert!(board.valid_moves(Player::Black).contains(&mv));
    }

    #[test]
    fn test_repeat_compute_is_deterministic() {
        use crate::config::{DepthBand, TimeConfig};

        // Shallow fixed depth with a roomy allotment, so the deadline can
        // never truncate one run but not the other
        let config = EngineConfig {
            time: TimeConfig {
                depth_bands: vec![DepthBand {
                    min_ratio: 0.0,
                    depth: 2,
                }],
                first_move_max_ms: 60_000,
                ..TimeConfig::default()
            },
            ..EngineConfig::default()
        };

        let board = Board::new(8, 8).unwrap();
        let mut first = None;
        for _ in 0..2 {
            let mut agent = Agent::new(config.clone());
            agent.reset(Player::Black, 8, 8, 600_000);
            let mv = agent
                .compute(&percept(&board, Player::Black, 600_000))
                .unwrap();
            match first {
                None => first = Some(mv),
                Some(prev) => assert_eq!(mv, prev),
            }
        }
    }
}
