//! End-to-end search scenarios across the engine stack

use reversi_core::{Board, Cell, Move, Player};
use reversi_engine::{
    Agent, DepthBand, EngineConfig, Evaluator, HistoryTable, Percept, PhaseConfig, SearchContext,
    SymmetryHasher, TimeConfig, TranspositionTable, WeightConfig, TERMINAL_WEIGHT,
};
use std::time::{Duration, Instant};

struct SearchStack {
    evaluator: Evaluator,
    hasher: SymmetryHasher,
    table: TranspositionTable,
    history: HistoryTable,
}

impl SearchStack {
    fn new(rows: usize, cols: usize) -> Self {
        Self {
            evaluator: Evaluator::new(rows, cols, &WeightConfig::default(), PhaseConfig::default()),
            hasher: SymmetryHasher::new(rows, cols),
            table: TranspositionTable::new(1 << 16),
            history: HistoryTable::new(rows, cols),
        }
    }

    fn context(&mut self, deadline: Instant) -> SearchContext<'_> {
        SearchContext {
            evaluator: &self.evaluator,
            hasher: &self.hasher,
            table: &mut self.table,
            history: &mut self.history,
            deadline,
        }
    }
}

fn far_future() -> Instant {
    Instant::now() + Duration::from_secs(3600)
}

/// Scenario A: full-depth search from both seats of the opening position
/// must return moves the rules collaborator accepts as legal.
#[test]
fn test_opening_search_from_both_seats_is_legal() {
    let board = Board::new(8, 8).unwrap();

    for side in [Player::Black, Player::White] {
        let mut stack = SearchStack::new(8, 8);
        let mut ctx = stack.context(far_future());
        let (mv, _) = ctx.search_root(&board, side, 4).unwrap();
        assert!(
            board.valid_moves(side).contains(&mv),
            "{side:?} chose a move outside the legal list"
        );
    }
}

/// Scenario B: a finished game evaluated at depth 0 reports a score whose
/// sign matches the true disc differential for the queried seat.
#[test]
fn test_terminal_score_sign_matches_differential() {
    let mut cells = vec![Cell::Black; 36];
    for cell in cells.iter_mut().take(10) {
        *cell = Cell::White;
    }
    let board = Board::from_cells(6, 6, cells).unwrap();
    assert!(board.is_terminal());

    let mut stack = SearchStack::new(6, 6);
    let mut ctx = stack.context(far_future());
    let black = ctx.negamax(&board, Player::Black, 0, f32::NEG_INFINITY, f32::INFINITY);
    let white = ctx.negamax(&board, Player::White, 0, f32::NEG_INFINITY, f32::INFINITY);

    assert_eq!(black, 16.0 * TERMINAL_WEIGHT);
    assert_eq!(white, -16.0 * TERMINAL_WEIGHT);
}

/// Scenario C: a deadline already in the past must still produce a legal
/// move without hanging or failing.
#[test]
fn test_expired_deadline_returns_legal_move() {
    let board = Board::new(8, 8).unwrap();
    let mut stack = SearchStack::new(8, 8);
    let past = Instant::now() - Duration::from_millis(50);
    let mut ctx = stack.context(past);
    let (mv, _) = ctx.search_root(&board, Player::Black, 5).unwrap();
    assert!(board.valid_moves(Player::Black).contains(&mv));
}

/// Scenario D: repeated computes over an unchanged position with fresh
/// tables pick the same move.
#[test]
fn test_fresh_agents_agree_on_move() {
    let config = EngineConfig {
        time: TimeConfig {
            depth_bands: vec![DepthBand {
                min_ratio: 0.0,
                depth: 3,
            }],
            first_move_max_ms: 600_000,
            ..TimeConfig::default()
        },
        ..EngineConfig::default()
    };

    let mut board = Board::new(8, 8).unwrap();
    board.apply_move(Move::new(2, 3), Player::Black).unwrap();
    let percept = Percept {
        side: Player::White,
        board: board.clone(),
        remaining_ms: [600_000, 600_000],
    };

    let mut moves = Vec::new();
    for _ in 0..2 {
        let mut agent = Agent::new(config.clone());
        agent.reset(Player::White, 8, 8, 600_000);
        moves.push(agent.compute(&percept).unwrap().unwrap());
    }
    assert_eq!(moves[0], moves[1]);
}

/// Depth-0 search equals the static evaluation for any board
#[test]
fn test_depth_zero_equals_evaluation() {
    let boards = [
        Board::new(8, 8).unwrap(),
        Board::new(6, 10).unwrap(),
        {
            let mut b = Board::new(8, 8).unwrap();
            b.apply_move(Move::new(2, 3), Player::Black).unwrap();
            b.apply_move(Move::new(4, 2), Player::White).unwrap();
            b
        },
    ];

    for board in boards {
        let (rows, cols) = (board.rows(), board.cols());
        let mut stack = SearchStack::new(rows, cols);
        let expected = stack.evaluator.evaluate(&board, Player::Black);
        let mut ctx = stack.context(far_future());
        let score = ctx.negamax(&board, Player::Black, 0, f32::NEG_INFINITY, f32::INFINITY);
        assert_eq!(score, expected);
    }
}

/// A real search produces beta cutoffs, and each one feeds the history
/// table that biases later move ordering.
#[test]
fn test_history_table_accumulates_cutoffs() {
    let mut board = Board::new(8, 8).unwrap();
    board.apply_move(Move::new(2, 3), Player::Black).unwrap();
    board.apply_move(Move::new(2, 2), Player::White).unwrap();

    let mut stack = SearchStack::new(8, 8);
    let mut ctx = stack.context(far_future());
    ctx.search_root(&board, Player::Black, 4);

    let total: u64 = (0..8)
        .flat_map(|r| (0..8).map(move |c| Move::new(r, c)))
        .map(|mv| stack.history.bonus(mv))
        .sum();
    assert!(total > 0, "depth-4 search produced no beta cutoffs");
}
