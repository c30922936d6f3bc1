//! Position evaluation with phase-adaptive weights

use crate::config::{Phase, PhaseConfig, WeightConfig};
use crate::weights::WeightGrid;
use reversi_core::{Board, Player};

/// Multiplier applied to the exact disc differential of a finished game, so
/// a proven result dominates any heuristic score
pub const TERMINAL_WEIGHT: f32 = 10_000.0;

/// Scores a board for a side as a weighted sum of disc-count, mobility and
/// positional differentials. The three weights shift with the game phase:
/// mobility and position dominate early, raw disc count dominates late.
#[derive(Clone, Debug)]
pub struct Evaluator {
    grid: WeightGrid,
    phases: PhaseConfig,
}

impl Evaluator {
    pub fn new(rows: usize, cols: usize, weights: &WeightConfig, phases: PhaseConfig) -> Self {
        Self {
            grid: WeightGrid::new(rows, cols, weights),
            phases,
        }
    }

    /// Phase of the given position
    pub fn phase(&self, board: &Board) -> Phase {
        self.phases.phase(board.occupancy())
    }

    /// Score from `side`'s perspective. Finished games report the exact
    /// final disc differential scaled by [`TERMINAL_WEIGHT`].
    pub fn evaluate(&self, board: &Board, side: Player) -> f32 {
        let opponent = side.opponent();
        let my_mobility = board.valid_moves(side).len() as i32;
        let opp_mobility = board.valid_moves(opponent).len() as i32;

        let mut my_discs = 0i32;
        let mut opp_discs = 0i32;
        let mut my_position = 0.0f32;
        let mut opp_position = 0.0f32;
        let own = side.cell();
        let theirs = opponent.cell();
        for row in 0..board.rows() {
            for col in 0..board.cols() {
                let cell = board.cell(row, col);
                if cell == own {
                    my_discs += 1;
                    my_position += self.grid.value(row, col);
                } else if cell == theirs {
                    opp_discs += 1;
                    opp_position += self.grid.value(row, col);
                }
            }
        }

        let disc_diff = (my_discs - opp_discs) as f32;
        if my_mobility == 0 && opp_mobility == 0 {
            return disc_diff * TERMINAL_WEIGHT;
        }

        let weights = self.phases.weights(self.phase(board));
        weights.material * disc_diff
            + weights.mobility * (my_mobility - opp_mobility) as f32
            + weights.position * (my_position - opp_position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PhaseWeights;
    use reversi_core::{Cell, Move};

    fn evaluator(rows: usize, cols: usize) -> Evaluator {
        Evaluator::new(rows, cols, &WeightConfig::default(), PhaseConfig::default())
    }

    #[test]
    fn test_opening_position_is_balanced() {
        let board = Board::new(8, 8).unwrap();
        let eval = evaluator(8, 8);
        assert_eq!(eval.evaluate(&board, Player::Black), 0.0);
        assert_eq!(eval.evaluate(&board, Player::White), 0.0);
    }

    #[test]
    fn test_side_swap_negates_exactly() {
        let mut board = Board::new(8, 8).unwrap();
        board.apply_move(Move::new(2, 3), Player::Black).unwrap();
        board.apply_move(Move::new(2, 2), Player::White).unwrap();
        board.apply_move(Move::new(2, 1), Player::Black).unwrap();
        let eval = evaluator(8, 8);
        let black = eval.evaluate(&board, Player::Black);
        let white = eval.evaluate(&board, Player::White);
        assert_eq!(black, -white);
        assert_ne!(black, 0.0);
    }

    #[test]
    fn test_terminal_reports_scaled_differential() {
        let mut cells = vec![Cell::Black; 16];
        cells[0] = Cell::White;
        cells[1] = Cell::White;
        let board = Board::from_cells(4, 4, cells).unwrap();
        let eval = evaluator(4, 4);
        // 14 black vs 2 white
        assert_eq!(eval.evaluate(&board, Player::Black), 12.0 * TERMINAL_WEIGHT);
        assert_eq!(eval.evaluate(&board, Player::White), -12.0 * TERMINAL_WEIGHT);
    }

    #[test]
    fn test_phase_weights_change_the_score() {
        let mut config = PhaseConfig::default();
        config.opening = PhaseWeights {
            material: 0.0,
            mobility: 1.0,
            position: 0.0,
        };
        let eval = Evaluator::new(8, 8, &WeightConfig::default(), config);

        let mut board = Board::new(8, 8).unwrap();
        board.apply_move(Move::new(2, 3), Player::Black).unwrap();
        // Pure mobility differential once material and position are zeroed
        let black_moves = board.valid_moves(Player::Black).len() as f32;
        let white_moves = board.valid_moves(Player::White).len() as f32;
        assert_eq!(
            eval.evaluate(&board, Player::Black),
            black_moves - white_moves
        );
    }

    #[test]
    fn test_corner_ownership_scores_position() {
        let mut config = PhaseConfig::default();
        config.opening = PhaseWeights {
            material: 0.0,
            mobility: 0.0,
            position: 1.0,
        };
        let eval = Evaluator::new(8, 8, &WeightConfig::default(), config);

        let mut cells = Board::new(8, 8).unwrap().cells().to_vec();
        cells[0] = Cell::Black;
        let board = Board::from_cells(8, 8, cells).unwrap();
        // Center discs sit on neutral cells; only the corner scores
        assert_eq!(eval.evaluate(&board, Player::Black), 55.0);
    }
}
