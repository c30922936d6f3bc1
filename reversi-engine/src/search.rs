//! Negamax with alpha-beta pruning over the symmetry-keyed cache

use crate::eval::Evaluator;
use crate::ordering::{order_moves, HistoryTable};
use crate::symmetry::SymmetryHasher;
use crate::table::TranspositionTable;
use reversi_core::{Board, Move, Player};
use std::time::Instant;

/// One search invocation: borrows the agent's evaluator, hasher and tables
/// and carries the move deadline. Every recursive call owns a private board
/// clone; the tables are only ever touched from this single call chain.
pub struct SearchContext<'a> {
    pub evaluator: &'a Evaluator,
    pub hasher: &'a SymmetryHasher,
    pub table: &'a mut TranspositionTable,
    pub history: &'a mut HistoryTable,
    pub deadline: Instant,
}

impl SearchContext<'_> {
    /// Score of `board` from `side`'s perspective, searched `depth` plies
    /// deep within the `[alpha, beta]` window. Never fails: running past
    /// the deadline degrades to a static evaluation of the current node.
    pub fn negamax(
        &mut self,
        board: &Board,
        side: Player,
        depth: u8,
        mut alpha: f32,
        beta: f32,
    ) -> f32 {
        let keys = self.hasher.hash(board, side, depth);
        if let Some(score) = self.table.lookup(&keys) {
            return score;
        }

        let opponent = side.opponent();
        let mut moves = board.valid_moves(side);

        if moves.is_empty() {
            if depth == 0 || !board.can_play(opponent) {
                let score = self.evaluator.evaluate(board, side);
                self.table.store(&keys, score);
                return score;
            }
            // Forced pass: the opponent moves on at the same depth, since
            // passing is not a real decision and consumes no ply
            let score = -self.negamax(board, opponent, depth, -beta, -alpha);
            self.table.store(&keys, score);
            return score;
        }

        if depth == 0 {
            let score = self.evaluator.evaluate(board, side);
            self.table.store(&keys, score);
            return score;
        }

        if Instant::now() >= self.deadline {
            // Out of time: stop deepening, settle for the static score.
            // Not cached, the truncated value is only good for this turn.
            return self.evaluator.evaluate(board, side);
        }

        order_moves(&mut moves, board.rows(), board.cols(), self.history);

        let mut best = f32::NEG_INFINITY;
        for mv in moves {
            let Some(child) = board.child(mv, side) else {
                continue;
            };
            let score = -self.negamax(&child, opponent, depth - 1, -beta, -alpha);
            if score > best {
                best = score;
            }
            if score > alpha {
                alpha = score;
            }
            if alpha >= beta {
                self.history.record_cutoff(mv, depth);
                break;
            }
        }

        self.table.store(&keys, best);
        best
    }

    /// Root driver: every root-legal move is searched on its child with a
    /// full window and negated; the argmax wins, with ties going to the
    /// move encountered first after ordering. No pruning at the root.
    pub fn search_root(&mut self, board: &Board, side: Player, depth: u8) -> Option<(Move, f32)> {
        let mut moves = board.valid_moves(side);
        if moves.is_empty() {
            return None;
        }
        order_moves(&mut moves, board.rows(), board.cols(), self.history);

        let opponent = side.opponent();
        let mut best_move = None;
        let mut best_score = f32::NEG_INFINITY;
        for mv in moves {
            let Some(child) = board.child(mv, side) else {
                continue;
            };
            let score = -self.negamax(&child, opponent, depth, f32::NEG_INFINITY, f32::INFINITY);
            if best_move.is_none() || score > best_score {
                best_move = Some(mv);
                best_score = score;
            }
        }
        best_move.map(|mv| (mv, best_score))
    }
}
