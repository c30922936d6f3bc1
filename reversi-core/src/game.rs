//! Game outcome and final scoring

use crate::board::{Board, Player};
use serde::{Deserialize, Serialize};

/// Game result
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    Ongoing,
    BlackWins,
    WhiteWins,
    Draw,
}

impl GameResult {
    /// Winner of a decided game, `None` for draws and ongoing games
    pub fn winner(self) -> Option<Player> {
        match self {
            GameResult::BlackWins => Some(Player::Black),
            GameResult::WhiteWins => Some(Player::White),
            GameResult::Ongoing | GameResult::Draw => None,
        }
    }

    pub fn is_over(self) -> bool {
        self != GameResult::Ongoing
    }

    /// Result when `loser` forfeits (illegal move or exhausted clock)
    pub fn forfeit_by(loser: Player) -> Self {
        match loser {
            Player::Black => GameResult::WhiteWins,
            Player::White => GameResult::BlackWins,
        }
    }
}

/// Outcome of a position: `Ongoing` while either side can still place a
/// disc, otherwise decided by disc count.
pub fn outcome(board: &Board) -> GameResult {
    if !board.is_terminal() {
        return GameResult::Ongoing;
    }
    let black = board.count(Player::Black);
    let white = board.count(Player::White);
    match black.cmp(&white) {
        std::cmp::Ordering::Greater => GameResult::BlackWins,
        std::cmp::Ordering::Less => GameResult::WhiteWins,
        std::cmp::Ordering::Equal => GameResult::Draw,
    }
}
