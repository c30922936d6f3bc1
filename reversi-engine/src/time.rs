//! Clock-to-depth budgeting

use crate::config::{Phase, TimeConfig};
use std::time::{Duration, Instant};

/// Search allowance for one move
#[derive(Clone, Copy, Debug)]
pub struct TimeBudget {
    pub depth: u8,
    pub deadline: Instant,
}

/// Converts the remaining tournament clock into a search depth and a hard
/// deadline. Built once per game from the opening clock; the per-cell rate
/// spreads the whole budget over the board area, and the deadline grows
/// with `depth²` to track the geometric cost of deeper search.
#[derive(Clone, Debug)]
pub struct TimeManager {
    initial_ms: u64,
    per_cell_ms: f64,
    config: TimeConfig,
}

impl TimeManager {
    pub fn new(initial_ms: u64, board_area: usize, config: TimeConfig) -> Self {
        let initial_ms = initial_ms.max(1);
        Self {
            initial_ms,
            per_cell_ms: initial_ms as f64 / board_area.max(1) as f64,
            config,
        }
    }

    /// Below this threshold the caller should skip search entirely and
    /// play a random legal move.
    pub fn is_emergency(&self, remaining_ms: u64) -> bool {
        remaining_ms <= self.config.emergency_ms
    }

    /// Depth and deadline for one move. Depth never increases as the
    /// remaining clock shrinks; the endgame may add a constant bias.
    pub fn budget(&self, remaining_ms: u64, turn: u32, phase: Phase) -> TimeBudget {
        let ratio = (remaining_ms as f64 / self.initial_ms as f64).clamp(0.0, 1.0);
        let mut depth = self
            .config
            .depth_bands
            .iter()
            .filter(|band| ratio >= band.min_ratio)
            .map(|band| band.depth)
            .max()
            .unwrap_or(0);
        if phase == Phase::Endgame {
            depth = depth.saturating_add(self.config.endgame_bias);
        }
        depth = depth.min(self.config.max_depth);

        let usable = remaining_ms.saturating_sub(self.config.reserve_ms);
        let mut allot_ms = (self.per_cell_ms * f64::from(depth).powi(2)).min(usable as f64);
        if turn <= 1 {
            allot_ms = allot_ms.min(self.config.first_move_max_ms as f64);
        }

        TimeBudget {
            depth,
            deadline: Instant::now() + Duration::from_millis(allot_ms.max(0.0) as u64),
        }
    }
}
