//! Engine configuration: positional weights, phase weighting, clock policy

use serde::{Deserialize, Serialize};

/// Positional weight generation. Values feed [`crate::weights::WeightGrid`];
/// every magic number of the heuristic lives here so evaluation stays
/// data-driven and testable on its own.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct WeightConfig {
    /// Base score of a corner cell
    pub corner_value: f32,
    /// Extra corner score per unit of board scale
    pub corner_scale_bonus: f32,
    /// Base penalty for X-squares (diagonal neighbors of corners)
    pub x_square_penalty: f32,
    /// Base penalty for C-squares (orthogonal neighbors of corners)
    pub c_square_penalty: f32,
    /// Extra X/C penalty per unit of board scale
    pub penalty_scale: f32,
    /// Base score of non-corner edge cells
    pub edge_base_value: f32,
    /// Edge score growth per cell of dimension beyond the reference
    pub edge_growth: f32,
    /// Board dimension at which scaling starts; `scale` is
    /// `max(1, max_dimension / scale_reference)`
    pub scale_reference: f32,
}

impl Default for WeightConfig {
    fn default() -> Self {
        Self {
            corner_value: 50.0,
            corner_scale_bonus: 5.0,
            x_square_penalty: 5.0,
            c_square_penalty: 5.0,
            penalty_scale: 1.0,
            edge_base_value: 2.0,
            edge_growth: 0.25,
            scale_reference: 10.0,
        }
    }
}

impl WeightConfig {
    /// Scale factor for a board whose larger dimension is `max_dim`
    pub fn scale(&self, max_dim: usize) -> f32 {
        (max_dim as f32 / self.scale_reference).max(1.0)
    }
}

/// Coarse game phase, derived from board occupancy
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    Opening,
    Midgame,
    Endgame,
}

/// Relative weights of the three evaluation terms
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct PhaseWeights {
    pub material: f32,
    pub mobility: f32,
    pub position: f32,
}

/// Phase thresholds and per-phase evaluation weights. Defaults make
/// mobility and position dominate early and raw disc count dominate late.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct PhaseConfig {
    /// Occupancy below this ratio is the opening
    pub opening_threshold: f32,
    /// Occupancy at or above this ratio is the endgame
    pub endgame_threshold: f32,
    pub opening: PhaseWeights,
    pub midgame: PhaseWeights,
    pub endgame: PhaseWeights,
}

impl Default for PhaseConfig {
    fn default() -> Self {
        Self {
            opening_threshold: 0.3,
            endgame_threshold: 0.7,
            opening: PhaseWeights {
                material: 0.5,
                mobility: 2.0,
                position: 1.5,
            },
            midgame: PhaseWeights {
                material: 1.25,
                mobility: 1.0,
                position: 1.0,
            },
            endgame: PhaseWeights {
                material: 3.0,
                mobility: 0.5,
                position: 0.25,
            },
        }
    }
}

impl PhaseConfig {
    /// Phase for a board occupancy ratio in `[0, 1]`
    pub fn phase(&self, occupancy: f32) -> Phase {
        if occupancy < self.opening_threshold {
            Phase::Opening
        } else if occupancy < self.endgame_threshold {
            Phase::Midgame
        } else {
            Phase::Endgame
        }
    }

    pub fn weights(&self, phase: Phase) -> PhaseWeights {
        match phase {
            Phase::Opening => self.opening,
            Phase::Midgame => self.midgame,
            Phase::Endgame => self.endgame,
        }
    }
}

/// One depth band: applies while `remaining / initial >= min_ratio`
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct DepthBand {
    pub min_ratio: f64,
    pub depth: u8,
}

/// Clock policy: depth bands over the remaining-time ratio plus absolute
/// guards. The reserve is withheld from every per-move allotment so the
/// engine cannot be flagged by the tournament clock.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct TimeConfig {
    /// Clock amount never spent on search
    pub reserve_ms: u64,
    /// At or below this remaining clock, skip search and play randomly
    pub emergency_ms: u64,
    /// Cap on the first move's allotment
    pub first_move_max_ms: u64,
    /// Depth by remaining-time ratio; the deepest band whose `min_ratio`
    /// is met wins
    pub depth_bands: Vec<DepthBand>,
    /// Extra plies granted in the endgame
    pub endgame_bias: u8,
    pub max_depth: u8,
}

impl Default for TimeConfig {
    fn default() -> Self {
        Self {
            reserve_ms: 4_000,
            emergency_ms: 1_000,
            first_move_max_ms: 2_000,
            depth_bands: vec![
                DepthBand { min_ratio: 0.65, depth: 4 },
                DepthBand { min_ratio: 0.25, depth: 3 },
                DepthBand { min_ratio: 0.10, depth: 2 },
                DepthBand { min_ratio: 0.0, depth: 1 },
            ],
            endgame_bias: 1,
            max_depth: 6,
        }
    }
}

/// Transposition-table sizing
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    /// Entry count that triggers a whole-table wipe
    pub max_entries: usize,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            max_entries: 1 << 20,
        }
    }
}

/// Complete engine configuration
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub weights: WeightConfig,
    pub phases: PhaseConfig,
    pub time: TimeConfig,
    pub cache: CacheConfig,
}
