//! Reversi Engine - time-budgeted adversarial search
//!
//! This crate chooses moves for rectangular Reversi boards under a strict
//! per-move wall-clock budget:
//! - Negamax with alpha-beta pruning
//! - Symmetry-aware transposition cache (up to 8-way canonicalization)
//! - Move ordering via corner priority and a history heuristic
//! - Phase-adaptive positional evaluation
//! - Clock-to-depth time management with a random-move emergency fallback
//!
//! The search is single-threaded and synchronous; running past the move
//! deadline degrades to static evaluation instead of failing.

pub mod agent;
pub mod config;
pub mod eval;
pub mod ordering;
pub mod search;
pub mod symmetry;
pub mod table;
pub mod time;
pub mod weights;

// Re-exports for convenient access
pub use agent::{Agent, EngineError, Percept};
pub use config::{
    CacheConfig, DepthBand, EngineConfig, Phase, PhaseConfig, PhaseWeights, TimeConfig,
    WeightConfig,
};
pub use eval::{Evaluator, TERMINAL_WEIGHT};
pub use ordering::{order_moves, HistoryTable};
pub use search::SearchContext;
pub use symmetry::{CacheKey, SymmetryHasher};
pub use table::TranspositionTable;
pub use time::{TimeBudget, TimeManager};
pub use weights::WeightGrid;
