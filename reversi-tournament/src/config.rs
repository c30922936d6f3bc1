//! Configuration types for match play

use reversi_engine::EngineConfig;

/// Player type for one seat
#[derive(Clone, Debug)]
pub enum PlayerSpec {
    /// The search engine with the given configuration
    Engine(EngineConfig),
    /// Uniform random over legal moves
    Random,
}

impl Default for PlayerSpec {
    fn default() -> Self {
        PlayerSpec::Engine(EngineConfig::default())
    }
}

/// Match configuration
#[derive(Clone, Debug)]
pub struct MatchConfig {
    /// Number of games; seats alternate between games
    pub games: usize,
    pub rows: usize,
    pub cols: usize,
    /// Starting clock per seat, in milliseconds
    pub clock_ms: u64,
    /// Base seed for reproducibility (None = fixed default)
    pub seed: Option<u64>,
    /// Run games in parallel
    pub parallel: bool,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            games: 10,
            rows: 8,
            cols: 8,
            clock_ms: 60_000,
            seed: None,
            parallel: false,
        }
    }
}
