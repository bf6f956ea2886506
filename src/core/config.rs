//! Engine and session configuration.
//!
//! - `EngineConfig`: per-game rules knobs (hand size, seed, blocked tie-break)
//! - `SessionConfig`: how many games the session layer keeps in memory

use serde::{Deserialize, Serialize};

/// Environment variable read by [`SessionConfig::from_env`].
pub const MAX_GAMES_ENV: &str = "MAX_GAMES_IN_MEMORY";

/// Who wins a blocked game when both remaining pip totals are equal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockedTieBreak {
    /// The AI wins ties.
    #[default]
    Ai,
    /// The player wins ties.
    Player,
    /// The game ends without a winner.
    Draw,
}

/// Per-game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Tiles dealt to each side (default: 7).
    #[serde(default = "default_hand_size")]
    pub hand_size: usize,

    /// Seed for the shuffle. `None` draws a fresh seed per game.
    #[serde(default)]
    pub seed: Option<u64>,

    /// Blocked-game tie resolution.
    #[serde(default)]
    pub blocked_tie: BlockedTieBreak,
}

fn default_hand_size() -> usize {
    7
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            hand_size: default_hand_size(),
            seed: None,
            blocked_tie: BlockedTieBreak::default(),
        }
    }
}

impl EngineConfig {
    /// Use a fixed seed for a reproducible deal.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Deal a different number of tiles per side.
    ///
    /// Clamped to 1..=14 so both hands always fit in the 28-tile set.
    #[must_use]
    pub fn with_hand_size(mut self, hand_size: usize) -> Self {
        self.hand_size = hand_size.clamp(1, 14);
        self
    }

    /// Change the blocked-game tie resolution.
    #[must_use]
    pub fn with_blocked_tie(mut self, tie: BlockedTieBreak) -> Self {
        self.blocked_tie = tie;
        self
    }
}

/// Session layer configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Maximum number of games kept in memory (default: 1000).
    #[serde(default = "default_max_games")]
    pub max_games: usize,
}

fn default_max_games() -> usize {
    1000
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            max_games: default_max_games(),
        }
    }
}

impl SessionConfig {
    /// Read `MAX_GAMES_IN_MEMORY`, falling back to the default when unset or unparsable.
    #[must_use]
    pub fn from_env() -> Self {
        let max_games = std::env::var(MAX_GAMES_ENV)
            .ok()
            .and_then(|v| v.trim().parse::<usize>().ok())
            .filter(|&n| n > 0)
            .unwrap_or_else(default_max_games);
        Self { max_games }
    }

    /// Set the game capacity (at least 1).
    #[must_use]
    pub fn with_max_games(mut self, max_games: usize) -> Self {
        self.max_games = max_games.max(1);
        self
    }
}
