//! Session score across games.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::Side;
use crate::game::GameOver;

use super::registry::GameId;

/// Wins per side for one session.
///
/// Each game is counted at most once, so callers can report the outcome after
/// every move without double counting.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBoard {
    pub player_wins: u32,
    pub ai_wins: u32,
    /// Blocked ties configured to have no winner.
    pub draws: u32,
    #[serde(skip)]
    counted: FxHashSet<GameId>,
}

impl ScoreBoard {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Count a finished game. Returns `false` if `game` was already counted.
    pub fn record(&mut self, game: GameId, outcome: GameOver) -> bool {
        if !self.counted.insert(game) {
            return false;
        }
        match outcome.winner {
            Some(Side::Player) => self.player_wins += 1,
            Some(Side::Ai) => self.ai_wins += 1,
            None => self.draws += 1,
        }
        debug!(%game, player_wins = self.player_wins, ai_wins = self.ai_wins, "score updated");
        true
    }

    #[must_use]
    pub fn wins(&self, side: Side) -> u32 {
        match side {
            Side::Player => self.player_wins,
            Side::Ai => self.ai_wins,
        }
    }

    #[must_use]
    pub fn games_counted(&self) -> usize {
        self.counted.len()
    }

    /// Zero the score and forget which games were counted.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
