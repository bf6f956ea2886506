//! Save and restore a game.
//!
//! `GameSnapshot` is plain serde data; `to_bytes`/`from_bytes` use bincode.
//! Restoring re-validates the tile partition and the board chain, and
//! recomputes the outcome from the position.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::core::{EngineConfig, Side, SideMap, SnapshotError};
use crate::tiles::{Boneyard, Hand};

use super::engine::{validate_piles, DominoesGame};
use super::history::MoveRecord;
use super::opening::StartingInfo;
use super::outcome::GameOver;

/// Full engine state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub config: EngineConfig,
    pub seed: Option<u64>,
    pub player_hand: Hand,
    pub ai_hand: Hand,
    pub boneyard: Boneyard,
    pub board: Board,
    pub current: Side,
    pub outcome: Option<GameOver>,
    pub starting: Option<StartingInfo>,
    pub history: Vector<MoveRecord>,
}

impl DominoesGame {
    /// Capture the full state. The snapshot shares nothing mutable with the game.
    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            config: self.config.clone(),
            seed: self.seed,
            player_hand: self.hands[Side::Player].clone(),
            ai_hand: self.hands[Side::Ai].clone(),
            boneyard: self.boneyard.clone(),
            board: self.board.clone(),
            current: self.current,
            outcome: self.outcome,
            starting: self.starting.clone(),
            history: self.history.clone(),
        }
    }

    /// Rebuild a game from a snapshot.
    ///
    /// The stored `outcome` is ignored; game over is derived from the hands,
    /// boneyard and board.
    pub fn restore(snapshot: GameSnapshot) -> Result<Self, SnapshotError> {
        // Re-check the chain; a decoded Board bypasses `from_tiles`.
        let board = Board::from_tiles(snapshot.board.iter().copied())?;
        validate_piles(&snapshot.player_hand, &snapshot.ai_hand, &snapshot.boneyard, &board)?;

        let mut game = Self {
            config: snapshot.config,
            seed: snapshot.seed,
            hands: SideMap::from_pair(snapshot.player_hand, snapshot.ai_hand),
            boneyard: snapshot.boneyard,
            board,
            current: snapshot.current,
            outcome: None,
            starting: snapshot.starting,
            history: snapshot.history,
        };
        game.check_game_over();
        Ok(game)
    }

    /// Encode the snapshot with bincode.
    pub fn to_bytes(&self) -> Result<Vec<u8>, SnapshotError> {
        Ok(bincode::serialize(&self.snapshot())?)
    }

    /// Decode and restore a game saved with [`to_bytes`](Self::to_bytes).
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SnapshotError> {
        let snapshot: GameSnapshot = bincode::deserialize(bytes)?;
        Self::restore(snapshot)
    }
}
