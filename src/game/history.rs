//! Move log.
//!
//! Every opening, play, draw and pass is appended in order. The log is the
//! hook for an external persistence layer that stores moves.

use serde::{Deserialize, Serialize};

use crate::board::End;
use crate::core::Side;
use crate::tiles::{PlacedTile, Tile};

/// What happened in one step.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MoveKind {
    /// The AI's automatic first tile.
    Opening { placed: PlacedTile },
    Play { tile: Tile, end: End, placed: PlacedTile },
    Draw { tile: Tile },
    Pass,
}

/// A logged step.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// 0-based position in the log.
    pub sequence: u32,
    pub side: Side,
    pub kind: MoveKind,
}

impl MoveRecord {
    #[must_use]
    pub fn is_play(&self) -> bool {
        matches!(self.kind, MoveKind::Opening { .. } | MoveKind::Play { .. })
    }
}
