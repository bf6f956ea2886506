//! Results returned by engine operations and the derived state view.

use serde::{Deserialize, Serialize};

use crate::board::End;
use crate::core::Side;
use crate::tiles::{PlacedTile, Tile};

/// A successful player move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayedTile {
    pub tile: Tile,
    pub end: End,
    /// Orientation the tile took on the board.
    pub placed: PlacedTile,
}

/// What the AI did on its turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AiTurn {
    /// The tile played, or `None` if the AI passed.
    pub played: Option<PlayedTile>,
    /// Tiles drawn from the boneyard before playing or passing.
    pub drew_count: usize,
}

impl AiTurn {
    #[must_use]
    pub fn played(&self) -> bool {
        self.played.is_some()
    }

    #[must_use]
    pub fn message(&self) -> String {
        match (self.played, self.drew_count) {
            (Some(p), 0) => format!("AI played {} on {} side", p.placed, p.end),
            (Some(p), n) => format!("AI drew {n} tile(s), then played {} on {} side", p.placed, p.end),
            (None, 0) => "AI passed (no playable tiles)".to_string(),
            (None, n) => format!("AI drew {n} tile(s) but still cannot play - passed"),
        }
    }
}

/// Result of the player's draw-until-playable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrawOutcome {
    pub drew_count: usize,
    /// The player now holds a playable tile.
    pub can_play: bool,
    /// The boneyard ran out without a playable tile; the turn went to the AI.
    pub passed: bool,
}

impl DrawOutcome {
    #[must_use]
    pub fn message(&self) -> String {
        match (self.can_play, self.drew_count) {
            (true, 0) => "You can now play a tile".to_string(),
            (true, n) => format!("Drew {n} tile(s) - you can now play"),
            (false, 0) => "No playable tiles - turn passed to AI".to_string(),
            (false, n) => format!("Drew {n} tile(s) but still cannot play - turn passed to AI"),
        }
    }
}

/// How a finished game ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EndReason {
    /// The winner played their last tile.
    DominoOut,
    /// Nobody could move with an empty boneyard; lowest pip total wins.
    Blocked { player_pips: u32, ai_pips: u32 },
}

/// Terminal result. `winner` is `None` only for a blocked tie configured as a draw.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameOver {
    pub winner: Option<Side>,
    pub reason: EndReason,
}

/// Open ends as seen by callers; both `None` on an empty board.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardEnds {
    pub left: Option<u8>,
    pub right: Option<u8>,
}

/// Derived game state snapshot.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameStateView {
    pub current_player: Side,
    pub game_over: bool,
    pub winner: Option<Side>,
    pub player_tile_count: usize,
    pub ai_tile_count: usize,
    pub boneyard_count: usize,
    pub board_ends: BoardEnds,
    /// Whether the side to move holds a legal tile.
    pub player_can_play: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn played(a: u8, b: u8, end: End) -> PlayedTile {
        let tile = Tile::new(a, b).unwrap();
        PlayedTile {
            tile,
            end,
            placed: tile.as_placed(),
        }
    }

    #[test]
    fn test_ai_messages() {
        let turn = AiTurn {
            played: Some(played(2, 5, End::Right)),
            drew_count: 0,
        };
        assert!(turn.played());
        assert_eq!(turn.message(), "AI played [2|5] on right side");

        let turn = AiTurn {
            played: None,
            drew_count: 3,
        };
        assert!(!turn.played());
        assert_eq!(turn.message(), "AI drew 3 tile(s) but still cannot play - passed");
    }

    #[test]
    fn test_draw_messages() {
        let out = DrawOutcome {
            drew_count: 2,
            can_play: true,
            passed: false,
        };
        assert_eq!(out.message(), "Drew 2 tile(s) - you can now play");
    }

    #[test]
    fn test_state_view_json_shape() {
        let view = GameStateView {
            current_player: Side::Player,
            game_over: false,
            winner: None,
            player_tile_count: 7,
            ai_tile_count: 6,
            boneyard_count: 14,
            board_ends: BoardEnds {
                left: Some(6),
                right: Some(6),
            },
            player_can_play: true,
        };
        let json: serde_json::Value = serde_json::to_value(&view).unwrap();
        assert_eq!(json["current_player"], "player");
        assert_eq!(json["winner"], serde_json::Value::Null);
        assert_eq!(json["board_ends"]["left"], 6);
    }
}
