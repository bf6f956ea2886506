//! Who opens the game.
//!
//! The highest double leads; the AI needs a strictly higher double to beat
//! the player's. Without any doubles the highest pip sum leads, again with
//! ties going to the player. When the AI leads it lays its tile during
//! construction; when the player leads nothing is played for them.

use serde::{Deserialize, Serialize};

use crate::core::Side;
use crate::tiles::{Hand, PlacedTile, Tile};

/// Why a side got the opening.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StartReason {
    /// Both held doubles and this side's was higher (or tied, for the player).
    HighestDouble,
    /// Only this side held a double.
    OnlyDouble,
    /// No doubles; this side's best pip sum won.
    HighestTile,
}

/// The opening decision.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StartingInfo {
    /// Side that opened.
    pub starter: Side,
    pub reason: StartReason,
    /// The starter's qualifying tile.
    pub deciding_tile: Tile,
    /// Set when the AI laid its tile during construction.
    pub opening_tile: Option<PlacedTile>,
}

impl StartingInfo {
    /// Human-readable explanation.
    #[must_use]
    pub fn describe(&self) -> String {
        let who = match self.starter {
            Side::Player => "Player",
            Side::Ai => "AI",
        };
        match self.reason {
            StartReason::HighestDouble => format!("{who} has highest double: {}", self.deciding_tile),
            StartReason::OnlyDouble => format!("{who} has only double: {}", self.deciding_tile),
            StartReason::HighestTile => format!("{who} has highest tile: {}", self.deciding_tile),
        }
    }
}

/// Decide the opener from the two dealt hands.
///
/// Returns `None` only if both hands are empty.
#[must_use]
pub fn determine_opening(player: &Hand, ai: &Hand) -> Option<StartingInfo> {
    let decision = |starter, reason, deciding_tile| StartingInfo {
        starter,
        reason,
        deciding_tile,
        opening_tile: None,
    };

    match (player.highest_double(), ai.highest_double()) {
        (Some(p), Some(a)) => Some(if a.low() > p.low() {
            decision(Side::Ai, StartReason::HighestDouble, a)
        } else {
            decision(Side::Player, StartReason::HighestDouble, p)
        }),
        (None, Some(a)) => Some(decision(Side::Ai, StartReason::OnlyDouble, a)),
        (Some(p), None) => Some(decision(Side::Player, StartReason::OnlyDouble, p)),
        (None, None) => match (player.highest_tile(), ai.highest_tile()) {
            (Some(p), Some(a)) if a.pip_sum() > p.pip_sum() => {
                Some(decision(Side::Ai, StartReason::HighestTile, a))
            }
            (Some(p), _) => Some(decision(Side::Player, StartReason::HighestTile, p)),
            (None, Some(a)) => Some(decision(Side::Ai, StartReason::HighestTile, a)),
            (None, None) => None,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hand(pairs: &[(u8, u8)]) -> Hand {
        pairs.iter().map(|&(a, b)| Tile::new(a, b).unwrap()).collect()
    }

    fn t(a: u8, b: u8) -> Tile {
        Tile::new(a, b).unwrap()
    }

    #[test]
    fn test_ai_higher_double_opens() {
        let info = determine_opening(&hand(&[(2, 2), (0, 6)]), &hand(&[(5, 5), (1, 3)])).unwrap();
        assert_eq!(info.starter, Side::Ai);
        assert_eq!(info.reason, StartReason::HighestDouble);
        assert_eq!(info.deciding_tile, t(5, 5));
    }

    #[test]
    fn test_player_higher_double_opens() {
        let info = determine_opening(&hand(&[(6, 6)]), &hand(&[(5, 5)])).unwrap();
        assert_eq!(info.starter, Side::Player);
        assert_eq!(info.deciding_tile, t(6, 6));
        assert_eq!(info.describe(), "Player has highest double: 6-6");
    }

    #[test]
    fn test_only_double() {
        let info = determine_opening(&hand(&[(5, 6)]), &hand(&[(0, 0)])).unwrap();
        assert_eq!(info.starter, Side::Ai);
        assert_eq!(info.reason, StartReason::OnlyDouble);

        let info = determine_opening(&hand(&[(0, 0)]), &hand(&[(5, 6)])).unwrap();
        assert_eq!(info.starter, Side::Player);
        assert_eq!(info.reason, StartReason::OnlyDouble);
    }

    #[test]
    fn test_no_doubles_strictly_higher_sum() {
        let info = determine_opening(&hand(&[(1, 2), (3, 4)]), &hand(&[(5, 6), (0, 1)])).unwrap();
        assert_eq!(info.starter, Side::Ai);
        assert_eq!(info.reason, StartReason::HighestTile);
        assert_eq!(info.deciding_tile, t(5, 6));
    }

    #[test]
    fn test_no_doubles_equal_sum_goes_to_player() {
        let info = determine_opening(&hand(&[(3, 6), (0, 1)]), &hand(&[(4, 5), (0, 2)])).unwrap();
        assert_eq!(info.starter, Side::Player);
        assert_eq!(info.deciding_tile, t(3, 6));
    }

    #[test]
    fn test_empty_hands() {
        assert!(determine_opening(&Hand::new(), &Hand::new()).is_none());
    }
}
