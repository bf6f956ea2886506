//! The line of play.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::core::{PlayError, SetupError};
use crate::tiles::{PlacedTile, Tile, TilePair};

/// One of the two open ends of the chain.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum End {
    Left,
    Right,
}

impl End {
    pub const BOTH: [End; 2] = [End::Left, End::Right];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            End::Left => "left",
            End::Right => "right",
        }
    }
}

impl std::fmt::Display for End {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for End {
    type Err = PlayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "left" => Ok(End::Left),
            "right" => Ok(End::Right),
            other => Err(PlayError::InvalidSide(other.to_string())),
        }
    }
}

/// Which ends a tile may be played on.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Playable {
    pub left: bool,
    pub right: bool,
}

impl Playable {
    #[must_use]
    pub fn any(self) -> bool {
        self.left || self.right
    }

    #[must_use]
    pub fn allows(self, end: End) -> bool {
        match end {
            End::Left => self.left,
            End::Right => self.right,
        }
    }
}

/// Open end values of a non-empty board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ends {
    pub left: u8,
    pub right: u8,
}

/// Oriented tiles from left to right.
///
/// Adjacent tiles always match at their join. Backed by `im::Vector` so
/// callers can hold a snapshot that later plays do not affect.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    tiles: Vector<PlacedTile>,
}

impl Board {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a board from an existing chain, checking every pip and join.
    pub fn from_tiles(tiles: impl IntoIterator<Item = PlacedTile>) -> Result<Self, SetupError> {
        let tiles: Vector<PlacedTile> = tiles.into_iter().collect();
        if let Some((index, bad)) = tiles.iter().enumerate().find(|(_, t)| !t.is_valid()) {
            return Err(SetupError::InvalidPip {
                index,
                left: bad.left,
                right: bad.right,
            });
        }
        for (index, (a, b)) in tiles.iter().zip(tiles.iter().skip(1)).enumerate() {
            if a.right != b.left {
                return Err(SetupError::BrokenChain { index: index + 1 });
            }
        }
        Ok(Self { tiles })
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// `None` while the board is empty.
    #[must_use]
    pub fn ends(&self) -> Option<Ends> {
        let first = self.tiles.front()?;
        let last = self.tiles.back()?;
        Some(Ends {
            left: first.left,
            right: last.right,
        })
    }

    #[must_use]
    pub fn left_end(&self) -> Option<u8> {
        self.ends().map(|e| e.left)
    }

    #[must_use]
    pub fn right_end(&self) -> Option<u8> {
        self.ends().map(|e| e.right)
    }

    /// Which ends `tile` matches. On an empty board both are open.
    #[must_use]
    pub fn can_play(&self, tile: Tile) -> Playable {
        match self.ends() {
            None => Playable {
                left: true,
                right: true,
            },
            Some(ends) => Playable {
                left: tile.has(ends.left),
                right: tile.has(ends.right),
            },
        }
    }

    /// Lay `tile` on `end`, orienting it so the matching pip touches the chain.
    ///
    /// The first tile goes down as-is on either end. Nothing changes on error.
    pub fn place(&mut self, tile: Tile, end: End) -> Result<PlacedTile, PlayError> {
        let Some(ends) = self.ends() else {
            return Ok(self.place_first(tile));
        };

        let illegal = PlayError::IllegalSide { tile, end };
        match end {
            End::Left => {
                let outer = tile.other(ends.left).ok_or(illegal)?;
                let placed = PlacedTile {
                    left: outer,
                    right: ends.left,
                };
                self.tiles.push_front(placed);
                Ok(placed)
            }
            End::Right => {
                let outer = tile.other(ends.right).ok_or(illegal)?;
                let placed = PlacedTile {
                    left: ends.right,
                    right: outer,
                };
                self.tiles.push_back(placed);
                Ok(placed)
            }
        }
    }

    /// Lay the opening tile as-is. The board must be empty.
    pub(crate) fn place_first(&mut self, tile: Tile) -> PlacedTile {
        debug_assert!(self.is_empty(), "opening tile on a non-empty board");
        let placed = tile.as_placed();
        self.tiles.push_back(placed);
        placed
    }

    pub fn iter(&self) -> impl Iterator<Item = &PlacedTile> {
        self.tiles.iter()
    }

    /// Immutable view of the chain (O(1) clone).
    #[must_use]
    pub fn tiles(&self) -> Vector<PlacedTile> {
        self.tiles.clone()
    }

    #[must_use]
    pub fn mask(&self) -> u32 {
        self.tiles.iter().fold(0, |m, t| m | t.tile().bit())
    }

    #[must_use]
    pub fn to_pairs(&self) -> Vec<TilePair> {
        self.tiles.iter().map(|t| t.pair()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(a: u8, b: u8) -> Tile {
        Tile::new(a, b).unwrap()
    }

    fn p(left: u8, right: u8) -> PlacedTile {
        PlacedTile { left, right }
    }

    #[test]
    fn test_empty_board() {
        let board = Board::new();
        assert!(board.is_empty());
        assert_eq!(board.ends(), None);
        assert_eq!(
            board.can_play(t(0, 5)),
            Playable {
                left: true,
                right: true
            }
        );
    }

    #[test]
    fn test_first_tile_either_side() {
        let mut board = Board::new();
        let placed = board.place(t(2, 1), End::Left).unwrap();
        assert_eq!(placed, p(1, 2));
        assert_eq!(board.ends(), Some(Ends { left: 1, right: 2 }));
    }

    #[test]
    fn test_place_right_orients_tile() {
        let mut board = Board::from_tiles([p(1, 2)]).unwrap();
        board.place(t(5, 2), End::Right).unwrap();
        assert_eq!(board.to_pairs(), vec![TilePair::new(1, 2), TilePair::new(2, 5)]);
        assert_eq!(board.right_end(), Some(5));
    }

    #[test]
    fn test_place_left_orients_tile() {
        let mut board = Board::from_tiles([p(1, 2)]).unwrap();
        board.place(t(1, 4), End::Left).unwrap();
        assert_eq!(board.to_pairs(), vec![TilePair::new(4, 1), TilePair::new(1, 2)]);
        assert_eq!(board.left_end(), Some(4));
    }

    #[test]
    fn test_double_matches_one_end() {
        let board = Board::from_tiles([p(3, 1), p(1, 6)]).unwrap();
        assert_eq!(
            board.can_play(t(3, 3)),
            Playable {
                left: true,
                right: false
            }
        );
    }

    #[test]
    fn test_double_matching_both_ends() {
        let board = Board::from_tiles([p(4, 4)]).unwrap();
        let playable = board.can_play(t(4, 0));
        assert!(playable.left && playable.right);
    }

    #[test]
    fn test_illegal_place_leaves_board() {
        let mut board = Board::from_tiles([p(1, 2)]).unwrap();
        let before = board.clone();
        let err = board.place(t(5, 6), End::Right).unwrap_err();
        assert_eq!(
            err,
            PlayError::IllegalSide {
                tile: t(5, 6),
                end: End::Right
            }
        );
        assert_eq!(board, before);
    }

    #[test]
    fn test_snapshot_is_isolated() {
        let mut board = Board::from_tiles([p(1, 2)]).unwrap();
        let view = board.tiles();
        board.place(t(2, 2), End::Right).unwrap();
        assert_eq!(view.len(), 1);
        assert_eq!(board.len(), 2);
    }

    #[test]
    fn test_from_tiles_rejects_broken_chain() {
        let err = Board::from_tiles([p(1, 2), p(3, 4)]).unwrap_err();
        assert_eq!(err, SetupError::BrokenChain { index: 1 });
    }

    #[test]
    fn test_from_tiles_rejects_out_of_range_pips() {
        let err = Board::from_tiles([p(1, 2), p(2, 9)]).unwrap_err();
        assert_eq!(
            err,
            SetupError::InvalidPip {
                index: 1,
                left: 2,
                right: 9
            }
        );
        // Checked before joins, so a matching out-of-range chain is still rejected.
        assert!(Board::from_tiles([p(7, 7)]).is_err());
    }

    #[test]
    fn test_end_parsing() {
        assert_eq!("left".parse::<End>(), Ok(End::Left));
        assert_eq!("right".parse::<End>(), Ok(End::Right));
        assert_eq!(
            "up".parse::<End>(),
            Err(PlayError::InvalidSide("up".to_string()))
        );
    }
}
