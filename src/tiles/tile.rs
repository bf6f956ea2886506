//! Domino tiles.
//!
//! A [`Tile`] is an unordered pair of pips in `0..=6`: `(2,5)` and `(5,2)` are
//! the same tile. Orientation only exists once a tile is on the board, as a
//! [`PlacedTile`]. [`TilePair`] is the `{left, right}` transport shape used at
//! the boundary with callers.

use serde::{Deserialize, Serialize};

use crate::core::PlayError;

/// Highest pip value in a double-six set.
pub const MAX_PIP: u8 = 6;

/// An unordered domino tile.
///
/// Stored normalized (`lo <= hi`), so derived equality and hashing are
/// symmetric.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "TilePair", into = "TilePair")]
pub struct Tile {
    lo: u8,
    hi: u8,
}

impl Tile {
    /// Create a tile from two pip values in either order.
    pub fn new(a: u8, b: u8) -> Result<Tile, PlayError> {
        if a > MAX_PIP || b > MAX_PIP {
            return Err(PlayError::InvalidPip {
                left: i32::from(a),
                right: i32::from(b),
            });
        }
        Ok(Self::normalized(a, b))
    }

    /// Callers guarantee both pips are in range.
    pub(crate) const fn normalized(a: u8, b: u8) -> Tile {
        if a <= b {
            Tile { lo: a, hi: b }
        } else {
            Tile { lo: b, hi: a }
        }
    }

    /// Lower pip.
    #[inline]
    #[must_use]
    pub fn low(self) -> u8 {
        self.lo
    }

    /// Higher pip.
    #[inline]
    #[must_use]
    pub fn high(self) -> u8 {
        self.hi
    }

    #[inline]
    #[must_use]
    pub fn is_double(self) -> bool {
        self.lo == self.hi
    }

    /// Sum of both pips.
    #[inline]
    #[must_use]
    pub fn pip_sum(self) -> u8 {
        self.lo + self.hi
    }

    /// Does either half show `value`?
    #[inline]
    #[must_use]
    pub fn has(self, value: u8) -> bool {
        self.lo == value || self.hi == value
    }

    /// The pip opposite `value`, if the tile contains `value`.
    #[inline]
    #[must_use]
    pub fn other(self, value: u8) -> Option<u8> {
        if self.lo == value {
            Some(self.hi)
        } else if self.hi == value {
            Some(self.lo)
        } else {
            None
        }
    }

    /// Dense index in `0..28` (triangular numbering on the high pip).
    #[inline]
    #[must_use]
    pub fn id(self) -> u8 {
        self.hi * (self.hi + 1) / 2 + self.lo
    }

    /// Bit for this tile in a 28-bit set mask.
    #[inline]
    #[must_use]
    pub fn bit(self) -> u32 {
        1u32 << self.id()
    }

    /// Orient the tile with `left` on the left. `left` must be one of its pips.
    #[must_use]
    pub fn oriented(self, left: u8) -> Option<PlacedTile> {
        self.other(left).map(|right| PlacedTile { left, right })
    }

    /// The tile as stored, low pip on the left.
    #[must_use]
    pub fn as_placed(self) -> PlacedTile {
        PlacedTile {
            left: self.lo,
            right: self.hi,
        }
    }

    /// Transport shape (`left` = low pip).
    #[must_use]
    pub fn pair(self) -> TilePair {
        self.as_placed().pair()
    }
}

impl std::fmt::Display for Tile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.lo, self.hi)
    }
}

/// A tile laid on the board with a fixed orientation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "TilePair", into = "TilePair")]
pub struct PlacedTile {
    /// Pip facing the left end of the chain.
    pub left: u8,
    /// Pip facing the right end of the chain.
    pub right: u8,
}

impl PlacedTile {
    /// Both pips within `0..=MAX_PIP`.
    #[must_use]
    pub fn is_valid(self) -> bool {
        self.left <= MAX_PIP && self.right <= MAX_PIP
    }

    /// The unordered tile.
    #[must_use]
    pub fn tile(self) -> Tile {
        Tile::normalized(self.left, self.right)
    }

    /// Same tile, halves swapped.
    #[must_use]
    pub fn flipped(self) -> PlacedTile {
        PlacedTile {
            left: self.right,
            right: self.left,
        }
    }

    #[must_use]
    pub fn pair(self) -> TilePair {
        TilePair {
            left: i32::from(self.left),
            right: i32::from(self.right),
        }
    }
}

impl std::fmt::Display for PlacedTile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}|{}]", self.left, self.right)
    }
}

/// `{left, right}` value pair exchanged with callers.
///
/// Wide integers so that out-of-range input reaches the engine and is
/// rejected there instead of failing in the caller's decoder.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TilePair {
    pub left: i32,
    pub right: i32,
}

impl TilePair {
    #[must_use]
    pub const fn new(left: i32, right: i32) -> Self {
        Self { left, right }
    }
}

impl TryFrom<TilePair> for Tile {
    type Error = PlayError;

    fn try_from(pair: TilePair) -> Result<Self, Self::Error> {
        let in_range = |v: i32| (0..=i32::from(MAX_PIP)).contains(&v);
        if !in_range(pair.left) || !in_range(pair.right) {
            return Err(PlayError::InvalidPip {
                left: pair.left,
                right: pair.right,
            });
        }
        // Both values are in 0..=6 here.
        Ok(Tile::normalized(pair.left as u8, pair.right as u8))
    }
}

impl TryFrom<TilePair> for PlacedTile {
    type Error = PlayError;

    fn try_from(pair: TilePair) -> Result<Self, Self::Error> {
        Tile::try_from(pair)?;
        // In range, so the casts are lossless.
        Ok(PlacedTile {
            left: pair.left as u8,
            right: pair.right as u8,
        })
    }
}

impl From<Tile> for TilePair {
    fn from(tile: Tile) -> Self {
        tile.pair()
    }
}

impl From<PlacedTile> for TilePair {
    fn from(placed: PlacedTile) -> Self {
        placed.pair()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(a: u8, b: u8) -> Tile {
        Tile::new(a, b).unwrap()
    }

    #[test]
    fn test_symmetric_equality() {
        for a in 0..=MAX_PIP {
            for b in 0..=MAX_PIP {
                assert_eq!(t(a, b), t(b, a));
            }
        }
    }

    #[test]
    fn test_basics() {
        let tile = t(5, 2);
        assert_eq!(tile.low(), 2);
        assert_eq!(tile.high(), 5);
        assert_eq!(tile.pip_sum(), 7);
        assert!(!tile.is_double());
        assert!(t(3, 3).is_double());
        assert!(tile.has(5));
        assert!(!tile.has(4));
        assert_eq!(tile.other(2), Some(5));
        assert_eq!(tile.other(4), None);
        assert_eq!(tile.to_string(), "2-5");
    }

    #[test]
    fn test_ids_are_dense() {
        let mut seen = 0u32;
        for hi in 0..=MAX_PIP {
            for lo in 0..=hi {
                let tile = t(lo, hi);
                assert!(tile.id() < 28);
                assert_eq!(seen & tile.bit(), 0);
                seen |= tile.bit();
            }
        }
        assert_eq!(seen, (1u32 << 28) - 1);
    }

    #[test]
    fn test_out_of_range() {
        assert_eq!(
            Tile::new(7, 1),
            Err(PlayError::InvalidPip { left: 7, right: 1 })
        );
        assert!(Tile::try_from(TilePair::new(-1, 3)).is_err());
        assert!(Tile::try_from(TilePair::new(3, 7)).is_err());
        assert_eq!(Tile::try_from(TilePair::new(6, 0)), Ok(t(0, 6)));
    }

    #[test]
    fn test_orientation() {
        let tile = t(2, 5);
        assert_eq!(tile.oriented(5), Some(PlacedTile { left: 5, right: 2 }));
        assert_eq!(tile.oriented(3), None);

        let placed = PlacedTile { left: 5, right: 2 };
        assert_eq!(placed.tile(), tile);
        assert_eq!(placed.flipped(), PlacedTile { left: 2, right: 5 });
        assert_eq!(placed.to_string(), "[5|2]");
    }

    #[test]
    fn test_serde_as_pair() {
        let json = serde_json::to_string(&t(4, 1)).unwrap();
        assert_eq!(json, r#"{"left":1,"right":4}"#);

        let back: Tile = serde_json::from_str(r#"{"left":4,"right":1}"#).unwrap();
        assert_eq!(back, t(1, 4));

        assert!(serde_json::from_str::<Tile>(r#"{"left":9,"right":1}"#).is_err());
    }

    #[test]
    fn test_placed_tile_rejects_out_of_range_on_decode() {
        let ok: PlacedTile = serde_json::from_str(r#"{"left":5,"right":2}"#).unwrap();
        assert_eq!(ok, PlacedTile { left: 5, right: 2 });
        assert!(ok.is_valid());

        assert!(serde_json::from_str::<PlacedTile>(r#"{"left":7,"right":7}"#).is_err());
        assert!(!PlacedTile { left: 9, right: 1 }.is_valid());
    }
}
