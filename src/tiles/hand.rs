//! A side's hand of tiles.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::tile::{Tile, TilePair};

/// Tiles held by one side, in the order they were received.
///
/// SmallVec keeps a dealt hand inline; long draw streaks spill to the heap.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hand {
    tiles: SmallVec<[Tile; 8]>,
}

impl Hand {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    #[must_use]
    pub fn contains(&self, tile: Tile) -> bool {
        self.tiles.contains(&tile)
    }

    pub fn iter(&self) -> impl Iterator<Item = Tile> + '_ {
        self.tiles.iter().copied()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Tile] {
        &self.tiles
    }

    /// Add a drawn tile.
    pub(crate) fn push(&mut self, tile: Tile) {
        debug_assert!(!self.contains(tile), "duplicate tile {tile} in hand");
        self.tiles.push(tile);
    }

    /// Remove a played tile, preserving the order of the rest.
    ///
    /// Returns `false` if the tile was not held.
    pub(crate) fn remove(&mut self, tile: Tile) -> bool {
        match self.tiles.iter().position(|&t| t == tile) {
            Some(idx) => {
                self.tiles.remove(idx);
                true
            }
            None => false,
        }
    }

    /// Sum of all pips in hand (blocked-game score).
    #[must_use]
    pub fn pip_total(&self) -> u32 {
        self.tiles.iter().map(|t| u32::from(t.pip_sum())).sum()
    }

    /// The double with the highest pip value, if any.
    #[must_use]
    pub fn highest_double(&self) -> Option<Tile> {
        first_max_by_key(self.iter().filter(|t| t.is_double()), |t| t.low())
    }

    /// The tile with the highest pip sum; the earliest one on ties.
    #[must_use]
    pub fn highest_tile(&self) -> Option<Tile> {
        first_max_by_key(self.iter(), |t| t.pip_sum())
    }

    /// Bit mask of held tiles (see [`Tile::bit`]).
    #[must_use]
    pub fn mask(&self) -> u32 {
        self.tiles.iter().fold(0, |m, t| m | t.bit())
    }

    #[must_use]
    pub fn to_pairs(&self) -> Vec<TilePair> {
        self.tiles.iter().map(|t| t.pair()).collect()
    }
}

impl FromIterator<Tile> for Hand {
    fn from_iter<I: IntoIterator<Item = Tile>>(iter: I) -> Self {
        Self {
            tiles: iter.into_iter().collect(),
        }
    }
}

/// `Iterator::max_by_key` keeps the last maximum; the deal rules want the first.
fn first_max_by_key<K: Ord>(
    iter: impl Iterator<Item = Tile>,
    key: impl Fn(&Tile) -> K,
) -> Option<Tile> {
    let mut best: Option<(K, Tile)> = None;
    for tile in iter {
        let k = key(&tile);
        match &best {
            Some((bk, _)) if k <= *bk => {}
            _ => best = Some((k, tile)),
        }
    }
    best.map(|(_, t)| t)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hand(pairs: &[(u8, u8)]) -> Hand {
        pairs.iter().map(|&(a, b)| Tile::new(a, b).unwrap()).collect()
    }

    #[test]
    fn test_push_remove() {
        let mut h = hand(&[(1, 2), (3, 4), (5, 6)]);
        assert!(h.remove(Tile::new(4, 3).unwrap()));
        assert!(!h.remove(Tile::new(4, 3).unwrap()));
        assert_eq!(h.len(), 2);
        assert_eq!(h.to_pairs(), vec![TilePair::new(1, 2), TilePair::new(5, 6)]);

        h.push(Tile::new(0, 0).unwrap());
        assert_eq!(h.len(), 3);
        assert!(h.contains(Tile::new(0, 0).unwrap()));
    }

    #[test]
    fn test_pip_total() {
        assert_eq!(hand(&[(1, 2), (6, 6), (0, 3)]).pip_total(), 18);
        assert_eq!(Hand::new().pip_total(), 0);
    }

    #[test]
    fn test_highest_double() {
        let h = hand(&[(1, 1), (2, 6), (4, 4), (0, 0)]);
        assert_eq!(h.highest_double(), Some(Tile::new(4, 4).unwrap()));
        assert_eq!(hand(&[(1, 2)]).highest_double(), None);
    }

    #[test]
    fn test_highest_tile_prefers_first_on_ties() {
        let h = hand(&[(0, 1), (3, 6), (4, 5), (2, 2)]);
        assert_eq!(h.highest_tile(), Some(Tile::new(3, 6).unwrap()));

        let h = hand(&[(4, 5), (3, 6)]);
        assert_eq!(h.highest_tile(), Some(Tile::new(4, 5).unwrap()));
    }

    #[test]
    fn test_mask() {
        let h = hand(&[(0, 0), (0, 1)]);
        assert_eq!(h.mask(), 0b11);
    }
}
