//! The double-six set, the boneyard, and dealing.

use serde::{Deserialize, Serialize};

use crate::core::GameRng;

use super::hand::Hand;
use super::tile::{Tile, TilePair, MAX_PIP};

/// Number of tiles in a double-six set.
pub const TILE_COUNT: usize = 28;

/// Mask with one bit per tile of the full set.
pub const FULL_SET_MASK: u32 = (1u32 << TILE_COUNT) - 1;

/// All 28 tiles `(i, j)` with `0 <= i <= j <= 6`, in canonical order.
#[must_use]
pub fn double_six_set() -> Vec<Tile> {
    let mut tiles = Vec::with_capacity(TILE_COUNT);
    for i in 0..=MAX_PIP {
        for j in i..=MAX_PIP {
            tiles.push(Tile::normalized(i, j));
        }
    }
    tiles
}

/// Undealt tiles, drawn from the top (last element).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Boneyard {
    tiles: Vec<Tile>,
}

impl Boneyard {
    #[must_use]
    pub fn new(tiles: Vec<Tile>) -> Self {
        Self { tiles }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Take the top tile.
    pub(crate) fn draw(&mut self) -> Option<Tile> {
        self.tiles.pop()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Tile] {
        &self.tiles
    }

    #[must_use]
    pub fn mask(&self) -> u32 {
        self.tiles.iter().fold(0, |m, t| m | t.bit())
    }

    #[must_use]
    pub fn to_pairs(&self) -> Vec<TilePair> {
        self.tiles.iter().map(|t| t.pair()).collect()
    }
}

/// The three piles produced by a deal.
#[derive(Clone, Debug)]
pub struct Deal {
    pub player: Hand,
    pub ai: Hand,
    pub boneyard: Boneyard,
}

/// Shuffle a fresh set and deal `hand_size` tiles to each side.
///
/// The player takes the first `hand_size` shuffled tiles, the AI the next
/// `hand_size`, and the rest form the boneyard. `hand_size` is clamped to
/// `1..=14`.
#[must_use]
pub fn deal(rng: &mut GameRng, hand_size: usize) -> Deal {
    let mut tiles = double_six_set();
    rng.shuffle(&mut tiles);

    let hand_size = hand_size.clamp(1, TILE_COUNT / 2);
    let boneyard = tiles.split_off(hand_size * 2);
    let ai = tiles.split_off(hand_size);

    Deal {
        player: tiles.into_iter().collect(),
        ai: ai.into_iter().collect(),
        boneyard: Boneyard::new(boneyard),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_is_complete() {
        let set = double_six_set();
        assert_eq!(set.len(), TILE_COUNT);
        let mask = set.iter().fold(0u32, |m, t| m | t.bit());
        assert_eq!(mask, FULL_SET_MASK);
        assert_eq!(set.iter().filter(|t| t.is_double()).count(), 7);
    }

    #[test]
    fn test_deal_partitions_set() {
        let mut rng = GameRng::new(42);
        let deal = deal(&mut rng, 7);

        assert_eq!(deal.player.len(), 7);
        assert_eq!(deal.ai.len(), 7);
        assert_eq!(deal.boneyard.len(), 14);

        let (p, a, b) = (deal.player.mask(), deal.ai.mask(), deal.boneyard.mask());
        assert_eq!(p & a, 0);
        assert_eq!(p & b, 0);
        assert_eq!(a & b, 0);
        assert_eq!(p | a | b, FULL_SET_MASK);
    }

    #[test]
    fn test_deal_is_seeded() {
        let d1 = deal(&mut GameRng::new(3), 7);
        let d2 = deal(&mut GameRng::new(3), 7);
        assert_eq!(d1.player, d2.player);
        assert_eq!(d1.ai, d2.ai);
        assert_eq!(d1.boneyard, d2.boneyard);
    }

    #[test]
    fn test_deal_clamps_hand_size() {
        let mut rng = GameRng::new(4);
        let dealt = deal(&mut rng, 0);
        assert_eq!((dealt.player.len(), dealt.ai.len(), dealt.boneyard.len()), (1, 1, 26));

        let dealt = deal(&mut rng, 40);
        assert_eq!((dealt.player.len(), dealt.ai.len(), dealt.boneyard.len()), (14, 14, 0));
    }

    #[test]
    fn test_boneyard_draws_from_top() {
        let a = Tile::new(0, 1).unwrap();
        let b = Tile::new(2, 3).unwrap();
        let mut yard = Boneyard::new(vec![a, b]);
        assert_eq!(yard.draw(), Some(b));
        assert_eq!(yard.draw(), Some(a));
        assert_eq!(yard.draw(), None);
        assert!(yard.is_empty());
    }
}
