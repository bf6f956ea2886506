//! Tiles, hands, the boneyard and dealing.
//!
//! - `Tile`: unordered pip pair; `PlacedTile`: oriented tile on the board
//! - `Hand`: tiles owned by one side
//! - `Boneyard`: undealt tiles
//! - `deal`: shuffle the double-six set into the three piles

pub mod tile;
pub mod hand;
pub mod set;

pub use tile::{PlacedTile, Tile, TilePair, MAX_PIP};
pub use hand::Hand;
pub use set::{deal, double_six_set, Boneyard, Deal, FULL_SET_MASK, TILE_COUNT};
