//! The board: a two-ended chain of oriented tiles.
//!
//! Tiles are added on the left or right end only. A tile may join an end if
//! either of its pips equals that end's open value; it is flipped so the
//! matching pip faces inward.

pub mod chain;

pub use chain::{Board, End, Ends, Playable};
