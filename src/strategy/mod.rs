//! AI move selection.
//!
//! - `legal_moves`: enumerate `(tile, end)` pairs for a hand
//! - `MoveStrategy`: trait seam for choosing among them
//! - `HighestPip`: the default AI, plays the largest pip sum

pub mod moves;
pub mod policy;

pub use moves::{has_legal_move, legal_moves, Move, MoveList};
pub use policy::{FirstLegal, HighestPip, MoveStrategy};
