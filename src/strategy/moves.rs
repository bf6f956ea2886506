//! Legal move enumeration.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::board::{Board, End};
use crate::tiles::{Hand, Tile};

/// A tile and the end it would be played on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub tile: Tile,
    pub end: End,
}

impl Move {
    #[must_use]
    pub const fn new(tile: Tile, end: End) -> Self {
        Self { tile, end }
    }
}

/// Up to 8 moves inline; a full hand on a symmetric board can exceed that.
pub type MoveList = SmallVec<[Move; 8]>;

/// Every legal `(tile, end)` pair, in hand order, left before right.
///
/// On an empty board each tile is listed for both ends.
#[must_use]
pub fn legal_moves(hand: &Hand, board: &Board) -> MoveList {
    let mut moves = MoveList::new();
    for tile in hand.iter() {
        let playable = board.can_play(tile);
        for end in End::BOTH {
            if playable.allows(end) {
                moves.push(Move::new(tile, end));
            }
        }
    }
    moves
}

/// Cheaper than `legal_moves` when only existence matters.
#[must_use]
pub fn has_legal_move(hand: &Hand, board: &Board) -> bool {
    hand.iter().any(|t| board.can_play(t).any())
}
