//! Move selection policies.
//!
//! A policy only picks among moves the engine already knows are legal. The
//! draw-until-playable loop and passing stay in the engine.

use crate::board::Board;

use super::moves::Move;

/// Chooses one of the legal moves for the side to act.
pub trait MoveStrategy: Send + Sync {
    /// Pick a move index into `moves`. `moves` is never empty.
    ///
    /// Returning `None` or an out-of-range index makes the engine fall back
    /// to the first legal move.
    fn choose(&self, moves: &[Move], board: &Board) -> Option<usize>;
}

/// Play the tile with the highest pip sum.
///
/// Ties go to the earliest move in `moves` (hand order, left before right).
#[derive(Clone, Copy, Debug, Default)]
pub struct HighestPip;

impl MoveStrategy for HighestPip {
    fn choose(&self, moves: &[Move], _board: &Board) -> Option<usize> {
        let mut best: Option<(usize, u8)> = None;
        for (i, mv) in moves.iter().enumerate() {
            let sum = mv.tile.pip_sum();
            if best.map_or(true, |(_, b)| sum > b) {
                best = Some((i, sum));
            }
        }
        best.map(|(i, _)| i)
    }
}

/// Always play the first legal move. Handy as a scripted opponent.
#[derive(Clone, Copy, Debug, Default)]
pub struct FirstLegal;

impl MoveStrategy for FirstLegal {
    fn choose(&self, moves: &[Move], _board: &Board) -> Option<usize> {
        if moves.is_empty() {
            None
        } else {
            Some(0)
        }
    }
}
