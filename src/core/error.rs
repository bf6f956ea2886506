//! Error types.
//!
//! Every engine failure is a rejected operation: the engine state is left
//! untouched and the error's `Display` text is the human-readable reason.

use thiserror::Error;

use crate::board::End;
use crate::tiles::Tile;

/// A rejected game action.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlayError {
    #[error("not your turn")]
    NotYourTurn,
    #[error("game is over")]
    GameOver,
    #[error("tile {0} is not in hand")]
    NotInHand(Tile),
    #[error("cannot play {tile} on the {end} side")]
    IllegalSide { tile: Tile, end: End },
    #[error("no tiles left to draw")]
    BoneyardEmpty,
    #[error("cannot pass while a tile is playable or the boneyard has tiles")]
    CannotPass,
    #[error("pip value out of range: {left}-{right}")]
    InvalidPip { left: i32, right: i32 },
    #[error("invalid side {0:?}, expected \"left\" or \"right\"")]
    InvalidSide(String),
}

/// An invalid explicit game setup (fixtures and restored snapshots).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SetupError {
    #[error("tile {0} appears more than once")]
    DuplicateTile(Tile),
    #[error("expected 28 tiles across hands, boneyard and board, found {0}")]
    TileCount(usize),
    #[error("board tile {index} does not match its neighbour")]
    BrokenChain { index: usize },
    #[error("board tile {index} has a pip out of range: [{left}|{right}]")]
    InvalidPip { index: usize, left: u8, right: u8 },
}

/// Failure decoding or validating a snapshot.
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("failed to encode or decode snapshot: {0}")]
    Codec(#[from] bincode::Error),
    #[error("invalid snapshot: {0}")]
    Invalid(#[from] SetupError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reasons_are_distinct() {
        let tile = Tile::new(2, 5).unwrap();
        let reasons = [
            PlayError::NotYourTurn.to_string(),
            PlayError::GameOver.to_string(),
            PlayError::NotInHand(tile).to_string(),
            PlayError::IllegalSide { tile, end: End::Left }.to_string(),
            PlayError::BoneyardEmpty.to_string(),
            PlayError::CannotPass.to_string(),
            PlayError::InvalidPip { left: 9, right: 1 }.to_string(),
            PlayError::InvalidSide("up".into()).to_string(),
        ];

        for (i, a) in reasons.iter().enumerate() {
            for b in &reasons[i + 1..] {
                assert_ne!(a, b);
            }
        }
        assert_eq!(reasons[3], "cannot play 2-5 on the left side");
    }
}
