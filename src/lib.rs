//! # dominoes-engine
//!
//! A two-player double-six dominoes engine: a human player against a greedy AI.
//!
//! ## Design Principles
//!
//! 1. **Single Owner**: `DominoesGame` owns both hands, the board and the
//!    boneyard. Nothing else mutates them.
//!
//! 2. **All or Nothing**: every operation either applies completely or
//!    returns a `PlayError` with the state untouched.
//!
//! 3. **Deterministic When Seeded**: dealing uses a seeded ChaCha stream, so
//!    the same seed reproduces the same game.
//!
//! ## Architecture
//!
//! - **Tile Conservation**: the 28 tiles are always partitioned between the
//!   two hands, the boneyard and the board.
//!
//! - **Persistent Data Structures**: the board and move log use `im-rs`, so
//!   views handed to callers are O(1) snapshots.
//!
//! - **Strategy Seam**: the AI's choice is a `MoveStrategy`; the draw and pass
//!   loop stays in the engine.
//!
//! ## Modules
//!
//! - `core`: sides, RNG, configuration, errors
//! - `tiles`: tiles, hands, the boneyard, dealing
//! - `board`: the two-ended chain
//! - `strategy`: legal move enumeration and AI selection
//! - `game`: the engine, opening, outcomes, history, snapshots
//! - `session`: bounded game store and session score

pub mod core;
pub mod tiles;
pub mod board;
pub mod strategy;
pub mod game;
pub mod session;

#[cfg(feature = "python")]
mod python;

// Re-export commonly used types
pub use crate::core::{
    Side, SideMap,
    GameRng,
    BlockedTieBreak, EngineConfig, SessionConfig,
    PlayError, SetupError, SnapshotError,
};

pub use crate::tiles::{Tile, PlacedTile, TilePair, Hand, Boneyard, MAX_PIP, TILE_COUNT};

pub use crate::board::{Board, End, Ends, Playable};

pub use crate::strategy::{Move, MoveList, MoveStrategy, HighestPip, FirstLegal, legal_moves};

pub use crate::game::{
    DominoesGame, GameSetup, GameSnapshot,
    AiTurn, DrawOutcome, PlayedTile,
    GameOver, EndReason, GameStateView, BoardEnds,
    StartingInfo, StartReason,
    MoveRecord, MoveKind,
};

pub use crate::session::{GameId, GameRegistry, ScoreBoard};
