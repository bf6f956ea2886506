//! Game engine: turn flow, the opening, outcomes and persistence.
//!
//! - `DominoesGame`: owns all state for one game and enforces the rules
//! - `opening`: who starts and with which tile
//! - `outcome`: values returned by engine operations
//! - `history`: ordered move log
//! - `snapshot`: serde/bincode save and restore

pub mod engine;
pub mod history;
pub mod opening;
pub mod outcome;
pub mod snapshot;

pub use engine::{DominoesGame, GameSetup};
pub use history::{MoveKind, MoveRecord};
pub use opening::{determine_opening, StartReason, StartingInfo};
pub use outcome::{AiTurn, BoardEnds, DrawOutcome, EndReason, GameOver, GameStateView, PlayedTile};
pub use snapshot::GameSnapshot;
