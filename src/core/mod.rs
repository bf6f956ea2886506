//! Core engine types: seats, RNG, configuration, errors.
//!
//! These are shared by the tile, board, game and session modules.

pub mod side;
pub mod rng;
pub mod config;
pub mod error;

pub use side::{Side, SideMap};
pub use rng::GameRng;
pub use config::{BlockedTieBreak, EngineConfig, SessionConfig, MAX_GAMES_ENV};
pub use error::{PlayError, SetupError, SnapshotError};
