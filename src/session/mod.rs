//! Session layer: a bounded store of running games and a win tally.
//!
//! Nothing here touches game rules; it only holds `DominoesGame` values.

pub mod registry;
pub mod score;

pub use registry::{GameId, GameRegistry};
pub use score::ScoreBoard;
