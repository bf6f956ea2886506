//! Python bindings for the dominoes engine.
//!
//! # Quick Start
//!
//! ```python
//! import dominoes_engine as de
//!
//! game = de.DominoesGame(seed=42)
//! print(game.starting_info())
//!
//! try:
//!     result = game.play_player_tile(6, 6, "left")
//!     turn = game.ai_play()
//!     print(result.message, turn.tile, turn.drew_count)
//! except ValueError as err:
//!     print(err)
//!
//! state = game.game_state()
//! ```

use pyo3::prelude::*;

mod py_core;
mod py_game;

pub use py_core::*;
pub use py_game::*;

/// dominoes_engine: two-player double-six dominoes against a greedy AI.
#[pymodule]
fn dominoes_engine(m: &Bound<'_, PyModule>) -> PyResult<()> {
    // Value types
    m.add_class::<PyTile>()?;
    m.add_class::<PyGameState>()?;
    m.add_class::<PyStartingInfo>()?;
    m.add_class::<PyPlayResult>()?;
    m.add_class::<PyAiTurn>()?;
    m.add_class::<PyDrawOutcome>()?;

    // Games
    m.add_class::<PyDominoesGame>()?;
    m.add_class::<PyGameSession>()?;

    Ok(())
}
