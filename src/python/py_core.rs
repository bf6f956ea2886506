//! Value type bindings for Python.

use pyo3::prelude::*;

use crate::game::{AiTurn, DrawOutcome, GameStateView, PlayedTile, StartingInfo};
use crate::tiles::{Tile, TilePair};

/// Python wrapper for a tile value pair.
///
/// Hand tiles are unordered; board tiles keep their orientation.
#[pyclass(name = "Tile")]
#[derive(Clone, Copy, Debug)]
pub struct PyTile(pub TilePair);

#[pymethods]
impl PyTile {
    #[new]
    fn new(left: i32, right: i32) -> Self {
        Self(TilePair::new(left, right))
    }

    #[getter]
    fn left(&self) -> i32 {
        self.0.left
    }

    #[getter]
    fn right(&self) -> i32 {
        self.0.right
    }

    /// Both values equal.
    fn is_double(&self) -> bool {
        self.0.left == self.0.right
    }

    fn as_tuple(&self) -> (i32, i32) {
        (self.0.left, self.0.right)
    }

    fn __repr__(&self) -> String {
        format!("[{}|{}]", self.0.left, self.0.right)
    }

    /// Unordered comparison, matching how hand tiles are looked up.
    fn __eq__(&self, other: &Self) -> bool {
        match (Tile::try_from(self.0), Tile::try_from(other.0)) {
            (Ok(a), Ok(b)) => a == b,
            _ => self.0 == other.0,
        }
    }

    fn __hash__(&self) -> u64 {
        let lo = self.0.left.min(self.0.right) as u64;
        let hi = self.0.left.max(self.0.right) as u64;
        (lo << 32) | hi
    }
}

/// Python wrapper for the derived game state.
#[pyclass(name = "GameState")]
#[derive(Clone, Debug)]
pub struct PyGameState(pub GameStateView);

#[pymethods]
impl PyGameState {
    /// `"player"` or `"ai"`.
    #[getter]
    fn current_player(&self) -> &'static str {
        self.0.current_player.as_str()
    }

    #[getter]
    fn game_over(&self) -> bool {
        self.0.game_over
    }

    #[getter]
    fn winner(&self) -> Option<&'static str> {
        self.0.winner.map(|s| s.as_str())
    }

    #[getter]
    fn player_tile_count(&self) -> usize {
        self.0.player_tile_count
    }

    #[getter]
    fn ai_tile_count(&self) -> usize {
        self.0.ai_tile_count
    }

    #[getter]
    fn boneyard_count(&self) -> usize {
        self.0.boneyard_count
    }

    /// `(left, right)`, both `None` on an empty board.
    #[getter]
    fn board_ends(&self) -> (Option<u8>, Option<u8>) {
        (self.0.board_ends.left, self.0.board_ends.right)
    }

    #[getter]
    fn player_can_play(&self) -> bool {
        self.0.player_can_play
    }

    fn __repr__(&self) -> String {
        format!(
            "GameState(current={}, over={}, player={}, ai={}, boneyard={})",
            self.0.current_player,
            self.0.game_over,
            self.0.player_tile_count,
            self.0.ai_tile_count,
            self.0.boneyard_count
        )
    }
}

/// How the opening was decided.
#[pyclass(name = "StartingInfo")]
#[derive(Clone, Debug)]
pub struct PyStartingInfo(pub StartingInfo);

#[pymethods]
impl PyStartingInfo {
    #[getter]
    fn starter(&self) -> &'static str {
        self.0.starter.as_str()
    }

    #[getter]
    fn deciding_tile(&self) -> PyTile {
        PyTile(self.0.deciding_tile.pair())
    }

    /// The tile the AI opened with, if it started.
    #[getter]
    fn opening_tile(&self) -> Option<PyTile> {
        self.0.opening_tile.map(|p| PyTile(p.pair()))
    }

    #[getter]
    fn message(&self) -> String {
        self.0.describe()
    }

    fn __repr__(&self) -> String {
        format!("StartingInfo({})", self.0.describe())
    }
}

/// A placed player tile.
#[pyclass(name = "PlayResult")]
#[derive(Clone, Copy, Debug)]
pub struct PyPlayResult(pub PlayedTile);

#[pymethods]
impl PyPlayResult {
    /// Always true; rejected moves raise `ValueError`.
    #[getter]
    fn success(&self) -> bool {
        true
    }

    /// The tile as oriented on the board.
    #[getter]
    fn tile(&self) -> PyTile {
        PyTile(self.0.placed.pair())
    }

    /// `"left"` or `"right"`.
    #[getter]
    fn side(&self) -> &'static str {
        self.0.end.as_str()
    }

    #[getter]
    fn message(&self) -> String {
        format!("Played {} on {} side", self.0.placed, self.0.end)
    }

    fn __repr__(&self) -> String {
        format!("PlayResult({} on {})", self.0.placed, self.0.end)
    }
}

/// The AI's turn: what it drew and what it played.
#[pyclass(name = "AiTurn")]
#[derive(Clone, Copy, Debug)]
pub struct PyAiTurn(pub AiTurn);

#[pymethods]
impl PyAiTurn {
    /// False when the AI passed.
    #[getter]
    fn played(&self) -> bool {
        self.0.played()
    }

    #[getter]
    fn tile(&self) -> Option<PyTile> {
        self.0.played.map(|p| PyTile(p.placed.pair()))
    }

    #[getter]
    fn side(&self) -> Option<&'static str> {
        self.0.played.map(|p| p.end.as_str())
    }

    #[getter]
    fn drew_count(&self) -> usize {
        self.0.drew_count
    }

    #[getter]
    fn message(&self) -> String {
        self.0.message()
    }

    fn __repr__(&self) -> String {
        format!("AiTurn({})", self.0.message())
    }
}

/// Result of the player's draw-until-playable.
#[pyclass(name = "DrawOutcome")]
#[derive(Clone, Copy, Debug)]
pub struct PyDrawOutcome(pub DrawOutcome);

#[pymethods]
impl PyDrawOutcome {
    #[getter]
    fn drew_count(&self) -> usize {
        self.0.drew_count
    }

    #[getter]
    fn can_play(&self) -> bool {
        self.0.can_play
    }

    /// The boneyard ran dry and the turn went to the AI.
    #[getter]
    fn passed(&self) -> bool {
        self.0.passed
    }

    #[getter]
    fn message(&self) -> String {
        self.0.message()
    }

    fn __repr__(&self) -> String {
        format!(
            "DrawOutcome(drew={}, can_play={}, passed={})",
            self.0.drew_count, self.0.can_play, self.0.passed
        )
    }
}
