//! Game bindings for Python.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::core::{BlockedTieBreak, EngineConfig, PlayError, SessionConfig, Side};
use crate::game::DominoesGame;
use crate::session::{GameId, GameRegistry, ScoreBoard};
use crate::tiles::TilePair;

use super::py_core::{PyAiTurn, PyDrawOutcome, PyGameState, PyPlayResult, PyStartingInfo, PyTile};

/// Python wrapper for DominoesGame.
///
/// Rejected operations raise `ValueError` with the reason; the state is left
/// unchanged.
#[pyclass(name = "DominoesGame")]
pub struct PyDominoesGame {
    game: DominoesGame,
}

#[pymethods]
impl PyDominoesGame {
    /// Deal a new game.
    ///
    /// # Arguments
    /// - seed: RNG seed; random when omitted
    /// - hand_size: tiles dealt to each side
    /// - blocked_tie: `"ai"`, `"player"` or `"draw"`
    #[new]
    #[pyo3(signature = (seed = None, hand_size = 7, blocked_tie = "ai"))]
    fn new(seed: Option<u64>, hand_size: usize, blocked_tie: &str) -> PyResult<Self> {
        let mut config = EngineConfig::default()
            .with_hand_size(hand_size)
            .with_blocked_tie(parse_tie(blocked_tie)?);
        config.seed = seed;
        Ok(Self {
            game: DominoesGame::new(config),
        })
    }

    /// Play `(left, right)` from the player's hand on `"left"` or `"right"`.
    fn play_player_tile(&mut self, left: i32, right: i32, side: &str) -> PyResult<PyPlayResult> {
        self.game
            .play_player_tile(TilePair::new(left, right), side)
            .map(PyPlayResult)
            .map_err(play_error)
    }

    /// Take the AI's turn.
    fn ai_play(&mut self) -> PyResult<PyAiTurn> {
        self.game.ai_play().map(PyAiTurn).map_err(play_error)
    }

    fn player_draw_until_playable(&mut self) -> PyResult<PyDrawOutcome> {
        self.game
            .player_draw_until_playable()
            .map(PyDrawOutcome)
            .map_err(play_error)
    }

    /// Pass when stuck with an empty boneyard.
    fn player_pass(&mut self) -> PyResult<String> {
        self.game.player_pass().map_err(play_error)?;
        Ok("Passed - turn goes to AI".to_string())
    }

    fn player_hand(&self) -> Vec<PyTile> {
        self.game.player_hand().into_iter().map(PyTile).collect()
    }

    fn board(&self) -> Vec<PyTile> {
        self.game.board().into_iter().map(PyTile).collect()
    }

    fn game_state(&self) -> PyGameState {
        PyGameState(self.game.game_state())
    }

    fn starting_info(&self) -> Option<PyStartingInfo> {
        self.game.starting_info().cloned().map(PyStartingInfo)
    }

    /// Legal `(tile, side)` pairs for the player.
    fn legal_moves(&self) -> Vec<(PyTile, &'static str)> {
        self.game
            .legal_moves(Side::Player)
            .into_iter()
            .map(|mv| (PyTile(mv.tile.pair()), mv.end.as_str()))
            .collect()
    }

    #[getter]
    fn seed(&self) -> Option<u64> {
        self.game.seed()
    }

    /// Encode the full game state.
    fn to_bytes(&self) -> PyResult<Vec<u8>> {
        self.game
            .to_bytes()
            .map_err(|e| PyValueError::new_err(e.to_string()))
    }

    /// Restore a game saved with `to_bytes`.
    #[staticmethod]
    fn from_bytes(data: Vec<u8>) -> PyResult<Self> {
        DominoesGame::from_bytes(&data)
            .map(|game| Self { game })
            .map_err(|e| PyValueError::new_err(e.to_string()))
    }

    fn __repr__(&self) -> String {
        let state = self.game.game_state();
        format!(
            "DominoesGame(current={}, board={}, over={})",
            state.current_player,
            self.game.board().len(),
            state.game_over
        )
    }
}

fn play_error(err: PlayError) -> PyErr {
    PyValueError::new_err(err.to_string())
}

fn parse_tie(value: &str) -> PyResult<BlockedTieBreak> {
    match value {
        "ai" => Ok(BlockedTieBreak::Ai),
        "player" => Ok(BlockedTieBreak::Player),
        "draw" => Ok(BlockedTieBreak::Draw),
        other => Err(PyValueError::new_err(format!("unknown blocked_tie: {other}"))),
    }
}

/// Python wrapper for a games store plus its session score.
///
/// Games are addressed by hex id strings.
#[pyclass(name = "GameSession")]
pub struct PyGameSession {
    registry: GameRegistry,
    score: ScoreBoard,
}

#[pymethods]
impl PyGameSession {
    /// `max_games` defaults to `MAX_GAMES_IN_MEMORY` from the environment.
    #[new]
    #[pyo3(signature = (max_games = None))]
    fn new(max_games: Option<usize>) -> Self {
        let config = match max_games {
            Some(n) => SessionConfig::default().with_max_games(n),
            None => SessionConfig::from_env(),
        };
        Self {
            registry: GameRegistry::new(config),
            score: ScoreBoard::new(),
        }
    }

    /// Deal a game and return its id.
    #[pyo3(signature = (seed = None))]
    fn new_game(&mut self, seed: Option<u64>) -> String {
        let mut config = EngineConfig::default();
        config.seed = seed;
        self.registry.create(config).to_string()
    }

    /// Play for the player, then let the AI answer if the game goes on.
    ///
    /// Returns `(play, ai_turn)`; `ai_turn` is `None` when the player's move
    /// ended the game. A rejected move raises `ValueError`.
    fn play(
        &mut self,
        game_id: &str,
        left: i32,
        right: i32,
        side: &str,
    ) -> PyResult<(PyPlayResult, Option<PyAiTurn>)> {
        let id = parse_id(game_id)?;
        let game = self
            .registry
            .get_mut(id)
            .ok_or_else(|| PyValueError::new_err(format!("unknown game: {game_id}")))?;

        let played = game
            .play_player_tile(TilePair::new(left, right), side)
            .map_err(play_error)?;
        let ai_turn = if game.is_over() {
            None
        } else {
            Some(game.ai_play().map_err(play_error)?)
        };

        if let Some(outcome) = game.outcome() {
            self.score.record(id, outcome);
        }
        Ok((PyPlayResult(played), ai_turn.map(PyAiTurn)))
    }

    fn game_state(&mut self, game_id: &str) -> PyResult<PyGameState> {
        let id = parse_id(game_id)?;
        self.registry
            .get(id)
            .map(|g| PyGameState(g.game_state()))
            .ok_or_else(|| PyValueError::new_err(format!("unknown game: {game_id}")))
    }

    /// `(player_wins, ai_wins)`.
    fn score(&self) -> (u32, u32) {
        (self.score.player_wins, self.score.ai_wins)
    }

    fn reset_score(&mut self) {
        self.score.reset();
    }

    fn __len__(&self) -> usize {
        self.registry.len()
    }
}

fn parse_id(game_id: &str) -> PyResult<GameId> {
    game_id
        .parse()
        .map_err(|_| PyValueError::new_err(format!("invalid game id: {game_id}")))
}
