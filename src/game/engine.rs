//! The dominoes game engine.
//!
//! `DominoesGame` owns both hands, the board and the boneyard, and is their
//! only mutator. Construction deals and resolves the opening; every public
//! operation either applies completely or returns a `PlayError` with the
//! state untouched.
//!
//! ## Turn flow
//!
//! - Player turn: `play_player_tile`, or `player_draw_until_playable`
//!   (which may pass), or `player_pass` when stuck with an empty boneyard.
//! - AI turn: `ai_play` draws until it can play, then plays or passes.
//!
//! Game over is checked after every play and every pass.

use im::Vector;
use tracing::{debug, info, instrument};

use crate::board::{Board, End, Playable};
use crate::core::{BlockedTieBreak, EngineConfig, GameRng, PlayError, SetupError, Side, SideMap};
use crate::strategy::{has_legal_move, legal_moves, HighestPip, MoveList, MoveStrategy};
use crate::tiles::{self, Boneyard, Hand, PlacedTile, Tile, TilePair, FULL_SET_MASK, TILE_COUNT};

use super::history::{MoveKind, MoveRecord};
use super::opening::{determine_opening, StartingInfo};
use super::outcome::{AiTurn, BoardEnds, DrawOutcome, EndReason, GameOver, GameStateView, PlayedTile};

/// Explicit game layout, for fixtures and restoring saved games.
#[derive(Clone, Debug, Default)]
pub struct GameSetup {
    pub config: EngineConfig,
    pub player_hand: Vec<Tile>,
    pub ai_hand: Vec<Tile>,
    pub boneyard: Vec<Tile>,
    /// Board tiles left to right.
    pub board: Vec<PlacedTile>,
    /// Side to move. Defaults to the player.
    pub current: Option<Side>,
}

/// A single two-player game.
#[derive(Clone, Debug)]
pub struct DominoesGame {
    pub(super) config: EngineConfig,
    pub(super) seed: Option<u64>,
    pub(super) hands: SideMap<Hand>,
    pub(super) boneyard: Boneyard,
    pub(super) board: Board,
    pub(super) current: Side,
    pub(super) outcome: Option<GameOver>,
    pub(super) starting: Option<StartingInfo>,
    pub(super) history: Vector<MoveRecord>,
}

impl DominoesGame {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Deal a new game and resolve the opening.
    ///
    /// If the AI wins the opening, its tile is already on the board and the
    /// player is to move.
    #[must_use]
    pub fn new(config: EngineConfig) -> Self {
        // Deserialized configs skip the builder clamp.
        let hand_size = config.hand_size;
        let config = config.with_hand_size(hand_size);
        let mut rng = match config.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };
        let seed = rng.seed();
        let dealt = tiles::deal(&mut rng, config.hand_size);

        let mut game = Self {
            config,
            seed: Some(seed),
            hands: SideMap::from_pair(dealt.player, dealt.ai),
            boneyard: dealt.boneyard,
            board: Board::new(),
            current: Side::Player,
            outcome: None,
            starting: None,
            history: Vector::new(),
        };
        debug!(seed, boneyard = game.boneyard.len(), "dealt new game");

        game.resolve_opening();
        game
    }

    /// Deal with a fixed seed and default rules.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self::new(EngineConfig::default().with_seed(seed))
    }

    /// Build a game from an explicit layout.
    ///
    /// The four piles must partition the 28-tile set and the board must be a
    /// valid chain. No opening is played; a layout that is already terminal
    /// is reported as game over.
    pub fn from_parts(setup: GameSetup) -> Result<Self, SetupError> {
        let board = Board::from_tiles(setup.board)?;
        let player: Hand = setup.player_hand.into_iter().collect();
        let ai: Hand = setup.ai_hand.into_iter().collect();
        let boneyard = Boneyard::new(setup.boneyard);
        validate_piles(&player, &ai, &boneyard, &board)?;

        let mut game = Self {
            config: setup.config,
            seed: None,
            hands: SideMap::from_pair(player, ai),
            boneyard,
            board,
            current: setup.current.unwrap_or(Side::Player),
            outcome: None,
            starting: None,
            history: Vector::new(),
        };
        game.check_game_over();
        Ok(game)
    }

    fn resolve_opening(&mut self) {
        let Some(mut info) = determine_opening(&self.hands[Side::Player], &self.hands[Side::Ai]) else {
            return;
        };
        debug!(starter = %info.starter, tile = %info.deciding_tile, "opening decided");

        if info.starter == Side::Ai {
            let tile = info.deciding_tile;
            self.hands[Side::Ai].remove(tile);
            let placed = self.board.place_first(tile);
            self.record(Side::Ai, MoveKind::Opening { placed });
            info.opening_tile = Some(placed);
            debug!(tile = %placed, "ai opened");
            self.check_game_over();
        }
        self.current = Side::Player;
        self.starting = Some(info);
    }

    // =========================================================================
    // Player actions
    // =========================================================================

    /// Play a tile from the player's hand on `side` (`"left"` or `"right"`).
    ///
    /// The tile is matched symmetrically: `{5,2}` finds the held `2-5`.
    #[instrument(level = "debug", skip(self))]
    pub fn play_player_tile(&mut self, tile: TilePair, side: &str) -> Result<PlayedTile, PlayError> {
        self.ensure_turn(Side::Player)?;
        let tile = Tile::try_from(tile)?;
        let end: End = side.parse()?;
        self.play_tile(Side::Player, tile, end)
    }

    /// Typed variant of [`play_player_tile`](Self::play_player_tile).
    pub fn play_player_move(&mut self, tile: Tile, end: End) -> Result<PlayedTile, PlayError> {
        self.ensure_turn(Side::Player)?;
        self.play_tile(Side::Player, tile, end)
    }

    /// Draw from the boneyard until the player holds a playable tile.
    ///
    /// Stops immediately (0 drawn) if a tile is already playable. Passes the
    /// turn to the AI if the boneyard runs out first.
    #[instrument(level = "debug", skip(self))]
    pub fn player_draw_until_playable(&mut self) -> Result<DrawOutcome, PlayError> {
        self.ensure_turn(Side::Player)?;
        if self.boneyard.is_empty() {
            return Err(PlayError::BoneyardEmpty);
        }

        let mut drew_count = 0;
        loop {
            if has_legal_move(&self.hands[Side::Player], &self.board) {
                debug!(drew_count, "player can play");
                return Ok(DrawOutcome {
                    drew_count,
                    can_play: true,
                    passed: false,
                });
            }
            if self.draw(Side::Player).is_some() {
                drew_count += 1;
                continue;
            }
            self.pass(Side::Player);
            return Ok(DrawOutcome {
                drew_count,
                can_play: false,
                passed: true,
            });
        }
    }

    /// Pass without drawing. Only allowed when the player has no legal tile
    /// and the boneyard is empty.
    #[instrument(level = "debug", skip(self))]
    pub fn player_pass(&mut self) -> Result<(), PlayError> {
        self.ensure_turn(Side::Player)?;
        if !self.boneyard.is_empty() || has_legal_move(&self.hands[Side::Player], &self.board) {
            return Err(PlayError::CannotPass);
        }
        self.pass(Side::Player);
        Ok(())
    }

    // =========================================================================
    // AI actions
    // =========================================================================

    /// Take the AI's turn with the default highest-pip strategy.
    pub fn ai_play(&mut self) -> Result<AiTurn, PlayError> {
        self.ai_play_with(&HighestPip)
    }

    /// Take the AI's turn: draw until something is playable, then play the
    /// strategy's pick; pass if the boneyard runs dry first.
    #[instrument(level = "debug", skip(self, strategy))]
    pub fn ai_play_with(&mut self, strategy: &dyn MoveStrategy) -> Result<AiTurn, PlayError> {
        self.ensure_turn(Side::Ai)?;

        let mut drew_count = 0;
        loop {
            let moves = legal_moves(&self.hands[Side::Ai], &self.board);
            if let Some(&mv) = strategy
                .choose(&moves, &self.board)
                .and_then(|i| moves.get(i))
                .or_else(|| moves.first())
            {
                let played = self.play_tile(Side::Ai, mv.tile, mv.end)?;
                return Ok(AiTurn {
                    played: Some(played),
                    drew_count,
                });
            }
            if self.draw(Side::Ai).is_some() {
                drew_count += 1;
                continue;
            }
            self.pass(Side::Ai);
            return Ok(AiTurn {
                played: None,
                drew_count,
            });
        }
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// The player's hand as value pairs, in hand order.
    #[must_use]
    pub fn player_hand(&self) -> Vec<TilePair> {
        self.hands[Side::Player].to_pairs()
    }

    /// The board as oriented value pairs, left to right.
    #[must_use]
    pub fn board(&self) -> Vec<TilePair> {
        self.board.to_pairs()
    }

    /// Immutable view of the board chain.
    #[must_use]
    pub fn board_tiles(&self) -> Vector<PlacedTile> {
        self.board.tiles()
    }

    #[must_use]
    pub fn game_state(&self) -> GameStateView {
        let ends = self.board.ends();
        GameStateView {
            current_player: self.current,
            game_over: self.outcome.is_some(),
            winner: self.winner(),
            player_tile_count: self.hands[Side::Player].len(),
            ai_tile_count: self.hands[Side::Ai].len(),
            boneyard_count: self.boneyard.len(),
            board_ends: BoardEnds {
                left: ends.map(|e| e.left),
                right: ends.map(|e| e.right),
            },
            player_can_play: has_legal_move(&self.hands[self.current], &self.board),
        }
    }

    /// Which ends `tile` could go on right now.
    #[must_use]
    pub fn can_play(&self, tile: Tile) -> Playable {
        self.board.can_play(tile)
    }

    /// Legal `(tile, end)` pairs for `side`'s hand.
    #[must_use]
    pub fn legal_moves(&self, side: Side) -> MoveList {
        legal_moves(&self.hands[side], &self.board)
    }

    #[must_use]
    pub fn hand(&self, side: Side) -> &Hand {
        &self.hands[side]
    }

    #[must_use]
    pub fn pip_total(&self, side: Side) -> u32 {
        self.hands[side].pip_total()
    }

    #[must_use]
    pub fn boneyard_count(&self) -> usize {
        self.boneyard.len()
    }

    #[must_use]
    pub fn current_player(&self) -> Side {
        self.current
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }

    #[must_use]
    pub fn outcome(&self) -> Option<GameOver> {
        self.outcome
    }

    #[must_use]
    pub fn winner(&self) -> Option<Side> {
        self.outcome.and_then(|o| o.winner)
    }

    /// How the opening was decided; `None` for games built with `from_parts`.
    #[must_use]
    pub fn starting_info(&self) -> Option<&StartingInfo> {
        self.starting.as_ref()
    }

    /// Seed of the deal; `None` for games built with `from_parts`.
    #[must_use]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Ordered move log (O(1) clone).
    #[must_use]
    pub fn history(&self) -> Vector<MoveRecord> {
        self.history.clone()
    }

    // =========================================================================
    // Internals
    // =========================================================================

    fn ensure_turn(&self, side: Side) -> Result<(), PlayError> {
        if self.outcome.is_some() {
            return Err(PlayError::GameOver);
        }
        if self.current != side {
            return Err(PlayError::NotYourTurn);
        }
        Ok(())
    }

    /// Validate and place a tile from `side`'s hand, then hand over the turn.
    fn play_tile(&mut self, side: Side, tile: Tile, end: End) -> Result<PlayedTile, PlayError> {
        if !self.hands[side].contains(tile) {
            return Err(PlayError::NotInHand(tile));
        }
        if !self.board.can_play(tile).allows(end) {
            return Err(PlayError::IllegalSide { tile, end });
        }

        let placed = self.board.place(tile, end)?;
        self.hands[side].remove(tile);
        self.record(side, MoveKind::Play { tile, end, placed });
        debug!(side = %side, tile = %placed, end = %end, "tile played");

        self.current = side.opponent();
        self.check_game_over();
        Ok(PlayedTile { tile, end, placed })
    }

    fn draw(&mut self, side: Side) -> Option<Tile> {
        let tile = self.boneyard.draw()?;
        self.hands[side].push(tile);
        self.record(side, MoveKind::Draw { tile });
        debug!(side = %side, remaining = self.boneyard.len(), "drew tile");
        Some(tile)
    }

    fn pass(&mut self, side: Side) {
        self.record(side, MoveKind::Pass);
        debug!(side = %side, "passed");
        self.current = side.opponent();
        self.check_game_over();
    }

    fn record(&mut self, side: Side, kind: MoveKind) {
        let sequence = self.history.len() as u32;
        self.history.push_back(MoveRecord { sequence, side, kind });
    }

    /// Domino-out beats everything; otherwise a dead board with an empty
    /// boneyard goes to the lower pip total.
    pub(super) fn check_game_over(&mut self) {
        if self.outcome.is_some() {
            return;
        }

        let outcome = if self.hands[Side::Player].is_empty() {
            GameOver {
                winner: Some(Side::Player),
                reason: EndReason::DominoOut,
            }
        } else if self.hands[Side::Ai].is_empty() {
            GameOver {
                winner: Some(Side::Ai),
                reason: EndReason::DominoOut,
            }
        } else if self.boneyard.is_empty()
            && !has_legal_move(&self.hands[Side::Player], &self.board)
            && !has_legal_move(&self.hands[Side::Ai], &self.board)
        {
            let player_pips = self.hands[Side::Player].pip_total();
            let ai_pips = self.hands[Side::Ai].pip_total();
            let winner = if player_pips < ai_pips {
                Some(Side::Player)
            } else if ai_pips < player_pips {
                Some(Side::Ai)
            } else {
                match self.config.blocked_tie {
                    BlockedTieBreak::Ai => Some(Side::Ai),
                    BlockedTieBreak::Player => Some(Side::Player),
                    BlockedTieBreak::Draw => None,
                }
            };
            GameOver {
                winner,
                reason: EndReason::Blocked { player_pips, ai_pips },
            }
        } else {
            return;
        };

        info!(winner = ?outcome.winner, reason = ?outcome.reason, "game over");
        self.outcome = Some(outcome);
    }
}

impl Default for DominoesGame {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

/// Check the piles partition the full set with no repeats.
pub(super) fn validate_piles(
    player: &Hand,
    ai: &Hand,
    boneyard: &Boneyard,
    board: &Board,
) -> Result<(), SetupError> {
    let all = player
        .iter()
        .chain(ai.iter())
        .chain(boneyard.as_slice().iter().copied())
        .chain(board.iter().map(|p| p.tile()));

    let mut seen = 0u32;
    let mut count = 0usize;
    for tile in all {
        if seen & tile.bit() != 0 {
            return Err(SetupError::DuplicateTile(tile));
        }
        seen |= tile.bit();
        count += 1;
    }

    if count != TILE_COUNT || seen != FULL_SET_MASK {
        return Err(SetupError::TileCount(count));
    }
    Ok(())
}
