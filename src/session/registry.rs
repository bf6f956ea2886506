//! In-memory game store.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::core::{EngineConfig, GameRng, SessionConfig};
use crate::game::DominoesGame;

/// Opaque game identifier, shown as 16 hex digits.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct GameId(pub u64);

impl fmt::Display for GameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:016x}", self.0)
    }
}

impl FromStr for GameId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        u64::from_str_radix(s, 16).map(GameId)
    }
}

#[derive(Debug)]
struct Entry {
    game: DominoesGame,
    last_used: u64,
}

/// Bounded store of running games.
///
/// When full, creating or inserting a game evicts the least recently used
/// one. `get` and `get_mut` count as a use.
#[derive(Debug)]
pub struct GameRegistry {
    games: FxHashMap<GameId, Entry>,
    /// Recency tick -> game, oldest first.
    recency: BTreeMap<u64, GameId>,
    tick: u64,
    capacity: usize,
    ids: GameRng,
}

impl GameRegistry {
    #[must_use]
    pub fn new(config: SessionConfig) -> Self {
        Self::with_id_rng(config, GameRng::from_entropy())
    }

    /// Use a fixed seed for id generation.
    #[must_use]
    pub fn with_id_seed(config: SessionConfig, seed: u64) -> Self {
        Self::with_id_rng(config, GameRng::new(seed).for_context("game_ids"))
    }

    fn with_id_rng(config: SessionConfig, ids: GameRng) -> Self {
        Self {
            games: FxHashMap::default(),
            recency: BTreeMap::new(),
            tick: 0,
            capacity: config.max_games.max(1),
            ids,
        }
    }

    /// Deal a new game and store it.
    pub fn create(&mut self, config: EngineConfig) -> GameId {
        let id = self.fresh_id();
        self.insert(id, DominoesGame::new(config));
        id
    }

    /// Store `game` under `id`, replacing any game already there.
    ///
    /// Returns the id of a game evicted to make room.
    pub fn insert(&mut self, id: GameId, game: DominoesGame) -> Option<GameId> {
        if let Some(old) = self.games.remove(&id) {
            self.recency.remove(&old.last_used);
        }

        let evicted = if self.games.len() >= self.capacity {
            self.evict_oldest()
        } else {
            None
        };

        let last_used = self.next_tick();
        self.recency.insert(last_used, id);
        self.games.insert(id, Entry { game, last_used });
        debug!(%id, len = self.games.len(), "game stored");
        evicted
    }

    #[must_use]
    pub fn get(&mut self, id: GameId) -> Option<&DominoesGame> {
        self.touch(id)?;
        self.games.get(&id).map(|e| &e.game)
    }

    #[must_use]
    pub fn get_mut(&mut self, id: GameId) -> Option<&mut DominoesGame> {
        self.touch(id)?;
        self.games.get_mut(&id).map(|e| &mut e.game)
    }

    /// Look up a game without changing its recency.
    #[must_use]
    pub fn peek(&self, id: GameId) -> Option<&DominoesGame> {
        self.games.get(&id).map(|e| &e.game)
    }

    pub fn remove(&mut self, id: GameId) -> Option<DominoesGame> {
        let entry = self.games.remove(&id)?;
        self.recency.remove(&entry.last_used);
        Some(entry.game)
    }

    #[must_use]
    pub fn contains(&self, id: GameId) -> bool {
        self.games.contains_key(&id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.games.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Ids from least to most recently used.
    pub fn ids(&self) -> impl Iterator<Item = GameId> + '_ {
        self.recency.values().copied()
    }

    fn touch(&mut self, id: GameId) -> Option<()> {
        let old = self.games.get(&id)?.last_used;
        let tick = self.next_tick();
        self.recency.remove(&old);
        self.recency.insert(tick, id);
        if let Some(entry) = self.games.get_mut(&id) {
            entry.last_used = tick;
        }
        Some(())
    }

    fn evict_oldest(&mut self) -> Option<GameId> {
        let (_, id) = self.recency.pop_first()?;
        self.games.remove(&id);
        info!(%id, capacity = self.capacity, "evicted least recently used game");
        Some(id)
    }

    fn next_tick(&mut self) -> u64 {
        self.tick += 1;
        self.tick
    }

    fn fresh_id(&mut self) -> GameId {
        loop {
            let id = GameId(self.ids.next_u64());
            if !self.games.contains_key(&id) {
                return id;
            }
        }
    }
}

impl Default for GameRegistry {
    fn default() -> Self {
        Self::new(SessionConfig::default())
    }
}
