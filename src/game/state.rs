//! Game state
//!
//! The world aggregate: dungeon layout, entities, score and the run state.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use thiserror::Error;

use crate::data::{ConfigError, GameConfig};
use crate::entities::{self, Enemy, Item, Player};
use crate::world::{generation, Dungeon, Room};

/// The main game struct that holds all game data
#[derive(Debug, Clone)]
pub struct Game {
    pub(super) config: GameConfig,
    /// Immutable after generation
    pub(super) dungeon: Dungeon,
    pub(super) player: Player,
    /// Creation order is the tie-break whenever several share a cell
    pub(super) enemies: Vec<Enemy>,
    /// Creation order is the tie-break whenever several share a cell
    pub(super) items: Vec<Item>,
    pub(super) score: u32,
    pub(super) state: GameState,
    pub(super) messages: Vec<GameMessage>,
}

/// Run states. `GameOver` and `Quit` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    Running,
    /// Player health reached zero
    GameOver,
    /// Player asked to leave
    Quit,
}

impl GameState {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameState::Running)
    }
}

/// A message to display in the game log
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameMessage {
    pub text: String,
    pub category: MessageCategory,
}

/// Categories for message coloring
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageCategory {
    Combat,
    Item,
    System,
}

/// Failures while setting up a run
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("invalid config: {0}")]
    Config(#[from] ConfigError),
    #[error("dungeon has no rooms to place the player in")]
    EmptyDungeon,
}

const MAX_MESSAGES: usize = 100;

impl Game {
    /// Start a run. `None` seeds from entropy.
    pub fn new(config: GameConfig, seed: Option<u64>) -> Result<Self, GameError> {
        let mut rng = match seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_entropy(),
        };
        Self::generate(config, &mut rng)
    }

    /// Start a run drawing from `rng`: player attack, then the layout, then
    /// enemies and items.
    pub fn generate(config: GameConfig, rng: &mut impl Rng) -> Result<Self, GameError> {
        config.validate()?;

        let attack = entities::roll_player_attack(rng, &config);
        let dungeon = generation::generate_dungeon(rng, &config);
        let player = entities::place_player(&dungeon, &config, attack).ok_or(GameError::EmptyDungeon)?;
        let (enemies, items) = entities::populate(rng, &dungeon, &config);

        log::info!("New run: player attack {} at {:?}", attack, player.pos);
        Ok(Self::from_parts(config, dungeon, player, enemies, items))
    }

    /// Assemble a running game from prepared pieces
    pub fn from_parts(
        config: GameConfig,
        dungeon: Dungeon,
        player: Player,
        enemies: Vec<Enemy>,
        items: Vec<Item>,
    ) -> Self {
        let mut game = Self {
            config,
            dungeon,
            player,
            enemies,
            items,
            score: 0,
            state: GameState::Running,
            messages: Vec::new(),
        };
        game.add_message("You enter the dungeon.", MessageCategory::System);
        game
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn dungeon(&self) -> &Dungeon {
        &self.dungeon
    }

    pub fn rooms(&self) -> &[Room] {
        self.dungeon.rooms()
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn enemies(&self) -> &[Enemy] {
        &self.enemies
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn current_room(&self) -> usize {
        self.player.current_room
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    /// True once the run has ended, by death or by quitting
    pub fn is_over(&self) -> bool {
        self.state.is_terminal()
    }

    pub fn messages(&self) -> &[GameMessage] {
        &self.messages
    }

    pub(super) fn set_state(&mut self, state: GameState) {
        log::debug!("State transition: {:?} -> {:?}", self.state, state);
        self.state = state;
    }

    /// Add a message to the log
    pub(super) fn add_message(&mut self, text: impl Into<String>, category: MessageCategory) {
        self.messages.push(GameMessage {
            text: text.into(),
            category,
        });

        if self.messages.len() > MAX_MESSAGES {
            self.messages.remove(0);
        }
    }
}
