//! Game tunables
//!
//! Every number the generator, population and turn engine consult lives here,
//! so a RON file can reshape a run without touching code.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// An inclusive `(min, max)` range sampled uniformly
pub type Span = (u32, u32);

/// All tunable values for a run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Logical dungeon width in cells
    pub dungeon_width: i32,
    /// Logical dungeon height in cells
    pub dungeon_height: i32,
    /// Side length of every room, walls included
    pub room_size: i32,
    /// How many rooms the generator asks for
    pub room_count: Span,
    /// Rejection-sampling attempts per room before the last unchecked try
    pub placement_attempts: u32,
    /// Enemies spawned per room
    pub enemies_per_room: Span,
    /// Items spawned per room
    pub items_per_room: Span,
    /// Starting health of every enemy
    pub enemy_health: i32,
    /// Enemy attack range
    pub enemy_attack: Span,
    /// Player health cap (and starting health)
    pub player_max_health: i32,
    /// Player attack range, drawn once per run
    pub player_attack: Span,
    /// Score for collecting an item
    pub item_score: u32,
    /// Health restored by an item
    pub item_heal: i32,
    /// Score for slaying an enemy
    pub kill_score: u32,
    /// Pause after each turn in the terminal adapter (milliseconds)
    pub turn_delay_ms: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            dungeon_width: 20,
            dungeon_height: 15,
            room_size: 7,
            room_count: (4, 6),
            placement_attempts: 100,
            enemies_per_room: (1, 3),
            items_per_room: (2, 5),
            enemy_health: 5,
            enemy_attack: (1, 2),
            player_max_health: 20,
            player_attack: (1, 5),
            item_score: 10,
            item_heal: 5,
            kill_score: 20,
            turn_delay_ms: 100,
        }
    }
}

/// Reasons a configuration cannot drive a run
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("room size {0} is too small to have an interior (need at least 3)")]
    RoomTooSmall(i32),
    #[error("a {room}x{room} room does not fit in a {width}x{height} dungeon")]
    RoomDoesNotFit { room: i32, width: i32, height: i32 },
    #[error("range `{name}` is inverted: ({min}, {max})")]
    InvertedRange { name: &'static str, min: u32, max: u32 },
    #[error("range `{0}` must allow at least one")]
    EmptyRange(&'static str),
    #[error("`{0}` must be positive")]
    NotPositive(&'static str),
    #[error("range `{name}` exceeds {limit}")]
    TooLarge { name: &'static str, limit: u32 },
}

impl GameConfig {
    /// Check that a generator driven by this config can always place a room
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.room_size < 3 {
            return Err(ConfigError::RoomTooSmall(self.room_size));
        }
        // Top-left corners are sampled from [0, extent - room - 1]
        if self.dungeon_width - self.room_size - 1 < 0 || self.dungeon_height - self.room_size - 1 < 0 {
            return Err(ConfigError::RoomDoesNotFit {
                room: self.room_size,
                width: self.dungeon_width,
                height: self.dungeon_height,
            });
        }

        for (name, (min, max)) in [
            ("room_count", self.room_count),
            ("enemies_per_room", self.enemies_per_room),
            ("items_per_room", self.items_per_room),
            ("enemy_attack", self.enemy_attack),
            ("player_attack", self.player_attack),
        ] {
            if min > max {
                return Err(ConfigError::InvertedRange { name, min, max });
            }
        }
        for (name, (_, max)) in [("enemy_attack", self.enemy_attack), ("player_attack", self.player_attack)] {
            if max > i32::MAX as u32 {
                return Err(ConfigError::TooLarge { name, limit: i32::MAX as u32 });
            }
        }
        if self.room_count.1 == 0 {
            return Err(ConfigError::EmptyRange("room_count"));
        }

        if self.enemy_health <= 0 {
            return Err(ConfigError::NotPositive("enemy_health"));
        }
        if self.player_max_health <= 0 {
            return Err(ConfigError::NotPositive("player_max_health"));
        }
        Ok(())
    }
}
