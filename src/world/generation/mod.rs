//! Procedural dungeon generation

pub mod rooms;

pub use rooms::{connect_rooms, place_rooms};

use rand::Rng;

use super::Dungeon;
use crate::data::GameConfig;

/// Generate a full dungeon layout: rooms first, then the corridor chain
pub fn generate_dungeon(rng: &mut impl Rng, config: &GameConfig) -> Dungeon {
    let rooms = place_rooms(rng, config);
    let dungeon = Dungeon::from_rooms(config.dungeon_width, config.dungeon_height, rooms);

    log::info!(
        "Generated {}x{} dungeon with {} rooms and {} corridors",
        dungeon.width,
        dungeon.height,
        dungeon.rooms().len(),
        dungeon.corridors().len()
    );
    dungeon
}
