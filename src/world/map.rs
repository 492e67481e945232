//! Dungeon layout
//!
//! The immutable arrangement of rooms and corridors, and the traversability
//! rules derived from it.

use super::geometry::{Corridor, Room};
use super::tile::TileType;
use crate::entities::Position;

/// A generated dungeon floor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dungeon {
    pub width: i32,
    pub height: i32,
    rooms: Vec<Room>,
    corridors: Vec<Corridor>,
}

impl Dungeon {
    /// Build a dungeon from placed rooms, connecting them with the corridor chain
    pub fn from_rooms(width: i32, height: i32, rooms: Vec<Room>) -> Self {
        let corridors = super::generation::connect_rooms(&rooms);
        Self::with_corridors(width, height, rooms, corridors)
    }

    /// Build a dungeon from explicit rooms and corridors
    pub fn with_corridors(width: i32, height: i32, rooms: Vec<Room>, corridors: Vec<Corridor>) -> Self {
        Self {
            width,
            height,
            rooms,
            corridors,
        }
    }

    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    pub fn corridors(&self) -> &[Corridor] {
        &self.corridors
    }

    /// Check if coordinates are within bounds
    #[inline]
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && x < self.width && y >= 0 && y < self.height
    }

    /// Whether something may stand on `(x, y)`: any room interior or any
    /// corridor cell. Corridors have no walls of their own, so a corridor that
    /// cuts through a room wall opens that wall.
    pub fn is_passable(&self, x: i32, y: i32) -> bool {
        self.is_inside_any_room_interior(x, y) || self.corridors.iter().any(|c| c.contains(x, y))
    }

    /// Room-only interior test. The renderer only draws entities for which this
    /// holds, so anything standing mid-corridor is hidden.
    pub fn is_inside_any_room_interior(&self, x: i32, y: i32) -> bool {
        self.rooms.iter().any(|r| r.interior_contains(x, y))
    }

    /// First room in creation order whose bounds (walls included) hold the point
    pub fn room_containing(&self, x: i32, y: i32) -> Option<&Room> {
        self.rooms.iter().find(|r| r.contains(x, y))
    }

    /// What to draw at a cell. Corridors overwrite the walls they cross.
    pub fn tile_at(&self, x: i32, y: i32) -> TileType {
        if self.is_inside_any_room_interior(x, y) {
            TileType::Floor
        } else if self.corridors.iter().any(|c| c.contains(x, y)) {
            TileType::Corridor
        } else if self.rooms.iter().any(|r| r.is_wall(x, y)) {
            TileType::Wall
        } else {
            TileType::Void
        }
    }

    /// Every passable cell, row by row
    pub fn passable_positions(&self) -> Vec<Position> {
        (0..self.height)
            .flat_map(|y| (0..self.width).map(move |x| Position::new(x, y)))
            .filter(|p| self.is_passable(p.x, p.y))
            .collect()
    }
}
