//! World module
//!
//! Room and corridor geometry, the dungeon layout, and its generation.

pub mod geometry;
pub mod map;
pub mod tile;
pub mod generation;

pub use geometry::{Corridor, CorridorKind, Room};
pub use map::Dungeon;
pub use tile::TileType;
