//! Tile definitions
//!
//! What each cell of the dungeon looks like when drawn.

/// Kinds of cells in the rasterised dungeon
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TileType {
    /// Outside every room and corridor
    Void,
    Wall,
    Floor,
    Corridor,
}

impl TileType {
    pub fn glyph(&self) -> char {
        match self {
            TileType::Void => ' ',
            TileType::Wall => '#',
            TileType::Floor => '.',
            TileType::Corridor => '.',
        }
    }

    pub fn fg_color(&self) -> (u8, u8, u8) {
        match self {
            TileType::Void => (0, 0, 0),
            TileType::Wall => (220, 220, 220),
            TileType::Floor => (140, 140, 140),
            TileType::Corridor => (110, 110, 110),
        }
    }
}
