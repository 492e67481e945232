//! Rooms and corridors
//!
//! Axis-aligned rectangles and the containment tests the rest of the game
//! builds on.

use crate::entities::Position;

/// A walled, square room. The outer ring of cells is wall; the rest is floor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Room {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
    /// Index of the room in creation order
    pub id: usize,
}

impl Room {
    pub fn new(x: i32, y: i32, width: i32, height: i32, id: usize) -> Self {
        Self { x, y, width, height, id }
    }

    /// Center cell (rounded towards the top-left)
    pub fn center(&self) -> Position {
        Position::new(self.x + self.width / 2, self.y + self.height / 2)
    }

    /// Half-open rectangle overlap. Rooms that only share an edge line do not
    /// overlap.
    pub fn overlaps(&self, other: &Room) -> bool {
        self.x < other.x + other.width
            && self.x + self.width > other.x
            && self.y < other.y + other.height
            && self.y + self.height > other.y
    }

    /// Whether the point lies anywhere in the room, walls included
    pub fn contains(&self, x: i32, y: i32) -> bool {
        self.x <= x && x < self.x + self.width && self.y <= y && y < self.y + self.height
    }

    /// Whether the point lies strictly inside the wall ring
    pub fn interior_contains(&self, x: i32, y: i32) -> bool {
        self.x < x && x < self.x + self.width - 1 && self.y < y && y < self.y + self.height - 1
    }

    /// Whether the point is on the wall ring
    pub fn is_wall(&self, x: i32, y: i32) -> bool {
        self.contains(x, y) && !self.interior_contains(x, y)
    }
}

/// Orientation of a corridor leg
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CorridorKind {
    Horizontal,
    Vertical,
}

/// A one-cell-thick walkable strip
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Corridor {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
    pub kind: CorridorKind,
}

impl Corridor {
    /// Horizontal strip on row `y` covering every column between `x1` and
    /// `x2`, both ends included
    pub fn horizontal(x1: i32, x2: i32, y: i32) -> Self {
        Self {
            x: x1.min(x2),
            y,
            width: (x1 - x2).abs() + 1,
            height: 1,
            kind: CorridorKind::Horizontal,
        }
    }

    /// Vertical strip on column `x` covering every row between `y1` and `y2`,
    /// both ends included
    pub fn vertical(y1: i32, y2: i32, x: i32) -> Self {
        Self {
            x,
            y: y1.min(y2),
            width: 1,
            height: (y1 - y2).abs() + 1,
            kind: CorridorKind::Vertical,
        }
    }

    pub fn contains(&self, x: i32, y: i32) -> bool {
        self.x <= x && x < self.x + self.width && self.y <= y && y < self.y + self.height
    }

    /// Every cell of the strip
    pub fn cells(&self) -> impl Iterator<Item = Position> + '_ {
        (self.y..self.y + self.height)
            .flat_map(move |y| (self.x..self.x + self.width).map(move |x| Position::new(x, y)))
    }
}
