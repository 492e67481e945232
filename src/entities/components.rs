//! Entity data
//!
//! The player, enemies and items, plus the small value types they share.

// ============================================================================
// Position
// ============================================================================

/// Position in the dungeon, in logical cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Position shifted by a delta
    pub fn offset(&self, dx: i32, dy: i32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    /// Greedy single step towards `target`, one cell per axis (diagonals allowed)
    pub fn step_towards(&self, target: Position) -> (i32, i32) {
        ((target.x - self.x).signum(), (target.y - self.y).signum())
    }
}

// ============================================================================
// Health
// ============================================================================

/// Health pool, never below zero
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Health {
    pub current: i32,
    pub max: i32,
}

impl Health {
    pub fn new(max: i32) -> Self {
        Self { current: max, max }
    }

    /// Subtract `amount`, clamping at zero. Returns the damage actually taken.
    pub fn take_damage(&mut self, amount: i32) -> i32 {
        let actual = amount.min(self.current);
        self.current -= actual;
        actual
    }

    /// Add `amount`, capped at max. Returns the amount actually healed.
    pub fn heal(&mut self, amount: i32) -> i32 {
        let actual = amount.min(self.max - self.current).max(0);
        self.current += actual;
        actual
    }

    pub fn is_dead(&self) -> bool {
        self.current <= 0
    }
}

// ============================================================================
// Entities
// ============================================================================

/// The player character
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    pub pos: Position,
    pub health: Health,
    /// Drawn once per run
    pub attack: i32,
    /// Index into the dungeon's rooms
    pub current_room: usize,
}

impl Player {
    pub const GLYPH: char = '@';

    pub fn new(pos: Position, max_health: i32, attack: i32, current_room: usize) -> Self {
        Self {
            pos,
            health: Health::new(max_health),
            attack,
            current_room,
        }
    }
}

/// A hostile creature. Enemies carry raw health rather than a `Health` pool
/// because they are never healed and die at or below zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Enemy {
    pub pos: Position,
    pub health: i32,
    pub attack: i32,
}

impl Enemy {
    pub const GLYPH: char = 'E';

    pub fn new(pos: Position, health: i32, attack: i32) -> Self {
        Self { pos, health, attack }
    }

    pub fn is_dead(&self) -> bool {
        self.health <= 0
    }
}

/// A collectible lying on the floor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Item {
    pub pos: Position,
}

impl Item {
    pub const GLYPH: char = '$';

    pub fn new(pos: Position) -> Self {
        Self { pos }
    }
}
