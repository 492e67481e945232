//! Delve - A small terminal roguelike
//!
//! Walk a freshly generated dungeon, collect treasure and fight whatever
//! stumbles towards you until you fall or flee.

pub mod data;
pub mod world;
pub mod entities;
pub mod combat;
pub mod game;
pub mod ui;

// Re-export commonly used types
pub use data::GameConfig;
pub use game::{Game, GameState, Intent};
pub use world::Dungeon;
