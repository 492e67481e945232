//! Entity data and population

pub mod components;
pub mod spawn;

pub use components::{Enemy, Health, Item, Player, Position};
pub use spawn::{place_player, populate, roll_player_attack};
