//! Game module - Core game logic and state management

mod ai;
mod error;
mod state;
mod turn;

pub use error::TurnError;
pub use state::{Game, GameError, GameMessage, GameState, MessageCategory};
pub use turn::{Intent, TurnReport};
