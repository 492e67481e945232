//! User Interface module
//!
//! Terminal UI using ratatui. Reads the game state after every intent and
//! never feeds anything back except intents.

pub mod app;
pub mod input;

pub use app::App;
pub use input::intent_for_key;
