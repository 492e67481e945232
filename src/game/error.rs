//! Caller-contract violations of the turn engine

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TurnError {
    /// An intent arrived after the run reached a terminal state
    #[error("the run has already ended (final score {score})")]
    RunEnded { score: u32 },
    /// A character that does not name an intent
    #[error("unknown intent '{0}'")]
    UnknownIntent(char),
}
