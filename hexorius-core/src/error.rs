//! Error types for the rules engine and its configuration

use crate::board::Hex;

/// Errors surfaced by the core
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("Illegal move from ({},{}) to ({},{})", from.q, from.r, to.q, to.r)]
    IllegalMove { from: Hex, to: Hex },

    #[error("Invalid level '{level}': {reason}")]
    InvalidLevel { level: String, reason: String },

    #[error("Unknown difficulty: {0}")]
    UnknownDifficulty(String),

    #[error("Unknown level: {0}")]
    UnknownLevel(String),
}

pub type Result<T> = std::result::Result<T, GameError>;
