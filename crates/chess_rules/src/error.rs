//! Errors reported by the rules engine.
//!
//! Every variant signals caller misuse; the engine itself has no internal
//! failure modes.

/// Domain errors for the rules engine.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RulesError {
    #[error("illegal move: {notation} is not in the current legal move set")]
    IllegalMove { notation: String },

    #[error("invalid square name: {0:?}")]
    InvalidSquare(String),

    #[error("invalid piece code: {0:?}")]
    InvalidPieceCode(String),

    #[error("invalid board layout: {0}")]
    InvalidLayout(String),
}
