use std::fmt;
use thiserror::Error;

/// Errors that can occur while driving a round.
///
/// None of these are fatal: the engine state is left untouched and the
/// caller recovers by picking a player, another cell, or resetting.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    #[error("no player selected: choose who moves first")]
    NoPlayerSelected,

    #[error("a round is already under way; reset it first")]
    RoundInProgress,

    #[error("invalid move: {0}")]
    InvalidMove(MoveRejection),

    #[error("no legal moves available")]
    NoLegalMoves,

    #[error("opponent chose an invalid move: {0}")]
    OpponentMoveRejected(MoveRejection),
}

/// Why a move was turned down.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveRejection {
    /// Cell index outside 0-8.
    OutOfRange(usize),
    /// Cell already holds a mark.
    Occupied(usize),
    /// The other side is to move.
    NotYourTurn,
    /// The round already has a winner or is drawn.
    RoundOver,
}

impl fmt::Display for MoveRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveRejection::OutOfRange(cell) => write!(f, "cell {} is off the board", cell),
            MoveRejection::Occupied(cell) => write!(f, "cell {} is already taken", cell),
            MoveRejection::NotYourTurn => write!(f, "it is not your turn"),
            MoveRejection::RoundOver => write!(f, "the round is over"),
        }
    }
}

impl From<MoveRejection> for GameError {
    fn from(rejection: MoveRejection) -> Self {
        GameError::InvalidMove(rejection)
    }
}

/// Convenience Result type for game operations
pub type Result<T> = std::result::Result<T, GameError>;
