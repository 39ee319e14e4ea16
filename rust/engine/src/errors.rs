use thiserror::Error;

/// Failures raised by the hand-written containers.
///
/// Emptiness is never an error: operations that may find nothing return
/// `Option::None` instead. Absent keys and values cannot be expressed, so
/// out-of-range indexing is the only failure left.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ContainerError {
    #[error("Index {index} out of range [0, {len})")]
    OutOfRange { index: usize, len: usize },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    #[error("Unknown participant: {0}")]
    UnknownParticipant(String),
    #[error("No round in progress")]
    RoundNotInProgress,
    #[error("Round already in progress")]
    RoundAlreadyInProgress,
    #[error("It's {actual}'s turn, not {expected}'s")]
    NotParticipantsTurn { expected: String, actual: String },
    #[error("{0} has already planted")]
    HandAlreadyPlanted(String),
    #[error("Deck exhausted")]
    DeckExhausted,
    #[error(transparent)]
    Container(#[from] ContainerError),
}
