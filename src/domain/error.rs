//! ドメイン層のエラー型定義

use thiserror::Error;

/// Errors raised by domain model validation and lifecycle rules.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    /// Room code is not 6 characters from the room-code alphabet
    #[error("Invalid room code: '{0}'")]
    InvalidRoomCode(String),

    /// Username is empty or too long
    #[error("Invalid username: '{0}'")]
    InvalidUsername(String),

    /// Generated question count does not match the configured quiz length
    #[error("Question count mismatch: expected {expected}, got {actual}")]
    QuestionCountMismatch { expected: usize, actual: usize },

    /// A lifecycle-advancing action was attempted by a non-host player
    #[error("Player '{0}' is not the host of this room")]
    NotHost(String),

    /// Join attempted after the game has left the lobby
    #[error("Room is no longer accepting players")]
    RoomNotJoinable,

    /// Answer submitted while the room is not in progress
    #[error("Room is not in progress")]
    RoomNotInProgress,

    /// Answer submitted by a player who never joined the room
    #[error("Player '{0}' is not a member of this room")]
    PlayerNotInRoom(String),

    /// Answer submitted for a question index outside the quiz
    #[error("Question index {index} is out of range for quiz length {quiz_length}")]
    QuestionIndexOutOfRange { index: usize, quiz_length: usize },
}

/// Errors raised by the room store.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RepositoryError {
    /// Room does not exist, or its TTL has expired
    #[error("Room not found")]
    RoomNotFound,

    /// Insert attempted with a room code that is already committed
    #[error("Room code '{0}' is already in use")]
    RoomCodeTaken(String),

    /// The underlying store is unreachable or misbehaving
    #[error("Store error: {0}")]
    Storage(String),
}
