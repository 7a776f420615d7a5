//! UseCase 層のエラー型定義
//!
//! 全アクションハンドラが返す統一エラー分類。UI 層がこの分類を
//! HTTP ステータスコードへ変換します（NotFound → 404、Forbidden → 403、
//! BadRequest → 400、ServiceUnavailable → 503、Internal → 500）。

use thiserror::Error;

use crate::domain::{DomainError, QuestionGenError, RepositoryError};

/// Uniform error taxonomy for every room action.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ActionError {
    /// Room code does not exist (or has expired, or is malformed)
    #[error("Room not found")]
    RoomNotFound,

    /// The caller is not allowed to perform this action in this state
    #[error("{0}")]
    Forbidden(String),

    /// The request itself is invalid
    #[error("{0}")]
    BadRequest(String),

    /// The store or the content-generation collaborator failed
    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    /// Anything else
    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<DomainError> for ActionError {
    fn from(err: DomainError) -> Self {
        match err {
            // A malformed code cannot name an existing room
            DomainError::InvalidRoomCode(_) => ActionError::RoomNotFound,
            DomainError::InvalidUsername(_) => ActionError::BadRequest(err.to_string()),
            // Generation handed back a broken question set
            DomainError::QuestionCountMismatch { .. } => {
                ActionError::ServiceUnavailable(err.to_string())
            }
            DomainError::NotHost(_)
            | DomainError::RoomNotJoinable
            | DomainError::RoomNotInProgress
            | DomainError::PlayerNotInRoom(_)
            | DomainError::QuestionIndexOutOfRange { .. } => {
                ActionError::Forbidden(err.to_string())
            }
        }
    }
}

impl From<RepositoryError> for ActionError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::RoomNotFound => ActionError::RoomNotFound,
            RepositoryError::RoomCodeTaken(_) => ActionError::Internal(err.to_string()),
            RepositoryError::Storage(_) => ActionError::ServiceUnavailable(err.to_string()),
        }
    }
}

impl From<QuestionGenError> for ActionError {
    fn from(err: QuestionGenError) -> Self {
        ActionError::ServiceUnavailable(err.to_string())
    }
}
