//! QuestionGenerator trait 定義
//!
//! 外部のコンテンツ生成コラボレーター（生成 AI バックエンド）への
//! インターフェース。失敗はそのままルーム作成の失敗として伝播します。

use async_trait::async_trait;
use thiserror::Error;

use super::{Question, QuizConfig};

/// Errors from the content-generation collaborator.
#[derive(Debug, Error)]
pub enum QuestionGenError {
    /// The backend was unreachable or returned a non-success status
    #[error("Content generation request failed: {0}")]
    RequestFailed(String),

    /// The backend answered with a body we could not interpret
    #[error("Content generation returned an invalid response: {0}")]
    InvalidResponse(String),
}

/// Content-generation collaborator.
///
/// The create-room path blocks on this call; if generation fails, room
/// creation fails entirely (atomic all-or-nothing).
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait QuestionGenerator: Send + Sync {
    /// Generate an ordered question set for the given configuration.
    ///
    /// Implementations should return exactly `config.quiz_length`
    /// questions; the domain validates the count when building the room.
    async fn generate(&self, config: &QuizConfig) -> Result<Vec<Question>, QuestionGenError>;
}
